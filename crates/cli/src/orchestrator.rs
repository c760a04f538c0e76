//! Drives a run: list unread entries, convert them and write the books.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use eyre::{Result, WrapErr};
use fluxpub_export::{
    AssetFetcher, CombinedBook, ContentRewriter, EpubWriter, RewriteOptions, RewrittenContent,
    single_entry_book,
};
use fluxpub_source::EntrySource;
use fluxpub_types::{Entry, EntryId};

use crate::config::{Config, OutputMode};
use crate::utils::{combined_file_name, output_file_name};

/// Outcome of one run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Books written, in the order they were written.
    pub written: Vec<PathBuf>,
    /// Entries that could not be converted, with the reason.
    pub failed: Vec<(EntryId, String)>,
    /// Entries listed but not converted because of a dry run.
    pub skipped: usize,
    /// The unread listing failed and nothing was attempted.
    pub aborted: bool,
}

impl RunSummary {
    pub fn aborted() -> Self {
        Self {
            aborted: true,
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        !self.aborted && self.failed.is_empty()
    }
}

pub struct Orchestrator {
    config: Config,
    source: Arc<dyn EntrySource>,
    fetcher: Arc<dyn AssetFetcher>,
    assembled_at: Option<DateTime<Utc>>,
}

impl Orchestrator {
    pub fn new(
        config: &Config,
        source: Arc<dyn EntrySource>,
        fetcher: Arc<dyn AssetFetcher>,
    ) -> Self {
        Self {
            config: config.clone(),
            source,
            fetcher,
            assembled_at: None,
        }
    }

    /// Fix the timestamp used for combined books instead of the current time.
    pub fn with_assembled_at(mut self, assembled_at: DateTime<Utc>) -> Self {
        self.assembled_at = Some(assembled_at);
        self
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let entries = match self.source.list_unread(self.config.limit).await {
            Ok(entries) => entries,
            Err(error) => {
                tracing::error!("Failed to list unread entries: {}", error);
                return Ok(RunSummary::aborted());
            }
        };

        if entries.is_empty() {
            println!("No unread entries found.");
            return Ok(RunSummary::default());
        }

        tracing::info!(
            "Converting {} unread entries ({:?})",
            entries.len(),
            self.config.mode
        );

        if self.config.dry_run {
            return Ok(self.plan(&entries));
        }

        tokio::fs::create_dir_all(&self.config.output_dir)
            .await
            .wrap_err_with(|| {
                format!(
                    "Failed to create output directory {}",
                    self.config.output_dir.display()
                )
            })?;

        match self.config.mode {
            OutputMode::PerEntry => Ok(self.run_per_entry(entries).await),
            OutputMode::Combined => self.run_combined(entries).await,
        }
    }

    fn plan(&self, entries: &[Entry]) -> RunSummary {
        match self.config.mode {
            OutputMode::PerEntry => {
                for entry in entries {
                    println!(
                        "Would write {} -> {}",
                        entry.title,
                        self.config.output_dir.join(output_file_name(entry)).display()
                    );
                }
            }
            OutputMode::Combined => {
                println!(
                    "Would combine {} entries into {}",
                    entries.len(),
                    self.combined_path().display()
                );
                for entry in entries {
                    println!("  {} {}", entry.id, entry.title);
                }
            }
        }

        RunSummary {
            skipped: entries.len(),
            ..RunSummary::default()
        }
    }

    async fn run_per_entry(&self, entries: Vec<Entry>) -> RunSummary {
        let mut summary = RunSummary::default();

        for entry in entries {
            let id = entry.id;
            match self.write_single(entry).await {
                Ok(path) => {
                    println!("Created EPUB: {}", path.display());
                    summary.written.push(path);
                }
                Err(error) => {
                    tracing::error!("Failed to convert entry {}: {:#}", id, error);
                    summary.failed.push((id, format!("{:#}", error)));
                }
            }
        }

        summary
    }

    async fn write_single(&self, entry: Entry) -> Result<PathBuf> {
        let (entry, content) = self.prepare(entry).await?;
        let book = single_entry_book(&entry, content)?;
        let path = self.config.output_dir.join(output_file_name(&entry));

        EpubWriter::new().write_to_path(&book, &path).await?;
        Ok(path)
    }

    async fn run_combined(&self, entries: Vec<Entry>) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        let mut combined = CombinedBook::new(self.assembled_at());

        for entry in entries {
            let id = entry.id;
            let pushed = match self.prepare(entry).await {
                Ok((entry, content)) => combined
                    .push_entry(&entry, content)
                    .map_err(eyre::Report::from),
                Err(error) => Err(error),
            };
            if let Err(error) = pushed {
                tracing::warn!("Leaving entry {} out of the combined book: {:#}", id, error);
                summary.failed.push((id, format!("{:#}", error)));
            }
        }

        if combined.is_empty() {
            tracing::error!("No entry could be converted, combined book not written");
            return Ok(summary);
        }

        let path = self.combined_path();
        let book = combined.finish();
        EpubWriter::new()
            .write_to_path(&book, &path)
            .await
            .wrap_err_with(|| format!("Failed to write combined book {}", path.display()))?;

        println!(
            "Created EPUB: {} ({} entries)",
            path.display(),
            book.chapters().len()
        );
        summary.written.push(path);
        Ok(summary)
    }

    /// Make sure the entry has a body, then sanitize it and embed its images.
    async fn prepare(&self, entry: Entry) -> Result<(Entry, RewrittenContent)> {
        let entry = if entry.needs_content() {
            tracing::debug!("Entry {} listed without content, fetching it", entry.id);
            self.source
                .fetch_full(entry.id)
                .await
                .wrap_err_with(|| format!("Failed to fetch entry {}", entry.id))?
        } else {
            entry
        };

        let options = RewriteOptions::new()
            .with_data_urls(self.config.data_urls)
            .with_base_url(entry.url.as_deref());
        let html = entry.content.as_deref().unwrap_or_default();
        let content = ContentRewriter::new(&*self.fetcher, options)
            .rewrite(html)
            .await?;

        tracing::debug!(
            "Entry {}: {} images embedded, {} dropped",
            entry.id,
            content.report.embedded,
            content.report.dropped
        );
        Ok((entry, content))
    }

    fn assembled_at(&self) -> DateTime<Utc> {
        self.assembled_at.unwrap_or_else(Utc::now)
    }

    fn combined_path(&self) -> PathBuf {
        self.config
            .output_dir
            .join(combined_file_name(self.assembled_at().date_naive()))
    }
}
