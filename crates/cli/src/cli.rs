use std::path::PathBuf;

/// Convert unread Miniflux entries into EPUB books.
#[derive(clap::Parser, Debug, Default, Clone)]
#[clap(name = "fluxpub", version)]
pub struct Cli {
    /// Maximum number of unread entries to convert
    #[clap(short = 'n', long)]
    pub limit: Option<usize>,
    /// Bundle all entries into a single book instead of one book per entry
    #[clap(long)]
    pub combined: bool,
    /// Directory the books are written to (default: epubs)
    #[clap(short = 'o', long)]
    pub output_dir: Option<PathBuf>,
    /// Leave inline data: images in place (default)
    #[clap(long, conflicts_with = "drop_data_urls")]
    pub keep_data_urls: bool,
    /// Remove inline data: images from the content
    #[clap(long)]
    pub drop_data_urls: bool,
    /// Timeout for each image download, in seconds
    #[clap(long, value_name = "SECS")]
    pub timeout: Option<u64>,
    /// List the entries and target files without downloading or writing anything
    #[clap(long)]
    pub dry_run: bool,
}
