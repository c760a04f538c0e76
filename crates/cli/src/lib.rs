//! fluxpub - convert unread Miniflux entries into EPUB books.

pub mod cli;
pub mod config;
pub mod orchestrator;
pub mod utils;

pub use cli::Cli;
pub use config::{Config, ConfigError, OutputMode};
pub use orchestrator::{Orchestrator, RunSummary};
