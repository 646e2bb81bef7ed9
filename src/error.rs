//! Error handling types and utilities.

use thiserror::Error;

/// A specialized Result type for ptb-docs-mcp operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error raised while fetching or decoding a reference source.
///
/// Every variant is fatal to index construction.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source could not be downloaded.
    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
    /// The documentation inventory is not a valid version 2 inventory.
    #[error("Invalid documentation inventory: {0}")]
    Inventory(String),
    /// An HTML page lacks the structure the index is built from.
    #[error("Unexpected page structure in {source_name}: {reason}")]
    Html {
        source_name: &'static str,
        reason: String,
    },
    /// A link could not be resolved against its page.
    #[error("Cannot resolve link '{href}' against {base}: {reason}")]
    Url {
        base: String,
        href: String,
        reason: String,
    },
}
