pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod search;
pub mod server;
pub mod sources;
pub mod tools;
pub mod tracing;
pub mod types;

pub use config::Config;
pub use context::ServerContext;
pub use error::{Result, SourceError};
pub use search::{Annotator, Expansion, MatchEngine, ReferenceIndex, ScoredCollector};
pub use server::DocsServer;
pub use types::{OfficialAnchor, PageEntry, SymbolEntry, SymbolKind, SymbolMatch};
