//! Fuzzy search over the reference index.
//!
//! This module provides the fuzzy ratios, the index and its ingestion steps,
//! top-K collection, symbol/page lookups and annotated-text expansion.

// Module declarations
pub mod annotate;
pub mod collector;
pub mod engine;
pub mod fuzz;
pub mod index;
pub mod scoring;

// Public re-exports (used via lib.rs)
pub use annotate::{Annotator, DEFAULT_ANNOTATE_THRESHOLD, Expansion};
pub use collector::ScoredCollector;
pub use engine::{DEFAULT_SYMBOL_THRESHOLD, HOME_PAGE_NAME, MatchEngine};
pub use index::{
    AnchorRecord, InventoryRecord, PageLink, ReferenceIndex, ReferenceIndexBuilder, SidebarLink,
};
