//! Query resolution against the reference index.

use super::collector::ScoredCollector;
use super::fuzz::partial_ratio;
use super::index::ReferenceIndex;
use super::scoring::{official_key, short_name, symbol_score};
use crate::types::{PageEntry, SymbolEntry, SymbolMatch};
use std::sync::Arc;

/// Default minimum score for [`MatchEngine::lookup_symbol`].
pub const DEFAULT_SYMBOL_THRESHOLD: f64 = 80.0;

/// Display name of the fallback page candidate.
pub const HOME_PAGE_NAME: &str = "HOME";

/// Scores free-text queries against a shared, immutable [`ReferenceIndex`].
///
/// Cloning is cheap; clones share the index.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    index: Arc<ReferenceIndex>,
}

impl MatchEngine {
    pub fn new(index: Arc<ReferenceIndex>) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &ReferenceIndex {
        &self.index
    }

    /// Find the best symbol for a dotted-path-like query.
    ///
    /// Returns `None` unless the weighted score of the best symbol is strictly
    /// above `threshold`. Ties keep the symbol seen first, and a symbol has to
    /// score above zero to be a candidate at all.
    pub fn lookup_symbol(&self, query: &str, threshold: f64) -> Option<SymbolMatch> {
        let query_reversed: Vec<&str> = query.split('.').rev().collect();

        let mut best: Option<&SymbolEntry> = None;
        let mut best_score = 0.0;
        for entry in self.index.symbols() {
            let score = symbol_score(
                query,
                &query_reversed,
                &entry.segments,
                &entry.qualified_name(),
                entry.kind,
            );
            if score > best_score {
                best_score = score;
                best = Some(entry);
            }
        }

        let entry = best?;
        let score = best_score;
        tracing::debug!(
            "Best symbol for '{}': {} ({}) scored {:.1}",
            query,
            entry.qualified_name(),
            entry.kind,
            score
        );
        if score <= threshold {
            return None;
        }

        let official = official_key(&entry.segments, entry.kind)
            .and_then(|key| self.index.official(&key))
            .cloned();

        Some(SymbolMatch {
            short_name: short_name(&entry.segments),
            full_name: entry.qualified_name(),
            kind: entry.kind,
            url: entry.url.clone(),
            official,
            score,
        })
    }

    /// Find up to `amount` pages whose name partially matches `query`.
    ///
    /// A `HOME` candidate scored 0 is always present, so a negative threshold
    /// can return it. With an empty query only that candidate is scored; browse
    /// callers should enumerate [`ReferenceIndex::pages`] instead.
    pub fn lookup_pages(&self, query: &str, amount: usize, threshold: f64) -> Option<Vec<PageEntry>> {
        let mut collector = ScoredCollector::new();
        collector.add(0.0, PageEntry::new(HOME_PAGE_NAME, self.index.home_url()));

        if !query.is_empty() {
            for page in self.index.pages() {
                collector.add(partial_ratio(query, &page.name), page.clone());
            }
        }

        tracing::trace!(
            "Ranking {} page candidates for '{}'",
            collector.len(),
            query
        );
        collector.into_ranked(amount, threshold)
    }
}
