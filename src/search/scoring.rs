//! Symbol relevance weighting and display-name derivation.
//!
//! This module provides the per-kind score multipliers applied to symbol matches,
//! the key used to cross-reference a symbol into the official API reference, and
//! the trimmed display path shown to users.

use super::fuzz::ratio;
use crate::types::SymbolKind;

/// Score multiplier for a symbol kind.
///
/// Modules tend to win too often on short queries and attributes on long dotted
/// ones; classes are what people usually ask for. The values are empirical.
pub fn kind_weight(kind: SymbolKind) -> f64 {
    match kind {
        SymbolKind::Module => 0.75,
        SymbolKind::Class => 1.10,
        SymbolKind::Attribute => 0.85,
        _ => 1.0,
    }
}

/// Score a reversed query path against a symbol path.
///
/// Segments are compared from the most specific end, pairing stops at the
/// shorter path. One whole-string ratio of `query` against `qualified_name` is
/// added, and the sum is multiplied by [`kind_weight`].
pub fn symbol_score(
    query: &str,
    query_reversed: &[&str],
    segments: &[String],
    qualified_name: &str,
    kind: SymbolKind,
) -> f64 {
    let segment_score: f64 = query_reversed
        .iter()
        .zip(segments.iter().rev())
        .map(|(q, s)| ratio(q, s))
        .sum();

    (segment_score + ratio(query, qualified_name)) * kind_weight(kind)
}

/// Key into the official anchor table for a symbol, if its kind has one.
///
/// Classes and methods use their last segment, attributes the segment before
/// it (the owning class). The key is lowercased with underscores removed, so
/// `send_message` becomes `sendmessage`.
pub fn official_key(segments: &[String], kind: SymbolKind) -> Option<String> {
    let segment = match kind {
        SymbolKind::Class | SymbolKind::Method => segments.last()?,
        SymbolKind::Attribute => segments.len().checked_sub(2).map(|idx| &segments[idx])?,
        _ => return None,
    };
    Some(normalize_key(segment))
}

/// Lowercase and strip underscores.
pub fn normalize_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Display path of a symbol.
///
/// Drops the package segment, and also the next one when it repeats the
/// segment after it (`pkg.Foo.Foo.method` becomes `Foo.method`). A single
/// segment path is shown whole.
pub fn short_name(segments: &[String]) -> String {
    match segments {
        [] => String::new(),
        [only] => only.clone(),
        [_, second, third, ..] if second.to_lowercase() == third.to_lowercase() => {
            segments[2..].join(".")
        }
        [_, rest @ ..] => rest.join("."),
    }
}
