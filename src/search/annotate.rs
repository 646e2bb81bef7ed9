//! Expansion of marker-delimited tokens into documentation links.
//!
//! In `I need an +InlineQueryHandler+ here`, the token between the markers is
//! looked up as a symbol, then as a page, and replaced by a link to whichever
//! matched. Tokens that match nothing are kept and flagged with `❓`.

use super::engine::MatchEngine;
use crate::format::{NOT_FOUND_MARKER, TELEGRAM_SUPERSCRIPT, escape_markdown, link};
use regex::Regex;

/// Default minimum score for resolving a token.
pub const DEFAULT_ANNOTATE_THRESHOLD: f64 = 95.0;

/// Result of expanding a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// What each token occurrence resolved to, in order of appearance.
    pub labels: Vec<String>,
    /// The text with every token replaced.
    pub text: String,
}

/// Resolves marker-delimited tokens through a [`MatchEngine`].
#[derive(Debug, Clone)]
pub struct Annotator {
    engine: MatchEngine,
    pattern: Regex,
    threshold: f64,
}

impl Annotator {
    pub fn new(engine: MatchEngine, marker: char, threshold: f64) -> Self {
        let marker = regex::escape(&marker.to_string());
        let pattern = Regex::new(&format!("{marker}([a-zA-Z_.0-9]*){marker}"))
            .expect("an escaped marker always yields a valid pattern");
        Self {
            engine,
            pattern,
            threshold,
        }
    }

    /// Replace every delimited token of `text`, left to right.
    ///
    /// With `official_links`, symbols that have an official API counterpart get
    /// an extra superscript link to it. Returns `None` when `text` has no token.
    pub fn expand(&self, text: &str, official_links: bool) -> Option<Expansion> {
        let mut labels = Vec::new();
        let mut output = String::with_capacity(text.len());
        let mut last = 0;

        for captures in self.pattern.captures_iter(text) {
            let (Some(whole), Some(token)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            output.push_str(&text[last..whole.start()]);

            let (label, replacement) = self.resolve(token.as_str(), official_links);
            labels.push(label);
            output.push_str(&replacement);

            last = whole.end();
        }

        if labels.is_empty() {
            return None;
        }

        output.push_str(&text[last..]);
        Some(Expansion {
            labels,
            text: output,
        })
    }

    /// Label and replacement text for one token.
    fn resolve(&self, token: &str, official_links: bool) -> (String, String) {
        let escaped = escape_markdown(token);

        if let Some(symbol) = self.engine.lookup_symbol(token, self.threshold) {
            let mut replacement = link(&escaped, &symbol.url);
            if official_links && let Some(official) = &symbol.official {
                replacement.push(' ');
                replacement.push_str(&link(TELEGRAM_SUPERSCRIPT, &official.url));
            }
            tracing::trace!("Token '{}' resolved to symbol {}", token, symbol.full_name);
            return (symbol.short_name, replacement);
        }

        let page_query = token.replace('_', " ");
        if let Some(page) = self
            .engine
            .lookup_pages(&page_query, 1, self.threshold)
            .and_then(|pages| pages.into_iter().next())
        {
            tracing::trace!("Token '{}' resolved to page {}", token, page.name);
            return (page.name, link(&escaped, &page.url));
        }

        tracing::trace!("Token '{}' not found", token);
        (
            format!("{token}{NOT_FOUND_MARKER}"),
            format!("{escaped}{NOT_FOUND_MARKER}"),
        )
    }
}
