//! Markdown rendering of lookup results.
//!
//! Output targets the legacy Telegram Markdown dialect: `*bold*`, `_italic_`,
//! `[text](url)`, with `\` escapes for user-supplied text.

use crate::types::{PageEntry, SymbolMatch};
use std::fmt::Write as _;

/// Reply used whenever a query matches nothing.
pub const NO_MATCH_TEXT: &str =
    "Sorry, your search term didn't match anything, please edit your message to search again.";

/// Link label pointing at the official API reference.
pub const TELEGRAM_SUPERSCRIPT: &str = "ᵗᵉˡᵉᵍʳᵃᵐ";

/// Suffix marking an annotated token that resolved to nothing.
pub const NOT_FOUND_MARKER: char = '❓';

/// Escape Markdown control characters in user-supplied text.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// `[text](url)`
pub fn link(text: &str, url: &str) -> String {
    format!("[{}]({})", text, url)
}

/// Documentation reply for a matched symbol.
pub fn format_symbol(symbol: &SymbolMatch, project: &str) -> String {
    let mut output = format!(
        "*{}*\n_{}_ documentation for this {}:\n{}",
        symbol.short_name,
        project,
        symbol.kind,
        link(&symbol.full_name, &symbol.url)
    );

    if let Some(official) = &symbol.official {
        output
            .write_fmt(format_args!(
                "\n\nThe official documentation has more info about {}.",
                link(&official.name, &official.url)
            ))
            .unwrap();
    }

    output
}

/// Wiki reply for a single page.
pub fn format_wiki_page(page: &PageEntry, project: &str) -> String {
    format!(
        "Github wiki for _{}_\n{}",
        project,
        link(&escape_markdown(&page.name), &page.url)
    )
}

/// Browse-mode reply for a single page.
pub fn format_browse_page(page: &PageEntry, project: &str) -> String {
    format!(
        "Wiki of _{}_\n{}",
        project,
        link(&escape_markdown(&page.name), &page.url)
    )
}
