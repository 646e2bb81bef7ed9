//! Wiki, code-snippet and example page lookup.

use crate::context::ServerContext;
use crate::format::{NO_MATCH_TEXT, escape_markdown, format_wiki_page, link};
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WikiRequest {
    /// Page to look up, e.g. `webhooks` or `echobot`
    pub query: String,
}

/// Execute the wiki command: the single best page, or the no-match reply.
pub fn handle_wiki(context: &ServerContext, request: WikiRequest) -> String {
    let config = context.config();
    let query = request.query.trim();

    context
        .engine()
        .lookup_pages(query, 1, config.thresholds.wiki)
        .and_then(|pages| pages.into_iter().next())
        .map_or_else(
            || NO_MATCH_TEXT.to_string(),
            |page| format_wiki_page(&page, &config.project_name),
        )
}

/// Every page in browse order, one Markdown link per line.
pub fn handle_list_pages(context: &ServerContext) -> String {
    let mut output = format!("Wiki of _{}_\n\n", context.config().project_name);

    for page in context.index().pages() {
        output
            .write_fmt(format_args!(
                "- {}\n",
                link(&escape_markdown(&page.name), &page.url)
            ))
            .unwrap();
    }

    output
}
