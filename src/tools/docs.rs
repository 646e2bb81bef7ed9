//! Documentation lookup for a single symbol.

use crate::context::ServerContext;
use crate::format::{NO_MATCH_TEXT, format_symbol};
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DocsRequest {
    /// Symbol to look up, e.g. `Bot.send_message` or `InlineQueryHandler`
    pub query: String,
}

/// Documentation reply for the best symbol, or `None` if nothing scores above
/// the configured threshold.
pub fn documentation_reply(context: &ServerContext, query: &str) -> Option<String> {
    let config = context.config();
    context
        .engine()
        .lookup_symbol(query, config.thresholds.docs)
        .map(|symbol| format_symbol(&symbol, &config.project_name))
}

/// Execute the docs command. Misses produce the generic no-match reply.
pub fn handle_docs(context: &ServerContext, request: DocsRequest) -> String {
    let query = request.query.trim();
    documentation_reply(context, query).unwrap_or_else(|| {
        tracing::debug!("No documentation match for '{}'", query);
        NO_MATCH_TEXT.to_string()
    })
}
