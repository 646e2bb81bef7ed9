//! Annotated-text expansion: `+Token+` becomes a documentation link.

use crate::context::ServerContext;
use crate::search::Expansion;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ExpandRequest {
    /// Text containing marker-delimited tokens, e.g. `I need a +CommandHandler+`
    pub text: String,
    /// Also link symbols to the official API reference (default: true)
    #[serde(default = "default_official_links")]
    pub official_links: bool,
}

const fn default_official_links() -> bool {
    true
}

/// Expand the request's text, or `None` if it contains no token.
pub fn expand(context: &ServerContext, request: &ExpandRequest) -> Option<Expansion> {
    context
        .annotator()
        .expand(&request.text, request.official_links)
}

/// Execute the expand command.
pub fn handle_expand(context: &ServerContext, request: ExpandRequest) -> String {
    match expand(context, &request) {
        Some(expansion) => {
            tracing::debug!("Expanded tokens: {}", expansion.labels.join(", "));
            expansion.text
        }
        None => format!(
            "No {marker}token{marker} found. Enclose names in '{marker}' to link them.",
            marker = context.config().marker
        ),
    }
}
