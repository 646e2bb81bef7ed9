//! MCP server exposing the documentation lookups as tools.

use crate::context::ServerContext;
use crate::tools::{
    DocsRequest, ExpandRequest, InlineQueryRequest, WikiRequest, handle_docs, handle_expand,
    handle_list_pages, handle_wiki, inline_answers,
};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};

/// MCP server answering documentation, wiki and annotation queries.
#[derive(Clone)]
pub struct DocsServer {
    /// Read-only query state
    context: ServerContext,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for DocsServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocsServer")
            .field("context", &self.context)
            .finish()
    }
}

#[tool_router]
impl DocsServer {
    pub fn new(context: ServerContext) -> Self {
        Self {
            context,
            tool_router: Self::tool_router(),
        }
    }

    pub fn context(&self) -> &ServerContext {
        &self.context
    }

    #[tool(
        description = "Look up a symbol (class, method, function, module, attribute) of the library documentation by fuzzy dotted-path matching. Returns the best match with its documentation link and, when available, the matching official Bot API section."
    )]
    async fn docs(
        &self,
        Parameters(request): Parameters<DocsRequest>,
    ) -> std::result::Result<String, String> {
        Ok(handle_docs(&self.context, request))
    }

    #[tool(
        description = "Find the best matching wiki page, code snippet section or example file by fuzzy name matching."
    )]
    async fn wiki(
        &self,
        Parameters(request): Parameters<WikiRequest>,
    ) -> std::result::Result<String, String> {
        Ok(handle_wiki(&self.context, request))
    }

    #[tool(
        description = "Replace every marker-delimited token (e.g. +InlineQueryHandler+) in a text with a Markdown link to its documentation or wiki page. Unknown tokens are flagged with ❓."
    )]
    async fn expand(
        &self,
        Parameters(request): Parameters<ExpandRequest>,
    ) -> std::result::Result<String, String> {
        Ok(handle_expand(&self.context, request))
    }

    #[tool(
        description = "Compute all inline query answers for a text as JSON (title, description, message_text). An empty query lists every page."
    )]
    async fn inline_query(
        &self,
        Parameters(request): Parameters<InlineQueryRequest>,
    ) -> std::result::Result<String, String> {
        let articles = inline_answers(&self.context, request.query.trim());
        serde_json::to_string_pretty(&articles)
            .map_err(|e| format!("Failed to serialize answers: {}", e))
    }

    #[tool(description = "List every wiki page, code snippet section and example in browse order.")]
    async fn list_pages(&self) -> std::result::Result<String, String> {
        Ok(handle_list_pages(&self.context))
    }
}

#[tool_handler]
impl ServerHandler for DocsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(format!(
                "ptb-docs-mcp: fuzzy lookup of the {} documentation, wiki, code snippets and examples. \
                 Use docs for symbols, wiki for pages, and expand to link {}Name{} tokens inside a text.",
                self.context.config().project_name,
                self.context.config().marker,
                self.context.config().marker,
            ))
    }
}
