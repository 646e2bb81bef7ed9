use anyhow::Context;
use clap::Parser;
use ptb_docs_mcp::cli::{Cli, Commands};
use ptb_docs_mcp::tools::{
    DocsRequest, ExpandRequest, WikiRequest, handle_docs, handle_expand, handle_list_pages,
    handle_wiki, inline_answers,
};
use ptb_docs_mcp::tracing::LogFormat;
use ptb_docs_mcp::{Config, DocsServer, ServerContext, sources};
use rmcp::{ServiceExt, transport::stdio};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    ptb_docs_mcp::tracing::init(if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    });

    let config = Config::load(cli.config.as_deref())?;

    // The index is complete before any query is answered.
    let index = sources::load_reference_index(&config)
        .await
        .context("Failed to build reference index")?;
    let context = ServerContext::new(config, index);

    let output = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            tracing::info!("Starting ptb-docs-mcp MCP server");
            let service = DocsServer::new(context)
                .serve(stdio())
                .await
                .inspect_err(|e| {
                    tracing::error!("Error serving MCP server: {:?}", e);
                })?;
            service.waiting().await?;
            return Ok(());
        }
        Commands::Docs { query } => handle_docs(
            &context,
            DocsRequest {
                query: query.join(" "),
            },
        ),
        Commands::Wiki { query } => handle_wiki(
            &context,
            WikiRequest {
                query: query.join(" "),
            },
        ),
        Commands::Expand { text, no_official } => handle_expand(
            &context,
            ExpandRequest {
                text,
                official_links: !no_official,
            },
        ),
        Commands::Inline { query } => {
            serde_json::to_string_pretty(&inline_answers(&context, query.join(" ").trim()))?
        }
        Commands::Pages => handle_list_pages(&context),
    };

    println!("{}", output);
    Ok(())
}
