use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ptb-docs-mcp")]
#[command(about = "Fuzzy lookup of library documentation, wiki pages and examples", long_about = None)]
pub struct Cli {
    /// Configuration file (default: <config dir>/ptb-docs-mcp/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the lookups as MCP tools over stdio
    Serve,
    /// Look up a documented symbol
    Docs {
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Look up a wiki page, code snippet or example
    Wiki {
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Replace marker-delimited tokens in a text with links
    Expand {
        text: String,
        /// Leave out links to the official API reference
        #[arg(long)]
        no_official: bool,
    },
    /// Print every inline query answer as JSON
    Inline {
        query: Vec<String>,
    },
    /// List every page in browse order
    Pages,
}
