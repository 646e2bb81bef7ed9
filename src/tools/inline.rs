//! Inline query answers: every result a chat front-end can offer for a query.

use crate::context::ServerContext;
use crate::format::{format_browse_page, format_symbol, link};
use rmcp::schemars;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct InlineQueryRequest {
    /// Inline query text; empty lists every page
    #[serde(default)]
    pub query: String,
}

/// One selectable answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    /// Markdown message sent when the answer is picked.
    pub message_text: String,
}

impl Article {
    fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        message_text: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            message_text: message_text.into(),
        }
    }
}

/// Answers for an inline query.
///
/// An empty query browses every page in index order. Otherwise the order is:
/// expansion with official links, expansion without, the documentation hit, then
/// the page hits; a single "no results" article if none of those exist.
pub fn inline_answers(context: &ServerContext, query: &str) -> Vec<Article> {
    let config = context.config();
    let project = &config.project_name;

    if query.is_empty() {
        return context
            .index()
            .pages()
            .iter()
            .map(|page| {
                Article::new(
                    page.name.clone(),
                    format!("Wiki of {}", project),
                    format_browse_page(page, project),
                )
            })
            .collect();
    }

    let mut articles = Vec::new();
    let annotator = context.annotator();

    if let Some(expansion) = annotator.expand(query, true) {
        articles.push(Article::new(
            "Replace links and show official Bot API documentation",
            expansion.labels.join(", "),
            expansion.text,
        ));
    }
    if let Some(expansion) = annotator.expand(query, false) {
        articles.push(Article::new(
            "Replace links",
            expansion.labels.join(", "),
            expansion.text,
        ));
    }

    let engine = context.engine();
    if let Some(symbol) = engine.lookup_symbol(query, config.thresholds.inline) {
        articles.push(Article::new(
            symbol.full_name.clone(),
            format!("{} documentation", project),
            format_symbol(&symbol, project),
        ));
    }

    if let Some(pages) = engine.lookup_pages(query, config.inline_pages, config.thresholds.inline) {
        articles.extend(pages.iter().map(|page| {
            Article::new(
                page.name.clone(),
                format!("Github wiki for {}", project),
                format_browse_page(page, project),
            )
        }));
    }

    if articles.is_empty() {
        articles.push(Article::new(
            "❌ No results.",
            "",
            format!(
                "{} of _{}_",
                link("GitHub wiki", context.index().home_url()),
                project
            ),
        ));
    }

    articles
}
