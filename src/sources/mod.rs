//! Fetching and decoding of the reference sources the index is built from.
//!
//! All five sources are downloaded concurrently, then ingested in a fixed
//! order. Any failure aborts the build: there is no partial index.

pub mod html;
pub mod inventory;

use crate::config::Config;
use crate::error::{Result, SourceError};
use crate::search::ReferenceIndex;
use anyhow::Context;
use std::time::{Duration, Instant};

pub use html::{
    extract_listing_files, extract_official_anchors, extract_sidebar_links,
    extract_snippet_headings,
};
pub use inventory::{InventoryHeader, decode_inventory};

/// Name of the inventory file below the documentation root.
const INVENTORY_FILE: &str = "objects.inv";

/// Raw bodies of every source, as downloaded.
#[derive(Debug, Clone, Default)]
pub struct RawSources {
    pub inventory: Vec<u8>,
    pub official: String,
    pub wiki: String,
    pub code_snippets: String,
    pub examples: String,
}

/// HTTP client for the reference sources.
#[derive(Debug, Clone)]
pub struct SourceFetcher {
    client: reqwest::Client,
}

impl SourceFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> std::result::Result<reqwest::Response, SourceError> {
        let fetch_error = |e: reqwest::Error| SourceError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        };
        tracing::debug!("Fetching {}", url);
        self.client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(fetch_error)
    }

    async fn fetch_bytes(&self, url: &str) -> std::result::Result<Vec<u8>, SourceError> {
        let bytes = self
            .get(url)
            .await?
            .bytes()
            .await
            .map_err(|e| SourceError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        Ok(bytes.to_vec())
    }

    async fn fetch_text(&self, url: &str) -> std::result::Result<String, SourceError> {
        self.get(url)
            .await?
            .text()
            .await
            .map_err(|e| SourceError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }

    /// Download every source concurrently.
    pub async fn fetch_all(&self, config: &Config) -> Result<RawSources> {
        let inventory_url = inventory_url(&config.docs_url)?;
        let start = Instant::now();

        let (inventory, official, wiki, code_snippets, examples) = futures::try_join!(
            self.fetch_bytes(&inventory_url),
            self.fetch_text(&config.official_url),
            self.fetch_text(&config.wiki_url),
            self.fetch_text(&config.code_snippets_url),
            self.fetch_text(&config.examples_url),
        )?;

        tracing::info!("Fetched reference sources in {:?}", start.elapsed());
        Ok(RawSources {
            inventory,
            official,
            wiki,
            code_snippets,
            examples,
        })
    }
}

/// Build the index from downloaded sources.
///
/// Ingestion order: symbols, official anchors, wiki pages, code snippets,
/// examples. Page order follows it.
pub fn build_index(config: &Config, raw: &RawSources) -> Result<ReferenceIndex> {
    let start = Instant::now();
    let mut builder = ReferenceIndex::builder(&config.wiki_url);

    let (header, records) = decode_inventory(&raw.inventory, &config.docs_url)
        .context("Failed to decode documentation inventory")?;
    tracing::info!(
        "Loaded inventory of {} {}",
        header.project,
        header.version
    );
    builder.ingest_inventory(records);

    let anchors = extract_official_anchors(&raw.official)?;
    builder
        .ingest_official(&config.official_url, anchors)
        .context("Failed to index official API anchors")?;

    let links = extract_sidebar_links(&raw.wiki)?;
    builder
        .ingest_wiki(&config.wiki_url, links)
        .context("Failed to index wiki pages")?;

    let headings = extract_snippet_headings(&raw.code_snippets)?;
    builder
        .ingest_code_snippets(&config.code_snippets_url, headings)
        .context("Failed to index code snippets")?;

    let files = extract_listing_files(&raw.examples)?;
    builder
        .ingest_examples(&config.examples_url, files)
        .context("Failed to index examples")?;

    let index = builder.build();
    tracing::info!(
        "Reference index ready: {} symbols, {} official anchors, {} pages ({:?})",
        index.symbol_count(),
        index.official_count(),
        index.pages().len(),
        start.elapsed()
    );
    Ok(index)
}

/// Fetch every source and build the index. Fails if any step fails.
pub async fn load_reference_index(config: &Config) -> Result<ReferenceIndex> {
    let fetcher = SourceFetcher::new(Duration::from_secs(config.request_timeout_secs))?;
    let raw = fetcher.fetch_all(config).await?;
    build_index(config, &raw)
}

fn inventory_url(docs_url: &str) -> std::result::Result<String, SourceError> {
    url::Url::parse(docs_url)
        .and_then(|base| base.join(INVENTORY_FILE))
        .map(String::from)
        .map_err(|e| SourceError::Url {
            base: docs_url.to_string(),
            href: INVENTORY_FILE.to_string(),
            reason: e.to_string(),
        })
}
