//! The reference index: symbols, official API anchors and browsable pages.
//!
//! The index is assembled once by [`ReferenceIndexBuilder`] and is read-only
//! afterwards. Ingestion runs in a fixed order (symbols, official anchors,
//! wiki pages, code snippets, examples) because the page table keeps insertion
//! order and that order is the default browse order.

use crate::error::SourceError;
use crate::search::scoring::normalize_key;
use crate::types::{OfficialAnchor, PageEntry, SymbolEntry, SymbolKind};
use ahash::AHashMap;
use std::time::Instant;
use url::Url;

/// Category used for code-snippet sections.
pub const CODE_SNIPPETS_CATEGORY: &str = "Code snippets";

/// Category and root page name used for example files.
pub const EXAMPLES_CATEGORY: &str = "Examples";

/// Listing entries that are not examples.
const IGNORED_EXAMPLE_FILES: &[&str] = &["LICENSE.txt", "README.md"];

/// One line of a documentation object inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    /// Dotted qualified name.
    pub name: String,
    /// Domain and role, e.g. `py:method`.
    pub role: String,
    pub priority: i32,
    /// Absolute documentation URL.
    pub url: String,
    pub display_name: String,
}

/// An anchor of the official API page: its fragment identifier and trailing text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorRecord {
    /// The `href` value, including the leading `#`.
    pub href: String,
    pub text: String,
}

/// A link in the wiki sidebar, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarLink {
    pub category: String,
    pub title: String,
    pub href: String,
}

/// A titled link extracted from a page: a code-snippet heading or an example file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub title: String,
    pub href: String,
}

/// Read-only lookup tables built at startup.
#[derive(Debug)]
pub struct ReferenceIndex {
    symbols: Vec<(SymbolKind, Vec<SymbolEntry>)>,
    official: AHashMap<String, OfficialAnchor>,
    pages: Vec<PageEntry>,
    home_url: String,
}

impl ReferenceIndex {
    /// Start building an index whose pages live under `home_url`.
    pub fn builder(home_url: impl Into<String>) -> ReferenceIndexBuilder {
        ReferenceIndexBuilder::new(home_url)
    }

    /// All symbols, grouped by kind in first-seen order.
    pub fn symbols(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.symbols.iter().flat_map(|(_, entries)| entries.iter())
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.iter().map(|(_, entries)| entries.len()).sum()
    }

    /// Official anchor for a normalized key (lowercase, no underscores).
    pub fn official(&self, key: &str) -> Option<&OfficialAnchor> {
        self.official.get(key)
    }

    pub fn official_count(&self) -> usize {
        self.official.len()
    }

    /// All pages in insertion order.
    pub fn pages(&self) -> &[PageEntry] {
        &self.pages
    }

    /// Root page of the wiki, used as the fallback page.
    pub fn home_url(&self) -> &str {
        &self.home_url
    }
}

/// Accumulates index contents. Consumed by [`ReferenceIndexBuilder::build`].
#[derive(Debug)]
pub struct ReferenceIndexBuilder {
    symbols: Vec<(SymbolKind, Vec<SymbolEntry>)>,
    official: AHashMap<String, OfficialAnchor>,
    pages: Vec<PageEntry>,
    page_positions: AHashMap<String, usize>,
    home_url: String,
}

impl ReferenceIndexBuilder {
    fn new(home_url: impl Into<String>) -> Self {
        Self {
            symbols: Vec::new(),
            official: AHashMap::new(),
            pages: Vec::new(),
            page_positions: AHashMap::new(),
            home_url: home_url.into(),
        }
    }

    /// Add a symbol to the end of its kind's group.
    pub fn insert_symbol(&mut self, entry: SymbolEntry) {
        match self.symbols.iter_mut().find(|(kind, _)| *kind == entry.kind) {
            Some((_, entries)) => entries.push(entry),
            None => self.symbols.push((entry.kind, vec![entry])),
        }
    }

    /// Register an official anchor under its normalized key.
    pub fn insert_official(&mut self, key: &str, anchor: OfficialAnchor) {
        self.official.insert(normalize_key(key), anchor);
    }

    /// Add a page. Re-inserting an existing name updates its URL in place.
    pub fn insert_page(&mut self, page: PageEntry) {
        if let Some(&position) = self.page_positions.get(&page.name) {
            self.pages[position].url = page.url;
        } else {
            self.page_positions.insert(page.name.clone(), self.pages.len());
            self.pages.push(page);
        }
    }

    /// Ingest documentation inventory records.
    ///
    /// Records with roles outside the searched kinds are dropped.
    pub fn ingest_inventory(&mut self, records: impl IntoIterator<Item = InventoryRecord>) {
        let start = Instant::now();
        let mut added = 0usize;
        let mut skipped = 0usize;

        for record in records {
            let entry = SymbolKind::from_role(&record.role)
                .and_then(|kind| SymbolEntry::new(&record.name, kind, record.url));
            if let Some(entry) = entry {
                self.insert_symbol(entry);
                added += 1;
            } else {
                tracing::trace!("Skipping inventory entry '{}' ({})", record.name, record.role);
                skipped += 1;
            }
        }

        tracing::info!(
            "Indexed {} symbols ({} skipped) in {:?}",
            added,
            skipped,
            start.elapsed()
        );
    }

    /// Ingest anchors of the official API page found at `official_url`.
    ///
    /// Anchors with a hyphen in their identifier are section headings, not
    /// methods or types, and are skipped.
    pub fn ingest_official(
        &mut self,
        official_url: &str,
        anchors: impl IntoIterator<Item = AnchorRecord>,
    ) -> Result<(), SourceError> {
        let base = parse_base(official_url)?;
        let before = self.official.len();

        for anchor in anchors {
            if anchor.href.contains('-') {
                continue;
            }
            let Some(id) = anchor.href.strip_prefix('#') else {
                continue;
            };
            let name = anchor.text.trim();
            if id.is_empty() || name.is_empty() {
                continue;
            }
            let url = resolve(&base, &anchor.href)?;
            self.insert_official(
                id,
                OfficialAnchor {
                    name: name.to_string(),
                    url,
                },
            );
        }

        tracing::info!(
            "Indexed {} official API anchors",
            self.official.len() - before
        );
        Ok(())
    }

    /// Ingest wiki sidebar links as `"{category} 🡺 {title}"` pages.
    pub fn ingest_wiki(
        &mut self,
        wiki_url: &str,
        links: impl IntoIterator<Item = SidebarLink>,
    ) -> Result<(), SourceError> {
        let base = parse_base(wiki_url)?;
        let mut added = 0usize;

        for link in links {
            if link.href == "#" {
                continue;
            }
            let url = resolve(&base, &link.href)?;
            self.insert_page(PageEntry::categorized(&link.category, &link.title, url));
            added += 1;
        }

        tracing::info!("Indexed {} wiki pages", added);
        Ok(())
    }

    /// Ingest code-snippet section headings found on `snippets_url`.
    pub fn ingest_code_snippets(
        &mut self,
        snippets_url: &str,
        headings: impl IntoIterator<Item = PageLink>,
    ) -> Result<(), SourceError> {
        let base = parse_base(snippets_url)?;
        let mut added = 0usize;

        for heading in headings {
            let url = resolve(&base, &heading.href)?;
            self.insert_page(PageEntry::categorized(
                CODE_SNIPPETS_CATEGORY,
                &heading.title,
                url,
            ));
            added += 1;
        }

        tracing::info!("Indexed {} code snippet sections", added);
        Ok(())
    }

    /// Ingest the examples root page and every example file of its listing.
    pub fn ingest_examples(
        &mut self,
        examples_url: &str,
        files: impl IntoIterator<Item = PageLink>,
    ) -> Result<(), SourceError> {
        let base = parse_base(examples_url)?;
        self.insert_page(PageEntry::new(EXAMPLES_CATEGORY, examples_url));
        let mut added = 0usize;

        for file in files {
            if IGNORED_EXAMPLE_FILES.contains(&file.title.as_str()) {
                continue;
            }
            let url = resolve(&base, &file.href)?;
            self.insert_page(PageEntry::categorized(EXAMPLES_CATEGORY, &file.title, url));
            added += 1;
        }

        tracing::info!("Indexed {} examples", added);
        Ok(())
    }

    /// Freeze the tables.
    pub fn build(self) -> ReferenceIndex {
        ReferenceIndex {
            symbols: self.symbols,
            official: self.official,
            pages: self.pages,
            home_url: self.home_url,
        }
    }
}

fn parse_base(base: &str) -> Result<Url, SourceError> {
    Url::parse(base).map_err(|e| SourceError::Url {
        base: base.to_string(),
        href: String::new(),
        reason: e.to_string(),
    })
}

/// Resolve `href` against the page it was found on.
pub(crate) fn resolve(base: &Url, href: &str) -> Result<String, SourceError> {
    base.join(href)
        .map(String::from)
        .map_err(|e| SourceError::Url {
            base: base.to_string(),
            href: href.to_string(),
            reason: e.to_string(),
        })
}
