//! Extraction of index records from the fetched HTML pages.
//!
//! The pages are machine-generated (the official API reference and GitHub wiki
//! and tree views), so a handful of targeted patterns is enough: anchors with
//! class `anchor`, the wiki's custom sidebar, level-4 headings of the wiki body,
//! and the `content` cells of a directory listing's `files` table.

use crate::error::SourceError;
use crate::search::{AnchorRecord, PageLink, SidebarLink};
use regex::Regex;
use std::sync::LazyLock;

static ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<a\b([^>]*)>(.*?)</a>([^<]*)").expect("valid anchor pattern")
});
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a\b([^>]*)>(.*?)</a>").expect("valid link pattern"));
static DIV_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<div\b[^>]*>|</div\s*>").expect("valid div pattern"));
static OL_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<ol\b[^>]*>|</ol\s*>").expect("valid list pattern"));
static LI_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<li\b[^>]*>|</li\s*>").expect("valid list item pattern"));
static TABLE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<table\b[^>]*>|</table\s*>").expect("valid table pattern"));
static SIDEBAR_PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<h2\b[^>]*>(.*?)</h2\s*>|<ol\b[^>]*>").expect("valid sidebar pattern")
});
static H4: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h4\b[^>]*>(.*?)</h4\s*>").expect("valid heading pattern"));
static CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<td\b([^>]*)>(.*?)</td\s*>").expect("valid cell pattern"));
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)([a-zA-Z_:][-a-zA-Z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("valid attribute pattern")
});
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid tag pattern"));
static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").expect("valid entity pattern")
});

/// Anchors of the official API page: `<a class="anchor" href="#id">…</a>Display name`.
pub fn extract_official_anchors(html: &str) -> Result<Vec<AnchorRecord>, SourceError> {
    let anchors: Vec<AnchorRecord> = ANCHOR
        .captures_iter(html)
        .filter(|captures| has_class(&captures[1], "anchor"))
        .filter_map(|captures| {
            let href = attribute(&captures[1], "href")?;
            Some(AnchorRecord {
                href,
                text: text_content(&captures[3]),
            })
        })
        .collect();

    if anchors.is_empty() {
        return Err(SourceError::Html {
            source_name: "official API page",
            reason: "no anchors found".to_string(),
        });
    }
    Ok(anchors)
}

/// Links of the wiki's custom sidebar, each under the `h2` that precedes its list.
///
/// Every list item of a top-level `ol` counts, nested lists included; an item
/// contributes its first link.
pub fn extract_sidebar_links(html: &str) -> Result<Vec<SidebarLink>, SourceError> {
    let sidebar =
        element_with_class(html, &DIV_TAG, "wiki-custom-sidebar").ok_or_else(|| {
            SourceError::Html {
                source_name: "wiki",
                reason: "sidebar not found".to_string(),
            }
        })?;

    let mut links = Vec::new();
    let mut category: Option<String> = None;
    let mut position = 0;

    while let Some(part) = SIDEBAR_PART.captures_at(sidebar, position) {
        let Some(whole) = part.get(0) else {
            break;
        };
        if let Some(heading) = part.get(1) {
            category = Some(text_content(heading.as_str()));
            position = whole.end();
            continue;
        }

        let list = inner_until_close(sidebar, whole.end(), &OL_TAG);
        position = whole.end() + list.len();

        let Some(category) = &category else {
            tracing::debug!("Skipping sidebar list without a heading");
            continue;
        };
        for item in list_items(list) {
            if let Some((href, title)) = first_link(item) {
                links.push(SidebarLink {
                    category: category.clone(),
                    title,
                    href,
                });
            }
        }
    }

    Ok(links)
}

/// Inner HTML of every `li` in a list, outer items before the items nested in them.
fn list_items(list: &str) -> impl Iterator<Item = &str> {
    LI_TAG
        .find_iter(list)
        .filter(|tag| !tag.as_str().starts_with("</"))
        .map(move |open| inner_until_close(list, open.end(), &LI_TAG))
}

/// Level-4 headings of the wiki body with the link embedded in each heading.
pub fn extract_snippet_headings(html: &str) -> Result<Vec<PageLink>, SourceError> {
    let body = element_with_class(html, &DIV_TAG, "wiki-body").ok_or_else(|| SourceError::Html {
        source_name: "code snippets page",
        reason: "wiki body not found".to_string(),
    })?;

    let headings = H4
        .captures_iter(body)
        .filter_map(|heading| {
            let inner = &heading[1];
            let Some((href, _)) = first_link(inner) else {
                tracing::debug!("Skipping heading without link: {}", text_content(inner));
                return None;
            };
            Some(PageLink {
                title: text_content(inner),
                href,
            })
        })
        .collect();

    Ok(headings)
}

/// File links in the `content` cells of a directory listing's `files` table.
pub fn extract_listing_files(html: &str) -> Result<Vec<PageLink>, SourceError> {
    let table = element_with_class(html, &TABLE_TAG, "files").ok_or_else(|| SourceError::Html {
        source_name: "examples listing",
        reason: "files table not found".to_string(),
    })?;
    let mut files = Vec::new();

    for cell in CELL.captures_iter(table) {
        if !has_class(&cell[1], "content") {
            continue;
        }
        for link in LINK.captures_iter(&cell[2]) {
            if let Some(href) = attribute(&link[1], "href") {
                files.push(PageLink {
                    title: text_content(&link[2]),
                    href,
                });
            }
        }
    }

    if files.is_empty() {
        return Err(SourceError::Html {
            source_name: "examples listing",
            reason: "no files found".to_string(),
        });
    }
    Ok(files)
}

/// Inner HTML of the first element carrying `class`, nested elements of the same
/// name included. `tags` matches the element's opening and closing tags.
fn element_with_class<'a>(html: &'a str, tags: &Regex, class: &str) -> Option<&'a str> {
    let open = tags
        .find_iter(html)
        .find(|tag| !tag.as_str().starts_with("</") && has_class(tag.as_str(), class))?;
    Some(inner_until_close(html, open.end(), tags))
}

/// Inner HTML from `start`, just past an opening tag, up to its matching closing tag.
///
/// Unclosed elements run to the end of `html`.
fn inner_until_close<'a>(html: &'a str, start: usize, tags: &Regex) -> &'a str {
    let mut depth = 1usize;
    for tag in tags.find_iter(&html[start..]) {
        if tag.as_str().starts_with("</") {
            depth -= 1;
            if depth == 0 {
                return &html[start..start + tag.start()];
            }
        } else {
            depth += 1;
        }
    }
    &html[start..]
}

/// `(href, text)` of the first link in a fragment. Placeholder links are kept.
fn first_link(fragment: &str) -> Option<(String, String)> {
    let link = LINK.captures(fragment)?;
    let href = attribute(&link[1], "href")?;
    Some((href, text_content(&link[2])))
}

fn has_class(attributes: &str, class: &str) -> bool {
    attribute(attributes, "class").is_some_and(|value| value.split_whitespace().any(|c| c == class))
}

/// Value of a double- or single-quoted attribute.
fn attribute(tag: &str, name: &str) -> Option<String> {
    ATTRIBUTE
        .captures_iter(tag)
        .find(|captures| captures[1].eq_ignore_ascii_case(name))
        .and_then(|captures| captures.get(2).or_else(|| captures.get(3)))
        .map(|value| decode_entities(value.as_str()))
}

/// Text of a fragment: tags removed, entities decoded, whitespace collapsed.
pub fn text_content(fragment: &str) -> String {
    let stripped = TAG.replace_all(fragment, "");
    decode_entities(&stripped)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |captures: &regex::Captures<'_>| {
            let entity = &captures[1];
            let decoded = if let Some(hex) = entity
                .strip_prefix("#x")
                .or_else(|| entity.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(decimal) = entity.strip_prefix('#') {
                decimal.parse().ok().and_then(char::from_u32)
            } else {
                match entity {
                    "amp" => Some('&'),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    "nbsp" => Some('\u{a0}'),
                    _ => None,
                }
            };
            decoded.map_or_else(|| captures[0].to_string(), String::from)
        })
        .into_owned()
}
