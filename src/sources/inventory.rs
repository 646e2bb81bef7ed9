//! Sphinx object inventory (`objects.inv`, version 2) decoding.
//!
//! The file is four plain-text header lines followed by a zlib stream of
//! entries, one per line: `name domain:role priority uri dispname`.

use crate::error::SourceError;
use crate::search::InventoryRecord;
use flate2::read::ZlibDecoder;
use regex::Regex;
use std::io::Read;
use std::sync::LazyLock;
use url::Url;

const VERSION_HEADER: &str = "# Sphinx inventory version 2";

static ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s+(\S+)\s+(-?\d+)\s+?(\S*)\s+(.*)$").expect("valid inventory pattern")
});

/// Project metadata from the inventory header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryHeader {
    pub project: String,
    pub version: String,
}

/// Decode an inventory, resolving entry locations against `base_url`.
pub fn decode_inventory(
    data: &[u8],
    base_url: &str,
) -> Result<(InventoryHeader, Vec<InventoryRecord>), SourceError> {
    let base = Url::parse(base_url).map_err(|e| SourceError::Url {
        base: base_url.to_string(),
        href: String::new(),
        reason: e.to_string(),
    })?;

    let (header_lines, compressed) = split_header(data)?;
    if header_lines[0] != VERSION_HEADER {
        return Err(SourceError::Inventory(format!(
            "unsupported header '{}'",
            header_lines[0]
        )));
    }
    let header = InventoryHeader {
        project: header_field(header_lines[1], "# Project: ")?,
        version: header_field(header_lines[2], "# Version: ")?,
    };
    if !header_lines[3].contains("zlib") {
        return Err(SourceError::Inventory(
            "payload is not declared as zlib compressed".to_string(),
        ));
    }

    let mut body = String::new();
    ZlibDecoder::new(compressed)
        .read_to_string(&mut body)
        .map_err(|e| SourceError::Inventory(format!("cannot decompress entries: {}", e)))?;

    let mut records = Vec::new();
    for line in body.lines().filter(|line| !line.trim().is_empty()) {
        let Some(captures) = ENTRY.captures(line.trim_end()) else {
            tracing::warn!("Skipping malformed inventory line: {}", line);
            continue;
        };
        let (name, role, priority, uri, display_name) = (
            &captures[1],
            &captures[2],
            &captures[3],
            &captures[4],
            &captures[5],
        );
        if !role.contains(':') {
            continue;
        }

        let uri = match uri.strip_suffix('$') {
            Some(prefix) => format!("{prefix}{name}"),
            None => uri.to_string(),
        };
        let url = base
            .join(&uri)
            .map_err(|e| SourceError::Url {
                base: base.to_string(),
                href: uri.clone(),
                reason: e.to_string(),
            })?
            .to_string();

        records.push(InventoryRecord {
            name: name.to_string(),
            role: role.to_string(),
            priority: priority
                .parse()
                .map_err(|e| SourceError::Inventory(format!("bad priority '{}': {}", priority, e)))?,
            url,
            display_name: if display_name == "-" {
                name.to_string()
            } else {
                display_name.to_string()
            },
        });
    }

    tracing::debug!(
        "Decoded {} inventory entries for {} {}",
        records.len(),
        header.project,
        header.version
    );
    Ok((header, records))
}

/// Split off the four header lines; the rest is the compressed payload.
fn split_header(data: &[u8]) -> Result<([&str; 4], &[u8]), SourceError> {
    let mut lines = [""; 4];
    let mut rest = data;

    for line in &mut lines {
        let end = rest
            .iter()
            .position(|b| *b == b'\n')
            .ok_or_else(|| SourceError::Inventory("truncated header".to_string()))?;
        *line = std::str::from_utf8(&rest[..end])
            .map_err(|_| SourceError::Inventory("header is not UTF-8".to_string()))?
            .trim_end_matches('\r');
        rest = &rest[end + 1..];
    }

    Ok((lines, rest))
}

fn header_field(line: &str, prefix: &str) -> Result<String, SourceError> {
    line.strip_prefix(prefix)
        .map(|value| value.trim().to_string())
        .ok_or_else(|| SourceError::Inventory(format!("expected '{}...', got '{}'", prefix, line)))
}
