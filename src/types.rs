//! Records held by the reference index and returned by lookups.

use serde::Serialize;
use std::fmt;

/// Separator placed between a page's category and its title, e.g. `Examples 🡺 echobot.py`.
pub const CATEGORY_SEPARATOR: &str = " 🡺 ";

/// Category of a documented symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Module,
    Class,
    Method,
    StaticMethod,
    Function,
    Attribute,
    Data,
    Exception,
}

impl SymbolKind {
    /// Map an inventory role (`py:method`, `py:class`, ...) to a kind.
    ///
    /// Roles outside the Python domain, and Python roles that are never searched
    /// (`py:property`, `py:classmethod`, ...), yield `None`.
    pub fn from_role(role: &str) -> Option<Self> {
        let kind = match role.strip_prefix("py:")? {
            "module" => Self::Module,
            "class" => Self::Class,
            "method" => Self::Method,
            "staticmethod" => Self::StaticMethod,
            "function" => Self::Function,
            "attribute" => Self::Attribute,
            "data" => Self::Data,
            "exception" => Self::Exception,
            _ => return None,
        };
        Some(kind)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Class => "class",
            Self::Method => "method",
            Self::StaticMethod => "staticmethod",
            Self::Function => "function",
            Self::Attribute => "attribute",
            Self::Data => "data",
            Self::Exception => "exception",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One documented symbol, addressed by its dotted qualified name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    /// Path segments, never empty.
    pub segments: Vec<String>,
    pub kind: SymbolKind,
    /// Absolute URL of the symbol's documentation anchor.
    pub url: String,
}

impl SymbolEntry {
    /// Returns `None` when `qualified_name` has no segments.
    pub fn new(qualified_name: &str, kind: SymbolKind, url: impl Into<String>) -> Option<Self> {
        if qualified_name.is_empty() {
            return None;
        }
        Some(Self {
            segments: qualified_name.split('.').map(str::to_string).collect(),
            kind,
            url: url.into(),
        })
    }

    /// The dotted qualified name, e.g. `telegram.Bot.send_message`.
    pub fn qualified_name(&self) -> String {
        self.segments.join(".")
    }
}

/// A cross-reference into the official API reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfficialAnchor {
    pub name: String,
    pub url: String,
}

/// The winning symbol of a lookup, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolMatch {
    /// Display path without the package segment (`Bot.send_message`).
    pub short_name: String,
    pub full_name: String,
    pub kind: SymbolKind,
    pub url: String,
    pub official: Option<OfficialAnchor>,
    pub score: f64,
}

/// One browsable page: wiki article, code-snippet section or example file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageEntry {
    pub name: String,
    pub url: String,
}

impl PageEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Build a `"{category} 🡺 {title}"` entry.
    pub fn categorized(category: &str, title: &str, url: impl Into<String>) -> Self {
        Self::new(format!("{category}{CATEGORY_SEPARATOR}{title}"), url)
    }
}
