//! Runtime configuration: source URLs, lookup thresholds and the annotation marker.

use crate::error::Result;
use crate::search::{DEFAULT_ANNOTATE_THRESHOLD, DEFAULT_SYMBOL_THRESHOLD};
use anyhow::{Context, bail};
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

const DEFAULT_DOCS_URL: &str = "https://python-telegram-bot.readthedocs.io/en/latest/";
const DEFAULT_OFFICIAL_URL: &str = "https://core.telegram.org/bots/api";
const DEFAULT_WIKI_URL: &str = "https://github.com/python-telegram-bot/python-telegram-bot/wiki/";
const DEFAULT_CODE_SNIPPETS_URL: &str =
    "https://github.com/python-telegram-bot/python-telegram-bot/wiki/Code-snippets";
const DEFAULT_EXAMPLES_URL: &str =
    "https://github.com/python-telegram-bot/python-telegram-bot/tree/master/examples/";

/// File name looked up in the user's configuration directory.
const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration. Every field has a default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Name shown in replies, e.g. "_python-telegram-bot_ documentation".
    pub project_name: String,
    /// Documentation root; `objects.inv` is fetched below it.
    pub docs_url: String,
    pub official_url: String,
    /// Wiki root, also the fallback page.
    pub wiki_url: String,
    pub code_snippets_url: String,
    pub examples_url: String,
    /// Delimiter around tokens in annotated text.
    pub marker: char,
    pub thresholds: Thresholds,
    /// Number of pages offered per inline query.
    pub inline_pages: usize,
    pub request_timeout_secs: u64,
}

/// Minimum scores per query surface.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    pub docs: f64,
    pub wiki: f64,
    pub annotate: f64,
    pub inline: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            docs: DEFAULT_SYMBOL_THRESHOLD,
            wiki: 80.0,
            annotate: DEFAULT_ANNOTATE_THRESHOLD,
            inline: 60.0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_name: "python-telegram-bot".to_string(),
            docs_url: DEFAULT_DOCS_URL.to_string(),
            official_url: DEFAULT_OFFICIAL_URL.to_string(),
            wiki_url: DEFAULT_WIKI_URL.to_string(),
            code_snippets_url: DEFAULT_CODE_SNIPPETS_URL.to_string(),
            examples_url: DEFAULT_EXAMPLES_URL.to_string(),
            marker: '+',
            thresholds: Thresholds::default(),
            inline_pages: 4,
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, or from the default location if it exists,
    /// or fall back to defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(path) = path {
            let path = PathBuf::from(&*expand_tilde(path));
            return Self::load_file(&path);
        }

        match default_path() {
            Some(path) if path.is_file() => Self::load_file(&path),
            _ => {
                tracing::debug!("No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.marker.is_ascii_alphanumeric() || self.marker == '_' || self.marker == '.' {
            bail!(
                "Marker '{}' would be part of the tokens it delimits",
                self.marker
            );
        }
        if self.inline_pages == 0 {
            bail!("inline_pages must be at least 1");
        }
        Ok(())
    }
}

/// `<config dir>/ptb-docs-mcp/config.toml`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(env!("CARGO_PKG_NAME")).join(CONFIG_FILE))
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
