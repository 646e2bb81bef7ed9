//! Shared test fixtures for integration tests.
//!
//! # Available Fixtures
//!
//! - `index`: a small but realistic reference index built from in-memory records
//! - `context`: a `ServerContext` over that index with the default configuration
//! - `raw_sources`: downloaded-page fixtures for the full decode-and-build path
//!
//! Nothing here touches the network.

use flate2::{Compression, write::ZlibEncoder};
use ptb_docs_mcp::search::{AnchorRecord, InventoryRecord, PageLink, SidebarLink};
use ptb_docs_mcp::sources::RawSources;
use ptb_docs_mcp::{Config, ReferenceIndex, ServerContext};
use rstest::fixture;
use std::io::Write;

pub const DOCS_URL: &str = "https://python-telegram-bot.readthedocs.io/en/latest/";
pub const WIKI_URL: &str = "https://github.com/python-telegram-bot/python-telegram-bot/wiki/";
pub const OFFICIAL_URL: &str = "https://core.telegram.org/bots/api";
pub const SNIPPETS_URL: &str =
    "https://github.com/python-telegram-bot/python-telegram-bot/wiki/Code-snippets";
pub const EXAMPLES_URL: &str =
    "https://github.com/python-telegram-bot/python-telegram-bot/tree/master/examples/";

/// Symbols of the fixture index, in inventory order.
pub const SYMBOLS: &[(&str, &str)] = &[
    ("telegram", "py:module"),
    ("telegram.ext", "py:module"),
    ("telegram.Bot", "py:class"),
    ("telegram.Bot.send_message", "py:method"),
    ("telegram.InlineQuery", "py:class"),
    ("telegram.ext.InlineQueryHandler", "py:class"),
    ("telegram.ext.CommandHandler", "py:class"),
    ("telegram.Message", "py:class"),
    ("telegram.Message.reply_text", "py:method"),
    ("telegram.Message.chat_id", "py:attribute"),
    ("telegram.error.TelegramError", "py:exception"),
    ("telegram.utils.helpers.escape_markdown", "py:function"),
    ("telegram.Bot.name", "py:property"),
    ("changelog", "std:doc"),
];

/// Documentation URL of a fixture symbol.
#[allow(dead_code)]
pub fn symbol_url(name: &str) -> String {
    format!("{DOCS_URL}telegram.html#{name}")
}

fn inventory_records() -> Vec<InventoryRecord> {
    SYMBOLS
        .iter()
        .map(|(name, role)| InventoryRecord {
            name: (*name).to_string(),
            role: (*role).to_string(),
            priority: 1,
            url: symbol_url(name),
            display_name: (*name).to_string(),
        })
        .collect()
}

fn anchor(id: &str, text: &str) -> AnchorRecord {
    AnchorRecord {
        href: format!("#{id}"),
        text: text.to_string(),
    }
}

fn sidebar(category: &str, title: &str, href: &str) -> SidebarLink {
    SidebarLink {
        category: category.to_string(),
        title: title.to_string(),
        href: href.to_string(),
    }
}

fn page_link(title: &str, href: &str) -> PageLink {
    PageLink {
        title: title.to_string(),
        href: href.to_string(),
    }
}

/// Fixture index built through the regular ingestion steps.
#[fixture]
pub fn index() -> ReferenceIndex {
    let mut builder = ReferenceIndex::builder(WIKI_URL);
    builder.ingest_inventory(inventory_records());
    builder
        .ingest_official(
            OFFICIAL_URL,
            [
                anchor("sendmessage", "Send Message"),
                anchor("inlinequery", "InlineQuery"),
                anchor("message", "Message"),
                anchor("making-requests", "Making requests"),
            ],
        )
        .unwrap();
    builder
        .ingest_wiki(
            WIKI_URL,
            [
                sidebar("Must read", "Introduction to the API", "Introduction-to-the-API"),
                sidebar("Must read", "Soon", "#"),
                sidebar("Guides", "Webhooks", "Webhooks"),
                sidebar("Guides", "Storing user data", "Storing-user-and-chat-related-data"),
            ],
        )
        .unwrap();
    builder
        .ingest_code_snippets(
            SNIPPETS_URL,
            [
                page_link("Pure API", "#pure-api"),
                page_link("Post a text message", "#post-a-text-message"),
            ],
        )
        .unwrap();
    builder
        .ingest_examples(
            EXAMPLES_URL,
            [
                page_link(
                    "echobot.py",
                    "/python-telegram-bot/python-telegram-bot/blob/master/examples/echobot.py",
                ),
                page_link(
                    "README.md",
                    "/python-telegram-bot/python-telegram-bot/blob/master/examples/README.md",
                ),
            ],
        )
        .unwrap();
    builder.build()
}

/// Default configuration over the fixture index.
#[fixture]
pub fn context(index: ReferenceIndex) -> ServerContext {
    ServerContext::new(Config::default(), index)
}

#[allow(dead_code)] // Used in sources_test.rs
/// A version 2 inventory with the given entry lines.
pub fn inventory_bytes(entries: &str) -> Vec<u8> {
    let mut data = b"# Sphinx inventory version 2\n\
                     # Project: python-telegram-bot\n\
                     # Version: 13.0\n\
                     # The remainder of this file is compressed using zlib.\n"
        .to_vec();
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(entries.as_bytes())
        .expect("Failed to compress inventory");
    data.extend(encoder.finish().expect("Failed to finish inventory"));
    data
}

#[allow(dead_code)] // Used in sources_test.rs
pub const OFFICIAL_HTML: &str = r##"
<div id="dev_page_content">
<h3><a class="anchor" name="making-requests" href="#making-requests"><i class="anchor-icon"></i></a>Making requests</h3>
<h4><a class="anchor" name="sendmessage" href="#sendmessage"><i class="anchor-icon"></i></a>sendMessage</h4>
<p>Use this method to send text messages.</p>
<h4><a class="anchor" name="inlinequery" href="#inlinequery"><i class="anchor-icon"></i></a>InlineQuery</h4>
<p>See <a href="#sendmessage">sendMessage</a> for details.</p>
</div>
"##;

#[allow(dead_code)] // Used in sources_test.rs
pub const WIKI_HTML: &str = r##"
<div class="wiki-rightbar">
  <div class="Box-body wiki-custom-sidebar markdown-body">
    <h2>Must read</h2>
    <ol>
      <li><a href="/python-telegram-bot/python-telegram-bot/wiki/Introduction-to-the-API">Introduction to the API</a></li>
      <li><a href="#">Coming soon</a></li>
    </ol>
    <h2>Guides &amp; tutorials</h2>
    <ol>
      <li><a href="https://github.com/python-telegram-bot/python-telegram-bot/wiki/Webhooks">Webhooks</a></li>
    </ol>
  </div>
</div>
<ol><li><a href="/elsewhere">Not in the sidebar</a></li></ol>
"##;

#[allow(dead_code)] // Used in sources_test.rs
pub const SNIPPETS_HTML: &str = r##"
<div id="wiki-body" class="wiki-body gollum-markdown-content">
  <div class="markdown-body">
    <h3><a id="user-content-pure-api" class="anchor" href="#pure-api"></a>Pure API</h3>
    <h4><a id="user-content-fetch-updates" class="anchor" aria-hidden="true" href="#fetch-updates"><svg class="octicon"><path d="M4 9h1v1H4"></path></svg></a>Fetch updates</h4>
    <h4><a id="user-content-post-a-text-message" class="anchor" href="#post-a-text-message"></a>Post a text message</h4>
    <h4>Heading without link</h4>
  </div>
</div>
"##;

#[allow(dead_code)] // Used in sources_test.rs
pub const EXAMPLES_HTML: &str = r##"
<table class="files js-navigation-container">
  <tr class="js-navigation-item">
    <td class="icon"></td>
    <td class="content"><span class="css-truncate"><a class="js-navigation-open" title="README.md" href="/python-telegram-bot/python-telegram-bot/blob/master/examples/README.md">README.md</a></span></td>
  </tr>
  <tr class="js-navigation-item">
    <td class="content"><span><a title="echobot.py" href="/python-telegram-bot/python-telegram-bot/blob/master/examples/echobot.py">echobot.py</a></span></td>
    <td class="message">Fix <a href="/commit/abc">typo</a></td>
  </tr>
  <tr class="js-navigation-item">
    <td class="content"><span><a href="/python-telegram-bot/python-telegram-bot/blob/master/examples/LICENSE.txt">LICENSE.txt</a></span></td>
  </tr>
  <tr class="js-navigation-item">
    <td class="content"><span><a href="/python-telegram-bot/python-telegram-bot/blob/master/examples/inlinebot.py">inlinebot.py</a></span></td>
  </tr>
</table>
"##;

#[allow(dead_code)] // Used in sources_test.rs
/// Page bodies as the fetcher would hand them over.
#[fixture]
pub fn raw_sources() -> RawSources {
    RawSources {
        inventory: inventory_bytes(
            "telegram.Bot py:class 1 telegram.html#$ -\n\
             telegram.Bot.send_message py:method 1 telegram.html#$ -\n\
             changelog std:doc -1 changelog.html Changelog\n",
        ),
        official: OFFICIAL_HTML.to_string(),
        wiki: WIKI_HTML.to_string(),
        code_snippets: SNIPPETS_HTML.to_string(),
        examples: EXAMPLES_HTML.to_string(),
    }
}
