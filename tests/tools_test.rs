mod common;

use assert2::check;
use common::{OFFICIAL_URL, WIKI_URL, context, index, symbol_url};
use ptb_docs_mcp::format::NO_MATCH_TEXT;
use ptb_docs_mcp::tools::{
    DocsRequest, ExpandRequest, WikiRequest, documentation_reply, handle_docs, handle_expand,
    handle_list_pages, handle_wiki, inline_answers,
};
use ptb_docs_mcp::{Config, ReferenceIndex, ServerContext};
use rstest::rstest;
use std::io::Write;

fn docs(context: &ServerContext, query: &str) -> String {
    handle_docs(
        context,
        DocsRequest {
            query: query.to_string(),
        },
    )
}

fn wiki(context: &ServerContext, query: &str) -> String {
    handle_wiki(
        context,
        WikiRequest {
            query: query.to_string(),
        },
    )
}

// --- docs ---

#[rstest]
fn docs_reply_links_both_references(context: ServerContext) {
    check!(
        docs(&context, "  Bot.send_message ")
            == format!(
                "*Bot.send_message*\n\
                 _python-telegram-bot_ documentation for this method:\n\
                 [telegram.Bot.send_message]({})\n\n\
                 The official documentation has more info about [Send Message]({}#sendmessage).",
                symbol_url("telegram.Bot.send_message"),
                OFFICIAL_URL
            )
    );
}

#[rstest]
fn docs_reply_without_official_reference(context: ServerContext) {
    check!(
        docs(&context, "TelegramError")
            == format!(
                "*error.TelegramError*\n\
                 _python-telegram-bot_ documentation for this exception:\n\
                 [telegram.error.TelegramError]({})",
                symbol_url("telegram.error.TelegramError")
            )
    );
}

#[rstest]
fn docs_miss_gives_no_match_reply(context: ServerContext) {
    check!(docs(&context, "zzzzqqqq") == NO_MATCH_TEXT);
    check!(documentation_reply(&context, "zzzzqqqq").is_none());
}

/// Thresholds come from the configuration.
#[rstest]
fn docs_threshold_is_configurable(index: ReferenceIndex) {
    let mut config = Config::default();
    config.thresholds.docs = 1000.0;
    let context = ServerContext::new(config, index);
    check!(docs(&context, "Bot.send_message") == NO_MATCH_TEXT);
}

// --- wiki ---

#[rstest]
#[case("webhooks", "Guides 🡺 Webhooks", format!("{WIKI_URL}Webhooks"))]
#[case(
    "echobot",
    "Examples 🡺 echobot.py",
    "https://github.com/python-telegram-bot/python-telegram-bot/blob/master/examples/echobot.py"
        .to_string()
)]
fn wiki_reply_links_best_page(
    context: ServerContext,
    #[case] query: &str,
    #[case] name: &str,
    #[case] url: String,
) {
    check!(wiki(&context, query) == format!("Github wiki for _python-telegram-bot_\n[{name}]({url})"));
}

#[rstest]
fn wiki_miss_gives_no_match_reply(context: ServerContext) {
    check!(wiki(&context, "zzzzqqqq") == NO_MATCH_TEXT);
}

#[rstest]
fn list_pages_in_browse_order(context: ServerContext) {
    let listing = handle_list_pages(&context);
    let mut lines = listing.lines();

    check!(lines.next() == Some("Wiki of _python-telegram-bot_"));
    check!(lines.next() == Some(""));
    check!(
        lines.next()
            == Some(
                "- [Must read 🡺 Introduction to the API]\
                 (https://github.com/python-telegram-bot/python-telegram-bot/wiki/Introduction-to-the-API)"
            )
    );
    check!(lines.count() == 6);
}

// --- expand ---

#[rstest]
fn expand_without_tokens_explains_marker(context: ServerContext) {
    let reply = handle_expand(
        &context,
        ExpandRequest {
            text: "nothing to link".to_string(),
            official_links: true,
        },
    );
    check!(reply == "No +token+ found. Enclose names in '+' to link them.");
}

#[test]
fn expand_request_links_official_by_default() {
    let request: ExpandRequest = serde_json::from_str(r#"{"text": "+Bot+"}"#).unwrap();
    check!(request.official_links);
}

// --- inline ---

#[rstest]
fn empty_inline_query_browses_every_page(context: ServerContext) {
    let articles = inline_answers(&context, "");
    let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
    let pages: Vec<&str> = context.index().pages().iter().map(|p| p.name.as_str()).collect();

    check!(titles == pages);
    check!(articles[0].description == "Wiki of python-telegram-bot");
    check!(articles[0].message_text.starts_with("Wiki of _python-telegram-bot_\n["));
}

#[rstest]
fn inline_answers_start_with_expansions(context: ServerContext) {
    let articles = inline_answers(&context, "+send_message+");

    check!(articles.len() >= 3);
    check!(articles[0].title == "Replace links and show official Bot API documentation");
    check!(articles[0].description == "Bot.send_message");
    check!(articles[0].message_text.contains("#sendmessage"));
    check!(articles[1].title == "Replace links");
    check!(
        articles[1].message_text
            == format!("[send\\_message]({})", symbol_url("telegram.Bot.send_message"))
    );
    check!(articles[2].title == "telegram.Bot.send_message");
    check!(articles[2].description == "python-telegram-bot documentation");
}

#[rstest]
fn inline_page_answers(context: ServerContext) {
    let articles = inline_answers(&context, "Webhooks");
    check!(articles[0].title == "Guides 🡺 Webhooks");
    check!(articles[0].description == "Github wiki for python-telegram-bot");
    check!(
        articles[0].message_text
            == format!("Wiki of _python-telegram-bot_\n[Guides 🡺 Webhooks]({WIKI_URL}Webhooks)")
    );
}

#[rstest]
fn inline_miss_gives_single_no_result(context: ServerContext) {
    let articles = inline_answers(&context, "zzzzqqqq");
    check!(articles.len() == 1);
    check!(articles[0].title == "❌ No results.");
    check!(articles[0].message_text == format!("[GitHub wiki]({WIKI_URL}) of _python-telegram-bot_"));
}

// --- config ---

#[test]
fn config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
project_name = "my-bot-lib"
wiki_url = "https://example.org/wiki/"
inline_pages = 2

[thresholds]
wiki = 70.0
"#
    )
    .unwrap();

    let config = Config::load(Some(file.path().to_str().unwrap())).unwrap();
    check!(config.project_name == "my-bot-lib");
    check!(config.wiki_url == "https://example.org/wiki/");
    check!(config.inline_pages == 2);
    check!(config.thresholds.wiki == 70.0);
    check!(config.thresholds.docs == 80.0);
    check!(config.marker == '+');
}

#[test]
fn config_file_errors_are_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "marker = \"x\"").unwrap();
    check!(Config::load(Some(file.path().to_str().unwrap())).is_err());

    check!(Config::load(Some("/nonexistent/ptb-docs-mcp.toml")).is_err());
}
