//! Pulls readable article text out of a news page.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::OnceLock;

pub const ARTICLE_UNAVAILABLE: &str = "Could not retrieve the article content to summarize.";

/// Tried in order; the first match is taken as the article body.
const BODY_SELECTORS: [&str; 6] = [
    "article",
    ".caas-body",
    ".article-body",
    "#story-body",
    ".story-content",
    r#"div[data-component="Component-Caas-Content"]"#,
];

/// Dropped from inside the article body before taking its text.
const NOISE_SELECTOR: &str = "figure, .ad, .related-content, .player-unavailable";

const MIN_PARAGRAPH_CHARS: usize = 80;
const MIN_FALLBACK_CHARS: usize = 100;

/// Returns the article text, or [`ARTICLE_UNAVAILABLE`] when nothing
/// usable was found.
pub fn extract_article_text(html: &str) -> String {
    let document = Html::parse_document(html);

    for css in BODY_SELECTORS {
        let Ok(selector) = Selector::parse(css) else {
            continue;
        };
        if let Some(body) = document.select(&selector).next() {
            return collapse_whitespace(&text_without_noise(body));
        }
    }

    let text = paragraph_text(&document);
    if text.chars().count() > MIN_FALLBACK_CHARS {
        return text;
    }

    ARTICLE_UNAVAILABLE.to_string()
}

fn text_without_noise(body: ElementRef<'_>) -> String {
    let noise: HashSet<_> = match Selector::parse(NOISE_SELECTOR) {
        Ok(sel) => body.select(&sel).map(|e| e.id()).collect(),
        Err(_) => HashSet::new(),
    };

    let mut out = String::new();
    for node in body.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        if node.ancestors().any(|a| noise.contains(&a.id())) {
            continue;
        }
        out.push_str(text);
    }
    out
}

/// Long `<p>` texts from the whole body, one per line.
fn paragraph_text(document: &Html) -> String {
    let Ok(selector) = Selector::parse("body p") else {
        return String::new();
    };
    document
        .select(&selector)
        .map(|p| collapse_whitespace(&p.text().collect::<String>()))
        .filter(|t| t.chars().count() > MIN_PARAGRAPH_CHARS)
        .collect::<Vec<_>>()
        .join("\n")
}

fn collapse_whitespace(text: &str) -> String {
    static WS: OnceLock<Regex> = OnceLock::new();
    let re = WS.get_or_init(|| Regex::new(r"\s+").expect("static regex"));
    re.replace_all(text, " ").trim().to_string()
}
