//! Plain-text extraction from note markup, tokenizing, and slugs.

use once_cell::sync::Lazy;
use regex::Regex;

static STYLE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap());
static SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap());
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static PARAGRAPH_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</p>").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").unwrap());
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9]+").unwrap());
static NON_SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\-\s]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Reduces note markup to plain text.
///
/// Style and script blocks vanish with their content, `<br>` becomes a
/// newline, `</p>` a blank line, every remaining tag is dropped, and
/// character entities decode to literal characters. Malformed markup
/// degrades gracefully; this never fails.
pub fn strip_html(markup: &str) -> String {
    let text = STYLE_BLOCK.replace_all(markup, "");
    let text = SCRIPT_BLOCK.replace_all(&text, "");
    let text = LINE_BREAK.replace_all(&text, "\n");
    let text = PARAGRAPH_CLOSE.replace_all(&text, "\n\n");
    let text = TAG.replace_all(&text, "");
    let text = decode_entities(&text);
    text.trim().to_string()
}

fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |captures: &regex::Captures<'_>| {
            let name = &captures[1];
            match name {
                "amp" => "&".to_string(),
                "lt" => "<".to_string(),
                "gt" => ">".to_string(),
                "quot" => "\"".to_string(),
                "apos" => "'".to_string(),
                "nbsp" => " ".to_string(),
                _ => decode_numeric_entity(name)
                    .unwrap_or_else(|| captures[0].to_string()),
            }
        })
        .into_owned()
}

fn decode_numeric_entity(name: &str) -> Option<String> {
    let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        name.strip_prefix('#')?.parse::<u32>().ok()?
    };
    char::from_u32(code).map(String::from)
}

/// Splits text into lowercase alphanumeric tokens.
///
/// Punctuation, whitespace, and non-ASCII characters all act as
/// separators and are discarded.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Filesystem-safe rendering of a folder or title.
///
/// Lowercases, drops anything outside `[a-z0-9-\s]`, and collapses
/// whitespace runs to single hyphens. All-punctuation input falls back
/// to "untitled".
pub fn slugify(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    let cleaned = NON_SLUG.replace_all(&lowered, "");
    let slug = WHITESPACE_RUN.replace_all(&cleaned, "-").into_owned();
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}
