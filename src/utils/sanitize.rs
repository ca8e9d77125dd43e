//! Plain-text sanitizing for message bodies and amounts that may carry
//! stored markup.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("valid regex"));
static STYLE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").expect("valid regex"));
static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z][a-zA-Z0-9]{1,31});")
        .expect("valid regex")
});

/// Removes script/style elements with their content, comments and every
/// remaining tag, then trims surrounding whitespace.
pub fn strip_all_tags(input: &str) -> String {
    let without_blocks = SCRIPT_BLOCK.replace_all(input, "");
    let without_blocks = STYLE_BLOCK.replace_all(&without_blocks, "");
    let without_comments = COMMENT.replace_all(&without_blocks, "");
    TAG.replace_all(&without_comments, "").trim().to_string()
}

/// Sanitizes operator-typed multi-line text: markup goes, line breaks stay,
/// trailing whitespace on each line and around the whole text is dropped.
pub fn sanitize_textarea(input: &str) -> String {
    let stripped = strip_all_tags(input);
    stripped
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Decodes numeric character references and the named entities that show up
/// in formatted prices. Unknown entities are left as they are.
pub fn decode_entities(input: &str) -> String {
    ENTITY
        .replace_all(input, |caps: &Captures| {
            let name = &caps[1];
            decode_entity(name).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn decode_entity(name: &str) -> Option<String> {
    if let Some(hex) = name
        .strip_prefix("#x")
        .or_else(|| name.strip_prefix("#X"))
    {
        return u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .map(String::from);
    }
    if let Some(dec) = name.strip_prefix('#') {
        return dec.parse::<u32>().ok().and_then(char::from_u32).map(String::from);
    }

    let decoded = match name {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => "\u{a0}",
        "cent" => "\u{a2}",
        "pound" => "\u{a3}",
        "yen" => "\u{a5}",
        "euro" => "\u{20ac}",
        "curren" => "\u{a4}",
        _ => return None,
    };
    Some(decoded.to_string())
}
