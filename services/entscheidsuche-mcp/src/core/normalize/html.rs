//! Pattern-based markup helpers
//!
//! Regex-level treatment of HTML, good enough for court decision
//! renditions and the status page. Not a general HTML parser.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static INVISIBLE_BLOCKS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<(script|style|head|noscript)\b[^>]*>.*?</(script|style|head|noscript)\s*>")
        .expect("valid regex")
});

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static COMMENTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</(p|div|h[1-6]|li|tr|table|section|article|blockquote)\s*>")
        .expect("valid regex")
});

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ENTITIES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\u{a0}]+").expect("valid regex"));

/// Decode numeric and the common named character references
pub fn decode_entities(input: &str) -> String {
    ENTITIES
        .replace_all(input, |caps: &Captures| {
            let entity = &caps[1];
            decode_entity(entity).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn decode_entity(entity: &str) -> Option<String> {
    if let Some(hex) = entity
        .strip_prefix("#x")
        .or_else(|| entity.strip_prefix("#X"))
    {
        return u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .map(String::from);
    }
    if let Some(dec) = entity.strip_prefix('#') {
        return dec.parse::<u32>().ok().and_then(char::from_u32).map(String::from);
    }

    let c = match entity {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        "auml" => 'ä',
        "ouml" => 'ö',
        "uuml" => 'ü',
        "Auml" => 'Ä',
        "Ouml" => 'Ö',
        "Uuml" => 'Ü',
        "szlig" => 'ß',
        "eacute" => 'é',
        "egrave" => 'è',
        "ecirc" => 'ê',
        "Eacute" => 'É',
        "agrave" => 'à',
        "acirc" => 'â',
        "ccedil" => 'ç',
        "ocirc" => 'ô',
        "ugrave" => 'ù',
        "icirc" => 'î',
        "laquo" => '«',
        "raquo" => '»',
        "ndash" => '–',
        "mdash" => '—',
        "sect" => '§',
        "para" => '¶',
        "hellip" => '…',
        _ => return None,
    };
    Some(c.to_string())
}

/// Inline text of a fragment: tags removed, entities decoded, whitespace collapsed
pub fn inline_text(fragment: &str) -> String {
    let stripped = TAGS.replace_all(fragment, " ");
    let decoded = decode_entities(&stripped);
    SPACES
        .replace_all(&decoded.replace(['\n', '\r'], " "), " ")
        .trim()
        .to_string()
}

/// Reduce an HTML document to readable plain text
///
/// Block-level boundaries become line breaks; runs of blank lines
/// collapse to one.
pub fn html_to_text(html: &str) -> String {
    let without_invisible = INVISIBLE_BLOCKS.replace_all(html, "");
    let without_comments = COMMENTS.replace_all(&without_invisible, "");
    let with_breaks = LINE_BREAKS.replace_all(&without_comments, "\n");
    let stripped = TAGS.replace_all(&with_breaks, "");
    let decoded = decode_entities(&stripped);

    let mut output = String::with_capacity(decoded.len());
    let mut blank_run = 0;
    for line in decoded.lines() {
        let line = SPACES.replace_all(line, " ");
        let line = line.trim();
        if line.is_empty() {
            blank_run += 1;
            if blank_run == 1 && !output.is_empty() {
                output.push('\n');
            }
            continue;
        }
        blank_run = 0;
        output.push_str(line);
        output.push('\n');
    }

    output.trim_end().to_string()
}
