//! Tolerant field access over loosely-shaped upstream JSON
//!
//! Nothing in here fails: absent, null, empty or oddly-typed values all
//! read as "not there".

use crate::core::types::{LanguageMap, UNKNOWN};
use serde_json::Value;

/// Abstract/title language priority
pub const LANGUAGE_PRIORITY: &[&str] = &["de", "fr", "it"];

/// Upstream field names that may carry the court, in fallback order
pub const COURT_FIELDS: &[&str] = &["court", "Gericht", "hierarchy", "Spider", "canton", "Kanton"];

/// Language key used when a plain string has no declared language
const UNDETERMINED_LANGUAGE: &str = "und";

/// Look up a possibly dotted path (`attachment.content_url`)
pub fn lookup<'a>(source: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(source, |current, key| current.get(key))
        .filter(|v| !v.is_null())
}

/// Scalar or first usable element as trimmed text
pub fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => items.iter().find_map(text),
        Value::Object(_) => pick_language(&language_map(value, None)),
        _ => None,
    }
}

/// First of `names` holding usable text
pub fn first_text(source: &Value, names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| lookup(source, name).and_then(text))
}

/// First of `names` that is present at all
pub fn first_present<'a>(source: &'a Value, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| lookup(source, name))
}

/// Every usable string in a scalar or array
pub fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(text).collect(),
        other => text(other).into_iter().collect(),
    }
}

/// Read a multilingual value into a map
///
/// Accepts `{ "de": "...", "fr": "..." }`, the store's
/// `[{ "Sprachen": ["de"], "Text": "..." }]` form, or a bare string
/// (filed under `fallback_language`). Empty texts are dropped.
pub fn language_map(value: &Value, fallback_language: Option<&str>) -> LanguageMap {
    let mut map = LanguageMap::new();
    match value {
        Value::Object(entries) => {
            for (lang, text_value) in entries {
                if let Some(t) = text_value.as_str().map(str::trim).filter(|t| !t.is_empty()) {
                    map.insert(lang.to_ascii_lowercase(), t.to_string());
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                let Some(t) = item
                    .get("Text")
                    .or_else(|| item.get("text"))
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                else {
                    if let Some(s) = item.as_str().map(str::trim).filter(|s| !s.is_empty()) {
                        let lang = fallback_language.unwrap_or(UNDETERMINED_LANGUAGE);
                        map.entry(lang.to_ascii_lowercase())
                            .or_insert_with(|| s.to_string());
                    }
                    continue;
                };
                let langs = item
                    .get("Sprachen")
                    .or_else(|| item.get("languages"))
                    .map(string_list)
                    .unwrap_or_default();
                if langs.is_empty() {
                    let lang = fallback_language.unwrap_or(UNDETERMINED_LANGUAGE);
                    map.entry(lang.to_ascii_lowercase())
                        .or_insert_with(|| t.to_string());
                }
                for lang in langs {
                    map.entry(lang.to_ascii_lowercase())
                        .or_insert_with(|| t.to_string());
                }
            }
        }
        Value::String(s) if !s.trim().is_empty() => {
            let lang = fallback_language.unwrap_or(UNDETERMINED_LANGUAGE);
            map.insert(lang.to_ascii_lowercase(), s.trim().to_string());
        }
        _ => {}
    }
    map
}

/// First non-empty text in DE -> FR -> IT order
///
/// Text without a declared language comes last rather than being dropped.
pub fn pick_language(map: &LanguageMap) -> Option<String> {
    LANGUAGE_PRIORITY
        .iter()
        .chain(std::iter::once(&UNDETERMINED_LANGUAGE))
        .find_map(|lang| map.get(*lang).filter(|t| !t.is_empty()).cloned())
}

/// Court label through the fallback chain, `Unknown` when nothing fits
pub fn court(source: &Value) -> String {
    COURT_FIELDS
        .iter()
        .find_map(|name| {
            let value = lookup(source, name)?;
            if *name == "hierarchy" {
                court_from_hierarchy(value)
            } else {
                text(value)
            }
        })
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// `["CH", "CH_BGer", "CH_BGer_005"]` -> `CH_BGer`
pub fn court_from_hierarchy(value: &Value) -> Option<String> {
    let levels = string_list(value);
    levels.get(1).or_else(|| levels.last()).cloned()
}

/// Text or the `Unknown` sentinel
pub fn text_or_unknown(source: &Value, names: &[&str]) -> String {
    first_text(source, names).unwrap_or_else(|| UNKNOWN.to_string())
}
