//! Helper functions for MCP tools

use crate::mcp::error::McpError;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Format bytes as human-readable size
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Deserialize tool arguments, treating a missing object as `{}`
pub fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, McpError> {
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };
    serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))
}

/// Optional integer that also accepts numeric strings like `"10"`
///
/// Use with `#[serde(default, deserialize_with = "optional_int")]`.
pub fn optional_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Int(n)) => Ok(Some(n)),
        Some(IntOrString::Float(f)) if f.fract() == 0.0 => Ok(Some(f as i64)),
        Some(IntOrString::Float(f)) => Err(D::Error::custom(format!("expected an integer, got {f}"))),
        Some(IntOrString::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(IntOrString::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected an integer, got \"{s}\""))),
    }
}

/// Truncate text to `max_chars` characters, appending a notice
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let total = text.chars().count();
    if total <= max_chars {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_chars).collect();
    format!(
        "{truncated}...\n\n[Truncated: showing {max_chars} of {total} characters. \
         Use get_document_urls for the full document.]"
    )
}
