//! Per-collection scraper status normalization

use super::fields::{first_present, first_text};
use crate::core::types::ScraperStatus;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

const TIMESTAMP_FIELDS: &[&str] = &["time", "zeit", "timestamp", "last_run"];
const COUNT_FIELDS: &[&str] = &["gesamt", "total", "count", "anzahl"];
const JOB_TYPE_FIELDS: &[&str] = &["jobtyp", "job_type", "typ", "job"];

/// Naive layouts seen in index files, interpreted as UTC
const NAIVE_LAYOUTS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Map an `Index/{collection}/last` document onto [`ScraperStatus`]
pub fn normalize_status(collection: &str, raw: &Value) -> ScraperStatus {
    ScraperStatus {
        collection: collection.to_string(),
        last_run: first_present(raw, TIMESTAMP_FIELDS).and_then(timestamp),
        document_count: first_present(raw, COUNT_FIELDS).and_then(count),
        job_type: first_text(raw, JOB_TYPE_FIELDS),
    }
}

/// RFC 3339 rendition when the value parses, the raw text otherwise
fn timestamp(value: &Value) -> Option<String> {
    if let Some(secs) = value.as_i64() {
        return DateTime::<Utc>::from_timestamp(secs, 0).map(|dt| dt.to_rfc3339());
    }

    let raw = value.as_str().map(str::trim).filter(|s| !s.is_empty())?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).to_rfc3339());
    }
    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, layout) {
            return Some(naive.and_utc().to_rfc3339());
        }
    }
    Some(raw.to_string())
}

fn count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().replace(['\'', ','], "").parse().ok(),
        _ => None,
    }
}
