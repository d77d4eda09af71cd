//! Request construction for the search endpoint
//!
//! Two upstream dialects share one canonical [`SearchQuery`]; each has a
//! thin body builder here. Responses of both are read by
//! [`parse_search_response`].

use crate::core::config::{SearchConfig, SearchDialect};
use crate::core::error::{EntscheidsucheError, Result};
use crate::core::normalize::normalize_hit;
use crate::core::types::{SearchQuery, SearchResultPage, SortSpec};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};

/// Separator between identifier segments (`CH_BGer_005_...`)
pub const SIGNATURE_SEPARATOR: char = '_';

/// Fields carrying the full document text in the index; never returned
const EXCLUDED_SOURCE_FIELDS: &[&str] = &["attachment.content"];

/// Lucene syntax that calls for `query_string` instead of `simple_query_string`
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LUCENE_SYNTAX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(\w:|"|\*|\?|\(|\)|\b(AND|OR|NOT)\b|~\d*|\[.+ TO .+\])"#).expect("valid regex")
});

/// Clamp a requested page size into `[1, max]`, defaulting when absent
pub fn clamp_size(requested: Option<i64>, limits: &SearchConfig) -> usize {
    let max = limits.max_size.max(1);
    match requested {
        None => limits.default_size.clamp(1, max),
        Some(n) if n < 1 => 1,
        Some(n) => usize::try_from(n).map_or(max, |n| n.min(max)),
    }
}

/// Clamp a requested offset to `>= 0`
pub fn clamp_from(requested: Option<i64>) -> usize {
    requested
        .and_then(|n| usize::try_from(n.max(0)).ok())
        .unwrap_or(0)
}

impl SearchQuery {
    /// Validate and clamp caller input
    pub fn new(
        text: &str,
        size: Option<i64>,
        from: Option<i64>,
        sort: Option<&str>,
        limits: &SearchConfig,
    ) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(EntscheidsucheError::InvalidQuery(
                "Query cannot be empty".to_string(),
            ));
        }

        let sort = match sort.map(str::trim) {
            Some(s) if !s.is_empty() => Some(s.parse::<SortSpec>()?),
            _ => None,
        };

        Ok(Self {
            text: text.to_string(),
            size: clamp_size(size, limits),
            from: clamp_from(from),
            sort,
        })
    }
}

/// Build the query clause for the Elasticsearch dialect
///
/// A JSON object is passed through verbatim; Lucene syntax goes to
/// `query_string`; anything else to `simple_query_string`.
pub fn elasticsearch_clause(text: &str) -> Value {
    let trimmed = text.trim();
    if trimmed.starts_with('{') {
        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
            return Value::Object(map);
        }
    }

    if LUCENE_SYNTAX.is_match(trimmed) {
        json!({
            "query_string": {
                "query": trimmed,
                "default_operator": "AND"
            }
        })
    } else {
        json!({
            "simple_query_string": {
                "query": trimmed,
                "default_operator": "and"
            }
        })
    }
}

/// Search body in the Elasticsearch dialect
pub fn elasticsearch_body(query: &SearchQuery) -> Value {
    let mut body = json!({
        "query": elasticsearch_clause(&query.text),
        "size": query.size,
        "from": query.from,
        "_source": { "excludes": EXCLUDED_SOURCE_FIELDS },
    });
    if let Some(sort) = &query.sort {
        let mut clause = serde_json::Map::new();
        clause.insert(
            sort.field.clone(),
            json!({ "order": sort.direction.as_str() }),
        );
        body["sort"] = Value::Array(vec![Value::Object(clause)]);
    }
    body
}

/// Search body in the simplified full-text dialect
pub fn fulltext_body(query: &SearchQuery) -> Value {
    let mut body = json!({
        "query": query.text,
        "size": query.size,
        "from": query.from,
    });
    if let Some(sort) = &query.sort {
        body["sort"] = json!(sort.to_string());
    }
    body
}

/// Dispatch to the dialect's body builder
pub fn search_body(dialect: SearchDialect, query: &SearchQuery) -> Value {
    match dialect {
        SearchDialect::Elasticsearch => elasticsearch_body(query),
        SearchDialect::Fulltext => fulltext_body(query),
    }
}

/// Exact-identifier lookup body
pub fn resolve_body(dialect: SearchDialect, signature: &str) -> Value {
    match dialect {
        SearchDialect::Elasticsearch => json!({
            "query": {
                "bool": {
                    "should": [
                        { "ids": { "values": [signature] } },
                        { "term": { "id": signature } }
                    ],
                    "minimum_should_match": 1
                }
            },
            "size": 1,
            "from": 0,
            "_source": { "excludes": EXCLUDED_SOURCE_FIELDS },
        }),
        SearchDialect::Fulltext => json!({
            "query": format!("\"{signature}\""),
            "size": 5,
            "from": 0,
        }),
    }
}

/// Read an Elasticsearch-shaped response into a page
///
/// A missing `hits` object is an empty page. `hits.total` may be
/// `{ "value": n }` or a bare number.
pub fn parse_search_response(body: &Value) -> SearchResultPage {
    let Some(hits) = body.get("hits") else {
        return SearchResultPage::empty();
    };

    let entries: Vec<&Value> = hits
        .get("hits")
        .and_then(Value::as_array)
        .map(|a| a.iter().collect())
        .unwrap_or_default();

    let total = match hits.get("total") {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::Object(o)) => o.get("value").and_then(Value::as_u64),
        _ => None,
    }
    .unwrap_or(entries.len() as u64);

    let hits = entries
        .into_iter()
        .map(|entry| {
            let source = entry.get("_source").cloned().unwrap_or(Value::Null);
            let id = entry.get("_id").and_then(Value::as_str);
            normalize_hit(&source, id)
        })
        .collect();

    SearchResultPage { total, hits }
}

/// Best-effort collection name from an identifier
///
/// Joins the first two separator-delimited segments:
/// `CH_BGer_005_5F-23-2025_2025-07-01` -> `CH_BGer`. Not guaranteed for
/// every identifier shape; only used when resolution is unavailable.
pub fn derive_collection(signature: &str) -> Option<String> {
    let mut parts = signature.trim().split(SIGNATURE_SEPARATOR);
    let first = parts.next().filter(|s| !s.is_empty())?;
    let second = parts.next().filter(|s| !s.is_empty())?;
    Some(format!("{first}{SIGNATURE_SEPARATOR}{second}"))
}
