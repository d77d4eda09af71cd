//! UpstreamClient: search, resolve and fetch against entscheidsuche.ch
//!
//! Stateless apart from the shared transport. Every method issues one
//! paced request and maps the answer through the normalizer.

use super::query::{derive_collection, parse_search_response, resolve_body, search_body};
use super::transport::{Transport, UpstreamResponse};
use crate::core::config::{Config, SearchConfig, SearchDialect, UpstreamConfig};
use crate::core::error::{EntscheidsucheError, Result};
use crate::core::normalize::fields::{court_from_hierarchy, first_text, lookup};
use crate::core::normalize::{
    normalize_hit, normalize_metadata, normalize_status, resolve_docs_url,
};
use crate::core::types::{
    DocumentFormat, DocumentLocation, DocumentMetadata, ScraperStatus, SearchQuery,
    SearchResultPage,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Raw rendition fetched from the document store
#[derive(Debug, Clone)]
pub struct DocumentBody {
    pub url: String,
    pub format: DocumentFormat,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl DocumentBody {
    /// Body as UTF-8 text, invalid sequences replaced
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

pub struct UpstreamClient {
    transport: Arc<dyn Transport>,
    upstream: UpstreamConfig,
    limits: SearchConfig,
}

impl UpstreamClient {
    pub fn new(transport: Arc<dyn Transport>, config: &Config) -> Self {
        Self {
            transport,
            upstream: config.upstream.clone(),
            limits: config.search.clone(),
        }
    }

    pub fn dialect(&self) -> SearchDialect {
        self.upstream.dialect
    }

    pub fn limits(&self) -> &SearchConfig {
        &self.limits
    }

    /// `{base}/docs`
    pub fn docs_url(&self) -> String {
        self.upstream.docs_url()
    }

    /// Run a search; hit file paths come back as absolute URLs
    ///
    /// Transport failures and unreadable bodies become `SearchFailed`.
    /// A readable answer without hits is an empty page.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResultPage> {
        let url = self.upstream.search_url();
        let body = search_body(self.upstream.dialect, query);
        debug!(
            query = %query.text,
            size = query.size,
            from = query.from,
            dialect = self.upstream.dialect.as_str(),
            "Searching upstream"
        );

        let raw: Value = self
            .transport
            .post_json(&url, &body)
            .await
            .and_then(|response| response.json())
            .map_err(|e| {
                warn!(error = %e, "Search failed");
                EntscheidsucheError::SearchFailed(e.message())
            })?;

        let mut page = parse_search_response(&raw);
        let docs = self.docs_url();
        for hit in &mut page.hits {
            hit.html_url = hit.html_url.as_deref().map(|p| resolve_docs_url(p, &docs));
            hit.pdf_url = hit.pdf_url.as_deref().map(|p| resolve_docs_url(p, &docs));
        }

        info!(total = page.total, returned = page.hits.len(), "Search completed");
        Ok(page)
    }

    /// Look up the canonical location of a document by exact identifier
    ///
    /// `Ok(None)` when no hit carries exactly this signature.
    pub async fn resolve_document(&self, signature: &str) -> Result<Option<DocumentLocation>> {
        let signature = validate_segment("signature", signature)?;
        let url = self.upstream.search_url();
        let body = resolve_body(self.upstream.dialect, signature);

        let raw: Value = self.transport.post_json(&url, &body).await?.json()?;

        let entries = raw
            .get("hits")
            .and_then(|h| h.get("hits"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let docs = self.docs_url();
        for entry in entries {
            let source = entry.get("_source").unwrap_or(&Value::Null);
            let id = entry.get("_id").and_then(Value::as_str);
            if normalize_hit(source, id).signature != signature {
                continue;
            }
            let location = location_from_source(signature, source, &docs);
            debug!(
                signature,
                collection = %location.collection,
                url = %location.content_url,
                "Resolved document"
            );
            return Ok(Some(location));
        }

        debug!(signature, hits = entries.len(), "No exact match for signature");
        Ok(None)
    }

    /// Fetch one rendition of a document
    ///
    /// A resolved location wins over the `{collection}/{signature}.{ext}`
    /// path. Non-2xx answers become `DocumentFetchFailed`.
    pub async fn fetch_document(
        &self,
        signature: &str,
        collection: &str,
        location: Option<&DocumentLocation>,
        format: DocumentFormat,
    ) -> Result<DocumentBody> {
        let signature = validate_segment("signature", signature)?;
        let collection = validate_segment("collection", collection)?;

        let url = match location {
            Some(loc) => with_extension(&loc.content_url, format.extension()),
            None => format!(
                "{}/{}/{}.{}",
                self.docs_url(),
                collection,
                signature,
                format.extension()
            ),
        };

        let response = self.transport.get(&url).await.map_err(|e| match e {
            EntscheidsucheError::UpstreamHttp { status, url } => {
                EntscheidsucheError::DocumentFetchFailed {
                    url,
                    reason: format!("HTTP {status}"),
                }
            }
            other => other,
        })?;

        let UpstreamResponse {
            url,
            content_type,
            body,
            ..
        } = response;
        Ok(DocumentBody {
            url,
            format,
            content_type,
            bytes: body,
        })
    }

    /// Fetch and normalize the JSON metadata record of a document
    pub async fn fetch_metadata(
        &self,
        signature: &str,
        collection: &str,
        location: Option<&DocumentLocation>,
    ) -> Result<DocumentMetadata> {
        let body = self
            .fetch_document(signature, collection, location, DocumentFormat::Json)
            .await?;
        let raw: Value = serde_json::from_slice(&body.bytes).map_err(|e| {
            EntscheidsucheError::UnparseableResponse {
                url: body.url.clone(),
                message: e.to_string(),
            }
        })?;
        Ok(normalize_metadata(&raw))
    }

    /// Scraper status from `{base}/docs/Index/{collection}/last`
    pub async fn fetch_collection_status(&self, collection: &str) -> Result<ScraperStatus> {
        let collection = validate_segment("collection", collection)?;
        let url = format!("{}/Index/{}/last", self.docs_url(), collection);
        let raw: Value = self.transport.get(&url).await?.json()?;
        Ok(normalize_status(collection, &raw))
    }

    /// Raw HTML of the upstream status page
    pub async fn fetch_status_page(&self) -> Result<String> {
        let url = self.upstream.status_url();
        Ok(self.transport.get(&url).await?.text())
    }
}

/// Reject empty names and anything that would escape its path segment
fn validate_segment<'a>(what: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(EntscheidsucheError::InvalidParams(format!(
            "{what} cannot be empty"
        )));
    }
    if value.contains(['/', '\\', '?', '#']) || value.contains("..") {
        return Err(EntscheidsucheError::InvalidParams(format!(
            "Invalid {what}: '{value}'"
        )));
    }
    Ok(value)
}

/// Build a location from the matching hit's raw source
///
/// Collection: `/docs/{collection}/` segment of the content URL, then
/// `Spider`, then the hierarchy, then the identifier heuristic.
fn location_from_source(signature: &str, source: &Value, docs_base: &str) -> DocumentLocation {
    let content_url = first_text(
        source,
        &["attachment.content_url", "HTMLFile", "html_url", "PDFFile", "pdf_url"],
    )
    .map(|p| resolve_docs_url(&p, docs_base));

    let collection = content_url
        .as_deref()
        .and_then(collection_from_url)
        .or_else(|| first_text(source, &["Spider", "collection"]))
        .or_else(|| lookup(source, "hierarchy").and_then(court_from_hierarchy))
        .or_else(|| derive_collection(signature))
        .unwrap_or_else(|| signature.to_string());

    let content_url = content_url.unwrap_or_else(|| {
        format!(
            "{}/{}/{}.html",
            docs_base.trim_end_matches('/'),
            collection,
            signature
        )
    });

    DocumentLocation {
        signature: signature.to_string(),
        collection,
        content_url,
    }
}

/// `https://host/docs/CH_BGer/x.html` -> `CH_BGer`
fn collection_from_url(url: &str) -> Option<String> {
    let (_, rest) = url.split_once("/docs/")?;
    let (segment, _) = rest.split_once('/')?;
    (!segment.is_empty() && segment != "Index").then(|| segment.to_string())
}

/// Swap the file extension of a URL path, keeping any query string
fn with_extension(url: &str, extension: &str) -> String {
    let (path, suffix) = match url.find(['?', '#']) {
        Some(i) => url.split_at(i),
        None => (url, ""),
    };
    let file_start = path.rfind('/').map_or(0, |i| i + 1);
    let stem = match path[file_start..].rfind('.') {
        Some(dot) => &path[..file_start + dot],
        None => path,
    };
    format!("{stem}.{extension}{suffix}")
}
