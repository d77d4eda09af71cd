//! Unified service container
//!
//! Holds the configuration and the upstream client, and carries the
//! caller-facing operations shared by the MCP and CLI adapters.

use crate::core::config::Config;
use crate::core::error::{EntscheidsucheError, Result};
use crate::core::lookup::{locate_document, DocumentTarget};
use crate::core::normalize::{html_to_text, normalize_metadata, scrape_courts_by_canton};
use crate::core::types::{
    CourtsByCanton, DocumentFormat, DocumentMetadata, DocumentUrls, ScraperStatus, SearchQuery,
    SearchResultPage, UNKNOWN,
};
use crate::core::upstream::{HttpTransport, RequestPacer, Transport, UpstreamClient};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Document rendition ready for an adapter
#[derive(Debug, Clone)]
pub enum DocumentContent {
    Metadata(DocumentMetadata),
    Html(String),
    Text(String),
    Pdf(Vec<u8>),
}

#[derive(Debug, Clone)]
pub struct FetchedDocument {
    pub target: DocumentTarget,
    pub url: String,
    pub content: DocumentContent,
}

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Application configuration
    pub config: Arc<Config>,

    /// Client for the search endpoint and document store
    pub upstream: Arc<UpstreamClient>,
}

impl Services {
    /// Create services backed by the paced HTTP transport
    pub fn new(config: Config) -> Result<Self> {
        let pacer = Arc::new(RequestPacer::new(config.rate_limit.min_interval()));
        let transport = Arc::new(HttpTransport::new(&config, pacer)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Create services over any transport
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        let upstream = Arc::new(UpstreamClient::new(transport, &config));
        Self {
            config: Arc::new(config),
            upstream,
        }
    }

    /// Validate, clamp and run a search
    pub async fn search(
        &self,
        text: &str,
        size: Option<i64>,
        from: Option<i64>,
        sort: Option<&str>,
    ) -> Result<(SearchQuery, SearchResultPage)> {
        let query = SearchQuery::new(text, size, from, sort, &self.config.search)?;
        let page = self.upstream.search(&query).await?;
        Ok((query, page))
    }

    /// Fetch a document in the requested rendition
    pub async fn get_document(
        &self,
        signature: &str,
        collection: Option<&str>,
        format: DocumentFormat,
    ) -> Result<FetchedDocument> {
        let target = locate_document(&self.upstream, signature, collection).await?;
        info!(
            signature = %target.signature,
            collection = %target.collection,
            via = target.source.as_str(),
            format = %format,
            "Fetching document"
        );

        let body = self
            .upstream
            .fetch_document(
                &target.signature,
                &target.collection,
                target.location.as_ref(),
                format,
            )
            .await?;

        let content = match format {
            DocumentFormat::Json => {
                let raw: Value = serde_json::from_slice(&body.bytes).map_err(|e| {
                    EntscheidsucheError::UnparseableResponse {
                        url: body.url.clone(),
                        message: e.to_string(),
                    }
                })?;
                DocumentContent::Metadata(normalize_metadata(&raw))
            }
            DocumentFormat::Html => DocumentContent::Html(body.text()),
            DocumentFormat::Text => DocumentContent::Text(html_to_text(&body.text())),
            DocumentFormat::Pdf => DocumentContent::Pdf(body.bytes),
        };

        Ok(FetchedDocument {
            target,
            url: body.url,
            content,
        })
    }

    /// Normalized metadata of a document
    pub async fn get_metadata(&self, signature: &str) -> Result<DocumentMetadata> {
        let target = locate_document(&self.upstream, signature, None).await?;
        self.upstream
            .fetch_metadata(&target.signature, &target.collection, target.location.as_ref())
            .await
    }

    /// Absolute URLs of every rendition of a document
    pub async fn get_document_urls(&self, signature: &str) -> Result<DocumentUrls> {
        let target = locate_document(&self.upstream, signature, None).await?;
        let mut metadata = self
            .upstream
            .fetch_metadata(&target.signature, &target.collection, target.location.as_ref())
            .await?;
        if metadata.signature == UNKNOWN {
            metadata.signature = target.signature.clone();
        }

        Ok(DocumentUrls::from_metadata(
            &metadata,
            Some(&target.collection),
            &self.upstream.docs_url(),
        ))
    }

    /// Courts grouped by canton, optionally one canton only
    pub async fn list_courts(&self, canton: Option<&str>) -> Result<CourtsByCanton> {
        let html = self.upstream.fetch_status_page().await?;
        Ok(scrape_courts_by_canton(&html, canton))
    }

    pub async fn collection_status(&self, collection: &str) -> Result<ScraperStatus> {
        self.upstream.fetch_collection_status(collection).await
    }
}
