//! Core data types for the entscheidsuche adapter.
//!
//! Every value here is built fresh from a single upstream response
//! and dropped once the caller has its answer.

use crate::core::error::{EntscheidsucheError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Language code -> text. Any subset may be present.
pub type LanguageMap = BTreeMap<String, String>;

/// Sentinel used for display fields the upstream did not provide
pub const UNKNOWN: &str = "Unknown";

/// Sort direction for search requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// `field` or `field:direction`, direction defaulting to `desc`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl FromStr for SortSpec {
    type Err = EntscheidsucheError;

    fn from_str(s: &str) -> Result<Self> {
        let (field, direction) = match s.trim().rsplit_once(':') {
            Some((field, dir)) => {
                let direction = match dir.trim().to_ascii_lowercase().as_str() {
                    "asc" => SortDirection::Asc,
                    "desc" | "" => SortDirection::Desc,
                    other => {
                        return Err(EntscheidsucheError::InvalidParams(format!(
                            "Invalid sort direction '{other}' (expected 'asc' or 'desc')"
                        )))
                    }
                };
                (field.trim(), direction)
            }
            None => (s.trim(), SortDirection::Desc),
        };

        if field.is_empty() {
            return Err(EntscheidsucheError::InvalidParams(
                "Sort field cannot be empty".to_string(),
            ));
        }

        Ok(SortSpec {
            field: field.to_string(),
            direction,
        })
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.direction.as_str())
    }
}

/// A validated search request
///
/// Construct through [`SearchQuery::new`], which clamps `size` into
/// `[1, max]` and `from` to `>= 0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    pub text: String,
    pub size: usize,
    pub from: usize,
    pub sort: Option<SortSpec>,
}

/// One matched document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// External primary key
    pub signature: String,
    pub court: String,
    pub canton: Option<String>,
    pub date: Option<String>,
    pub title: LanguageMap,
    #[serde(rename = "abstract")]
    pub abstract_text: LanguageMap,
    pub reference: Option<String>,
    pub html_url: Option<String>,
    pub pdf_url: Option<String>,
    pub scraped_at: Option<String>,
}

/// Total count plus the hits of the requested page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultPage {
    /// Upstream-reported; may exceed `hits.len()`
    pub total: u64,
    pub hits: Vec<SearchHit>,
}

impl SearchResultPage {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Per-document record derived from the store's JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub signature: String,
    pub case_number: String,
    pub date: String,
    pub court: String,
    pub language: String,
    pub collection: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub pdf_url: Option<String>,
    pub html_url: Option<String>,
    pub source_url: Option<String>,
}

/// Where a document lives, as resolved through the search index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLocation {
    pub signature: String,
    pub collection: String,
    pub content_url: String,
}

/// Absolute URLs of every rendition of one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUrls {
    pub signature: String,
    pub collection: Option<String>,
    pub json_url: Option<String>,
    pub html_url: Option<String>,
    pub pdf_url: Option<String>,
    pub source_url: Option<String>,
}

/// Per-collection scraper status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScraperStatus {
    pub collection: String,
    pub last_run: Option<String>,
    pub document_count: Option<u64>,
    pub job_type: Option<String>,
}

/// Courts of one canton, in page order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CantonCourts {
    pub canton: String,
    pub courts: Vec<String>,
}

/// Canton label -> ordered court names, in page order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CourtsByCanton {
    pub cantons: Vec<CantonCourts>,
}

impl CourtsByCanton {
    pub fn is_empty(&self) -> bool {
        self.cantons.is_empty()
    }

    pub fn court_count(&self) -> usize {
        self.cantons.iter().map(|c| c.courts.len()).sum()
    }

    pub fn get(&self, canton: &str) -> Option<&[String]> {
        self.cantons
            .iter()
            .find(|c| c.canton == canton)
            .map(|c| c.courts.as_slice())
    }
}

/// Rendition requested from the document store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Json,
    Html,
    Pdf,
    /// HTML rendition reduced to plain text
    Text,
}

impl DocumentFormat {
    /// File extension in the document store
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Html | DocumentFormat::Text => "html",
            DocumentFormat::Pdf => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            DocumentFormat::Json => "application/json",
            DocumentFormat::Html => "text/html",
            DocumentFormat::Pdf => "application/pdf",
            DocumentFormat::Text => "text/plain",
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = EntscheidsucheError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(DocumentFormat::Json),
            "html" => Ok(DocumentFormat::Html),
            "pdf" => Ok(DocumentFormat::Pdf),
            "text" | "txt" => Ok(DocumentFormat::Text),
            other => Err(EntscheidsucheError::InvalidParams(format!(
                "Unknown format '{other}' (expected json, html, pdf or text)"
            ))),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Html => "html",
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Text => "text",
        };
        f.write_str(s)
    }
}
