//! Document metadata normalization and URL resolution

use super::fields::{
    court, first_present, first_text, language_map, pick_language, string_list, text_or_unknown,
};
use super::hit::attachment_url;
use crate::core::types::{DocumentMetadata, DocumentUrls, UNKNOWN};
use serde_json::Value;

/// Map the store's per-document JSON onto [`DocumentMetadata`]
///
/// Total: an empty or malformed object yields the sentinel record
/// (`Unknown` for display fields, `None` elsewhere).
pub fn normalize_metadata(raw: &Value) -> DocumentMetadata {
    let language = first_text(raw, &["Sprache", "language"]);

    let case_number = first_present(raw, &["Num", "case_number", "reference"])
        .map(string_list)
        .filter(|n| !n.is_empty())
        .map(|n| n.join(", "))
        .unwrap_or_else(|| UNKNOWN.to_string());

    let title = first_present(raw, &["Kopfzeile", "title"])
        .map(|v| language_map(v, language.as_deref()))
        .and_then(|m| pick_language(&m));

    let abstract_text = first_present(raw, &["Abstract", "abstract"])
        .map(|v| language_map(v, language.as_deref()))
        .and_then(|m| pick_language(&m));

    DocumentMetadata {
        signature: text_or_unknown(raw, &["Signatur", "signature", "id"]),
        case_number,
        date: text_or_unknown(raw, &["EDatum", "date", "Datum"]),
        court: court(raw),
        language: language.unwrap_or_else(|| UNKNOWN.to_string()),
        collection: first_text(raw, &["Spider", "collection"]),
        title,
        abstract_text,
        pdf_url: first_text(raw, &["PDFFile", "pdf_url"]).or_else(|| attachment_url(raw, "pdf")),
        html_url: first_text(raw, &["HTMLFile", "html_url"])
            .or_else(|| attachment_url(raw, "html")),
        source_url: first_text(raw, &["Quelle", "URL", "source_url"]),
    }
}

/// Turn a store-relative file path into an absolute URL
///
/// `CH_BGer/x.pdf` and `/docs/CH_BGer/x.pdf` both resolve below
/// `docs_base`; absolute http(s) URLs are kept as they are.
pub fn resolve_docs_url(path: &str, docs_base: &str) -> String {
    let path = path.trim();
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let relative = path.trim_start_matches('/');
    let relative = relative.strip_prefix("docs/").unwrap_or(relative);
    format!("{}/{}", docs_base.trim_end_matches('/'), relative)
}

impl DocumentUrls {
    /// Absolute rendition URLs for a metadata record
    ///
    /// `json_url` is only known when the owning collection is.
    pub fn from_metadata(
        metadata: &DocumentMetadata,
        collection: Option<&str>,
        docs_base: &str,
    ) -> Self {
        let signature = if metadata.signature == UNKNOWN {
            None
        } else {
            Some(metadata.signature.as_str())
        };
        let collection = collection
            .map(str::to_string)
            .or_else(|| metadata.collection.clone());

        let json_url = match (&collection, signature) {
            (Some(c), Some(s)) => Some(format!(
                "{}/{}/{}.json",
                docs_base.trim_end_matches('/'),
                c,
                s
            )),
            _ => None,
        };

        Self {
            signature: metadata.signature.clone(),
            collection,
            json_url,
            html_url: metadata
                .html_url
                .as_deref()
                .map(|p| resolve_docs_url(p, docs_base)),
            pdf_url: metadata
                .pdf_url
                .as_deref()
                .map(|p| resolve_docs_url(p, docs_base)),
            source_url: metadata.source_url.clone(),
        }
    }
}
