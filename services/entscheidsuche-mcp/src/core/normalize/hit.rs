//! Search hit normalization

use super::fields::{court, first_present, first_text, language_map, lookup, string_list};
use crate::core::types::{SearchHit, UNKNOWN};
use serde_json::Value;

/// Map one hit's `_source` onto [`SearchHit`]
///
/// `id` is the hit's `_id`, used when the source carries no identifier.
pub fn normalize_hit(source: &Value, id: Option<&str>) -> SearchHit {
    let language = first_text(source, &["Sprache", "language"]);
    let language = language.as_deref();

    let signature = first_text(source, &["Signatur", "signature", "id"])
        .or_else(|| id.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string))
        .unwrap_or_else(|| UNKNOWN.to_string());

    let title = first_present(source, &["title", "Kopfzeile"])
        .map(|v| language_map(v, language))
        .unwrap_or_default();

    let abstract_text = first_present(source, &["abstract", "Abstract"])
        .map(|v| language_map(v, language))
        .unwrap_or_default();

    let reference = first_present(source, &["reference", "Num", "case_number"])
        .map(string_list)
        .filter(|refs| !refs.is_empty())
        .map(|refs| refs.join(", "));

    SearchHit {
        signature,
        court: court(source),
        canton: first_text(source, &["canton", "Kanton"]),
        date: first_text(source, &["date", "EDatum", "Datum"]),
        title,
        abstract_text,
        reference,
        html_url: first_text(source, &["HTMLFile", "html_url"])
            .or_else(|| attachment_url(source, "html")),
        pdf_url: first_text(source, &["PDFFile", "pdf_url"])
            .or_else(|| attachment_url(source, "pdf")),
        scraped_at: first_text(source, &["scrapedate", "Scrapedatum", "scraped_at"]),
    }
}

/// Index attachment URL when it points at a rendition with `ext`
pub(crate) fn attachment_url(source: &Value, ext: &str) -> Option<String> {
    let url = lookup(source, "attachment.content_url").and_then(Value::as_str)?;
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let matches_ext = path
        .rsplit_once('.')
        .is_some_and(|(_, e)| e.eq_ignore_ascii_case(ext) || (ext == "html" && e.eq_ignore_ascii_case("htm")));
    matches_ext.then(|| url.to_string())
}
