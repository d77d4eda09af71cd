// Upstream payloads shaped like entscheidsuche.ch answers

use serde_json::{json, Value};

/// Federal Supreme Court decision used throughout the tests
#[allow(dead_code)] // Used in integration tests
pub const TEST_SIGNATURE: &str = "CH_BGer_005_5F-23-2025_2025-07-01";

/// Index `_source` of one decision
#[allow(dead_code)] // Used in integration tests
pub fn source_hit(signature: &str) -> Value {
    json!({
        "_id": signature,
        "_source": {
            "id": signature,
            "canton": "CH",
            "hierarchy": ["CH", "CH_BGer", "CH_BGer_005"],
            "date": "2025-07-01",
            "title": { "de": "Urheberrecht", "fr": "Droit d'auteur" },
            "abstract": { "de": "Revision eines Urteils", "fr": "Révision" },
            "reference": ["5F_23/2025"],
            "attachment": {
                "content_url": format!("/docs/CH_BGer/{signature}.html")
            },
            "scrapedate": "2025-07-20"
        }
    })
}

/// Elasticsearch-shaped search answer
#[allow(dead_code)] // Used in integration tests
pub fn search_response(total: u64, hits: Vec<Value>) -> Value {
    json!({
        "took": 3,
        "timed_out": false,
        "hits": {
            "total": { "value": total, "relation": "eq" },
            "hits": hits
        }
    })
}

/// Per-document JSON from the document store
#[allow(dead_code)] // Used in integration tests
pub fn metadata_json(signature: &str) -> Value {
    json!({
        "Signatur": signature,
        "Spider": "CH_BGer",
        "Sprache": "de",
        "Num": ["5F_23/2025"],
        "EDatum": "2025-07-01",
        "Kopfzeile": [{ "Sprachen": ["de"], "Text": "Bundesgericht, Urteil vom 1. Juli 2025" }],
        "Abstract": [{ "Sprachen": ["de"], "Text": "Revisionsgesuch abgewiesen" }],
        "HTMLFile": format!("CH_BGer/{signature}.html"),
        "PDFFile": format!("CH_BGer/{signature}.pdf")
    })
}

/// Scraper status record (`/docs/Index/{collection}/last`)
#[allow(dead_code)] // Used in integration tests
pub fn status_json() -> Value {
    json!({ "zeit": "2025-07-20 03:15:00", "gesamt": 123456, "jobtyp": "update" })
}

/// Status page listing courts per canton
#[allow(dead_code)] // Used in integration tests
pub const STATUS_PAGE: &str = r#"
<html><body>
<h1>Status</h1>
<h2>Bund (CH)</h2>
<table>
  <tr><th>Gericht</th><th>Dokumente</th></tr>
  <tr><td><a href="/docs/CH_BGer">Bundesgericht</a></td><td>123</td></tr>
  <tr><td>Bundesverwaltungsgericht</td><td>45</td></tr>
</table>
<h2>Z&uuml;rich (ZH)</h2>
<ul>
  <li>Obergericht</li>
  <li>Verwaltungsgericht</li>
</ul>
</body></html>
"#;
