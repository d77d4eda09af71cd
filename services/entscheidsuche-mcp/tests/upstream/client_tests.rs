//! End-to-end service tests against a mock upstream

use crate::common::{
    create_test_services, metadata_json, mount_search, search_response, source_hit, status_json,
    test_config, STATUS_PAGE, TEST_SIGNATURE,
};
use entscheidsuche_mcp::core::config::SearchDialect;
use entscheidsuche_mcp::core::error::EntscheidsucheError;
use entscheidsuche_mcp::core::lookup::CollectionSource;
use entscheidsuche_mcp::core::services::{DocumentContent, Services};
use entscheidsuche_mcp::core::types::DocumentFormat;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn doc_path(extension: &str) -> String {
    format!("/docs/CH_BGer/{TEST_SIGNATURE}.{extension}")
}

#[tokio::test]
async fn test_search_returns_all_hits_and_total() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/_searchV2.php"))
        .and(body_partial_json(json!({
            "query": { "simple_query_string": { "query": "copyright" } },
            "size": 10,
            "from": 0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_response(
            3,
            vec![
                source_hit("CH_BGer_005_5F-23-2025_2025-07-01"),
                source_hit("CH_BGer_004_4A-100-2024_2024-11-12"),
                source_hit("CH_BGer_006_6B-7-2025_2025-03-03"),
            ],
        )))
        .expect(1)
        .mount(&server)
        .await;

    let services = create_test_services(&server);
    let (query, page) = services.search("copyright", None, None, None).await.unwrap();

    assert_eq!(query.size, 10);
    assert_eq!(page.total, 3);
    assert_eq!(page.hits.len(), 3);
    let hit = &page.hits[0];
    assert_eq!(hit.signature, TEST_SIGNATURE);
    assert_eq!(hit.court, "CH_BGer");
    assert_eq!(hit.title.get("de").map(String::as_str), Some("Urheberrecht"));
    assert_eq!(
        hit.html_url.as_deref(),
        Some(format!("{}{}", server.uri(), doc_path("html")).as_str())
    );
}

#[tokio::test]
async fn test_search_sends_clamped_size_and_sort() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "size": 50,
            "from": 0,
            "sort": [{ "date": { "order": "asc" } }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_response(0, vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let services = create_test_services(&server);
    let (query, page) = services
        .search("Mietrecht", Some(500), Some(-4), Some("date:asc"))
        .await
        .unwrap();

    assert_eq!(query.size, 50);
    assert_eq!(query.from, 0);
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_fulltext_dialect_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "query": "Kündigung", "size": 10 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_response(0, vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = test_config(&server);
    config.upstream.dialect = SearchDialect::Fulltext;
    let services = Services::new(config).unwrap();

    let (_, page) = services.search("Kündigung", None, None, None).await.unwrap();
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn test_search_without_hits_object_is_empty_page() {
    let server = MockServer::start().await;
    mount_search(&server, json!({ "took": 1 })).await;

    let services = create_test_services(&server);
    let (_, page) = services.search("nothing", None, None, None).await.unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn test_search_upstream_failure_is_search_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let services = create_test_services(&server);
    let err = services
        .search("copyright", None, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, EntscheidsucheError::SearchFailed(_)));
}

#[tokio::test]
async fn test_search_garbage_body_is_search_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let services = create_test_services(&server);
    let err = services
        .search("copyright", None, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, EntscheidsucheError::SearchFailed(_)));
}

#[tokio::test]
async fn test_empty_query_never_reaches_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let services = create_test_services(&server);
    let err = services.search("   ", None, None, None).await.unwrap_err();
    assert!(matches!(err, EntscheidsucheError::InvalidQuery(_)));
}

#[tokio::test]
async fn test_resolve_without_hits_is_none() {
    let server = MockServer::start().await;
    mount_search(&server, search_response(0, vec![])).await;

    let services = create_test_services(&server);
    let found = services
        .upstream
        .resolve_document(TEST_SIGNATURE)
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_resolve_ignores_near_matches() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        search_response(1, vec![source_hit("CH_BGer_005_5F-23-2025_2025-07-02")]),
    )
    .await;

    let services = create_test_services(&server);
    let found = services
        .upstream
        .resolve_document(TEST_SIGNATURE)
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_get_document_text_through_resolution() {
    let server = MockServer::start().await;
    mount_search(&server, search_response(1, vec![source_hit(TEST_SIGNATURE)])).await;
    Mock::given(method("GET"))
        .and(path(doc_path("html")))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><body><h1>Urteil</h1><p>Das Gesuch wird abgewiesen.</p></body></html>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let services = create_test_services(&server);
    let document = services
        .get_document(TEST_SIGNATURE, None, DocumentFormat::Text)
        .await
        .unwrap();

    assert_eq!(document.target.source, CollectionSource::Resolved);
    assert_eq!(document.target.collection, "CH_BGer");
    match document.content {
        DocumentContent::Text(text) => {
            assert!(text.contains("Urteil"));
            assert!(text.contains("Das Gesuch wird abgewiesen."));
            assert!(!text.contains("<p>"));
        }
        other => panic!("expected text, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_document_json_with_explicit_collection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(doc_path("json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(metadata_json(TEST_SIGNATURE)))
        .mount(&server)
        .await;

    let services = create_test_services(&server);
    let document = services
        .get_document(TEST_SIGNATURE, Some("CH_BGer"), DocumentFormat::Json)
        .await
        .unwrap();

    assert_eq!(document.target.source, CollectionSource::Explicit);
    match document.content {
        DocumentContent::Metadata(metadata) => {
            assert_eq!(metadata.signature, TEST_SIGNATURE);
            assert_eq!(metadata.case_number, "5F_23/2025");
            assert_eq!(metadata.language, "de");
            assert_eq!(metadata.abstract_text.as_deref(), Some("Revisionsgesuch abgewiesen"));
        }
        other => panic!("expected metadata, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_document_pdf_bytes() {
    let server = MockServer::start().await;
    let pdf = b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n".to_vec();
    Mock::given(method("GET"))
        .and(path(doc_path("pdf")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/pdf")
                .set_body_bytes(pdf.clone()),
        )
        .mount(&server)
        .await;

    let services = create_test_services(&server);
    let document = services
        .get_document(TEST_SIGNATURE, Some("CH_BGer"), DocumentFormat::Pdf)
        .await
        .unwrap();

    assert!(document.url.ends_with(".pdf"));
    match document.content {
        DocumentContent::Pdf(bytes) => assert_eq!(bytes, pdf),
        other => panic!("expected pdf, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resolution_failure_falls_back_to_derived_collection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(doc_path("json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(metadata_json(TEST_SIGNATURE)))
        .expect(1)
        .mount(&server)
        .await;

    let services = create_test_services(&server);
    let document = services
        .get_document(TEST_SIGNATURE, None, DocumentFormat::Json)
        .await
        .unwrap();

    assert_eq!(document.target.source, CollectionSource::Derived);
    assert_eq!(document.target.collection, "CH_BGer");
}

#[tokio::test]
async fn test_missing_document_is_fetch_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let services = create_test_services(&server);
    let err = services
        .get_document(TEST_SIGNATURE, Some("CH_BGer"), DocumentFormat::Html)
        .await
        .unwrap_err();

    match err {
        EntscheidsucheError::DocumentFetchFailed { url, reason } => {
            assert!(url.ends_with(&doc_path("html")));
            assert_eq!(reason, "HTTP 404");
        }
        other => panic!("expected DocumentFetchFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_underivable_signature_is_not_found() {
    let server = MockServer::start().await;
    mount_search(&server, search_response(0, vec![])).await;

    let services = create_test_services(&server);
    let err = services
        .get_document("Einzelsignatur", None, DocumentFormat::Json)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_traversal_in_collection_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let services = create_test_services(&server);
    let err = services
        .get_document(TEST_SIGNATURE, Some("../Index"), DocumentFormat::Json)
        .await
        .unwrap_err();
    assert!(err.is_bad_request());
}

#[tokio::test]
async fn test_document_urls_are_absolute() {
    let server = MockServer::start().await;
    mount_search(&server, search_response(1, vec![source_hit(TEST_SIGNATURE)])).await;
    Mock::given(method("GET"))
        .and(path(doc_path("json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(metadata_json(TEST_SIGNATURE)))
        .mount(&server)
        .await;

    let services = create_test_services(&server);
    let urls = services.get_document_urls(TEST_SIGNATURE).await.unwrap();
    let base = server.uri();

    assert_eq!(urls.signature, TEST_SIGNATURE);
    assert_eq!(urls.collection.as_deref(), Some("CH_BGer"));
    assert_eq!(urls.json_url, Some(format!("{base}{}", doc_path("json"))));
    assert_eq!(urls.html_url, Some(format!("{base}{}", doc_path("html"))));
    assert_eq!(urls.pdf_url, Some(format!("{base}{}", doc_path("pdf"))));
}

#[tokio::test]
async fn test_collection_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/docs/Index/CH_BGer/last"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_json()))
        .expect(1)
        .mount(&server)
        .await;

    let services = create_test_services(&server);
    let status = services.collection_status("CH_BGer").await.unwrap();

    assert_eq!(status.collection, "CH_BGer");
    assert_eq!(status.last_run.as_deref(), Some("2025-07-20T03:15:00+00:00"));
    assert_eq!(status.document_count, Some(123456));
    assert_eq!(status.job_type.as_deref(), Some("update"));
}

#[tokio::test]
async fn test_unknown_collection_status_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let services = create_test_services(&server);
    let err = services.collection_status("XX_Nirgends").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_list_courts_from_status_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string(STATUS_PAGE))
        .mount(&server)
        .await;

    let services = create_test_services(&server);

    let all = services.list_courts(None).await.unwrap();
    assert_eq!(all.cantons.len(), 2);
    assert_eq!(all.court_count(), 4);

    let zurich = services.list_courts(Some("ZH")).await.unwrap();
    assert_eq!(zurich.cantons.len(), 1);
    assert_eq!(zurich.cantons[0].canton, "Zürich (ZH)");

    let none = services.list_courts(Some("Atlantis")).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_services_share_one_pacer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string(STATUS_PAGE))
        .mount(&server)
        .await;

    let mut config = test_config(&server);
    config.rate_limit.min_interval_ms = 150;
    let services = Arc::new(Services::new(config).unwrap());
    let clone = Arc::clone(&services);

    let start = std::time::Instant::now();
    services.list_courts(None).await.unwrap();
    clone.list_courts(None).await.unwrap();

    assert!(start.elapsed() >= std::time::Duration::from_millis(150));
}
