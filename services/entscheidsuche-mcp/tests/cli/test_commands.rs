//! CLI command handler tests against a mock upstream

use crate::common::{
    create_test_services, metadata_json, mount_search, search_response, source_hit, status_json,
    STATUS_PAGE, TEST_SIGNATURE,
};
use entscheidsuche_mcp::cli::commands::document::{self, Rendition, UrlsArgs};
use entscheidsuche_mcp::cli::commands::{
    config, courts, info, search, status, ConfigArgs, CourtsArgs, DocumentArgs, InfoArgs,
    SearchArgs, StatusArgs,
};
use entscheidsuche_mcp::cli::OutputFormat;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn search_args(query: &str) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        size: None,
        from: None,
        sort: None,
        signatures_only: false,
    }
}

#[tokio::test]
async fn test_search_human_and_json() {
    let server = MockServer::start().await;
    mount_search(&server, search_response(1, vec![source_hit(TEST_SIGNATURE)])).await;
    let services = create_test_services(&server);

    for format in [OutputFormat::Human, OutputFormat::Json] {
        search::execute(search_args("copyright"), &services, format)
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_search_empty_query_fails() {
    let server = MockServer::start().await;
    let services = create_test_services(&server);

    let err = search::execute(search_args("  "), &services, OutputFormat::Human)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Query cannot be empty"));
}

#[tokio::test]
async fn test_get_document_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/docs/CH_BGer/{TEST_SIGNATURE}.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(metadata_json(TEST_SIGNATURE)))
        .mount(&server)
        .await;
    let services = create_test_services(&server);

    let args = DocumentArgs {
        signature: TEST_SIGNATURE.to_string(),
        collection: Some("CH_BGer".to_string()),
        rendition: Rendition::Json,
        output: None,
    };
    document::execute(args, &services, OutputFormat::Human)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_document_pdf_requires_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let services = create_test_services(&server);

    let args = DocumentArgs {
        signature: TEST_SIGNATURE.to_string(),
        collection: Some("CH_BGer".to_string()),
        rendition: Rendition::Pdf,
        output: None,
    };
    let err = document::execute(args, &services, OutputFormat::Human)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("--output"));
}

#[tokio::test]
async fn test_get_document_pdf_written_to_file() {
    let server = MockServer::start().await;
    let pdf = b"%PDF-1.4 cli".to_vec();
    Mock::given(method("GET"))
        .and(path(format!("/docs/CH_BGer/{TEST_SIGNATURE}.pdf")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(pdf.clone()))
        .mount(&server)
        .await;
    let services = create_test_services(&server);
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("decision.pdf");

    let args = DocumentArgs {
        signature: TEST_SIGNATURE.to_string(),
        collection: Some("CH_BGer".to_string()),
        rendition: Rendition::Pdf,
        output: Some(target.clone()),
    };
    document::execute(args, &services, OutputFormat::Human)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&target).unwrap(), pdf);
}

#[tokio::test]
async fn test_get_document_urls() {
    let server = MockServer::start().await;
    mount_search(&server, search_response(1, vec![source_hit(TEST_SIGNATURE)])).await;
    Mock::given(method("GET"))
        .and(path(format!("/docs/CH_BGer/{TEST_SIGNATURE}.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(metadata_json(TEST_SIGNATURE)))
        .mount(&server)
        .await;
    let services = create_test_services(&server);

    let args = UrlsArgs {
        signature: TEST_SIGNATURE.to_string(),
    };
    document::execute_urls(args, &services, OutputFormat::Json)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_courts_unknown_canton_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string(STATUS_PAGE))
        .mount(&server)
        .await;
    let services = create_test_services(&server);

    let args = CourtsArgs {
        canton: Some("Atlantis".to_string()),
    };
    courts::execute(args, &services, OutputFormat::Human)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_collection_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/docs/Index/CH_BGer/last"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_json()))
        .mount(&server)
        .await;
    let services = create_test_services(&server);

    let args = StatusArgs {
        collection: "CH_BGer".to_string(),
    };
    status::execute(args, &services, OutputFormat::Human)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_collection_status_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let services = create_test_services(&server);

    let args = StatusArgs {
        collection: "CH_BGer".to_string(),
    };
    let err = status::execute(args, &services, OutputFormat::Json)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("HTTP 500"));
}

#[tokio::test]
async fn test_config_and_info_make_no_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let services = create_test_services(&server);

    config::execute(ConfigArgs { all: true }, &services, OutputFormat::Json)
        .await
        .unwrap();
    info::execute(InfoArgs { detailed: true }, &services, OutputFormat::Human)
        .await
        .unwrap();
}
