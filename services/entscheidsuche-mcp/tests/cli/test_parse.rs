//! Argument parsing tests for the `entscheidsuche` CLI

use clap::Parser;
use entscheidsuche_mcp::cli::commands::document::Rendition;
use entscheidsuche_mcp::cli::{Cli, Commands, OutputFormat};

#[test]
fn test_search_arguments() {
    let cli = Cli::try_parse_from([
        "entscheidsuche",
        "search",
        "Mietrecht AND Kündigung",
        "--size",
        "5",
        "--from",
        "20",
        "--sort",
        "date:asc",
    ])
    .unwrap();

    assert_eq!(cli.format, OutputFormat::Human);
    assert!(!cli.verbose);
    match cli.command {
        Commands::Search(args) => {
            assert_eq!(args.query, "Mietrecht AND Kündigung");
            assert_eq!(args.size, Some(5));
            assert_eq!(args.from, Some(20));
            assert_eq!(args.sort.as_deref(), Some("date:asc"));
            assert!(!args.signatures_only);
        }
        other => panic!("expected search, got {other:?}"),
    }
}

#[test]
fn test_negative_numbers_are_accepted() {
    // Clamping happens in the core, not in the parser
    let cli =
        Cli::try_parse_from(["entscheidsuche", "search", "x", "--from=-3", "--size=0"]).unwrap();
    match cli.command {
        Commands::Search(args) => {
            assert_eq!(args.from, Some(-3));
            assert_eq!(args.size, Some(0));
        }
        other => panic!("expected search, got {other:?}"),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "entscheidsuche",
        "list-courts",
        "--canton",
        "ZH",
        "--format",
        "json",
        "-v",
    ])
    .unwrap();

    assert_eq!(cli.format, OutputFormat::Json);
    assert!(cli.verbose);
    match cli.command {
        Commands::ListCourts(args) => assert_eq!(args.canton.as_deref(), Some("ZH")),
        other => panic!("expected list-courts, got {other:?}"),
    }
}

#[test]
fn test_get_document_defaults_to_json() {
    let cli = Cli::try_parse_from(["entscheidsuche", "get-document", "CH_BGer_1"]).unwrap();
    match cli.command {
        Commands::GetDocument(args) => {
            assert_eq!(args.signature, "CH_BGer_1");
            assert_eq!(args.rendition, Rendition::Json);
            assert!(args.collection.is_none());
            assert!(args.output.is_none());
        }
        other => panic!("expected get-document, got {other:?}"),
    }
}

#[test]
fn test_get_document_pdf_with_output() {
    let cli = Cli::try_parse_from([
        "entscheidsuche",
        "get-document",
        "CH_BGer_1",
        "--as",
        "pdf",
        "-c",
        "CH_BGer",
        "-o",
        "out.pdf",
    ])
    .unwrap();
    match cli.command {
        Commands::GetDocument(args) => {
            assert_eq!(args.rendition, Rendition::Pdf);
            assert_eq!(args.collection.as_deref(), Some("CH_BGer"));
            assert_eq!(args.output.unwrap().to_str(), Some("out.pdf"));
        }
        other => panic!("expected get-document, got {other:?}"),
    }
}

#[test]
fn test_invalid_rendition_rejected() {
    assert!(Cli::try_parse_from(["entscheidsuche", "get-document", "x", "--as", "docx"]).is_err());
}

#[test]
fn test_command_names_match_tools() {
    for args in [
        vec!["entscheidsuche", "get-document-urls", "CH_BGer_1"],
        vec!["entscheidsuche", "get-collection-status", "CH_BGer"],
        vec!["entscheidsuche", "show-config", "--all"],
        vec!["entscheidsuche", "get-server-info", "-d"],
        vec!["entscheidsuche", "completions", "bash"],
    ] {
        assert!(Cli::try_parse_from(args.clone()).is_ok(), "failed to parse {args:?}");
    }
}

#[test]
fn test_missing_required_arguments() {
    assert!(Cli::try_parse_from(["entscheidsuche", "search"]).is_err());
    assert!(Cli::try_parse_from(["entscheidsuche", "get-collection-status"]).is_err());
    assert!(Cli::try_parse_from(["entscheidsuche"]).is_err());
}
