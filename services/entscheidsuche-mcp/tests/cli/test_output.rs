//! Tests for CLI output formatting helpers

use chrono::{Duration, Utc};
use entscheidsuche_mcp::cli::output::{
    format_bytes, format_relative_time, pick_text, relative_time_from_str, shorten,
};
use entscheidsuche_mcp::core::types::LanguageMap;

#[test]
fn test_format_bytes_various_sizes() {
    assert_eq!(format_bytes(0), "0 B");
    assert_eq!(format_bytes(1023), "1023 B");
    assert_eq!(format_bytes(1024), "1.0 KB");
    assert_eq!(format_bytes(1572864), "1.5 MB");
    assert_eq!(format_bytes(10737418240), "10.0 GB");
}

#[test]
fn test_format_relative_time() {
    let now = Utc::now();
    assert_eq!(format_relative_time(&now), "just now");
    assert_eq!(format_relative_time(&(now - Duration::minutes(5))), "5m ago");
    assert_eq!(format_relative_time(&(now - Duration::hours(3))), "3h ago");
    assert_eq!(format_relative_time(&(now - Duration::days(2))), "2d ago");
    assert_eq!(
        format_relative_time(&(now + Duration::hours(1))),
        "in the future"
    );
}

#[test]
fn test_relative_time_from_status_timestamp() {
    let ts = (Utc::now() - Duration::hours(5)).to_rfc3339();
    assert_eq!(relative_time_from_str(&ts).as_deref(), Some("5h ago"));
    assert!(relative_time_from_str("2025-07-20 03:15").is_none());
}

#[test]
fn test_pick_text_language_order() {
    let mut map = LanguageMap::new();
    map.insert("it".to_string(), "Sentenza".to_string());
    map.insert("fr".to_string(), "Arrêt".to_string());
    assert_eq!(pick_text(&map).as_deref(), Some("Arrêt"));
    assert!(pick_text(&LanguageMap::new()).is_none());
}

#[test]
fn test_shorten_counts_characters() {
    let text = "Beschwerdeführerin";
    assert_eq!(shorten(text, 50), text);
    assert_eq!(shorten(text, 10), "Beschwe...");
}
