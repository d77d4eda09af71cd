//! Court listing scraped from the upstream status page
//!
//! There is no structured API for the court list, so this reads the
//! markup. A page that does not match the expected shape yields an
//! empty listing, never an error.

use super::html::inline_text;
use crate::core::types::{CantonCourts, CourtsByCanton};
use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<h[1-4]\b[^>]*>(.*?)</h[1-4]\s*>").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<tr\b[^>]*>(?P<row>.*?)</tr\s*>|<li\b[^>]*>(?P<item>.*?)</li\s*>")
        .expect("valid regex")
});

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static FIRST_CELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<td\b[^>]*>(.*?)</td\s*>").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CANTON_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^()]+)\)\s*$").expect("valid regex"));

/// Extract courts grouped by canton, optionally restricted to one canton
///
/// An exact label or canton-code match wins over label prefixes, so `BE`
/// never pulls in other sections; a prefix such as `Basel` may still
/// match several cantons when nothing matches exactly.
pub fn scrape_courts_by_canton(html: &str, canton_filter: Option<&str>) -> CourtsByCanton {
    let filter = canton_filter.map(str::trim).filter(|f| !f.is_empty());

    let headings: Vec<_> = HEADING.captures_iter(html).collect();
    let mut sections = Vec::new();

    for (i, caps) in headings.iter().enumerate() {
        let (Some(whole), Some(label)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let label = inline_text(label.as_str());
        if label.is_empty() {
            continue;
        }
        let strength = match filter {
            Some(f) => match canton_match(&label, f) {
                Some(strength) => strength,
                None => continue,
            },
            None => CantonMatch::Exact,
        };

        let end = headings
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(html.len(), |m| m.start());
        let courts = section_courts(&html[whole.end()..end]);
        if !courts.is_empty() {
            sections.push((
                strength,
                CantonCourts {
                    canton: label,
                    courts,
                },
            ));
        }
    }

    let best = sections.iter().map(|(strength, _)| *strength).max();
    let cantons = sections
        .into_iter()
        .filter(|(strength, _)| Some(*strength) == best)
        .map(|(_, canton)| canton)
        .collect();

    CourtsByCanton { cantons }
}

fn section_courts(section: &str) -> Vec<String> {
    let mut courts: Vec<String> = Vec::new();
    for caps in ENTRY.captures_iter(section) {
        let name = if let Some(row) = caps.name("row") {
            FIRST_CELL
                .captures(row.as_str())
                .and_then(|cell| cell.get(1))
                .map(|cell| inline_text(cell.as_str()))
        } else {
            caps.name("item").map(|item| inline_text(item.as_str()))
        };

        if let Some(name) = name.filter(|n| !n.is_empty()) {
            if !courts.contains(&name) {
                courts.push(name);
            }
        }
    }
    courts
}

/// How a heading matched the canton filter; stronger variants order last
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CantonMatch {
    Prefix,
    Exact,
}

/// Whole label or parenthesised code is exact, a label prefix is not; case-insensitive
fn canton_match(label: &str, filter: &str) -> Option<CantonMatch> {
    let label_lower = label.to_lowercase();
    let filter_lower = filter.to_lowercase();

    let code_matches = CANTON_CODE
        .captures(label)
        .and_then(|caps| caps.get(1))
        .is_some_and(|code| code.as_str().trim().eq_ignore_ascii_case(filter));

    if label_lower == filter_lower || code_matches {
        Some(CantonMatch::Exact)
    } else if label_lower.starts_with(&filter_lower) {
        Some(CantonMatch::Prefix)
    } else {
        None
    }
}
