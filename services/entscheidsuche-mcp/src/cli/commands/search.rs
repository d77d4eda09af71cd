//! Search command - search court decisions

use crate::cli::output::{colors, pick_text, shorten};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::SearchHit;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (upstream query-string syntax: AND, OR, quotes)
    pub query: String,

    /// Number of results per page (clamped to the configured maximum)
    #[arg(long, short = 'n')]
    pub size: Option<i64>,

    /// Offset of the first result
    #[arg(long)]
    pub from: Option<i64>,

    /// Sort as `field` or `field:asc|desc`, e.g. `date:desc`
    #[arg(long)]
    pub sort: Option<String>,

    /// Only print signatures
    #[arg(long)]
    pub signatures_only: bool,
}

/// Search response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponseOutput {
    pub query: String,
    pub total_results: u64,
    pub from: usize,
    pub size: usize,
    pub results: Vec<SearchHit>,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let (query, page) = services
        .search(&args.query, args.size, args.from, args.sort.as_deref())
        .await?;

    let output = SearchResponseOutput {
        query: query.text,
        total_results: page.total,
        from: query.from,
        size: query.size,
        results: page.hits,
    };

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!("No decisions found for '{}'", colors::label(&output.query));
                return Ok(());
            }

            println!(
                "Found {} decision(s), showing {}-{}:\n",
                colors::number(&output.total_results.to_string()),
                output.from + 1,
                output.from + output.results.len()
            );

            for (i, hit) in output.results.iter().enumerate() {
                if args.signatures_only {
                    println!("{}", colors::signature(&hit.signature));
                    continue;
                }

                println!(
                    "[{}] {} {}",
                    colors::rank(&(output.from + i + 1).to_string()),
                    colors::signature(&hit.signature),
                    colors::dim(hit.date.as_deref().unwrap_or("-"))
                );
                let place = match &hit.canton {
                    Some(canton) => format!("{} ({canton})", hit.court),
                    None => hit.court.clone(),
                };
                println!("    {}", colors::court(&place));
                if let Some(title) = pick_text(&hit.title) {
                    println!("    {}", shorten(&title, 100));
                }
                if let Some(summary) = pick_text(&hit.abstract_text) {
                    for line in summary.lines().take(3) {
                        println!("    {}", colors::dim(&shorten(line, 100)));
                    }
                }
                if let Some(url) = hit.html_url.as_deref().or(hit.pdf_url.as_deref()) {
                    println!("    {}", colors::url(url));
                }
                println!();
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
