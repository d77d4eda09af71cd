//! Collection status command

use crate::cli::output::{colors, print_field, relative_time_from_str};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the get-collection-status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Collection (spider) name, e.g. CH_BGer
    pub collection: String,
}

/// Execute the get-collection-status command
pub async fn execute(
    args: StatusArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = services.collection_status(&args.collection).await?;

    match format {
        OutputFormat::Human => {
            println!("{}", colors::label(&status.collection));
            let last_run = status.last_run.as_deref().map(|ts| {
                match relative_time_from_str(ts) {
                    Some(relative) => format!("{ts} {}", colors::dim(&format!("({relative})"))),
                    None => ts.to_string(),
                }
            });
            print_field("Last run", last_run.as_deref());
            let count = status
                .document_count
                .map(|n| colors::number(&n.to_string()).to_string());
            print_field("Documents", count.as_deref());
            print_field("Job type", status.job_type.as_deref());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }

    Ok(())
}
