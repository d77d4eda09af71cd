//! List-courts command - courts grouped by canton

use crate::cli::output::{colors, print_warning};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the list-courts command
#[derive(Args, Debug)]
pub struct CourtsArgs {
    /// Canton name or code (e.g. "Zürich" or "ZH"); all cantons when omitted
    #[arg(long, short = 'c')]
    pub canton: Option<String>,
}

/// Execute the list-courts command
pub async fn execute(
    args: CourtsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let courts = services.list_courts(args.canton.as_deref()).await?;

    match format {
        OutputFormat::Human => {
            if courts.is_empty() {
                match &args.canton {
                    Some(canton) => print_warning(&format!("No courts found for '{canton}'")),
                    None => print_warning("The status page listed no courts"),
                }
                return Ok(());
            }

            for entry in &courts.cantons {
                println!(
                    "{} {}",
                    colors::label(&entry.canton),
                    colors::dim(&format!("({})", entry.courts.len()))
                );
                for court in &entry.courts {
                    println!("  {}", colors::court(court));
                }
                println!();
            }
            println!(
                "{} court(s) in {} canton(s)",
                colors::number(&courts.court_count().to_string()),
                colors::number(&courts.cantons.len().to_string())
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&courts)?);
        }
    }

    Ok(())
}
