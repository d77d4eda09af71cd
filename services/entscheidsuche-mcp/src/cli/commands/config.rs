//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::xdg_config_file;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show the resolved endpoint URLs
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub upstream: UpstreamSection,
    pub rate_limit: RateLimitSection,
    pub search: SearchSection,
    pub output: OutputSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<EndpointsSection>,
}

#[derive(Debug, Serialize)]
pub struct UpstreamSection {
    pub base_url: String,
    pub dialect: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Serialize)]
pub struct RateLimitSection {
    pub min_interval_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct SearchSection {
    pub default_size: usize,
    pub max_size: usize,
}

#[derive(Debug, Serialize)]
pub struct OutputSection {
    pub max_document_chars: usize,
}

#[derive(Debug, Serialize)]
pub struct EndpointsSection {
    pub search: String,
    pub status: String,
    pub docs: String,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    let response = ConfigResponse {
        config_file: xdg_config_file().to_string_lossy().into_owned(),
        upstream: UpstreamSection {
            base_url: config.upstream.base().to_string(),
            dialect: config.upstream.dialect.as_str().to_string(),
            timeout_secs: config.upstream.timeout_secs,
            user_agent: config.upstream.user_agent.clone(),
        },
        rate_limit: RateLimitSection {
            min_interval_ms: config.rate_limit.min_interval_ms,
        },
        search: SearchSection {
            default_size: config.search.default_size,
            max_size: config.search.max_size,
        },
        output: OutputSection {
            max_document_chars: config.output.max_document_chars,
        },
        endpoints: args.all.then(|| EndpointsSection {
            search: config.upstream.search_url(),
            status: config.upstream.status_url(),
            docs: config.upstream.docs_url(),
        }),
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  upstream:");
            println!("    base_url: {}", response.upstream.base_url);
            println!("    dialect: {}", response.upstream.dialect);
            println!("    timeout_secs: {}", response.upstream.timeout_secs);
            println!("    user_agent: {}", response.upstream.user_agent);
            println!("  rate_limit:");
            println!(
                "    min_interval_ms: {}",
                response.rate_limit.min_interval_ms
            );
            println!("  search:");
            println!("    default_size: {}", response.search.default_size);
            println!("    max_size: {}", response.search.max_size);
            println!("  output:");
            println!(
                "    max_document_chars: {}",
                response.output.max_document_chars
            );
            if let Some(endpoints) = &response.endpoints {
                println!("  endpoints:");
                println!("    search: {}", endpoints.search);
                println!("    status: {}", endpoints.status);
                println!("    docs: {}", endpoints.docs);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
