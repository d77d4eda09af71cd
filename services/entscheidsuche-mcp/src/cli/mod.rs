//! CLI adapter for the entscheidsuche client
//!
//! Exposes the same operations as the MCP tools from a terminal.
//! This module is parallel to `mcp/` - both depend on `core/` but not on each other.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      mcp/        |      |      cli/        |
//! | (stdio adapter)  |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// entscheidsuche - Swiss court decisions from the command line
///
/// Search entscheidsuche.ch, read decisions as JSON, HTML, text or PDF,
/// and inspect courts and scraper status.
#[derive(Parser, Debug)]
#[command(name = "entscheidsuche")]
#[command(version)]
#[command(about = "Search Swiss court decisions on entscheidsuche.ch", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Log upstream requests to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
///
/// Command names match MCP tool names (underscores become hyphens).
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search court decisions
    Search(commands::SearchArgs),

    /// Fetch one decision as metadata, HTML, text or PDF
    #[command(name = "get-document")]
    GetDocument(commands::DocumentArgs),

    /// List courts grouped by canton
    #[command(name = "list-courts")]
    ListCourts(commands::CourtsArgs),

    /// Show every available URL of one decision
    #[command(name = "get-document-urls")]
    GetDocumentUrls(commands::document::UrlsArgs),

    /// Show the scraper status of a collection
    #[command(name = "get-collection-status")]
    GetCollectionStatus(commands::StatusArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Show version and server information
    #[command(name = "get-server-info")]
    GetServerInfo(commands::InfoArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  entscheidsuche completions bash > ~/.local/share/bash-completion/completions/entscheidsuche
    ///   zsh:   entscheidsuche completions zsh > ~/.zfunc/_entscheidsuche
    ///   fish:  entscheidsuche completions fish > ~/.config/fish/completions/entscheidsuche.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let config = Config::load()?;
    let services = Arc::new(Services::new(config)?);

    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::GetDocument(args) => {
            commands::document::execute(args, &services, cli.format).await
        }
        Commands::ListCourts(args) => commands::courts::execute(args, &services, cli.format).await,
        Commands::GetDocumentUrls(args) => {
            commands::document::execute_urls(args, &services, cli.format).await
        }
        Commands::GetCollectionStatus(args) => {
            commands::status::execute(args, &services, cli.format).await
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::GetServerInfo(args) => commands::info::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
