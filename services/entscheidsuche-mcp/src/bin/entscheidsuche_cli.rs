//! entscheidsuche CLI - Swiss court decisions from the command line
//!
//! The same operations as the MCP server, for scripting or manual lookups
//! without an MCP client.
//!
//! # Examples
//!
//! ```bash
//! # Search decisions
//! entscheidsuche search "Mietrecht AND Kündigung" --size 5
//!
//! # Read a decision as plain text
//! entscheidsuche get-document CH_BGer_005_5A-1-2020_2020-06-01 --as text
//!
//! # Save the PDF
//! entscheidsuche get-document CH_BGer_005_5A-1-2020_2020-06-01 --as pdf -o decision.pdf
//!
//! # Courts of one canton
//! entscheidsuche list-courts --canton ZH
//! ```

use clap::Parser;
use entscheidsuche_mcp::cli::output::print_error;
use entscheidsuche_mcp::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose {
        "entscheidsuche_mcp=debug"
    } else {
        "entscheidsuche_mcp=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
