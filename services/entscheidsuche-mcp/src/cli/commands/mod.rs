//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.
//! Command names match MCP tool names (underscores become hyphens in CLI).

pub mod completions;
pub mod config;
pub mod courts;
pub mod document;
pub mod info;
pub mod search;
pub mod status;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use courts::CourtsArgs;
pub use document::DocumentArgs;
pub use info::InfoArgs;
pub use search::SearchArgs;
pub use status::StatusArgs;
