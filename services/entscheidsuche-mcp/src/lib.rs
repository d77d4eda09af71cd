//! entscheidsuche-mcp - Swiss court decisions for MCP clients
//!
//! A thin adapter over the public entscheidsuche.ch API. It searches
//! the index, fetches decisions from the document store and scrapes
//! the status page, normalizing everything into stable records.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types
//!   - upstream (paced HTTP transport, query dialects, client)
//!   - normalize (hits, metadata, status, court listing, HTML)
//!   - lookup (collection resolution for signatures)
//!   - prompts (research prompt templates)
//!   - services (unified service container)
//!
//! - **mcp**: MCP adapter (depends on core)
//!   - server, tools, resources, prompts, protocol
//!
//! - **cli**: clap adapter (depends on core)
//!   - commands, output
//!
//! # Key Features
//!
//! - One global request pacer shared by every upstream call
//! - Elasticsearch and full-text search dialects
//! - Documents as metadata, HTML, plain text or PDF
//! - MCP server (6 tools, 3 resources, 3 prompts)

// Core domain logic (protocol-agnostic)
pub mod core;

// MCP (Model Context Protocol) adapter
pub mod mcp;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{EntscheidsucheError, Result};
pub use core::services::Services;
pub use core::types::*;
