//! Core domain logic (protocol-agnostic)
//!
//! Everything that does not depend on how the operations are exposed.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **upstream**: Paced transport, request builders, upstream client
//! - **normalize**: Raw upstream payloads into stable records
//! - **lookup**: Collection resolution for document operations
//! - **prompts**: Research prompt templates
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod lookup;
pub mod normalize;
pub mod prompts;
pub mod services;
pub mod types;
pub mod upstream;

// Re-export key types for convenience
pub use config::Config;
pub use error::{EntscheidsucheError, Result};
pub use services::Services;
