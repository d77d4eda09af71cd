//! ResponseNormalizer: raw upstream payloads into caller-facing records
//!
//! Every function here is total. Missing or oddly-typed upstream fields
//! become `None` or the `Unknown` sentinel, never an error.

pub mod courts;
pub mod fields;
pub mod hit;
pub mod html;
pub mod metadata;
pub mod status;

pub use courts::scrape_courts_by_canton;
pub use hit::normalize_hit;
pub use html::html_to_text;
pub use metadata::{normalize_metadata, resolve_docs_url};
pub use status::normalize_status;
