//! Upstream access: paced transport, request construction, client

pub mod client;
pub mod query;
pub mod transport;

pub use client::{DocumentBody, UpstreamClient};
pub use query::derive_collection;
pub use transport::{HttpTransport, RequestPacer, Transport, UpstreamResponse};
