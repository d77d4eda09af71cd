//! Collection lookup for document-facing operations
//!
//! Order: collection given by the caller, then exact-identifier
//! resolution upstream, then the identifier heuristic. Resolution
//! failing or finding nothing both fall through to the heuristic.

use crate::core::error::{EntscheidsucheError, Result};
use crate::core::types::DocumentLocation;
use crate::core::upstream::{derive_collection, UpstreamClient};
use serde::Serialize;
use tracing::{debug, warn};

/// How the owning collection of a document was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionSource {
    Explicit,
    Resolved,
    Derived,
}

impl CollectionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionSource::Explicit => "explicit",
            CollectionSource::Resolved => "resolved",
            CollectionSource::Derived => "derived",
        }
    }
}

/// Where to fetch a document from
#[derive(Debug, Clone)]
pub struct DocumentTarget {
    pub signature: String,
    pub collection: String,
    pub source: CollectionSource,
    pub location: Option<DocumentLocation>,
}

/// Work out the collection (and location, when resolved) of a document
pub async fn locate_document(
    client: &UpstreamClient,
    signature: &str,
    collection: Option<&str>,
) -> Result<DocumentTarget> {
    let signature = signature.trim();
    if signature.is_empty() {
        return Err(EntscheidsucheError::InvalidParams(
            "signature cannot be empty".to_string(),
        ));
    }

    if let Some(collection) = collection.map(str::trim).filter(|c| !c.is_empty()) {
        return Ok(DocumentTarget {
            signature: signature.to_string(),
            collection: collection.to_string(),
            source: CollectionSource::Explicit,
            location: None,
        });
    }

    match client.resolve_document(signature).await {
        Ok(Some(location)) => {
            return Ok(DocumentTarget {
                signature: signature.to_string(),
                collection: location.collection.clone(),
                source: CollectionSource::Resolved,
                location: Some(location),
            });
        }
        Ok(None) => debug!(signature, "Signature not resolved, deriving collection"),
        Err(e) if e.is_bad_request() => return Err(e),
        Err(e) => warn!(signature, error = %e, "Resolution failed, deriving collection"),
    }

    let collection = derive_collection(signature).ok_or_else(|| {
        EntscheidsucheError::NotFound(format!(
            "Document '{signature}' not found and no collection could be derived"
        ))
    })?;

    Ok(DocumentTarget {
        signature: signature.to_string(),
        collection,
        source: CollectionSource::Derived,
        location: None,
    })
}
