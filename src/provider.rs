//! # Provider Traits

use std::future::Future;

use anyhow::Result;

/// [`DocumentResolver`] is used to proxy resolution of a DID into a DID
/// document once its key has been decoded.
///
/// Implementers may dereference the identifier directly, look up a local
/// cache, or fetch from a remote resolver. This crate never calls the trait
/// itself; it marks the seam where higher-level callers hand off a decoded
/// key. For self-describing methods such as `did:key` a no-op implementation
/// is sufficient.
pub trait DocumentResolver: Send + Sync {
    /// Resolve the DID to its document.
    ///
    /// # Errors
    ///
    /// Returns an error if the DID cannot be resolved.
    fn resolve(&self, did: &str) -> impl Future<Output = Result<()>> + Send;
}
