use thiserror::Error;

/// Error type for external mapping-provider lookups.
///
/// Every variant is surfaced to callers as one generic upstream failure;
/// nothing is retried.
#[derive(Debug, Clone, Error)]
pub enum PlacesError {
    #[error("Provider request failed: {0}")]
    Request(String),

    #[error("Provider returned error status: {0}")]
    Provider(String),
}
