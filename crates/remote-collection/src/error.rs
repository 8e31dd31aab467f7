//! Error Taxonomy
//!
//! Errors surfaced by collection operations. No error is fatal to the
//! view-model; a failed single-item operation leaves the rest of the
//! collection intact.

/// Common result type for collection operations
pub type CollectionResult<T> = Result<T, CollectionError>;

/// Collection-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// Operation referenced an id absent from the local collection
    NotFound(u32),
    /// Mutation attempted outside the Ready state
    InvalidState(&'static str),
    /// Remote call rejected or network unreachable
    Network(String),
    /// Remote resource returned an error status
    Remote(u16),
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectionError::NotFound(id) => write!(f, "No todo with id {} in the collection", id),
            CollectionError::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            CollectionError::Network(msg) => write!(f, "Network failure: {}", msg),
            CollectionError::Remote(status) => write!(f, "Remote service rejected the request: HTTP {}", status),
        }
    }
}

impl std::error::Error for CollectionError {}
