//! Search error types.

use resource_types::ResourceError;
use thiserror::Error;

/// Errors that can occur while building an index or running a search.
///
/// Query errors do not record which tier failed.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Tantivy error
    #[error("Tantivy error: {0}")]
    Tantivy(#[from] tantivy::TantivyError),

    /// Schema could not be built from the field declaration
    #[error("Schema error: {0}")]
    Schema(String),

    /// A record failed to index; the build is aborted
    #[error("Failed to index record at position {position}: {source}")]
    Index {
        position: usize,
        #[source]
        source: tantivy::TantivyError,
    },

    /// A queried field is not part of the index schema
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A stored document key does not map back into the record slice
    #[error("Invalid document key: {0}")]
    InvalidKey(String),

    /// Settings or declaration error
    #[error(transparent)]
    Resource(#[from] ResourceError),
}
