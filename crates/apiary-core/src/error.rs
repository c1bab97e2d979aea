//! Error types for Apiary core

use thiserror::Error;

use crate::algorithm::Catalog;

/// Errors raised by cube and notation operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CubeError {
    /// A notation token outside the 36 legal move tokens.
    #[error("Unknown move token '{0}'")]
    UnknownMove(String),

    /// A macro reference that points past the end of its catalog.
    #[error("Unknown {catalog} macro #{index} (catalog holds {len})")]
    UnknownMacro {
        catalog: Catalog,
        index: usize,
        len: usize,
    },

    /// A macro catalog with no entries cannot be sampled.
    #[error("The {0} macro catalog is empty")]
    EmptyCatalog(Catalog),
}

/// Result type alias for Apiary core operations
pub type Result<T> = std::result::Result<T, CubeError>;
