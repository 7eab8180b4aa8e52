//! Error types for Waymark

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::StepStatus;

/// Errors raised while building or loading a step catalog.
///
/// These only occur at startup. Once a [`StepCatalog`](crate::StepCatalog)
/// exists every journey operation is infallible.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog contains no steps")]
    Empty,

    #[error("Step at position {0} has an empty id")]
    EmptyId(usize),

    #[error("Duplicate step id: {0}")]
    DuplicateId(String),

    #[error("More than one current step: {first} and {second}")]
    MultipleCurrent { first: String, second: String },

    #[error("Step {step_id} is {status} but follows a later-stage step")]
    OutOfOrder { step_id: String, status: StepStatus },
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
