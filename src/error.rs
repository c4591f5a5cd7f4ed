//! Unified error handling.
//!
//! Each module defines its own error enum; this top-level enum combines them
//! so callers can propagate any crate error as one type.

pub use crate::access::AccessError;
pub use crate::fetch::FetchError;

/// Top-level error combining all module errors.
#[derive(thiserror::Error, Debug)]
pub enum PayloadUtilsError {
    #[error("Access error: {0}")]
    Access(#[from] AccessError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PayloadUtilsError>;
