// src/error.rs
//! Public error type for the entire crate

use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Caesar key that is not a (signed) integer
    #[error("invalid Caesar shift {key:?}: {source}")]
    InvalidShift {
        key: String,
        #[source]
        source: ParseIntError,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
}
