use std::path::PathBuf;
use thiserror::Error;

use crate::wcs::CoordinateTransformError;

/// The main error type for skyregion operations.
#[derive(Debug, Error)]
pub enum RegionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Coordinate transform failed: {0}")]
    CoordinateTransform(#[from] CoordinateTransformError),

    #[error("'{operation}' is not supported for {shape} regions")]
    UnsupportedOperation {
        shape: &'static str,
        operation: &'static str,
    },

    #[error("Failed to parse region JSON from {path}: {source}")]
    RegionJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid region JSON: {0}")]
    RegionJson(#[from] serde_json::Error),

    #[error("Failed to write region JSON to {path}: {source}")]
    RegionJsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse WCS descriptor from {path}: {source}")]
    WcsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid region record {index}: {message}")]
    InvalidRecord { index: usize, message: String },

    #[error("{0}")]
    MissingArgument(String),
}
