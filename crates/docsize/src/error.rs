//! Error types for ingestion and advisory validation.
//!
//! Estimation itself cannot fail; errors only arise when turning loose input
//! into values or when checking values against document-store rules.

use thiserror::Error;

/// Error while classifying loose input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error("invalid JSON: {0}")]
    Json(String),

    #[error("input nesting exceeds maximum depth {max}")]
    DepthExceeded { max: usize },
}

impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        IngestError::Json(err.to_string())
    }
}

/// Value a document store would reject, found by advisory validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{path}: GeoPoint latitude {lat} out of range [-90, +90]")]
    LatitudeOutOfRange { path: String, lat: f64 },

    #[error("{path}: GeoPoint longitude {lon} out of range [-180, +180]")]
    LongitudeOutOfRange { path: String, lon: f64 },

    #[error("{path}: GeoPoint coordinate is NaN")]
    CoordinateIsNan { path: String },

    #[error("{path}: timestamp nanoseconds {nanoseconds} outside range [0, 999999999]")]
    NanosecondsOutOfRange { path: String, nanoseconds: i32 },
}

impl ValidationError {
    /// Returns the location of the offending value (`$` for the root).
    pub fn path(&self) -> &str {
        match self {
            ValidationError::LatitudeOutOfRange { path, .. }
            | ValidationError::LongitudeOutOfRange { path, .. }
            | ValidationError::CoordinateIsNan { path }
            | ValidationError::NanosecondsOutOfRange { path, .. } => path,
        }
    }
}
