//! Storage size estimation for document-database values.
//!
//! This crate predicts how many bytes a document will consume in a
//! document store, following a fixed per-type cost model. It is meant for
//! checking quota and size limits before a write.
//!
//! # Quick Start
//!
//! ```rust
//! use docsize::{estimate, estimate_json_str, MapBuilder, Timestamp};
//!
//! let doc = MapBuilder::new()
//!     .string("title", "hello")
//!     .timestamp("created", Timestamp::new(1_700_000_000, 0))
//!     .array("scores", [1i64, 2])
//!     .build();
//!
//! // title: 6 + 1, created: 8 + 1, scores: (8 + 1) * 2 + 1
//! assert_eq!(estimate(&doc), 7 + 9 + 19);
//!
//! // Loose JSON input is classified by shape first.
//! let size = estimate_json_str(r#"{"at": {"seconds": 1, "nanoseconds": 0}}"#).unwrap();
//! assert_eq!(size, 8 + 1);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Value tree (one variant per storage category) and builders
//! - [`size`]: The cost model and estimator
//! - [`classify`]: Shape-based classification of JSON input
//! - [`validate`]: Advisory validation of timestamps and points
//! - [`error`]: Error types
//! - [`limits`]: Ingestion limits and options
//!
//! # Cost Model
//!
//! Null and booleans cost 1, numbers and timestamps 8, points 16, strings
//! their length in UTF-16 code units plus 1, and byte buffers their length. Arrays and
//! maps cost the sum of their children plus 1 per child; field names are not
//! charged. Anything else costs 0.

pub mod classify;
pub mod error;
pub mod limits;
pub mod model;
pub mod size;
pub mod validate;

// Re-export commonly used types at crate root
pub use classify::{classify_json, classify_json_with_options, estimate_json, estimate_json_str};
pub use error::{IngestError, ValidationError};
pub use limits::{DEFAULT_MAX_DEPTH, IngestOptions};
pub use model::{Category, GeoPoint, Map, MapBuilder, Timestamp, Value};
pub use size::{estimate, field_sizes, string_size};
pub use validate::validate_value;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
