//! Data model types for document values.
//!
//! This module contains the value tree estimated by [`crate::size`]:
//! - Values (one variant per storage category)
//! - Timestamp and GeoPoint records
//! - Builders (ergonomic construction)

pub mod builder;
pub mod value;

pub use builder::MapBuilder;
pub use value::{Category, GeoPoint, Map, Timestamp, Value};
