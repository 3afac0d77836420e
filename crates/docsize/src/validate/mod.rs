//! Advisory validation for document values.
//!
//! Classification is purely structural: a map with numeric `latitude` and
//! `longitude` is a GeoPoint whatever the numbers are. This module reports
//! values a document store would reject so callers can warn before writing.
//! It never affects estimation.

use crate::error::ValidationError;
use crate::model::{GeoPoint, Timestamp, Value};

/// Validates every value in a tree, returning the first problem found.
///
/// Traversal is depth-first with map fields visited in key order, so the
/// reported problem is deterministic.
pub fn validate_value(value: &Value) -> Result<(), ValidationError> {
    let mut pending: Vec<(String, &Value)> = vec![("$".to_string(), value)];

    while let Some((path, value)) = pending.pop() {
        match value {
            Value::Timestamp(ts) => check_timestamp(ts, &path)?,
            Value::GeoPoint(point) => check_geo_point(point, &path)?,
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate().rev() {
                    pending.push((format!("{path}[{i}]"), item));
                }
            }
            Value::Map(fields) => {
                let mut keys: Vec<_> = fields.iter().collect();
                keys.sort_unstable_by(|a, b| b.0.cmp(a.0));
                for (key, item) in keys {
                    pending.push((format!("{path}.{key}"), item));
                }
            }
            _ => {}
        }
    }

    Ok(())
}

fn check_timestamp(ts: &Timestamp, path: &str) -> Result<(), ValidationError> {
    if ts.validate().is_some() {
        return Err(ValidationError::NanosecondsOutOfRange {
            path: path.to_string(),
            nanoseconds: ts.nanoseconds,
        });
    }
    Ok(())
}

fn check_geo_point(point: &GeoPoint, path: &str) -> Result<(), ValidationError> {
    if point.validate().is_none() {
        return Ok(());
    }
    let path = path.to_string();
    if point.latitude.is_nan() || point.longitude.is_nan() {
        return Err(ValidationError::CoordinateIsNan { path });
    }
    if !(-90.0..=90.0).contains(&point.latitude) {
        return Err(ValidationError::LatitudeOutOfRange {
            path,
            lat: point.latitude,
        });
    }
    Err(ValidationError::LongitudeOutOfRange {
        path,
        lon: point.longitude,
    })
}
