//! Storage size estimation.
//!
//! Implements the fixed per-category cost model:
//!
//! | Category     | Cost                          |
//! |--------------|-------------------------------|
//! | Null         | 1                             |
//! | Boolean      | 1                             |
//! | Number       | 8                             |
//! | String       | UTF-16 code units + 1         |
//! | Timestamp    | 8                             |
//! | GeoPoint     | 16                            |
//! | Bytes        | buffer length                 |
//! | Array        | sum of (element cost + 1)     |
//! | Map          | sum of (field value cost + 1) |
//! | Unrecognized | 0                             |
//!
//! Field names are not charged; each map entry costs a flat byte on top of
//! its value.

use crate::model::Value;

/// Cost of a null value.
pub const NULL_SIZE: usize = 1;

/// Cost of a boolean value.
pub const BOOL_SIZE: usize = 1;

/// Cost of a number, integer or floating-point.
pub const NUMBER_SIZE: usize = 8;

/// Cost of a timestamp.
pub const TIMESTAMP_SIZE: usize = 8;

/// Cost of a geographic point.
pub const GEO_POINT_SIZE: usize = 16;

/// Extra byte charged on top of a string's length.
pub const STRING_TERMINATOR: usize = 1;

/// Extra byte charged per array element and per map field.
pub const ENTRY_OVERHEAD: usize = 1;

/// Returns the cost of a string.
///
/// Length is measured in UTF-16 code units, not UTF-8 bytes: `"é"` costs 2
/// and `"😀"`, a surrogate pair, costs 3.
#[inline]
pub fn string_size(s: &str) -> usize {
    s.encode_utf16().count().saturating_add(STRING_TERMINATOR)
}

/// Estimates the stored size of a value in bytes.
///
/// Total over every value: never fails and never panics. Traversal uses an
/// explicit stack, so nesting depth is bounded only by memory. Sums saturate
/// at `usize::MAX`.
pub fn estimate(value: &Value) -> usize {
    let mut total: usize = 0;
    let mut pending: Vec<&Value> = vec![value];

    while let Some(value) = pending.pop() {
        let cost = match value {
            Value::Null => NULL_SIZE,
            Value::Bool(_) => BOOL_SIZE,
            Value::Integer(_) | Value::Double(_) => NUMBER_SIZE,
            Value::String(s) => string_size(s),
            Value::Timestamp(_) => TIMESTAMP_SIZE,
            Value::GeoPoint(_) => GEO_POINT_SIZE,
            Value::Bytes(b) => b.len(),
            Value::Array(items) => {
                pending.extend(items.iter());
                items.len().saturating_mul(ENTRY_OVERHEAD)
            }
            Value::Map(fields) => {
                pending.extend(fields.values());
                fields.len().saturating_mul(ENTRY_OVERHEAD)
            }
            Value::Unrecognized => 0,
        };
        total = total.saturating_add(cost);
    }

    total
}

/// Returns the cost of each top-level field of a map, sorted by field name.
///
/// Each entry is the field value's cost plus the per-field overhead, so the
/// entries sum to [`estimate`] of the map. Returns an empty list for values
/// that are not maps.
pub fn field_sizes<'v>(value: &'v Value) -> Vec<(&'v str, usize)> {
    let Value::Map(fields) = value else {
        return Vec::new();
    };
    let mut sizes: Vec<(&str, usize)> = fields
        .iter()
        .map(|(key, v)| (key.as_ref(), estimate(v).saturating_add(ENTRY_OVERHEAD)))
        .collect();
    sizes.sort_unstable_by(|a, b| a.0.cmp(b.0));
    sizes
}

impl Value<'_> {
    /// Estimates the stored size of this value in bytes. See [`estimate`].
    pub fn estimated_size(&self) -> usize {
        estimate(self)
    }
}
