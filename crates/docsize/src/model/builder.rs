//! Builder API for ergonomic document construction.
//!
//! # Example
//!
//! ```rust
//! use docsize::{GeoPoint, MapBuilder, estimate};
//!
//! let doc = MapBuilder::new()
//!     .string("name", "Alice")
//!     .integer("age", 30)
//!     .geo_point("home", GeoPoint::new(52.52, 13.40))
//!     .map("tags", |m| m.bool("admin", false))
//!     .build();
//!
//! assert_eq!(estimate(&doc), (6 + 1) + (8 + 1) + (16 + 1) + (2 + 1));
//! ```

use std::borrow::Cow;

use crate::model::{GeoPoint, Map, Timestamp, Value};

/// Builder for a map value.
#[derive(Debug, Clone, Default)]
pub struct MapBuilder<'a> {
    fields: Map<'a>,
}

impl<'a> MapBuilder<'a> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field to an arbitrary value, replacing any previous value.
    pub fn field(mut self, key: impl Into<Cow<'a, str>>, value: impl Into<Value<'a>>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn null(self, key: impl Into<Cow<'a, str>>) -> Self {
        self.field(key, Value::Null)
    }

    pub fn bool(self, key: impl Into<Cow<'a, str>>, value: bool) -> Self {
        self.field(key, Value::Bool(value))
    }

    pub fn integer(self, key: impl Into<Cow<'a, str>>, value: i64) -> Self {
        self.field(key, Value::Integer(value))
    }

    pub fn double(self, key: impl Into<Cow<'a, str>>, value: f64) -> Self {
        self.field(key, Value::Double(value))
    }

    pub fn string(self, key: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, str>>) -> Self {
        self.field(key, Value::String(value.into()))
    }

    pub fn timestamp(self, key: impl Into<Cow<'a, str>>, value: Timestamp) -> Self {
        self.field(key, Value::Timestamp(value))
    }

    pub fn geo_point(self, key: impl Into<Cow<'a, str>>, value: GeoPoint) -> Self {
        self.field(key, Value::GeoPoint(value))
    }

    pub fn bytes(self, key: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, [u8]>>) -> Self {
        self.field(key, Value::Bytes(value.into()))
    }

    /// Sets a field to an array of values.
    pub fn array<I, V>(self, key: impl Into<Cow<'a, str>>, items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value<'a>>,
    {
        let items = items.into_iter().map(Into::into).collect();
        self.field(key, Value::Array(items))
    }

    /// Sets a field to a nested map built by the given function.
    pub fn map<F>(self, key: impl Into<Cow<'a, str>>, f: F) -> Self
    where
        F: FnOnce(MapBuilder<'a>) -> MapBuilder<'a>,
    {
        let nested = f(MapBuilder::new()).build();
        self.field(key, nested)
    }

    /// Returns the number of fields set so far.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builds the map value.
    pub fn build(self) -> Value<'a> {
        Value::Map(self.fields)
    }
}
