//! Value types for document fields.
//!
//! A [`Value`] is one node of a document tree. Every variant corresponds to
//! exactly one storage [`Category`], so the category of a value is decided
//! when it is constructed rather than probed at estimation time.

use std::borrow::Cow;
use std::fmt;

use rustc_hash::FxHashMap;

/// Field mapping of a map value. Key order carries no meaning.
pub type Map<'a> = FxHashMap<Cow<'a, str>, Value<'a>>;

/// Storage categories recognized by the cost model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Category {
    Null = 1,
    Boolean = 2,
    Number = 3,
    String = 4,
    Timestamp = 5,
    GeoPoint = 6,
    Bytes = 7,
    Array = 8,
    Map = 9,
    Unrecognized = 0,
}

impl Category {
    /// Returns the lowercase name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Category::Null => "null",
            Category::Boolean => "boolean",
            Category::Number => "number",
            Category::String => "string",
            Category::Timestamp => "timestamp",
            Category::GeoPoint => "geopoint",
            Category::Bytes => "bytes",
            Category::Array => "array",
            Category::Map => "map",
            Category::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A point in time: seconds since the Unix epoch plus a sub-second part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Timestamp {
    /// Signed seconds since 1970-01-01T00:00:00Z.
    pub seconds: i64,
    /// Nanoseconds within the second (0 to 999,999,999 when valid).
    pub nanoseconds: i32,
}

impl Timestamp {
    pub fn new(seconds: i64, nanoseconds: i32) -> Self {
        Self { seconds, nanoseconds }
    }

    /// Returns a description of the problem if the nanosecond part is out of range.
    pub fn validate(&self) -> Option<&'static str> {
        if !(0..=999_999_999).contains(&self.nanoseconds) {
            return Some("timestamp nanoseconds outside range [0, 999999999]");
        }
        None
    }
}

/// A WGS84 geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns a description of the problem if the coordinate is unusable.
    pub fn validate(&self) -> Option<&'static str> {
        if self.latitude.is_nan() || self.longitude.is_nan() {
            return Some("NaN is not allowed in GeoPoint coordinates");
        }
        if self.latitude < -90.0 || self.latitude > 90.0 {
            return Some("latitude out of range [-90, +90]");
        }
        if self.longitude < -180.0 || self.longitude > 180.0 {
            return Some("longitude out of range [-180, +180]");
        }
        None
    }
}

/// A document value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value<'a> {
    /// Absence marker.
    #[default]
    Null,

    /// Boolean value.
    Bool(bool),

    /// 64-bit signed integer.
    Integer(i64),

    /// 64-bit IEEE 754 float.
    Double(f64),

    /// Character sequence.
    String(Cow<'a, str>),

    /// Point in time.
    Timestamp(Timestamp),

    /// Geographic coordinate.
    GeoPoint(GeoPoint),

    /// Raw binary buffer.
    Bytes(Cow<'a, [u8]>),

    /// Ordered sequence of values.
    Array(Vec<Value<'a>>),

    /// Field name to value mapping.
    Map(Map<'a>),

    /// A value kind the cost model has no rule for.
    Unrecognized,
}

impl<'a> Value<'a> {
    /// Creates a bytes value from a binary buffer.
    pub fn bytes(data: impl Into<Cow<'a, [u8]>>) -> Self {
        Value::Bytes(data.into())
    }

    /// Creates an empty map value.
    pub fn empty_map() -> Self {
        Value::Map(Map::default())
    }

    /// Returns the storage category of this value.
    pub fn category(&self) -> Category {
        match self {
            Value::Null => Category::Null,
            Value::Bool(_) => Category::Boolean,
            Value::Integer(_) | Value::Double(_) => Category::Number,
            Value::String(_) => Category::String,
            Value::Timestamp(_) => Category::Timestamp,
            Value::GeoPoint(_) => Category::GeoPoint,
            Value::Bytes(_) => Category::Bytes,
            Value::Array(_) => Category::Array,
            Value::Map(_) => Category::Map,
            Value::Unrecognized => Category::Unrecognized,
        }
    }

    /// Returns the field map if this is a map value.
    pub fn as_map(&self) -> Option<&Map<'a>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Looks up a field of a map value.
    pub fn get(&self, key: &str) -> Option<&Value<'a>> {
        self.as_map().and_then(|m| m.get(key))
    }

    /// Converts into a value that owns all of its data.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Null => Value::Null,
            Value::Bool(b) => Value::Bool(b),
            Value::Integer(n) => Value::Integer(n),
            Value::Double(n) => Value::Double(n),
            Value::String(s) => Value::String(Cow::Owned(s.into_owned())),
            Value::Timestamp(t) => Value::Timestamp(t),
            Value::GeoPoint(p) => Value::GeoPoint(p),
            Value::Bytes(b) => Value::Bytes(Cow::Owned(b.into_owned())),
            Value::Array(items) => Value::Array(items.into_iter().map(Value::into_owned).collect()),
            Value::Map(fields) => Value::Map(
                fields
                    .into_iter()
                    .map(|(k, v)| (Cow::Owned(k.into_owned()), v.into_owned()))
                    .collect(),
            ),
            Value::Unrecognized => Value::Unrecognized,
        }
    }
}

impl From<bool> for Value<'_> {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value<'_> {
                fn from(v: $t) -> Self {
                    Value::Integer(i64::from(v))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value<'_> {
    fn from(v: f32) -> Self {
        Value::Double(f64::from(v))
    }
}

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Value::String(Cow::Borrowed(v))
    }
}

impl From<String> for Value<'_> {
    fn from(v: String) -> Self {
        Value::String(Cow::Owned(v))
    }
}

impl From<Timestamp> for Value<'_> {
    fn from(v: Timestamp) -> Self {
        Value::Timestamp(v)
    }
}

impl From<GeoPoint> for Value<'_> {
    fn from(v: GeoPoint) -> Self {
        Value::GeoPoint(v)
    }
}

impl<'a> From<Vec<Value<'a>>> for Value<'a> {
    fn from(v: Vec<Value<'a>>) -> Self {
        Value::Array(v)
    }
}

impl<'a> From<Map<'a>> for Value<'a> {
    fn from(v: Map<'a>) -> Self {
        Value::Map(v)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_per_variant() {
        assert_eq!(Value::Null.category(), Category::Null);
        assert_eq!(Value::Bool(true).category(), Category::Boolean);
        assert_eq!(Value::Integer(1).category(), Category::Number);
        assert_eq!(Value::Double(1.5).category(), Category::Number);
        assert_eq!(Value::from("x").category(), Category::String);
        assert_eq!(Value::from(Timestamp::new(1, 2)).category(), Category::Timestamp);
        assert_eq!(Value::from(GeoPoint::new(1.0, 2.0)).category(), Category::GeoPoint);
        assert_eq!(Value::bytes(vec![1u8, 2]).category(), Category::Bytes);
        assert_eq!(Value::Array(vec![]).category(), Category::Array);
        assert_eq!(Value::empty_map().category(), Category::Map);
        assert_eq!(Value::Unrecognized.category(), Category::Unrecognized);
    }


    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(3i32)), Value::Integer(3));
    }

    #[test]
    fn test_into_owned_keeps_content() {
        let text = String::from("borrowed");
        let mut fields = Map::default();
        fields.insert(Cow::Borrowed("k"), Value::from(text.as_str()));
        let owned = Value::Map(fields).into_owned();
        drop(text);
        assert_eq!(owned.get("k"), Some(&Value::String(Cow::Owned("borrowed".into()))));
    }

    #[test]
    fn test_timestamp_validation() {
        assert!(Timestamp::new(0, 0).validate().is_none());
        assert!(Timestamp::new(-5, 999_999_999).validate().is_none());
        assert!(Timestamp::new(0, 1_000_000_000).validate().is_some());
        assert!(Timestamp::new(0, -1).validate().is_some());
    }

    #[test]
    fn test_geo_point_validation() {
        assert!(GeoPoint::new(91.0, 0.0).validate().is_some());
        assert!(GeoPoint::new(-91.0, 0.0).validate().is_some());
        assert!(GeoPoint::new(0.0, 181.0).validate().is_some());
        assert!(GeoPoint::new(0.0, -181.0).validate().is_some());
        assert!(GeoPoint::new(90.0, 180.0).validate().is_none());
        assert!(GeoPoint::new(-90.0, -180.0).validate().is_none());
        assert!(GeoPoint::new(f64::NAN, 0.0).validate().is_some());
    }
}
