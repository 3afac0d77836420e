//! Classification of loose JSON input into [`Value`]s.
//!
//! JSON carries no type tags for timestamps or geographic points, so they are
//! recognized by shape. Categories are tested in a fixed priority order and
//! the first match wins:
//!
//! 1. null, boolean, number, string
//! 2. object with numeric `seconds` and numeric `nanoseconds` => Timestamp
//! 3. object with numeric `latitude` and numeric `longitude` => GeoPoint
//! 4. array
//! 5. any other object => Map
//!
//! Extra fields on a Timestamp or GeoPoint shaped object are ignored. Strings
//! and keys are borrowed from the input.
//!
//! Building a [`Value`] tree is depth-limited by [`IngestOptions`]. Estimating
//! JSON directly with [`estimate_json`] applies the same shape rules without
//! building a tree and accepts any nesting depth.

use std::borrow::Cow;

use serde_json::{Map as JsonMap, Number, Value as Json};

use crate::error::IngestError;
use crate::limits::IngestOptions;
use crate::model::{GeoPoint, Map, Timestamp, Value};
use crate::size::{
    BOOL_SIZE, ENTRY_OVERHEAD, GEO_POINT_SIZE, NULL_SIZE, NUMBER_SIZE, TIMESTAMP_SIZE,
    string_size,
};

/// Classifies a JSON value using default [`IngestOptions`].
pub fn classify_json(input: &Json) -> Result<Value<'_>, IngestError> {
    classify_json_with_options(input, IngestOptions::default())
}

/// Classifies a JSON value with the given options.
pub fn classify_json_with_options(
    input: &Json,
    options: IngestOptions,
) -> Result<Value<'_>, IngestError> {
    classify(input, 0, &options)
}

/// Estimates a JSON value under the same classification rules.
///
/// Equal to estimating the classified value, but total: walks the input with
/// an explicit stack and has no depth limit.
pub fn estimate_json(input: &Json) -> usize {
    let mut total: usize = 0;
    let mut pending: Vec<&Json> = vec![input];

    while let Some(input) = pending.pop() {
        let cost = match input {
            Json::Null => NULL_SIZE,
            Json::Bool(_) => BOOL_SIZE,
            Json::Number(_) => NUMBER_SIZE,
            Json::String(s) => string_size(s),
            Json::Array(items) => {
                pending.extend(items.iter());
                items.len().saturating_mul(ENTRY_OVERHEAD)
            }
            Json::Object(fields) => {
                if as_timestamp(fields).is_some() {
                    TIMESTAMP_SIZE
                } else if as_geo_point(fields).is_some() {
                    GEO_POINT_SIZE
                } else {
                    pending.extend(fields.values());
                    fields.len().saturating_mul(ENTRY_OVERHEAD)
                }
            }
        };
        total = total.saturating_add(cost);
    }

    total
}

/// Parses JSON text, then estimates it.
///
/// Fails only when the text is not JSON.
pub fn estimate_json_str(text: &str) -> Result<usize, IngestError> {
    let parsed: Json = serde_json::from_str(text)?;
    Ok(estimate_json(&parsed))
}

fn classify<'a>(
    input: &'a Json,
    depth: usize,
    options: &IngestOptions,
) -> Result<Value<'a>, IngestError> {
    match input {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Number(n) => Ok(classify_number(n)),
        Json::String(s) => Ok(Value::String(Cow::Borrowed(s.as_str()))),
        Json::Array(items) => {
            let depth = enter(depth, options)?;
            let items = items
                .iter()
                .map(|item| classify(item, depth, options))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::Array(items))
        }
        Json::Object(fields) => {
            if let Some(ts) = as_timestamp(fields) {
                return Ok(Value::Timestamp(ts));
            }
            if let Some(point) = as_geo_point(fields) {
                return Ok(Value::GeoPoint(point));
            }
            let depth = enter(depth, options)?;
            let mut map = Map::with_capacity_and_hasher(fields.len(), Default::default());
            for (key, value) in fields {
                map.insert(Cow::Borrowed(key.as_str()), classify(value, depth, options)?);
            }
            Ok(Value::Map(map))
        }
    }
}

/// Returns the depth of a child container, or an error past the limit.
fn enter(depth: usize, options: &IngestOptions) -> Result<usize, IngestError> {
    let depth = depth + 1;
    if depth > options.max_depth {
        return Err(IngestError::DepthExceeded {
            max: options.max_depth,
        });
    }
    Ok(depth)
}

fn classify_number(n: &Number) -> Value<'static> {
    match n.as_i64() {
        Some(i) => Value::Integer(i),
        // Unsigned values past i64::MAX land here; they are always representable as f64.
        None => Value::Double(n.as_f64().unwrap_or(f64::NAN)),
    }
}

fn number_field<'a>(fields: &'a JsonMap<String, Json>, key: &str) -> Option<&'a Number> {
    match fields.get(key) {
        Some(Json::Number(n)) => Some(n),
        _ => None,
    }
}

/// Converts to i64, truncating fractions and saturating at the bounds.
fn saturating_i64(n: &Number) -> i64 {
    n.as_i64()
        .unwrap_or_else(|| n.as_f64().map_or(0, |f| f as i64))
}

fn as_timestamp(fields: &JsonMap<String, Json>) -> Option<Timestamp> {
    let seconds = number_field(fields, "seconds")?;
    let nanoseconds = number_field(fields, "nanoseconds")?;
    let nanos = saturating_i64(nanoseconds).clamp(i64::from(i32::MIN), i64::from(i32::MAX));
    Some(Timestamp {
        seconds: saturating_i64(seconds),
        nanoseconds: nanos as i32,
    })
}

fn as_geo_point(fields: &JsonMap<String, Json>) -> Option<GeoPoint> {
    let latitude = number_field(fields, "latitude")?.as_f64()?;
    let longitude = number_field(fields, "longitude")?.as_f64()?;
    Some(GeoPoint {
        latitude,
        longitude,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::Category;
    use crate::size::estimate;

    fn category_of(input: Json) -> Category {
        classify_json(&input).map(|v| v.category()).unwrap()
    }

    #[test]
    fn test_primitives() {
        assert_eq!(classify_json(&json!(null)).unwrap(), Value::Null);
        assert_eq!(classify_json(&json!(true)).unwrap(), Value::Bool(true));
        assert_eq!(classify_json(&json!(42)).unwrap(), Value::Integer(42));
        assert_eq!(classify_json(&json!(2.5)).unwrap(), Value::Double(2.5));
        assert_eq!(classify_json(&json!("hi")).unwrap(), Value::from("hi"));
    }

    #[test]
    fn test_large_unsigned_is_double() {
        let big = json!(u64::MAX);
        let v = classify_json(&big).unwrap();
        assert!(matches!(v, Value::Double(_)));
        assert_eq!(estimate(&v), 8);
    }

    #[test]
    fn test_timestamp_shape() {
        let input = json!({"seconds": 100, "nanoseconds": 0});
        assert_eq!(classify_json(&input).unwrap(), Value::Timestamp(Timestamp::new(100, 0)));
        assert_eq!(estimate_json(&input), 8);
    }

    #[test]
    fn test_timestamp_extra_fields_ignored() {
        let input = json!({"seconds": 1, "nanoseconds": 2, "note": "a long string value"});
        assert_eq!(category_of(input), Category::Timestamp);
    }

    #[test]
    fn test_timestamp_fractional_fields() {
        let input = json!({"seconds": 1.9, "nanoseconds": -3e12});
        let v = classify_json(&input).unwrap();
        assert_eq!(v, Value::Timestamp(Timestamp::new(1, i32::MIN)));
    }

    #[test]
    fn test_geo_point_shape() {
        let input = json!({"latitude": 1.0, "longitude": 2.0});
        assert_eq!(classify_json(&input).unwrap(), Value::GeoPoint(GeoPoint::new(1.0, 2.0)));
        assert_eq!(estimate_json(&input), 16);
    }

    #[test]
    fn test_timestamp_wins_over_geo_point() {
        let input = json!({"seconds": 1, "nanoseconds": 2, "latitude": 3, "longitude": 4});
        assert_eq!(category_of(input), Category::Timestamp);
    }

    #[test]
    fn test_partial_shapes_are_maps() {
        assert_eq!(category_of(json!({"seconds": 1})), Category::Map);
        assert_eq!(category_of(json!({"seconds": 1, "nanoseconds": "0"})), Category::Map);
        assert_eq!(category_of(json!({"latitude": 1.0, "longitude": null})), Category::Map);
        assert_eq!(category_of(json!({"lat": 1.0, "lng": 2.0})), Category::Map);
    }

    #[test]
    fn test_non_numeric_shape_costs_as_map() {
        // {seconds: 1 => 9, nanoseconds: "0" => 3}
        let input = json!({"seconds": 1, "nanoseconds": "0"});
        assert_eq!(estimate_json(&input), 9 + 3);
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(estimate_json(&json!(null)), 1);
        assert_eq!(estimate_json(&json!(true)), 1);
        assert_eq!(estimate_json(&json!(42)), 8);
        assert_eq!(estimate_json(&json!(3.5)), 8);
        assert_eq!(estimate_json(&json!("hello")), 6);
        assert_eq!(estimate_json(&json!(["a", "bb"])), 7);
        assert_eq!(estimate_json(&json!({"x": 1, "y": "ab"})), 13);
        assert_eq!(estimate_json(&json!({})), 0);
        assert_eq!(estimate_json(&json!([])), 0);
    }

    #[test]
    fn test_nested_records() {
        let input = json!({
            "created": {"seconds": 1700000000, "nanoseconds": 5},
            "places": [{"latitude": 0.0, "longitude": 0.0}, {"name": "x"}]
        });
        // created: 8 + 1; places: (16 + 1) + ((2 + 1) + 1) => 21, + 1
        assert_eq!(estimate_json(&input), 9 + 22);
    }

    #[test]
    fn test_strings_are_borrowed() {
        let input = json!({"k": "v"});
        let v = classify_json(&input).unwrap();
        match v.get("k") {
            Some(Value::String(Cow::Borrowed(s))) => assert_eq!(*s, "v"),
            other => panic!("expected borrowed string, got {other:?}"),
        }
    }

    #[test]
    fn test_depth_limit() {
        let input = json!([[[1]]]);
        let ok = classify_json_with_options(&input, IngestOptions::new().max_depth(3));
        assert!(ok.is_ok());
        let err = classify_json_with_options(&input, IngestOptions::new().max_depth(2));
        assert_eq!(err, Err(IngestError::DepthExceeded { max: 2 }));
    }

    #[test]
    fn test_records_do_not_count_toward_depth() {
        let input = json!([{"seconds": 0, "nanoseconds": 0}]);
        let v = classify_json_with_options(&input, IngestOptions::new().max_depth(1)).unwrap();
        assert_eq!(estimate(&v), 9);
    }

    #[test]
    fn test_estimate_json_matches_classified_estimate() {
        let input = json!({
            "at": {"seconds": 1, "nanoseconds": 2},
            "pos": {"latitude": 1.0, "longitude": 2.0},
            "half": {"latitude": 1.0},
            "list": [null, true, 1.5, "😀", [[]], {}],
        });
        let classified = classify_json(&input).unwrap();
        assert_eq!(estimate_json(&input), estimate(&classified));
    }

    #[test]
    fn test_estimate_json_past_depth_limit() {
        let mut input = json!(null);
        for _ in 0..200 {
            input = json!([input]);
        }
        assert_eq!(
            classify_json(&input),
            Err(IngestError::DepthExceeded { max: crate::limits::DEFAULT_MAX_DEPTH })
        );
        assert_eq!(estimate_json(&input), 200 + 1);
    }

    #[test]
    fn test_estimate_json_str() {
        assert_eq!(estimate_json_str(r#"{"x": 1, "y": "ab"}"#), Ok(13));
        assert!(matches!(estimate_json_str("{not json"), Err(IngestError::Json(_))));
    }
}
