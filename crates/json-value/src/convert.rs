//! Conversions to and from [`serde_json::Value`].
//!
//! Parsing and serialization are external collaborators: serde_json (built
//! with `preserve_order`, so object ordering survives the boundary) parses
//! text, these conversions bring the result in and out.

use crate::number::JsonNumber;
use crate::object::JsonObject;
use crate::value::JsonValue;

impl From<&serde_json::Number> for JsonNumber {
    fn from(number: &serde_json::Number) -> Self {
        if let Some(u) = number.as_u64() {
            JsonNumber::from(u)
        } else if let Some(i) = number.as_i64() {
            JsonNumber::from(i)
        } else {
            // serde_json numbers are always finite.
            JsonNumber::from_f64(number.as_f64().unwrap_or(0.0))
                .unwrap_or_else(|| JsonNumber::from(0_u64))
        }
    }
}

impl From<JsonNumber> for serde_json::Number {
    fn from(number: JsonNumber) -> Self {
        if let Some(u) = number.as_u64() {
            serde_json::Number::from(u)
        } else if let Some(i) = number.as_i64() {
            serde_json::Number::from(i)
        } else {
            // Finite by construction.
            serde_json::Number::from_f64(number.as_f64())
                .unwrap_or_else(|| serde_json::Number::from(0_u64))
        }
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => JsonValue::Number(JsonNumber::from(&n)),
            serde_json::Value::String(s) => JsonValue::String(s),
            serde_json::Value::Array(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(entries) => JsonValue::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, JsonValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<JsonValue> for serde_json::Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => serde_json::Value::Null,
            JsonValue::Bool(b) => serde_json::Value::Bool(b),
            JsonValue::Number(n) => serde_json::Value::Number(n.into()),
            JsonValue::String(s) => serde_json::Value::String(s),
            JsonValue::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            JsonValue::Object(entries) => serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<JsonObject> for serde_json::Map<String, serde_json::Value> {
    fn from(object: JsonObject) -> Self {
        object
            .into_iter()
            .map(|(key, value)| (key, serde_json::Value::from(value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_convert_both_ways() {
        let raw = serde_json::json!([null, true, 3, -4, 2.5, "s"]);
        let value = JsonValue::from(raw.clone());
        assert_eq!(serde_json::Value::from(value), raw);
    }

    #[test]
    fn object_key_order_survives_the_boundary() {
        let raw: serde_json::Value =
            serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).expect("valid JSON");
        let value = JsonValue::from(raw);
        let keys: Vec<&str> = value
            .as_object()
            .expect("object input")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn round_trip_preserves_equality() {
        let value = JsonValue::from(serde_json::json!({
            "nested": {"arr": [1, 2.5, {"deep": null}]},
            "big": u64::MAX,
            "neg": i64::MIN,
        }));
        let back = JsonValue::from(serde_json::Value::from(value.clone()));
        assert_eq!(back, value);
    }

    #[test]
    fn integral_floats_may_change_representation_but_not_value() {
        let float = JsonValue::from_f64(5.0).expect("finite");
        let back = JsonValue::from(serde_json::Value::from(float.clone()));
        assert_eq!(back, float);
    }
}
