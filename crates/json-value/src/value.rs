//! [`JsonValue`] — the closed six-variant JSON value tree.
//!
//! Every operation here is total: wrong-variant access is an absent
//! `Option` or a silent identity, never an error. The only input validation
//! in the whole type is non-finite float construction, and that policy is
//! picked per call site via three named constructors.

use crate::number::JsonNumber;
use crate::object::JsonObject;

/// An immutable JSON value.
///
/// Transformations consume or borrow their input and produce a new value;
/// nothing in the public API mutates a value observable through a shared
/// reference.
///
/// # Examples
///
/// ```
/// use json_value::JsonValue;
///
/// let v = JsonValue::from("hello");
/// assert!(v.is_string());
/// assert_eq!(v.as_str(), Some("hello"));
/// assert_eq!(v.as_bool(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub enum JsonValue {
    /// JSON `null`.
    #[default]
    Null,
    /// JSON `true` / `false`.
    Bool(bool),
    /// A finite JSON number.
    Number(JsonNumber),
    /// A JSON string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<JsonValue>),
    /// An ordered key→value container with unique keys.
    Object(JsonObject),
}

impl JsonValue {
    /// Total case analysis: exactly one handler runs, chosen by the runtime
    /// variant, and its result is returned unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_value::JsonValue;
    ///
    /// let size = JsonValue::from(vec![JsonValue::Null, JsonValue::Null]).fold(
    ///     || 0,
    ///     |_| 0,
    ///     |_| 0,
    ///     |s| s.len(),
    ///     |items| items.len(),
    ///     |obj| obj.len(),
    /// );
    /// assert_eq!(size, 2);
    /// ```
    pub fn fold<T>(
        &self,
        on_null: impl FnOnce() -> T,
        on_bool: impl FnOnce(bool) -> T,
        on_number: impl FnOnce(JsonNumber) -> T,
        on_string: impl FnOnce(&str) -> T,
        on_array: impl FnOnce(&[JsonValue]) -> T,
        on_object: impl FnOnce(&JsonObject) -> T,
    ) -> T {
        match self {
            JsonValue::Null => on_null(),
            JsonValue::Bool(b) => on_bool(*b),
            JsonValue::Number(n) => on_number(*n),
            JsonValue::String(s) => on_string(s),
            JsonValue::Array(items) => on_array(items),
            JsonValue::Object(obj) => on_object(obj),
        }
    }

    /// Container-shaped case analysis: `otherwise` runs for every
    /// non-container variant, the specific handler for `Array`/`Object`.
    pub fn array_or_object<T>(
        &self,
        otherwise: impl FnOnce() -> T,
        on_array: impl FnOnce(&[JsonValue]) -> T,
        on_object: impl FnOnce(&JsonObject) -> T,
    ) -> T {
        match self {
            JsonValue::Array(items) => on_array(items),
            JsonValue::Object(obj) => on_object(obj),
            _ => otherwise(),
        }
    }

    /// `true` for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// `true` for `Bool`.
    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// `true` for `Number`.
    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    /// `true` for `String`.
    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    /// `true` for `Array`.
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// `true` for `Object`.
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// The boolean payload, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The number payload, if this is a `Number`.
    pub fn as_number(&self) -> Option<JsonNumber> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The elements in order, if this is an `Array`.
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The object body, if this is an `Object`.
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Look up a field on an `Object`; `None` for any other variant.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(obj) => obj.get(key),
            _ => None,
        }
    }

    /// Look up an element of an `Array`; `None` for any other variant.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        match self {
            JsonValue::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Apply `f` to the boolean payload, producing any new value; other
    /// variants pass through unchanged.
    pub fn with_bool(self, f: impl FnOnce(bool) -> JsonValue) -> JsonValue {
        match self {
            JsonValue::Bool(b) => f(b),
            other => other,
        }
    }

    /// Apply `f` to the number payload; other variants pass through.
    pub fn with_number(self, f: impl FnOnce(JsonNumber) -> JsonValue) -> JsonValue {
        match self {
            JsonValue::Number(n) => f(n),
            other => other,
        }
    }

    /// Apply `f` to the string payload; other variants pass through.
    pub fn with_string(self, f: impl FnOnce(String) -> JsonValue) -> JsonValue {
        match self {
            JsonValue::String(s) => f(s),
            other => other,
        }
    }

    /// Apply `f` to the elements; other variants pass through.
    pub fn with_array(self, f: impl FnOnce(Vec<JsonValue>) -> JsonValue) -> JsonValue {
        match self {
            JsonValue::Array(items) => f(items),
            other => other,
        }
    }

    /// Apply `f` to the object body; other variants pass through.
    pub fn with_object(self, f: impl FnOnce(JsonObject) -> JsonValue) -> JsonValue {
        match self {
            JsonValue::Object(obj) => f(obj),
            other => other,
        }
    }

    /// Transform the boolean payload in place, keeping the variant.
    ///
    /// A no-op for every other variant; wrong-variant mapping is routine,
    /// not an error.
    pub fn map_bool(self, f: impl FnOnce(bool) -> bool) -> JsonValue {
        match self {
            JsonValue::Bool(b) => JsonValue::Bool(f(b)),
            other => other,
        }
    }

    /// Transform the number payload, keeping the variant.
    pub fn map_number(self, f: impl FnOnce(JsonNumber) -> JsonNumber) -> JsonValue {
        match self {
            JsonValue::Number(n) => JsonValue::Number(f(n)),
            other => other,
        }
    }

    /// Transform the string payload, keeping the variant.
    pub fn map_string(self, f: impl FnOnce(String) -> String) -> JsonValue {
        match self {
            JsonValue::String(s) => JsonValue::String(f(s)),
            other => other,
        }
    }

    /// Transform the elements, keeping the variant.
    pub fn map_array(self, f: impl FnOnce(Vec<JsonValue>) -> Vec<JsonValue>) -> JsonValue {
        match self {
            JsonValue::Array(items) => JsonValue::Array(f(items)),
            other => other,
        }
    }

    /// Transform the object body, keeping the variant.
    pub fn map_object(self, f: impl FnOnce(JsonObject) -> JsonObject) -> JsonValue {
        match self {
            JsonValue::Object(obj) => JsonValue::Object(f(obj)),
            other => other,
        }
    }

    /// Fixed diagnostic label for the variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "Null",
            JsonValue::Bool(_) => "Boolean",
            JsonValue::Number(_) => "Number",
            JsonValue::String(_) => "String",
            JsonValue::Array(_) => "Array",
            JsonValue::Object(_) => "Object",
        }
    }

    /// Build a `Number` from a float, absent for NaN/±Infinity.
    pub fn from_f64(value: f64) -> Option<JsonValue> {
        JsonNumber::from_f64(value).map(JsonValue::Number)
    }

    /// Build a `Number` from a float, substituting `Null` for NaN/±Infinity.
    pub fn from_f64_or_null(value: f64) -> JsonValue {
        JsonValue::from_f64(value).unwrap_or(JsonValue::Null)
    }

    /// Build a `Number` from a float, substituting the text rendering
    /// (`"NaN"`, `"inf"`, `"-inf"`) as a `String` for NaN/±Infinity.
    pub fn from_f64_or_string(value: f64) -> JsonValue {
        JsonValue::from_f64(value).unwrap_or_else(|| JsonValue::String(value.to_string()))
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<JsonNumber> for JsonValue {
    fn from(value: JsonNumber) -> Self {
        JsonValue::Number(value)
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Number(JsonNumber::from(value))
    }
}

impl From<u64> for JsonValue {
    fn from(value: u64) -> Self {
        JsonValue::Number(JsonNumber::from(value))
    }
}

impl From<i32> for JsonValue {
    fn from(value: i32) -> Self {
        JsonValue::Number(JsonNumber::from(value))
    }
}

impl From<u32> for JsonValue {
    fn from(value: u32) -> Self {
        JsonValue::Number(JsonNumber::from(value))
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_owned())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(value: Vec<JsonValue>) -> Self {
        JsonValue::Array(value)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(value: JsonObject) -> Self {
        JsonValue::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> [JsonValue; 6] {
        [
            JsonValue::Null,
            JsonValue::Bool(true),
            JsonValue::from(42_i64),
            JsonValue::from("text"),
            JsonValue::Array(vec![JsonValue::Null]),
            JsonValue::Object(JsonObject::new()),
        ]
    }

    #[test]
    fn exactly_one_predicate_holds_per_variant() {
        for (i, value) in samples().iter().enumerate() {
            let flags = [
                value.is_null(),
                value.is_bool(),
                value.is_number(),
                value.is_string(),
                value.is_array(),
                value.is_object(),
            ];
            for (j, flag) in flags.iter().enumerate() {
                assert_eq!(*flag, i == j, "variant {i}, predicate {j}");
            }
        }
    }

    #[test]
    fn matching_accessor_is_present_all_others_absent() {
        for (i, value) in samples().iter().enumerate() {
            assert_eq!(value.as_bool().is_some(), i == 1);
            assert_eq!(value.as_number().is_some(), i == 2);
            assert_eq!(value.as_str().is_some(), i == 3);
            assert_eq!(value.as_array().is_some(), i == 4);
            assert_eq!(value.as_object().is_some(), i == 5);
        }
    }

    #[test]
    fn fold_dispatches_to_the_variant_handler() {
        for (i, value) in samples().iter().enumerate() {
            let picked = value.fold(|| 0, |_| 1, |_| 2, |_| 3, |_| 4, |_| 5);
            assert_eq!(picked, i);
        }
    }

    #[test]
    fn fold_hands_over_the_exact_payload() {
        let value = JsonValue::Array(vec![JsonValue::from(1_i64), JsonValue::from(2_i64)]);
        let copied = value.fold(
            || vec![],
            |_| vec![],
            |_| vec![],
            |_| vec![],
            |items| items.to_vec(),
            |_| vec![],
        );
        assert_eq!(copied, vec![JsonValue::from(1_i64), JsonValue::from(2_i64)]);
    }

    #[test]
    fn array_or_object_defaults_for_scalars() {
        assert_eq!(JsonValue::Null.array_or_object(|| "other", |_| "arr", |_| "obj"), "other");
        assert_eq!(
            JsonValue::from(1_i64).array_or_object(|| "other", |_| "arr", |_| "obj"),
            "other"
        );
        assert_eq!(
            JsonValue::Array(vec![]).array_or_object(|| "other", |_| "arr", |_| "obj"),
            "arr"
        );
        assert_eq!(
            JsonValue::Object(JsonObject::new()).array_or_object(|| "other", |_| "arr", |_| "obj"),
            "obj"
        );
    }

    #[test]
    fn map_is_identity_on_other_variants() {
        let value = JsonValue::from("text");
        assert_eq!(value.clone().map_bool(|b| !b), value);
        assert_eq!(value.clone().map_number(|n| n), value);
        assert_eq!(value.clone().map_array(|mut a| {
            a.push(JsonValue::Null);
            a
        }), value);

        let null = JsonValue::Null;
        assert_eq!(null.clone().map_string(|s| s.to_uppercase()), null);
    }

    #[test]
    fn map_composes_on_the_matching_variant() {
        let value = JsonValue::from("ab");
        let chained = value
            .clone()
            .map_string(|s| s + "c")
            .map_string(|s| s + "d");
        let fused = value.map_string(|s| (s + "c") + "d");
        assert_eq!(chained, fused);
        assert_eq!(chained, JsonValue::from("abcd"));
    }

    #[test]
    fn with_applies_or_passes_through() {
        let flipped = JsonValue::Bool(true).with_bool(|b| JsonValue::Bool(!b));
        assert_eq!(flipped, JsonValue::Bool(false));

        // withX may change the variant, unlike mapX.
        let replaced = JsonValue::Bool(true).with_bool(|_| JsonValue::Null);
        assert_eq!(replaced, JsonValue::Null);

        let untouched = JsonValue::from(1_i64).with_bool(|_| JsonValue::Null);
        assert_eq!(untouched, JsonValue::from(1_i64));
    }

    #[test]
    fn type_names() {
        let expected = ["Null", "Boolean", "Number", "String", "Array", "Object"];
        for (value, name) in samples().iter().zip(expected) {
            assert_eq!(value.type_name(), name);
        }
    }

    #[test]
    fn non_finite_construction_policies() {
        assert!(JsonValue::from_f64(f64::NAN).is_none());
        assert!(JsonValue::from_f64(1.5).is_some());

        assert_eq!(JsonValue::from_f64_or_null(f64::INFINITY), JsonValue::Null);
        assert_eq!(JsonValue::from_f64_or_null(1.5), JsonValue::from_f64(1.5).unwrap());

        assert_eq!(
            JsonValue::from_f64_or_string(f64::NEG_INFINITY),
            JsonValue::from("-inf")
        );
        assert_eq!(JsonValue::from_f64_or_string(f64::NAN), JsonValue::from("NaN"));
    }

    #[test]
    fn field_and_index_lookup() {
        let obj: JsonObject = [("a".to_owned(), JsonValue::from(1_i64))].into_iter().collect();
        let value = JsonValue::Object(obj);
        assert_eq!(value.get("a"), Some(&JsonValue::from(1_i64)));
        assert_eq!(value.get("b"), None);
        assert_eq!(JsonValue::Null.get("a"), None);

        let arr = JsonValue::Array(vec![JsonValue::from(7_i64)]);
        assert_eq!(arr.get_index(0), Some(&JsonValue::from(7_i64)));
        assert_eq!(arr.get_index(1), None);
    }
}
