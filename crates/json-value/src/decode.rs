//! Decoding JSON values into domain types.
//!
//! The core performs no validation of its own: [`JsonValue::decode_with`]
//! hands the value's history-tracking cursor to a caller-supplied function
//! and returns its result untouched. [`FromJson`] is the trait-shaped
//! version of the same hook, with stock impls for primitives.

use thiserror::Error;

use crate::cursor::HCursor;
use crate::number::JsonNumber;
use crate::value::JsonValue;

/// Why a decode failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The focused value had the wrong variant.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// Variant label the decoder wanted.
        expected: &'static str,
        /// Variant label actually found.
        found: &'static str,
    },

    /// An object was missing a required field.
    #[error("missing field \"{0}\"")]
    MissingField(String),

    /// A number did not fit the requested integer type.
    #[error("number out of range for {0}")]
    NumberOutOfRange(&'static str),

    /// Domain-specific failure raised by a custom decoder.
    #[error("{0}")]
    Custom(String),
}

/// Types that can be decoded from a JSON value via its cursor.
pub trait FromJson: Sized {
    /// Decode from the cursor's focus.
    fn from_json(cursor: &HCursor<'_>) -> Result<Self, DecodeError>;
}

impl JsonValue {
    /// Hand this value's history-tracking cursor to `f` and return its
    /// result unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_value::{DecodeError, JsonValue};
    ///
    /// let value: JsonValue = serde_json::json!({"id": 7}).into();
    /// let id = value.decode_with(|cursor| {
    ///     cursor
    ///         .field("id")
    ///         .ok_or_else(|| DecodeError::MissingField("id".to_owned()))?
    ///         .focus()
    ///         .decode::<i64>()
    /// });
    /// assert_eq!(id, Ok(7));
    /// ```
    pub fn decode_with<T, E>(&self, f: impl FnOnce(HCursor<'_>) -> Result<T, E>) -> Result<T, E> {
        f(self.hcursor())
    }

    /// Decode this value into `T`.
    pub fn decode<T: FromJson>(&self) -> Result<T, DecodeError> {
        T::from_json(&self.hcursor())
    }
}

fn mismatch(expected: &'static str, found: &JsonValue) -> DecodeError {
    DecodeError::TypeMismatch {
        expected,
        found: found.type_name(),
    }
}

impl FromJson for JsonValue {
    fn from_json(cursor: &HCursor<'_>) -> Result<Self, DecodeError> {
        Ok(cursor.focus().clone())
    }
}

impl FromJson for bool {
    fn from_json(cursor: &HCursor<'_>) -> Result<Self, DecodeError> {
        let focus = cursor.focus();
        focus.as_bool().ok_or_else(|| mismatch("Boolean", focus))
    }
}

impl FromJson for String {
    fn from_json(cursor: &HCursor<'_>) -> Result<Self, DecodeError> {
        let focus = cursor.focus();
        focus
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| mismatch("String", focus))
    }
}

impl FromJson for JsonNumber {
    fn from_json(cursor: &HCursor<'_>) -> Result<Self, DecodeError> {
        let focus = cursor.focus();
        focus.as_number().ok_or_else(|| mismatch("Number", focus))
    }
}

impl FromJson for i64 {
    fn from_json(cursor: &HCursor<'_>) -> Result<Self, DecodeError> {
        let number = JsonNumber::from_json(cursor)?;
        number
            .as_i64()
            .ok_or(DecodeError::NumberOutOfRange("i64"))
    }
}

impl FromJson for u64 {
    fn from_json(cursor: &HCursor<'_>) -> Result<Self, DecodeError> {
        let number = JsonNumber::from_json(cursor)?;
        number
            .as_u64()
            .ok_or(DecodeError::NumberOutOfRange("u64"))
    }
}

impl FromJson for f64 {
    fn from_json(cursor: &HCursor<'_>) -> Result<Self, DecodeError> {
        Ok(JsonNumber::from_json(cursor)?.as_f64())
    }
}

impl<T: FromJson> FromJson for Vec<T> {
    fn from_json(cursor: &HCursor<'_>) -> Result<Self, DecodeError> {
        let focus = cursor.focus();
        let items = focus.as_array().ok_or_else(|| mismatch("Array", focus))?;
        items.iter().map(|item| item.decode()).collect()
    }
}

impl<T: FromJson> FromJson for Option<T> {
    fn from_json(cursor: &HCursor<'_>) -> Result<Self, DecodeError> {
        if cursor.focus().is_null() {
            Ok(None)
        } else {
            T::from_json(cursor).map(Some)
        }
    }
}
