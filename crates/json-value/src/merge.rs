//! Deep merge of two JSON values.
//!
//! Objects merge key by key with recursive descent; every other pairing
//! resolves by full replacement, patch wins. Arrays are never merged
//! element-wise.

use std::mem;

use thiserror::Error;

use crate::object::JsonObject;
use crate::value::JsonValue;

/// Returned by [`JsonValue::deep_merge_bounded`] when both inputs nest
/// objects past the configured limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("object nesting exceeds the configured merge depth limit of {limit}")]
pub struct DepthLimitExceeded {
    /// The limit that was exceeded.
    pub limit: usize,
}

impl JsonValue {
    /// Merge `patch` into `self`, right-biased.
    ///
    /// When both sides are objects the result takes `patch`'s entries in
    /// `patch`'s order, recursively merging values under shared keys and
    /// appending `self`-only keys. In every other pairing the result is
    /// `patch` in its entirety.
    ///
    /// Recursion depth is bounded by the object nesting shared between the
    /// two trees; for untrusted input use
    /// [`deep_merge_bounded`](JsonValue::deep_merge_bounded).
    ///
    /// # Examples
    ///
    /// ```
    /// use json_value::JsonValue;
    ///
    /// let base: JsonValue = serde_json::json!({"a": 1, "b": 2}).into();
    /// let patch: JsonValue = serde_json::json!({"b": 3, "c": 4}).into();
    /// let merged: JsonValue = serde_json::json!({"a": 1, "b": 3, "c": 4}).into();
    /// assert_eq!(base.deep_merge(patch), merged);
    /// ```
    pub fn deep_merge(self, patch: JsonValue) -> JsonValue {
        match (self, patch) {
            (JsonValue::Object(base), JsonValue::Object(patch)) => {
                JsonValue::Object(merge_objects(base, patch))
            }
            (_, patch) => patch,
        }
    }

    /// [`deep_merge`](JsonValue::deep_merge) with a cap on object nesting
    /// depth, for input whose shape an attacker controls.
    pub fn deep_merge_bounded(
        self,
        patch: JsonValue,
        max_depth: usize,
    ) -> Result<JsonValue, DepthLimitExceeded> {
        match (self, patch) {
            (JsonValue::Object(base), JsonValue::Object(patch)) => Ok(JsonValue::Object(
                merge_objects_bounded(base, patch, max_depth, 0)?,
            )),
            (_, patch) => Ok(patch),
        }
    }
}

fn merge_objects(base: JsonObject, patch: JsonObject) -> JsonObject {
    let mut merged = patch;
    for (key, base_value) in base {
        match merged.get_mut(&key) {
            Some(slot) => {
                let patch_value = mem::take(slot);
                *slot = base_value.deep_merge(patch_value);
            }
            None => {
                merged.insert(key, base_value);
            }
        }
    }
    merged
}

fn merge_objects_bounded(
    base: JsonObject,
    patch: JsonObject,
    limit: usize,
    depth: usize,
) -> Result<JsonObject, DepthLimitExceeded> {
    if depth >= limit {
        return Err(DepthLimitExceeded { limit });
    }
    let mut merged = patch;
    for (key, base_value) in base {
        match merged.get_mut(&key) {
            Some(slot) => {
                let patch_value = mem::take(slot);
                *slot = match (base_value, patch_value) {
                    (JsonValue::Object(b), JsonValue::Object(p)) => {
                        JsonValue::Object(merge_objects_bounded(b, p, limit, depth + 1)?)
                    }
                    (_, p) => p,
                };
            }
            None => {
                merged.insert(key, base_value);
            }
        }
    }
    Ok(merged)
}
