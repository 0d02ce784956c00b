//! Structural equality and hashing for [`JsonValue`].
//!
//! Equality recurses into containers: arrays element-wise in order, objects
//! key-wise ignoring order, numbers by numeric value. The traversal uses an
//! explicit pair stack, so attacker-deep input cannot overflow the call
//! stack. The cross-variant rule is exactly one: a pairing of different
//! variants is equal iff both sides are `Null`.

use std::hash::{Hash, Hasher};

use crate::value::JsonValue;

impl PartialEq for JsonValue {
    fn eq(&self, other: &Self) -> bool {
        let mut pending: Vec<(&JsonValue, &JsonValue)> = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            match (a, b) {
                (JsonValue::Bool(x), JsonValue::Bool(y)) => {
                    if x != y {
                        return false;
                    }
                }
                (JsonValue::Number(x), JsonValue::Number(y)) => {
                    if x != y {
                        return false;
                    }
                }
                (JsonValue::String(x), JsonValue::String(y)) => {
                    if x != y {
                        return false;
                    }
                }
                (JsonValue::Array(xs), JsonValue::Array(ys)) => {
                    if xs.len() != ys.len() {
                        return false;
                    }
                    pending.extend(xs.iter().zip(ys.iter()));
                }
                (JsonValue::Object(xs), JsonValue::Object(ys)) => {
                    if xs.len() != ys.len() {
                        return false;
                    }
                    for (key, x) in xs.iter() {
                        match ys.get(key) {
                            Some(y) => pending.push((x, y)),
                            None => return false,
                        }
                    }
                }
                // Mixed variants: equal only when both are null-like absence.
                _ => {
                    if !(a.is_null() && b.is_null()) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

impl Eq for JsonValue {}

/// Hashing consistent with `Eq`: a variant tag plus the payload, numbers via
/// their canonical form, objects in sorted-key order.
impl Hash for JsonValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            JsonValue::Null => state.write_u8(0),
            JsonValue::Bool(b) => {
                state.write_u8(1);
                b.hash(state);
            }
            JsonValue::Number(n) => {
                state.write_u8(2);
                n.hash(state);
            }
            JsonValue::String(s) => {
                state.write_u8(3);
                s.hash(state);
            }
            JsonValue::Array(items) => {
                state.write_u8(4);
                state.write_usize(items.len());
                for item in items {
                    item.hash(state);
                }
            }
            JsonValue::Object(obj) => {
                state.write_u8(5);
                obj.hash(state);
            }
        }
    }
}
