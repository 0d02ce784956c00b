//! [`JsonNumber`] — a lossless JSON number with value-based equality.
//!
//! The representation (unsigned integer, negative integer, or finite float)
//! is private: two numbers compare equal when they denote the same magnitude,
//! regardless of how they were constructed. `100_u64` and `100.0_f64` produce
//! equal numbers.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A JSON number. Never NaN or ±Infinity.
///
/// # Examples
///
/// ```
/// use json_value::JsonNumber;
///
/// let a = JsonNumber::from(100_u64);
/// let b = JsonNumber::from_f64(100.0).unwrap();
/// assert_eq!(a, b);
///
/// assert!(JsonNumber::from_f64(f64::NAN).is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JsonNumber {
    repr: Repr,
}

#[derive(Debug, Clone, Copy)]
enum Repr {
    /// Non-negative integer.
    PosInt(u64),
    /// Strictly negative integer.
    NegInt(i64),
    /// Finite float.
    Float(f64),
}

/// Canonical form used for equality and hashing.
///
/// Integral finite floats collapse to the integer form they denote, and
/// `-0.0` collapses to `0`, so representation never leaks into `Eq`/`Hash`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Canonical {
    UInt(u64),
    Int(i64),
    Bits(u64),
}

impl JsonNumber {
    /// Build a number from a float, rejecting NaN and ±Infinity.
    pub fn from_f64(value: f64) -> Option<JsonNumber> {
        if value.is_finite() {
            Some(JsonNumber {
                repr: Repr::Float(value),
            })
        } else {
            None
        }
    }

    /// `true` if the number denotes an integer (including integral floats
    /// such as `3.0`).
    pub fn is_integer(&self) -> bool {
        !matches!(self.canonical(), Canonical::Bits(_))
    }

    /// The value as an `i64`, if it is an integer in range.
    ///
    /// Integral floats are accepted: a number built from `2.0` returns
    /// `Some(2)`.
    pub fn as_i64(&self) -> Option<i64> {
        match self.canonical() {
            Canonical::UInt(u) => i64::try_from(u).ok(),
            Canonical::Int(i) => Some(i),
            Canonical::Bits(_) => None,
        }
    }

    /// The value as a `u64`, if it is a non-negative integer in range.
    pub fn as_u64(&self) -> Option<u64> {
        match self.canonical() {
            Canonical::UInt(u) => Some(u),
            Canonical::Int(_) | Canonical::Bits(_) => None,
        }
    }

    /// The value as an `f64`. Total; large integers round to the nearest
    /// representable float.
    pub fn as_f64(&self) -> f64 {
        match self.repr {
            Repr::PosInt(u) => u as f64,
            Repr::NegInt(i) => i as f64,
            Repr::Float(f) => f,
        }
    }

    fn canonical(&self) -> Canonical {
        match self.repr {
            Repr::PosInt(u) => Canonical::UInt(u),
            Repr::NegInt(i) => Canonical::Int(i),
            Repr::Float(f) => {
                if f.fract() == 0.0 {
                    // Round-trip both ways so only exactly-representable
                    // integers collapse to the integer form.
                    if f >= 0.0 && (f as u64) as f64 == f {
                        return Canonical::UInt(f as u64);
                    }
                    if f < 0.0 && (f as i64) as f64 == f {
                        return Canonical::Int(f as i64);
                    }
                }
                Canonical::Bits(f.to_bits())
            }
        }
    }
}

impl PartialEq for JsonNumber {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for JsonNumber {}

impl Hash for JsonNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            Repr::PosInt(u) => write!(f, "{u}"),
            Repr::NegInt(i) => write!(f, "{i}"),
            Repr::Float(x) => match serde_json::Number::from_f64(x) {
                Some(n) => write!(f, "{n}"),
                // Unreachable for a finite float; mirror JSON.stringify.
                None => f.write_str("null"),
            },
        }
    }
}

impl From<u64> for JsonNumber {
    fn from(value: u64) -> Self {
        JsonNumber {
            repr: Repr::PosInt(value),
        }
    }
}

impl From<i64> for JsonNumber {
    fn from(value: i64) -> Self {
        if value >= 0 {
            JsonNumber {
                repr: Repr::PosInt(value as u64),
            }
        } else {
            JsonNumber {
                repr: Repr::NegInt(value),
            }
        }
    }
}

impl From<u32> for JsonNumber {
    fn from(value: u32) -> Self {
        JsonNumber::from(u64::from(value))
    }
}

impl From<i32> for JsonNumber {
    fn from(value: i32) -> Self {
        JsonNumber::from(i64::from(value))
    }
}

impl From<usize> for JsonNumber {
    fn from(value: usize) -> Self {
        JsonNumber::from(value as u64)
    }
}
