//! json-value — an immutable JSON value tree.
//!
//! The closed six-variant [`JsonValue`] sum type plus the operations that
//! classify, transform, compare, and merge such values: the catamorphism
//! ([`JsonValue::fold`]), predicates and accessors, per-variant mapping,
//! structural equality with numeric-value number comparison, and the
//! right-biased deep merge.
//!
//! Parsing and serialization live outside the core: serde_json is the text
//! boundary, reached through `From` conversions in both directions.
//!
//! ```
//! use json_value::JsonValue;
//!
//! let base: JsonValue = serde_json::json!({"a": {"x": 1, "y": 2}}).into();
//! let patch: JsonValue = serde_json::json!({"a": {"y": 3}}).into();
//! let merged = base.deep_merge(patch);
//! assert_eq!(merged, serde_json::json!({"a": {"x": 1, "y": 3}}).into());
//! ```

pub mod cursor;
pub mod decode;
pub mod merge;
pub mod number;
pub mod object;
pub mod print;
pub mod value;

mod convert;
mod eq;

// Re-exports for convenience
pub use cursor::{Cursor, CursorOp, HCursor};
pub use decode::{DecodeError, FromJson};
pub use merge::DepthLimitExceeded;
pub use number::JsonNumber;
pub use object::JsonObject;
pub use print::Printer;
pub use value::JsonValue;
