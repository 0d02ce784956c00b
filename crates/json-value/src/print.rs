//! Rendering a [`JsonValue`] to text.
//!
//! One routine drives every configuration; the three stock configurations
//! are exposed as associated constants. `Display` for [`JsonValue`] is the
//! two-space form, a behavioral commitment other components rely on for
//! logs and test fixtures.

use std::fmt;
use std::fmt::Write as _;

use crate::value::JsonValue;

/// Rendering configuration: indent unit and colon spacing.
///
/// # Examples
///
/// ```
/// use json_value::{JsonValue, Printer};
///
/// let value: JsonValue = serde_json::json!({"a": [1, 2]}).into();
/// assert_eq!(Printer::NO_SPACES.print(&value), r#"{"a":[1,2]}"#);
/// assert_eq!(
///     Printer::SPACES2.print(&value),
///     "{\n  \"a\": [\n    1,\n    2\n  ]\n}"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Printer {
    indent: &'static str,
    space_after_colon: bool,
}

impl Printer {
    /// No extra whitespace at all.
    pub const NO_SPACES: Printer = Printer::new("", false);

    /// Two-space indent, one line per element.
    pub const SPACES2: Printer = Printer::new("  ", true);

    /// Four-space indent, one line per element.
    pub const SPACES4: Printer = Printer::new("    ", true);

    /// A custom configuration. An empty `indent` keeps everything on one
    /// line.
    pub const fn new(indent: &'static str, space_after_colon: bool) -> Self {
        Printer {
            indent,
            space_after_colon,
        }
    }

    /// Render `value` under this configuration.
    pub fn print(&self, value: &JsonValue) -> String {
        let mut out = String::new();
        self.write_value(&mut out, value, 0);
        out
    }

    fn write_value(&self, out: &mut String, value: &JsonValue, depth: usize) {
        match value {
            JsonValue::Null => out.push_str("null"),
            JsonValue::Bool(true) => out.push_str("true"),
            JsonValue::Bool(false) => out.push_str("false"),
            JsonValue::Number(n) => {
                let _ = write!(out, "{n}");
            }
            JsonValue::String(s) => write_escaped(out, s),
            JsonValue::Array(items) => {
                if items.is_empty() {
                    out.push_str("[]");
                    return;
                }
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    self.break_line(out, depth + 1);
                    self.write_value(out, item, depth + 1);
                }
                self.break_line(out, depth);
                out.push(']');
            }
            JsonValue::Object(obj) => {
                if obj.is_empty() {
                    out.push_str("{}");
                    return;
                }
                out.push('{');
                for (i, (key, item)) in obj.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    self.break_line(out, depth + 1);
                    write_escaped(out, key);
                    out.push(':');
                    if self.space_after_colon {
                        out.push(' ');
                    }
                    self.write_value(out, item, depth + 1);
                }
                self.break_line(out, depth);
                out.push('}');
            }
        }
    }

    fn break_line(&self, out: &mut String, depth: usize) {
        if self.indent.is_empty() {
            return;
        }
        out.push('\n');
        for _ in 0..depth {
            out.push_str(self.indent);
        }
    }
}

/// Write `s` as a quoted JSON string literal.
fn write_escaped(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{000C}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            c if c < '\u{0020}' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Printer::SPACES2.print(self))
    }
}
