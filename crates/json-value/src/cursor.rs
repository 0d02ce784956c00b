//! Zipper-style navigation over a borrowed [`JsonValue`] tree.
//!
//! [`Cursor`] is the stateless navigator; [`HCursor`] additionally records
//! every successful move. Failed moves (missing field, index out of bounds,
//! wrong variant, `up` at the root) return `None`; navigation over JSON of
//! unknown shape is routine, not exceptional.

use crate::value::JsonValue;

/// One recorded navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorOp {
    /// Descended into an object field.
    Field(String),
    /// Descended into an array element.
    Index(usize),
    /// Moved back to the parent.
    Up,
}

/// A read-only cursor focused on one node of a value tree.
///
/// # Examples
///
/// ```
/// use json_value::JsonValue;
///
/// let value: JsonValue = serde_json::json!({"a": [10, 20]}).into();
/// let cursor = value.cursor().field("a").and_then(|c| c.index(1));
/// let focus = cursor.map(|c| c.focus().clone());
/// assert_eq!(focus, Some(JsonValue::from(20_i64)));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    focus: &'a JsonValue,
    parents: Vec<&'a JsonValue>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(root: &'a JsonValue) -> Self {
        Cursor {
            focus: root,
            parents: Vec::new(),
        }
    }

    /// The value the cursor points at.
    pub fn focus(&self) -> &'a JsonValue {
        self.focus
    }

    /// How many levels below the root the focus sits.
    pub fn depth(&self) -> usize {
        self.parents.len()
    }

    /// Descend into `key` of an object focus.
    pub fn field(mut self, key: &str) -> Option<Cursor<'a>> {
        let child = match self.focus {
            JsonValue::Object(obj) => obj.get(key)?,
            _ => return None,
        };
        self.parents.push(self.focus);
        Some(Cursor {
            focus: child,
            parents: self.parents,
        })
    }

    /// Descend into element `index` of an array focus.
    pub fn index(mut self, index: usize) -> Option<Cursor<'a>> {
        let child = match self.focus {
            JsonValue::Array(items) => items.get(index)?,
            _ => return None,
        };
        self.parents.push(self.focus);
        Some(Cursor {
            focus: child,
            parents: self.parents,
        })
    }

    /// Move back to the parent; `None` at the root.
    pub fn up(mut self) -> Option<Cursor<'a>> {
        let parent = self.parents.pop()?;
        Some(Cursor {
            focus: parent,
            parents: self.parents,
        })
    }

    /// The root value the cursor was built from.
    pub fn top(&self) -> &'a JsonValue {
        self.parents.first().copied().unwrap_or(self.focus)
    }
}

/// A cursor that records its successful moves.
///
/// # Examples
///
/// ```
/// use json_value::{CursorOp, JsonValue};
///
/// let value: JsonValue = serde_json::json!({"a": [true]}).into();
/// let cursor = value.hcursor().field("a").and_then(|c| c.index(0)).unwrap();
/// assert_eq!(
///     cursor.history(),
///     [CursorOp::Field("a".to_owned()), CursorOp::Index(0)]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct HCursor<'a> {
    cursor: Cursor<'a>,
    history: Vec<CursorOp>,
}

impl<'a> HCursor<'a> {
    pub(crate) fn new(root: &'a JsonValue) -> Self {
        HCursor {
            cursor: Cursor::new(root),
            history: Vec::new(),
        }
    }

    /// The value the cursor points at.
    pub fn focus(&self) -> &'a JsonValue {
        self.cursor.focus()
    }

    /// The moves taken so far, oldest first.
    pub fn history(&self) -> &[CursorOp] {
        &self.history
    }

    /// Descend into `key`, recording the move.
    pub fn field(self, key: &str) -> Option<HCursor<'a>> {
        let HCursor {
            cursor,
            mut history,
        } = self;
        let cursor = cursor.field(key)?;
        history.push(CursorOp::Field(key.to_owned()));
        Some(HCursor { cursor, history })
    }

    /// Descend into `index`, recording the move.
    pub fn index(self, index: usize) -> Option<HCursor<'a>> {
        let HCursor {
            cursor,
            mut history,
        } = self;
        let cursor = cursor.index(index)?;
        history.push(CursorOp::Index(index));
        Some(HCursor { cursor, history })
    }

    /// Move back to the parent, recording the move.
    pub fn up(self) -> Option<HCursor<'a>> {
        let HCursor {
            cursor,
            mut history,
        } = self;
        let cursor = cursor.up()?;
        history.push(CursorOp::Up);
        Some(HCursor { cursor, history })
    }
}

impl JsonValue {
    /// A stateless cursor focused on this value.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }

    /// A history-tracking cursor focused on this value.
    pub fn hcursor(&self) -> HCursor<'_> {
        HCursor::new(self)
    }
}
