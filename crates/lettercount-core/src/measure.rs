//! Measurement and lookup.

use crate::render::render;
use serde::Serialize;
use serde_json::Value;

static NULL: Value = Value::Null;

/// Count of characters in the measured text form of `value`.
///
/// The text form is ASCII, so this is also its length in bytes.
pub fn letter_count<T>(value: &T) -> serde_json::Result<usize>
where
    T: ?Sized + Serialize,
{
    Ok(render(value)?.chars().count())
}

/// Look up `key` in `doc`, falling back to JSON null.
///
/// Missing keys and non-object documents both yield null; the lookup
/// never fails.
pub fn field_or_null<'a>(doc: &'a Value, key: &str) -> &'a Value {
    doc.get(key).unwrap_or(&NULL)
}
