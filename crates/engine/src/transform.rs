//! Selective traversal engine
//!
//! Walks a [`Value`] structurally, decides per-field whether each string
//! leaf is eligible for transformation, and delegates eligible leaves to
//! the entity codec. Structure is always preserved: the output has the
//! same shape, key set, and element order as the input, and is a freshly
//! constructed value that shares nothing with it.

use crate::codec::transform_text;
use crate::rules::Direction;
use entitext_core::{FieldSelector, Value};
use tracing::debug;

/// Transform every eligible string leaf of `value` in the given direction
///
/// Structural dispatch:
/// - `Null`, `Bool`, `Int`, `Float`, and `Bytes` leaves are returned
///   unchanged.
/// - A keyless string (top-level input, array element) is always
///   transformed; name filtering only applies at mapping levels.
/// - Arrays map each element through the same selector, preserving order
///   and length.
/// - Objects keep their key set. Container values are always recursed into
///   with the same selector, so the filter is re-evaluated against each
///   nesting level's own keys; string values are transformed iff the
///   selector accepts their key.
///
/// # Examples
///
/// ```
/// use entitext_engine::{transcode, Direction, FieldSelector, Value};
///
/// let input = Value::from(serde_json::json!({"title": "<h1>Hi</h1>"}));
/// let out = transcode(Direction::Encode, &input, &FieldSelector::all());
/// let title = out.as_object().unwrap().get("title").unwrap();
/// assert_eq!(title.as_str(), Some("&lt;h1&gt;Hi&lt;&#47;h1&gt;"));
/// ```
pub fn transcode(direction: Direction, value: &Value, selector: &FieldSelector) -> Value {
    match value {
        Value::String(text) => Value::String(transform_text(direction, text)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| transcode(direction, item, selector))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, field)| {
                    (key.clone(), transcode_field(direction, key, field, selector))
                })
                .collect(),
        ),
        other => other.clone(),
    }
}

// Eligibility is keyed on the field's own name. Containers recurse
// unconditionally: selection never prunes a subtree, it only guards the
// string leaves directly under the current level's keys.
fn transcode_field(
    direction: Direction,
    key: &str,
    value: &Value,
    selector: &FieldSelector,
) -> Value {
    match value {
        Value::String(text) if selector.selects(key) => {
            Value::String(transform_text(direction, text))
        }
        Value::Array(_) | Value::Object(_) => transcode(direction, value, selector),
        other => other.clone(),
    }
}

/// Encode eligible string leaves of `value` as HTML entities
pub fn encode(value: &Value, selector: &FieldSelector) -> Value {
    debug!(direction = %Direction::Encode, selector = %selector, "transcoding value");
    transcode(Direction::Encode, value, selector)
}

/// Decode HTML entities in eligible string leaves of `value`
pub fn decode(value: &Value, selector: &FieldSelector) -> Value {
    debug!(direction = %Direction::Decode, selector = %selector, "transcoding value");
    transcode(Direction::Decode, value, selector)
}
