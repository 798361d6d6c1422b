//! Entity codec: leaf-level text transformation
//!
//! Pure functions over a single string. No recursion and no knowledge of
//! field selection; the traversal engine decides what reaches the codec.

use crate::rules::{rules_for, Direction};

/// Apply the ordered substitution rules for `direction` to `text`
///
/// Rules run in their declared order, each pass over the result of the
/// previous pass. Total and deterministic for every string input,
/// including the empty string.
///
/// # Examples
///
/// ```
/// use entitext_engine::{transform_text, Direction};
///
/// assert_eq!(transform_text(Direction::Encode, "<b>"), "&lt;b&gt;");
/// assert_eq!(transform_text(Direction::Decode, "&lt;b&gt;"), "<b>");
/// // Bare ampersands are not part of the rule set
/// assert_eq!(transform_text(Direction::Encode, "Tom & Jerry"), "Tom & Jerry");
/// ```
pub fn transform_text(direction: Direction, text: &str) -> String {
    let mut out = text.to_owned();
    for &(pattern, replacement) in rules_for(direction) {
        if out.contains(pattern) {
            out = out.replace(pattern, replacement);
        }
    }
    out
}

/// Encode special characters in `text` as HTML entities
pub fn encode_text(text: &str) -> String {
    transform_text(Direction::Encode, text)
}

/// Decode HTML entities in `text` back to literal characters
pub fn decode_text(text: &str) -> String {
    transform_text(Direction::Decode, text)
}
