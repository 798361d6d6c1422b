//! Entity substitution rules
//!
//! The rule table is ordered and the order is load-bearing: each codec pass
//! runs over the result of the previous one, so a rule must never produce
//! text that a later rule's source pattern matches. The encode direction
//! satisfies this because no entity contains a later source character.
//!
//! `&` is deliberately absent from the table. Literal ampersands pass
//! through unchanged in both directions, which keeps already-escaped text
//! and naturally-occurring ampersands (`x && y`) from being double-escaped.
//! The decode direction still fires on entity sequences, so re-encoding is
//! a no-op while decoding restores the literal characters.

use once_cell::sync::Lazy;
use std::fmt;

/// Transformation direction for the codec and the traversal engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Characters to entities
    Encode,
    /// Entities to characters
    Decode,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encode => write!(f, "encode"),
            Direction::Decode => write!(f, "decode"),
        }
    }
}

/// Ordered character-to-entity substitution rules for the encode direction
pub const ENCODE_RULES: &[(&str, &str)] = &[
    ("<", "&lt;"),
    (">", "&gt;"),
    ("\"", "&quot;"),
    ("'", "&#39;"),
    ("/", "&#47;"),
    ("{", "&#123;"),
    ("}", "&#125;"),
    ("(", "&#40;"),
    (")", "&#41;"),
];

// Exact inverse of ENCODE_RULES in the same order, derived once so the two
// directions cannot drift.
static DECODE_RULES: Lazy<Vec<(&'static str, &'static str)>> =
    Lazy::new(|| ENCODE_RULES.iter().map(|&(ch, entity)| (entity, ch)).collect());

/// Substitution rules for the given direction, in application order
pub fn rules_for(direction: Direction) -> &'static [(&'static str, &'static str)] {
    match direction {
        Direction::Encode => ENCODE_RULES,
        Direction::Decode => DECODE_RULES.as_slice(),
    }
}
