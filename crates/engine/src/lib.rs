//! Transcoding engine for entitext
//!
//! This crate implements the two components of the transcoder:
//! - Entity codec: ordered character/entity substitution over a single
//!   string (`rules`, `codec`)
//! - Selective traversal engine: structural recursion over a `Value` that
//!   decides per-field whether each string leaf is transformed (`transform`)
//!
//! The engine is the only component that knows about traversal order and
//! field eligibility; the codec knows nothing about structure or selection.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod rules;
pub mod transform;

pub use codec::{decode_text, encode_text, transform_text};
pub use rules::{rules_for, Direction, ENCODE_RULES};
pub use transform::{decode, encode, transcode};

// Re-export core types so downstream callers need only this crate
pub use entitext_core::{Error, FieldSelector, Result, SelectorOp, Value};
