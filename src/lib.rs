//! Entitext - selective HTML-entity transcoding for nested values
//!
//! Entitext converts a fixed set of characters to and from HTML entities and
//! applies the transformation to arbitrarily nested data (scalars, objects,
//! arrays), with optional field-level inclusion/exclusion control.
//!
//! # Quick Start
//!
//! ```
//! use entitext::{decode, encode, FieldSelector, Value};
//!
//! let input = Value::from(serde_json::json!({
//!     "content": "<b>Bold</b>",
//!     "note": "{Important}",
//! }));
//!
//! // Transform only the `content` field
//! let encoded = encode(&input, &FieldSelector::include(["content"]));
//! let decoded = decode(&encoded, &FieldSelector::include(["content"]));
//! assert_eq!(decoded, input);
//! ```
//!
//! # Architecture
//!
//! All transformation goes through the traversal engine in
//! `entitext-engine`, which walks a [`Value`] structurally and delegates
//! eligible string leaves to the entity codec. The value model, field
//! selection policy, and error types live in `entitext-core`.
//!
//! Both directions are pure functions: no I/O, no shared state, and the
//! output never aliases the input.

// Re-export the public API from entitext-engine
pub use entitext_engine::*;
