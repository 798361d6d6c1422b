//! Transcoder Comprehensive Test Suite
//!
//! Tests for the selective entity-transcoding guarantees.
//!
//! ## Test Tier Structure
//!
//! - **Tier 1: Codec Invariants**
//!   Rule table semantics at the single-string level: ordering, ampersand
//!   pass-through, round trips, idempotence.
//!
//! - **Tier 2: Selection Invariants**
//!   Field selection policy: include/exclude/default, per-level
//!   re-evaluation, keyless strings, degenerate operators.
//!
//! - **Tier 3: Shape Invariants**
//!   Structure preservation: key sets, lengths, order, non-string leaves,
//!   null propagation.
//!
//! - **Tier 4: Property-Based Round Trips**
//!   Randomized strings and value trees through encode/decode.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test transcode_comprehensive
//!
//! # Run only selection policy tests
//! cargo test --test transcode_comprehensive selection
//! ```
