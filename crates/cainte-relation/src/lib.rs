//! Weighted finite string relations and start-anchored rewriting.
//!
//! This crate is the engine underneath the `cainte` normalization grammars:
//! an immutable [`Relation`] algebra (union, concatenation, closure,
//! composition, difference, weighted best-candidate application), a
//! start-anchored single-pass [`Rewrite`] scanner, and a loader for the
//! two-column rule tables the grammars are built from.
//!
//! Everything here is built once and shared read-only; application is a
//! pure, synchronous computation with no interior state.

mod relation;
mod rewrite;
mod table;

pub use relation::{Candidate, Relation};
pub use rewrite::Rewrite;
pub use table::{TableError, load_pairs, parse_pairs};
