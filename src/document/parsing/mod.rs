//! Per-paragraph and per-table classification and rendering
//!
//! One module per heuristic so each predicate/render pair stays
//! independently testable.

pub(crate) mod formatting;
pub(crate) mod heading;
pub(crate) mod image;
pub(crate) mod list;
pub(crate) mod table;
