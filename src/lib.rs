#![deny(missing_docs)]
//! Typed scan conditions for a columnar storage engine.
//!
//! The crate provides a fixed catalog of comparison and matching rules
//! ([`Condition`]) that a scan evaluates per value, plus the range pruning
//! predicates a chunk scanner uses to skip or wholesale-accept chunks from
//! their min/max bounds.
//!
//! ```
//! use scan_conditions::{Condition, Operands, StrRef, CaseFolded};
//!
//! assert!(Condition::Contains.compare(Operands::strings("ell", "hello"), false, false));
//! assert!(Condition::Greater.can_match(10_i64, 5, 20));
//!
//! // Fold a case-insensitive needle once, reuse it per row.
//! let needle = StrRef::from("ELL");
//! let folded = CaseFolded::new(needle);
//! assert!(Condition::ContainsIns.compare_folded(needle, &folded, StrRef::from("hello")));
//! ```

mod logging;

pub mod case_fold;
pub mod condition;
/// Decoding errors.
pub mod error;
pub mod like;
pub mod pruning;
pub mod scalar;
pub mod scan;
pub mod text;

pub use crate::{
    case_fold::{CaseFolded, SkipTable},
    condition::{Condition, Operands, VectorCompare},
    error::ConditionError,
    pruning::{ChunkBounds, ChunkPruner, ChunkVerdict, PruningConfig, RangeValue},
    scalar::{Scalar, ScalarKind, ScalarRef, Timestamp},
    scan::{evaluate_chunk, evaluate_scalars, BitmapRowSet, RowId, RowSet},
    text::StrRef,
};
