//! `!= NULL` and the always-true `none`.

use crate::scalar::ScalarRef;

/// Looks only at the left operand's nullness.
pub(super) fn not_null(left_null: bool) -> bool {
    !left_null
}

pub(super) fn not_null_scalar(left: ScalarRef<'_>) -> bool {
    !left.is_null()
}

pub(super) fn none() -> bool {
    true
}
