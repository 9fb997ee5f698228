//! `==`, `!=`, `==[c]`, `!=[c]`.

use super::Operands;
use crate::{case_fold::CaseFolded, scalar::ScalarRef, text::StrRef};

/// Both null, or both present with identical payloads.
pub(super) fn equal(operands: &Operands<'_>, left_null: bool, right_null: bool) -> bool {
    (left_null && right_null) || (!left_null && !right_null && operands.values_equal())
}

/// Present-vs-present compares payloads; null-vs-null is *not* unequal;
/// null-vs-present is unequal.
pub(super) fn not_equal(operands: &Operands<'_>, left_null: bool, right_null: bool) -> bool {
    match (left_null, right_null) {
        (false, false) => !operands.values_equal(),
        (true, true) => false,
        _ => true,
    }
}

pub(super) fn equal_scalars(left: ScalarRef<'_>, right: ScalarRef<'_>) -> bool {
    (left.is_null() && right.is_null()) || (left.types_are_comparable(right) && left.equals(right))
}

/// Case-insensitive equality, folding the needle on demand.
pub(super) fn equal_ins(needle: StrRef<'_>, haystack: StrRef<'_>) -> bool {
    if needle.is_null() != haystack.is_null() {
        return false;
    }
    if needle.len() != haystack.len() {
        return false;
    }
    CaseFolded::new(needle).matches(haystack.as_bytes())
}

pub(super) fn equal_ins_folded(
    needle: StrRef<'_>,
    folded: &CaseFolded,
    haystack: StrRef<'_>,
) -> bool {
    if needle.is_null() != haystack.is_null() {
        return false;
    }
    folded.len() == haystack.len() && folded.matches(haystack.as_bytes())
}

pub(super) fn equal_ins_scalars(left: ScalarRef<'_>, right: ScalarRef<'_>) -> bool {
    if left.is_null() && right.is_null() {
        return true;
    }
    if !left.types_are_comparable(right) {
        return false;
    }
    match (left, right) {
        (ScalarRef::String(needle), ScalarRef::String(haystack)) => {
            equal_ins(StrRef::from(needle), StrRef::from(haystack))
        }
        (ScalarRef::Binary(needle), ScalarRef::Binary(haystack)) => {
            equal_ins(StrRef::new(needle), StrRef::new(haystack))
        }
        _ => left.equals(right),
    }
}
