//! `>`, `>=`, `<`, `<=`.
//!
//! Null is incomparable here, never minimal or maximal. The strict operators
//! are false whenever either side is null; `>=` and `<=` additionally hold
//! for two nulls.
//!
//! Typed string and binary operands have no order. Tagged string and binary
//! scalars are ordered bytewise by `>=` and `<=` only; `>` and `<` reject them.

use std::cmp::Ordering;

use super::{misuse, Condition, Operands};
use crate::scalar::ScalarRef;

fn ordering(condition: Condition, operands: &Operands<'_>) -> Option<Ordering> {
    if operands.text().is_some() {
        misuse(condition, operands.kind_name());
    }
    operands.native_ordering()
}

fn accepts(condition: Condition, ordering: Ordering) -> bool {
    match condition {
        Condition::Greater => ordering == Ordering::Greater,
        Condition::GreaterEqual => ordering != Ordering::Less,
        Condition::Less => ordering == Ordering::Less,
        Condition::LessEqual => ordering != Ordering::Greater,
        other => unreachable!("{other} is not an order condition"),
    }
}

fn is_inclusive(condition: Condition) -> bool {
    matches!(condition, Condition::GreaterEqual | Condition::LessEqual)
}

pub(super) fn compare(
    condition: Condition,
    operands: &Operands<'_>,
    left_null: bool,
    right_null: bool,
) -> bool {
    let ordering = ordering(condition, operands);
    if left_null || right_null {
        return left_null && right_null && is_inclusive(condition);
    }
    ordering.is_some_and(|ordering| accepts(condition, ordering))
}

pub(super) fn compare_scalars(
    condition: Condition,
    left: ScalarRef<'_>,
    right: ScalarRef<'_>,
) -> bool {
    if left.is_null() && right.is_null() {
        return is_inclusive(condition);
    }
    if !left.types_are_comparable(right) {
        return false;
    }
    if left.kind().is_text() && !is_inclusive(condition) {
        return false;
    }
    left.compare(right).is_some_and(|ordering| accepts(condition, ordering))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Timestamp;

    #[test]
    fn strict_operators_reject_any_null() {
        let ops = Operands::Int(5, 1);
        for (left_null, right_null) in [(true, true), (true, false), (false, true)] {
            assert!(!compare(Condition::Greater, &ops, left_null, right_null));
            assert!(!compare(Condition::Less, &ops, left_null, right_null));
        }
        assert!(compare(Condition::Greater, &ops, false, false));
        assert!(!compare(Condition::Less, &ops, false, false));
    }

    #[test]
    fn inclusive_operators_accept_null_pairs() {
        let ops = Operands::Int(1, 5);
        assert!(compare(Condition::GreaterEqual, &ops, true, true));
        assert!(compare(Condition::LessEqual, &ops, true, true));
        assert!(!compare(Condition::GreaterEqual, &ops, true, false));
        assert!(!compare(Condition::LessEqual, &ops, false, true));
        assert!(!compare(Condition::GreaterEqual, &ops, false, false));
        assert!(compare(Condition::LessEqual, &ops, false, false));
        assert!(compare(Condition::LessEqual, &Operands::Int(5, 5), false, false));
    }

    #[test]
    fn floats_bools_and_timestamps_use_native_order() {
        assert!(!compare(Condition::Greater, &Operands::Double(f64::NAN, 0.0), false, false));
        assert!(!compare(Condition::LessEqual, &Operands::Double(f64::NAN, 0.0), false, false));
        assert!(compare(Condition::Greater, &Operands::Float(1.5, 1.0), false, false));
        assert!(compare(Condition::Greater, &Operands::Bool(true, false), false, false));
        let early = Timestamp::new(10, 0);
        let late = Timestamp::new(10, 1);
        assert!(compare(Condition::Less, &Operands::Timestamp(early, late), false, false));
    }

    #[test]
    #[should_panic(expected = "condition `>` does not accept string operands")]
    fn text_operands_are_misuse() {
        compare(Condition::Greater, &Operands::strings("b", "a"), false, false);
    }

    #[test]
    fn scalar_overload_checks_comparability() {
        assert!(compare_scalars(Condition::Greater, ScalarRef::Int(3), ScalarRef::Double(2.5)));
        assert!(!compare_scalars(Condition::Greater, ScalarRef::Int(3), ScalarRef::String("2")));
        assert!(!compare_scalars(Condition::Greater, ScalarRef::Null, ScalarRef::Int(2)));
        assert!(!compare_scalars(Condition::Greater, ScalarRef::Null, ScalarRef::Null));
        assert!(compare_scalars(Condition::GreaterEqual, ScalarRef::Null, ScalarRef::Null));
        assert!(compare_scalars(Condition::LessEqual, ScalarRef::Null, ScalarRef::Null));
        assert!(!compare_scalars(Condition::LessEqual, ScalarRef::Int(1), ScalarRef::Null));
        assert!(!compare_scalars(
            Condition::Greater,
            ScalarRef::String("b"),
            ScalarRef::String("a")
        ));
    }

    #[test]
    fn inclusive_scalar_operators_order_text_bytewise() {
        let (a, b) = (ScalarRef::String("a"), ScalarRef::String("b"));
        assert!(compare_scalars(Condition::GreaterEqual, a, a));
        assert!(compare_scalars(Condition::LessEqual, a, a));
        assert!(compare_scalars(Condition::GreaterEqual, b, a));
        assert!(!compare_scalars(Condition::GreaterEqual, a, b));
        assert!(compare_scalars(Condition::LessEqual, a, ScalarRef::Binary(b"b")));
        assert!(!compare_scalars(Condition::Greater, b, a));
        assert!(!compare_scalars(Condition::Less, a, b));
        assert!(!compare_scalars(Condition::LessEqual, a, ScalarRef::Int(1)));
    }
}
