use std::cmp::Ordering;

use crate::{scalar::Timestamp, text::StrRef};

/// Pair of same-kind operands handed to [`Condition::compare`].
///
/// The variant is the kind-pair switch the conditions dispatch on; a
/// condition asked to handle a kind it does not support panics.
///
/// [`Condition::compare`]: crate::Condition::compare
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operands<'a> {
    /// Signed integers.
    Int(i64, i64),
    /// 32-bit floats.
    Float(f32, f32),
    /// 64-bit floats.
    Double(f64, f64),
    /// Booleans.
    Bool(bool, bool),
    /// Timestamps.
    Timestamp(Timestamp, Timestamp),
    /// Strings.
    String(StrRef<'a>, StrRef<'a>),
    /// Binary blobs.
    Binary(StrRef<'a>, StrRef<'a>),
}

impl<'a> Operands<'a> {
    /// String operands from anything convertible to [`StrRef`].
    pub fn strings(left: impl Into<StrRef<'a>>, right: impl Into<StrRef<'a>>) -> Self {
        Operands::String(left.into(), right.into())
    }

    /// Binary operands.
    #[must_use]
    pub fn binaries(left: &'a [u8], right: &'a [u8]) -> Self {
        Operands::Binary(StrRef::new(left), StrRef::new(right))
    }

    /// Short kind name used in diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Operands::Int(..) => "int",
            Operands::Float(..) => "float",
            Operands::Double(..) => "double",
            Operands::Bool(..) => "bool",
            Operands::Timestamp(..) => "timestamp",
            Operands::String(..) => "string",
            Operands::Binary(..) => "binary",
        }
    }

    /// Text operands as `(left, right)`, for both strings and binaries.
    #[must_use]
    pub fn text(&self) -> Option<(StrRef<'a>, StrRef<'a>)> {
        match *self {
            Operands::String(left, right) | Operands::Binary(left, right) => Some((left, right)),
            _ => None,
        }
    }

    /// Folds the caller's null flags into text operands and reports the
    /// effective nullness of both sides.
    pub(crate) fn resolve_nulls(self, left_null: bool, right_null: bool) -> (Self, bool, bool) {
        let nullify = |value: StrRef<'a>, null: bool| if null { StrRef::null() } else { value };
        match self {
            Operands::String(left, right) => {
                let (left, right) = (nullify(left, left_null), nullify(right, right_null));
                (Operands::String(left, right), left.is_null(), right.is_null())
            }
            Operands::Binary(left, right) => {
                let (left, right) = (nullify(left, left_null), nullify(right, right_null));
                (Operands::Binary(left, right), left.is_null(), right.is_null())
            }
            other => (other, left_null, right_null),
        }
    }

    /// Payload equality, ignoring nullness.
    pub(crate) fn values_equal(&self) -> bool {
        match *self {
            Operands::Int(l, r) => l == r,
            Operands::Float(l, r) => l == r,
            Operands::Double(l, r) => l == r,
            Operands::Bool(l, r) => l == r,
            Operands::Timestamp(l, r) => l == r,
            Operands::String(l, r) | Operands::Binary(l, r) => l.as_bytes() == r.as_bytes(),
        }
    }

    /// Native ordering of ordered kinds; `None` for text or unordered floats.
    pub(crate) fn native_ordering(&self) -> Option<Ordering> {
        match *self {
            Operands::Int(l, r) => Some(l.cmp(&r)),
            Operands::Float(l, r) => l.partial_cmp(&r),
            Operands::Double(l, r) => l.partial_cmp(&r),
            Operands::Bool(l, r) => Some(l.cmp(&r)),
            Operands::Timestamp(l, r) => Some(l.cmp(&r)),
            Operands::String(..) | Operands::Binary(..) => None,
        }
    }
}

impl From<(i64, i64)> for Operands<'_> {
    fn from((left, right): (i64, i64)) -> Self {
        Operands::Int(left, right)
    }
}

impl From<(f64, f64)> for Operands<'_> {
    fn from((left, right): (f64, f64)) -> Self {
        Operands::Double(left, right)
    }
}

impl From<(bool, bool)> for Operands<'_> {
    fn from((left, right): (bool, bool)) -> Self {
        Operands::Bool(left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_flags_are_folded_into_text() {
        let (operands, left_null, right_null) =
            Operands::strings("a", "b").resolve_nulls(true, false);
        assert!(left_null);
        assert!(!right_null);
        assert_eq!(operands, Operands::String(StrRef::null(), StrRef::from("b")));

        let (_, left_null, right_null) =
            Operands::String(StrRef::null(), StrRef::from("b")).resolve_nulls(false, false);
        assert!(left_null && !right_null);

        let (operands, left_null, right_null) = Operands::Int(1, 2).resolve_nulls(false, true);
        assert_eq!(operands, Operands::Int(1, 2));
        assert!(!left_null && right_null);
    }

    #[test]
    fn payload_equality_and_ordering() {
        assert!(Operands::Int(3, 3).values_equal());
        assert!(!Operands::Double(f64::NAN, f64::NAN).values_equal());
        assert!(Operands::binaries(b"x", b"x").values_equal());
        assert_eq!(Operands::Bool(false, true).native_ordering(), Some(Ordering::Less));
        assert_eq!(Operands::strings("a", "b").native_ordering(), None);
        assert_eq!(Operands::from((2.0, 1.0)).native_ordering(), Some(Ordering::Greater));
        assert_eq!(Operands::from((1_i64, 2_i64)).kind_name(), "int");
    }
}
