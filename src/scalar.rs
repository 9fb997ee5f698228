//! Tagged scalar values consumed by the tagged-scalar condition overloads.

use std::cmp::Ordering;

use crate::text::StrRef;

/// Point in time with nanosecond precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    /// Seconds since the Unix epoch.
    pub seconds: i64,
    /// Sub-second nanoseconds, same sign as `seconds`.
    pub nanoseconds: i32,
}

impl Timestamp {
    /// Creates a timestamp from its parts.
    #[must_use]
    pub const fn new(seconds: i64, nanoseconds: i32) -> Self {
        Self {
            seconds,
            nanoseconds,
        }
    }
}

/// Kind discriminator of a scalar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// `NULL`.
    Null,
    /// Boolean.
    Bool,
    /// Signed 64-bit integer.
    Int,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// UTF-8 string.
    String,
    /// Binary blob.
    Binary,
    /// Timestamp.
    Timestamp,
    /// 12-byte object identifier.
    ObjectId,
    /// 16-byte UUID.
    Uuid,
}

impl ScalarKind {
    /// Integer and floating point kinds.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, ScalarKind::Int | ScalarKind::Float | ScalarKind::Double)
    }

    /// String and binary kinds.
    #[must_use]
    pub fn is_text(self) -> bool {
        matches!(self, ScalarKind::String | ScalarKind::Binary)
    }

    /// Returns true when values of the two kinds may be compared.
    ///
    /// Null is only comparable with null; numeric kinds compare with each
    /// other; strings and binaries compare bytewise with each other.
    #[must_use]
    pub fn comparable_with(self, other: ScalarKind) -> bool {
        self == other
            || (self.is_numeric() && other.is_numeric())
            || (self.is_text() && other.is_text())
    }
}

/// Owned tagged scalar.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// `NULL`.
    Null,
    /// Boolean literal.
    Bool(bool),
    /// Signed 64-bit integer.
    Int(i64),
    /// 32-bit float.
    Float(f32),
    /// 64-bit float.
    Double(f64),
    /// UTF-8 string.
    String(String),
    /// Binary blob.
    Binary(Vec<u8>),
    /// Timestamp.
    Timestamp(Timestamp),
    /// Object identifier.
    ObjectId([u8; 12]),
    /// UUID.
    Uuid([u8; 16]),
}

impl Scalar {
    /// Returns true when the scalar is `Null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Kind discriminator.
    #[must_use]
    pub fn kind(&self) -> ScalarKind {
        self.as_ref().kind()
    }

    /// Returns a borrowed view over this scalar.
    #[must_use]
    pub fn as_ref(&self) -> ScalarRef<'_> {
        match self {
            Scalar::Null => ScalarRef::Null,
            Scalar::Bool(value) => ScalarRef::Bool(*value),
            Scalar::Int(value) => ScalarRef::Int(*value),
            Scalar::Float(value) => ScalarRef::Float(*value),
            Scalar::Double(value) => ScalarRef::Double(*value),
            Scalar::String(value) => ScalarRef::String(value.as_str()),
            Scalar::Binary(value) => ScalarRef::Binary(value.as_slice()),
            Scalar::Timestamp(value) => ScalarRef::Timestamp(*value),
            Scalar::ObjectId(value) => ScalarRef::ObjectId(*value),
            Scalar::Uuid(value) => ScalarRef::Uuid(*value),
        }
    }

    /// Compares with another scalar when the kinds are comparable.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        self.as_ref().compare(other.as_ref())
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::Float(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Double(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<&[u8]> for Scalar {
    fn from(value: &[u8]) -> Self {
        Scalar::Binary(value.to_vec())
    }
}

impl From<Vec<u8>> for Scalar {
    fn from(value: Vec<u8>) -> Self {
        Scalar::Binary(value)
    }
}

impl From<Timestamp> for Scalar {
    fn from(value: Timestamp) -> Self {
        Scalar::Timestamp(value)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Scalar::Null, Into::into)
    }
}

/// Borrowed view over a tagged scalar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScalarRef<'a> {
    /// `NULL`.
    Null,
    /// Boolean literal.
    Bool(bool),
    /// Signed 64-bit integer.
    Int(i64),
    /// 32-bit float.
    Float(f32),
    /// 64-bit float.
    Double(f64),
    /// UTF-8 string slice.
    String(&'a str),
    /// Binary slice.
    Binary(&'a [u8]),
    /// Timestamp.
    Timestamp(Timestamp),
    /// Object identifier.
    ObjectId([u8; 12]),
    /// UUID.
    Uuid([u8; 16]),
}

impl<'a> ScalarRef<'a> {
    /// Returns true when the scalar is `Null`.
    #[must_use]
    pub fn is_null(self) -> bool {
        matches!(self, ScalarRef::Null)
    }

    /// Kind discriminator.
    #[must_use]
    pub fn kind(self) -> ScalarKind {
        match self {
            ScalarRef::Null => ScalarKind::Null,
            ScalarRef::Bool(_) => ScalarKind::Bool,
            ScalarRef::Int(_) => ScalarKind::Int,
            ScalarRef::Float(_) => ScalarKind::Float,
            ScalarRef::Double(_) => ScalarKind::Double,
            ScalarRef::String(_) => ScalarKind::String,
            ScalarRef::Binary(_) => ScalarKind::Binary,
            ScalarRef::Timestamp(_) => ScalarKind::Timestamp,
            ScalarRef::ObjectId(_) => ScalarKind::ObjectId,
            ScalarRef::Uuid(_) => ScalarKind::Uuid,
        }
    }

    /// Returns true when `self` and `other` hold mutually comparable kinds.
    #[must_use]
    pub fn types_are_comparable(self, other: ScalarRef<'_>) -> bool {
        self.kind().comparable_with(other.kind())
    }

    /// Bytes of a string or binary scalar.
    #[must_use]
    pub fn as_text(self) -> Option<StrRef<'a>> {
        match self {
            ScalarRef::String(value) => Some(StrRef::from(value)),
            ScalarRef::Binary(value) => Some(StrRef::new(value)),
            _ => None,
        }
    }

    /// Compares this scalar with another, returning the ordering when both
    /// sides are comparable.
    ///
    /// Two nulls compare equal. NaN is unordered against everything.
    pub fn compare(self, other: ScalarRef<'_>) -> Option<Ordering> {
        use ScalarRef::*;
        match (self, other) {
            (Null, Null) => Some(Ordering::Equal),
            (Null, _) | (_, Null) => None,
            (Bool(lhs), Bool(rhs)) => Some(lhs.cmp(&rhs)),
            (Int(lhs), Int(rhs)) => Some(lhs.cmp(&rhs)),
            (Float(lhs), Float(rhs)) => lhs.partial_cmp(&rhs),
            (Double(lhs), Double(rhs)) => lhs.partial_cmp(&rhs),
            (Float(lhs), Double(rhs)) => f64::from(lhs).partial_cmp(&rhs),
            (Double(lhs), Float(rhs)) => lhs.partial_cmp(&f64::from(rhs)),
            (Int(lhs), Double(rhs)) => compare_int_double(lhs, rhs),
            (Int(lhs), Float(rhs)) => compare_int_double(lhs, f64::from(rhs)),
            (Double(lhs), Int(rhs)) => compare_int_double(rhs, lhs).map(Ordering::reverse),
            (Float(lhs), Int(rhs)) => {
                compare_int_double(rhs, f64::from(lhs)).map(Ordering::reverse)
            }
            (Timestamp(lhs), Timestamp(rhs)) => Some(lhs.cmp(&rhs)),
            (ObjectId(lhs), ObjectId(rhs)) => Some(lhs.cmp(&rhs)),
            (Uuid(lhs), Uuid(rhs)) => Some(lhs.cmp(&rhs)),
            (lhs, rhs) => match (lhs.as_text(), rhs.as_text()) {
                (Some(l), Some(r)) => Some(l.as_bytes().cmp(r.as_bytes())),
                _ => None,
            },
        }
    }

    /// Equality under [`compare`](Self::compare); incomparable pairs are unequal.
    #[must_use]
    pub fn equals(self, other: ScalarRef<'_>) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl<'a> From<&'a Scalar> for ScalarRef<'a> {
    fn from(value: &'a Scalar) -> Self {
        value.as_ref()
    }
}

impl<'a> From<&'a str> for ScalarRef<'a> {
    fn from(value: &'a str) -> Self {
        ScalarRef::String(value)
    }
}

impl<'a> From<&'a [u8]> for ScalarRef<'a> {
    fn from(value: &'a [u8]) -> Self {
        ScalarRef::Binary(value)
    }
}

impl From<i64> for ScalarRef<'_> {
    fn from(value: i64) -> Self {
        ScalarRef::Int(value)
    }
}

impl From<f64> for ScalarRef<'_> {
    fn from(value: f64) -> Self {
        ScalarRef::Double(value)
    }
}

impl From<bool> for ScalarRef<'_> {
    fn from(value: bool) -> Self {
        ScalarRef::Bool(value)
    }
}

/// Exact ordering between an integer and a double, without rounding the
/// integer through `f64`.
fn compare_int_double(int: i64, double: f64) -> Option<Ordering> {
    // 2^63 is exactly representable; every i64 lies in [-2^63, 2^63).
    const BOUND: f64 = 9_223_372_036_854_775_808.0;
    if double.is_nan() {
        return None;
    }
    if double >= BOUND {
        return Some(Ordering::Less);
    }
    if double < -BOUND {
        return Some(Ordering::Greater);
    }
    let whole = double.trunc();
    // In range, so the cast is exact.
    let whole_int = whole as i64;
    match int.cmp(&whole_int) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(double - whole)),
        other => Some(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_comparability_rules() {
        use ScalarKind::*;
        assert!(Null.comparable_with(Null));
        assert!(!Null.comparable_with(Int));
        assert!(Int.comparable_with(Double));
        assert!(Float.comparable_with(Int));
        assert!(String.comparable_with(Binary));
        assert!(!String.comparable_with(Int));
        assert!(!Bool.comparable_with(Int));
        assert!(!Timestamp.comparable_with(Int));
        assert!(ObjectId.comparable_with(ObjectId));
        assert!(!ObjectId.comparable_with(Uuid));
    }

    #[test]
    fn scalar_conversions_and_kinds() {
        assert_eq!(Scalar::from(true).kind(), ScalarKind::Bool);
        assert_eq!(Scalar::from(3_i64).kind(), ScalarKind::Int);
        assert_eq!(Scalar::from(1.5_f32).kind(), ScalarKind::Float);
        assert_eq!(Scalar::from(1.5_f64).kind(), ScalarKind::Double);
        assert_eq!(Scalar::from("hi").kind(), ScalarKind::String);
        assert_eq!(Scalar::from(vec![1_u8]).kind(), ScalarKind::Binary);
        assert_eq!(Scalar::from(None::<i64>), Scalar::Null);
        assert_eq!(Scalar::from(Some(4_i64)), Scalar::Int(4));
        assert!(Scalar::Null.is_null());
        assert_eq!(
            ScalarRef::from("hi").as_text(),
            Some(StrRef::from("hi"))
        );
        assert_eq!(ScalarRef::Int(1).as_text(), None);
    }

    #[test]
    fn compare_same_and_cross_kind() {
        assert_eq!(ScalarRef::Null.compare(ScalarRef::Null), Some(Ordering::Equal));
        assert_eq!(ScalarRef::Null.compare(ScalarRef::Int(0)), None);
        assert_eq!(ScalarRef::Int(2).compare(ScalarRef::Double(2.5)), Some(Ordering::Less));
        assert_eq!(
            ScalarRef::Double(2.0).compare(ScalarRef::Int(2)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            ScalarRef::Float(-1.5).compare(ScalarRef::Int(-1)),
            Some(Ordering::Less)
        );
        assert_eq!(
            ScalarRef::String("ab").compare(ScalarRef::Binary(b"ab")),
            Some(Ordering::Equal)
        );
        assert_eq!(
            ScalarRef::String("ab").compare(ScalarRef::String("b")),
            Some(Ordering::Less)
        );
        assert_eq!(ScalarRef::String("1").compare(ScalarRef::Int(1)), None);
        assert_eq!(ScalarRef::Bool(true).compare(ScalarRef::Int(1)), None);
        assert_eq!(
            ScalarRef::Timestamp(Timestamp::new(1, 5))
                .compare(ScalarRef::Timestamp(Timestamp::new(1, 7))),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn int_double_ordering_is_exact() {
        let big = i64::MAX;
        // i64::MAX rounds up to 2^63 as a double.
        assert_eq!(
            ScalarRef::Int(big).compare(ScalarRef::Double(big as f64)),
            Some(Ordering::Less)
        );
        assert_eq!(
            ScalarRef::Int(i64::MIN).compare(ScalarRef::Double(i64::MIN as f64)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            ScalarRef::Int(0).compare(ScalarRef::Double(f64::NEG_INFINITY)),
            Some(Ordering::Greater)
        );
        assert_eq!(ScalarRef::Int(0).compare(ScalarRef::Double(f64::NAN)), None);
        assert_eq!(
            ScalarRef::Int(-3).compare(ScalarRef::Double(-2.5)),
            Some(Ordering::Less)
        );
        assert_eq!(
            ScalarRef::Int(-2).compare(ScalarRef::Double(-2.5)),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn nan_is_never_equal() {
        assert!(!ScalarRef::Double(f64::NAN).equals(ScalarRef::Double(f64::NAN)));
        assert!(ScalarRef::Double(1.0).equals(ScalarRef::Float(1.0)));
    }
}
