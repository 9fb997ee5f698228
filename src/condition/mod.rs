//! The condition catalog.
//!
//! A [`Condition`] is a stateless comparison or matching rule. Each one has a
//! stable numeric code used when serializing query expressions and a symbol
//! used in human-readable query descriptions. Evaluation comes in several
//! entry points:
//!
//! * [`Condition::compare`] takes a typed operand pair plus null flags and is
//!   the slow path for the case-insensitive conditions (the needle is folded
//!   on every call).
//! * [`Condition::compare_scalars`] takes two tagged scalars of any kind.
//! * [`Condition::compare_folded`] takes a caller-owned [`CaseFolded`] needle
//!   so folding happens once per batch instead of once per row.
//! * [`Condition::contains_indexed`] and [`Condition::contains_folded_indexed`]
//!   add a precomputed [`SkipTable`] for substring search.
//!
//! Range pruning lives in [`crate::pruning`].
//!
//! Handing a condition an operand kind it has no definition for is a bug in
//! the caller's type checking, not a data condition: it panics.

mod equality;
mod operands;
mod order;
mod pattern;
mod structural;

use std::{fmt, str::FromStr};

pub use operands::Operands;
use pattern::Affix;

use crate::{
    case_fold::{CaseFolded, SkipTable},
    error::ConditionError,
    logging::conditions_log,
    scalar::ScalarRef,
    text::StrRef,
};

/// Vector comparison mode matching an order or equality condition.
///
/// Only a hint for vectorized scanners; scalar evaluation never consults it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VectorCompare {
    /// Ordered equal.
    Eq,
    /// Ordered not-equal.
    Neq,
    /// Ordered greater-than.
    Gt,
    /// Ordered greater-or-equal.
    Ge,
    /// Ordered less-than.
    Lt,
    /// Ordered less-or-equal.
    Le,
}

impl VectorCompare {
    /// Immediate for AVX `_mm256_cmp_pd`/`_mm256_cmp_ps`.
    #[must_use]
    pub fn avx_predicate(self) -> i32 {
        match self {
            VectorCompare::Eq => 0x00,  // _CMP_EQ_OQ
            VectorCompare::Neq => 0x0C, // _CMP_NEQ_OQ
            VectorCompare::Gt => 0x1E,  // _CMP_GT_OQ
            VectorCompare::Ge => 0x1D,  // _CMP_GE_OQ
            VectorCompare::Lt => 0x11,  // _CMP_LT_OQ
            VectorCompare::Le => 0x12,  // _CMP_LE_OQ
        }
    }
}

/// Comparison and matching rules applied during scans.
///
/// For the pattern family the left operand is the needle and the right
/// operand the haystack: `Contains(left, right)` asks whether `right`
/// contains `left`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `==[c]`, case-insensitive equality.
    EqualIns,
    /// `!=[c]`, negation of [`Condition::EqualIns`].
    NotEqualIns,
    /// `CONTAINS`
    Contains,
    /// `CONTAINS[c]`
    ContainsIns,
    /// `LIKE` with `*` and `?` wildcards.
    Like,
    /// `LIKE[c]`
    LikeIns,
    /// `BEGINSWITH`
    BeginsWith,
    /// `BEGINSWITH[c]`
    BeginsWithIns,
    /// `ENDSWITH`
    EndsWith,
    /// `ENDSWITH[c]`
    EndsWithIns,
    /// `!= NULL`: the left operand is present.
    NotNull,
    /// Always true.
    None,
}

impl Condition {
    /// Every condition, in code order.
    pub const ALL: [Condition; 18] = [
        Condition::Equal,
        Condition::NotEqual,
        Condition::Greater,
        Condition::Less,
        Condition::None,
        Condition::NotNull,
        Condition::GreaterEqual,
        Condition::LessEqual,
        Condition::EqualIns,
        Condition::NotEqualIns,
        Condition::Contains,
        Condition::ContainsIns,
        Condition::Like,
        Condition::LikeIns,
        Condition::BeginsWith,
        Condition::BeginsWithIns,
        Condition::EndsWith,
        Condition::EndsWithIns,
    ];

    /// Stable serialization code.
    ///
    /// Codes below 4 belong to the conditions with vectorized leaf finders;
    /// 4 is reserved.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Condition::Equal => 0,
            Condition::NotEqual => 1,
            Condition::Greater => 2,
            Condition::Less => 3,
            Condition::None => 5,
            Condition::NotNull => 6,
            Condition::GreaterEqual => 7,
            Condition::LessEqual => 8,
            Condition::EqualIns => 9,
            Condition::NotEqualIns => 10,
            Condition::Contains => 11,
            Condition::ContainsIns => 12,
            Condition::Like => 13,
            Condition::LikeIns => 14,
            Condition::BeginsWith => 15,
            Condition::BeginsWithIns => 16,
            Condition::EndsWith => 17,
            Condition::EndsWithIns => 18,
        }
    }

    /// Decodes a serialization code.
    pub fn from_code(code: u8) -> Result<Self, ConditionError> {
        Self::ALL
            .into_iter()
            .find(|condition| condition.code() == code)
            .ok_or(ConditionError::UnknownCode(code))
    }

    /// True for conditions the leaf finders evaluate natively.
    #[must_use]
    pub const fn has_leaf_finder(self) -> bool {
        matches!(
            self,
            Condition::Equal
                | Condition::NotEqual
                | Condition::Greater
                | Condition::Less
                | Condition::None
                | Condition::NotNull
        )
    }

    /// Canonical operator symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Condition::Equal => "==",
            Condition::NotEqual => "!=",
            Condition::Greater => ">",
            Condition::GreaterEqual => ">=",
            Condition::Less => "<",
            Condition::LessEqual => "<=",
            Condition::EqualIns => "==[c]",
            Condition::NotEqualIns => "!=[c]",
            Condition::Contains => "CONTAINS",
            Condition::ContainsIns => "CONTAINS[c]",
            Condition::Like => "LIKE",
            Condition::LikeIns => "LIKE[c]",
            Condition::BeginsWith => "BEGINSWITH",
            Condition::BeginsWithIns => "BEGINSWITH[c]",
            Condition::EndsWith => "ENDSWITH",
            Condition::EndsWithIns => "ENDSWITH[c]",
            Condition::NotNull => "!= NULL",
            Condition::None => "none",
        }
    }

    /// True for the `[c]` conditions.
    #[must_use]
    pub const fn is_case_insensitive(self) -> bool {
        matches!(
            self,
            Condition::EqualIns
                | Condition::NotEqualIns
                | Condition::ContainsIns
                | Condition::LikeIns
                | Condition::BeginsWithIns
                | Condition::EndsWithIns
        )
    }

    /// The `[c]` counterpart, if one exists.
    #[must_use]
    pub const fn case_insensitive(self) -> Option<Self> {
        match self {
            Condition::Equal | Condition::EqualIns => Some(Condition::EqualIns),
            Condition::NotEqual | Condition::NotEqualIns => Some(Condition::NotEqualIns),
            Condition::Contains | Condition::ContainsIns => Some(Condition::ContainsIns),
            Condition::Like | Condition::LikeIns => Some(Condition::LikeIns),
            Condition::BeginsWith | Condition::BeginsWithIns => Some(Condition::BeginsWithIns),
            Condition::EndsWith | Condition::EndsWithIns => Some(Condition::EndsWithIns),
            _ => Option::None,
        }
    }

    /// The case-sensitive counterpart of a `[c]` condition; identity otherwise.
    #[must_use]
    pub const fn case_sensitive(self) -> Self {
        match self {
            Condition::EqualIns => Condition::Equal,
            Condition::NotEqualIns => Condition::NotEqual,
            Condition::ContainsIns => Condition::Contains,
            Condition::LikeIns => Condition::Like,
            Condition::BeginsWithIns => Condition::BeginsWith,
            Condition::EndsWithIns => Condition::EndsWith,
            other => other,
        }
    }

    /// The condition whose result is the exact complement of this one, for
    /// the pairs where the null policies make that hold.
    #[must_use]
    pub const fn negated(self) -> Option<Self> {
        match self {
            Condition::Equal => Some(Condition::NotEqual),
            Condition::NotEqual => Some(Condition::Equal),
            Condition::EqualIns => Some(Condition::NotEqualIns),
            Condition::NotEqualIns => Some(Condition::EqualIns),
            _ => Option::None,
        }
    }

    /// The condition to use when the operands are swapped.
    #[must_use]
    pub const fn flipped(self) -> Option<Self> {
        match self {
            Condition::Equal
            | Condition::NotEqual
            | Condition::EqualIns
            | Condition::NotEqualIns
            | Condition::None => Some(self),
            Condition::Greater => Some(Condition::Less),
            Condition::Less => Some(Condition::Greater),
            Condition::GreaterEqual => Some(Condition::LessEqual),
            Condition::LessEqual => Some(Condition::GreaterEqual),
            _ => Option::None,
        }
    }

    /// Vector comparison mode for the equality and order conditions.
    #[must_use]
    pub const fn vector_compare(self) -> Option<VectorCompare> {
        match self {
            Condition::Equal => Some(VectorCompare::Eq),
            Condition::NotEqual => Some(VectorCompare::Neq),
            Condition::Greater => Some(VectorCompare::Gt),
            Condition::GreaterEqual => Some(VectorCompare::Ge),
            Condition::Less => Some(VectorCompare::Lt),
            Condition::LessEqual => Some(VectorCompare::Le),
            _ => Option::None,
        }
    }

    /// Direct comparison of a typed operand pair.
    ///
    /// For string and binary operands a null view and a set null flag both
    /// mean null. Case-insensitive conditions fold the needle on every call;
    /// batch callers should prefer [`compare_folded`](Self::compare_folded).
    ///
    /// # Panics
    ///
    /// Panics when the condition has no definition for the operand kind, for
    /// example ordering two strings or substring-matching two integers.
    #[must_use]
    pub fn compare(self, operands: Operands<'_>, left_null: bool, right_null: bool) -> bool {
        let (operands, left_null, right_null) = operands.resolve_nulls(left_null, right_null);
        match self {
            Condition::Equal => equality::equal(&operands, left_null, right_null),
            Condition::NotEqual => equality::not_equal(&operands, left_null, right_null),
            Condition::Greater
            | Condition::GreaterEqual
            | Condition::Less
            | Condition::LessEqual => order::compare(self, &operands, left_null, right_null),
            Condition::NotNull => structural::not_null(left_null),
            Condition::None => structural::none(),
            _ => {
                let Some((needle, haystack)) = operands.text() else {
                    misuse(self, operands.kind_name());
                };
                self.compare_text(needle, haystack)
            }
        }
    }

    fn compare_text(self, needle: StrRef<'_>, haystack: StrRef<'_>) -> bool {
        match self {
            Condition::EqualIns => equality::equal_ins(needle, haystack),
            Condition::NotEqualIns => !equality::equal_ins(needle, haystack),
            Condition::Contains => pattern::contains(needle, haystack),
            Condition::ContainsIns => pattern::contains_ins(needle, haystack),
            Condition::Like => pattern::like(needle, haystack),
            Condition::LikeIns => pattern::like_ins(needle, haystack),
            Condition::BeginsWith => pattern::begins_with(needle, haystack),
            Condition::BeginsWithIns => pattern::affix_ins(Affix::Prefix, needle, haystack),
            Condition::EndsWith => pattern::ends_with(needle, haystack),
            Condition::EndsWithIns => pattern::affix_ins(Affix::Suffix, needle, haystack),
            other => misuse(other, "text"),
        }
    }

    /// Tagged-scalar comparison.
    ///
    /// Never panics: kinds the condition cannot relate simply yield `false`
    /// (or the condition's null policy where one applies).
    #[must_use]
    pub fn compare_scalars(self, left: ScalarRef<'_>, right: ScalarRef<'_>) -> bool {
        match self {
            Condition::Equal => equality::equal_scalars(left, right),
            Condition::NotEqual => !equality::equal_scalars(left, right),
            Condition::EqualIns => equality::equal_ins_scalars(left, right),
            Condition::NotEqualIns => !equality::equal_ins_scalars(left, right),
            Condition::Greater
            | Condition::GreaterEqual
            | Condition::Less
            | Condition::LessEqual => order::compare_scalars(self, left, right),
            Condition::Contains | Condition::ContainsIns if left.is_null() => !right.is_null(),
            Condition::Like | Condition::LikeIns if left.is_null() && right.is_null() => true,
            Condition::NotNull => structural::not_null_scalar(left),
            Condition::None => structural::none(),
            _ => pattern::text_pair(left, right)
                .is_some_and(|(needle, haystack)| self.compare_text(needle, haystack)),
        }
    }

    /// Comparison with a caller-owned case-folded needle.
    ///
    /// `folded` must be [`CaseFolded::new`] of `needle`. The case-sensitive
    /// string conditions are accepted too and ignore `folded`.
    ///
    /// # Panics
    ///
    /// Panics for the order and structural conditions.
    #[must_use]
    pub fn compare_folded(
        self,
        needle: StrRef<'_>,
        folded: &CaseFolded,
        haystack: StrRef<'_>,
    ) -> bool {
        debug_assert_eq!(folded.len(), needle.len(), "folded needle does not match");
        match self {
            Condition::Equal => needle == haystack,
            Condition::NotEqual => needle != haystack,
            Condition::EqualIns => equality::equal_ins_folded(needle, folded, haystack),
            Condition::NotEqualIns => !equality::equal_ins_folded(needle, folded, haystack),
            Condition::ContainsIns => pattern::contains_ins_folded(needle, folded, haystack),
            Condition::LikeIns => pattern::like_ins_folded(needle, folded, haystack),
            Condition::BeginsWithIns => {
                pattern::affix_ins_folded(Affix::Prefix, needle, folded, haystack)
            }
            Condition::EndsWithIns => {
                pattern::affix_ins_folded(Affix::Suffix, needle, folded, haystack)
            }
            Condition::Contains
            | Condition::Like
            | Condition::BeginsWith
            | Condition::EndsWith => self.compare_text(needle, haystack),
            other => misuse(other, "case-folded string"),
        }
    }

    /// `CONTAINS` with a precomputed skip table for `needle`.
    ///
    /// # Panics
    ///
    /// Panics for any condition other than [`Condition::Contains`].
    #[must_use]
    pub fn contains_indexed(
        self,
        needle: StrRef<'_>,
        table: &SkipTable,
        haystack: StrRef<'_>,
    ) -> bool {
        match self {
            Condition::Contains => pattern::contains_indexed(needle, table, haystack),
            other => misuse(other, "skip-table string"),
        }
    }

    /// `CONTAINS[c]` with a case-folded needle and its skip table.
    ///
    /// # Panics
    ///
    /// Panics for any condition other than [`Condition::ContainsIns`].
    #[must_use]
    pub fn contains_folded_indexed(
        self,
        needle: StrRef<'_>,
        folded: &CaseFolded,
        table: &SkipTable,
        haystack: StrRef<'_>,
    ) -> bool {
        match self {
            Condition::ContainsIns => {
                pattern::contains_ins_indexed(needle, folded, table, haystack)
            }
            other => misuse(other, "skip-table case-folded string"),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Condition {
    type Err = ConditionError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|condition| condition.symbol() == symbol)
            .ok_or_else(|| ConditionError::UnknownSymbol(symbol.to_owned()))
    }
}

impl TryFrom<u8> for Condition {
    type Error = ConditionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

/// Reports a condition invoked outside its operand domain and aborts the
/// evaluation.
#[cold]
#[track_caller]
pub(crate) fn misuse(condition: Condition, operands: &str) -> ! {
    conditions_log!(
        log::Level::Error,
        "condition_misuse",
        "condition={} operands={}",
        condition.symbol(),
        operands
    );
    panic!(
        "condition `{}` does not accept {} operands",
        condition.symbol(),
        operands
    );
}
