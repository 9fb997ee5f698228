//! Range pruning for the numeric conditions.
//!
//! Given the inclusive bounds of a chunk's present values and a constant,
//! [`Condition::can_match`] and [`Condition::will_match`] decide whether the
//! chunk can be skipped or accepted without looking at individual elements.
//! The element is always the left operand and the constant the right one, so
//! `Greater` asks whether elements are greater than the constant.
//!
//! Both predicates are conservative: a `true` from `can_match` or a `false`
//! from `will_match` only means "check element-wise".

mod config;

use std::fmt;

pub use config::PruningConfig;

use crate::{
    condition::{misuse, Condition, Operands},
    logging::conditions_log,
};

/// Numeric domain accepted by the range pruning predicates.
pub trait RangeValue: Copy + PartialOrd + fmt::Debug {
    /// Additive identity of the domain.
    const ZERO: Self;

    /// Builds the direct-comparison operands for `(self, other)`.
    fn operands(self, other: Self) -> Operands<'static>;
}

impl RangeValue for i32 {
    const ZERO: Self = 0;

    fn operands(self, other: Self) -> Operands<'static> {
        Operands::Int(i64::from(self), i64::from(other))
    }
}

impl RangeValue for i64 {
    const ZERO: Self = 0;

    fn operands(self, other: Self) -> Operands<'static> {
        Operands::Int(self, other)
    }
}

impl RangeValue for f32 {
    const ZERO: Self = 0.0;

    fn operands(self, other: Self) -> Operands<'static> {
        Operands::Float(self, other)
    }
}

impl RangeValue for f64 {
    const ZERO: Self = 0.0;

    fn operands(self, other: Self) -> Operands<'static> {
        Operands::Double(self, other)
    }
}

fn degenerate_zero<T: RangeValue>(value: T, lower: T, upper: T) -> bool {
    value == T::ZERO && lower == T::ZERO && upper == T::ZERO
}

impl Condition {
    /// True for the conditions with range pruning rules.
    #[must_use]
    pub const fn supports_range_pruning(self) -> bool {
        matches!(
            self,
            Condition::Equal
                | Condition::NotEqual
                | Condition::Greater
                | Condition::Less
                | Condition::NotNull
                | Condition::None
        )
    }

    /// Returns false only when no element in `[lower, upper]` can satisfy
    /// the condition against `value`.
    ///
    /// # Panics
    ///
    /// Panics for conditions without range pruning rules.
    #[must_use]
    pub fn can_match<T: RangeValue>(self, value: T, lower: T, upper: T) -> bool {
        match self {
            Condition::Equal => lower <= value && value <= upper,
            Condition::NotEqual => !degenerate_zero(value, lower, upper),
            Condition::Greater => upper > value,
            Condition::Less => lower < value,
            Condition::NotNull | Condition::None => true,
            other => misuse(other, "range"),
        }
    }

    /// Returns true only when every element in `[lower, upper]` satisfies the
    /// condition against `value`.
    ///
    /// # Panics
    ///
    /// Panics for conditions without range pruning rules.
    #[must_use]
    pub fn will_match<T: RangeValue>(self, value: T, lower: T, upper: T) -> bool {
        match self {
            Condition::Equal => degenerate_zero(value, lower, upper),
            Condition::NotEqual => value > upper || value < lower,
            Condition::Greater => lower > value,
            Condition::Less => upper < value,
            Condition::NotNull | Condition::None => true,
            other => misuse(other, "range"),
        }
    }
}

fn is_unordered<T: RangeValue>(value: T) -> bool {
    value.partial_cmp(&value).is_none()
}

/// Inclusive bounds of the present values in a chunk.
///
/// A chunk holding a value that is unordered against itself (NaN) has no
/// usable bounds: such bounds are kept but never pruned on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChunkBounds<T> {
    /// Smallest ordered present value.
    pub lower: T,
    /// Largest ordered present value.
    pub upper: T,
    unordered: bool,
}

impl<T: RangeValue> ChunkBounds<T> {
    /// Creates bounds; `lower <= upper` is the caller's responsibility.
    ///
    /// A NaN bound marks the chunk as unordered.
    pub fn new(lower: T, upper: T) -> Self {
        debug_assert!(
            !(lower > upper),
            "inverted chunk bounds {lower:?}..={upper:?}"
        );
        Self {
            lower,
            upper,
            unordered: is_unordered(lower) || is_unordered(upper),
        }
    }

    /// Bounds of a chunk that holds values outside any order, such as NaN.
    pub fn unordered(lower: T, upper: T) -> Self {
        Self {
            lower,
            upper,
            unordered: true,
        }
    }

    /// Tightest bounds covering the present values, `None` when there are none.
    ///
    /// NaN values are left out of `lower`/`upper` and mark the bounds as
    /// unordered.
    pub fn of_values<'a, I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Option<T>>,
        T: 'a,
    {
        let mut ordered: Option<(T, T)> = None;
        let mut first_unordered = None;
        for &value in values.into_iter().flatten() {
            if is_unordered(value) {
                first_unordered.get_or_insert(value);
                continue;
            }
            ordered = Some(match ordered {
                None => (value, value),
                Some((lower, upper)) => (
                    if value < lower { value } else { lower },
                    if value > upper { value } else { upper },
                ),
            });
        }
        match (ordered, first_unordered) {
            (Some((lower, upper)), None) => Some(Self::new(lower, upper)),
            (Some((lower, upper)), Some(_)) => Some(Self::unordered(lower, upper)),
            (None, Some(nan)) => Some(Self::unordered(nan, nan)),
            (None, None) => None,
        }
    }

    /// Returns false when pruning on these bounds would be unsound.
    pub fn is_ordered(&self) -> bool {
        !self.unordered
    }

    /// Returns true when `value` lies within the bounds.
    pub fn contains(&self, value: T) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Outcome of classifying a chunk against a condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChunkVerdict {
    /// No present value can match.
    Skip,
    /// Every present value matches.
    AcceptAll,
    /// Evaluate element by element.
    Check,
}

/// Classifies chunks from their bounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChunkPruner {
    config: PruningConfig,
}

impl ChunkPruner {
    /// Creates a pruner with the given configuration.
    #[must_use]
    pub fn new(config: PruningConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> PruningConfig {
        self.config
    }

    /// Decides how a chunk with `bounds` is scanned for `condition` against
    /// `value`.
    ///
    /// Conditions without range pruning rules and unordered bounds are always
    /// [`ChunkVerdict::Check`].
    pub fn classify<T: RangeValue>(
        &self,
        condition: Condition,
        value: T,
        bounds: &ChunkBounds<T>,
    ) -> ChunkVerdict {
        let prunable = self.config.enabled
            && condition.supports_range_pruning()
            && bounds.is_ordered();
        let verdict = if !prunable {
            ChunkVerdict::Check
        } else if !condition.can_match(value, bounds.lower, bounds.upper) {
            ChunkVerdict::Skip
        } else if self.config.accept_whole_chunks
            && condition.will_match(value, bounds.lower, bounds.upper)
        {
            ChunkVerdict::AcceptAll
        } else {
            ChunkVerdict::Check
        };
        conditions_log!(
            log::Level::Trace,
            "chunk_verdict",
            "condition={} value={:?} lower={:?} upper={:?} verdict={:?}",
            condition,
            value,
            bounds.lower,
            bounds.upper,
            verdict
        );
        verdict
    }
}
