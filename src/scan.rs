//! Column scans built on the condition catalog.
//!
//! These are the two consumers the catalog is written for: a chunk evaluator
//! that consults [`ChunkPruner`] before touching elements, and a tagged
//! column-versus-constant evaluator. Both report matches as a [`RowSet`].

use roaring::RoaringBitmap;

use crate::{
    condition::Condition,
    logging::conditions_log,
    pruning::{ChunkBounds, ChunkPruner, ChunkVerdict, RangeValue},
    scalar::ScalarRef,
};

/// Position of a row within a chunk.
pub type RowId = u32;

/// Borrowed iterator that yields [`RowId`] values.
pub type RowIdIter<'a> = Box<dyn Iterator<Item = RowId> + Send + 'a>;

/// Set of matching row identifiers.
pub trait RowSet: Send + Sync {
    /// Returns the number of rows tracked by the set.
    fn len(&self) -> usize;

    /// Returns true when the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over row identifiers in ascending order.
    fn iter(&self) -> RowIdIter<'_>;
}

/// [`RowSet`] backed by a roaring bitmap.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BitmapRowSet {
    bitmap: RoaringBitmap,
}

impl BitmapRowSet {
    /// Creates an empty row set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a row identifier.
    pub fn insert(&mut self, row: RowId) {
        self.bitmap.insert(row);
    }

    /// Returns true when the set contains `row`.
    #[must_use]
    pub fn contains(&self, row: RowId) -> bool {
        self.bitmap.contains(row)
    }

    /// Row identifiers as a vector, mostly for assertions.
    #[must_use]
    pub fn to_vec(&self) -> Vec<RowId> {
        self.bitmap.iter().collect()
    }
}

impl FromIterator<RowId> for BitmapRowSet {
    fn from_iter<I: IntoIterator<Item = RowId>>(rows: I) -> Self {
        Self {
            bitmap: rows.into_iter().collect(),
        }
    }
}

impl RowSet for BitmapRowSet {
    fn len(&self) -> usize {
        usize::try_from(self.bitmap.len()).unwrap_or(usize::MAX)
    }

    fn iter(&self) -> RowIdIter<'_> {
        Box::new(self.bitmap.iter())
    }
}

fn rows<T>(values: &[T]) -> impl Iterator<Item = (RowId, &T)> {
    assert!(
        RowId::try_from(values.len()).is_ok(),
        "chunk of {} rows exceeds the row id space",
        values.len()
    );
    (0..).zip(values)
}

/// Rows of a numeric chunk whose element satisfies `condition` against
/// `value`, with the element as the left operand.
///
/// `bounds` describe the present (non-null) elements only; null elements are
/// always evaluated with their null flag, whatever the verdict. Bounds of a
/// chunk holding NaN are unordered and every element is checked.
///
/// # Panics
///
/// Panics when `condition` has no definition for numeric operands, or when
/// the chunk holds more rows than [`RowId`] can address.
pub fn evaluate_chunk<T: RangeValue>(
    pruner: &ChunkPruner,
    condition: Condition,
    value: T,
    bounds: &ChunkBounds<T>,
    values: &[Option<T>],
) -> BitmapRowSet {
    let verdict = pruner.classify(condition, value, bounds);
    let mut matches = BitmapRowSet::new();
    let mut evaluated = 0_usize;
    for (row, element) in rows(values) {
        let hit = match (element, verdict) {
            (Some(_), ChunkVerdict::Skip) => false,
            (Some(_), ChunkVerdict::AcceptAll) => true,
            (Some(element), ChunkVerdict::Check) => {
                evaluated += 1;
                condition.compare(element.operands(value), false, false)
            }
            (None, _) => {
                evaluated += 1;
                condition.compare(T::ZERO.operands(value), true, false)
            }
        };
        if hit {
            matches.insert(row);
        }
    }
    conditions_log!(
        log::Level::Debug,
        "chunk_evaluated",
        "condition={} rows={} evaluated={} matched={}",
        condition,
        values.len(),
        evaluated,
        matches.len()
    );
    matches
}

/// Rows of a tagged column whose element satisfies `condition` against
/// `constant`.
///
/// The element is the left operand, except for the pattern family where the
/// constant is the needle and each element the haystack.
///
/// # Panics
///
/// Panics when the column holds more rows than [`RowId`] can address.
pub fn evaluate_scalars(
    condition: Condition,
    column: &[ScalarRef<'_>],
    constant: ScalarRef<'_>,
) -> BitmapRowSet {
    let constant_is_needle = is_pattern(condition);
    rows(column)
        .filter(|&(_, &element)| {
            if constant_is_needle {
                condition.compare_scalars(constant, element)
            } else {
                condition.compare_scalars(element, constant)
            }
        })
        .map(|(row, _)| row)
        .collect()
}

fn is_pattern(condition: Condition) -> bool {
    matches!(
        condition.case_sensitive(),
        Condition::Contains | Condition::Like | Condition::BeginsWith | Condition::EndsWith
    )
}
