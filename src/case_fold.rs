//! Case folding primitives for the case-insensitive conditions.
//!
//! A needle is folded once into an upper and a lower form ([`CaseFolded`]).
//! Both forms have exactly the needle's byte length, which lets every
//! comparison proceed byte by byte: a haystack byte matches position `i` when
//! it equals either `upper[i]` or `lower[i]`.

use crate::text::StrRef;

/// Maps `source` to upper (`upper == true`) or lower case.
///
/// Only characters whose mapping is a single character with the same UTF-8
/// length are changed. Everything else, including invalid UTF-8, is copied
/// through untouched, so the output length always equals the input length.
#[must_use]
pub fn case_map(source: &[u8], upper: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(source.len());
    for chunk in source.utf8_chunks() {
        for ch in chunk.valid().chars() {
            push_mapped(&mut out, ch, upper);
        }
        out.extend_from_slice(chunk.invalid());
    }
    debug_assert_eq!(out.len(), source.len());
    out
}

fn push_mapped(out: &mut Vec<u8>, ch: char, upper: bool) {
    let mapped = single_mapping(ch, upper)
        .filter(|mapped| mapped.len_utf8() == ch.len_utf8())
        .unwrap_or(ch);
    let mut buf = [0u8; 4];
    out.extend_from_slice(mapped.encode_utf8(&mut buf).as_bytes());
}

fn single_mapping(ch: char, upper: bool) -> Option<char> {
    if upper {
        let mut it = ch.to_uppercase();
        let first = it.next()?;
        it.next().is_none().then_some(first)
    } else {
        let mut it = ch.to_lowercase();
        let first = it.next()?;
        it.next().is_none().then_some(first)
    }
}

/// Upper and lower case forms of a needle, computed once and reused across
/// many haystacks.
///
/// The cache is immutable; conditions only borrow it for the duration of a
/// single call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseFolded {
    upper: Box<[u8]>,
    lower: Box<[u8]>,
}

impl CaseFolded {
    /// Folds `needle`. A null needle folds to two empty forms.
    #[must_use]
    pub fn new(needle: StrRef<'_>) -> Self {
        Self::from_bytes(needle.as_bytes())
    }

    /// Folds raw bytes.
    #[must_use]
    pub fn from_bytes(needle: &[u8]) -> Self {
        Self {
            upper: case_map(needle, true).into_boxed_slice(),
            lower: case_map(needle, false).into_boxed_slice(),
        }
    }

    /// Upper case form.
    #[must_use]
    pub fn upper(&self) -> &[u8] {
        &self.upper
    }

    /// Lower case form.
    #[must_use]
    pub fn lower(&self) -> &[u8] {
        &self.lower
    }

    /// Byte length of the folded needle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.upper.len()
    }

    /// Returns true for an empty needle.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }

    /// Case-insensitive equality of `haystack` against the folded needle.
    ///
    /// `haystack` must have the folded needle's length.
    #[must_use]
    pub fn matches(&self, haystack: &[u8]) -> bool {
        equal_case_fold(haystack, &self.upper, &self.lower)
    }
}

/// Returns true when each byte of `haystack` equals the byte at the same
/// offset in either `upper` or `lower`.
///
/// All three slices must have the same length.
#[must_use]
pub fn equal_case_fold(haystack: &[u8], upper: &[u8], lower: &[u8]) -> bool {
    debug_assert_eq!(upper.len(), lower.len());
    debug_assert_eq!(haystack.len(), upper.len());
    haystack
        .iter()
        .zip(upper.iter().zip(lower))
        .all(|(&c, (&u, &l))| c == u || c == l)
}

/// Offset of the first case-insensitive occurrence of the folded needle.
#[must_use]
pub fn search_case_fold(haystack: &[u8], upper: &[u8], lower: &[u8]) -> Option<usize> {
    let needle_len = upper.len();
    if needle_len > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle_len)
        .find(|&start| equal_case_fold(&haystack[start..start + needle_len], upper, lower))
}

/// Bad-character skip distances for Boyer-Moore-Horspool search.
///
/// Entry `b` holds how far the window may advance when the byte aligned with
/// the needle's last position is `b`. Distances saturate at 255, which only
/// makes the search advance more cautiously for long needles.
#[derive(Clone, PartialEq, Eq)]
pub struct SkipTable {
    shifts: [u8; 256],
}

impl SkipTable {
    /// Builds a case-sensitive table for `needle`.
    #[must_use]
    pub fn for_needle(needle: &[u8]) -> Self {
        Self::build(needle.len(), &[needle])
    }

    /// Builds a case-insensitive table covering both folded forms.
    #[must_use]
    pub fn for_folded(folded: &CaseFolded) -> Self {
        Self::build(folded.len(), &[folded.upper(), folded.lower()])
    }

    fn build(needle_len: usize, forms: &[&[u8]]) -> Self {
        let mut shifts = [saturate(needle_len); 256];
        if let Some(last) = needle_len.checked_sub(1) {
            for i in 0..last {
                let shift = saturate(last - i);
                for form in forms {
                    let slot = &mut shifts[usize::from(form[i])];
                    *slot = (*slot).min(shift);
                }
            }
        }
        Self { shifts }
    }

    /// Shift distance for `byte`.
    #[must_use]
    pub fn shift(&self, byte: u8) -> usize {
        usize::from(self.shifts[usize::from(byte)])
    }
}

fn saturate(distance: usize) -> u8 {
    u8::try_from(distance).unwrap_or(u8::MAX).max(1)
}

impl std::fmt::Debug for SkipTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkipTable").finish_non_exhaustive()
    }
}

/// Case-sensitive Horspool search of `needle` in `haystack`.
#[must_use]
pub fn contains_with_table(haystack: &[u8], needle: &[u8], table: &SkipTable) -> bool {
    let Some(last) = needle.len().checked_sub(1) else {
        return true;
    };
    let last_byte = needle[last];
    let mut pos = last;
    while pos < haystack.len() {
        let byte = haystack[pos];
        if byte == last_byte && &haystack[pos - last..=pos] == needle {
            return true;
        }
        pos += table.shift(byte);
    }
    false
}

/// Case-insensitive Horspool search of a folded needle in `haystack`.
#[must_use]
pub fn contains_folded_with_table(
    haystack: &[u8],
    folded: &CaseFolded,
    table: &SkipTable,
) -> bool {
    let Some(last) = folded.len().checked_sub(1) else {
        return !haystack.is_empty();
    };
    let (upper, lower) = (folded.upper(), folded.lower());
    let (last_upper, last_lower) = (upper[last], lower[last]);
    let mut pos = last;
    while pos < haystack.len() {
        let byte = haystack[pos];
        if (byte == last_upper || byte == last_lower)
            && equal_case_fold(&haystack[pos - last..=pos], upper, lower)
        {
            return true;
        }
        pos += table.shift(byte);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_map_preserves_length() {
        assert_eq!(case_map(b"Hello", true), b"HELLO");
        assert_eq!(case_map(b"Hello", false), b"hello");
        assert_eq!(case_map("Ærø".as_bytes(), true), "ÆRØ".as_bytes());
        assert_eq!(case_map("Ærø".as_bytes(), false), "ærø".as_bytes());
        // 'ß' upper-cases to "SS", which would change the length.
        assert_eq!(case_map("ß".as_bytes(), true), "ß".as_bytes());
        // 'ı' (2 bytes) upper-cases to 'I' (1 byte).
        assert_eq!(case_map("ı".as_bytes(), true), "ı".as_bytes());
        let invalid = [b'a', 0xff, b'B'];
        assert_eq!(case_map(&invalid, true), vec![b'A', 0xff, b'B']);
    }

    #[test]
    fn folded_equality_is_bytewise() {
        let folded = CaseFolded::from_bytes(b"AbC");
        assert!(folded.matches(b"abc"));
        assert!(folded.matches(b"ABC"));
        assert!(folded.matches(b"aBc"));
        assert!(!folded.matches(b"abd"));
        assert_eq!(folded.len(), 3);
        assert!(CaseFolded::new(StrRef::null()).is_empty());
    }

    #[test]
    fn search_reports_first_offset() {
        let folded = CaseFolded::from_bytes(b"ELL");
        assert_eq!(
            search_case_fold(b"hello hELLo", folded.upper(), folded.lower()),
            Some(1)
        );
        assert_eq!(search_case_fold(b"he", folded.upper(), folded.lower()), None);
        assert_eq!(search_case_fold(b"", b"", b""), Some(0));
    }

    #[test]
    fn skip_table_distances() {
        let table = SkipTable::for_needle(b"abcb");
        assert_eq!(table.shift(b'a'), 3);
        assert_eq!(table.shift(b'b'), 2);
        assert_eq!(table.shift(b'c'), 1);
        assert_eq!(table.shift(b'z'), 4);

        let long = vec![b'x'; 600];
        let table = SkipTable::for_needle(&long);
        assert_eq!(table.shift(b'y'), 255);
        assert_eq!(table.shift(b'x'), 1);

        let empty = SkipTable::for_needle(b"");
        assert_eq!(empty.shift(b'a'), 1);
    }

    #[test]
    fn horspool_search_agrees_with_naive_search() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..2_000 {
            let haystack: Vec<u8> = (0..rng.usize(0..40)).map(|_| rng.u8(b'a'..=b'd')).collect();
            let needle: Vec<u8> = (0..rng.usize(1..5)).map(|_| rng.u8(b'a'..=b'd')).collect();
            let table = SkipTable::for_needle(&needle);
            let expected = crate::text::find(&haystack, &needle).is_some();
            assert_eq!(
                contains_with_table(&haystack, &needle, &table),
                expected,
                "haystack={haystack:?} needle={needle:?}"
            );
        }
    }

    #[test]
    fn folded_horspool_search_agrees_with_linear_search() {
        let mut rng = fastrand::Rng::with_seed(11);
        for _ in 0..2_000 {
            let haystack: Vec<u8> = (0..rng.usize(0..40))
                .map(|_| rng.choice(*b"abAB").unwrap_or(b'a'))
                .collect();
            let needle: Vec<u8> = (0..rng.usize(1..5))
                .map(|_| rng.choice(*b"abAB").unwrap_or(b'a'))
                .collect();
            let folded = CaseFolded::from_bytes(&needle);
            let table = SkipTable::for_folded(&folded);
            let expected = search_case_fold(&haystack, folded.upper(), folded.lower()).is_some();
            assert_eq!(
                contains_folded_with_table(&haystack, &folded, &table),
                expected,
                "haystack={haystack:?} needle={needle:?}"
            );
        }
    }

    #[test]
    fn empty_folded_needle_requires_non_empty_haystack() {
        let folded = CaseFolded::from_bytes(b"");
        let table = SkipTable::for_folded(&folded);
        assert!(contains_folded_with_table(b"x", &folded, &table));
        assert!(!contains_folded_with_table(b"", &folded, &table));
    }
}
