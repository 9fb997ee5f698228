//! `CONTAINS`, `LIKE`, `BEGINSWITH`, `ENDSWITH` and their `[c]` variants.
//!
//! The left operand is the needle (or pattern), the right operand the
//! haystack. Binary values are matched as raw byte strings.

use crate::{
    case_fold::{self, CaseFolded, SkipTable},
    like,
    scalar::ScalarRef,
    text::StrRef,
};

pub(super) fn contains(needle: StrRef<'_>, haystack: StrRef<'_>) -> bool {
    haystack.contains(needle)
}

pub(super) fn contains_indexed(
    needle: StrRef<'_>,
    table: &SkipTable,
    haystack: StrRef<'_>,
) -> bool {
    if haystack.is_null() && !needle.is_null() {
        return false;
    }
    case_fold::contains_with_table(haystack.as_bytes(), needle.as_bytes(), table)
}

/// Guards shared by every `CONTAINS[c]` path. `Some` short-circuits.
fn contains_ins_guard(needle: StrRef<'_>, haystack: StrRef<'_>) -> Option<bool> {
    if haystack.is_null() && !needle.is_null() {
        return Some(false);
    }
    if needle.is_empty() {
        return Some(!haystack.is_null());
    }
    None
}

pub(super) fn contains_ins(needle: StrRef<'_>, haystack: StrRef<'_>) -> bool {
    contains_ins_guard(needle, haystack)
        .unwrap_or_else(|| contains_ins_folded(needle, &CaseFolded::new(needle), haystack))
}

pub(super) fn contains_ins_folded(
    needle: StrRef<'_>,
    folded: &CaseFolded,
    haystack: StrRef<'_>,
) -> bool {
    contains_ins_guard(needle, haystack).unwrap_or_else(|| {
        case_fold::search_case_fold(haystack.as_bytes(), folded.upper(), folded.lower()).is_some()
    })
}

pub(super) fn contains_ins_indexed(
    needle: StrRef<'_>,
    folded: &CaseFolded,
    table: &SkipTable,
    haystack: StrRef<'_>,
) -> bool {
    contains_ins_guard(needle, haystack).unwrap_or_else(|| {
        case_fold::contains_folded_with_table(haystack.as_bytes(), folded, table)
    })
}

pub(super) fn like(pattern: StrRef<'_>, haystack: StrRef<'_>) -> bool {
    haystack.like(pattern)
}

pub(super) fn like_ins(pattern: StrRef<'_>, haystack: StrRef<'_>) -> bool {
    if pattern.is_null() || haystack.is_null() {
        return pattern.is_null() && haystack.is_null();
    }
    like_ins_folded(pattern, &CaseFolded::new(pattern), haystack)
}

pub(super) fn like_ins_folded(
    pattern: StrRef<'_>,
    folded: &CaseFolded,
    haystack: StrRef<'_>,
) -> bool {
    if pattern.is_null() || haystack.is_null() {
        return pattern.is_null() && haystack.is_null();
    }
    like::matches_folded(haystack.as_bytes(), folded.upper(), folded.lower())
}

pub(super) fn begins_with(needle: StrRef<'_>, haystack: StrRef<'_>) -> bool {
    haystack.begins_with(needle)
}

pub(super) fn ends_with(needle: StrRef<'_>, haystack: StrRef<'_>) -> bool {
    haystack.ends_with(needle)
}

/// Which end of the haystack an affix condition inspects.
#[derive(Clone, Copy)]
pub(super) enum Affix {
    Prefix,
    Suffix,
}

pub(super) fn affix_ins(affix: Affix, needle: StrRef<'_>, haystack: StrRef<'_>) -> bool {
    if haystack.is_null() && !needle.is_null() {
        return false;
    }
    if needle.len() > haystack.len() {
        return false;
    }
    affix_ins_folded(affix, needle, &CaseFolded::new(needle), haystack)
}

pub(super) fn affix_ins_folded(
    affix: Affix,
    needle: StrRef<'_>,
    folded: &CaseFolded,
    haystack: StrRef<'_>,
) -> bool {
    if haystack.is_null() && !needle.is_null() {
        return false;
    }
    let len = folded.len();
    if len > haystack.len() {
        return false;
    }
    let window = match affix {
        Affix::Prefix => haystack.prefix(len),
        Affix::Suffix => haystack.suffix(len),
    };
    folded.matches(window)
}

/// String/string or binary/binary pairs; string/binary mixes do not match.
pub(super) fn text_pair<'a>(
    needle: ScalarRef<'a>,
    haystack: ScalarRef<'a>,
) -> Option<(StrRef<'a>, StrRef<'a>)> {
    match (needle, haystack) {
        (ScalarRef::String(n), ScalarRef::String(h)) => Some((StrRef::from(n), StrRef::from(h))),
        (ScalarRef::Binary(n), ScalarRef::Binary(h)) => Some((StrRef::new(n), StrRef::new(h))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> StrRef<'_> {
        StrRef::from(value)
    }

    #[test]
    fn contains_null_policy() {
        assert!(contains(s("ell"), s("hello")));
        assert!(!contains(s("ell"), StrRef::null()));
        assert!(contains(s(""), s("hello")));
        assert!(contains(StrRef::null(), s("hello")));

        assert!(contains_ins(s("ELL"), s("hello")));
        assert!(!contains_ins(s("ELL"), StrRef::null()));
        assert!(contains_ins(s(""), s("")));
        assert!(!contains_ins(s(""), StrRef::null()));
        assert!(!contains_ins(StrRef::null(), StrRef::null()));
        assert!(contains_ins(StrRef::null(), s("x")));
    }

    #[test]
    fn contains_fast_paths_agree_with_slow_path() {
        let needle = s("lLo");
        let folded = CaseFolded::new(needle);
        let table = SkipTable::for_folded(&folded);
        for haystack in ["hello", "HELLO world", "help", "", "llo", "LL"] {
            let haystack = s(haystack);
            let slow = contains_ins(needle, haystack);
            assert_eq!(contains_ins_folded(needle, &folded, haystack), slow);
            assert_eq!(contains_ins_indexed(needle, &folded, &table, haystack), slow);
        }

        let raw = s("llo");
        let table = SkipTable::for_needle(raw.as_bytes());
        assert!(contains_indexed(raw, &table, s("hello")));
        assert!(!contains_indexed(raw, &table, s("HELLO")));
        assert!(!contains_indexed(raw, &table, StrRef::null()));
        assert!(contains_indexed(s(""), &SkipTable::for_needle(b""), s("")));
    }

    #[test]
    fn like_null_policy() {
        assert!(like(s("h*o"), s("hello")));
        assert!(like(StrRef::null(), StrRef::null()));
        assert!(!like(s("*"), StrRef::null()));
        assert!(like_ins(s("H*O"), s("hello")));
        assert!(like_ins(StrRef::null(), StrRef::null()));
        assert!(!like_ins(StrRef::null(), s("x")));
    }

    #[test]
    fn affix_checks() {
        assert!(begins_with(s("he"), s("hello")));
        assert!(ends_with(s("lo"), s("hello")));
        assert!(!ends_with(s("lo"), s("he")));
        assert!(affix_ins(Affix::Prefix, s("HE"), s("hello")));
        assert!(affix_ins(Affix::Suffix, s("LO"), s("hello")));
        assert!(!affix_ins(Affix::Suffix, s("hello!"), s("hello")));
        assert!(!affix_ins(Affix::Prefix, s(""), StrRef::null()));
        assert!(affix_ins(Affix::Prefix, StrRef::null(), StrRef::null()));
    }

    #[test]
    fn text_pairs_reject_mixed_kinds() {
        assert!(text_pair(ScalarRef::String("a"), ScalarRef::String("b")).is_some());
        assert!(text_pair(ScalarRef::Binary(b"a"), ScalarRef::Binary(b"b")).is_some());
        assert!(text_pair(ScalarRef::String("a"), ScalarRef::Binary(b"a")).is_none());
        assert!(text_pair(ScalarRef::Null, ScalarRef::String("a")).is_none());
    }
}
