//! Wildcard matching for `LIKE` and `LIKE[c]`.
//!
//! `*` matches any run of bytes (including none) and `?` matches exactly one
//! UTF-8 encoded character. There is no escape syntax. Matching backtracks
//! only to the most recent `*`, which keeps it linear in practice.

/// Case-sensitive wildcard match of `text` against `pattern`.
#[must_use]
pub fn matches(text: &[u8], pattern: &[u8]) -> bool {
    match_with(text, pattern.len(), |idx| pattern[idx], |byte, idx| {
        byte == pattern[idx]
    })
}

/// Case-insensitive wildcard match against a pre-folded pattern.
///
/// `upper` and `lower` are the folded forms of the pattern and must share a
/// length. Wildcards are ASCII and therefore identical in both forms.
#[must_use]
pub fn matches_folded(text: &[u8], upper: &[u8], lower: &[u8]) -> bool {
    debug_assert_eq!(upper.len(), lower.len());
    match_with(text, lower.len(), |idx| lower[idx], |byte, idx| {
        byte == upper[idx] || byte == lower[idx]
    })
}

fn match_with(
    text: &[u8],
    pattern_len: usize,
    pattern_at: impl Fn(usize) -> u8,
    literal_eq: impl Fn(u8, usize) -> bool,
) -> bool {
    let mut t = 0;
    let mut p = 0;
    // Position after the most recent `*`, and the text offset it currently absorbs up to.
    let mut star: Option<(usize, usize)> = None;

    while t < text.len() {
        if p < pattern_len {
            match pattern_at(p) {
                b'*' => {
                    p += 1;
                    star = Some((p, t));
                    continue;
                }
                b'?' => {
                    t += char_width(text, t);
                    p += 1;
                    continue;
                }
                _ if literal_eq(text[t], p) => {
                    t += 1;
                    p += 1;
                    continue;
                }
                _ => {}
            }
        }
        match star {
            Some((resume, absorbed)) => {
                let next = absorbed + char_width(text, absorbed);
                star = Some((resume, next));
                p = resume;
                t = next;
            }
            None => return false,
        }
    }

    while p < pattern_len && pattern_at(p) == b'*' {
        p += 1;
    }
    p == pattern_len
}

/// Byte width of the UTF-8 character starting at `at`, stopping at the next
/// non-continuation byte so malformed input still advances.
fn char_width(text: &[u8], at: usize) -> usize {
    let mut width = 1;
    while at + width < text.len() && text[at + width] & 0xC0 == 0x80 {
        width += 1;
    }
    width
}
