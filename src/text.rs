//! Nullable, length-delimited byte strings.
//!
//! String and binary column slots are both viewed through [`StrRef`]: a
//! borrowed byte slice plus an explicit null marker. A null view and an empty
//! view are distinct values; they compare unequal and behave differently
//! under the pattern-matching conditions.

use std::fmt;

use crate::like;

/// Borrowed view over a nullable string or binary value.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StrRef<'a> {
    bytes: Option<&'a [u8]>,
}

impl<'a> StrRef<'a> {
    /// Returns the null view.
    #[must_use]
    pub const fn null() -> Self {
        Self { bytes: None }
    }

    /// Wraps a non-null byte slice.
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes: Some(bytes) }
    }

    /// Wraps an optional byte slice, mapping `None` to null.
    #[must_use]
    pub const fn from_option(bytes: Option<&'a [u8]>) -> Self {
        Self { bytes }
    }

    /// Returns true when the view is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.bytes.is_none()
    }

    /// Byte length; null views have length zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns true when the view holds no bytes (null or empty).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Underlying bytes; null views yield an empty slice.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes.unwrap_or_default()
    }

    /// Underlying bytes, or `None` for the null view.
    #[must_use]
    pub fn as_option(&self) -> Option<&'a [u8]> {
        self.bytes
    }

    /// First `n` bytes. `n` must not exceed [`len`](Self::len).
    #[must_use]
    pub fn prefix(&self, n: usize) -> &'a [u8] {
        &self.as_bytes()[..n]
    }

    /// Last `n` bytes. `n` must not exceed [`len`](Self::len).
    #[must_use]
    pub fn suffix(&self, n: usize) -> &'a [u8] {
        let bytes = self.as_bytes();
        &bytes[bytes.len() - n..]
    }

    /// Does this view contain `needle` as a contiguous run?
    ///
    /// A null view never contains a non-null needle; an empty needle is
    /// contained everywhere else.
    #[must_use]
    pub fn contains(&self, needle: StrRef<'_>) -> bool {
        if self.is_null() && !needle.is_null() {
            return false;
        }
        needle.is_empty() || find(self.as_bytes(), needle.as_bytes()).is_some()
    }

    /// Does this view start with `needle`?
    #[must_use]
    pub fn begins_with(&self, needle: StrRef<'_>) -> bool {
        if self.is_null() && !needle.is_null() {
            return false;
        }
        self.as_bytes().starts_with(needle.as_bytes())
    }

    /// Does this view end with `needle`?
    #[must_use]
    pub fn ends_with(&self, needle: StrRef<'_>) -> bool {
        if self.is_null() && !needle.is_null() {
            return false;
        }
        self.as_bytes().ends_with(needle.as_bytes())
    }

    /// Wildcard match of this view against `pattern`.
    ///
    /// Null only matches null.
    #[must_use]
    pub fn like(&self, pattern: StrRef<'_>) -> bool {
        match (self.bytes, pattern.bytes) {
            (Some(text), Some(pattern)) => like::matches(text, pattern),
            (text, pattern) => text.is_none() && pattern.is_none(),
        }
    }
}

/// Naive forward search; returns the offset of the first occurrence.
pub(crate) fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    let first = needle[0];
    (0..=haystack.len() - needle.len()).find(|&start| {
        haystack[start] == first && &haystack[start..start + needle.len()] == needle
    })
}

impl<'a> From<&'a str> for StrRef<'a> {
    fn from(value: &'a str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for StrRef<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::new(value)
    }
}

impl<'a> From<Option<&'a str>> for StrRef<'a> {
    fn from(value: Option<&'a str>) -> Self {
        Self::from_option(value.map(str::as_bytes))
    }
}

impl fmt::Debug for StrRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bytes {
            None => f.write_str("null"),
            Some(bytes) => write!(f, "{:?}", String::from_utf8_lossy(bytes)),
        }
    }
}
