//! ASCII case-insensitive searching over raw bytes.
//!
//! User-Agent headers are not guaranteed to be UTF-8,
//! so everything in here works on `[u8]`. Only ASCII letters are folded,
//! any other byte has to match exactly.

/// Byte offset of the first match of `needle` in `haystack`,
/// starting the search at `from`.
fn find_at(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
        .map(|index| from + index)
}

/// Byte offset of the first occurrence of `sub` in `s`,
/// ignoring ASCII case.
///
/// An empty `sub` is found at offset `0`.
///
/// ```
/// use uasig_utils::str::contains_ignore_ascii_case;
///
/// assert_eq!(contains_ignore_ascii_case("Mozilla/5.0 (X11; Linux)", "linux"), Some(18));
/// assert_eq!(contains_ignore_ascii_case("Mozilla/5.0", "gecko"), None);
/// ```
pub fn contains_ignore_ascii_case(s: impl AsRef<[u8]>, sub: impl AsRef<[u8]>) -> Option<usize> {
    let sub = sub.as_ref();
    if sub.is_empty() {
        return Some(0);
    }
    find_at(s.as_ref(), sub, 0)
}

/// Whether `sub` occurs in `s`, ignoring ASCII case.
pub fn submatch_ignore_ascii_case(s: impl AsRef<[u8]>, sub: impl AsRef<[u8]>) -> bool {
    contains_ignore_ascii_case(s, sub).is_some()
}

/// Iterate over the byte offsets of all non-overlapping
/// occurrences of `sub` in `s`, ignoring ASCII case.
///
/// Unlike [`contains_ignore_ascii_case`] an empty `sub` matches nothing.
pub fn match_indices_ignore_ascii_case<'a>(
    s: &'a [u8],
    sub: &'a [u8],
) -> MatchIndicesIgnoreAsciiCase<'a> {
    MatchIndicesIgnoreAsciiCase {
        haystack: s,
        needle: sub,
        next: (!sub.is_empty()).then_some(0),
    }
}

/// Iterator returned by [`match_indices_ignore_ascii_case`].
#[derive(Debug, Clone)]
pub struct MatchIndicesIgnoreAsciiCase<'a> {
    haystack: &'a [u8],
    needle: &'a [u8],
    next: Option<usize>,
}

impl Iterator for MatchIndicesIgnoreAsciiCase<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let index = find_at(self.haystack, self.needle, self.next?);
        self.next = index.map(|index| index + self.needle.len());
        index
    }
}
