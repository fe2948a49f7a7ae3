//! Character-offset helpers.
//!
//! Entity spans address the rendered text by Unicode scalar values, not
//! bytes. Every span comparison in the workspace goes through these helpers
//! so accented header and label text cannot desynchronize offsets.

/// Number of characters in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Slice `text` by character offsets, half-open.
///
/// Returns `None` when the range is reversed or extends past the end of the
/// text.
pub fn slice_chars(text: &str, start: usize, end: usize) -> Option<String> {
    if start > end || end > char_len(text) {
        return None;
    }
    Some(text.chars().skip(start).take(end - start).collect())
}
