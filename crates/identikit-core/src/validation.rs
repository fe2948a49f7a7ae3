use crate::error::{Error, Result};
use crate::text::slice_chars;
use crate::types::GeneratedRecord;

/// Validate the span-exactness invariant of a record.
///
/// Every entity span must satisfy `chars(text)[start..end] == value`. The
/// first violation is returned with the offending offsets and both the
/// expected and actual text.
pub fn verify_record(record: &GeneratedRecord) -> Result<()> {
    for span in &record.entities {
        let actual = slice_chars(&record.text, span.start, span.end);
        match actual {
            Some(actual) if actual == span.value => {}
            Some(actual) => {
                return Err(Error::InvalidRecord(format!(
                    "span [{}, {}) labeled '{}' expected '{}' but text holds '{}'",
                    span.start, span.end, span.label, span.value, actual
                )));
            }
            None => {
                return Err(Error::InvalidRecord(format!(
                    "span [{}, {}) labeled '{}' is out of bounds for text of {} chars",
                    span.start,
                    span.end,
                    span.label,
                    crate::text::char_len(&record.text)
                )));
            }
        }
    }
    Ok(())
}
