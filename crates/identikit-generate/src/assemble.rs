//! Template assembly with character-offset tracking.

use rand_chacha::ChaCha8Rng;

use identikit_core::{char_len, verify_record, DocFormat, EntityKind, EntitySpan, GeneratedRecord};

use crate::errors::GenerationError;
use crate::noise::NoiseInjector;

/// One resolved position in a document layout.
///
/// Layout builders emit slots only for included fields, so an excluded
/// optional slot leaves neither placeholder nor separator behind.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// Fixed separator text.
    Literal(String),
    /// Noise-eligible label text; `typo` routes it through the field-typo
    /// table first.
    Label { text: String, typo: bool },
    /// Entity-bearing value text, emitted verbatim.
    Value { kind: EntityKind, text: String },
}

impl Slot {
    pub fn literal(text: impl Into<String>) -> Self {
        Slot::Literal(text.into())
    }

    pub fn label(text: impl Into<String>) -> Self {
        Slot::Label {
            text: text.into(),
            typo: false,
        }
    }

    pub fn field_label(text: impl Into<String>) -> Self {
        Slot::Label {
            text: text.into(),
            typo: true,
        }
    }

    pub fn value(kind: EntityKind, text: impl Into<String>) -> Self {
        Slot::Value {
            kind,
            text: text.into(),
        }
    }
}

/// Walk a slot sequence left to right into a finished record.
///
/// Labels are noised before they are appended, so every downstream offset
/// is computed from post-noise text. The assembled record is re-checked
/// against the span invariant before it is returned; a violation is the
/// engine's fail-loud signal and aborts the record.
pub fn assemble(
    format: DocFormat,
    slots: Vec<Slot>,
    injector: &NoiseInjector<'_>,
    rng: &mut ChaCha8Rng,
) -> Result<GeneratedRecord, GenerationError> {
    let slot_count = slots.len();
    let mut text = String::new();
    let mut offset = 0usize;
    let mut entities = Vec::new();

    for slot in slots {
        match slot {
            Slot::Literal(piece) => {
                offset += char_len(&piece);
                text.push_str(&piece);
            }
            Slot::Label { text: label, typo } => {
                let rendered = if typo {
                    injector.field_label(&label, rng)
                } else {
                    injector.label(&label, rng)
                };
                offset += char_len(&rendered);
                text.push_str(&rendered);
            }
            Slot::Value { kind, text: value } => {
                let start = offset;
                let end = start + char_len(&value);
                text.push_str(&value);
                entities.push(EntitySpan {
                    start,
                    end,
                    label: kind.label(),
                    value,
                });
                offset = end;
            }
        }
    }

    let record = GeneratedRecord { text, entities };
    verify_record(&record).map_err(|err| GenerationError::PositionInvariant {
        format,
        slots: slot_count,
        detail: err.to_string(),
    })?;
    Ok(record)
}
