//! Format and variant selection.

use identikit_config::Variant;
use identikit_core::DocFormat;

/// Pick the document layout from one uniform draw.
///
/// SIMPLE iff `draw < simple_weight`; the choice is irreversible for the
/// rest of the record's generation.
pub fn select_format(draw: f64, simple_weight: f64) -> DocFormat {
    if draw < simple_weight {
        DocFormat::Simple
    } else {
        DocFormat::Bilingual
    }
}

/// Weighted categorical selection over a validated variant table.
///
/// Options are scanned in declared order, accumulating weight; each bucket
/// is inclusive of its lower bound and exclusive of its upper bound, so one
/// draw maps to exactly one option. Config validation already rejected
/// non-unit sums; the last option only catches floating-point residue.
pub fn pick_weighted(options: &[Variant], draw: f64) -> usize {
    let mut cumulative = 0.0;
    for (index, option) in options.iter().enumerate() {
        cumulative += option.weight.unwrap_or_default();
        if draw < cumulative {
            return index;
        }
    }
    options.len().saturating_sub(1)
}

/// Uniform selection among `len` options.
pub fn pick_uniform(len: usize, draw: f64) -> usize {
    if len == 0 {
        return 0;
    }
    let index = (draw * len as f64) as usize;
    index.min(len - 1)
}
