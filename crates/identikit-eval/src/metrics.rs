use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use identikit_core::{slice_chars, GeneratedRecord};

use crate::errors::EvalError;

/// Metrics contract version for dataset evaluation.
pub const METRICS_VERSION: &str = "0.1";

/// Machine-readable metrics for a dataset evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetrics {
    pub metrics_version: String,
    pub records: u64,
    pub entities: u64,
    pub violations: u64,
    pub avg_entities_per_record: f64,
    pub label_counts: BTreeMap<String, u64>,
}

/// One span that failed the exactness check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub record_index: usize,
    pub start: usize,
    pub end: usize,
    pub label: String,
    pub expected: String,
    /// Text actually found at the offsets; `None` when out of bounds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

/// Load a dataset file emitted by the generator.
pub fn load_dataset(path: &Path) -> Result<Vec<GeneratedRecord>, EvalError> {
    let contents = std::fs::read_to_string(path)?;
    let records: Vec<GeneratedRecord> = serde_json::from_str(&contents)
        .map_err(|err| EvalError::InvalidDataset(err.to_string()))?;
    Ok(records)
}

/// Re-check every span of every record, collecting metrics and violations.
pub fn evaluate_dataset(records: &[GeneratedRecord]) -> (DatasetMetrics, Vec<Violation>) {
    let mut entities = 0_u64;
    let mut label_counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut violations = Vec::new();

    for (record_index, record) in records.iter().enumerate() {
        for span in &record.entities {
            entities += 1;
            *label_counts.entry(span.label.clone()).or_insert(0) += 1;

            let actual = slice_chars(&record.text, span.start, span.end);
            let matches = actual.as_deref() == Some(span.value.as_str());
            if !matches {
                violations.push(Violation {
                    record_index,
                    start: span.start,
                    end: span.end,
                    label: span.label.clone(),
                    expected: span.value.clone(),
                    actual,
                });
            }
        }
    }

    let metrics = DatasetMetrics {
        metrics_version: METRICS_VERSION.to_string(),
        records: records.len() as u64,
        entities,
        violations: violations.len() as u64,
        avg_entities_per_record: if records.is_empty() {
            0.0
        } else {
            entities as f64 / records.len() as f64
        },
        label_counts,
    };

    (metrics, violations)
}
