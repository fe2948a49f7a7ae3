use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use identikit_core::DocFormat;

use crate::locales::{LocaleKey, DEFAULT_LOCALES};

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Seed every record's draw streams derive from.
    pub seed: u64,
    /// Locales the value provider draws from.
    pub locales: Vec<LocaleKey>,
    /// Noise preset name; `None` resolves from the configuration.
    pub noise_level: Option<String>,
    /// Maximum attempts to build a single record after provider failures.
    pub max_attempts_record: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            locales: DEFAULT_LOCALES.to_vec(),
            noise_level: None,
            max_attempts_record: 3,
        }
    }
}

/// Structured per-record issue recorded during a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordIssue {
    pub index: u64,
    pub code: String,
    pub message: String,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub records_requested: u64,
    pub records_generated: u64,
    pub retries_total: u64,
    pub entities_total: u64,
    pub format_counts: BTreeMap<String, u64>,
    pub issues: Vec<RecordIssue>,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: u64) -> Self {
        Self {
            run_id,
            seed,
            records_requested: 0,
            records_generated: 0,
            retries_total: 0,
            entities_total: 0,
            format_counts: BTreeMap::new(),
            issues: Vec::new(),
        }
    }

    pub fn record_format(&mut self, format: DocFormat) {
        *self
            .format_counts
            .entry(format.as_str().to_string())
            .or_insert(0) += 1;
    }

    pub fn record_issue(&mut self, index: u64, code: &str, message: String) {
        self.issues.push(RecordIssue {
            index,
            code: code.to_string(),
            message,
        });
    }
}
