//! Dataset verification for Identikit.
//!
//! Loads an emitted dataset and re-checks the one guarantee the generator
//! exists to provide: every entity span is an exact character-offset
//! substring of its record's text.

pub mod errors;
pub mod metrics;
pub mod report;

pub use errors::EvalError;
pub use metrics::{evaluate_dataset, load_dataset, DatasetMetrics, Violation, METRICS_VERSION};
pub use report::render_report;
