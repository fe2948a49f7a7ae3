//! Probability configuration for Identikit.
//!
//! This crate owns the immutable configuration loaded once per run: format
//! weights, per-format field rules with dependencies and variant tables,
//! and the noise model. Configurations are schema-validated structurally
//! and semantically before any generation begins.

mod defaults;
pub mod errors;
pub mod fields;
pub mod model;
pub mod schema;
pub mod validate;

use std::path::Path;

pub use errors::{ConfigError, IssueSeverity, ValidationIssue, ValidationReport};
pub use model::{
    CustomNoise, FieldRule, FormatRules, FormatWeights, NoiseConfig, NoisePreset, NoiseProfile,
    NoiseTables, ProbabilityConfig, ResolvedNoise, Variant, VariantSet, NONE_VARIANT,
    WEIGHT_TOLERANCE,
};
pub use schema::config_json_schema;
pub use validate::{load_validated, validate_config, validate_config_json, ValidatedConfig};

/// Load and fully validate a configuration file.
///
/// Structural schema violations and semantic issues are both fatal here;
/// generation must never start from a half-valid configuration.
pub fn load_config(path: &Path) -> Result<ProbabilityConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let validated = validate::load_validated(&json).map_err(ConfigError::Invalid)?;
    Ok(validated.config)
}
