use std::collections::HashSet;

use jsonschema::JSONSchema;
use serde_json::Value;

use crate::errors::{ConfigError, IssueSeverity, ValidationIssue, ValidationReport};
use crate::model::{
    FieldRule, NoiseConfig, NoiseProfile, ProbabilityConfig, VariantSet, NONE_VARIANT,
    WEIGHT_TOLERANCE,
};
use crate::schema::config_json_schema;

/// Validated configuration with accumulated warnings.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub config: ProbabilityConfig,
    pub warnings: Vec<ValidationIssue>,
}

/// Validate a configuration JSON document against the config JSON Schema.
pub fn validate_config_json(
    config_json: &Value,
    config_schema: &Value,
) -> Result<ValidationReport, ConfigError> {
    let compiled =
        JSONSchema::compile(config_schema).map_err(|err| ConfigError::Schema(err.to_string()))?;

    let mut report = ValidationReport::default();

    if let Err(errors) = compiled.validate(config_json) {
        for error in errors {
            let path = normalized_json_pointer(&error.instance_path.to_string());
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "schema_violation",
                path,
                error.to_string(),
                None,
            ));
        }
    }

    Ok(report)
}

/// Validate a parsed configuration's semantics.
pub fn validate_config(config: &ProbabilityConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    validate_format_weights(config, &mut report);
    validate_rules("/formats/simple", &config.formats.simple, &mut report);
    validate_rules("/formats/bilingual", &config.formats.bilingual, &mut report);
    validate_noise(&config.noise, &mut report);

    report
}

/// Validate a configuration document end-to-end: structurally against the
/// JSON Schema, then semantically after parsing.
pub fn load_validated(config_json: &Value) -> Result<ValidatedConfig, ValidationReport> {
    let schema_json = match serde_json::to_value(config_json_schema()) {
        Ok(value) => value,
        Err(err) => {
            let mut report = ValidationReport::default();
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "schema_emit_error",
                "/",
                err.to_string(),
                None,
            ));
            return Err(report);
        }
    };

    let structural = match validate_config_json(config_json, &schema_json) {
        Ok(report) => report,
        Err(err) => {
            let mut report = ValidationReport::default();
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "schema_validation_error",
                "/",
                err.to_string(),
                None,
            ));
            return Err(report);
        }
    };

    if !structural.is_ok() {
        return Err(structural);
    }

    let config: ProbabilityConfig = match serde_json::from_value(config_json.clone()) {
        Ok(config) => config,
        Err(err) => {
            let mut report = ValidationReport::default();
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "invalid_config_json",
                "/",
                err.to_string(),
                None,
            ));
            return Err(report);
        }
    };

    let semantic = validate_config(&config);
    if !semantic.is_ok() {
        return Err(semantic);
    }

    Ok(ValidatedConfig {
        config,
        warnings: semantic.warnings,
    })
}

fn validate_format_weights(config: &ProbabilityConfig, report: &mut ValidationReport) {
    let weight = config.format_weights.simple;
    if !(0.0..=1.0).contains(&weight) {
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "weight_out_of_range",
            "/format_weights/simple",
            format!("format weight {weight} must be within [0, 1]"),
            None,
        ));
    }
}

fn validate_rules(base_path: &str, rules: &[FieldRule], report: &mut ValidationReport) {
    let mut declared: HashSet<&str> = HashSet::new();

    for (idx, rule) in rules.iter().enumerate() {
        let rule_path = format!("{base_path}/{idx}");

        if rule.id.trim().is_empty() {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "empty_field_id",
                format!("{rule_path}/id"),
                "field id must be a non-empty string".to_string(),
                None,
            ));
        }

        if !(0.0..=1.0).contains(&rule.probability) {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "probability_out_of_range",
                format!("{rule_path}/probability"),
                format!(
                    "probability {} for field '{}' must be within [0, 1]",
                    rule.probability, rule.id
                ),
                None,
            ));
        }

        if let Some(parent) = &rule.depends_on {
            // Parents must be declared before their dependents so the
            // planner has already decided them; anything else fails
            // closed at run time and is rejected here.
            if !declared.contains(parent.as_str()) {
                report.push_error(ValidationIssue::new(
                    IssueSeverity::Error,
                    "unknown_dependency",
                    format!("{rule_path}/depends_on"),
                    format!(
                        "field '{}' depends on '{}', which is not declared earlier in the list",
                        rule.id, parent
                    ),
                    Some("declare the parent field before its dependents".to_string()),
                ));
            }
        }

        if let Some(variants) = &rule.variants {
            validate_variant_set(&rule.id, variants, &rule_path, report);
        }

        if !declared.insert(rule.id.as_str()) {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "duplicate_field_id",
                rule_path,
                format!("field id '{}' declared more than once", rule.id),
                Some("keep one rule per field id".to_string()),
            ));
        }
    }
}

fn validate_variant_set(
    field_id: &str,
    variants: &VariantSet,
    rule_path: &str,
    report: &mut ValidationReport,
) {
    let variants_path = format!("{rule_path}/variants");

    if variants.options.is_empty() {
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "empty_variant_set",
            variants_path,
            format!("field '{field_id}' declares an empty variant set"),
            None,
        ));
        return;
    }

    let weighted = variants.options.iter().filter(|v| v.weight.is_some()).count();
    if weighted != 0 && weighted != variants.options.len() {
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "mixed_variant_weights",
            variants_path,
            format!(
                "field '{field_id}' mixes weighted and unweighted variants; use all or none"
            ),
            None,
        ));
        return;
    }

    if weighted == 0 {
        return;
    }

    let mut sum = 0.0;
    let mut has_none = false;
    for (idx, option) in variants.options.iter().enumerate() {
        let weight = option.weight.unwrap_or_default();
        if weight < 0.0 {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "negative_weight",
                format!("{variants_path}/options/{idx}/weight"),
                format!(
                    "variant '{}' of field '{field_id}' has negative weight {weight}",
                    option.label
                ),
                None,
            ));
        }
        sum += weight;
        if option.label == NONE_VARIANT {
            has_none = true;
        }
    }

    if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "weight_sum_not_unit",
            variants_path.clone(),
            format!(
                "variant weights of field '{field_id}' sum to {sum}, expected 1 within {WEIGHT_TOLERANCE}"
            ),
            Some("weights are never silently normalized".to_string()),
        ));
    }

    if !has_none {
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "missing_none_variant",
            variants_path,
            format!(
                "weighted variant table of field '{field_id}' lacks the '{NONE_VARIANT}' option"
            ),
            Some("weighted tables must declare their residual mass explicitly".to_string()),
        ));
    }
}

fn validate_noise(noise: &NoiseConfig, report: &mut ValidationReport) {
    let mut seen = HashSet::new();
    for (idx, preset) in noise.presets.iter().enumerate() {
        let preset_path = format!("/noise/presets/{idx}");
        if !seen.insert(preset.name.as_str()) {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "duplicate_preset",
                preset_path.clone(),
                format!("noise preset '{}' declared more than once", preset.name),
                None,
            ));
        }
        validate_profile(&preset.profile, &preset_path, report);
    }

    if let Some(custom) = &noise.custom {
        validate_profile(&custom.profile, "/noise/custom", report);
    }

    for (idx, entry) in noise.tables.extra_chars_pool.iter().enumerate() {
        if entry.is_empty() {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "empty_extra_char",
                format!("/noise/extra_chars_pool/{idx}"),
                "extra-chars pool entries must be non-empty".to_string(),
                None,
            ));
        }
    }

    for (key, values) in &noise.tables.word_replacements {
        if values.is_empty() {
            report.push_warning(ValidationIssue::new(
                IssueSeverity::Warning,
                "empty_replacement_list",
                format!("/noise/word_replacements/{key}"),
                format!("word replacement '{key}' has no variants and will never fire"),
                None,
            ));
        }
    }

    for (key, values) in &noise.tables.field_typos {
        if values.is_empty() {
            report.push_warning(ValidationIssue::new(
                IssueSeverity::Warning,
                "empty_typo_list",
                format!("/noise/field_typos/{key}"),
                format!("field typo '{key}' has no variants and will never fire"),
                None,
            ));
        }
    }
}

fn validate_profile(profile: &NoiseProfile, base_path: &str, report: &mut ValidationReport) {
    for (name, value) in profile.probabilities() {
        if !(0.0..=1.0).contains(&value) {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "noise_probability_out_of_range",
                format!("{base_path}/{name}"),
                format!("noise probability {name}={value} must be within [0, 1]"),
                None,
            ));
        }
    }
}

fn normalized_json_pointer(pointer: &str) -> String {
    if pointer.is_empty() {
        "/".to_string()
    } else {
        pointer.to_string()
    }
}
