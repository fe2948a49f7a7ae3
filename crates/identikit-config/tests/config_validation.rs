use identikit_config::{
    fields, load_validated, validate_config, FieldRule, ProbabilityConfig, VariantSet,
};

fn default_json() -> serde_json::Value {
    serde_json::to_value(ProbabilityConfig::default()).expect("serialize default config")
}

#[test]
fn default_config_is_valid() {
    let report = validate_config(&ProbabilityConfig::default());
    assert!(report.is_ok(), "unexpected errors: {report}");
}

#[test]
fn default_config_passes_end_to_end_validation() {
    let validated = load_validated(&default_json()).expect("default config validates");
    assert_eq!(validated.config.formats.simple.len(), 7);
    assert_eq!(validated.config.formats.bilingual.len(), 4);
}

#[test]
fn overweight_table_is_rejected_at_load() {
    let mut config = ProbabilityConfig::default();
    config.formats.simple[1] = FieldRule::new(fields::SIGNATURE_NOISE, 0.2).with_variants(
        VariantSet::weighted(&[("RF ", 0.5), ("3F ", 0.3), ("none", 0.4)]),
    );

    let report = validate_config(&config);
    assert!(report
        .errors
        .iter()
        .any(|issue| issue.code == "weight_sum_not_unit"));

    let json = serde_json::to_value(&config).expect("serialize config");
    assert!(load_validated(&json).is_err());
}

#[test]
fn out_of_range_probability_is_rejected() {
    let mut config = ProbabilityConfig::default();
    config.formats.bilingual[0].probability = 1.3;

    let report = validate_config(&config);
    assert!(report
        .errors
        .iter()
        .any(|issue| issue.code == "probability_out_of_range"));
}

#[test]
fn dangling_dependency_is_rejected() {
    let mut config = ProbabilityConfig::default();
    config.formats.simple[3] =
        FieldRule::new(fields::HYPHENATED_ALT_NAME, 0.3).depending_on("no_such_field");

    let report = validate_config(&config);
    assert!(report
        .errors
        .iter()
        .any(|issue| issue.code == "unknown_dependency"));
}

#[test]
fn forward_dependency_is_rejected() {
    let mut config = ProbabilityConfig::default();
    // Parent declared after the dependent: the planner would fail closed,
    // and validation refuses the table outright.
    config.formats.simple = vec![
        FieldRule::new("child", 0.5).depending_on("parent"),
        FieldRule::new("parent", 0.5),
    ];

    let report = validate_config(&config);
    assert!(report
        .errors
        .iter()
        .any(|issue| issue.code == "unknown_dependency"));
}

#[test]
fn weighted_table_requires_none_variant() {
    let mut config = ProbabilityConfig::default();
    config.formats.simple[1] = FieldRule::new(fields::SIGNATURE_NOISE, 0.2).with_variants(
        VariantSet::weighted(&[("RF ", 0.5), ("3F ", 0.5)]),
    );

    let report = validate_config(&config);
    assert!(report
        .errors
        .iter()
        .any(|issue| issue.code == "missing_none_variant"));
}

#[test]
fn mixed_weighting_is_rejected() {
    let mut config = ProbabilityConfig::default();
    let mut variants = VariantSet::uniform(&["Epouse: ", "Veuve: "]);
    variants.options[0].weight = Some(0.5);
    config.formats.simple[2] =
        FieldRule::new(fields::SOCIAL_STATUS, 0.3).with_variants(variants);

    let report = validate_config(&config);
    assert!(report
        .errors
        .iter()
        .any(|issue| issue.code == "mixed_variant_weights"));
}

#[test]
fn duplicate_field_ids_are_rejected() {
    let mut config = ProbabilityConfig::default();
    config
        .formats
        .bilingual
        .push(FieldRule::new(fields::BIRTH_PLACE, 0.5));

    let report = validate_config(&config);
    assert!(report
        .errors
        .iter()
        .any(|issue| issue.code == "duplicate_field_id"));
}
