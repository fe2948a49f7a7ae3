//! Statistical convergence of the planner and selectors over large
//! samples. Tolerances follow a ±1.5% band at N = 100_000.

use std::collections::BTreeMap;

use identikit_config::{fields, ProbabilityConfig};
use identikit_core::DocFormat;
use identikit_generate::{plan_fields, DrawSource, SeededDraws};
use identikit_generate::select::select_format;

const SAMPLES: usize = 100_000;
const TOLERANCE: f64 = 0.015;

fn assert_close(observed: f64, expected: f64, what: &str) {
    assert!(
        (observed - expected).abs() <= TOLERANCE,
        "{what}: observed {observed:.4}, expected {expected:.4} ± {TOLERANCE}"
    );
}

#[test]
fn format_split_converges_to_configured_weight() {
    let config = ProbabilityConfig::default();
    let mut draws = SeededDraws::new(101);

    let mut simple = 0_usize;
    for _ in 0..SAMPLES {
        if select_format(draws.draw(), config.format_weights.simple) == DocFormat::Simple {
            simple += 1;
        }
    }

    assert_close(
        simple as f64 / SAMPLES as f64,
        config.format_weights.simple,
        "simple format rate",
    );
}

#[test]
fn field_inclusion_rates_converge() {
    let config = ProbabilityConfig::default();
    let mut draws = SeededDraws::new(202);

    let mut included: BTreeMap<&str, usize> = BTreeMap::new();
    for _ in 0..SAMPLES {
        let plan = plan_fields(&config.formats.simple, &mut draws);
        for rule in &config.formats.simple {
            if plan.included(&rule.id) {
                *included.entry(rule.id.as_str()).or_insert(0) += 1;
            }
        }
    }

    for rule in &config.formats.simple {
        let expected = match rule.depends_on.as_deref() {
            // A child's marginal rate is parent rate times its own.
            Some(parent) => {
                let parent_rule = config
                    .formats
                    .simple
                    .iter()
                    .find(|candidate| candidate.id == parent)
                    .expect("parent rule");
                parent_rule.probability * rule.probability
            }
            None => rule.probability,
        };
        let observed =
            included.get(rule.id.as_str()).copied().unwrap_or(0) as f64 / SAMPLES as f64;
        assert_close(observed, expected, &format!("inclusion rate of {}", rule.id));
    }
}

#[test]
fn weighted_variant_frequencies_converge() {
    let config = ProbabilityConfig::default();
    let mut draws = SeededDraws::new(303);

    let rule = config
        .formats
        .simple
        .iter()
        .find(|rule| rule.id == fields::SIGNATURE_NOISE)
        .expect("signature noise rule");
    let variants = rule.variants.as_ref().expect("weighted variants");

    let mut counts = vec![0_usize; variants.options.len()];
    let mut included = 0_usize;
    for _ in 0..SAMPLES {
        let plan = plan_fields(&config.formats.simple, &mut draws);
        if let Some(index) = plan.variant(fields::SIGNATURE_NOISE) {
            counts[index] += 1;
            included += 1;
        }
    }

    assert!(included > 10_000, "not enough variant draws to measure");
    for (index, option) in variants.options.iter().enumerate() {
        let observed = counts[index] as f64 / included as f64;
        let expected = option.weight.unwrap_or_default();
        assert_close(
            observed,
            expected,
            &format!("variant frequency of '{}'", option.label),
        );
    }
}

#[test]
fn children_never_appear_without_their_parent() {
    let config = ProbabilityConfig::default();
    let mut draws = SeededDraws::new(404);

    for _ in 0..SAMPLES {
        let plan = plan_fields(&config.formats.simple, &mut draws);
        if plan.included(fields::HYPHENATED_ALT_NAME) {
            assert!(plan.included(fields::SOCIAL_STATUS));
        }
    }
}

#[test]
fn malformed_parent_reference_fails_closed_at_any_probability() {
    use identikit_config::FieldRule;

    let rules = vec![FieldRule::new("orphan", 1.0).depending_on("missing_parent")];
    let mut draws = SeededDraws::new(505);

    for _ in 0..1000 {
        let plan = plan_fields(&rules, &mut draws);
        assert!(!plan.included("orphan"));
    }
}
