//! Replayed decision paths against the default rule tables, with a
//! scripted provider and noise disabled so label text is verbatim.

mod common;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use identikit_config::ProbabilityConfig;
use identikit_core::{verify_record, DocFormat};
use identikit_generate::{
    GenerateOptions, GenerationEngine, GenerationError, ReplayDraws,
};

use common::{FailingProvider, ScriptedProvider};

fn clean_engine() -> GenerationEngine {
    let options = GenerateOptions {
        noise_level: Some("clean".to_string()),
        ..GenerateOptions::default()
    };
    GenerationEngine::new(ProbabilityConfig::default(), options).expect("engine")
}

fn labels(record: &identikit_core::GeneratedRecord) -> Vec<String> {
    record
        .entities
        .iter()
        .map(|span| span.label.clone())
        .collect()
}

#[test]
fn simple_format_replay_builds_expected_record() {
    let engine = clean_engine();

    // format 0.65 → simple; code 0.8 → out; signature noise 0.1 → in,
    // 0.45 → "3F "; social 0.1 → in, 0.0 → "Epouse: "; hyphen 0.9 → out;
    // birth place 0.3 → in; height 0.7 → out; signature label 0.2 → in.
    let mut draws = ReplayDraws::new(vec![0.65, 0.8, 0.1, 0.45, 0.1, 0.0, 0.9, 0.3, 0.7, 0.2]);
    let mut provider = ScriptedProvider;
    let mut values_rng = ChaCha8Rng::seed_from_u64(1);
    let mut noise_rng = ChaCha8Rng::seed_from_u64(2);

    let (format, record) = engine
        .generate_record_with(&mut draws, &mut provider, &mut values_rng, &mut noise_rng)
        .expect("record");

    assert_eq!(format, DocFormat::Simple);
    assert_eq!(draws.consumed(), 10, "every scripted draw maps to one decision");
    verify_record(&record).expect("span invariant");

    assert!(record.text.starts_with(
        "RÉPUBLIQUE FRANÇAISE CARTE NATIONALE D'IDENTITÉ N° : 123456789012 \
         Nationalité Française 3F Nom : MARTIN Epouse: BERNARD Prénom(s): CAMILLE"
    ));
    assert!(record.text.contains(" Sexe : F Né(e) le : 01.02.1973 à LYON"));
    assert!(record.text.ends_with(" Signature du titulaire :"));
    assert!(!record.text.contains("Taille"), "height was excluded");

    let labels = labels(&record);
    assert_eq!(labels[0], "Country");
    assert_eq!(labels[1], "DOC_TYPE");
    assert_eq!(labels[2], "DNI");
    assert_eq!(labels[3], "Nationality");
    assert_eq!(labels[4], "Name");
    assert_eq!(labels[5], "Alt_name");
    assert_eq!(labels[6], "Surname_1");
    assert!(labels.contains(&"Gender".to_string()));
    assert!(labels.contains(&"Date of birthday".to_string()));
    assert!(labels.contains(&"Birth_place".to_string()));
    assert!(!labels.contains(&"Height".to_string()));
}

#[test]
fn bilingual_format_replay_builds_expected_record() {
    let engine = clean_engine();

    // format 0.85 → bilingual; birth place 0.5 → in; alt name 0.5 → out;
    // support 0.2 → in, 0.1 → "MA " bucket; expiry 0.3 → in.
    let mut draws = ReplayDraws::new(vec![0.85, 0.5, 0.5, 0.2, 0.1, 0.3]);
    let mut provider = ScriptedProvider;
    let mut values_rng = ChaCha8Rng::seed_from_u64(1);
    let mut noise_rng = ChaCha8Rng::seed_from_u64(2);

    let (format, record) = engine
        .generate_record_with(&mut draws, &mut provider, &mut values_rng, &mut noise_rng)
        .expect("record");

    assert_eq!(format, DocFormat::Bilingual);
    assert_eq!(draws.consumed(), 6);
    verify_record(&record).expect("span invariant");

    assert!(record.text.starts_with(
        "RÉPUBLIQUE FRANÇAISE FR CARTE NATIONALE D'IDENTITÉ / IDENTITY CARD \
         NOM/Sumame MARTIN Prénoms / Given names CAMILLE"
    ));
    assert!(record
        .text
        .contains(" LIEU DE NAISSANCE / Place of birth LYON"));
    assert!(record
        .text
        .contains(" N° DU DOCUMENT / Document No 123456789012"));
    assert!(record.text.contains(" DATE D'EXPIR. / Expiry date 14 03 2043"));
    assert!(record.text.ends_with(" MA 654321"));
    assert!(!record.text.contains("NOM D'USAGE"), "alt name was excluded");

    let labels = labels(&record);
    for expected in [
        "Country",
        "DOC_TYPE",
        "Name",
        "Surname_1",
        "Gender",
        "Nationality",
        "Date of birthday",
        "Birth_place",
        "DNI",
        "Validity_date",
        "Support_number",
    ] {
        assert!(labels.contains(&expected.to_string()), "missing {expected}");
    }
    assert!(!labels.contains(&"Alt_name".to_string()));
}

#[test]
fn identical_draw_sequences_yield_identical_records() {
    let engine = clean_engine();
    let script = vec![0.65, 0.8, 0.1, 0.45, 0.1, 0.0, 0.9, 0.3, 0.7, 0.2];

    let mut outputs = Vec::new();
    for _ in 0..2 {
        let mut draws = ReplayDraws::new(script.clone());
        let mut provider = ScriptedProvider;
        let mut values_rng = ChaCha8Rng::seed_from_u64(7);
        let mut noise_rng = ChaCha8Rng::seed_from_u64(8);
        let (_, record) = engine
            .generate_record_with(&mut draws, &mut provider, &mut values_rng, &mut noise_rng)
            .expect("record");
        outputs.push(serde_json::to_string(&record).expect("serialize"));
    }

    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn provider_failure_aborts_only_that_record() {
    let engine = clean_engine();
    let mut draws = ReplayDraws::new(vec![0.65]);
    let mut provider = FailingProvider;
    let mut values_rng = ChaCha8Rng::seed_from_u64(1);
    let mut noise_rng = ChaCha8Rng::seed_from_u64(2);

    let result =
        engine.generate_record_with(&mut draws, &mut provider, &mut values_rng, &mut noise_rng);
    assert!(matches!(result, Err(GenerationError::Provider { .. })));

    // The engine itself is untouched; the next record generates fine.
    assert!(engine.generate_record(0).is_ok());
}

#[test]
fn engine_rejects_invalid_config() {
    let mut config = ProbabilityConfig::default();
    config.format_weights.simple = 1.4;

    let result = GenerationEngine::new(config, GenerateOptions::default());
    assert!(matches!(result, Err(GenerationError::Config(_))));
}
