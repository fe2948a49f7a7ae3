//! Built-in configuration equivalent to shipping a `config.json` next to
//! the binary. File-based configs replace it wholesale.

use std::collections::BTreeMap;

use crate::fields;
use crate::model::{
    CustomNoise, FieldRule, FormatRules, FormatWeights, NoiseConfig, NoisePreset, NoiseProfile,
    NoiseTables, ProbabilityConfig, VariantSet,
};

impl Default for ProbabilityConfig {
    fn default() -> Self {
        Self {
            format_weights: FormatWeights { simple: 0.7 },
            formats: FormatRules {
                simple: simple_rules(),
                bilingual: bilingual_rules(),
            },
            noise: default_noise(),
        }
    }
}

fn simple_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new(fields::TWO_LETTER_CODE, 0.5),
        FieldRule::new(fields::SIGNATURE_NOISE, 0.2).with_variants(VariantSet::weighted(&[
            ("RF ", 0.3),
            ("3F ", 0.2),
            ("RERE ", 0.1),
            ("none", 0.4),
        ])),
        FieldRule::new(fields::SOCIAL_STATUS, 0.3).with_variants(VariantSet::uniform(&[
            "Epouse: ",
            "Veuve: ",
            "Nom d'usage: ",
        ])),
        FieldRule::new(fields::HYPHENATED_ALT_NAME, 0.3).depending_on(fields::SOCIAL_STATUS),
        FieldRule::new(fields::BIRTH_PLACE, 0.8),
        FieldRule::new(fields::HEIGHT, 0.6),
        FieldRule::new(fields::SIGNATURE_LABEL, 0.4),
    ]
}

fn bilingual_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new(fields::BIRTH_PLACE, 0.9),
        FieldRule::new(fields::ALT_NAME_MARRIED, 0.3),
        FieldRule::new(fields::SUPPORT_NUMBER, 0.4).with_variants(VariantSet::weighted(&[
            ("MA ", 0.3),
            (fields::SUPPORT_NOISE_TWO_LETTER, 0.2),
            (fields::SUPPORT_NOISE_DIGITS, 0.1),
            ("none", 0.4),
        ])),
        FieldRule::new(fields::EXPIRY_DATE, 0.8),
    ]
}

fn default_noise() -> NoiseConfig {
    NoiseConfig {
        presets: vec![
            NoisePreset {
                name: "clean".to_string(),
                enabled: false,
                description: Some("no noise at all".to_string()),
                profile: NoiseProfile::zero(),
            },
            NoisePreset {
                name: "light".to_string(),
                enabled: false,
                description: Some("rare OCR slips".to_string()),
                profile: NoiseProfile {
                    global_probability: 0.08,
                    word_noise: 0.05,
                    spacing_noise: 0.04,
                    char_substitution: 0.02,
                    char_extra: 0.01,
                    char_missing: 0.01,
                    char_double: 0.01,
                },
            },
            NoisePreset {
                name: "medium".to_string(),
                enabled: true,
                description: Some("typical scan quality".to_string()),
                profile: NoiseProfile::medium(),
            },
            NoisePreset {
                name: "heavy".to_string(),
                enabled: false,
                description: Some("degraded scans".to_string()),
                profile: NoiseProfile {
                    global_probability: 0.30,
                    word_noise: 0.20,
                    spacing_noise: 0.15,
                    char_substitution: 0.10,
                    char_extra: 0.05,
                    char_missing: 0.04,
                    char_double: 0.05,
                },
            },
        ],
        custom: Some(CustomNoise {
            use_custom: false,
            profile: NoiseProfile::medium(),
        }),
        tables: default_tables(),
    }
}

fn default_tables() -> NoiseTables {
    NoiseTables {
        word_replacements: string_list_map(&[
            ("Nationalité", &["Nationalite", "Natìonalité", "Nat1onalité"]),
            ("Signature", &["Signalure", "Sígnature"]),
            ("titulaire", &["titulaíre", "tltulaire"]),
            ("Taille", &["TailIe", "Tai11e"]),
        ]),
        spacing_errors: string_list_map(&[
            ("Nom : ", &["Nom: ", "Nom  : ", "Nom :"]),
            (" N° : ", &[" N°: ", " N° :  ", " N ° : "]),
            (" Sexe : ", &[" Sexe: ", " Sexe  : "]),
            (" Taille : ", &[" Taille: ", " Taille :  "]),
        ]),
        character_substitutions: string_map(&[
            ("é", "e"),
            ("É", "E"),
            ("è", "e"),
            ("0", "O"),
            ("O", "0"),
            ("1", "l"),
            ("l", "1"),
            ("I", "l"),
            ("S", "5"),
            ("B", "8"),
        ]),
        extra_chars_pool: vec![
            " ".to_string(),
            ".".to_string(),
            ",".to_string(),
            "-".to_string(),
        ],
        field_typos: string_list_map(&[
            (
                " NOM/Sumame ",
                &[" NOM/Surname ", " NOM/Sumame ", " NOM / Sumame "],
            ),
            ("Prénom(s)", &["Prenom(s)", "Prénom[s)", "Prénoms"]),
            ("Né(e)", &["Ne(e)", "Né[e)"]),
            (" Sexe : ", &[" Sexe: ", " 5exe : "]),
            (" Nationalité ", &[" Nationalite ", " Natìonalité "]),
            ("Epouse: ", &["Épouse: ", "Epouse : "]),
            ("Veuve: ", &["Veuve : "]),
            ("Nom d'usage: ", &["Nom d usage: "]),
            (
                " Prénoms / Given names ",
                &[" Prénoms / Gíven names ", " Prenoms / Given names "],
            ),
            (" SEXE /Sex ", &[" SEXE / Sex ", " 5EXE /Sex "]),
            (
                " NATIONALITÉ / Nationality ",
                &[" NATIONALITE / Nationality ", " NATIONALITÉ / Nationalìty "],
            ),
            (
                " NOM D'USAGE / Alternate name ép. ",
                &[" NOM D'USAGE / Altemate name ép. "],
            ),
        ]),
    }
}

fn string_list_map(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(key, values)| {
            (
                (*key).to_string(),
                values.iter().map(|value| (*value).to_string()).collect(),
            )
        })
        .collect()
}

fn string_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}
