use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use identikit_core::DocFormat;

use crate::errors::ConfigError;

/// Tolerance when checking that weighted variant tables sum to one.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Reserved variant label that absorbs residual probability mass and
/// emits nothing when selected.
pub const NONE_VARIANT: &str = "none";

/// Relative weight of each document layout in the format draw.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FormatWeights {
    /// Probability of the simple layout; the bilingual layout takes the
    /// remaining mass.
    pub simple: f64,
}

/// One mutually exclusive choice inside a variant set.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Variant {
    pub label: String,
    /// Selection weight. Either every option in a set carries a weight or
    /// none does (uniform selection).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Ordered set of mutually exclusive variants for an included field.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VariantSet {
    pub options: Vec<Variant>,
}

impl VariantSet {
    /// True when the set carries explicit weights.
    pub fn is_weighted(&self) -> bool {
        self.options.iter().any(|option| option.weight.is_some())
    }

    pub fn uniform(labels: &[&str]) -> Self {
        Self {
            options: labels
                .iter()
                .map(|label| Variant {
                    label: (*label).to_string(),
                    weight: None,
                })
                .collect(),
        }
    }

    pub fn weighted(entries: &[(&str, f64)]) -> Self {
        Self {
            options: entries
                .iter()
                .map(|(label, weight)| Variant {
                    label: (*label).to_string(),
                    weight: Some(*weight),
                })
                .collect(),
        }
    }
}

/// One optional field with its inclusion probability.
///
/// Rules are evaluated in declared order; a rule with `depends_on` is only
/// eligible when its parent was included, and the parent must be declared
/// earlier in the same list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FieldRule {
    pub id: String,
    pub probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<VariantSet>,
}

impl FieldRule {
    pub fn new(id: &str, probability: f64) -> Self {
        Self {
            id: id.to_string(),
            probability,
            depends_on: None,
            variants: None,
        }
    }

    pub fn depending_on(mut self, parent: &str) -> Self {
        self.depends_on = Some(parent.to_string());
        self
    }

    pub fn with_variants(mut self, variants: VariantSet) -> Self {
        self.variants = Some(variants);
        self
    }
}

/// Ordered field rules per document layout.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FormatRules {
    pub simple: Vec<FieldRule>,
    pub bilingual: Vec<FieldRule>,
}

impl FormatRules {
    pub fn for_format(&self, format: DocFormat) -> &[FieldRule] {
        match format {
            DocFormat::Simple => &self.simple,
            DocFormat::Bilingual => &self.bilingual,
        }
    }
}

/// Per-category noise probabilities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct NoiseProfile {
    /// Gate applied once per label before any category is considered.
    pub global_probability: f64,
    pub word_noise: f64,
    pub spacing_noise: f64,
    pub char_substitution: f64,
    pub char_extra: f64,
    pub char_missing: f64,
    pub char_double: f64,
}

impl NoiseProfile {
    pub const fn zero() -> Self {
        Self {
            global_probability: 0.0,
            word_noise: 0.0,
            spacing_noise: 0.0,
            char_substitution: 0.0,
            char_extra: 0.0,
            char_missing: 0.0,
            char_double: 0.0,
        }
    }

    pub const fn medium() -> Self {
        Self {
            global_probability: 0.15,
            word_noise: 0.10,
            spacing_noise: 0.08,
            char_substitution: 0.05,
            char_extra: 0.02,
            char_missing: 0.015,
            char_double: 0.02,
        }
    }

    /// All per-category probabilities, for range validation.
    pub fn probabilities(&self) -> [(&'static str, f64); 7] {
        [
            ("global_probability", self.global_probability),
            ("word_noise", self.word_noise),
            ("spacing_noise", self.spacing_noise),
            ("char_substitution", self.char_substitution),
            ("char_extra", self.char_extra),
            ("char_missing", self.char_missing),
            ("char_double", self.char_double),
        ]
    }
}

/// Named noise preset selectable by name or by its `enabled` flag.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NoisePreset {
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub profile: NoiseProfile,
}

/// Custom noise override taking precedence over presets when enabled.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CustomNoise {
    #[serde(default)]
    pub use_custom: bool,
    #[serde(flatten)]
    pub profile: NoiseProfile,
}

/// Replacement material consumed by the noise injector.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NoiseTables {
    /// Word-level replacements keyed by the original word.
    #[serde(default)]
    pub word_replacements: std::collections::BTreeMap<String, Vec<String>>,
    /// Spacing perturbations keyed by the original separator text.
    #[serde(default)]
    pub spacing_errors: std::collections::BTreeMap<String, Vec<String>>,
    /// Single-character OCR confusions.
    #[serde(default)]
    pub character_substitutions: std::collections::BTreeMap<String, String>,
    /// Pool drawn from when inserting an extra character.
    #[serde(default)]
    pub extra_chars_pool: Vec<String>,
    /// Whole-label typo variants keyed by the exact label text.
    #[serde(default)]
    pub field_typos: std::collections::BTreeMap<String, Vec<String>>,
}

/// Noise model: presets, optional custom override, replacement tables.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NoiseConfig {
    pub presets: Vec<NoisePreset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomNoise>,
    #[serde(flatten)]
    pub tables: NoiseTables,
}

/// Noise settings after preset/custom resolution.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedNoise {
    pub enabled: bool,
    pub profile: NoiseProfile,
}

impl NoiseConfig {
    /// Resolve the effective noise settings.
    ///
    /// An explicit `level` names a preset (`clean` disables noise
    /// entirely); otherwise an enabled custom block wins, then the first
    /// enabled preset in declared order, then the built-in medium profile.
    pub fn resolve(&self, level: Option<&str>) -> Result<ResolvedNoise, ConfigError> {
        if let Some(name) = level {
            let preset = self
                .presets
                .iter()
                .find(|preset| preset.name == name)
                .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?;
            return Ok(Self::from_preset(preset));
        }

        if let Some(custom) = &self.custom
            && custom.use_custom
        {
            return Ok(ResolvedNoise {
                enabled: true,
                profile: custom.profile,
            });
        }

        for preset in &self.presets {
            if preset.enabled {
                return Ok(Self::from_preset(preset));
            }
        }

        Ok(ResolvedNoise {
            enabled: true,
            profile: NoiseProfile::medium(),
        })
    }

    fn from_preset(preset: &NoisePreset) -> ResolvedNoise {
        if preset.name == "clean" {
            ResolvedNoise {
                enabled: false,
                profile: NoiseProfile::zero(),
            }
        } else {
            ResolvedNoise {
                enabled: true,
                profile: preset.profile,
            }
        }
    }
}

/// Canonical configuration for a generation run.
///
/// Loaded once, read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProbabilityConfig {
    pub format_weights: FormatWeights,
    pub formats: FormatRules,
    pub noise: NoiseConfig,
}
