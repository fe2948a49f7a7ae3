//! Label-noise injection.
//!
//! Noise mutates label text only, and only before the label is appended to
//! the record — value segments never pass through here, so entity offsets
//! are computed from post-noise text and stay exact by construction.

use rand::seq::IndexedRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use identikit_config::{NoiseTables, ResolvedNoise};

/// Applies OCR-style noise to label segments.
#[derive(Debug, Clone)]
pub struct NoiseInjector<'a> {
    settings: ResolvedNoise,
    tables: &'a NoiseTables,
}

impl<'a> NoiseInjector<'a> {
    pub fn new(settings: ResolvedNoise, tables: &'a NoiseTables) -> Self {
        Self { settings, tables }
    }

    /// Noise a plain label: word replacements, spacing perturbation, then
    /// character-level noise, each under its category probability.
    pub fn label(&self, text: &str, rng: &mut ChaCha8Rng) -> String {
        if !self.gate(rng) {
            return text.to_string();
        }
        self.apply_categories(text, rng)
    }

    /// Noise a form-field label: the typo table is consulted first (exact
    /// label, then substring), falling back to general noise.
    pub fn field_label(&self, text: &str, rng: &mut ChaCha8Rng) -> String {
        if !self.gate(rng) {
            return text.to_string();
        }

        if let Some(variants) = self.tables.field_typos.get(text)
            && let Some(choice) = variants.choose(rng)
        {
            return choice.clone();
        }

        for (original, variants) in &self.tables.field_typos {
            if text.contains(original.as_str())
                && let Some(choice) = variants.choose(rng)
            {
                return text.replace(original.as_str(), choice);
            }
        }

        self.apply_categories(text, rng)
    }

    fn gate(&self, rng: &mut ChaCha8Rng) -> bool {
        self.settings.enabled && rng.random::<f64>() < self.settings.profile.global_probability
    }

    fn apply_categories(&self, text: &str, rng: &mut ChaCha8Rng) -> String {
        let profile = &self.settings.profile;
        let mut text = text.to_string();

        if rng.random::<f64>() < profile.word_noise {
            for (original, variants) in &self.tables.word_replacements {
                if text.contains(original.as_str())
                    && let Some(choice) = variants.choose(rng)
                {
                    text = text.replace(original.as_str(), choice);
                }
            }
        }

        if rng.random::<f64>() < profile.spacing_noise {
            for (original, variants) in &self.tables.spacing_errors {
                if text.contains(original.as_str())
                    && let Some(choice) = variants.choose(rng)
                {
                    text = text.replace(original.as_str(), choice);
                }
            }
        }

        let char_total = profile.char_substitution + profile.char_extra + profile.char_missing;
        if rng.random::<f64>() < char_total {
            text = self.char_noise(&text, rng);
        }

        text
    }

    fn char_noise(&self, text: &str, rng: &mut ChaCha8Rng) -> String {
        let profile = &self.settings.profile;
        let mut out = String::new();

        for ch in text.chars() {
            if rng.random::<f64>() < profile.char_missing {
                continue;
            }

            let substituted = self.tables.character_substitutions.get(&ch.to_string());
            match substituted {
                Some(replacement) if rng.random::<f64>() < profile.char_substitution => {
                    out.push_str(replacement);
                }
                _ => out.push(ch),
            }

            if rng.random::<f64>() < profile.char_double {
                out.push(ch);
            }

            if rng.random::<f64>() < profile.char_extra
                && let Some(extra) = self.tables.extra_chars_pool.choose(rng)
            {
                out.push_str(extra);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use identikit_config::{NoiseProfile, ProbabilityConfig};
    use rand::SeedableRng;

    fn saturated() -> ResolvedNoise {
        ResolvedNoise {
            enabled: true,
            profile: NoiseProfile {
                global_probability: 1.0,
                word_noise: 1.0,
                spacing_noise: 1.0,
                char_substitution: 0.5,
                char_extra: 0.3,
                char_missing: 0.2,
                char_double: 0.3,
            },
        }
    }

    #[test]
    fn disabled_noise_is_identity() {
        let config = ProbabilityConfig::default();
        let injector = NoiseInjector::new(
            ResolvedNoise {
                enabled: false,
                profile: NoiseProfile::zero(),
            },
            &config.noise.tables,
        );
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert_eq!(injector.label(" Nationalité ", &mut rng), " Nationalité ");
        assert_eq!(injector.field_label("Prénom(s)", &mut rng), "Prénom(s)");
    }

    #[test]
    fn saturated_noise_mutates_known_labels() {
        let config = ProbabilityConfig::default();
        let injector = NoiseInjector::new(saturated(), &config.noise.tables);
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let mut changed = false;
        for _ in 0..20 {
            if injector.label("Nom : ", &mut rng) != "Nom : " {
                changed = true;
                break;
            }
        }
        assert!(changed, "saturated settings never mutated the label");
    }

    #[test]
    fn field_typos_replace_by_substring() {
        let config = ProbabilityConfig::default();
        let injector = NoiseInjector::new(
            ResolvedNoise {
                enabled: true,
                profile: NoiseProfile {
                    global_probability: 1.0,
                    ..NoiseProfile::zero()
                },
            },
            &config.noise.tables,
        );
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        // " Prénom(s): " has no exact typo entry; the "Prénom(s)" key
        // matches by substring and keeps the surrounding separator text.
        let noisy = injector.field_label(" Prénom(s): ", &mut rng);
        assert!(noisy.starts_with(' ') && noisy.ends_with(": "), "{noisy:?}");
    }
}
