//! Bilingual card layout.
//!
//! Field labels appear as a block ahead of their values, so label slots
//! and value slots are declared independently; the slot order below is the
//! layout contract.

use rand::seq::IndexedRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use identikit_config::{fields, ProbabilityConfig, NONE_VARIANT};
use identikit_core::EntityKind;

use crate::assemble::Slot;
use crate::draws::DrawSource;
use crate::errors::GenerationError;
use crate::formats::{pick_locale, variant_label};
use crate::locales::LocaleKey;
use crate::planner::plan_fields;
use crate::provider::{FieldKind, ValueProvider};

const DOC_TYPE: &str = "CARTE NATIONALE D'IDENTITÉ / IDENTITY CARD";

const TWO_LETTER_NOISE: &[&str] = &["AB ", "BA ", "CA ", "DA ", "KA ", "RA ", "SA "];

/// Plan, fetch, and lay out one bilingual-format record.
pub fn build_bilingual(
    config: &ProbabilityConfig,
    draws: &mut dyn DrawSource,
    provider: &mut dyn ValueProvider,
    locales: &[LocaleKey],
    values_rng: &mut ChaCha8Rng,
) -> Result<Vec<Slot>, GenerationError> {
    let rules = &config.formats.bilingual;
    let plan = plan_fields(rules, draws);

    let header = provider.value(pick_locale(locales, values_rng), FieldKind::CountryHeader)?;
    let surname = provider.value(pick_locale(locales, values_rng), FieldKind::Surname)?;

    let given_count = values_rng.random_range(1..=2);
    let mut given_names = Vec::with_capacity(given_count);
    for _ in 0..given_count {
        given_names.push(provider.value(pick_locale(locales, values_rng), FieldKind::GivenName)?);
    }

    let gender = provider.value(pick_locale(locales, values_rng), FieldKind::Gender)?;
    let nationality =
        provider.value(pick_locale(locales, values_rng), FieldKind::NationalityCode)?;
    let birth_date = provider.value(pick_locale(locales, values_rng), FieldKind::BirthDate)?;
    let id_number = provider.value(pick_locale(locales, values_rng), FieldKind::IdNumber)?;

    let city = if plan.included(fields::BIRTH_PLACE) {
        Some(provider.value(pick_locale(locales, values_rng), FieldKind::City)?)
    } else {
        None
    };
    let alt_name = if plan.included(fields::ALT_NAME_MARRIED) {
        Some(provider.value(pick_locale(locales, values_rng), FieldKind::AltName)?)
    } else {
        None
    };
    let expiry = if plan.included(fields::EXPIRY_DATE) {
        Some(provider.value(pick_locale(locales, values_rng), FieldKind::ExpiryDate)?)
    } else {
        None
    };
    let support = if plan.included(fields::SUPPORT_NUMBER) {
        Some(provider.value(pick_locale(locales, values_rng), FieldKind::SupportNumber)?)
    } else {
        None
    };

    let mut slots = Vec::new();

    slots.push(Slot::value(EntityKind::Country, header));
    slots.push(Slot::literal(" FR "));
    slots.push(Slot::value(EntityKind::DocType, DOC_TYPE));

    slots.push(Slot::field_label(" NOM/Sumame "));
    slots.push(Slot::value(EntityKind::Name, surname));

    slots.push(Slot::field_label(" Prénoms / Given names "));
    for (index, name) in given_names.into_iter().enumerate() {
        if index > 0 {
            slots.push(Slot::literal(", "));
        }
        slots.push(Slot::value(EntityKind::GivenName(index + 1), name));
    }

    slots.push(Slot::field_label(" SEXE /Sex "));
    slots.push(Slot::field_label(" NATIONALITÉ / Nationality "));
    slots.push(Slot::literal("DATE DE NAISS. / Date of birth "));

    slots.push(Slot::value(EntityKind::Gender, gender));
    slots.push(Slot::literal(" "));
    slots.push(Slot::value(EntityKind::Nationality, nationality));
    slots.push(Slot::literal(" "));
    slots.push(Slot::value(EntityKind::BirthDate, birth_date));

    if let Some(city) = city {
        slots.push(Slot::literal(" LIEU DE NAISSANCE / Place of birth "));
        slots.push(Slot::value(EntityKind::BirthPlace, city));
    }

    if let Some(alt_name) = alt_name {
        slots.push(Slot::field_label(" NOM D'USAGE / Alternate name ép. "));
        slots.push(Slot::value(EntityKind::AltName, alt_name));
    }

    slots.push(Slot::literal(" N° DU DOCUMENT / Document No "));
    slots.push(Slot::value(EntityKind::Dni, id_number));

    if let Some(expiry) = expiry {
        slots.push(Slot::literal(" DATE D'EXPIR. / Expiry date "));
        slots.push(Slot::value(EntityKind::ValidityDate, expiry));
    }

    if let Some(support) = support {
        slots.push(Slot::literal(" "));
        if let Some(noise) =
            resolve_support_noise(variant_label(rules, &plan, fields::SUPPORT_NUMBER), values_rng)
        {
            slots.push(Slot::literal(noise));
        }
        slots.push(Slot::value(EntityKind::SupportNumber, support));
    }

    Ok(slots)
}

/// Turn the selected support-noise variant into literal text. The
/// generated variants simulate OCR misreading a signature ahead of the
/// support number.
fn resolve_support_noise(label: Option<&str>, rng: &mut ChaCha8Rng) -> Option<String> {
    match label {
        None => None,
        Some(NONE_VARIANT) => None,
        Some(fields::SUPPORT_NOISE_TWO_LETTER) => TWO_LETTER_NOISE
            .choose(rng)
            .map(|choice| (*choice).to_string()),
        Some(fields::SUPPORT_NOISE_DIGITS) => {
            let count = rng.random_range(2..=3);
            let mut out: String = (0..count)
                .map(|_| char::from(b'0' + rng.random_range(0..10) as u8))
                .collect();
            out.push(' ');
            Some(out)
        }
        Some(other) => Some(other.to_string()),
    }
}
