//! Simple (monolingual) card layout.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use identikit_config::{fields, ProbabilityConfig, NONE_VARIANT};
use identikit_core::EntityKind;

use crate::assemble::Slot;
use crate::draws::DrawSource;
use crate::errors::GenerationError;
use crate::formats::{first_char, pick_locale, variant_label};
use crate::locales::LocaleKey;
use crate::planner::plan_fields;
use crate::provider::{FieldKind, ValueProvider};

const DOC_TYPE: &str = "CARTE NATIONALE D'IDENTITÉ";
const NATIONALITY: &str = "Française";

/// Plan, fetch, and lay out one simple-format record.
pub fn build_simple(
    config: &ProbabilityConfig,
    draws: &mut dyn DrawSource,
    provider: &mut dyn ValueProvider,
    locales: &[LocaleKey],
    values_rng: &mut ChaCha8Rng,
) -> Result<Vec<Slot>, GenerationError> {
    let rules = &config.formats.simple;
    let plan = plan_fields(rules, draws);

    let header = provider.value(pick_locale(locales, values_rng), FieldKind::CountryHeader)?;
    let id_number = provider.value(pick_locale(locales, values_rng), FieldKind::IdNumber)?;
    let surname = provider.value(pick_locale(locales, values_rng), FieldKind::Surname)?;

    let given_count = values_rng.random_range(1..=3);
    let mut given_names = Vec::with_capacity(given_count);
    for _ in 0..given_count {
        given_names.push(provider.value(pick_locale(locales, values_rng), FieldKind::GivenName)?);
    }

    let alt_name = if plan.included(fields::SOCIAL_STATUS) {
        let mut name = provider.value(pick_locale(locales, values_rng), FieldKind::AltName)?;
        if plan.included(fields::HYPHENATED_ALT_NAME) {
            let second = provider.value(pick_locale(locales, values_rng), FieldKind::AltName)?;
            name = format!("{name}- {second}");
        }
        Some(name)
    } else {
        None
    };

    let gender = provider.value(pick_locale(locales, values_rng), FieldKind::Gender)?;
    let birth_date = provider.value(pick_locale(locales, values_rng), FieldKind::BirthDate)?;
    let city = if plan.included(fields::BIRTH_PLACE) {
        Some(provider.value(pick_locale(locales, values_rng), FieldKind::City)?)
    } else {
        None
    };
    let height = if plan.included(fields::HEIGHT) {
        Some(provider.value(pick_locale(locales, values_rng), FieldKind::Height)?)
    } else {
        None
    };

    let mut slots = Vec::new();

    slots.push(Slot::value(EntityKind::Country, header));
    slots.push(Slot::literal(" "));
    slots.push(Slot::value(EntityKind::DocType, DOC_TYPE));
    slots.push(Slot::label(" N° : "));
    slots.push(Slot::value(EntityKind::Dni, id_number));
    slots.push(Slot::field_label(" Nationalité "));
    slots.push(Slot::value(EntityKind::Nationality, NATIONALITY));
    slots.push(Slot::literal(" "));

    if plan.included(fields::TWO_LETTER_CODE) {
        let first_given = given_names.first().map(String::as_str).unwrap_or_default();
        let code = format!("{}{} ", first_char(&surname), first_char(first_given));
        slots.push(Slot::literal(code));
    }

    if plan.included(fields::SIGNATURE_NOISE)
        && let Some(label) = variant_label(rules, &plan, fields::SIGNATURE_NOISE)
        && label != NONE_VARIANT
    {
        slots.push(Slot::literal(label));
    }

    slots.push(Slot::label("Nom : "));
    slots.push(Slot::value(EntityKind::Name, surname));

    if let Some(alt_name) = alt_name {
        let status = variant_label(rules, &plan, fields::SOCIAL_STATUS).unwrap_or("Epouse: ");
        slots.push(Slot::literal(" "));
        slots.push(Slot::field_label(status));
        slots.push(Slot::value(EntityKind::AltName, alt_name));
    }

    slots.push(Slot::field_label(" Prénom(s): "));
    for (index, name) in given_names.into_iter().enumerate() {
        if index > 0 {
            slots.push(Slot::literal(", "));
        }
        slots.push(Slot::value(EntityKind::GivenName(index + 1), name));
    }

    slots.push(Slot::field_label(" Sexe : "));
    slots.push(Slot::value(EntityKind::Gender, gender));

    slots.push(Slot::field_label(" Né(e) le : "));
    slots.push(Slot::value(EntityKind::BirthDate, birth_date));

    if let Some(city) = city {
        slots.push(Slot::literal(" à "));
        slots.push(Slot::value(EntityKind::BirthPlace, city));
    }

    if let Some(height) = height {
        slots.push(Slot::label(" Taille : "));
        slots.push(Slot::value(EntityKind::Height, height));
    }

    if plan.included(fields::SIGNATURE_LABEL) {
        slots.push(Slot::label(" Signature du titulaire :"));
    }

    Ok(slots)
}
