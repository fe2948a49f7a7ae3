//! Document layouts.
//!
//! Each layout plans its fields, fetches every needed value eagerly, then
//! emits the format's fixed slot sequence. Presence of optional slots is
//! binary; order never changes.

pub mod bilingual;
pub mod simple;

use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use identikit_config::FieldRule;

use crate::locales::LocaleKey;
use crate::planner::FieldPlan;

pub use bilingual::build_bilingual;
pub use simple::build_simple;

fn pick_locale(locales: &[LocaleKey], rng: &mut ChaCha8Rng) -> LocaleKey {
    locales.choose(rng).copied().unwrap_or(LocaleKey::FrFr)
}

fn variant_label<'a>(rules: &'a [FieldRule], plan: &FieldPlan, id: &str) -> Option<&'a str> {
    let index = plan.variant(id)?;
    let rule = rules.iter().find(|rule| rule.id == id)?;
    let variants = rule.variants.as_ref()?;
    variants
        .options
        .get(index)
        .map(|option| option.label.as_str())
}

fn first_char(value: &str) -> char {
    value.chars().next().unwrap_or('A')
}
