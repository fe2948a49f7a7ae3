//! Value provision.
//!
//! The engine asks a `ValueProvider` for every entity-bearing value after
//! planning and before assembly, so offset bookkeeping never interleaves
//! with provider calls. The default `FakerProvider` draws realistic names
//! and cities from the `fake` crate across a locale set and builds the
//! structured values (document numbers, dates, heights) itself.

use fake::faker::address::raw::CityName;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::{AR_SA, EN, FR_FR, JA_JP, PT_BR, ZH_CN};
use fake::Fake;
use rand::seq::IndexedRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::errors::GenerationError;
use crate::locales::LocaleKey;

/// Year the age-based date generators are anchored to.
const BASE_YEAR: i32 = 2024;

const HEADER_VARIANTS: &[&str] = &[
    "RÉPUBLIQUE FRANÇAISE",
    "FRANÇAISE RÉPUBLIQUE",
    "RÉPUBLIQUEFRANÇAISE",
];

const NATIONALITY_CODES: &[&str] = &["FRA", "ESP", "PRT", "ITA", "BEL", "MAR", "TUN", "DZA"];

/// Kinds of values the document layouts request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    CountryHeader,
    Surname,
    GivenName,
    AltName,
    City,
    IdNumber,
    BirthDate,
    ExpiryDate,
    Height,
    SupportNumber,
    Gender,
    NationalityCode,
}

impl FieldKind {
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::CountryHeader => "country_header",
            FieldKind::Surname => "surname",
            FieldKind::GivenName => "given_name",
            FieldKind::AltName => "alt_name",
            FieldKind::City => "city",
            FieldKind::IdNumber => "id_number",
            FieldKind::BirthDate => "birth_date",
            FieldKind::ExpiryDate => "expiry_date",
            FieldKind::Height => "height",
            FieldKind::SupportNumber => "support_number",
            FieldKind::Gender => "gender",
            FieldKind::NationalityCode => "nationality_code",
        }
    }
}

/// Supplies one realistic string value per `(locale, kind)` request.
///
/// Implementations must never return an empty string for a field the
/// planner marked included.
pub trait ValueProvider {
    fn value(&mut self, locale: LocaleKey, kind: FieldKind) -> Result<String, GenerationError>;
}

/// `fake`-backed provider with its own seeded stream.
#[derive(Debug, Clone)]
pub struct FakerProvider {
    rng: ChaCha8Rng,
}

impl FakerProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn last_name(&mut self, locale: LocaleKey) -> String {
        match locale {
            LocaleKey::EnUs => LastName(EN).fake_with_rng(&mut self.rng),
            LocaleKey::FrFr => LastName(FR_FR).fake_with_rng(&mut self.rng),
            LocaleKey::PtBr => LastName(PT_BR).fake_with_rng(&mut self.rng),
            LocaleKey::ZhCn => LastName(ZH_CN).fake_with_rng(&mut self.rng),
            LocaleKey::ArSa => LastName(AR_SA).fake_with_rng(&mut self.rng),
            LocaleKey::JaJp => LastName(JA_JP).fake_with_rng(&mut self.rng),
        }
    }

    fn first_name(&mut self, locale: LocaleKey) -> String {
        match locale {
            LocaleKey::EnUs => FirstName(EN).fake_with_rng(&mut self.rng),
            LocaleKey::FrFr => FirstName(FR_FR).fake_with_rng(&mut self.rng),
            LocaleKey::PtBr => FirstName(PT_BR).fake_with_rng(&mut self.rng),
            LocaleKey::ZhCn => FirstName(ZH_CN).fake_with_rng(&mut self.rng),
            LocaleKey::ArSa => FirstName(AR_SA).fake_with_rng(&mut self.rng),
            LocaleKey::JaJp => FirstName(JA_JP).fake_with_rng(&mut self.rng),
        }
    }

    fn city_name(&mut self, locale: LocaleKey) -> String {
        match locale {
            LocaleKey::EnUs => CityName(EN).fake_with_rng(&mut self.rng),
            LocaleKey::FrFr => CityName(FR_FR).fake_with_rng(&mut self.rng),
            LocaleKey::PtBr => CityName(PT_BR).fake_with_rng(&mut self.rng),
            LocaleKey::ZhCn => CityName(ZH_CN).fake_with_rng(&mut self.rng),
            LocaleKey::ArSa => CityName(AR_SA).fake_with_rng(&mut self.rng),
            LocaleKey::JaJp => CityName(JA_JP).fake_with_rng(&mut self.rng),
        }
    }

    fn city(&mut self, locale: LocaleKey) -> String {
        // City names carry generator artifacts worth stripping; retry a
        // few times before falling back to the raw uppercase name.
        for _ in 0..3 {
            let raw = self.city_name(locale).to_uppercase();
            let cleaned = raw
                .replace("VILLE", "")
                .replace("CITY", "")
                .replace("SAN ", "")
                .trim()
                .to_string();
            if !cleaned.is_empty() {
                return truncate_chars(&cleaned, 20);
            }
        }
        truncate_chars(&self.city_name(locale).to_uppercase(), 20)
    }

    fn id_number(&mut self) -> String {
        match self.rng.random_range(0..3) {
            0 => self.digits(12),
            1 => {
                let year = self.rng.random_range(50..=99);
                let month = self.rng.random_range(1..=12);
                let day = self.rng.random_range(1..=28);
                let suffix = self.digits(5);
                format!("{year:02}{month:02}{day:02}T{suffix}")
            }
            _ => {
                let mut out = String::new();
                out.push(self.letter());
                out.push(self.digit());
                for _ in 0..3 {
                    out.push(self.letter());
                }
                out.push(self.digit());
                out.push(self.digit());
                out.push(self.letter());
                out.push(self.digit());
                out
            }
        }
    }

    fn birth_date(&mut self) -> String {
        let age = self.rng.random_range(18..=80);
        let year = BASE_YEAR - age;
        let month = self.rng.random_range(1..=12);
        let day = self.rng.random_range(1..=28);
        if self.rng.random_bool(0.5) {
            format!("{day:02}.{month:02}.{year}")
        } else {
            format!("{day:02} {month:02} {year}")
        }
    }

    fn expiry_date(&mut self) -> String {
        let issue_year = 1980 + self.rng.random_range(18..=50);
        let expiry_year = issue_year + 15;
        let month = self.rng.random_range(1..=12);
        let day = self.rng.random_range(1..=28);
        format!("{day:02} {month:02} {expiry_year}")
    }

    fn height(&mut self) -> String {
        let meters = self.rng.random_range(1..=2);
        let cm = self.rng.random_range(50..=99);
        let separator = if self.rng.random_bool(0.5) { " " } else { "" };
        let unit = if self.rng.random_bool(0.5) { "m" } else { "M" };
        format!("{meters}{separator}{cm}{unit}")
    }

    fn digits(&mut self, count: usize) -> String {
        (0..count).map(|_| self.digit()).collect()
    }

    fn digit(&mut self) -> char {
        char::from(b'0' + self.rng.random_range(0..10) as u8)
    }

    fn letter(&mut self) -> char {
        char::from(b'A' + self.rng.random_range(0..26) as u8)
    }
}

impl ValueProvider for FakerProvider {
    fn value(&mut self, locale: LocaleKey, kind: FieldKind) -> Result<String, GenerationError> {
        let value = match kind {
            FieldKind::CountryHeader => choose(&mut self.rng, HEADER_VARIANTS),
            FieldKind::Surname | FieldKind::AltName => self.last_name(locale).to_uppercase(),
            FieldKind::GivenName => self.first_name(locale).to_uppercase(),
            FieldKind::City => self.city(locale),
            FieldKind::IdNumber => self.id_number(),
            FieldKind::BirthDate => self.birth_date(),
            FieldKind::ExpiryDate => self.expiry_date(),
            FieldKind::Height => self.height(),
            FieldKind::SupportNumber => self.rng.random_range(100_000..=999_999).to_string(),
            FieldKind::Gender => choose(&mut self.rng, &["M", "F"]),
            FieldKind::NationalityCode => choose(&mut self.rng, NATIONALITY_CODES),
        };

        if value.is_empty() {
            return Err(GenerationError::provider(
                kind.name(),
                format!("empty value for locale '{locale}'"),
            ));
        }
        Ok(value)
    }
}

fn choose(rng: &mut ChaCha8Rng, options: &[&str]) -> String {
    options
        .choose(rng)
        .map(|value| (*value).to_string())
        .unwrap_or_default()
}

fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}
