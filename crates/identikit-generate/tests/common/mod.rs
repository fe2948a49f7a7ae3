use identikit_generate::{FieldKind, GenerationError, LocaleKey, ValueProvider};

/// Provider returning fixed values, so replayed draw sequences pin the
/// full record text.
pub struct ScriptedProvider;

impl ValueProvider for ScriptedProvider {
    fn value(&mut self, _locale: LocaleKey, kind: FieldKind) -> Result<String, GenerationError> {
        let value = match kind {
            FieldKind::CountryHeader => "RÉPUBLIQUE FRANÇAISE",
            FieldKind::Surname => "MARTIN",
            FieldKind::GivenName => "CAMILLE",
            FieldKind::AltName => "BERNARD",
            FieldKind::City => "LYON",
            FieldKind::IdNumber => "123456789012",
            FieldKind::BirthDate => "01.02.1973",
            FieldKind::ExpiryDate => "14 03 2043",
            FieldKind::Height => "1 75m",
            FieldKind::SupportNumber => "654321",
            FieldKind::Gender => "F",
            FieldKind::NationalityCode => "FRA",
        };
        Ok(value.to_string())
    }
}

/// Provider that always fails, for exercising per-record retry handling.
pub struct FailingProvider;

impl ValueProvider for FailingProvider {
    fn value(&mut self, _locale: LocaleKey, kind: FieldKind) -> Result<String, GenerationError> {
        Err(GenerationError::provider(kind.name(), "scripted failure"))
    }
}
