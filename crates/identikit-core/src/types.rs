use schemars::JsonSchema;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeTuple, Serializer};

/// Document layout selected for one generated record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocFormat {
    Simple,
    Bilingual,
}

impl DocFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            DocFormat::Simple => "simple",
            DocFormat::Bilingual => "bilingual",
        }
    }
}

impl std::fmt::Display for DocFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity categories annotated in generated text.
///
/// `label()` yields the exact tag strings the training datasets carry;
/// given names are indexed (`Surname_1`, `Surname_2`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Country,
    DocType,
    Dni,
    Nationality,
    Name,
    AltName,
    GivenName(usize),
    Gender,
    BirthDate,
    BirthPlace,
    Height,
    ValidityDate,
    SupportNumber,
}

impl EntityKind {
    pub fn label(&self) -> String {
        match self {
            EntityKind::Country => "Country".to_string(),
            EntityKind::DocType => "DOC_TYPE".to_string(),
            EntityKind::Dni => "DNI".to_string(),
            EntityKind::Nationality => "Nationality".to_string(),
            EntityKind::Name => "Name".to_string(),
            EntityKind::AltName => "Alt_name".to_string(),
            EntityKind::GivenName(index) => format!("Surname_{index}"),
            EntityKind::Gender => "Gender".to_string(),
            EntityKind::BirthDate => "Date of birthday".to_string(),
            EntityKind::BirthPlace => "Birth_place".to_string(),
            EntityKind::Height => "Height".to_string(),
            EntityKind::ValidityDate => "Validity_date".to_string(),
            EntityKind::SupportNumber => "Support_number".to_string(),
        }
    }
}

/// One annotated value segment within a record's text.
///
/// `start` and `end` are zero-based character offsets into the text,
/// half-open. Invariant: the characters at `[start, end)` equal `value`,
/// exactly, for the lifetime of the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub label: String,
    pub value: String,
}

impl EntitySpan {
    pub fn new(start: usize, end: usize, kind: EntityKind, value: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: kind.label(),
            value: value.into(),
        }
    }
}

// Spans are persisted as `[start, end, label, value]` tuples, the shape
// downstream annotation tooling consumes.
impl Serialize for EntitySpan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(4)?;
        tuple.serialize_element(&self.start)?;
        tuple.serialize_element(&self.end)?;
        tuple.serialize_element(&self.label)?;
        tuple.serialize_element(&self.value)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for EntitySpan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (start, end, label, value) = <(usize, usize, String, String)>::deserialize(deserializer)?;
        Ok(Self {
            start,
            end,
            label,
            value,
        })
    }
}

/// One generated record: rendered text plus its ordered entity spans.
///
/// Records are immutable after emission and independent of one another.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GeneratedRecord {
    pub text: String,
    pub entities: Vec<EntitySpan>,
}
