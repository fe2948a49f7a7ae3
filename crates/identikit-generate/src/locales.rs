use std::fmt;

/// Locales the value provider can draw realistic data from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LocaleKey {
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "fr_FR")]
    FrFr,
    #[serde(rename = "pt_BR")]
    PtBr,
    #[serde(rename = "zh_CN")]
    ZhCn,
    #[serde(rename = "ar_SA")]
    ArSa,
    #[serde(rename = "ja_JP")]
    JaJp,
}

/// Locales used when the caller does not configure a set.
pub const DEFAULT_LOCALES: &[LocaleKey] = &[LocaleKey::FrFr, LocaleKey::PtBr, LocaleKey::EnUs];

impl LocaleKey {
    pub const ALL: &'static [LocaleKey] = &[
        LocaleKey::EnUs,
        LocaleKey::FrFr,
        LocaleKey::PtBr,
        LocaleKey::ZhCn,
        LocaleKey::ArSa,
        LocaleKey::JaJp,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en_US" => Some(Self::EnUs),
            "fr_FR" => Some(Self::FrFr),
            "pt_BR" => Some(Self::PtBr),
            "zh_CN" => Some(Self::ZhCn),
            "ar_SA" => Some(Self::ArSa),
            "ja_JP" => Some(Self::JaJp),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::FrFr => "fr_FR",
            Self::PtBr => "pt_BR",
            Self::ZhCn => "zh_CN",
            Self::ArSa => "ar_SA",
            Self::JaJp => "ja_JP",
        }
    }

    /// Human-readable language name, for locale listings.
    pub fn language_name(self) -> &'static str {
        match self {
            Self::EnUs => "English (US)",
            Self::FrFr => "French",
            Self::PtBr => "Portuguese (Brazil)",
            Self::ZhCn => "Chinese",
            Self::ArSa => "Arabic (Saudi Arabia)",
            Self::JaJp => "Japanese",
        }
    }
}

impl fmt::Display for LocaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
