//! Field identifiers shared between the default configuration and the
//! document layouts.

pub const TWO_LETTER_CODE: &str = "two_letter_code";
pub const SIGNATURE_NOISE: &str = "signature_noise";
pub const SOCIAL_STATUS: &str = "social_status";
pub const HYPHENATED_ALT_NAME: &str = "hyphenated_alt_name";
pub const BIRTH_PLACE: &str = "birth_place";
pub const HEIGHT: &str = "height";
pub const SIGNATURE_LABEL: &str = "signature_label";

pub const ALT_NAME_MARRIED: &str = "alt_name_married";
pub const SUPPORT_NUMBER: &str = "support_number";
pub const EXPIRY_DATE: &str = "expiry_date";

/// Support-number noise variants that require extra resolution at
/// assembly time.
pub const SUPPORT_NOISE_TWO_LETTER: &str = "random_2letter";
pub const SUPPORT_NOISE_DIGITS: &str = "random_digits";
