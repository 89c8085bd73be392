//! # EEA Membership
//!
//! Country codes whose nationals and residents fall under the harmonised
//! term rules: the 27 EU member states, the three EFTA states that are
//! party to the EEA agreement, and the United Kingdom, which applied the
//! harmonised terms throughout the period these rules cover.

/// ISO 3166-1 alpha-2 codes, lower case, sorted.
pub const EEA_COUNTRIES: &[&str] = &[
    "at", "be", "bg", "cy", "cz", "de", "dk", "ee", "es", "fi", "fr", "gb", "gr", "hr", "hu",
    "ie", "is", "it", "li", "lt", "lu", "lv", "mt", "nl", "no", "pl", "pt", "ro", "se", "si",
    "sk",
];

/// Whether `code` names an EEA state. Case-insensitive; `uk` is accepted
/// as an alias of `gb`.
pub fn is_eea_country(code: &str) -> bool {
    let code = code.trim().to_ascii_lowercase();
    let code = if code == "uk" { "gb" } else { code.as_str() };
    EEA_COUNTRIES.binary_search(&code).is_ok()
}
