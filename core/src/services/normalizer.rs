//! Dialing address normalization for a single national numbering plan.

use wl_shared::phone::strip_spaces;

/// Default country calling code (Tanzania)
pub const DEFAULT_COUNTRY_CODE: &str = "255";

/// Rewrites locally formatted numbers into international dialing form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressNormalizer {
    country_code: String,
}

impl Default for AddressNormalizer {
    fn default() -> Self {
        Self::tanzania()
    }
}

impl AddressNormalizer {
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
        }
    }

    pub fn tanzania() -> Self {
        Self::new(DEFAULT_COUNTRY_CODE)
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Remove spaces, then swap a single leading `0` for the country code.
    ///
    /// Never rejects input: anything without a leading `0` passes through.
    pub fn normalize(&self, raw: &str) -> String {
        let compact = strip_spaces(raw);
        match compact.strip_prefix('0') {
            Some(rest) => format!("{}{}", self.country_code, rest),
            None => compact,
        }
    }
}
