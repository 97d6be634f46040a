//! Configuration for the messenger service

use crate::services::normalizer::DEFAULT_COUNTRY_CODE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessengerConfig {
    /// Calling code that replaces a leading `0` in local numbers
    pub country_code: String,
}

impl Default for MessengerConfig {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }
}

impl MessengerConfig {
    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }
}
