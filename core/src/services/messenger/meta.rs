//! Messenger meta fields: which settings the host persists, and how gateway
//! credentials are rebuilt from them.

use crate::domain::entities::delivery::ProviderCredentials;
use crate::domain::entities::meta::{MetaField, API_KEY_KEY, META_FIELDS, SENDER_ID_KEY};
use crate::errors::{DomainError, DomainResult};

/// Filter submitted settings down to the persisted meta fields
///
/// Keeps `sid` and `apikey` in input order and drops everything else.
pub fn set_meta<I, K, V>(vars: I) -> Vec<MetaField>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    vars.into_iter()
        .filter(|(key, _)| META_FIELDS.contains(&key.as_ref()))
        .map(|(key, value)| MetaField::new(key.as_ref(), value))
        .collect()
}

impl ProviderCredentials {
    /// Rebuild credentials from stored meta fields
    ///
    /// # Errors
    /// `DomainError::Validation` when `sid` or `apikey` is missing.
    pub fn from_meta(fields: &[MetaField]) -> DomainResult<Self> {
        let sender_id = find(fields, SENDER_ID_KEY)?;
        let api_key = find(fields, API_KEY_KEY)?;
        Ok(Self::new(sender_id, api_key))
    }
}

fn find<'a>(fields: &'a [MetaField], key: &str) -> DomainResult<&'a str> {
    fields
        .iter()
        .find(|field| field.key == key)
        .map(|field| field.value.as_str())
        .ok_or_else(|| DomainError::Validation {
            message: format!("Missing messenger setting: {}", key),
        })
}
