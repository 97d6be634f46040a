//! Messenger meta fields stored by the host platform.

use serde::{Deserialize, Serialize};

/// Meta key holding the gateway sender id
pub const SENDER_ID_KEY: &str = "sid";

/// Meta key holding the gateway API key
pub const API_KEY_KEY: &str = "apikey";

/// Keys this messenger persists
pub const META_FIELDS: [&str; 2] = [SENDER_ID_KEY, API_KEY_KEY];

/// Keys the host should store encrypted. None at present.
pub const ENCRYPTED_FIELDS: [&str; 0] = [];

/// One persisted messenger setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaField {
    pub key: String,
    pub value: String,
    pub encrypted: bool,
}

impl MetaField {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let encrypted = ENCRYPTED_FIELDS.contains(&key.as_str());
        Self {
            key,
            value: value.into(),
            encrypted,
        }
    }
}
