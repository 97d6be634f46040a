use serde::{Deserialize, Serialize};
use wl_core::MetaField;

/// Filtered messenger settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetMetaResponse {
    pub fields: Vec<MetaField>,
    /// Whether both `sid` and `apikey` were supplied
    pub credentials_complete: bool,
}
