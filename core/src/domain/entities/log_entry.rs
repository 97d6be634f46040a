//! Delivery log entry: one append-only record per attempt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::recipient::UserId;

/// Direction of a logged message. Messages dispatched by this messenger are
/// always `Output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogCategory {
    Output,
}

impl LogCategory {
    /// Convert to string representation for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Output => "output",
        }
    }

    /// Parse from string representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "output" => Some(Self::Output),
            _ => None,
        }
    }
}

/// A delivery log record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    /// User the message was addressed to
    pub user_id: UserId,
    pub category: LogCategory,
    /// Serialized delivery result
    pub payload: String,
    pub success: bool,
    pub created_at: DateTime<Utc>,
}

impl LogEntry {
    pub fn new(user_id: UserId, category: LogCategory, payload: impl Into<String>, success: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            category,
            payload: payload.into(),
            success,
            created_at: Utc::now(),
        }
    }
}
