//! MySQL implementation of the DeliveryLogRepository trait.
//!
//! Rows are append-only; the pool serializes concurrent writers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use wl_core::domain::entities::log_entry::{LogCategory, LogEntry};
use wl_core::domain::entities::recipient::UserId;
use wl_core::errors::DomainError;
use wl_core::repositories::DeliveryLogRepository;

use super::{column, query_error};

/// Schema of the delivery log table
pub const CREATE_MESSENGER_LOGS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS messenger_logs (
        id CHAR(36) NOT NULL PRIMARY KEY,
        to_user_id INT UNSIGNED NOT NULL,
        direction ENUM('input', 'output') NOT NULL DEFAULT 'output',
        data MEDIUMTEXT NOT NULL,
        success TINYINT(1) NOT NULL DEFAULT 0,
        date_sent DATETIME(6) NOT NULL,
        INDEX idx_messenger_logs_user_date (to_user_id, date_sent)
    )
"#;

const INSERT_ENTRY: &str = r#"
    INSERT INTO messenger_logs (id, to_user_id, direction, data, success, date_sent)
    VALUES (?, ?, ?, ?, ?, ?)
"#;

const FIND_BY_USER: &str = r#"
    SELECT id, to_user_id, direction, data, success, date_sent
    FROM messenger_logs
    WHERE to_user_id = ?
    ORDER BY date_sent DESC
    LIMIT ?
"#;

/// Writes delivery attempts to `messenger_logs`
pub struct MySqlDeliveryLogRepository {
    pool: MySqlPool,
}

impl MySqlDeliveryLogRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_entry(row: &MySqlRow) -> Result<LogEntry, DomainError> {
        let id: String = column(row, "id")?;
        let direction: String = column(row, "direction")?;
        let to_user_id: u64 = column(row, "to_user_id")?;
        let created_at: DateTime<Utc> = column(row, "date_sent")?;

        Ok(LogEntry {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid UUID: {}", e),
            })?,
            user_id: UserId::new(to_user_id),
            category: LogCategory::parse(&direction).ok_or_else(|| DomainError::Internal {
                message: format!("Unknown log direction: {}", direction),
            })?,
            payload: column(row, "data")?,
            success: column(row, "success")?,
            created_at,
        })
    }
}

#[async_trait]
impl DeliveryLogRepository for MySqlDeliveryLogRepository {
    async fn append(&self, entry: &LogEntry) -> Result<(), DomainError> {
        sqlx::query(INSERT_ENTRY)
            .bind(entry.id.to_string())
            .bind(entry.user_id.value())
            .bind(entry.category.as_str())
            .bind(&entry.payload)
            .bind(entry.success)
            .bind(entry.created_at)
            .execute(&self.pool)
            .await
            .map_err(query_error("append delivery log entry"))?;

        Ok(())
    }

    async fn find_by_user(&self, user_id: UserId, limit: usize) -> Result<Vec<LogEntry>, DomainError> {
        let rows = sqlx::query(FIND_BY_USER)
            .bind(user_id.value())
            .bind(limit as u64)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error("find delivery log entries"))?;

        rows.iter().map(Self::row_to_entry).collect()
    }
}
