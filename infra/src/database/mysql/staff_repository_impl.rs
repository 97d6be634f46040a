//! MySQL implementation of the StaffRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use wl_core::domain::entities::recipient::{StaffMember, UserId};
use wl_core::errors::DomainError;
use wl_core::repositories::StaffRepository;

use super::{column, query_error};

const FIND_BY_USER_ID: &str = r#"
    SELECT id, user_id, first_name, last_name, number_mobile
    FROM staff
    WHERE user_id = ?
    LIMIT 1
"#;

/// Reads the host platform's `staff` table
pub struct MySqlStaffRepository {
    pool: MySqlPool,
}

impl MySqlStaffRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_staff(row: &MySqlRow) -> Result<StaffMember, DomainError> {
        Ok(StaffMember {
            id: column(row, "id")?,
            user_id: UserId::new(column(row, "user_id")?),
            first_name: column(row, "first_name")?,
            last_name: column(row, "last_name")?,
            number_mobile: column(row, "number_mobile")?,
        })
    }
}

#[async_trait]
impl StaffRepository for MySqlStaffRepository {
    async fn find_by_user_id(&self, user_id: UserId) -> Result<Option<StaffMember>, DomainError> {
        let row = sqlx::query(FIND_BY_USER_ID)
            .bind(user_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("find staff by user id"))?;

        row.as_ref().map(Self::row_to_staff).transpose()
    }
}
