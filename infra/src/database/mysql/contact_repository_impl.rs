//! MySQL implementation of the ContactRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use wl_core::domain::entities::recipient::{ContactNumber, ContactNumberType, NumberLocation};
use wl_core::errors::DomainError;
use wl_core::repositories::ContactRepository;

use super::{column, query_error};

// Store order is id order; the first row is the client's dialing address.
const GET_NUMBERS: &str = r#"
    SELECT id, contact_id, number, type, location
    FROM contact_numbers
    WHERE contact_id = ?
    ORDER BY id ASC
"#;

/// Reads the host platform's `contact_numbers` table
pub struct MySqlContactRepository {
    pool: MySqlPool,
}

impl MySqlContactRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_number(row: &MySqlRow) -> Result<ContactNumber, DomainError> {
        let number_type: String = column(row, "type")?;
        let location: String = column(row, "location")?;

        Ok(ContactNumber {
            id: column(row, "id")?,
            contact_id: column(row, "contact_id")?,
            number: column(row, "number")?,
            number_type: ContactNumberType::parse(&number_type).ok_or_else(|| {
                DomainError::Internal {
                    message: format!("Unknown contact number type: {}", number_type),
                }
            })?,
            location: NumberLocation::parse(&location).ok_or_else(|| DomainError::Internal {
                message: format!("Unknown contact number location: {}", location),
            })?,
        })
    }
}

#[async_trait]
impl ContactRepository for MySqlContactRepository {
    async fn get_numbers(&self, contact_id: u64) -> Result<Vec<ContactNumber>, DomainError> {
        let rows = sqlx::query(GET_NUMBERS)
            .bind(contact_id)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error("get contact numbers"))?;

        rows.iter().map(Self::row_to_number).collect()
    }
}
