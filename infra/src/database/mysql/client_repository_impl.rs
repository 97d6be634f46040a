//! MySQL implementation of the ClientRepository trait.
//!
//! A client's name and contact id come from its primary contact.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use wl_core::domain::entities::recipient::{Client, UserId};
use wl_core::errors::DomainError;
use wl_core::repositories::ClientRepository;

use super::{column, query_error};

const FIND_BY_USER_ID: &str = r#"
    SELECT clients.id, clients.user_id, contacts.id AS contact_id,
           contacts.first_name, contacts.last_name
    FROM clients
    INNER JOIN contacts
        ON contacts.client_id = clients.id AND contacts.contact_type = 'primary'
    WHERE clients.user_id = ?
    LIMIT 1
"#;

/// Reads the host platform's `clients` and `contacts` tables
pub struct MySqlClientRepository {
    pool: MySqlPool,
}

impl MySqlClientRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_client(row: &MySqlRow) -> Result<Client, DomainError> {
        Ok(Client {
            id: column(row, "id")?,
            user_id: UserId::new(column(row, "user_id")?),
            contact_id: column(row, "contact_id")?,
            first_name: column(row, "first_name")?,
            last_name: column(row, "last_name")?,
        })
    }
}

#[async_trait]
impl ClientRepository for MySqlClientRepository {
    async fn find_by_user_id(&self, user_id: UserId) -> Result<Option<Client>, DomainError> {
        let row = sqlx::query(FIND_BY_USER_ID)
            .bind(user_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("find client by user id"))?;

        row.as_ref().map(Self::row_to_client).transpose()
    }
}
