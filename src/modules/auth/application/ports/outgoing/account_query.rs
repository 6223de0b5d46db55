// application/ports/outgoing/account_query.rs
use async_trait::async_trait;

use crate::auth::application::domain::entities::AccountRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Exact-match lookups against the account store.
#[async_trait]
pub trait AccountQuery: Send + Sync {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AccountRecord>, AccountQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<AccountRecord>, AccountQueryError>;
}
