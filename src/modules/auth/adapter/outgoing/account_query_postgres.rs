use super::sea_orm_entity::accounts::{
    Column as AccountColumn, Entity as AccountEntity, Model as AccountModel,
};
use crate::auth::application::domain::entities::AccountRecord;
use crate::auth::application::ports::outgoing::{AccountQuery, AccountQueryError};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AccountQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Helper to map SeaORM model to AccountRecord
    fn map_to_record(model: AccountModel) -> AccountRecord {
        AccountRecord {
            id: model.id,
            username: model.username,
            email: model.email,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        }
    }

    async fn find_one_by(
        &self,
        column: AccountColumn,
        value: &str,
    ) -> Result<Option<AccountRecord>, AccountQueryError> {
        let account = AccountEntity::find()
            .filter(column.eq(value))
            .one(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?;

        Ok(account.map(Self::map_to_record))
    }
}

#[async_trait]
impl AccountQuery for AccountQueryPostgres {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AccountRecord>, AccountQueryError> {
        self.find_one_by(AccountColumn::Username, username).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AccountRecord>, AccountQueryError> {
        self.find_one_by(AccountColumn::Email, email).await
    }
}
