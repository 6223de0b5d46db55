use crate::auth::application::ports::outgoing::{AccountQuery, AccountQueryError};

/// Confirms that no existing account already claims a username or an email.
///
/// Values are compared exactly as given, so `Alice` and `alice` are two
/// different usernames as far as this check is concerned.
#[derive(Debug, Clone)]
pub struct AvailabilityChecker<Q>
where
    Q: AccountQuery,
{
    query: Q,
}

impl<Q> AvailabilityChecker<Q>
where
    Q: AccountQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }

    pub async fn username_available(&self, username: &str) -> Result<bool, AccountQueryError> {
        Ok(self.query.find_by_username(username).await?.is_none())
    }

    pub async fn email_available(&self, email: &str) -> Result<bool, AccountQueryError> {
        Ok(self.query.find_by_email(email).await?.is_none())
    }
}
