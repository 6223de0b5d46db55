use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Candidate registration submitted by the signup flow.
///
/// Values are kept exactly as supplied: no trimming or case-folding happens
/// before the availability checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub verification_url: String,
}

impl RegistrationRequest {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        verification_url: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            verification_url: verification_url.into(),
        }
    }
}

/// Existing account as seen by the account store (read-only here)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
