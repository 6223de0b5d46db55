use async_trait::async_trait;

use crate::email::application::domain::MailMessage;

/// Opaque dispatch failure.
///
/// Carries no detail on purpose: the transport cause is logged by the
/// dispatcher and only this user-safe text ever reaches the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Could not send verification email; please check email address")]
pub struct DispatchError;

#[async_trait]
pub trait MailDispatcher: Send + Sync {
    async fn send(&self, message: &MailMessage) -> Result<(), DispatchError>;
}
