use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::auth::application::domain::entities::RegistrationRequest;
use crate::auth::application::ports::outgoing::{AccountQuery, AccountQueryError};
use crate::auth::application::services::AvailabilityChecker;
use crate::email::application::domain::mask_address;
use crate::email::application::ports::outgoing::{DispatchError, MailDispatcher};
use crate::email::application::services::verification_email;

// ============================================================================
// Registration Errors
// ============================================================================

/// Why a registration was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationFailure {
    UsernameTaken,
    EmailTaken,
    DispatchFailed,
}

impl RegistrationFailure {
    /// Human-readable reason shown to the user
    pub fn message(self) -> &'static str {
        match self {
            Self::UsernameTaken => "Username exists",
            Self::EmailTaken => "Email already used",
            Self::DispatchFailed => "Could not send verification email; please check email address",
        }
    }

    /// Stable code for programmatic handling
    pub fn code(self) -> &'static str {
        match self {
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::DispatchFailed => "VERIFICATION_EMAIL_FAILED",
        }
    }
}

/// The single rejection category for registration verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{}", .cause.message())]
pub struct InvalidRegistration {
    cause: RegistrationFailure,
}

impl InvalidRegistration {
    pub fn new(cause: RegistrationFailure) -> Self {
        Self { cause }
    }

    pub fn cause(&self) -> RegistrationFailure {
        self.cause
    }

    pub fn code(&self) -> &'static str {
        self.cause.code()
    }

    pub fn message(&self) -> &'static str {
        self.cause.message()
    }
}

impl From<RegistrationFailure> for InvalidRegistration {
    fn from(cause: RegistrationFailure) -> Self {
        Self::new(cause)
    }
}

impl From<DispatchError> for InvalidRegistration {
    fn from(_: DispatchError) -> Self {
        Self::new(RegistrationFailure::DispatchFailed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyRegistrationError {
    #[error(transparent)]
    Invalid(#[from] InvalidRegistration),

    /// Uniqueness could not be confirmed, so nothing was sent
    #[error("Account lookup failed: {0}")]
    AccountLookupFailed(#[from] AccountQueryError),
}

// ============================================================================
// Output
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyRegistrationOutput {
    pub username: String,
    pub email: String,
    pub message: String,
}

// ============================================================================
// Use Case
// ============================================================================

#[async_trait]
pub trait IVerifyRegistrationUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RegistrationRequest,
    ) -> Result<VerifyRegistrationOutput, VerifyRegistrationError>;
}

/// Checks that a candidate registration is unclaimed and sends its verification email.
///
/// Steps run strictly in order and stop at the first failure:
/// 1. username availability
/// 2. email availability
/// 3. compose and dispatch the verification email
///
/// The account store is only read. Each successful call sends a new email.
#[derive(Clone)]
pub struct VerifyRegistrationUseCase<Q>
where
    Q: AccountQuery,
{
    checker: AvailabilityChecker<Q>,
    dispatcher: Arc<dyn MailDispatcher + Send + Sync>,
}

impl<Q> VerifyRegistrationUseCase<Q>
where
    Q: AccountQuery,
{
    pub fn new(query: Q, dispatcher: Arc<dyn MailDispatcher + Send + Sync>) -> Self {
        Self {
            checker: AvailabilityChecker::new(query),
            dispatcher,
        }
    }
}

#[async_trait]
impl<Q> IVerifyRegistrationUseCase for VerifyRegistrationUseCase<Q>
where
    Q: AccountQuery,
{
    async fn execute(
        &self,
        request: RegistrationRequest,
    ) -> Result<VerifyRegistrationOutput, VerifyRegistrationError> {
        // Start -> UsernameChecked
        if !self.checker.username_available(&request.username).await? {
            warn!(username = %request.username, "Registration rejected: username exists");
            return Err(InvalidRegistration::new(RegistrationFailure::UsernameTaken).into());
        }
        debug!(username = %request.username, "Username available");

        // UsernameChecked -> EmailChecked
        if !self.checker.email_available(&request.email).await? {
            warn!(email = %mask_address(&request.email), "Registration rejected: email already used");
            return Err(InvalidRegistration::new(RegistrationFailure::EmailTaken).into());
        }
        debug!(email = %request.email, "Email available");

        // EmailChecked -> EmailSent
        let message = verification_email::compose(&request);
        self.dispatcher
            .send(&message)
            .await
            .map_err(InvalidRegistration::from)?;

        info!(
            username = %request.username,
            email = %mask_address(&request.email),
            "Verification email sent"
        );

        Ok(VerifyRegistrationOutput {
            username: request.username,
            email: request.email,
            message: "Verification email sent. Please check your inbox to continue registration."
                .to_string(),
        })
    }
}
