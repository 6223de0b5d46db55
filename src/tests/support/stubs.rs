use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AccountRecord, RegistrationRequest};
use crate::auth::application::ports::outgoing::{AccountQuery, AccountQueryError};
use crate::auth::application::use_cases::verify_registration::{
    IVerifyRegistrationUseCase, VerifyRegistrationError, VerifyRegistrationOutput,
};
use crate::email::adapter::outgoing::http_transport::{
    HttpTransport, TransportError, TransportResponse,
};

// ============================================================================
// Account store
// ============================================================================

/// Account store backed by a fixed list, recording every lookup as
/// `username:<value>` or `email:<value>`.
#[derive(Clone, Default)]
pub struct InMemoryAccountQuery {
    accounts: Vec<AccountRecord>,
    failure: Option<AccountQueryError>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl InMemoryAccountQuery {
    pub fn with_account(mut self, username: &str, email: &str) -> Self {
        self.accounts.push(AccountRecord {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        });
        self
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(AccountQueryError::DatabaseError(message.to_string())),
            ..Self::default()
        }
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    fn lookup<F>(&self, label: String, matches: F) -> Result<Option<AccountRecord>, AccountQueryError>
    where
        F: Fn(&AccountRecord) -> bool,
    {
        self.lookups.lock().unwrap().push(label);

        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(self.accounts.iter().find(|a| matches(a)).cloned())
    }
}

#[async_trait]
impl AccountQuery for InMemoryAccountQuery {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AccountRecord>, AccountQueryError> {
        self.lookup(format!("username:{username}"), |a| a.username == username)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AccountRecord>, AccountQueryError> {
        self.lookup(format!("email:{email}"), |a| a.email == email)
    }
}

// ============================================================================
// HTTP transport
// ============================================================================

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: HeaderMap,
    pub form: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Transport that stores each request and answers with a canned outcome.
#[derive(Clone)]
pub struct RecordingHttpTransport {
    outcome: Result<TransportResponse, TransportError>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl RecordingHttpTransport {
    pub fn responding(status: StatusCode) -> Self {
        Self {
            outcome: Ok(TransportResponse {
                status,
                body: String::new(),
            }),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(err: TransportError) -> Self {
        Self {
            outcome: Err(err),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_body(mut self, body: &str) -> Self {
        if let Ok(response) = &mut self.outcome {
            response.body = body.to_string();
        }
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for RecordingHttpTransport {
    async fn post_form(
        &self,
        url: &str,
        headers: HeaderMap,
        form: &[(&str, &str)],
    ) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers,
            form: form
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
        self.outcome.clone()
    }
}

// ============================================================================
// Use case
// ============================================================================

/// Verify-registration use case that answers every request with the same result.
#[derive(Clone)]
pub struct StubVerifyRegistrationUseCase {
    result: Result<(), VerifyRegistrationError>,
    received: Arc<Mutex<Vec<RegistrationRequest>>>,
}

impl StubVerifyRegistrationUseCase {
    pub fn succeeding() -> Self {
        Self {
            result: Ok(()),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(err: impl Into<VerifyRegistrationError>) -> Self {
        Self {
            result: Err(err.into()),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn received(&self) -> Vec<RegistrationRequest> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl IVerifyRegistrationUseCase for StubVerifyRegistrationUseCase {
    async fn execute(
        &self,
        request: RegistrationRequest,
    ) -> Result<VerifyRegistrationOutput, VerifyRegistrationError> {
        self.received.lock().unwrap().push(request.clone());

        self.result.clone().map(|()| VerifyRegistrationOutput {
            username: request.username,
            email: request.email,
            message: "Verification email sent. Please check your inbox to continue registration."
                .to_string(),
        })
    }
}
