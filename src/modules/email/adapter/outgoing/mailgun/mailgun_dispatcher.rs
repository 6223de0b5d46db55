use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tracing::{debug, error, info};

use super::mailgun_config::MailgunConfig;
use crate::email::adapter::outgoing::http_transport::HttpTransport;
use crate::email::application::domain::{mask_address, MailMessage};
use crate::email::application::ports::outgoing::{DispatchError, MailDispatcher};

/// Sends composed messages through the Mailgun messages API.
pub struct MailgunDispatcher {
    transport: Box<dyn HttpTransport>,
    config: MailgunConfig,
}

impl MailgunDispatcher {
    pub fn new_with_transport(transport: Box<dyn HttpTransport>, config: MailgunConfig) -> Self {
        Self { transport, config }
    }

    pub fn new(config: MailgunConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self::new_with_transport(Box::new(client), config))
    }

    /// `Basic base64("api:<api_key>")`
    fn authorization(&self) -> Result<HeaderValue, DispatchError> {
        let credentials = STANDARD.encode(format!("api:{}", self.config.api_key()));

        let mut value = HeaderValue::from_str(&format!("Basic {credentials}")).map_err(|e| {
            error!(error = %e, "Mailgun credentials do not form a valid header");
            DispatchError
        })?;
        value.set_sensitive(true);

        Ok(value)
    }
}

#[async_trait]
impl MailDispatcher for MailgunDispatcher {
    async fn send(&self, message: &MailMessage) -> Result<(), DispatchError> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.authorization()?);

        let response = self
            .transport
            .post_form(&self.config.messages_url(), headers, &message.form_fields())
            .await;

        let masked_to = mask_address(&message.to);

        match response {
            Ok(response) if response.status.is_success() => {
                debug!(to = %message.to, "Mailgun recipient");
                info!(to = %masked_to, status = %response.status, "Verification email accepted by Mailgun");
                Ok(())
            }
            Ok(response) => {
                error!(
                    to = %masked_to,
                    status = %response.status,
                    body = %response.body,
                    "Mailgun rejected verification email"
                );
                Err(DispatchError)
            }
            Err(e) => {
                error!(to = %masked_to, error = %e, "Verification email could not be sent");
                Err(DispatchError)
            }
        }
    }
}
