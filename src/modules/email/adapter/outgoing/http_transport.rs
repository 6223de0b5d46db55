use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Request timed out")]
    Timeout,

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

/// Form-encoded POST, the only HTTP call the mail provider needs.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_form(
        &self,
        url: &str,
        headers: HeaderMap,
        form: &[(&str, &str)],
    ) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl HttpTransport for reqwest::Client {
    async fn post_form(
        &self,
        url: &str,
        headers: HeaderMap,
        form: &[(&str, &str)],
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .post(url)
            .headers(headers)
            .form(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        // The body is only used for operator logs, an unreadable one is not fatal
        let body = response.text().await.unwrap_or_default();

        Ok(TransportResponse { status, body })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::RequestFailed(err.to_string())
    }
}
