use std::env;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MailgunConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Credentials and endpoint settings for the Mailgun messages API.
///
/// Loaded once at startup and treated as immutable afterwards. The API key is
/// redacted from the `Debug` output so the config can be logged safely.
#[derive(Clone)]
pub struct MailgunConfig {
    api_key: String,
    domain: String,
    api_base: String,
    timeout: Duration,
}

impl fmt::Debug for MailgunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailgunConfig")
            .field("api_key", &"<redacted>")
            .field("domain", &self.domain)
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl MailgunConfig {
    pub const DEFAULT_API_BASE: &'static str = "https://api.mailgun.net";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn new(api_key: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            domain: domain.into(),
            api_base: Self::DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load Mailgun configuration from environment variables
    pub fn from_env() -> Result<Self, MailgunConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, MailgunConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(MailgunConfigError::Missing(key))
        };

        let api_key = required("MAILGUN_API_KEY")?;
        let domain = required("MAILGUN_DOMAIN")?;

        let mut config = Self::new(api_key, domain);

        if let Some(api_base) = lookup("MAILGUN_API_BASE").filter(|v| !v.trim().is_empty()) {
            config = config.with_api_base(api_base);
        }

        if let Some(raw) = lookup("MAILGUN_TIMEOUT_SECS") {
            let secs = raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(MailgunConfigError::Invalid {
                    key: "MAILGUN_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `<api_base>/v3/<domain>/messages`
    pub fn messages_url(&self) -> String {
        format!(
            "{}/v3/{}/messages",
            self.api_base.trim_end_matches('/'),
            self.domain
        )
    }
}
