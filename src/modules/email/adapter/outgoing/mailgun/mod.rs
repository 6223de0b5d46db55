mod mailgun_config;
mod mailgun_dispatcher;

pub use mailgun_config::{MailgunConfig, MailgunConfigError};
pub use mailgun_dispatcher::MailgunDispatcher;
