/// One composed email, built per registration and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl MailMessage {
    /// Form fields in the order the provider expects them.
    pub fn form_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("from", self.from.as_str()),
            ("to", self.to.as_str()),
            ("subject", self.subject.as_str()),
            ("text", self.text.as_str()),
            ("html", self.html.as_str()),
        ]
    }
}

/// Address shortened for info-level logs: `alice@x.com` becomes `a***@x.com`.
pub fn mask_address(address: &str) -> String {
    match address.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{first}***@{domain}")
        }
        None => "***".to_string(),
    }
}
