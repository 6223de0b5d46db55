use crate::auth::application::domain::entities::RegistrationRequest;
use crate::email::application::domain::MailMessage;

pub const SENDER: &str = "noreply@credence-app.com";
pub const SUBJECT: &str = "Credence Registration Verification";

/// Build the verification email for a registration request.
///
/// Pure and deterministic: the same request always yields the same bodies.
/// The verification URL is interpolated as-is into both bodies, including the
/// `href` of the HTML link, so it must come from a trusted origin.
pub fn compose(request: &RegistrationRequest) -> MailMessage {
    MailMessage {
        from: SENDER.to_string(),
        to: request.email.clone(),
        subject: SUBJECT.to_string(),
        text: text_body(&request.verification_url),
        html: html_body(&request.verification_url),
    }
}

fn text_body(verification_url: &str) -> String {
    format!(
        "Credence Registration Received\n\n\
         Please use the following url to validate your email:\n\n\
         {verification_url}\n\n\
         You will be asked to set a password to activate your account.\n"
    )
}

fn html_body(verification_url: &str) -> String {
    format!(
        "<H1>Credence App Registration Received</H1>\n\
         <p>Please <a href=\"{verification_url}\">click here</a>\n\
         to validate your email.\n\
         You will be asked to set a password to activate your account.</p>\n"
    )
}
