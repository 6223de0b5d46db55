pub mod mail_message;

pub use mail_message::{mask_address, MailMessage};
