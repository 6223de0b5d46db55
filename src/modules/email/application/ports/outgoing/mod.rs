pub mod mail_dispatcher;

pub use mail_dispatcher::{DispatchError, MailDispatcher};
