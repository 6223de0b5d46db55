pub mod entities;

pub use entities::{AccountRecord, RegistrationRequest};
