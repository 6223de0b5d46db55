pub mod verify_registration;

pub use verify_registration::{
    verify_registration_handler, VerifyRegistrationRequest, VerifyRegistrationResponse,
};
