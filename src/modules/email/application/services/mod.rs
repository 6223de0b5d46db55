pub mod verification_email;
