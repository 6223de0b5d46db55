pub mod verify_registration;
