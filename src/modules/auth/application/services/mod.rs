pub mod availability_checker;

pub use availability_checker::AvailabilityChecker;
