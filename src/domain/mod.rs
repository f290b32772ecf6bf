//! Domain rules: seed catalog, capacity and registration state machine.

pub mod catalog;
pub mod signup;

pub use catalog::{SeedActivity, SEED_CATALOG};
pub use signup::{Capacity, Registration, SignupMachine, SignupRejection};
