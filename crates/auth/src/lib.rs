//! `eduspot-auth`: account identity and credential rules.
//!
//! This crate is intentionally decoupled from storage and from the session
//! state machine: it only knows what an account is and which registration
//! input is acceptable.

pub mod account;
pub mod credentials;
pub mod roles;

pub use account::Account;
pub use credentials::{Credentials, MIN_PASSWORD_LEN, RegistrationForm};
pub use roles::{Role, UnknownRole};
