//! Credential pairs and registration-form validation.
//!
//! Secrets are stored and compared in clear text. This mirrors the simulated
//! backend and is not a model for real credential storage.

use eduspot_core::{DomainError, DomainResult};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Email/secret pair held by the identity store.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    secret: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            secret: secret.into(),
        }
    }

    /// Exact, case-sensitive comparison of both halves.
    pub fn matches(&self, email: &str, secret: &str) -> bool {
        self.email == email && self.secret == secret
    }
}

impl core::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Input collected by the registration page.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub display_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn new(
        display_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Client-side checks, in the order the registration page applies them.
    ///
    /// The confirmation mismatch is reported before any emptiness or length
    /// problem.
    pub fn validate(&self) -> DomainResult<()> {
        if self.password != self.confirm_password {
            return Err(DomainError::validation("Passwords do not match"));
        }
        if self.display_name.is_empty()
            || self.email.is_empty()
            || self.password.chars().count() < MIN_PASSWORD_LEN
        {
            return Err(DomainError::validation(format!(
                "Please fill all fields and ensure password is at least {MIN_PASSWORD_LEN} characters."
            )));
        }
        Ok(())
    }
}

impl core::fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("display_name", &self.display_name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
