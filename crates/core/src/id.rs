//! Strongly-typed identifiers used across the console.
//!
//! Identifiers are opaque strings. Seeded records carry readable ids such as
//! `dept-1` or `student-IT-001`; ids minted at creation time are UUIDv7
//! strings, so they never collide with seeded ones.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Behaviour shared by every record identifier.
pub trait RecordId:
    Clone
    + Eq
    + core::hash::Hash
    + core::fmt::Debug
    + core::fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Mint a fresh identifier.
    fn generate() -> Self;

    fn as_str(&self) -> &str;
}

macro_rules! impl_string_id {
    ($t:ident, $name:literal) => {
        #[doc = concat!("Identifier of ", $name, ".")]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(String);

        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl RecordId for $t {
            fn generate() -> Self {
                Self(Uuid::now_v7().simple().to_string())
            }

            fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_string_id!(AccountId, "a registered account");
impl_string_id!(DepartmentId, "a department");
impl_string_id!(StudentId, "a student");
impl_string_id!(TeacherId, "a teacher");
