//! Registered account (the public view; the secret lives in the identity store).

use serde::{Deserialize, Serialize};

use eduspot_core::{AccountId, Entity};

use crate::Role;

/// Account as seen by the session and the UI.
///
/// # Invariants
/// - `email` is unique across the identity store.
/// - The credential secret is never part of this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    pub display_name: String,
    pub email: String,
    pub role: Role,
}

impl Account {
    pub fn new(
        id: AccountId,
        display_name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            email: email.into(),
            role,
        }
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
