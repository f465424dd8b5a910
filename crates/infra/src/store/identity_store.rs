use std::sync::{Arc, RwLock};

use eduspot_auth::{Account, Credentials, Role};
use eduspot_core::{AccountId, DomainError, DomainResult, RecordId};

use crate::latency::SharedLatency;

use super::poisoned;

const KIND: &str = "account";

#[derive(Debug, Clone)]
struct StoredAccount {
    account: Account,
    credentials: Credentials,
}

/// Registered accounts, looked up by credentials or by email.
///
/// Secrets stay inside the store; callers only ever receive [`Account`].
#[derive(Debug, Clone)]
pub struct IdentityStore {
    accounts: Arc<RwLock<Vec<StoredAccount>>>,
    latency: SharedLatency,
}

impl IdentityStore {
    pub fn new(latency: SharedLatency) -> Self {
        Self {
            accounts: Arc::new(RwLock::new(Vec::new())),
            latency,
        }
    }

    /// Return the account whose email and secret both match exactly.
    pub async fn login(&self, email: &str, secret: &str) -> DomainResult<Account> {
        self.latency.wait().await;
        let accounts = self.accounts.read().map_err(|_| poisoned(KIND))?;
        match accounts.iter().find(|a| a.credentials.matches(email, secret)) {
            Some(stored) => {
                tracing::debug!(account_id = %stored.account.id, "credentials accepted");
                Ok(stored.account.clone())
            }
            None => {
                tracing::debug!(email, "credentials rejected");
                Err(DomainError::InvalidCredentials)
            }
        }
    }

    /// Create a `user` account, failing if the email is already registered.
    ///
    /// The uniqueness check and the insert happen under one lock acquisition.
    pub async fn register(
        &self,
        display_name: &str,
        email: &str,
        secret: &str,
    ) -> DomainResult<Account> {
        self.latency.wait().await;
        let mut accounts = self.accounts.write().map_err(|_| poisoned(KIND))?;
        if accounts.iter().any(|a| a.account.email == email) {
            return Err(DomainError::email_exists(email));
        }

        let account = Account::new(AccountId::generate(), display_name, email, Role::User);
        accounts.push(StoredAccount {
            account: account.clone(),
            credentials: Credentials::new(email, secret),
        });
        tracing::debug!(account_id = %account.id, "registered account");
        Ok(account)
    }

    pub async fn find_by_email(&self, email: &str) -> DomainResult<Option<Account>> {
        self.latency.wait().await;
        let accounts = self.accounts.read().map_err(|_| poisoned(KIND))?;
        Ok(accounts
            .iter()
            .find(|a| a.account.email == email)
            .map(|a| a.account.clone()))
    }

    /// Insert an account directly (seed data), bypassing the role default.
    pub fn insert(&self, account: Account, secret: &str) -> DomainResult<()> {
        let mut accounts = self.accounts.write().map_err(|_| poisoned(KIND))?;
        if accounts.iter().any(|a| a.account.email == account.email) {
            return Err(DomainError::email_exists(account.email));
        }
        let credentials = Credentials::new(account.email.clone(), secret);
        accounts.push(StoredAccount {
            account,
            credentials,
        });
        Ok(())
    }

    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.accounts.read().map_err(|_| poisoned(KIND))?.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.len()? == 0)
    }

    pub fn clear(&self) -> DomainResult<()> {
        self.accounts.write().map_err(|_| poisoned(KIND))?.clear();
        Ok(())
    }
}
