//! The simulated backend: one identity store plus the three entity stores.

use std::sync::Arc;
use std::time::Duration;

use eduspot_core::DomainResult;
use eduspot_directory::{Department, Student, Teacher};

use crate::latency::{AUTH_LATENCY, FixedLatency, NoLatency, STORE_LATENCY, SharedLatency};
use crate::seed;
use crate::store::{EntityStore, IdentityStore};

/// Latency strategies for the two store families.
#[derive(Debug, Clone)]
pub struct BackendLatency {
    pub store: SharedLatency,
    pub auth: SharedLatency,
}

impl BackendLatency {
    pub fn fixed(store: Duration, auth: Duration) -> Self {
        Self {
            store: Arc::new(FixedLatency::new(store)),
            auth: Arc::new(FixedLatency::new(auth)),
        }
    }

    pub fn none() -> Self {
        Self {
            store: Arc::new(NoLatency),
            auth: Arc::new(NoLatency),
        }
    }
}

impl Default for BackendLatency {
    fn default() -> Self {
        Self::fixed(STORE_LATENCY, AUTH_LATENCY)
    }
}

/// Handle over all stores. Cloning shares the underlying state.
#[derive(Debug, Clone)]
pub struct Backend {
    auth: IdentityStore,
    departments: EntityStore<Department>,
    students: EntityStore<Student>,
    teachers: EntityStore<Teacher>,
}

impl Backend {
    /// Stores with no records and no accounts.
    pub fn empty(latency: BackendLatency) -> Self {
        Self {
            auth: IdentityStore::new(latency.auth),
            departments: EntityStore::new(Arc::clone(&latency.store)),
            students: EntityStore::new(Arc::clone(&latency.store)),
            teachers: EntityStore::new(latency.store),
        }
    }

    /// Stores loaded with the seed data.
    pub fn seeded(latency: BackendLatency) -> DomainResult<Self> {
        let backend = Self::empty(latency);
        backend.reset()?;
        Ok(backend)
    }

    /// Empty entity stores; only the seed accounts are registered.
    pub fn accounts_only(latency: BackendLatency) -> DomainResult<Self> {
        let backend = Self::empty(latency);
        backend.reset_accounts()?;
        Ok(backend)
    }

    /// Seeded stores without simulated latency.
    pub fn instant() -> DomainResult<Self> {
        Self::seeded(BackendLatency::none())
    }

    /// Restore every store to the seed data.
    pub fn reset(&self) -> DomainResult<()> {
        self.departments.reset(seed::departments())?;
        self.students.reset(seed::students())?;
        self.teachers.reset(seed::teachers())?;
        self.reset_accounts()?;
        tracing::info!("backend reset to seed data");
        Ok(())
    }

    fn reset_accounts(&self) -> DomainResult<()> {
        self.auth.clear()?;
        for (account, secret) in seed::accounts() {
            self.auth.insert(account, secret)?;
        }
        Ok(())
    }

    pub fn auth(&self) -> &IdentityStore {
        &self.auth
    }

    pub fn departments(&self) -> &EntityStore<Department> {
        &self.departments
    }

    pub fn students(&self) -> &EntityStore<Student> {
        &self.students
    }

    pub fn teachers(&self) -> &EntityStore<Teacher> {
        &self.teachers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eduspot_core::DepartmentId;

    #[tokio::test]
    async fn seeded_backend_holds_seed_data() {
        let backend = Backend::instant().unwrap();
        assert_eq!(backend.departments().len().unwrap(), 3);
        assert_eq!(backend.students().len().unwrap(), 4);
        assert_eq!(backend.teachers().len().unwrap(), 3);
        assert_eq!(backend.auth().len().unwrap(), 2);

        let it = backend
            .students()
            .get_all_in(Some(&DepartmentId::new("dept-1")))
            .await
            .unwrap();
        assert_eq!(it.len(), 2);
    }

    #[tokio::test]
    async fn reset_undoes_mutations() {
        let backend = Backend::instant().unwrap();
        backend
            .departments()
            .delete(&DepartmentId::new("dept-1"))
            .await
            .unwrap();
        backend
            .auth()
            .register("New", "new@school.edu", "secret1")
            .await
            .unwrap();

        backend.reset().unwrap();
        assert_eq!(backend.departments().len().unwrap(), 3);
        assert_eq!(backend.auth().len().unwrap(), 2);
    }

    #[tokio::test]
    async fn accounts_only_backend_can_still_log_in() {
        let backend = Backend::accounts_only(BackendLatency::none()).unwrap();
        assert!(backend.students().is_empty().unwrap());
        let admin = backend
            .auth()
            .login("admin@eduspot.edu", "password")
            .await
            .unwrap();
        assert_eq!(admin.display_name, "System Admin");
    }

    #[test]
    fn empty_backend_has_no_records() {
        let backend = Backend::empty(BackendLatency::none());
        assert!(backend.departments().is_empty().unwrap());
        assert!(backend.auth().is_empty().unwrap());
    }
}
