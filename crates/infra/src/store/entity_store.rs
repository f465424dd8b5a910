use std::sync::{Arc, RwLock};

use eduspot_core::{
    DepartmentId, DepartmentScoped, DomainError, DomainResult, Entity, Record, RecordId,
};

use crate::latency::SharedLatency;

use super::poisoned;

/// In-memory collection of one record kind with asynchronous CRUD.
///
/// Records keep insertion order. Identifiers are minted on `create` and are
/// unique within the collection.
#[derive(Debug)]
pub struct EntityStore<R> {
    records: Arc<RwLock<Vec<R>>>,
    latency: SharedLatency,
}

impl<R> Clone for EntityStore<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            latency: Arc::clone(&self.latency),
        }
    }
}

impl<R: Record> EntityStore<R> {
    pub fn new(latency: SharedLatency) -> Self {
        Self::with_records(Vec::new(), latency)
    }

    pub fn with_records(records: Vec<R>, latency: SharedLatency) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            latency,
        }
    }

    /// Copy of every record, in insertion order.
    pub async fn get_all(&self) -> DomainResult<Vec<R>> {
        self.latency.wait().await;
        let records = self.records.read().map_err(|_| poisoned(R::KIND))?;
        tracing::debug!(kind = R::KIND, count = records.len(), "listed records");
        Ok(records.clone())
    }

    pub async fn get_by_id(&self, id: &R::Id) -> DomainResult<R> {
        self.latency.wait().await;
        let records = self.records.read().map_err(|_| poisoned(R::KIND))?;
        records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(R::KIND, id.as_str()))
    }

    /// Append a record built from `draft` under a fresh id and return it.
    pub async fn create(&self, draft: R::Draft) -> DomainResult<R> {
        self.latency.wait().await;
        let mut records = self.records.write().map_err(|_| poisoned(R::KIND))?;

        let mut id = R::Id::generate();
        while records.iter().any(|r| r.id() == &id) {
            id = R::Id::generate();
        }

        let record = R::from_draft(id, draft);
        records.push(record.clone());
        tracing::debug!(kind = R::KIND, id = %record.id(), "created record");
        Ok(record)
    }

    /// Merge `patch` over the stored record and return the merged value.
    pub async fn update(&self, id: &R::Id, patch: R::Patch) -> DomainResult<R> {
        self.latency.wait().await;
        let mut records = self.records.write().map_err(|_| poisoned(R::KIND))?;
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| DomainError::not_found(R::KIND, id.as_str()))?;

        record.apply_patch(patch);
        tracing::debug!(kind = R::KIND, %id, "updated record");
        Ok(record.clone())
    }

    /// Remove the record if present. Deleting a missing id succeeds.
    pub async fn delete(&self, id: &R::Id) -> DomainResult<()> {
        self.latency.wait().await;
        let mut records = self.records.write().map_err(|_| poisoned(R::KIND))?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        tracing::debug!(kind = R::KIND, %id, removed = before - records.len(), "deleted record");
        Ok(())
    }

    /// Current collection size, read without simulated latency.
    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.records.read().map_err(|_| poisoned(R::KIND))?.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Replace the whole collection (reseed / test teardown).
    pub fn reset(&self, records: Vec<R>) -> DomainResult<()> {
        let mut guard = self.records.write().map_err(|_| poisoned(R::KIND))?;
        *guard = records;
        Ok(())
    }
}

impl<R: Record + DepartmentScoped> EntityStore<R> {
    /// Like [`get_all`](Self::get_all), optionally keeping only records whose
    /// department id equals `department_id` exactly.
    pub async fn get_all_in(&self, department_id: Option<&DepartmentId>) -> DomainResult<Vec<R>> {
        let Some(department_id) = department_id else {
            return self.get_all().await;
        };

        self.latency.wait().await;
        let records = self.records.read().map_err(|_| poisoned(R::KIND))?;
        let scoped: Vec<R> = records
            .iter()
            .filter(|r| r.department_id() == department_id)
            .cloned()
            .collect();
        tracing::debug!(kind = R::KIND, %department_id, count = scoped.len(), "listed records in department");
        Ok(scoped)
    }
}
