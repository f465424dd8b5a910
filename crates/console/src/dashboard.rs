//! Landing screen: record counts and quick links.

use std::sync::Arc;

use serde::Serialize;

use eduspot_core::DomainResult;
use eduspot_infra::Backend;

use crate::collaborators::Navigator;
use crate::navigation::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub departments: usize,
    pub students: usize,
    pub teachers: usize,
}

pub struct Dashboard {
    backend: Backend,
    navigator: Arc<dyn Navigator>,
}

impl Dashboard {
    pub fn new(backend: Backend, navigator: Arc<dyn Navigator>) -> Self {
        Self { backend, navigator }
    }

    /// Current collection sizes, read straight from the stores.
    pub fn stats(&self) -> DomainResult<DashboardStats> {
        Ok(DashboardStats {
            departments: self.backend.departments().len()?,
            students: self.backend.students().len()?,
            teachers: self.backend.teachers().len()?,
        })
    }

    /// Quick action: jump to a list screen.
    pub fn quick_open(&self, view: View) {
        self.navigator.navigate(view);
    }
}
