use serde::{Deserialize, Serialize};

use eduspot_core::{DepartmentId, DomainResult, Entity, Record};

use crate::require;

/// A department. Neither `name` nor `code` is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub code: String,
    pub description: String,
}

impl Department {
    pub fn new(
        id: impl Into<DepartmentId>,
        name: impl Into<String>,
        code: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: code.into(),
            description: description.into(),
        }
    }
}

/// Department fields without the id (create input and edit form).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDraft {
    pub name: String,
    pub code: String,
    pub description: String,
}

impl DepartmentDraft {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            description: description.into(),
        }
    }

    /// Name and code are required; the description may be blank.
    pub fn validate(&self) -> DomainResult<()> {
        require(&self.name, "Department Name")?;
        require(&self.code, "Code")?;
        Ok(())
    }
}

impl From<&Department> for DepartmentDraft {
    fn from(value: &Department) -> Self {
        Self {
            name: value.name.clone(),
            code: value.code.clone(),
            description: value.description.clone(),
        }
    }
}

/// Partial department update (None = keep existing).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPatch {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
}

impl From<DepartmentDraft> for DepartmentPatch {
    fn from(value: DepartmentDraft) -> Self {
        Self {
            name: Some(value.name),
            code: Some(value.code),
            description: Some(value.description),
        }
    }
}

impl Entity for Department {
    type Id = DepartmentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Record for Department {
    type Draft = DepartmentDraft;
    type Patch = DepartmentPatch;

    const KIND: &'static str = "department";

    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self {
        Self {
            id,
            name: draft.name,
            code: draft.code,
            description: draft.description,
        }
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(code) = patch.code {
            self.code = code;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}
