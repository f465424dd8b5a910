use serde::{Deserialize, Serialize};

use eduspot_core::{DepartmentId, DepartmentScoped, Entity, Record, TeacherId};

/// A teacher. Same relational shape as a student, with a specialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: TeacherId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: DepartmentId,
    pub specialization: String,
}

impl Teacher {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: DepartmentId,
    pub specialization: String,
}

/// Partial teacher update (None = keep existing).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub department_id: Option<DepartmentId>,
    pub specialization: Option<String>,
}

impl From<TeacherDraft> for TeacherPatch {
    fn from(value: TeacherDraft) -> Self {
        Self {
            first_name: Some(value.first_name),
            last_name: Some(value.last_name),
            email: Some(value.email),
            department_id: Some(value.department_id),
            specialization: Some(value.specialization),
        }
    }
}

impl Entity for Teacher {
    type Id = TeacherId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl DepartmentScoped for Teacher {
    fn department_id(&self) -> &DepartmentId {
        &self.department_id
    }
}

impl Record for Teacher {
    type Draft = TeacherDraft;
    type Patch = TeacherPatch;

    const KIND: &'static str = "teacher";

    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            department_id: draft.department_id,
            specialization: draft.specialization,
        }
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(department_id) = patch.department_id {
            self.department_id = department_id;
        }
        if let Some(specialization) = patch.specialization {
            self.specialization = specialization;
        }
    }
}
