use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use eduspot_core::{DepartmentId, DepartmentScoped, Entity, Record, StudentId};

/// Format of enrollment dates in forms and in the normalised extra field.
pub const ENROLLMENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A student. `department_id` is never checked against the departments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: DepartmentId,
    pub enrollment_date: NaiveDate,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn enrollment_date_display(&self) -> String {
        self.enrollment_date
            .format(ENROLLMENT_DATE_FORMAT)
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: DepartmentId,
    pub enrollment_date: NaiveDate,
}

/// Partial student update (None = keep existing).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub department_id: Option<DepartmentId>,
    pub enrollment_date: Option<NaiveDate>,
}

impl From<StudentDraft> for StudentPatch {
    fn from(value: StudentDraft) -> Self {
        Self {
            first_name: Some(value.first_name),
            last_name: Some(value.last_name),
            email: Some(value.email),
            department_id: Some(value.department_id),
            enrollment_date: Some(value.enrollment_date),
        }
    }
}

impl Entity for Student {
    type Id = StudentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl DepartmentScoped for Student {
    fn department_id(&self) -> &DepartmentId {
        &self.department_id
    }
}

impl Record for Student {
    type Draft = StudentDraft;
    type Patch = StudentPatch;

    const KIND: &'static str = "student";

    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            department_id: draft.department_id,
            enrollment_date: draft.enrollment_date,
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
        if let Some(enrollment_date) = patch.enrollment_date {
            self.enrollment_date = enrollment_date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ayaan() -> Student {
        Student {
            id: StudentId::new("student-IT-001"),
            first_name: "Ayaan".to_string(),
            last_name: "Rahman".to_string(),
            email: "ayaan@school.edu".to_string(),
            department_id: DepartmentId::new("dept-1"),
            enrollment_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
        }
    }

    #[test]
    fn enrollment_date_serializes_as_iso_date() {
        let json = serde_json::to_value(ayaan()).unwrap();
        assert_eq!(json["enrollmentDate"], "2024-06-10");
        assert_eq!(json["departmentId"], "dept-1");
    }

    #[test]
    fn patch_moves_department_and_keeps_the_rest() {
        let mut student = ayaan();
        student.apply_patch(StudentPatch {
            department_id: Some(DepartmentId::new("dept-3")),
            ..Default::default()
        });
        assert_eq!(student.department_id.as_str(), "dept-3");
        assert_eq!(student.full_name(), "Ayaan Rahman");
        assert_eq!(student.enrollment_date_display(), "2024-06-10");
    }
}
