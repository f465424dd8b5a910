//! Directory records: departments and the people attached to them.
//!
//! This crate contains the record shapes, their drafts and patches, and the
//! client-side form rules. It performs no IO.

pub mod department;
pub mod person;
pub mod student;
pub mod teacher;

pub use department::{Department, DepartmentDraft, DepartmentPatch};
pub use person::{Person, PersonDraft, PersonKind};
pub use student::{ENROLLMENT_DATE_FORMAT, Student, StudentDraft, StudentPatch};
pub use teacher::{Teacher, TeacherDraft, TeacherPatch};

use eduspot_core::{DomainError, DomainResult};

/// Reject a blank required form field.
pub(crate) fn require(value: &str, label: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        Err(DomainError::validation(format!("{label} is required")))
    } else {
        Ok(())
    }
}
