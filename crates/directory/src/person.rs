//! Tagged person variant shared by the student and teacher views.
//!
//! Students and teachers share a base projection (names, email, department)
//! plus one kind-specific field. Everything that differs between the two is
//! dispatched on [`PersonKind`], never on the shape of the data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use eduspot_core::{DepartmentId, DomainError, DomainResult};

use crate::student::{ENROLLMENT_DATE_FORMAT, Student, StudentDraft};
use crate::teacher::{Teacher, TeacherDraft};
use crate::require;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonKind {
    Student,
    Teacher,
}

impl PersonKind {
    /// Lowercase noun used in notifications and prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonKind::Student => "student",
            PersonKind::Teacher => "teacher",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PersonKind::Student => "Student",
            PersonKind::Teacher => "Teacher",
        }
    }

    /// Label of the kind-specific column and form field.
    pub fn extra_field_label(&self) -> &'static str {
        match self {
            PersonKind::Student => "Enrollment Date",
            PersonKind::Teacher => "Specialization",
        }
    }
}

impl core::fmt::Display for PersonKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Person {
    Student(Student),
    Teacher(Teacher),
}

impl Person {
    pub fn kind(&self) -> PersonKind {
        match self {
            Person::Student(_) => PersonKind::Student,
            Person::Teacher(_) => PersonKind::Teacher,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Person::Student(s) => s.id.as_str(),
            Person::Teacher(t) => t.id.as_str(),
        }
    }

    pub fn first_name(&self) -> &str {
        match self {
            Person::Student(s) => &s.first_name,
            Person::Teacher(t) => &t.first_name,
        }
    }

    pub fn last_name(&self) -> &str {
        match self {
            Person::Student(s) => &s.last_name,
            Person::Teacher(t) => &t.last_name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Person::Student(s) => &s.email,
            Person::Teacher(t) => &t.email,
        }
    }

    pub fn department_id(&self) -> &DepartmentId {
        match self {
            Person::Student(s) => &s.department_id,
            Person::Teacher(t) => &t.department_id,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
    }

    /// Kind-specific field rendered as text: the enrollment date for a
    /// student, the specialization for a teacher.
    pub fn extra_field(&self) -> String {
        match self {
            Person::Student(s) => s.enrollment_date_display(),
            Person::Teacher(t) => t.specialization.clone(),
        }
    }
}

impl From<Student> for Person {
    fn from(value: Student) -> Self {
        Person::Student(value)
    }
}

impl From<Teacher> for Person {
    fn from(value: Teacher) -> Self {
        Person::Teacher(value)
    }
}

/// Generic person form, shared by the student and teacher editors.
///
/// `extra` holds the kind-specific field as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: String,
    pub extra: String,
}

impl PersonDraft {
    /// Every field is required; a student's enrollment date must also parse.
    pub fn validate(&self, kind: PersonKind) -> DomainResult<()> {
        require(&self.first_name, "First Name")?;
        require(&self.last_name, "Last Name")?;
        require(&self.email, "Email")?;
        require(&self.department_id, "Department")?;
        require(&self.extra, kind.extra_field_label())?;
        if kind == PersonKind::Student {
            self.enrollment_date()?;
        }
        Ok(())
    }

    pub fn to_student_draft(&self) -> DomainResult<StudentDraft> {
        self.validate(PersonKind::Student)?;
        Ok(StudentDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            department_id: DepartmentId::new(self.department_id.clone()),
            enrollment_date: self.enrollment_date()?,
        })
    }

    pub fn to_teacher_draft(&self) -> DomainResult<TeacherDraft> {
        self.validate(PersonKind::Teacher)?;
        Ok(TeacherDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            department_id: DepartmentId::new(self.department_id.clone()),
            specialization: self.extra.clone(),
        })
    }

    fn enrollment_date(&self) -> DomainResult<NaiveDate> {
        NaiveDate::parse_from_str(self.extra.trim(), ENROLLMENT_DATE_FORMAT).map_err(|_| {
            DomainError::validation("Enrollment Date must be a date in YYYY-MM-DD format")
        })
    }
}

impl From<&Person> for PersonDraft {
    fn from(value: &Person) -> Self {
        Self {
            first_name: value.first_name().to_string(),
            last_name: value.last_name().to_string(),
            email: value.email().to_string(),
            department_id: value.department_id().as_str().to_string(),
            extra: value.extra_field(),
        }
    }
}
