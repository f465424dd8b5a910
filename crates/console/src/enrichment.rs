//! Joins people with their department names for display.

use std::collections::HashMap;

use serde::Serialize;

use eduspot_core::DepartmentId;
use eduspot_directory::{Department, Person, PersonKind};

/// Shown when a person's department id resolves to nothing.
pub const MISSING_DEPARTMENT: &str = "N/A";

/// A person row as displayed in the student and teacher lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonView {
    pub kind: PersonKind,
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: DepartmentId,
    pub department_display_name: String,
    pub extra_field: String,
    #[serde(skip)]
    person: Person,
}

impl PersonView {
    /// The record the row was built from, for populating edit forms.
    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn has_dangling_department(&self) -> bool {
        self.department_display_name == MISSING_DEPARTMENT
    }
}

pub fn enrich<I>(people: I, departments: &[Department]) -> Vec<PersonView>
where
    I: IntoIterator,
    I::Item: Into<Person>,
{
    let names: HashMap<&DepartmentId, &str> = departments
        .iter()
        .map(|d| (&d.id, d.name.as_str()))
        .collect();

    people
        .into_iter()
        .map(|p| {
            let person: Person = p.into();
            let department_display_name = names
                .get(person.department_id())
                .copied()
                .unwrap_or(MISSING_DEPARTMENT)
                .to_string();
            PersonView {
                kind: person.kind(),
                id: person.id().to_string(),
                first_name: person.first_name().to_string(),
                last_name: person.last_name().to_string(),
                email: person.email().to_string(),
                department_id: person.department_id().clone(),
                department_display_name,
                extra_field: person.extra_field(),
                person,
            }
        })
        .collect()
}
