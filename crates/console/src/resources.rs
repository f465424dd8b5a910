//! Store-backed [`CrudResource`] implementations.

use async_trait::async_trait;

use eduspot_core::{DepartmentId, DomainResult, StudentId, TeacherId};
use eduspot_directory::{
    Department, DepartmentDraft, DepartmentPatch, Person, PersonDraft, PersonKind, StudentPatch,
    TeacherPatch,
};
use eduspot_infra::Backend;

use crate::enrichment::{PersonView, enrich};
use crate::navigation::View;
use crate::workflow::{CrudResource, Listing};

#[derive(Debug, Clone)]
pub struct DepartmentResource {
    backend: Backend,
}

impl DepartmentResource {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl CrudResource for DepartmentResource {
    type Row = Department;
    type Draft = DepartmentDraft;
    type Id = DepartmentId;

    fn title(&self) -> &'static str {
        "Department"
    }

    fn view(&self) -> View {
        View::Departments
    }

    fn load_failed_message(&self) -> String {
        "Failed to load departments.".to_string()
    }

    async fn fetch(&self, _department: Option<&DepartmentId>) -> DomainResult<Listing<Department>> {
        let rows = self.backend.departments().get_all().await?;
        Ok(Listing {
            departments: rows.clone(),
            rows,
        })
    }

    async fn create(&self, draft: DepartmentDraft) -> DomainResult<()> {
        self.backend.departments().create(draft).await?;
        Ok(())
    }

    async fn update(&self, id: &DepartmentId, draft: DepartmentDraft) -> DomainResult<()> {
        self.backend
            .departments()
            .update(id, DepartmentPatch::from(draft))
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &DepartmentId) -> DomainResult<()> {
        self.backend.departments().delete(id).await
    }

    fn row_id(&self, row: &Department) -> DepartmentId {
        row.id.clone()
    }

    fn draft_from(&self, row: &Department) -> DepartmentDraft {
        DepartmentDraft::from(row)
    }

    fn validate(&self, draft: &DepartmentDraft) -> DomainResult<()> {
        draft.validate()
    }

    fn delete_prompt(&self, row: &Department) -> String {
        format!(
            "Are you sure you want to delete department: {}? This action cannot be undone.",
            row.name
        )
    }
}

/// Students or teachers, joined with department names on every load.
#[derive(Debug, Clone)]
pub struct PersonResource {
    kind: PersonKind,
    backend: Backend,
}

impl PersonResource {
    pub fn new(kind: PersonKind, backend: Backend) -> Self {
        Self { kind, backend }
    }

    pub fn students(backend: Backend) -> Self {
        Self::new(PersonKind::Student, backend)
    }

    pub fn teachers(backend: Backend) -> Self {
        Self::new(PersonKind::Teacher, backend)
    }

    pub fn kind(&self) -> PersonKind {
        self.kind
    }

    async fn people(&self, department: Option<&DepartmentId>) -> DomainResult<Vec<Person>> {
        let people: Vec<Person> = match self.kind {
            PersonKind::Student => self
                .backend
                .students()
                .get_all_in(department)
                .await?
                .into_iter()
                .map(Person::from)
                .collect(),
            PersonKind::Teacher => self
                .backend
                .teachers()
                .get_all_in(department)
                .await?
                .into_iter()
                .map(Person::from)
                .collect(),
        };
        Ok(people)
    }
}

#[async_trait]
impl CrudResource for PersonResource {
    type Row = PersonView;
    type Draft = PersonDraft;
    type Id = String;

    fn title(&self) -> &'static str {
        self.kind.title()
    }

    fn view(&self) -> View {
        match self.kind {
            PersonKind::Student => View::Students,
            PersonKind::Teacher => View::Teachers,
        }
    }

    fn load_failed_message(&self) -> String {
        format!("Failed to load {} data.", self.kind)
    }

    async fn fetch(&self, department: Option<&DepartmentId>) -> DomainResult<Listing<PersonView>> {
        let (people, departments) = tokio::join!(
            self.people(department),
            self.backend.departments().get_all()
        );
        let departments = departments?;
        let rows = enrich(people?, &departments);
        Ok(Listing { rows, departments })
    }

    async fn create(&self, draft: PersonDraft) -> DomainResult<()> {
        match self.kind {
            PersonKind::Student => {
                let draft = draft.to_student_draft()?;
                self.backend.students().create(draft).await?;
            }
            PersonKind::Teacher => {
                let draft = draft.to_teacher_draft()?;
                self.backend.teachers().create(draft).await?;
            }
        }
        Ok(())
    }

    async fn update(&self, id: &String, draft: PersonDraft) -> DomainResult<()> {
        match self.kind {
            PersonKind::Student => {
                let patch = StudentPatch::from(draft.to_student_draft()?);
                self.backend
                    .students()
                    .update(&StudentId::new(id.as_str()), patch)
                    .await?;
            }
            PersonKind::Teacher => {
                let patch = TeacherPatch::from(draft.to_teacher_draft()?);
                self.backend
                    .teachers()
                    .update(&TeacherId::new(id.as_str()), patch)
                    .await?;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: &String) -> DomainResult<()> {
        match self.kind {
            PersonKind::Student => {
                self.backend
                    .students()
                    .delete(&StudentId::new(id.as_str()))
                    .await
            }
            PersonKind::Teacher => {
                self.backend
                    .teachers()
                    .delete(&TeacherId::new(id.as_str()))
                    .await
            }
        }
    }

    fn row_id(&self, row: &PersonView) -> String {
        row.id.clone()
    }

    fn draft_from(&self, row: &PersonView) -> PersonDraft {
        PersonDraft::from(row.person())
    }

    fn validate(&self, draft: &PersonDraft) -> DomainResult<()> {
        draft.validate(self.kind)
    }

    fn delete_prompt(&self, row: &PersonView) -> String {
        format!(
            "Are you sure you want to delete this {}: {}? This action cannot be undone.",
            self.kind,
            row.full_name()
        )
    }
}
