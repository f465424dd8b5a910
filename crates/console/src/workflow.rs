//! Generic list/editor controller shared by the department, student and
//! teacher screens.
//!
//! A [`CrudWorkflow`] owns the view model of one list screen: the loaded
//! rows, the search query, the optional department filter, the open editor
//! and the `loading`/`busy` flags. Store access goes through a
//! [`CrudResource`], so the sequencing (validate, write, notify, reload) is
//! written once.
//!
//! Controllers take `&self`. The view model sits behind a `std::sync::Mutex`
//! that is only held between suspension points, so two loads on the same
//! controller can overlap. Each load takes a ticket and only the most
//! recently started load may publish its result.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use eduspot_core::{DepartmentId, DomainError, DomainResult};
use eduspot_directory::Department;

use crate::collaborators::{ConfirmPrompt, NotificationSink, Navigator};
use crate::filter::{Searchable, filter};
use crate::navigation::View;

pub const SUBMIT_FAILED: &str = "Operation failed";
pub const DELETE_FAILED: &str = "Deletion failed";

/// Rows returned by one load, plus the departments for selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing<Row> {
    pub rows: Vec<Row>,
    pub departments: Vec<Department>,
}

/// Store access and presentation rules for one record kind.
#[async_trait]
pub trait CrudResource: Send + Sync {
    type Row: Searchable + Clone + Send + Sync;
    type Draft: Clone + Default + Send + Sync;
    type Id: Clone + PartialEq + Send + Sync + core::fmt::Debug;

    /// Capitalised noun for notifications, e.g. `Department`.
    fn title(&self) -> &'static str;

    fn view(&self) -> View;

    fn load_failed_message(&self) -> String;

    async fn fetch(&self, department: Option<&DepartmentId>) -> DomainResult<Listing<Self::Row>>;

    async fn create(&self, draft: Self::Draft) -> DomainResult<()>;

    async fn update(&self, id: &Self::Id, draft: Self::Draft) -> DomainResult<()>;

    async fn delete(&self, id: &Self::Id) -> DomainResult<()>;

    fn row_id(&self, row: &Self::Row) -> Self::Id;

    fn draft_from(&self, row: &Self::Row) -> Self::Draft;

    /// Client-side required-field checks.
    fn validate(&self, draft: &Self::Draft) -> DomainResult<()>;

    fn delete_prompt(&self, row: &Self::Row) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget<Id> {
    Create,
    Edit(Id),
}

/// An open create/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor<Id, Draft> {
    pub target: EditTarget<Id>,
    pub draft: Draft,
}

impl<Id, Draft> Editor<Id, Draft> {
    pub fn is_edit(&self) -> bool {
        matches!(self.target, EditTarget::Edit(_))
    }
}

type EditorOf<R> = Editor<<R as CrudResource>::Id, <R as CrudResource>::Draft>;

struct ViewModel<R: CrudResource> {
    rows: Vec<R::Row>,
    departments: Vec<Department>,
    query: String,
    department_filter: Option<DepartmentId>,
    editor: Option<EditorOf<R>>,
    loading: bool,
    busy: bool,
    latest_load: u64,
}

impl<R: CrudResource> Default for ViewModel<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            departments: Vec::new(),
            query: String::new(),
            department_filter: None,
            editor: None,
            loading: false,
            busy: false,
            latest_load: 0,
        }
    }
}

/// Clears the busy flag when dropped.
struct BusyGuard<'a, R: CrudResource> {
    workflow: &'a CrudWorkflow<R>,
}

impl<R: CrudResource> Drop for BusyGuard<'_, R> {
    fn drop(&mut self) {
        self.workflow.model().busy = false;
    }
}

pub struct CrudWorkflow<R: CrudResource> {
    resource: R,
    notifier: Arc<dyn NotificationSink>,
    prompt: Arc<dyn ConfirmPrompt>,
    navigator: Arc<dyn Navigator>,
    model: Mutex<ViewModel<R>>,
}

impl<R: CrudResource> CrudWorkflow<R> {
    pub fn new(
        resource: R,
        notifier: Arc<dyn NotificationSink>,
        prompt: Arc<dyn ConfirmPrompt>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            resource,
            notifier,
            prompt,
            navigator,
            model: Mutex::new(ViewModel::default()),
        }
    }

    fn model(&self) -> MutexGuard<'_, ViewModel<R>> {
        self.model.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    /// Switch to this workflow's screen and load it.
    pub async fn activate(&self) -> DomainResult<()> {
        self.navigator.navigate(self.resource.view());
        self.load().await
    }

    /// Fetch the rows for the current department filter.
    ///
    /// A load that finishes after a newer one has started is discarded.
    pub async fn load(&self) -> DomainResult<()> {
        let (ticket, department) = {
            let mut model = self.model();
            model.latest_load += 1;
            model.loading = true;
            (model.latest_load, model.department_filter.clone())
        };

        let fetched = self.resource.fetch(department.as_ref()).await;

        let mut model = self.model();
        if ticket != model.latest_load {
            tracing::debug!(
                kind = self.resource.title(),
                ticket,
                latest = model.latest_load,
                "discarding stale load"
            );
            return Ok(());
        }
        model.loading = false;

        match fetched {
            Ok(listing) => {
                tracing::debug!(kind = self.resource.title(), rows = listing.rows.len(), "loaded");
                model.rows = listing.rows;
                model.departments = listing.departments;
                Ok(())
            }
            Err(err) => {
                drop(model);
                tracing::warn!(kind = self.resource.title(), error = %err, "load failed");
                self.notifier.error(&self.resource.load_failed_message());
                Err(err)
            }
        }
    }

    /// All loaded rows, before the text query.
    pub fn rows(&self) -> Vec<R::Row> {
        self.model().rows.clone()
    }

    /// Loaded rows narrowed by the current text query.
    pub fn visible_rows(&self) -> Vec<R::Row> {
        let model = self.model();
        filter(&model.rows, &model.query).into_owned()
    }

    pub fn departments(&self) -> Vec<Department> {
        self.model().departments.clone()
    }

    pub fn query(&self) -> String {
        self.model().query.clone()
    }

    /// Takes effect on the next read of [`visible_rows`](Self::visible_rows).
    pub fn set_query(&self, query: impl Into<String>) {
        self.model().query = query.into();
    }

    pub fn department_filter(&self) -> Option<DepartmentId> {
        self.model().department_filter.clone()
    }

    /// Change the department filter and reload.
    pub async fn set_department_filter(&self, department: Option<DepartmentId>) -> DomainResult<()> {
        self.model().department_filter = department;
        self.load().await
    }

    pub fn is_loading(&self) -> bool {
        self.model().loading
    }

    pub fn is_busy(&self) -> bool {
        self.model().busy
    }

    pub fn editor(&self) -> Option<EditorOf<R>> {
        self.model().editor.clone()
    }

    pub fn open_create(&self) {
        self.model().editor = Some(Editor {
            target: EditTarget::Create,
            draft: R::Draft::default(),
        });
    }

    pub fn open_edit(&self, row: &R::Row) {
        let editor = Editor {
            target: EditTarget::Edit(self.resource.row_id(row)),
            draft: self.resource.draft_from(row),
        };
        self.model().editor = Some(editor);
    }

    /// Apply `change` to the open draft. Returns false if no editor is open.
    ///
    /// `change` runs on a copy outside the view-model lock, so it may call
    /// back into the workflow.
    pub fn update_draft(&self, change: impl FnOnce(&mut R::Draft)) -> bool {
        let Some(mut draft) = self.model().editor.as_ref().map(|e| e.draft.clone()) else {
            return false;
        };
        change(&mut draft);

        match self.model().editor.as_mut() {
            Some(editor) => {
                editor.draft = draft;
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&self) {
        self.model().editor = None;
    }

    /// Drop all view state: rows, query, department filter and editor.
    ///
    /// Loads already in flight are invalidated and will not publish.
    pub fn reset(&self) {
        let mut model = self.model();
        let latest_load = model.latest_load + 1;
        *model = ViewModel {
            latest_load,
            ..ViewModel::default()
        };
        tracing::debug!(kind = self.resource.title(), "view state reset");
    }

    fn begin_busy(&self) -> DomainResult<BusyGuard<'_, R>> {
        let mut model = self.model();
        if model.busy {
            return Err(DomainError::operation_failed(format!(
                "{} operation already in progress",
                self.resource.title()
            )));
        }
        model.busy = true;
        Ok(BusyGuard { workflow: self })
    }

    /// Validate the open draft, then create or update and reload.
    ///
    /// The editor closes on success and stays open with its draft on failure.
    pub async fn submit(&self) -> DomainResult<()> {
        let Some(editor) = self.editor() else {
            return Err(DomainError::validation("No form is open"));
        };

        if let Err(err) = self.resource.validate(&editor.draft) {
            tracing::debug!(kind = self.resource.title(), error = %err, "draft rejected");
            self.notifier.error(&err.to_string());
            return Err(err);
        }

        let _busy = self.begin_busy()?;
        let (outcome, verb) = match &editor.target {
            EditTarget::Create => (self.resource.create(editor.draft).await, "created"),
            EditTarget::Edit(id) => (self.resource.update(id, editor.draft).await, "updated"),
        };

        match outcome {
            Ok(()) => {
                tracing::info!(kind = self.resource.title(), verb, "record saved");
                self.notifier
                    .success(&format!("{} {verb} successfully", self.resource.title()));
                self.model().editor = None;
                self.reload_after_write().await;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(kind = self.resource.title(), error = %err, "save failed");
                self.notifier.error(SUBMIT_FAILED);
                Err(err)
            }
        }
    }

    /// Ask for confirmation, then delete `row` and reload.
    ///
    /// Returns `Ok(false)` if the prompt was declined.
    pub async fn delete(&self, row: &R::Row) -> DomainResult<bool> {
        let message = self.resource.delete_prompt(row);
        if !self.prompt.confirm(&message).await {
            tracing::debug!(kind = self.resource.title(), "deletion cancelled");
            return Ok(false);
        }

        let _busy = self.begin_busy()?;
        let id = self.resource.row_id(row);
        match self.resource.delete(&id).await {
            Ok(()) => {
                tracing::info!(kind = self.resource.title(), ?id, "record deleted");
                self.notifier
                    .success(&format!("{} deleted successfully", self.resource.title()));
                self.reload_after_write().await;
                Ok(true)
            }
            Err(err) => {
                tracing::warn!(kind = self.resource.title(), error = %err, "delete failed");
                self.notifier.error(DELETE_FAILED);
                Err(err)
            }
        }
    }

    // The load reports its own failure; the write itself already succeeded.
    async fn reload_after_write(&self) {
        if let Err(err) = self.load().await {
            tracing::debug!(kind = self.resource.title(), error = %err, "reload after write failed");
        }
    }
}
