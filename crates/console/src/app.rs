//! Top-level wiring of a console session.

use std::sync::Arc;

use eduspot_core::{DomainError, DomainResult};
use eduspot_infra::Backend;

use crate::collaborators::{ConfirmPrompt, Navigator, NotificationSink};
use crate::dashboard::Dashboard;
use crate::navigation::{Navigation, View};
use crate::resources::{DepartmentResource, PersonResource};
use crate::session::SessionController;
use crate::workflow::CrudWorkflow;

pub type DepartmentWorkflow = CrudWorkflow<DepartmentResource>;
pub type PersonWorkflow = CrudWorkflow<PersonResource>;

/// Session, list controllers, navigation and dashboard over one backend.
///
/// List controllers are only handed out while a user is signed in.
pub struct ConsoleApp {
    backend: Backend,
    session: SessionController,
    navigation: Arc<Navigation>,
    dashboard: Dashboard,
    departments: DepartmentWorkflow,
    students: PersonWorkflow,
    teachers: PersonWorkflow,
}

impl ConsoleApp {
    pub fn new(
        backend: Backend,
        notifier: Arc<dyn NotificationSink>,
        prompt: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        let navigation = Arc::new(Navigation::new());
        let navigator: Arc<dyn Navigator> = navigation.clone();

        let students = CrudWorkflow::new(
            PersonResource::students(backend.clone()),
            Arc::clone(&notifier),
            Arc::clone(&prompt),
            Arc::clone(&navigator),
        );
        let teachers = CrudWorkflow::new(
            PersonResource::teachers(backend.clone()),
            Arc::clone(&notifier),
            Arc::clone(&prompt),
            Arc::clone(&navigator),
        );
        let departments = CrudWorkflow::new(
            DepartmentResource::new(backend.clone()),
            Arc::clone(&notifier),
            prompt,
            Arc::clone(&navigator),
        );

        Self {
            session: SessionController::new(backend.auth().clone(), Arc::clone(&notifier)),
            dashboard: Dashboard::new(backend.clone(), navigator),
            backend,
            navigation,
            departments,
            students,
            teachers,
        }
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn current_view(&self) -> View {
        self.navigation.current()
    }

    pub fn dashboard(&self) -> DomainResult<&Dashboard> {
        self.require_session()?;
        Ok(&self.dashboard)
    }

    pub fn departments(&self) -> DomainResult<&DepartmentWorkflow> {
        self.require_session()?;
        Ok(&self.departments)
    }

    pub fn students(&self) -> DomainResult<&PersonWorkflow> {
        self.require_session()?;
        Ok(&self.students)
    }

    pub fn teachers(&self) -> DomainResult<&PersonWorkflow> {
        self.require_session()?;
        Ok(&self.teachers)
    }

    /// Navigate to `view`, loading it if it is a list screen.
    pub async fn open(&self, view: View) -> DomainResult<()> {
        self.require_session()?;
        match view {
            View::Dashboard => {
                self.dashboard.quick_open(View::Dashboard);
                Ok(())
            }
            View::Departments => self.departments.activate().await,
            View::Students => self.students.activate().await,
            View::Teachers => self.teachers.activate().await,
        }
    }

    /// End the session and return to the dashboard for the next sign-in.
    ///
    /// Every list screen starts over: rows, filters, queries and open editors
    /// are dropped.
    pub fn logout(&self) {
        self.session.logout();
        self.navigation.reset();
        self.departments.reset();
        self.students.reset();
        self.teachers.reset();
    }

    fn require_session(&self) -> DomainResult<()> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(DomainError::operation_failed("sign in required"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{AutoConfirm, RecordingNotifier};
    use eduspot_core::DepartmentId;
    use eduspot_infra::BackendLatency;
    use std::time::Duration;

    fn app() -> ConsoleApp {
        ConsoleApp::new(
            Backend::instant().unwrap(),
            Arc::new(RecordingNotifier::new()),
            Arc::new(AutoConfirm(true)),
        )
    }

    #[tokio::test]
    async fn entity_views_need_a_session() {
        let app = app();
        assert!(app.departments().is_err());
        assert!(app.open(View::Students).await.is_err());
        assert_eq!(app.current_view(), View::Dashboard);

        app.session().login("admin@eduspot.edu", "password").await.unwrap();
        app.open(View::Students).await.unwrap();
        assert_eq!(app.current_view(), View::Students);
        assert_eq!(app.students().unwrap().rows().len(), 4);
    }

    #[tokio::test]
    async fn next_sign_in_starts_with_fresh_list_state() {
        let app = app();
        app.session().login("admin@eduspot.edu", "password").await.unwrap();
        app.open(View::Students).await.unwrap();
        let students = app.students().unwrap();
        students
            .set_department_filter(Some(DepartmentId::new("dept-3")))
            .await
            .unwrap();
        students.set_query("sara");
        students.open_create();
        students.update_draft(|d| d.first_name = "half-typed".to_string());

        app.logout();
        app.session().login("teacher@eduspot.edu", "password").await.unwrap();

        let students = app.students().unwrap();
        assert_eq!(students.department_filter(), None);
        assert_eq!(students.query(), "");
        assert!(students.editor().is_none());
        assert!(students.rows().is_empty());

        app.open(View::Students).await.unwrap();
        assert_eq!(students.visible_rows().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn load_in_flight_at_logout_is_discarded() {
        let app = ConsoleApp::new(
            Backend::seeded(BackendLatency::default()).unwrap(),
            Arc::new(RecordingNotifier::new()),
            Arc::new(AutoConfirm(true)),
        );
        app.session().login("admin@eduspot.edu", "password").await.unwrap();

        let open = app.open(View::Departments);
        let leave = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            app.logout();
        };
        let (opened, ()) = tokio::join!(open, leave);
        opened.unwrap();

        assert!(app.departments.rows().is_empty());
        assert!(!app.departments.is_loading());
    }

    #[tokio::test]
    async fn logout_returns_to_dashboard() {
        let app = app();
        app.session().login("admin@eduspot.edu", "password").await.unwrap();
        app.open(View::Teachers).await.unwrap();

        app.logout();
        assert_eq!(app.current_view(), View::Dashboard);
        assert!(app.teachers().is_err());
    }
}
