use std::sync::Arc;
use std::time::Duration;

use eduspot_auth::{RegistrationForm, Role};
use eduspot_console::{
    ConsoleApp, MISSING_DEPARTMENT, Notice, RecordingNotifier, ScriptedPrompt, SessionState, View,
};
use eduspot_core::{DepartmentId, DomainError};
use eduspot_infra::{
    Backend, BackendLatency, NoLatency, STORE_LATENCY, ScriptedLatency, SharedLatency,
};
use tokio::time::Instant;

struct Harness {
    app: ConsoleApp,
    notifier: Arc<RecordingNotifier>,
    prompt: Arc<ScriptedPrompt>,
}

impl Harness {
    fn new(backend: Backend) -> Self {
        let notifier = Arc::new(RecordingNotifier::new());
        let prompt = Arc::new(ScriptedPrompt::new(true));
        let app = ConsoleApp::new(backend, notifier.clone(), prompt.clone());
        Self {
            app,
            notifier,
            prompt,
        }
    }

    async fn signed_in(backend: Backend) -> Self {
        let harness = Self::new(backend);
        harness
            .app
            .session()
            .login("admin@eduspot.edu", "password")
            .await
            .unwrap();
        harness
    }
}

#[tokio::test]
async fn dangling_department_shows_sentinel_after_delete() {
    let h = Harness::signed_in(Backend::instant().unwrap()).await;

    // Create the department.
    h.app.open(View::Departments).await.unwrap();
    let departments = h.app.departments().unwrap();
    departments.open_create();
    departments.update_draft(|d| {
        d.name = "Physics".to_string();
        d.code = "PHY".to_string();
    });
    departments.submit().await.unwrap();
    assert_eq!(
        h.notifier.last(),
        Some(Notice::success("Department created successfully"))
    );

    departments.set_query("phy");
    let physics = departments.visible_rows().remove(0);
    assert_eq!(physics.code, "PHY");
    assert_eq!(departments.rows().len(), 4);

    // Enroll a student in it.
    h.app.open(View::Students).await.unwrap();
    let students = h.app.students().unwrap();
    assert!(students.departments().iter().any(|d| d.id == physics.id));
    students.open_create();
    students.update_draft(|d| {
        d.first_name = "Marie".to_string();
        d.last_name = "Curie".to_string();
        d.email = "marie@school.edu".to_string();
        d.department_id = physics.id.as_str().to_string();
        d.extra = "2025-02-01".to_string();
    });
    students.submit().await.unwrap();

    students.set_query("curie");
    let marie = students.visible_rows().remove(0);
    assert_eq!(marie.department_display_name, "Physics");
    assert_eq!(marie.extra_field, "2025-02-01");

    // Delete the department; the student keeps the dangling id.
    h.app.open(View::Departments).await.unwrap();
    assert!(departments.delete(&physics).await.unwrap());
    assert_eq!(
        h.prompt.asked().last().map(String::as_str),
        Some("Are you sure you want to delete department: Physics? This action cannot be undone.")
    );

    h.app.open(View::Students).await.unwrap();
    let marie = students.visible_rows().remove(0);
    assert_eq!(marie.department_id, physics.id);
    assert_eq!(marie.department_display_name, MISSING_DEPARTMENT);
}

#[tokio::test]
async fn department_filter_and_query_compose() {
    let h = Harness::signed_in(Backend::instant().unwrap()).await;
    h.app.open(View::Students).await.unwrap();
    let students = h.app.students().unwrap();

    students
        .set_department_filter(Some(DepartmentId::new("dept-1")))
        .await
        .unwrap();
    assert_eq!(students.rows().len(), 2);

    students.set_query("ro");
    let names: Vec<_> = students
        .visible_rows()
        .into_iter()
        .map(|p| p.first_name)
        .collect();
    assert_eq!(names, vec!["Rohan"]);

    students.set_query("sara");
    assert!(students.visible_rows().is_empty());

    students.set_department_filter(None).await.unwrap();
    assert_eq!(students.visible_rows().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn stale_load_never_overwrites_newer_one() {
    let scripted = Arc::new(ScriptedLatency::new(Duration::ZERO));
    let store: SharedLatency = scripted.clone();
    let backend = Backend::seeded(BackendLatency {
        store,
        auth: Arc::new(NoLatency),
    })
    .unwrap();
    let h = Harness::signed_in(backend).await;
    let students = h.app.students().unwrap();

    // Each person load waits twice: people first, then departments.
    for delay in [400, 400, 10, 10] {
        scripted.push(Duration::from_millis(delay));
    }

    let slow = students.set_department_filter(Some(DepartmentId::new("dept-1")));
    let fast = students.set_department_filter(Some(DepartmentId::new("dept-3")));
    let probe = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        (students.is_loading(), students.rows())
    };
    let (slow, fast, (loading_mid, rows_mid)) = tokio::join!(slow, fast, probe);
    slow.unwrap();
    fast.unwrap();

    // The newer load has landed but the older one is still pending.
    assert!(!loading_mid);
    assert_eq!(rows_mid.len(), 1);

    let rows = students.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].first_name, "Sara");
    assert_eq!(students.department_filter(), Some(DepartmentId::new("dept-3")));
}

#[tokio::test(start_paused = true)]
async fn submit_waits_for_write_then_reload() {
    let h = Harness::signed_in(Backend::seeded(BackendLatency::default()).unwrap()).await;
    h.app.open(View::Teachers).await.unwrap();
    let teachers = h.app.teachers().unwrap();

    teachers.open_create();
    teachers.update_draft(|d| {
        d.first_name = "Alan".to_string();
        d.last_name = "Turing".to_string();
        d.email = "alan@school.edu".to_string();
        d.department_id = "dept-1".to_string();
        d.extra = "Computability".to_string();
    });

    let start = Instant::now();
    teachers.submit().await.unwrap();
    assert_eq!(start.elapsed(), STORE_LATENCY * 2);
    assert_eq!(teachers.rows().len(), 4);
    assert_eq!(
        h.notifier.last(),
        Some(Notice::success("Teacher created successfully"))
    );
}

#[tokio::test]
async fn invalid_person_draft_never_reaches_the_store() {
    let backend = Backend::instant().unwrap();
    let h = Harness::signed_in(backend.clone()).await;
    h.app.open(View::Students).await.unwrap();
    let students = h.app.students().unwrap();

    students.open_create();
    students.update_draft(|d| {
        d.first_name = "Bad".to_string();
        d.last_name = "Date".to_string();
        d.email = "bad@school.edu".to_string();
        d.department_id = "dept-1".to_string();
        d.extra = "01/02/2025".to_string();
    });

    let err = students.submit().await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(backend.students().len().unwrap(), 4);
    assert!(students.editor().is_some());
}

#[tokio::test]
async fn declined_person_delete_keeps_record() {
    let h = Harness::signed_in(Backend::instant().unwrap()).await;
    h.app.open(View::Teachers).await.unwrap();
    let teachers = h.app.teachers().unwrap();
    let first = teachers.rows().remove(0);

    h.prompt.push(false);
    assert!(!teachers.delete(&first).await.unwrap());
    assert_eq!(
        h.prompt.asked(),
        vec![format!(
            "Are you sure you want to delete this teacher: {} {}? This action cannot be undone.",
            first.first_name, first.last_name
        )]
    );
    assert_eq!(teachers.rows().len(), 3);
}

#[tokio::test]
async fn register_logout_and_sign_back_in() {
    let h = Harness::new(Backend::instant().unwrap());
    let session = h.app.session();

    session.show_register();
    let form = RegistrationForm::new("Jane Roe", "jane@school.edu", "secret1", "secret1");
    let account = session.register(&form).await.unwrap();
    assert_eq!(account.role, Role::User);
    assert!(h.app.departments().is_ok());

    h.app.logout();
    assert_eq!(session.state(), SessionState::Anonymous);

    let err = session.login("jane@school.edu", "secret2").await.unwrap_err();
    assert_eq!(err, DomainError::InvalidCredentials);
    assert!(h.app.students().is_err());

    let again = session.login("jane@school.edu", "secret1").await.unwrap();
    assert_eq!(again.id, account.id);
    assert_eq!(h.app.dashboard().unwrap().stats().unwrap().students, 4);
}
