//! `eduspot-console`
//!
//! Headless core of the EduSpot admin console: the session state machine,
//! the department/student/teacher list workflows, navigation and the
//! dashboard, all running against the simulated backend in
//! `eduspot-infra`.

pub mod app;
pub mod collaborators;
pub mod config;
pub mod dashboard;
pub mod enrichment;
pub mod filter;
pub mod navigation;
pub mod resources;
pub mod session;
pub mod workflow;

pub use app::{ConsoleApp, DepartmentWorkflow, PersonWorkflow};
pub use collaborators::{
    AutoConfirm, ConfirmPrompt, Navigator, Notice, NoticeKind, NotificationSink,
    RecordingNotifier, ScriptedPrompt, TracingNotifier,
};
pub use config::ConsoleConfig;
pub use dashboard::{Dashboard, DashboardStats};
pub use enrichment::{MISSING_DEPARTMENT, PersonView, enrich};
pub use filter::{Searchable, filter};
pub use navigation::{Navigation, View};
pub use resources::{DepartmentResource, PersonResource};
pub use session::{AuthPage, SessionController, SessionState};
pub use workflow::{CrudResource, CrudWorkflow, EditTarget, Editor, Listing};
