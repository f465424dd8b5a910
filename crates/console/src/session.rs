//! Authentication state for one console session.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use eduspot_auth::{Account, RegistrationForm};
use eduspot_core::{DomainError, DomainResult};
use eduspot_infra::IdentityStore;

use crate::collaborators::NotificationSink;

pub const LOGIN_SUCCESS: &str = "Logged in successfully";
pub const REGISTRATION_SUCCESS: &str = "Registration successful! Logging you in.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticating,
    Authenticated(Account),
    /// The last attempt failed. No account is attached.
    AuthFailed(DomainError),
}

impl SessionState {
    pub fn account(&self) -> Option<&Account> {
        match self {
            SessionState::Authenticated(account) => Some(account),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.account().is_some()
    }

    pub fn is_authenticating(&self) -> bool {
        matches!(self, SessionState::Authenticating)
    }
}

/// Which form the signed-out screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPage {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Default)]
struct Inner {
    state: SessionState,
    page: AuthPage,
}

pub struct SessionController {
    identity: IdentityStore,
    notifier: Arc<dyn NotificationSink>,
    inner: Mutex<Inner>,
}

impl SessionController {
    pub fn new(identity: IdentityStore, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            identity,
            notifier,
            inner: Mutex::new(Inner::default()),
        }
    }

    fn inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> SessionState {
        self.inner().state.clone()
    }

    pub fn account(&self) -> Option<Account> {
        self.inner().state.account().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner().state.is_authenticated()
    }

    pub fn auth_page(&self) -> AuthPage {
        self.inner().page
    }

    pub fn show_login(&self) {
        self.inner().page = AuthPage::Login;
    }

    pub fn show_register(&self) {
        self.inner().page = AuthPage::Register;
    }

    /// Header line for a signed-in user, e.g. `Welcome, System Admin (admin)`.
    pub fn greeting(&self) -> Option<String> {
        self.account()
            .map(|a| format!("Welcome, {} ({})", a.display_name, a.role))
    }

    /// Sign in. Only valid while signed out; the current account is never
    /// replaced or dropped by a second attempt.
    pub async fn login(&self, email: &str, secret: &str) -> DomainResult<Account> {
        self.begin_attempt()?;

        let outcome = self.identity.login(email, secret).await;
        self.settle(outcome, LOGIN_SUCCESS)
    }

    /// Validate the form, then create a `user` account and sign in as it.
    pub async fn register(&self, form: &RegistrationForm) -> DomainResult<Account> {
        if let Err(err) = form.validate() {
            tracing::debug!(error = %err, "registration form rejected");
            self.notifier.error(&err.to_string());
            return Err(err);
        }

        self.begin_attempt()?;

        let outcome = self
            .identity
            .register(&form.display_name, &form.email, &form.password)
            .await;
        self.settle(outcome, REGISTRATION_SUCCESS)
    }

    pub fn logout(&self) {
        let mut inner = self.inner();
        if let Some(account) = inner.state.account() {
            tracing::info!(account_id = %account.id, "logged out");
        }
        *inner = Inner::default();
    }

    fn begin_attempt(&self) -> DomainResult<()> {
        let mut inner = self.inner();
        if let Some(account) = inner.state.account() {
            tracing::debug!(account_id = %account.id, "authentication attempted while signed in");
            return Err(DomainError::operation_failed("already signed in"));
        }
        inner.state = SessionState::Authenticating;
        Ok(())
    }

    fn settle(&self, outcome: DomainResult<Account>, success: &str) -> DomainResult<Account> {
        match outcome {
            Ok(account) => {
                tracing::info!(account_id = %account.id, role = %account.role, "session started");
                self.inner().state = SessionState::Authenticated(account.clone());
                self.notifier.success(success);
                Ok(account)
            }
            Err(err) => {
                tracing::warn!(error = %err, "authentication failed");
                self.inner().state = SessionState::AuthFailed(err.clone());
                self.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{Notice, RecordingNotifier};
    use eduspot_auth::Role;
    use eduspot_infra::{AUTH_LATENCY, Backend, BackendLatency};
    use std::time::Duration;

    fn session() -> (SessionController, Arc<RecordingNotifier>) {
        let backend = Backend::instant().unwrap();
        let notifier = Arc::new(RecordingNotifier::new());
        let controller = SessionController::new(backend.auth().clone(), notifier.clone());
        (controller, notifier)
    }

    #[tokio::test]
    async fn login_authenticates_and_notifies() {
        let (session, notifier) = session();
        let account = session.login("admin@eduspot.edu", "password").await.unwrap();

        assert_eq!(account.role, Role::Admin);
        assert_eq!(session.state(), SessionState::Authenticated(account));
        assert_eq!(notifier.last(), Some(Notice::success(LOGIN_SUCCESS)));
        assert_eq!(
            session.greeting().as_deref(),
            Some("Welcome, System Admin (admin)")
        );
    }

    #[tokio::test]
    async fn bad_login_leaves_no_account() {
        let (session, notifier) = session();
        let err = session.login("admin@eduspot.edu", "wrong").await.unwrap_err();

        assert_eq!(err, DomainError::InvalidCredentials);
        assert_eq!(session.state(), SessionState::AuthFailed(err));
        assert!(session.account().is_none());
        assert_eq!(notifier.last(), Some(Notice::error("Invalid credentials")));
    }

    #[tokio::test(start_paused = true)]
    async fn state_is_authenticating_while_in_flight() {
        let backend = Backend::seeded(BackendLatency::default()).unwrap();
        let session = SessionController::new(
            backend.auth().clone(),
            Arc::new(RecordingNotifier::new()),
        );

        let start = tokio::time::Instant::now();
        let login = session.login("teacher@eduspot.edu", "password");
        let probe = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            session.state()
        };
        let (result, during) = tokio::join!(login, probe);

        assert!(during.is_authenticating());
        assert_eq!(result.unwrap().role, Role::Teacher);
        assert_eq!(start.elapsed(), AUTH_LATENCY);
    }

    #[tokio::test]
    async fn register_signs_in_as_user() {
        let (session, notifier) = session();
        let form = RegistrationForm::new("Jane Roe", "jane@school.edu", "secret1", "secret1");
        let account = session.register(&form).await.unwrap();

        assert_eq!(account.role, Role::User);
        assert!(session.is_authenticated());
        assert_eq!(notifier.last(), Some(Notice::success(REGISTRATION_SUCCESS)));
    }

    #[tokio::test]
    async fn register_duplicate_email_fails() {
        let (session, notifier) = session();
        let form = RegistrationForm::new("Admin 2", "admin@eduspot.edu", "secret1", "secret1");
        let err = session.register(&form).await.unwrap_err();

        assert_eq!(err, DomainError::email_exists("admin@eduspot.edu"));
        assert!(!session.is_authenticated());
        assert_eq!(notifier.last(), Some(Notice::error("User already exists")));
    }

    #[tokio::test]
    async fn invalid_form_never_leaves_anonymous() {
        let (session, notifier) = session();
        let form = RegistrationForm::new("Jane", "jane@school.edu", "secret1", "secret2");
        let err = session.register(&form).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(session.state(), SessionState::Anonymous);
        assert_eq!(notifier.last(), Some(Notice::error("Passwords do not match")));
    }

    #[tokio::test]
    async fn logout_resets_state_and_auth_page() {
        let (session, _) = session();
        session.show_register();
        session.login("admin@eduspot.edu", "password").await.unwrap();

        session.logout();
        assert_eq!(session.state(), SessionState::Anonymous);
        assert_eq!(session.auth_page(), AuthPage::Login);
    }

    #[tokio::test]
    async fn second_login_keeps_current_account() {
        let (session, notifier) = session();
        let admin = session.login("admin@eduspot.edu", "password").await.unwrap();
        notifier.clear();

        let err = session.login("admin@eduspot.edu", "wrong").await.unwrap_err();
        assert!(matches!(err, DomainError::OperationFailed(_)));
        assert_eq!(session.state(), SessionState::Authenticated(admin.clone()));

        let form = RegistrationForm::new("Jane Roe", "jane@school.edu", "secret1", "secret1");
        session.register(&form).await.unwrap_err();
        assert_eq!(session.account(), Some(admin));
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn auth_page_toggles() {
        let (session, _) = session();
        assert_eq!(session.auth_page(), AuthPage::Login);
        session.show_register();
        assert_eq!(session.auth_page(), AuthPage::Register);
        session.show_login();
        assert_eq!(session.auth_page(), AuthPage::Login);
    }
}
