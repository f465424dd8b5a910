//! Demo run: sign in as the seeded admin and walk every list.

use std::sync::Arc;

use anyhow::Context;

use eduspot_console::{AutoConfirm, ConsoleApp, ConsoleConfig, TracingNotifier, View};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::from_env();
    eduspot_observability::init(config.log_format);
    tracing::info!(?config, "starting console");

    let backend = config.build_backend().context("failed to build backend")?;
    let app = ConsoleApp::new(backend, Arc::new(TracingNotifier), Arc::new(AutoConfirm(true)));

    app.session()
        .login("admin@eduspot.edu", "password")
        .await
        .context("seeded admin could not sign in")?;
    if let Some(greeting) = app.session().greeting() {
        tracing::info!("{greeting}");
    }

    let stats = app.dashboard()?.stats()?;
    tracing::info!(stats = %serde_json::to_string(&stats)?, "dashboard");

    app.open(View::Departments).await?;
    let departments = app.departments()?.visible_rows();
    tracing::info!(rows = %serde_json::to_string(&departments)?, "departments");

    for view in [View::Students, View::Teachers] {
        app.open(view).await?;
        let workflow = match view {
            View::Students => app.students()?,
            _ => app.teachers()?,
        };
        let rows = workflow.visible_rows();
        tracing::info!(%view, rows = %serde_json::to_string(&rows)?, "people");
    }

    app.logout();
    tracing::info!("signed out");
    Ok(())
}
