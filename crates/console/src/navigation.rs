//! Active-view tracking.

use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::collaborators::Navigator;

/// Top-level screens of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Departments,
    Students,
    Teachers,
}

impl View {
    pub const ALL: [View; 4] = [
        View::Dashboard,
        View::Departments,
        View::Students,
        View::Teachers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Departments => "departments",
            View::Students => "students",
            View::Teachers => "teachers",
        }
    }

    /// Whether the view lists entity records (and so needs a session).
    pub fn is_entity_view(&self) -> bool {
        !matches!(self, View::Dashboard)
    }
}

impl core::fmt::Display for View {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-process navigator recording the current view.
#[derive(Debug, Default)]
pub struct Navigation {
    current: Mutex<View>,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn reset(&self) {
        self.navigate(View::default());
    }
}

impl Navigator for Navigation {
    fn navigate(&self, view: View) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if *current != view {
            tracing::debug!(from = %*current, to = %view, "navigating");
        }
        *current = view;
    }
}
