//! Outward-facing collaborators: notifications, confirmation, navigation.
//!
//! Controllers only talk to the outside world through these traits. The
//! recording and scripted implementations back the tests; the tracing and
//! auto-confirm ones back the demo binary.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde::Serialize;

use crate::navigation::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// One user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

pub trait NotificationSink: Send + Sync {
    fn notify(&self, notice: Notice);

    fn success(&self, message: &str) {
        self.notify(Notice::success(message));
    }

    fn error(&self, message: &str) {
        self.notify(Notice::error(message));
    }
}

/// Asks the user to confirm a destructive action.
#[async_trait]
pub trait ConfirmPrompt: Send + Sync {
    async fn confirm(&self, message: &str) -> bool;
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, view: View);
}

/// Keeps every notice in order of emission.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn clear(&self) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }
}

/// Forwards notices to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => tracing::info!(message = %notice.message, "notice"),
            NoticeKind::Error => tracing::warn!(message = %notice.message, "notice"),
        }
    }
}

/// Answers every prompt the same way.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

#[async_trait]
impl ConfirmPrompt for AutoConfirm {
    async fn confirm(&self, message: &str) -> bool {
        tracing::debug!(prompt = message, answer = self.0, "auto-confirmed");
        self.0
    }
}

/// Replays queued answers and records the questions asked.
#[derive(Debug)]
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<bool>>,
    fallback: bool,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new(fallback: bool) -> Self {
        Self {
            answers: Mutex::new(VecDeque::new()),
            fallback,
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, answer: bool) {
        self.answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(answer);
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ConfirmPrompt for ScriptedPrompt {
    async fn confirm(&self, message: &str) -> bool {
        self.asked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
        self.answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_notifier_keeps_order() {
        let sink = RecordingNotifier::new();
        sink.success("one");
        sink.error("two");
        assert_eq!(
            sink.notices(),
            vec![Notice::success("one"), Notice::error("two")]
        );
        assert_eq!(sink.last(), Some(Notice::error("two")));
        sink.clear();
        assert!(sink.notices().is_empty());
    }

    #[tokio::test]
    async fn scripted_prompt_replays_then_falls_back() {
        let prompt = ScriptedPrompt::new(true);
        prompt.push(false);
        assert!(!prompt.confirm("first?").await);
        assert!(prompt.confirm("second?").await);
        assert_eq!(prompt.asked(), vec!["first?", "second?"]);
    }

    #[test]
    fn notices_serialize_with_lowercase_kind() {
        let json = serde_json::to_value(Notice::error("nope")).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "error", "message": "nope"}));
    }
}
