//! Notification and submission sinks
//!
//! `Notifier` shows error messages transiently; `SuccessHandler` receives
//! each accepted registration. Both are traits so the controller can be
//! tested with mocks.

use crate::model::FormModel;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Displays a message to the user for a short time
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Fire-and-forget error display
    fn notify_error(&mut self, message: &str);
}

/// Receives the validated model of each successful submission
#[cfg_attr(test, mockall::automock)]
pub trait SuccessHandler {
    fn on_valid_submit(&mut self, model: FormModel);
}

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

/// A single transient notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created_at: Instant,
}

/// Stack of toasts that expire after a fixed duration
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    duration: Duration,
}

impl ToastQueue {
    /// Most toasts kept on screen at once; older ones are dropped first
    pub const MAX_VISIBLE: usize = 8;

    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            duration,
        }
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.push_at(kind, message, Instant::now());
    }

    fn push_at(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) {
        if self.toasts.len() == Self::MAX_VISIBLE {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            kind,
            message: message.into(),
            created_at: now,
        });
    }

    /// Drop toasts older than the configured duration
    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    fn prune_at(&mut self, now: Instant) {
        let duration = self.duration;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.created_at) < duration);
    }

    /// Fraction of its lifetime a toast has left, eased for display
    pub fn remaining(&self, toast: &Toast) -> f32 {
        self.remaining_at(toast, Instant::now())
    }

    fn remaining_at(&self, toast: &Toast, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(toast.created_at).as_secs_f32();
        let progress = (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        1.0 - simple_easing::cubic_in(progress)
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify_error(&mut self, message: &str) {
        self.push(ToastKind::Error, message);
    }
}

/// Default success handler: records the registration in the log.
///
/// Passwords never reach the log.
#[derive(Debug, Default)]
pub struct LogSubmission {
    pub accepted: usize,
}

impl SuccessHandler for LogSubmission {
    fn on_valid_submit(&mut self, model: FormModel) {
        self.accepted += 1;
        tracing::info!(
            count = self.accepted,
            first_name = %model.first_name,
            last_name = %model.last_name,
            email = %model.email,
            age = model.age,
            "Registration accepted"
        );
    }
}
