//! User-facing notifications
//!
//! `Notifier` is the fire-and-forget seam the session reports outcomes
//! through. `ToastQueue` is the TUI implementation: newest-first toasts that
//! close themselves after a fixed lifetime.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default toast lifetime
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Upper bound on toasts kept at once; older ones are dropped first
const MAX_TOASTS: usize = 5;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
    Info,
}

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Success => "Success",
            Self::Info => "Info",
        }
    }
}

/// Receives notifications; no result is consumed by the caller
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, kind: NotificationKind, message: &str);
}

/// A single toast and its lifetime
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: NotificationKind,
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    /// Fraction of lifetime left, 1.0 when just shown and 0.0 when expired
    pub fn remaining_ratio(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.created_at);
        let ratio = 1.0 - elapsed.as_secs_f64() / self.duration.as_secs_f64();
        ratio.clamp(0.0, 1.0)
    }
}

/// Newest-on-top queue of auto-closing toasts
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    duration: Duration,
}

impl ToastQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            duration,
        }
    }

    /// Show a toast created at `now`
    pub fn push_at(&mut self, kind: NotificationKind, message: &str, now: Instant) {
        self.toasts.push_front(Toast {
            kind,
            message: message.to_string(),
            created_at: now,
            duration: self.duration,
        });
        self.toasts.truncate(MAX_TOASTS);
    }

    /// Drop expired toasts. Returns true if anything was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired(now));
        self.toasts.len() != before
    }

    /// Close the newest toast. Returns false when nothing was shown.
    pub fn dismiss_newest(&mut self) -> bool {
        self.toasts.pop_front().is_some()
    }

    /// Toasts, newest first
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, kind: NotificationKind, message: &str) {
        tracing::debug!("{}: {message}", kind.label());
        self.push_at(kind, message, Instant::now());
    }
}
