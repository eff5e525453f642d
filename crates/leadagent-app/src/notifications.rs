//! Notification area: transient, self-dismissing status messages
//!
//! Each notification carries its own removal deadline. Auto-removal and
//! explicit dismissal both go through the notification's id, so dismissing
//! early cancels the pending expiry and a late expiry or a second dismissal
//! finds nothing to remove.

use std::time::{Duration, Instant};

use leadagent_core::prelude::*;
use leadagent_core::Severity;

/// How long a notification stays visible unless dismissed earlier.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub created_at: Instant,
    pub expires_at: Instant,
}

impl Notification {
    /// Time left before auto-removal, zero once expired
    pub fn remaining(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }
}

/// Owned notification area, created once at startup and kept for the life
/// of the process.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    entries: Vec<Notification>,
    next_id: u64,
    ttl: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::with_ttl(NOTIFICATION_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            ttl,
        }
    }

    /// Append a notification created now.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.notify_at(message, severity, Instant::now())
    }

    /// Append a notification created at `now`. Entries stack; identical
    /// messages are not merged.
    pub fn notify_at(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        now: Instant,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let message = message.into();
        debug!("Notification {:?} [{}]: {}", id, severity.label(), message);

        self.entries.push(Notification {
            id,
            message,
            severity,
            created_at: now,
            expires_at: now + self.ttl,
        });
        id
    }

    /// Remove a notification immediately. Returns false if it was already
    /// gone (expired or dismissed).
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        self.entries.len() != before
    }

    /// Dismiss the most recently created notification
    pub fn dismiss_latest(&mut self) -> Option<NotificationId> {
        let id = self.entries.last().map(|n| n.id)?;
        self.dismiss(id);
        Some(id)
    }

    /// Drop every notification whose deadline has passed; returns the ids
    /// removed.
    pub fn expire(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut expired = Vec::new();
        self.entries.retain(|n| {
            if n.expires_at <= now {
                expired.push(n.id);
                false
            } else {
                true
            }
        });
        if !expired.is_empty() {
            trace!("Expired notifications: {:?}", expired);
        }
        expired
    }

    /// Notifications in creation order (oldest first)
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.iter().find(|n| n.id == id)
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
