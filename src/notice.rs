//! Transient user notices
//!
//! Toast-style messages used for validation, success and failure feedback.
//! Notices expire after a fixed lifetime and only the newest few are kept.

use std::time::{Duration, Instant};

/// Maximum number of notices shown at once
pub const NOTICE_LIMIT: usize = 3;

/// Visual treatment of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    /// Neutral or positive feedback
    Default,
    /// Failure feedback, drawn in the error color
    Destructive,
}

/// A single notice
#[derive(Debug, Clone)]
pub struct Notice {
    /// Unique id within its queue
    pub id: u64,
    /// Short heading
    pub title: String,
    /// Body text
    pub description: String,
    /// Visual treatment
    pub variant: NoticeVariant,
    /// When the notice was raised
    pub created_at: Instant,
}

impl Notice {
    /// Whether the notice is older than `ttl` at `now`
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= ttl
    }
}

/// Queue of live notices, newest last
#[derive(Debug, Clone)]
pub struct NoticeQueue {
    notices: Vec<Notice>,
    ttl: Duration,
    next_id: u64,
}

impl NoticeQueue {
    /// Create an empty queue whose notices live for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            notices: Vec::new(),
            ttl,
            next_id: 0,
        }
    }

    /// Raise a notice and return its id
    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        variant: NoticeVariant,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.notices.push(Notice {
            id,
            title: title.into(),
            description: description.into(),
            variant,
            created_at: Instant::now(),
        });

        if self.notices.len() > NOTICE_LIMIT {
            let overflow = self.notices.len() - NOTICE_LIMIT;
            self.notices.drain(..overflow);
        }

        id
    }

    /// Raise a default-variant notice
    pub fn success(&mut self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.push(title, description, NoticeVariant::Default)
    }

    /// Raise a destructive-variant notice
    pub fn destructive(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> u64 {
        self.push(title, description, NoticeVariant::Destructive)
    }

    /// Live notices, oldest first
    pub fn active(&self) -> &[Notice] {
        &self.notices
    }

    /// Most recently raised notice still live
    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Drop notices that have outlived the queue's lifetime
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.notices.retain(|n| !n.is_expired(now, ttl));
    }

    /// Remove a notice before it expires
    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    /// Time until the oldest live notice expires
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.notices
            .iter()
            .map(|n| (n.created_at + self.ttl).saturating_duration_since(now))
            .min()
    }

    /// Number of live notices
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    /// Whether there are no live notices
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
