//! Notice board — holds the one notice currently on display.
//!
//! Expiry is evaluated on read against `issued_at`, so there is no timer
//! task to cancel. Posting replaces whatever was shown before.

use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::debug;

use crate::types::Notice;

#[derive(Debug, Clone)]
pub struct NoticeBoard {
    current: Option<Notice>,
    ttl: Duration,
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    /// Show `notice`, superseding any earlier one.
    pub fn post(&mut self, notice: Notice) {
        debug!(kind = ?notice.kind, message = %notice.message, "Notice posted");
        self.current = Some(notice);
    }

    /// The notice still visible at `now`, if any.
    pub fn current(&self, now: DateTime<Utc>) -> Option<&Notice> {
        self.current.as_ref().filter(|n| {
            // A notice stamped in the future has not aged yet.
            n.age(now).to_std().map_or(true, |age| age < self.ttl)
        })
    }
}
