//! Bounded log of received utterances.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use serde::Serialize;

/// One received utterance
#[derive(Debug, Clone, Serialize)]
pub struct LoggedUtterance {
    pub text: String,
    pub received_at: DateTime<Local>,
    /// Whether the interpreter resolved it to an action
    pub recognized: bool,
}

/// Most recent utterances, oldest dropped first
///
/// Purely observational: nothing in interpretation reads it.
#[derive(Debug, Clone)]
pub struct CommandLog {
    entries: VecDeque<LoggedUtterance>,
    capacity: usize,
}

impl CommandLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, text: impl Into<String>, recognized: bool) {
        if self.capacity == 0 {
            return;
        }
        self.entries.push_back(LoggedUtterance {
            text: text.into(),
            received_at: Local::now(),
            recognized,
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Entries, most recent first
    pub fn recent(&self) -> impl Iterator<Item = &LoggedUtterance> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
