//! Event log - a bounded, timestamped record of table callbacks

use chrono::{DateTime, Local};
use std::collections::VecDeque;

const DEFAULT_CAPACITY: usize = 200;

/// A single logged event
#[derive(Debug, Clone)]
pub struct EventLogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
}

impl EventLogEntry {
    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Most recent events, oldest dropped first
#[derive(Debug)]
pub struct EventLog {
    entries: VecDeque<EventLogEntry>,
    capacity: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(EventLogEntry {
            timestamp: Local::now(),
            message: message.into(),
        });
    }

    /// The last `n` entries, newest last
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &EventLogEntry> {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
