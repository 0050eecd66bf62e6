//! Pending changes for a single logical operation.
//!
//! A `UnitOfWork` is built per call and handed to `MenuItemRepository::commit`.
//! Repositories must run `prepare_commit` before writing, which applies
//! `stamp_timestamps` to every pending entry.

use chrono::{DateTime, Utc};

use crate::domain::MenuItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Added,
    Modified,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackedEntry {
    pub state: EntryState,
    pub item: MenuItem,
}

#[derive(Debug, Default)]
pub struct UnitOfWork {
    entries: Vec<TrackedEntry>,
}

impl UnitOfWork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: MenuItem) {
        self.entries.push(TrackedEntry {
            state: EntryState::Added,
            item,
        });
    }

    pub fn modify(&mut self, item: MenuItem) {
        self.entries.push(TrackedEntry {
            state: EntryState::Modified,
            item,
        });
    }

    pub fn entries(&self) -> &[TrackedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stamps every entry with `now` and yields them in insertion order.
    pub fn prepare_commit(mut self, now: DateTime<Utc>) -> Vec<TrackedEntry> {
        stamp_timestamps(&mut self.entries, now);
        self.entries
    }
}

/// Pre-commit step: `created_at` is set only on added entries, `updated_at` on all.
pub fn stamp_timestamps(entries: &mut [TrackedEntry], now: DateTime<Utc>) {
    for entry in entries.iter_mut() {
        if entry.state == EntryState::Added {
            entry.item.created_at = now;
        }
        entry.item.updated_at = now;
    }
}
