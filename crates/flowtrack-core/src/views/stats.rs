//! Stats page: counts over both collections, refreshed on a poll
//!
//! The backing stores emit no change notifications, so the page refreshes
//! on a fixed cadence to pick up writes from other tabs. Between polls a
//! stale display is accepted; a storage layer with native change events
//! could swap the poll for a subscription without touching the counts.

#![allow(clippy::cast_precision_loss)] // chart values are single digits

use std::time::{Duration, Instant};

use crate::models::Task;
use crate::repo::{NoteRepository, TaskRepository};
use crate::storage::KvStore;

/// How often the stats page re-reads storage
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Demo series for the weekly activity chart, one value per day
pub const WEEK_ACTIVITY: [u32; 7] = [4, 6, 2, 8, 5, 3, 7];

/// Task counts by completion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    /// Completed tasks
    pub completed: usize,
    /// Tasks still open
    pub active: usize,
}

/// Note counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoteStats {
    /// All notes
    pub total: usize,
}

/// One full read of the numbers the stats page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    /// Task counts
    pub tasks: TaskStats,
    /// Note counts
    pub notes: NoteStats,
}

/// Count tasks by completion state
#[must_use]
pub fn task_stats(tasks: &[Task]) -> TaskStats {
    let completed = tasks.iter().filter(|task| task.completed).count();
    TaskStats {
        completed,
        active: tasks.len() - completed,
    }
}

/// Read both collections fresh and compute the snapshot
#[must_use]
pub fn snapshot(store: &KvStore) -> StatsSnapshot {
    let tasks = TaskRepository::new(store).list();
    let notes = NoteRepository::new(store).list();
    StatsSnapshot {
        tasks: task_stats(&tasks),
        notes: NoteStats { total: notes.len() },
    }
}

/// Bar heights for the activity chart as percentages of the tallest day
#[must_use]
pub fn activity_bars() -> [f32; 7] {
    let max = WEEK_ACTIVITY.iter().copied().max().unwrap_or(1) as f32;
    WEEK_ACTIVITY.map(|value| (value as f32 / max) * 100.0)
}

/// Stats page controller: tracks when the last refresh happened and
/// re-reads on the poll cadence
pub struct StatsView<'a> {
    store: &'a KvStore,
    last_refresh: Option<Instant>,
}

impl<'a> StatsView<'a> {
    /// Create a view over the given store; the first poll always refreshes
    #[must_use]
    pub const fn new(store: &'a KvStore) -> Self {
        Self {
            store,
            last_refresh: None,
        }
    }

    /// Unconditional fresh read
    pub fn refresh(&mut self, now: Instant) -> StatsSnapshot {
        self.last_refresh = Some(now);
        snapshot(self.store)
    }

    /// Refresh if the poll interval has elapsed since the last refresh.
    ///
    /// Returns `None` while the interval is still running; callers keep
    /// displaying the numbers they already have.
    pub fn poll(&mut self, now: Instant) -> Option<StatsSnapshot> {
        match self.last_refresh {
            Some(last) if now.duration_since(last) < POLL_INTERVAL => None,
            _ => Some(self.refresh(now)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store() -> KvStore {
        let store = KvStore::in_memory();
        let tasks = TaskRepository::new(&store);
        tasks.add("open one").unwrap();
        tasks.add("open two").unwrap();
        let done = tasks.add("done one").unwrap();
        tasks.toggle(done.id).unwrap();
        NoteRepository::new(&store).add("only note").unwrap();
        store
    }

    #[test]
    fn test_snapshot_counts_by_state() {
        let store = seeded_store();

        let stats = snapshot(&store);

        assert_eq!(stats.tasks.active, 2);
        assert_eq!(stats.tasks.completed, 1);
        assert_eq!(stats.notes.total, 1);
    }

    #[test]
    fn test_snapshot_of_empty_store_is_zero() {
        let store = KvStore::in_memory();
        assert_eq!(snapshot(&store), StatsSnapshot::default());
    }

    #[test]
    fn test_snapshot_survives_corrupted_collections() {
        let store = KvStore::in_memory();
        store.backend().write("flowtrack_tasks", "%%%");

        assert_eq!(snapshot(&store), StatsSnapshot::default());
    }

    #[test]
    fn test_first_poll_always_refreshes() {
        let store = seeded_store();
        let mut view = StatsView::new(&store);

        let first = view.poll(Instant::now());

        assert!(first.is_some());
    }

    #[test]
    fn test_poll_waits_out_the_interval() {
        let store = seeded_store();
        let mut view = StatsView::new(&store);
        let start = Instant::now();

        assert!(view.poll(start).is_some());
        assert!(view.poll(start + Duration::from_secs(29)).is_none());
        assert!(view.poll(start + POLL_INTERVAL).is_some());
    }

    #[test]
    fn test_poll_picks_up_other_writers() {
        let store = seeded_store();
        let mut view = StatsView::new(&store);
        let start = Instant::now();
        let before = view.poll(start).unwrap();

        // Another surface appends between polls.
        TaskRepository::new(&store).add("from elsewhere").unwrap();

        let after = view.poll(start + POLL_INTERVAL).unwrap();
        assert_eq!(after.tasks.active, before.tasks.active + 1);
    }

    #[test]
    fn test_activity_bars_scale_to_percent_of_max() {
        let bars = activity_bars();

        assert!((bars[3] - 100.0).abs() < f32::EPSILON);
        assert!((bars[0] - 50.0).abs() < f32::EPSILON);
        assert!((bars[2] - 25.0).abs() < f32::EPSILON);
        assert_eq!(bars.len(), WEEK_ACTIVITY.len());
    }
}
