//! Tasks page projection: filter, search, newest first

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use crate::models::Task;
use crate::repo::TaskRepository;
use crate::storage::KvStore;

/// Status filter selected on the tasks page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    /// Every task
    #[default]
    All,
    /// Not yet completed
    Active,
    /// Completed only
    Completed,
}

impl TaskFilter {
    /// Whether `task` passes this filter
    #[must_use]
    pub const fn accepts(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }

    /// Message shown when the filtered list is empty and no search is
    /// active
    #[must_use]
    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::All => "No tasks yet. Add one above!",
            Self::Active => "No active tasks.",
            Self::Completed => "No completed tasks.",
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        };
        write!(f, "{name}")
    }
}

impl FromStr for TaskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(format!(
                "unknown filter '{other}' (expected all, active, or completed)"
            )),
        }
    }
}

/// Message shown when a search term matches nothing
pub const NO_MATCH_MESSAGE: &str = "No tasks found matching your search";

/// Project tasks for display: status filter, then case-insensitive
/// substring search on the text, then newest first. Ties keep insertion
/// order (the sort is stable).
#[must_use]
pub fn project(tasks: &[Task], filter: TaskFilter, search: &str) -> Vec<Task> {
    let term = search.trim().to_lowercase();
    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|task| filter.accepts(task))
        .filter(|task| term.is_empty() || task.text.to_lowercase().contains(&term))
        .cloned()
        .collect();
    visible.sort_by_key(|task| Reverse(task.created_at));
    visible
}

/// Tasks page controller: holds the selected filter and search term,
/// re-reads the repository on every render
pub struct TasksView<'a> {
    repo: TaskRepository<'a>,
    filter: TaskFilter,
    search: String,
}

impl<'a> TasksView<'a> {
    /// Create a view over the given store, showing all tasks
    #[must_use]
    pub const fn new(store: &'a KvStore) -> Self {
        Self {
            repo: TaskRepository::new(store),
            filter: TaskFilter::All,
            search: String::new(),
        }
    }

    /// Select the status filter
    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    /// Set the search term; empty means no search
    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    /// Fresh read and projection
    #[must_use]
    pub fn render(&self) -> Vec<Task> {
        project(&self.repo.list(), self.filter, &self.search)
    }

    /// Message to show in place of an empty rendered list
    #[must_use]
    pub fn empty_message(&self) -> &'static str {
        if self.search.trim().is_empty() {
            self.filter.empty_message()
        } else {
            NO_MATCH_MESSAGE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_mixed_tasks() -> KvStore {
        let store = KvStore::in_memory();
        let repo = TaskRepository::new(&store);
        repo.add("Write report").unwrap();
        let done = repo.add("Buy milk").unwrap();
        repo.toggle(done.id).unwrap();
        store
    }

    #[test]
    fn test_filter_projection_partitions_by_status() {
        let store = store_with_mixed_tasks();
        let tasks = TaskRepository::new(&store).list();

        let active = project(&tasks, TaskFilter::Active, "");
        let completed = project(&tasks, TaskFilter::Completed, "");
        let all = project(&tasks, TaskFilter::All, "");

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].text, "Write report");
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].text, "Buy milk");
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_projection_sorts_newest_first() {
        let mut tasks = vec![Task::new("older"), Task::new("newer")];
        tasks[0].created_at = 100;
        tasks[1].created_at = 200;

        let projected = project(&tasks, TaskFilter::All, "");

        assert_eq!(projected[0].text, "newer");
        assert_eq!(projected[1].text, "older");
    }

    #[test]
    fn test_projection_tie_keeps_insertion_order() {
        let mut tasks = vec![Task::new("first in"), Task::new("second in")];
        tasks[0].created_at = 100;
        tasks[1].created_at = 100;

        let projected = project(&tasks, TaskFilter::All, "");

        assert_eq!(projected[0].text, "first in");
        assert_eq!(projected[1].text, "second in");
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let tasks = vec![Task::new("Email the TEAM"), Task::new("Water plants")];

        let hits = project(&tasks, TaskFilter::All, "team");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "Email the TEAM");
    }

    #[test]
    fn test_search_composes_with_filter() {
        let store = store_with_mixed_tasks();
        let tasks = TaskRepository::new(&store).list();

        // "Buy milk" matches the term but is completed
        let hits = project(&tasks, TaskFilter::Active, "milk");

        assert!(hits.is_empty());
    }

    #[test]
    fn test_view_rerenders_from_fresh_read() {
        let store = KvStore::in_memory();
        let view = TasksView::new(&store);
        assert!(view.render().is_empty());

        TaskRepository::new(&store).add("appeared later").unwrap();

        assert_eq!(view.render().len(), 1);
    }

    #[test]
    fn test_empty_messages_follow_filter_and_search() {
        let store = KvStore::in_memory();
        let mut view = TasksView::new(&store);

        assert_eq!(view.empty_message(), "No tasks yet. Add one above!");

        view.set_filter(TaskFilter::Active);
        assert_eq!(view.empty_message(), "No active tasks.");

        view.set_filter(TaskFilter::Completed);
        assert_eq!(view.empty_message(), "No completed tasks.");

        view.set_search("xyz");
        assert_eq!(view.empty_message(), NO_MATCH_MESSAGE);
    }

    #[test]
    fn test_filter_parses_from_str() {
        assert_eq!("all".parse::<TaskFilter>().unwrap(), TaskFilter::All);
        assert_eq!(" Active ".parse::<TaskFilter>().unwrap(), TaskFilter::Active);
        assert_eq!(
            "COMPLETED".parse::<TaskFilter>().unwrap(),
            TaskFilter::Completed
        );
        assert!("done".parse::<TaskFilter>().is_err());
    }
}
