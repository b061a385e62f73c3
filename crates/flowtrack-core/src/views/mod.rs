//! View layer: pure projections over fresh repository reads
//!
//! Controllers hold only display state (current filter, search term, poll
//! clock). Every render re-reads its repository and projects the result;
//! the storage read is always authoritative and nothing is cached between
//! renders. Access gating happens in the app shell before a view is
//! constructed, the way the page shell runs the auth check before page
//! scripts get to work.

pub mod notes;
pub mod profile;
pub mod stats;
pub mod tasks;

pub use notes::NotesView;
pub use profile::ProfileView;
pub use stats::{NoteStats, StatsSnapshot, StatsView, TaskStats};
pub use tasks::{TaskFilter, TasksView};
