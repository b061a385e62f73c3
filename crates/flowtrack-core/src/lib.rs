//! flowtrack-core - Core library for FlowTrack
//!
//! This crate contains the storage adapter, models, repositories, session
//! store, access gate, and view projections shared by all FlowTrack
//! surfaces. Everything persists through an injected key-value store whose
//! values are whole JSON documents; collections are read and written in
//! full, and corrupted values read as absent instead of failing.

pub mod error;
pub mod gate;
pub mod models;
pub mod repo;
pub mod session;
pub mod storage;
pub mod util;
pub mod views;

pub use error::{Error, Result};
pub use models::{Note, Record, RecordId, Task, Theme, UserProfile};
pub use repo::{CollectionRepository, NoteRepository, TaskRepository};
pub use session::SessionStore;
pub use storage::KvStore;
