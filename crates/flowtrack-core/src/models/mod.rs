//! Data models for FlowTrack

mod note;
mod profile;
mod record;
mod task;

pub use note::Note;
pub use profile::{Theme, UserProfile};
pub use record::{Record, RecordId};
pub use task::Task;
