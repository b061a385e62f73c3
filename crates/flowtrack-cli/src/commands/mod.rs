//! One module per page-equivalent surface, plus shared helpers.

pub mod auth;
pub mod common;
pub mod completions;
pub mod note;
pub mod profile;
pub mod stats;
pub mod task;
