//! Embassy async tasks

pub mod refresh;

pub use refresh::refresh_task;
