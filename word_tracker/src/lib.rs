//! Tracks which files, and which lines of those files, every word appears
//! in.
//!
//! Words are kept in a [`bstree::BSTree`] of [`WordEntry`] values ordered by
//! the word, and persisted between runs with [`snapshot`].

pub mod config;
pub mod entry;
pub mod error;
pub mod format;
pub mod snapshot;
pub mod tokenize;
pub mod tracker;

pub use config::Config;
pub use entry::{FileOccurrences, WordEntry};
pub use error::{ArgsError, SnapshotError, TrackerError};
pub use format::Format;
pub use tracker::WordTracker;
