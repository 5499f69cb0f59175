//! Core library modules for taskdesk.
//!
//! - **Task model**: [`task`] with validation of drafts, [`status`] for the derived label
//! - **Collection view**: [`collection`] filters, searches, sorts and counts
//! - **Dates**: [`date`] normalizes and formats calendar dates
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`], [`view`]
//!
//! ```rust
//! use taskdesk::libs::status::TaskStatus;
//!
//! assert_eq!(TaskStatus::classify(false, "2024-01-01", "2024-06-01"), TaskStatus::Overdue);
//! ```

pub mod collection;
pub mod config;
pub mod data_storage;
pub mod date;
pub mod messages;
pub mod status;
pub mod task;
pub mod view;
