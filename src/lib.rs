//! # Taskdesk
//!
//! A command-line client for a remote task store served at
//! `{base}/api/v1/tasks`.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit, complete and delete tasks
//! - **Listing**: Filter by status, search title and description, sort by due date
//! - **Status**: Each task is shown as Completed, Overdue or In Progress
//! - **Wire Tolerance**: Accepts bare or `data`-wrapped list responses and
//!   timestamped due dates
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
