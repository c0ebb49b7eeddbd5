//! Organizer - minimal personal task list with persistence
//!
//! An ordered list of tasks (title, description, due date) shown in a
//! terminal UI, persisted across runs through a flat key-value settings
//! store. The persistence codec is the one component with a real contract:
//! save clears the `Tasks` namespace and writes contiguous indices, load
//! reconstructs tasks in numeric index order and silently drops incomplete
//! entries.
//!
//! # Persisted layout
//!
//! ```text
//! [Tasks]
//! task0/title=Buy milk
//! task0/description=2%
//! task0/date=10.01.2025
//! task1/title=Pay rent
//! ...
//! ```
//!
//! # Modules
//!
//! - [`domain`] - the `Task` record and date handling
//! - [`persistence`] - save/load codec over a settings backend
//! - [`tui`] - interactive session (add / details / delete)
//! - [`config`] - YAML configuration
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod domain;
pub mod persistence;
pub mod tui;

// Re-export commonly used types
pub use config::Config;
pub use domain::{DATE_FORMAT, Task, parse_due_date};
pub use persistence::{TASKS_GROUP, load_tasks, save_tasks};
