//! Domain types for the organizer.

mod task;

pub use task::{DATE_FORMAT, Task, parse_due_date};
