//! The task record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Canonical display and storage format for due dates (e.g. `10.01.2025`).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A single task in the list.
///
/// `due_date` is `None` for the "unset/invalid" state; a task with no valid
/// due date is still usable in the session but will not survive a
/// save/load round trip (see `persistence`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
}

impl Task {
    pub fn new(title: impl Into<String>, description: impl Into<String>, due_date: Option<NaiveDate>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date,
        }
    }

    /// Whether this task passes the persistence filter: non-empty title,
    /// non-empty description, valid due date.
    pub fn is_persistable(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty() && self.due_date.is_some()
    }

    /// Due date formatted for display, or the empty string when unset.
    pub fn due_date_display(&self) -> String {
        match self.due_date {
            Some(date) => date.format(DATE_FORMAT).to_string(),
            None => String::new(),
        }
    }
}

/// Parse a `DD.MM.YYYY` string into a due date. Empty or unparseable input
/// yields `None` (the unset state), never an error.
pub fn parse_due_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_date_display_round_trips() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let task = Task::new("Buy milk", "2%", Some(date));
        assert_eq!(task.due_date_display(), "10.01.2025");
        assert_eq!(parse_due_date(&task.due_date_display()), Some(date));
    }

    #[test]
    fn test_parse_due_date_rejects_garbage() {
        assert_eq!(parse_due_date(""), None);
        assert_eq!(parse_due_date("  "), None);
        assert_eq!(parse_due_date("not a date"), None);
        assert_eq!(parse_due_date("2025-01-10"), None);
        // 31st of February is not a calendar date
        assert_eq!(parse_due_date("31.02.2025"), None);
    }

    #[test]
    fn test_is_persistable() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        assert!(Task::new("Pay rent", "landlord", Some(date)).is_persistable());
        assert!(!Task::new("", "landlord", Some(date)).is_persistable());
        assert!(!Task::new("Pay rent", "", Some(date)).is_persistable());
        assert!(!Task::new("Pay rent", "landlord", None).is_persistable());
    }
}
