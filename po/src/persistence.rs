//! Task persistence codec
//!
//! Maps the ordered task list to and from a flat key-value settings store.
//! Each task at list position `i` occupies three keys under the `Tasks`
//! namespace:
//!
//! ```text
//! Tasks/task{i}/title
//! Tasks/task{i}/description
//! Tasks/task{i}/date
//! ```
//!
//! Save clears the namespace before writing, so a shrinking list never
//! leaves stale high indices behind. Load reconstructs tasks in numeric
//! index order (`task2` before `task10`), never in raw key order.
//!
//! The codec is stateless; the settings backend is an explicit handle
//! passed into every call.

use log::debug;
use settingstore::SettingsBackend;

use crate::domain::{Task, parse_due_date};

/// Namespace for all task keys.
pub const TASKS_GROUP: &str = "Tasks";

fn task_key(index: usize, field: &str) -> String {
    format!("{}/task{}/{}", TASKS_GROUP, index, field)
}

/// Write the full task list to the store, replacing whatever was there.
///
/// An empty list is valid and clears the namespace. Saving the same list
/// twice leaves the store byte-identical.
pub fn save_tasks(store: &mut impl SettingsBackend, tasks: &[Task]) {
    let prefix = format!("{}/", TASKS_GROUP);
    for key in store.keys_with_prefix(&prefix) {
        store.remove(&key);
    }

    for (index, task) in tasks.iter().enumerate() {
        store.set(&task_key(index, "title"), &task.title);
        store.set(&task_key(index, "description"), &task.description);
        store.set(&task_key(index, "date"), &task.due_date_display());
    }
    debug!("Saved {} tasks to store", tasks.len());
}

/// Read the task list back from the store.
///
/// Indices are recovered from the `task{i}/` key component and visited in
/// ascending numeric order. A missing sub-key reads as the empty string and
/// an empty or unparseable date as an unset due date; the candidate is then
/// subject to the reload filter (non-empty title, non-empty description,
/// valid date), so partially-written indices are dropped rather than
/// crashing the load. An absent namespace yields an empty list.
pub fn load_tasks(store: &impl SettingsBackend) -> Vec<Task> {
    let prefix = format!("{}/", TASKS_GROUP);
    let mut indices = std::collections::BTreeSet::new();
    for key in store.keys_with_prefix(&prefix) {
        match parse_task_index(&key) {
            Some(index) => {
                indices.insert(index);
            }
            None => debug!("Ignoring unrecognized key in {} namespace: {}", TASKS_GROUP, key),
        }
    }

    let mut tasks = Vec::with_capacity(indices.len());
    for index in indices {
        let title = store.get(&task_key(index, "title")).unwrap_or_default();
        let description = store.get(&task_key(index, "description")).unwrap_or_default();
        let date_raw = store.get(&task_key(index, "date")).unwrap_or_default();

        let task = Task::new(title, description, parse_due_date(date_raw));
        if task.is_persistable() {
            tasks.push(task);
        } else {
            debug!("Dropping incomplete task at index {} during load", index);
        }
    }
    debug!("Loaded {} tasks from store", tasks.len());
    tasks
}

/// Extract the numeric index from a `Tasks/task{i}/{field}` key.
fn parse_task_index(key: &str) -> Option<usize> {
    let rest = key.strip_prefix(TASKS_GROUP)?.strip_prefix('/')?;
    let (entry, _field) = rest.split_once('/')?;
    entry.strip_prefix("task")?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use settingstore::MemorySettings;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new("Buy milk", "2%", date(2025, 1, 10)),
            Task::new("Pay rent", "landlord", date(2025, 2, 1)),
        ]
    }

    #[test]
    fn test_save_writes_expected_keys() {
        let mut store = MemorySettings::new();
        save_tasks(&mut store, &sample_tasks());

        assert_eq!(store.entries().len(), 6);
        assert_eq!(store.get("Tasks/task0/title"), Some("Buy milk"));
        assert_eq!(store.get("Tasks/task0/description"), Some("2%"));
        assert_eq!(store.get("Tasks/task0/date"), Some("10.01.2025"));
        assert_eq!(store.get("Tasks/task1/title"), Some("Pay rent"));
        assert_eq!(store.get("Tasks/task1/description"), Some("landlord"));
        assert_eq!(store.get("Tasks/task1/date"), Some("01.02.2025"));
    }

    #[test]
    fn test_round_trip_preserves_order_and_content() {
        let mut store = MemorySettings::new();
        let tasks = sample_tasks();
        save_tasks(&mut store, &tasks);
        assert_eq!(load_tasks(&store), tasks);
    }

    #[test]
    fn test_save_is_idempotent() {
        let mut store = MemorySettings::new();
        let tasks = sample_tasks();
        save_tasks(&mut store, &tasks);
        let first = store.entries().clone();
        save_tasks(&mut store, &tasks);
        assert_eq!(store.entries(), &first);
    }

    #[test]
    fn test_shrink_leaves_no_stale_indices() {
        let mut store = MemorySettings::new();
        let five: Vec<Task> = (0..5)
            .map(|i| Task::new(format!("task {}", i), "desc", date(2025, 3, 1)))
            .collect();
        save_tasks(&mut store, &five);

        let two = &five[..2];
        save_tasks(&mut store, two);

        assert_eq!(store.entries().len(), 6);
        assert_eq!(load_tasks(&store), two.to_vec());
        assert_eq!(store.get("Tasks/task2/title"), None);
    }

    #[test]
    fn test_empty_list_clears_namespace_but_not_others() {
        let mut store = MemorySettings::new();
        store.set("Window/width", "800");
        save_tasks(&mut store, &sample_tasks());
        save_tasks(&mut store, &[]);

        assert!(load_tasks(&store).is_empty());
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.get("Window/width"), Some("800"));
    }

    #[test]
    fn test_empty_store_loads_empty_list() {
        let store = MemorySettings::new();
        assert!(load_tasks(&store).is_empty());
    }

    #[test]
    fn test_empty_description_is_dropped_on_load() {
        let mut store = MemorySettings::new();
        let tasks = vec![
            Task::new("Keep me", "has description", date(2025, 1, 10)),
            Task::new("Drop me", "", date(2025, 1, 11)),
        ];
        save_tasks(&mut store, &tasks);

        let loaded = load_tasks(&store);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "Keep me");
    }

    #[test]
    fn test_unset_due_date_is_dropped_on_load() {
        let mut store = MemorySettings::new();
        save_tasks(&mut store, &[Task::new("No date", "desc", None)]);
        assert!(load_tasks(&store).is_empty());
    }

    #[test]
    fn test_partial_index_is_dropped_not_fatal() {
        let mut store = MemorySettings::new();
        // title with no matching description or date keys
        store.set("Tasks/task0/title", "orphan");
        // complete entry at a later index
        store.set("Tasks/task3/title", "whole");
        store.set("Tasks/task3/description", "desc");
        store.set("Tasks/task3/date", "05.05.2025");
        // noise that does not match the task{i} shape
        store.set("Tasks/garbage", "x");
        store.set("Tasks/taskX/title", "y");

        let loaded = load_tasks(&store);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "whole");
    }

    #[test]
    fn test_indices_load_in_numeric_order() {
        let mut store = MemorySettings::new();
        let tasks: Vec<Task> = (0..12)
            .map(|i| Task::new(format!("task {}", i), "desc", date(2025, 4, 1)))
            .collect();
        save_tasks(&mut store, &tasks);

        // Lexicographic key order would put task10 and task11 before task2
        let loaded = load_tasks(&store);
        let titles: Vec<&str> = loaded.iter().map(|t| t.title.as_str()).collect();
        let expected: Vec<String> = (0..12).map(|i| format!("task {}", i)).collect();
        assert_eq!(titles, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    fn persistable_task() -> impl Strategy<Value = Task> {
        (
            "[a-zA-Z0-9 .,!?/=-]{1,40}",
            "[a-zA-Z0-9 .,!?/=-]{1,80}",
            1970i32..2100,
            1u32..=12,
            1u32..=28,
        )
            .prop_map(|(title, description, y, m, d)| {
                Task::new(title, description, NaiveDate::from_ymd_opt(y, m, d))
            })
    }

    proptest! {
        #[test]
        fn prop_round_trip_law(tasks in proptest::collection::vec(persistable_task(), 0..20)) {
            let mut store = MemorySettings::new();
            save_tasks(&mut store, &tasks);
            prop_assert_eq!(load_tasks(&store), tasks);
        }
    }
}
