//! TUI application state
//!
//! Pure data structures for the TUI. No rendering logic here; views draw
//! from this state and the runner mutates it in response to key events.

use log::debug;

use crate::domain::{Task, parse_due_date};

/// Which field of the add-task form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    DueDate,
}

impl FormField {
    /// Get the next field in the cycle
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::DueDate,
            Self::DueDate => Self::Title,
        }
    }

    /// Get the previous field in the cycle
    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::DueDate,
            Self::Description => Self::Title,
            Self::DueDate => Self::Description,
        }
    }
}

/// Input buffers for the add-task form
#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub focus: FormField,
}

impl TaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer of the currently focused field
    pub fn focused_buffer_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::DueDate => &mut self.due_date,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }
}

/// Confirmation dialog for task deletion
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    pub message: String,
    pub selected_button: bool, // false = No, true = Yes
}

impl ConfirmDialog {
    pub fn delete_task(title: &str) -> Self {
        Self {
            message: format!("Delete \"{}\"?", title),
            selected_button: false,
        }
    }

    pub fn toggle(&mut self) {
        self.selected_button = !self.selected_button;
    }
}

/// Interaction mode (modal)
#[derive(Debug, Clone, Default)]
pub enum InteractionMode {
    /// Normal list navigation
    #[default]
    Normal,
    /// Add-task form (a key)
    AddTask(TaskForm),
    /// Details popup for the selected task (Enter/d)
    Details,
    /// Delete confirmation dialog (x key)
    ConfirmDelete(ConfirmDialog),
    /// Help overlay (? key)
    Help,
}

/// Main TUI application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The task list, in display (= persisted) order
    pub tasks: Vec<Task>,
    /// Index of the selected task
    pub selected: usize,
    /// Current interaction mode
    pub interaction_mode: InteractionMode,
    /// Should the app quit
    pub should_quit: bool,
    /// Last error message, shown in the footer
    pub error_message: Option<String>,
}

impl AppState {
    /// Create state over an already-loaded task list
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    /// The currently selected task, if the list is non-empty
    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.tasks.is_empty() && self.selected < self.tasks.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        if !self.tasks.is_empty() {
            self.selected = self.tasks.len() - 1;
        }
    }

    /// Keep the selection within bounds after the list changed
    fn clamp_selection(&mut self) {
        if self.selected >= self.tasks.len() {
            self.selected = self.tasks.len().saturating_sub(1);
        }
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Open the add-task form
    pub fn open_add_form(&mut self) {
        self.clear_error();
        self.interaction_mode = InteractionMode::AddTask(TaskForm::new());
    }

    /// Submit the add-task form. An empty title is rejected with a blocking
    /// error and the form stays open; an unparseable due date is accepted
    /// as the unset state.
    pub fn submit_add_form(&mut self) {
        let InteractionMode::AddTask(form) = &self.interaction_mode else {
            return;
        };
        let title = form.title.trim().to_string();
        if title.is_empty() {
            self.set_error("Task title cannot be empty");
            return;
        }
        let description = form.description.trim().to_string();
        let due_date = parse_due_date(&form.due_date);
        debug!("Adding task: {}", title);
        self.tasks.push(Task::new(title, description, due_date));
        self.selected = self.tasks.len() - 1;
        self.clear_error();
        self.interaction_mode = InteractionMode::Normal;
    }

    /// Open the details popup for the selected task
    pub fn open_details(&mut self) {
        if self.selected_task().is_some() {
            self.interaction_mode = InteractionMode::Details;
        } else {
            self.set_error("Select a task to view");
        }
    }

    /// Ask for confirmation before deleting the selected task
    pub fn request_delete(&mut self) {
        match self.selected_task().map(|task| task.title.clone()) {
            Some(title) => {
                self.interaction_mode = InteractionMode::ConfirmDelete(ConfirmDialog::delete_task(&title));
            }
            None => self.set_error("Select a task to delete"),
        }
    }

    /// Delete the selected task after the user confirmed
    pub fn confirm_delete(&mut self) {
        if self.selected < self.tasks.len() {
            let task = self.tasks.remove(self.selected);
            debug!("Deleted task: {}", task.title);
            self.clamp_selection();
        }
        self.interaction_mode = InteractionMode::Normal;
    }

    /// Close whatever modal is open without acting
    pub fn close_modal(&mut self) {
        self.interaction_mode = InteractionMode::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_tasks(n: usize) -> AppState {
        let tasks = (0..n)
            .map(|i| Task::new(format!("task {}", i), "desc", None))
            .collect();
        AppState::new(tasks)
    }

    #[test]
    fn test_selection_navigation() {
        let mut state = state_with_tasks(3);
        assert_eq!(state.selected, 0);

        state.select_next();
        assert_eq!(state.selected, 1);

        state.select_last();
        assert_eq!(state.selected, 2);

        // Can't go past the end
        state.select_next();
        assert_eq!(state.selected, 2);

        state.select_first();
        state.select_prev();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_add_form_rejects_empty_title() {
        let mut state = state_with_tasks(0);
        state.open_add_form();
        state.submit_add_form();

        // Form stays open, error is set, nothing was added
        assert!(matches!(state.interaction_mode, InteractionMode::AddTask(_)));
        assert!(state.error_message.is_some());
        assert!(state.tasks.is_empty());
    }

    #[test]
    fn test_add_form_accepts_empty_description() {
        let mut state = state_with_tasks(0);
        state.open_add_form();
        if let InteractionMode::AddTask(form) = &mut state.interaction_mode {
            form.title.push_str("Buy milk");
            form.due_date.push_str("10.01.2025");
        }
        state.submit_add_form();

        assert!(matches!(state.interaction_mode, InteractionMode::Normal));
        assert_eq!(state.tasks.len(), 1);
        assert_eq!(state.tasks[0].title, "Buy milk");
        assert!(state.tasks[0].description.is_empty());
        assert!(state.tasks[0].due_date.is_some());
    }

    #[test]
    fn test_add_form_bad_date_becomes_unset() {
        let mut state = state_with_tasks(0);
        state.open_add_form();
        if let InteractionMode::AddTask(form) = &mut state.interaction_mode {
            form.title.push_str("No real date");
            form.due_date.push_str("soonish");
        }
        state.submit_add_form();

        assert_eq!(state.tasks.len(), 1);
        assert!(state.tasks[0].due_date.is_none());
    }

    #[test]
    fn test_delete_flow_clamps_selection() {
        let mut state = state_with_tasks(2);
        state.select_last();

        state.request_delete();
        assert!(matches!(state.interaction_mode, InteractionMode::ConfirmDelete(_)));

        state.confirm_delete();
        assert_eq!(state.tasks.len(), 1);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_delete_on_empty_list_sets_error() {
        let mut state = state_with_tasks(0);
        state.request_delete();
        assert!(matches!(state.interaction_mode, InteractionMode::Normal));
        assert!(state.error_message.is_some());
    }

    #[test]
    fn test_form_focus_cycle() {
        let mut form = TaskForm::new();
        assert_eq!(form.focus, FormField::Title);
        form.focus_next();
        assert_eq!(form.focus, FormField::Description);
        form.focus_next();
        assert_eq!(form.focus, FormField::DueDate);
        form.focus_next();
        assert_eq!(form.focus, FormField::Title);
        form.focus_prev();
        assert_eq!(form.focus, FormField::DueDate);
    }
}
