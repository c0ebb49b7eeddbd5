//! TUI runner - owns the terminal and the event loop
//!
//! The runner draws the current state, blocks on the next event (with a
//! tick timeout for redraws), and dispatches key presses to the state
//! according to the active interaction mode. When the user quits it hands
//! the final task list back to the caller, which is responsible for
//! persisting it.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use eyre::Result;
use log::debug;

use crate::domain::Task;

use super::Tui;
use super::events::{Event, EventHandler};
use super::state::{AppState, InteractionMode};
use super::views;

/// TUI runner that manages the terminal and event loop
pub struct TuiRunner {
    /// Application state
    app: AppState,
    /// Terminal handle
    terminal: Tui,
    /// Event handler
    event_handler: EventHandler,
}

impl TuiRunner {
    pub fn new(terminal: Tui, tasks: Vec<Task>, tick_rate: Duration) -> Self {
        Self {
            app: AppState::new(tasks),
            terminal,
            event_handler: EventHandler::new(tick_rate),
        }
    }

    /// Run until the user quits; returns the task list as last displayed
    pub fn run(&mut self) -> Result<Vec<Task>> {
        debug!("TUI session starting with {} tasks", self.app.tasks.len());
        while !self.app.should_quit {
            self.terminal.draw(|frame| views::render(&self.app, frame))?;

            match self.event_handler.next()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(_, _) | Event::Tick => {}
            }
        }
        debug!("TUI session ended with {} tasks", self.app.tasks.len());
        Ok(std::mem::take(&mut self.app.tasks))
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Some terminals emit both press and release events
        if key.kind != KeyEventKind::Press {
            return;
        }
        match &self.app.interaction_mode {
            InteractionMode::Normal => self.handle_normal_key(key),
            InteractionMode::AddTask(_) => self.handle_form_key(key),
            InteractionMode::Details => self.handle_details_key(key),
            InteractionMode::ConfirmDelete(_) => self.handle_confirm_key(key),
            InteractionMode::Help => self.handle_help_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.app.should_quit = true;
            }
            KeyCode::Char('a') => self.app.open_add_form(),
            KeyCode::Enter | KeyCode::Char('d') => self.app.open_details(),
            KeyCode::Char('x') | KeyCode::Delete => self.app.request_delete(),
            KeyCode::Down | KeyCode::Char('j') => self.app.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.app.select_prev(),
            KeyCode::Char('g') => self.app.select_first(),
            KeyCode::Char('G') => self.app.select_last(),
            KeyCode::Char('?') => {
                self.app.interaction_mode = InteractionMode::Help;
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let InteractionMode::AddTask(form) = &mut self.app.interaction_mode else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.app.close_modal(),
            KeyCode::Enter => self.app.submit_add_form(),
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Backspace => {
                form.focused_buffer_mut().pop();
            }
            KeyCode::Char(c) => {
                form.focused_buffer_mut().push(c);
                self.app.clear_error();
            }
            _ => {}
        }
    }

    fn handle_details_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('d') => self.app.close_modal(),
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        let InteractionMode::ConfirmDelete(dialog) = &mut self.app.interaction_mode else {
            return;
        };
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => dialog.toggle(),
            KeyCode::Char('y') | KeyCode::Char('Y') => self.app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.app.close_modal(),
            KeyCode::Enter => {
                if dialog.selected_button {
                    self.app.confirm_delete();
                } else {
                    self.app.close_modal();
                }
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => self.app.close_modal(),
            _ => {}
        }
    }
}
