//! Terminal User Interface for the organizer
//!
//! A single list of tasks with three operations, mirroring the classic
//! organizer window:
//! - `a` to add a task (title, description, due date form)
//! - `Enter`/`d` to view details of the selected task
//! - `x` to delete the selected task (with confirmation)
//!
//! The whole UI is synchronous and single-threaded; events are polled with
//! a timeout on the one thread of control.

mod events;
mod runner;
pub mod state;
mod views;

pub use events::{Event, EventHandler};
pub use runner::TuiRunner;
pub use state::{AppState, InteractionMode};

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use eyre::Result;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::domain::Task;

/// Terminal type alias
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
pub fn restore() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the interactive session over the given task list and return the
/// list as it stood when the user quit.
pub fn run(tasks: Vec<Task>, tick_rate: Duration) -> Result<Vec<Task>> {
    let terminal = init()?;

    // Use a guard to ensure terminal is restored even on early return/error
    struct TerminalGuard;
    impl Drop for TerminalGuard {
        fn drop(&mut self) {
            let _ = restore();
        }
    }
    let _guard = TerminalGuard;

    let mut runner = TuiRunner::new(terminal, tasks, tick_rate);
    runner.run()
}
