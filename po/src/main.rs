use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::{info, warn};

use organizer::cli::{Cli, Command};
use organizer::config::Config;
use organizer::domain::{Task, parse_due_date};
use organizer::{load_tasks, save_tasks, tui};
use settingstore::IniSettings;

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let store_path: PathBuf = cli.store.clone().unwrap_or_else(|| config.store_path.clone());

    info!("organizer starting, store at {}", store_path.display());
    let mut store = IniSettings::open(&store_path).context("Failed to open task store")?;

    match cli.command {
        None => {
            let tasks = load_tasks(&store);
            let tasks = tui::run(tasks, Duration::from_millis(config.tick_rate_ms))?;
            save_tasks(&mut store, &tasks);
            // A failed flush loses nothing but this session's edits; warn,
            // don't crash the exit path.
            if let Err(err) = store.flush() {
                warn!("Failed to persist tasks: {:#}", err);
                eprintln!("{} failed to persist tasks: {:#}", "warning:".yellow(), err);
            }
        }
        Some(Command::List { json }) => {
            let tasks = load_tasks(&store);
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else if tasks.is_empty() {
                println!("No tasks");
            } else {
                for (index, task) in tasks.iter().enumerate() {
                    println!(
                        "{:>3}  {}  {}",
                        index,
                        task.title.bold(),
                        format!("(due {})", task.due_date_display()).dimmed()
                    );
                }
            }
        }
        Some(Command::Add {
            title,
            description,
            date,
        }) => {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(eyre!("Task title cannot be empty"));
            }
            let due_date = match date.as_deref() {
                Some(raw) => Some(
                    parse_due_date(raw).ok_or_else(|| eyre!("Invalid due date (expected DD.MM.YYYY): {}", raw))?,
                ),
                None => None,
            };

            let mut tasks = load_tasks(&store);
            tasks.push(Task::new(title.clone(), description, due_date));
            save_tasks(&mut store, &tasks);
            store.flush().context("Failed to persist tasks")?;
            println!("{} Added task: {}", "✓".green(), title.cyan());
        }
        Some(Command::Show { index }) => {
            let tasks = load_tasks(&store);
            let task = tasks
                .get(index)
                .ok_or_else(|| eyre!("No task at index {} ({} tasks)", index, tasks.len()))?;
            println!("{} {}", "Task:".bold(), task.title);
            println!("{} {}", "Description:".bold(), task.description);
            println!("{} {}", "Due date:".bold(), task.due_date_display());
        }
        Some(Command::Delete { index }) => {
            let mut tasks = load_tasks(&store);
            if index >= tasks.len() {
                return Err(eyre!("No task at index {} ({} tasks)", index, tasks.len()));
            }
            let removed = tasks.remove(index);
            save_tasks(&mut store, &tasks);
            store.flush().context("Failed to persist tasks")?;
            println!("{} Deleted task: {}", "✓".green(), removed.title);
        }
    }

    Ok(())
}
