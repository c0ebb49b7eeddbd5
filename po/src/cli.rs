//! CLI argument parsing for the organizer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "po")]
#[command(author, version, about = "Minimal personal task organizer", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the task store file (overrides config)
    #[arg(short, long)]
    pub store: Option<PathBuf>,

    /// Without a subcommand the interactive TUI is launched
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all stored tasks
    List {
        /// Emit the list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a task to the list
    Add {
        /// Task title (must be non-empty)
        #[arg(required = true)]
        title: String,

        /// Task description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Due date in DD.MM.YYYY format
        #[arg(long)]
        date: Option<String>,
    },

    /// Show full details of one task
    Show {
        /// Zero-based position in the list
        #[arg(required = true)]
        index: usize,
    },

    /// Delete a task from the list
    Delete {
        /// Zero-based position in the list
        #[arg(required = true)]
        index: usize,
    },
}
