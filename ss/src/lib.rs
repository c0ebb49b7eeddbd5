//! SettingStore - flat key-value settings persistence
//!
//! A small, backend-agnostic settings store. Keys are flat `/`-separated
//! paths; the first path segment is the section (namespace). Consumers talk
//! to the [`SettingsBackend`] trait and never care which backend is behind
//! it.
//!
//! # On-disk format (IniSettings)
//!
//! ```text
//! [Tasks]
//! task0/title=Buy milk
//! task0/description=2% if they have it
//! task0/date=10.01.2025
//! ```
//!
//! # Example
//!
//! ```ignore
//! use settingstore::{IniSettings, SettingsBackend};
//!
//! let mut settings = IniSettings::open("tasks.ini")?;
//! settings.set("Tasks/task0/title", "Buy milk");
//! settings.flush()?;
//! ```

mod store;

pub use store::{IniSettings, MemorySettings, SettingsBackend};
