//! Settings backends: the `SettingsBackend` trait, the INI-style file
//! backend used in production, and an in-memory backend for tests.

use eyre::{Context, Result};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A flat key-value settings store.
///
/// Keys are `/`-separated paths (e.g. `Tasks/task0/title`). The trait is
/// deliberately tiny: get, set, remove, and prefix enumeration are all a
/// persistence codec needs. Mutations are in-memory; file-backed
/// implementations persist on [`IniSettings::flush`].
pub trait SettingsBackend {
    /// Look up a value by exact key.
    fn get(&self, key: &str) -> Option<&str>;

    /// Insert or overwrite a value.
    fn set(&mut self, key: &str, value: &str);

    /// Remove a key. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str);

    /// All keys starting with `prefix`, in sorted order.
    fn keys_with_prefix(&self, prefix: &str) -> Vec<String>;
}

/// INI-style file-backed settings store.
///
/// The whole file is read into memory on open and rewritten on flush.
/// Sections come from the first `/`-segment of each key; the remainder of
/// the key is written as-is before the `=`. The map is a `BTreeMap` so the
/// file output is deterministic.
#[derive(Debug)]
pub struct IniSettings {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl IniSettings {
    /// Open a settings file, or start empty if it does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)
                .context(format!("Failed to read settings file: {}", path.display()))?;
            parse_ini(&content)
        } else {
            debug!("Settings file {} absent, starting empty", path.display());
            BTreeMap::new()
        };
        debug!("Opened settings store at {} ({} entries)", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    /// Write the current entries back to disk, creating parent directories
    /// as needed.
    pub fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .context(format!("Failed to create settings directory: {}", parent.display()))?;
        }
        let content = render_ini(&self.entries);
        fs::write(&self.path, content)
            .context(format!("Failed to write settings file: {}", self.path.display()))?;
        debug!("Flushed {} entries to {}", self.entries.len(), self.path.display());
        Ok(())
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SettingsBackend for IniSettings {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.entries
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, _)| k.clone())
            .collect()
    }
}

/// In-memory settings store for tests and transient use.
#[derive(Debug, Default)]
pub struct MemorySettings {
    entries: BTreeMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries, for store-level assertions.
    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }
}

impl SettingsBackend for MemorySettings {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.entries
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, _)| k.clone())
            .collect()
    }
}

/// Escape a value for a single INI line. Newlines and backslashes must
/// round-trip; everything else is written verbatim.
fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

fn unescape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn render_ini(entries: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    let mut current_section: Option<&str> = None;
    for (key, value) in entries {
        let (section, rest) = match key.split_once('/') {
            Some((section, rest)) => (section, rest),
            // Sectionless keys land under a "General" header
            None => ("General", key.as_str()),
        };
        if current_section != Some(section) {
            if current_section.is_some() {
                out.push('\n');
            }
            out.push_str(&format!("[{}]\n", section));
            current_section = Some(section);
        }
        out.push_str(&format!("{}={}\n", rest, escape_value(value)));
    }
    out
}

fn parse_ini(content: &str) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();
    let mut section = String::from("General");
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }
        if let Some(name) = trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            section = name.to_string();
            continue;
        }
        match line.split_once('=') {
            Some((rest, value)) => {
                let key = format!("{}/{}", section, rest);
                entries.insert(key, unescape_value(value));
            }
            None => warn!("Skipping malformed settings line: {}", line),
        }
    }
    entries
}
