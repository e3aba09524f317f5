// src/storage/mod.rs
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveTime};

use crate::error::Result;

pub const LOG_FILE_NAME: &str = "Generated_Passwords.txt";
const TIME_FORMAT: &str = "%H:%M:%S";
const SEPARATOR: &str = " - ";

/// One line of a category log: `HH:MM:SS - <password>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub time: NaiveTime,
    pub password: String,
}

impl LogEntry {
    pub fn now(password: &str) -> Self {
        Self {
            time: Local::now().time(),
            password: password.to_string(),
        }
    }

    pub fn to_line(&self) -> String {
        format!("{}{}{}", self.time.format(TIME_FORMAT), SEPARATOR, self.password)
    }

    pub fn parse(line: &str) -> Option<Self> {
        let (time, password) = line.split_once(SEPARATOR)?;
        let time = NaiveTime::parse_from_str(time, TIME_FORMAT).ok()?;

        Some(Self {
            time,
            password: password.to_string(),
        })
    }
}

/// Append-only password log, one directory per category under `root`.
pub struct PasswordStore {
    root: PathBuf,
}

impl PasswordStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn log_path(&self, category: &str) -> PathBuf {
        self.root.join(category).join(LOG_FILE_NAME)
    }

    pub fn save(&self, password: &str, category: &str) -> Result<()> {
        let dir = self.root.join(category);
        fs::create_dir_all(&dir)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE_NAME))?;

        let line = format!("{}\n", LogEntry::now(password).to_line());
        file.write_all(line.as_bytes())?;

        log::info!("Saved a {} password to {}", category, dir.display());
        Ok(())
    }

    /// Reads a category log back in file order. A missing log is empty.
    pub fn entries(&self, category: &str) -> Result<Vec<LogEntry>> {
        let path = self.log_path(category);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        for (number, line) in content.lines().enumerate() {
            match LogEntry::parse(line) {
                Some(entry) => entries.push(entry),
                None => log::warn!(
                    "Skipping malformed line {} in {}",
                    number + 1,
                    path.display()
                ),
            }
        }

        Ok(entries)
    }

    pub fn last_entry(&self, category: &str) -> Result<Option<LogEntry>> {
        Ok(self.entries(category)?.pop())
    }
}
