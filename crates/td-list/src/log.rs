// log.rs: Dated snapshots of the list.
//
// `todo --log` writes the current list to `<log_dir>/todo-<date>.txt` in the
// same line format as the list file. Log files are write-only: nothing reads
// them back. Logging twice on the same day replaces that day's snapshot.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::error::ListError;
use crate::list::GoalList;

/// Writes date-stamped copies of a goal list into a directory.
#[derive(Debug, Clone)]
pub struct DatedLog {
    dir: PathBuf,
    date_format: String,
}

impl DatedLog {
    /// `date_format` is a chrono strftime pattern, e.g. `%Y-%m-%d`.
    pub fn new(dir: impl AsRef<Path>, date_format: impl Into<String>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            date_format: date_format.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the log file for a given day.
    ///
    /// Fails when the configured date format is not a valid strftime pattern.
    pub fn path_for(&self, date: NaiveDate) -> Result<PathBuf, ListError> {
        let mut stamp = String::new();
        write!(stamp, "{}", date.format(&self.date_format)).map_err(|_| {
            ListError::ConfigError {
                path: "log_date_format".to_string(),
                message: format!("invalid date format {:?}", self.date_format),
            }
        })?;
        Ok(self.dir.join(format!("todo-{}.txt", stamp)))
    }

    /// Write the list to the log file for `date`, creating the directory if
    /// needed. Returns the path written.
    pub fn write(&self, list: &GoalList, date: NaiveDate) -> Result<PathBuf, ListError> {
        let path = self.path_for(date)?;
        fs::create_dir_all(&self.dir).map_err(|source| ListError::io(&self.dir, source))?;

        fs::write(&path, list.render()).map_err(|source| ListError::io(&path, source))?;
        debug!(path = %path.display(), goals = list.len(), "wrote list log");
        Ok(path)
    }

    /// Write the list to today's log file (local time).
    pub fn write_today(&self, list: &GoalList) -> Result<PathBuf, ListError> {
        self.write(list, Local::now().date_naive())
    }
}
