// config.rs: Configuration and path resolution.
//
// Everything lives under one home directory: `$TODO_HOME` when set, otherwise
// `~/.todo`. An optional `config.toml` there can move the list file and log
// directory or change how the CLI behaves:
//
//   list_file = "todo.txt"        # relative to the home directory, or absolute
//   log_dir = "logs"
//   log_date_format = "%Y-%m-%d"
//   clear_screen = true

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ListError;

/// Environment variable overriding the home directory.
pub const HOME_ENV: &str = "TODO_HOME";

/// Directory under the user's home used when `TODO_HOME` is unset.
pub const DEFAULT_HOME_DIR: &str = ".todo";

/// Name of the config file inside the home directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Settings read from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TodoConfig {
    /// List file, relative to the home directory unless absolute.
    #[serde(default = "default_list_file")]
    pub list_file: PathBuf,

    /// Directory for dated log snapshots, relative to home unless absolute.
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// chrono strftime pattern used in log file names.
    #[serde(default = "default_log_date_format")]
    pub log_date_format: String,

    /// Clear the terminal before printing (only when stdout is a terminal).
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            list_file: default_list_file(),
            log_dir: default_log_dir(),
            log_date_format: default_log_date_format(),
            clear_screen: default_clear_screen(),
        }
    }
}

// Serde default functions
fn default_list_file() -> PathBuf {
    PathBuf::from("todo.txt")
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_log_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_clear_screen() -> bool {
    true
}

impl TodoConfig {
    /// Parse a config file.
    pub fn load(path: &Path) -> Result<Self, ListError> {
        let content = fs::read_to_string(path).map_err(|source| ListError::io(path, source))?;
        toml::from_str(&content).map_err(|e| ListError::ConfigError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load the config if the file exists, otherwise use defaults.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ListError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Resolve the configured paths against a home directory.
    pub fn paths(&self, home: &Path) -> TodoPaths {
        TodoPaths {
            home: home.to_path_buf(),
            list_file: home.join(&self.list_file),
            log_dir: home.join(&self.log_dir),
        }
    }
}

/// Concrete file locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPaths {
    pub home: PathBuf,
    pub list_file: PathBuf,
    pub log_dir: PathBuf,
}

/// Resolve the home directory from `TODO_HOME` or the user's home.
pub fn resolve_home() -> Result<PathBuf, ListError> {
    home_from(std::env::var_os(HOME_ENV).map(PathBuf::from), dirs::home_dir())
}

fn home_from(env_home: Option<PathBuf>, user_home: Option<PathBuf>) -> Result<PathBuf, ListError> {
    if let Some(home) = env_home.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(home);
    }
    user_home
        .map(|h| h.join(DEFAULT_HOME_DIR))
        .ok_or(ListError::NoHomeDir)
}
