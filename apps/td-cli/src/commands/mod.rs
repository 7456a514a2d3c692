// commands: Action parsing and dispatch for the `todo` binary.
//
// The command line is one flag followed by its positional arguments:
//   todo                     show the list
//   todo -a buy milk         add a goal
//   todo -x 1 3              check off goals 1 and 3
//   todo -swp 2 5            swap goals 2 and 5
//
// Flags keep their historical spellings (`-ux`, `-swp`, `+`, `-`), which is
// why they are matched here rather than declared as clap arguments.

pub mod help;
pub mod purge;
pub mod session;

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Context;
use td_list::{config::CONFIG_FILE, resolve_home, TodoConfig, TodoPaths};

use session::Session;

/// One parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print the list (or help when the list is empty).
    Display,
    /// `-a`, `--add`, `+`: remaining arguments joined with spaces.
    Add(String),
    /// `-x`, `--check-off`: raw id arguments.
    CheckOff(Vec<String>),
    /// `-ux`, `--uncheck`
    Uncheck(Vec<String>),
    /// `-e`, `--edit`
    Edit { id: String, content: String },
    /// `-d`, `--delete`, `-`
    Delete(Vec<String>),
    /// `-swp`, `--swap`: two 1-based ids.
    Swap(String, String),
    /// `-s`, `--sort`
    Sort,
    /// `-h`, `--help`
    Help,
    /// `-lg`, `--log`
    Log,
    /// `-pg`, `--purge`
    Purge,
    /// `-v`, `--version`
    Version,
    /// A known flag was given without the arguments it needs.
    MissingArgs { flag: String },
    /// Anything that is not a known flag.
    Unknown(String),
}

impl Action {
    /// Parse the arguments that follow the program name.
    pub fn parse(args: &[String]) -> Self {
        let Some((flag, rest)) = args.split_first() else {
            return Action::Display;
        };
        let missing = || Action::MissingArgs { flag: flag.clone() };

        match flag.as_str() {
            "-a" | "--add" | "+" => {
                if rest.is_empty() {
                    missing()
                } else {
                    Action::Add(rest.join(" "))
                }
            }
            "-x" | "--check-off" => with_ids(rest, Action::CheckOff).unwrap_or_else(missing),
            "-ux" | "--uncheck" => with_ids(rest, Action::Uncheck).unwrap_or_else(missing),
            "-d" | "--delete" | "-" => with_ids(rest, Action::Delete).unwrap_or_else(missing),
            "-e" | "--edit" => match rest {
                [id, content @ ..] if !content.is_empty() => Action::Edit {
                    id: id.clone(),
                    content: content.join(" "),
                },
                _ => missing(),
            },
            "-swp" | "--swap" => match rest {
                [first, second, ..] => Action::Swap(first.clone(), second.clone()),
                _ => missing(),
            },
            "-s" | "--sort" => Action::Sort,
            "-h" | "--help" => Action::Help,
            "-lg" | "--log" => Action::Log,
            "-pg" | "--purge" => Action::Purge,
            "-v" | "--version" => Action::Version,
            other => Action::Unknown(other.to_string()),
        }
    }

    /// Whether this action needs the list file at all.
    pub fn touches_list(&self) -> bool {
        !matches!(self, Action::Help | Action::Version)
    }
}

fn with_ids(rest: &[String], build: fn(Vec<String>) -> Action) -> Option<Action> {
    (!rest.is_empty()).then(|| build(rest.to_vec()))
}

/// Terminal escape: cursor home, then clear the screen.
const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Entry point used by `main`: resolves settings only for actions that need
/// the list file.
pub fn execute(
    action: &Action,
    out: &mut dyn Write,
    input: &mut dyn BufRead,
) -> anyhow::Result<()> {
    if !action.touches_list() {
        return help::execute(action, out);
    }

    let (config, paths) = load_settings()?;
    if config.clear_screen && io::stdout().is_terminal() {
        write!(out, "{}", CLEAR_SCREEN)?;
    }
    run_session(action, &config, &paths, out, input)
}

/// Resolve the home directory, read `config.toml`, and derive file paths.
pub fn load_settings() -> anyhow::Result<(TodoConfig, TodoPaths)> {
    let home = resolve_home()?;
    let config_path = home.join(CONFIG_FILE);
    let config = TodoConfig::load_or_default(&config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    let paths = config.paths(&home);
    tracing::debug!(list = %paths.list_file.display(), "resolved settings");
    Ok((config, paths))
}

/// Run one list action to completion: load, dispatch, renumber, display, save.
pub fn run_session(
    action: &Action,
    config: &TodoConfig,
    paths: &TodoPaths,
    out: &mut dyn Write,
    input: &mut dyn BufRead,
) -> anyhow::Result<()> {
    let mut session = Session::open(config, paths, out, input)?;
    session.dispatch(action)?;
    session.finish()?;
    Ok(())
}
