// session.rs: One run of the CLI against the list file.
//
// A Session owns everything a run touches: the loaded list, where it is
// stored, the dated log, and the terminal handles. It is created once per
// process and consumed by `finish`, which renumbers, displays, and saves.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use td_list::{DatedLog, GoalList, ListStore, TodoConfig, TodoPaths};
use tracing::debug;

use super::help::{self, EMPTY_LIST_HINT, MISSING_ARGS_HINT};
use super::{purge, Action};

const RULE_WIDTH: usize = 32;

pub struct Session<'a> {
    list: GoalList,
    store: ListStore,
    log: DatedLog,
    /// The list differs from what was loaded and must be saved.
    modified: bool,
    /// Print the list when the run finishes.
    show_list: bool,
    out: &'a mut dyn Write,
    input: &'a mut dyn BufRead,
}

impl<'a> Session<'a> {
    /// Load the list file (creating it if missing) and report anything odd
    /// about it to the user.
    pub fn open(
        config: &TodoConfig,
        paths: &TodoPaths,
        out: &'a mut dyn Write,
        input: &'a mut dyn BufRead,
    ) -> anyhow::Result<Self> {
        let store = ListStore::new(&paths.list_file);
        let loaded = store
            .load()
            .with_context(|| format!("failed to load {}", paths.list_file.display()))?;

        if loaded.created {
            writeln!(out, "An output file does not exist, so it will be created.")?;
        }
        for e in &loaded.skipped {
            writeln!(out, "Warning: {} (the line is dropped if the list is saved)", e)?;
        }

        Ok(Self {
            list: loaded.list,
            store,
            log: DatedLog::new(&paths.log_dir, config.log_date_format.clone()),
            modified: false,
            show_list: false,
            out,
            input,
        })
    }

    pub fn list(&self) -> &GoalList {
        &self.list
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Apply one action to the in-memory list.
    pub fn dispatch(&mut self, action: &Action) -> anyhow::Result<()> {
        debug!(?action, "dispatching action");

        match action {
            Action::Display => {
                if self.list.is_empty() {
                    help::write_help(self.out)?;
                    writeln!(self.out)?;
                    writeln!(self.out, "{}", EMPTY_LIST_HINT)?;
                } else {
                    self.show_list = true;
                }
            }
            Action::Add(content) => {
                self.list.add(content.as_str());
                self.record(true);
            }
            Action::CheckOff(ids) => {
                let mut changed = false;
                for id in self.parse_ids(ids)? {
                    changed |= self.list.finish(id);
                }
                self.record(changed);
            }
            Action::Uncheck(ids) => {
                let mut changed = false;
                for id in self.parse_ids(ids)? {
                    changed |= self.list.unfinish(id);
                }
                self.record(changed);
            }
            Action::Edit { id, content } => {
                let changed = match self.parse_id(id)? {
                    Some(id) => self.list.edit(id, content.as_str()),
                    None => false,
                };
                self.record(changed);
            }
            Action::Delete(ids) => {
                // Applied in argument order; each delete shifts later goals up.
                let mut changed = false;
                for id in self.parse_ids(ids)? {
                    changed |= self.list.delete(id).is_some();
                }
                self.record(changed);
            }
            Action::Swap(first, second) => {
                // Ids are 1-based on the command line, positions 0-based.
                let changed = match (self.parse_id(first)?, self.parse_id(second)?) {
                    (Some(a), Some(b)) => {
                        self.list.swap(a.saturating_sub(1), b.saturating_sub(1))
                    }
                    _ => false,
                };
                self.record(changed);
            }
            Action::Sort => {
                let changed = self.list.sort();
                self.record(changed);
            }
            Action::Log => {
                self.list.renumber();
                let path = self.log.write_today(&self.list).with_context(|| {
                    format!("failed to write log in {}", self.log.dir().display())
                })?;
                self.show_list = true;
                writeln!(self.out, "Logged list to {}", path.display())?;
            }
            Action::Purge => {
                if purge::confirm(self.out, self.input)? {
                    self.list.purge(true);
                    writeln!(self.out, "Todo list purged")?;
                    self.record(true);
                }
            }
            Action::Help | Action::Version => help::execute(action, self.out)?,
            Action::MissingArgs { flag } => {
                debug!(%flag, "missing arguments");
                writeln!(self.out, "{}", MISSING_ARGS_HINT)?;
            }
            Action::Unknown(flag) => {
                writeln!(
                    self.out,
                    "Unknown option '{}'. Pass -h or --help for usage.",
                    flag
                )?;
                self.show_list = true;
            }
        }

        Ok(())
    }

    /// Renumber, show the list if the action calls for it, and save when
    /// something changed. Returns whether the file was written.
    pub fn finish(mut self) -> anyhow::Result<bool> {
        self.list.renumber();

        if self.show_list {
            self.display()?;
        }
        if self.modified {
            self.store
                .save(&self.list)
                .with_context(|| format!("failed to save {}", self.store.path().display()))?;
            writeln!(self.out, "Saved to file")?;
        }
        Ok(self.modified)
    }

    fn record(&mut self, changed: bool) {
        self.modified |= changed;
        self.show_list = true;
    }

    fn display(&mut self) -> io::Result<()> {
        writeln!(self.out, "\tTodo: ")?;
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))?;
        write!(self.out, "{}", self.list.render())?;
        Ok(())
    }

    fn parse_ids(&mut self, raw: &[String]) -> io::Result<Vec<i64>> {
        let mut ids = Vec::with_capacity(raw.len());
        for r in raw {
            if let Some(id) = self.parse_id(r)? {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    fn parse_id(&mut self, raw: &str) -> io::Result<Option<i64>> {
        match raw.trim().parse::<i64>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.out, "Ignoring invalid id '{}'", raw)?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    use crate::commands::run_session;

    fn run_with_input(home: &Path, args: &[&str], stdin: &str) -> String {
        let config = TodoConfig::default();
        let paths = config.paths(home);
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let action = Action::parse(&args);

        let mut out = Vec::new();
        let mut input = stdin.as_bytes();
        run_session(&action, &config, &paths, &mut out, &mut input).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn run(home: &Path, args: &[&str]) -> String {
        run_with_input(home, args, "")
    }

    fn list_file(home: &Path) -> String {
        fs::read_to_string(TodoConfig::default().paths(home).list_file).unwrap()
    }

    fn seed(home: &Path, goals: &[&str]) {
        for g in goals {
            run(home, &["-a", g]);
        }
    }

    #[test]
    fn first_run_creates_file_and_shows_help() {
        let home = TempDir::new().unwrap();
        let out = run(home.path(), &[]);
        assert!(out.contains("An output file does not exist"));
        assert!(out.contains("Usage:"));
        assert!(out.contains(EMPTY_LIST_HINT));
        assert!(!out.contains("Saved to file"));
        assert_eq!(list_file(home.path()), "");
    }

    #[test]
    fn add_displays_and_saves() {
        let home = TempDir::new().unwrap();
        let out = run(home.path(), &["+", "buy", "milk"]);
        assert!(out.contains("\tTodo: \n--------------------------------\n1. [ ] buy milk\n"));
        assert!(out.ends_with("Saved to file\n"));
        assert_eq!(list_file(home.path()), "1. [ ] buy milk\n");
    }

    #[test]
    fn check_off_and_uncheck_several_ids() {
        let home = TempDir::new().unwrap();
        seed(home.path(), &["a", "b", "c"]);

        run(home.path(), &["-x", "1", "3"]);
        assert_eq!(list_file(home.path()), "1. [x] a\n2. [ ] b\n3. [x] c\n");

        run(home.path(), &["--uncheck", "3"]);
        assert_eq!(list_file(home.path()), "1. [x] a\n2. [ ] b\n3. [ ] c\n");
    }

    #[test]
    fn out_of_range_ids_do_not_save() {
        let home = TempDir::new().unwrap();
        seed(home.path(), &["a"]);

        for args in [
            vec!["-x", "7"],
            vec!["-d", "2"],
            vec!["-d", "0"],
            vec!["-swp", "1", "5"],
        ] {
            let out = run(home.path(), &args);
            assert!(!out.contains("Saved to file"), "{args:?} saved");
            assert!(out.contains("1. [ ] a"));
        }
        assert_eq!(list_file(home.path()), "1. [ ] a\n");
    }

    #[test]
    fn edit_replaces_content() {
        let home = TempDir::new().unwrap();
        seed(home.path(), &["a", "b"]);
        run(home.path(), &["-e", "2", "bee", "hive"]);
        assert_eq!(list_file(home.path()), "1. [ ] a\n2. [ ] bee hive\n");
    }

    #[test]
    fn delete_applies_ids_in_argument_order() {
        let home = TempDir::new().unwrap();
        seed(home.path(), &["a", "b", "c"]);
        // Deleting 1 shifts c into position 2.
        run(home.path(), &["-d", "1", "2"]);
        assert_eq!(list_file(home.path()), "1. [ ] b\n");
    }

    #[test]
    fn repeated_delete_id_removes_successive_goals() {
        let home = TempDir::new().unwrap();
        seed(home.path(), &["a", "b", "c", "d"]);
        run(home.path(), &["-d", "2", "2"]);
        assert_eq!(list_file(home.path()), "1. [ ] a\n2. [ ] d\n");
    }

    #[test]
    fn add_flattens_line_breaks_in_content() {
        let home = TempDir::new().unwrap();
        seed(home.path(), &["a"]);
        run(home.path(), &["-a", "buy\nmilk"]);
        assert_eq!(list_file(home.path()), "1. [ ] a\n2. [ ] buy milk\n");
    }

    #[test]
    fn swap_converts_ids_to_positions() {
        let home = TempDir::new().unwrap();
        seed(home.path(), &["a", "b", "c"]);
        run(home.path(), &["-swp", "1", "3"]);
        assert_eq!(list_file(home.path()), "1. [ ] c\n2. [ ] b\n3. [ ] a\n");
    }

    #[test]
    fn sort_groups_finished_goals_last() {
        let home = TempDir::new().unwrap();
        seed(home.path(), &["a", "b", "c"]);
        run(home.path(), &["-x", "1"]);
        run(home.path(), &["--sort"]);
        assert_eq!(list_file(home.path()), "1. [ ] b\n2. [ ] c\n3. [x] a\n");
    }

    #[test]
    fn purge_needs_y() {
        let home = TempDir::new().unwrap();
        seed(home.path(), &["a", "b"]);

        let out = run_with_input(home.path(), &["-pg"], "\n");
        assert!(out.contains("Purge canceled"));
        assert_eq!(list_file(home.path()), "1. [ ] a\n2. [ ] b\n");

        let out = run_with_input(home.path(), &["--purge"], "Y\n");
        assert!(out.contains("Todo list purged"));
        assert!(out.contains("Saved to file"));
        assert_eq!(list_file(home.path()), "");
    }

    #[test]
    fn missing_arguments_print_hint_without_saving() {
        let home = TempDir::new().unwrap();
        seed(home.path(), &["a"]);
        let out = run(home.path(), &["-e", "1"]);
        assert!(out.contains(MISSING_ARGS_HINT));
        assert!(!out.contains("Saved to file"));
        assert_eq!(list_file(home.path()), "1. [ ] a\n");
    }

    #[test]
    fn invalid_ids_are_reported_and_skipped() {
        let home = TempDir::new().unwrap();
        seed(home.path(), &["a", "b"]);
        let out = run(home.path(), &["-x", "one", "2"]);
        assert!(out.contains("Ignoring invalid id 'one'"));
        assert_eq!(list_file(home.path()), "1. [ ] a\n2. [x] b\n");
    }

    #[test]
    fn unknown_option_falls_back_to_display() {
        let home = TempDir::new().unwrap();
        seed(home.path(), &["a"]);
        let out = run(home.path(), &["--frobnicate"]);
        assert!(out.contains("Unknown option '--frobnicate'"));
        assert!(out.contains("1. [ ] a"));
        assert!(!out.contains("Saved to file"));
    }

    #[test]
    fn log_writes_snapshot_and_leaves_list_alone() {
        let home = TempDir::new().unwrap();
        seed(home.path(), &["a", "b"]);
        let before = list_file(home.path());

        let out = run(home.path(), &["-lg"]);
        assert!(out.contains("Logged list to"));
        assert!(!out.contains("Saved to file"));

        let log_dir = TodoConfig::default().paths(home.path()).log_dir;
        let logs: Vec<_> = fs::read_dir(&log_dir).unwrap().collect();
        assert_eq!(logs.len(), 1);
        let log_path = logs[0].as_ref().unwrap().path();
        assert_eq!(fs::read_to_string(log_path).unwrap(), before);
        assert_eq!(list_file(home.path()), before);
    }

    #[test]
    fn malformed_lines_are_reported() {
        let home = TempDir::new().unwrap();
        let paths = TodoConfig::default().paths(home.path());
        fs::create_dir_all(&paths.home).unwrap();
        fs::write(&paths.list_file, "1. [ ] a\njunk\n").unwrap();

        let out = run(home.path(), &[]);
        assert!(out.contains("Warning: malformed line 2"));
        assert!(out.contains("1. [ ] a"));
    }

    #[test]
    fn session_reports_modification() {
        let home = TempDir::new().unwrap();
        let config = TodoConfig::default();
        let paths = config.paths(home.path());
        let mut out = Vec::new();
        let mut input: &[u8] = b"";

        let mut session = Session::open(&config, &paths, &mut out, &mut input).unwrap();
        assert!(!session.is_modified());
        session.dispatch(&Action::Add("x".to_string())).unwrap();
        assert!(session.is_modified());
        assert_eq!(session.list().len(), 1);
        assert!(session.finish().unwrap());
    }
}
