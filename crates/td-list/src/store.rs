// store.rs: ListStore, the plain-text file behind a GoalList.
//
// The whole list lives in one file, one goal per line, in the codec's line
// format. The file is read once at the start of a run and rewritten in full
// when the run modified the list. A missing file (or parent directory) is
// created empty rather than treated as an error.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ListError;
use crate::list::GoalList;

/// Result of loading the list file.
#[derive(Debug)]
pub struct Loaded {
    /// Goals that decoded, with ids 1..N in file order.
    pub list: GoalList,

    /// Lines that carried no status marker and were left out of `list`.
    pub skipped: Vec<ListError>,

    /// Whether the file did not exist and was created by this load.
    pub created: bool,
}

/// File-backed persistence for a goal list.
#[derive(Debug, Clone)]
pub struct ListStore {
    path: PathBuf,
}

impl ListStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the parent directory and an empty list file if absent.
    /// Returns true when the file had to be created.
    pub fn ensure_exists(&self) -> Result<bool, ListError> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ListError::io(parent, source))?;
        }
        fs::write(&self.path, "").map_err(|source| ListError::io(&self.path, source))?;
        debug!(path = %self.path.display(), "created empty list file");
        Ok(true)
    }

    /// Read and decode the list file, creating it first if needed.
    ///
    /// Malformed lines do not abort the load: each is logged and returned in
    /// `Loaded::skipped` so the caller can tell the user.
    pub fn load(&self) -> Result<Loaded, ListError> {
        let created = self.ensure_exists()?;
        let text =
            fs::read_to_string(&self.path).map_err(|source| ListError::io(&self.path, source))?;

        let (list, skipped) = GoalList::parse_lossy(&text);
        for e in &skipped {
            warn!(path = %self.path.display(), "skipping line: {}", e);
        }
        debug!(path = %self.path.display(), goals = list.len(), "loaded list");

        Ok(Loaded {
            list,
            skipped,
            created,
        })
    }

    /// Overwrite the list file with the rendered list.
    pub fn save(&self, list: &GoalList) -> Result<(), ListError> {
        self.ensure_exists()?;
        fs::write(&self.path, list.render()).map_err(|source| ListError::io(&self.path, source))?;
        debug!(path = %self.path.display(), goals = list.len(), "saved list");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_missing_file_creates_it_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("todo.txt");
        let store = ListStore::new(&path);

        let loaded = store.load().unwrap();
        assert!(loaded.created);
        assert!(loaded.list.is_empty());
        assert!(loaded.skipped.is_empty());
        assert!(path.exists());
    }

    #[test]
    fn load_existing_file_is_not_recreated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("todo.txt");
        fs::write(&path, "1. [ ] a\n2. [x] b\n").unwrap();

        let loaded = ListStore::new(&path).load().unwrap();
        assert!(!loaded.created);
        assert_eq!(loaded.list.len(), 2);
        assert!(loaded.list.get(2).unwrap().is_completed());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = ListStore::new(dir.path().join("todo.txt"));

        let mut list = GoalList::new();
        list.add("first");
        list.add("second");
        list.finish(1);
        store.save(&list).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.list, list);
    }

    #[test]
    fn save_writes_exact_line_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("todo.txt");
        let store = ListStore::new(&path);

        let mut list = GoalList::new();
        for n in 1..=10 {
            list.add(format!("g{n}"));
        }
        list.finish(10);
        store.save(&list).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "1.  [ ] g1");
        assert_eq!(lines[9], "10. [x] g10");
    }

    #[test]
    fn save_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("todo.txt");
        let store = ListStore::new(&path);

        let mut list = GoalList::new();
        list.add("x");
        store.save(&list).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1. [ ] x\n");
    }

    #[test]
    fn save_empty_list_truncates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("todo.txt");
        fs::write(&path, "1. [ ] old\n").unwrap();

        ListStore::new(&path).save(&GoalList::new()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn load_reports_malformed_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("todo.txt");
        fs::write(&path, "1. [ ] keep\nbroken line\n").unwrap();

        let loaded = ListStore::new(&path).load().unwrap();
        assert_eq!(loaded.list.len(), 1);
        assert_eq!(loaded.skipped.len(), 1);
    }
}
