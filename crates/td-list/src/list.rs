// list.rs: GoalList, the in-memory ordered collection of goals.
//
// Callers address goals by 1-based id; storage is a plain Vec indexed by
// position. Ids only become dense again after `renumber()`, which the CLI runs
// once per invocation after dispatching its action.
//
// Every mutation returns whether it changed anything so the caller can decide
// whether the file needs rewriting. Out-of-range ids are silent no-ops.

use tracing::debug;

use crate::codec;
use crate::error::ListError;
use crate::goal::{Goal, Status};

/// Ordered sequence of goals for a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalList {
    goals: Vec<Goal>,
}

impl GoalList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from goals in the given order. Ids are reassigned.
    pub fn from_goals(goals: Vec<Goal>) -> Self {
        let mut list = Self { goals };
        list.renumber();
        list
    }

    /// Parse persisted text, skipping malformed lines.
    ///
    /// Blank lines are ignored. Ids are assigned 1..N in file order over the
    /// lines that decoded. Malformed lines are returned alongside the list.
    pub fn parse_lossy(text: &str) -> (Self, Vec<ListError>) {
        let mut goals = Vec::new();
        let mut skipped = Vec::new();

        for (index, line) in text.lines().enumerate() {
            if codec::is_blank(line) {
                continue;
            }
            match codec::decode_line(line, goals.len() + 1, index + 1) {
                Ok(goal) => goals.push(goal),
                Err(e) => skipped.push(e),
            }
        }

        (Self::from_goals(goals), skipped)
    }

    /// Render the list in the persisted line format.
    pub fn render(&self) -> String {
        codec::encode_lines(&self.goals)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Look up a goal by 1-based id.
    pub fn get(&self, id: i64) -> Option<&Goal> {
        self.position(id).map(|pos| &self.goals[pos])
    }

    /// Append a pending goal. Its id is the new length.
    ///
    /// Line breaks in `content` are folded into spaces.
    pub fn add(&mut self, content: impl AsRef<str>) -> &Goal {
        let id = self.goals.len() + 1;
        self.goals
            .push(Goal::pending(id, codec::single_line(content.as_ref())));
        debug!(id, "added goal");
        &self.goals[id - 1]
    }

    /// Mark the goal with this id as done.
    pub fn finish(&mut self, id: i64) -> bool {
        self.set_status(id, Status::Done)
    }

    /// Mark the goal with this id as not done.
    pub fn unfinish(&mut self, id: i64) -> bool {
        self.set_status(id, Status::Pending)
    }

    /// Replace the content of the goal with this id. Line breaks are folded
    /// into spaces.
    pub fn edit(&mut self, id: i64, content: impl AsRef<str>) -> bool {
        let Some(pos) = self.position(id) else {
            debug!(id, "edit ignored: id out of range");
            return false;
        };
        self.goals[pos].content = codec::single_line(content.as_ref());
        debug!(id, "edited goal");
        true
    }

    /// Remove the goal with this id; later goals shift down one position.
    pub fn delete(&mut self, id: i64) -> Option<Goal> {
        let Some(pos) = self.position(id) else {
            debug!(id, "delete ignored: id out of range");
            return None;
        };
        debug!(id, "deleted goal");
        Some(self.goals.remove(pos))
    }

    /// Exchange the goals at two 0-based positions.
    ///
    /// Does nothing unless both positions are inside the list. Swapping a
    /// position with itself is accepted but reports no change.
    pub fn swap(&mut self, pos1: i64, pos2: i64) -> bool {
        let (Some(a), Some(b)) = (self.index(pos1), self.index(pos2)) else {
            debug!(pos1, pos2, "swap ignored: position out of range");
            return false;
        };
        self.goals.swap(a, b);
        debug!(pos1, pos2, "swapped goals");
        a != b
    }

    /// 0-based positions of pending and completed goals, each in list order.
    pub fn partition(&self) -> (Vec<usize>, Vec<usize>) {
        (0..self.goals.len()).partition(|&pos| !self.goals[pos].is_completed())
    }

    /// Move every pending goal ahead of every completed goal, keeping the
    /// relative order inside each group.
    ///
    /// The partition is taken from the current statuses, so goals finished
    /// earlier in the same run sort with the completed group.
    pub fn sort(&mut self) -> bool {
        let before: Vec<Status> = self.goals.iter().map(|g| g.status).collect();
        let (pending, completed) = self.partition();

        let mut slots: Vec<Option<Goal>> = self.goals.drain(..).map(Some).collect();
        self.goals = pending
            .into_iter()
            .chain(completed)
            .filter_map(|pos| slots[pos].take())
            .collect();

        let changed = self.goals.iter().map(|g| g.status).ne(before);
        debug!(changed, "sorted goals");
        changed
    }

    /// Empty the list, but only when the user confirmed.
    pub fn purge(&mut self, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }
        let removed = self.goals.len();
        self.goals.clear();
        debug!(removed, "purged goal list");
        true
    }

    /// Reassign ids 1..N by position.
    pub fn renumber(&mut self) {
        for (pos, goal) in self.goals.iter_mut().enumerate() {
            goal.id = pos + 1;
        }
    }

    fn set_status(&mut self, id: i64, status: Status) -> bool {
        let Some(pos) = self.position(id) else {
            debug!(id, %status, "status change ignored: id out of range");
            return false;
        };
        let goal = &mut self.goals[pos];
        let changed = goal.status != status;
        goal.status = status;
        debug!(id, %status, "set goal status");
        changed
    }

    /// Convert a 1-based id to a Vec index, rejecting both ends.
    fn position(&self, id: i64) -> Option<usize> {
        if id <= 0 {
            return None;
        }
        self.index(id - 1)
    }

    /// Validate a 0-based position.
    fn index(&self, pos: i64) -> Option<usize> {
        usize::try_from(pos).ok().filter(|&p| p < self.goals.len())
    }
}
