// goal.rs: A single entry of the todo list.
//
// A goal's id is its 1-based position in the list. It is not stable: every
// structural change is followed by a renumbering pass (see `GoalList::renumber`).

use std::fmt;

/// Completion status of a goal.
///
/// Each status owns exactly one marker in the line format. The table below is
/// the single source of truth for both directions of the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Not done yet.
    Pending,
    /// Checked off.
    Done,
}

/// Marker table used by the line codec, in lookup order.
pub const MARKERS: [(Status, &str); 2] = [(Status::Pending, "[ ]"), (Status::Done, "[x]")];

impl Status {
    /// The marker written for this status.
    pub fn marker(self) -> &'static str {
        match self {
            Status::Pending => MARKERS[0].1,
            Status::Done => MARKERS[1].1,
        }
    }

    /// Look up the status for an exact marker string.
    pub fn from_marker(marker: &str) -> Option<Self> {
        MARKERS
            .iter()
            .find(|(_, m)| *m == marker)
            .map(|(status, _)| *status)
    }

    pub fn is_completed(self) -> bool {
        self == Status::Done
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pending => write!(f, "pending"),
            Status::Done => write!(f, "done"),
        }
    }
}

/// A single task on the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    /// 1-based position, reassigned after every mutation.
    pub id: usize,

    /// Whether the goal has been checked off.
    pub status: Status,

    /// Free text, written verbatim after the marker.
    pub content: String,
}

impl Goal {
    /// Create a goal with an explicit id and status.
    pub fn new(id: usize, status: Status, content: impl Into<String>) -> Self {
        Self {
            id,
            status,
            content: content.into(),
        }
    }

    /// Create a pending goal.
    pub fn pending(id: usize, content: impl Into<String>) -> Self {
        Self::new(id, Status::Pending, content)
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    pub fn mark_complete(&mut self) {
        self.status = Status::Done;
    }

    pub fn mark_incomplete(&mut self) {
        self.status = Status::Pending;
    }
}
