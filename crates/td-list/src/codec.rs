// codec.rs: One-line text form of a goal.
//
// Line format:
//   <id>.<padding> <marker> <content>
//
// The padding keeps the markers of every line in one column: it is
// `digits(max_id) - digits(id)` spaces, where `max_id` is the id of the last
// goal in the list being rendered. A 12-goal list therefore renders as
//   9.  [ ] ...
//   10. [x] ...
//
// Decoding ignores the id prefix entirely. Ids are positional and get
// reassigned by the list after loading.

use crate::error::ListError;
use crate::goal::{Goal, Status, MARKERS};

/// Number of decimal digits in `n` (`digits(100) == 3`, `digits(0) == 0`).
pub fn digits(mut n: usize) -> usize {
    let mut count = 0;
    while n > 0 {
        n /= 10;
        count += 1;
    }
    count
}

/// Spaces inserted after `<id>.` so markers line up with those of `max_id`.
pub fn pad_size(id: usize, max_id: usize) -> usize {
    digits(max_id).saturating_sub(digits(id))
}

/// Encode a goal as one line (no trailing newline).
pub fn encode_line(goal: &Goal, max_id: usize) -> String {
    format!(
        "{}.{} {} {}",
        goal.id,
        " ".repeat(pad_size(goal.id, max_id)),
        goal.status.marker(),
        goal.content
    )
}

/// Encode a whole sequence of goals, one line each, newline-terminated.
///
/// The padding basis is the id of the last goal, so callers should renumber
/// before rendering.
pub fn encode_lines(goals: &[Goal]) -> String {
    let max_id = goals.last().map(|g| g.id).unwrap_or(0);
    let mut out = String::new();
    for goal in goals {
        out.push_str(&encode_line(goal, max_id));
        out.push('\n');
    }
    out
}

/// Decode one line into a goal with the given id.
///
/// The first status marker on the line splits it: everything before it is the
/// id and padding (discarded), everything after it, trimmed, is the content.
/// `line_number` is 1-based and only used for error reporting.
pub fn decode_line(line: &str, id: usize, line_number: usize) -> Result<Goal, ListError> {
    let malformed = || ListError::MalformedLine {
        line_number,
        line: line.to_string(),
    };
    let (pos, marker) = MARKERS
        .iter()
        .filter_map(|(_, marker)| line.find(marker).map(|pos| (pos, *marker)))
        .min_by_key(|(pos, _)| *pos)
        .ok_or_else(malformed)?;
    let status = Status::from_marker(marker).ok_or_else(malformed)?;

    let content = line[pos + marker.len()..].trim();
    Ok(Goal::new(id, status, content))
}

/// Fold line breaks in goal content into spaces.
///
/// A goal occupies exactly one line of the list file, so `\r\n`, `\r` and
/// `\n` each become a single space.
pub fn single_line(content: &str) -> String {
    content.replace("\r\n", " ").replace(&['\r', '\n'][..], " ")
}

/// Whether a line carries no goal at all and should be skipped.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
