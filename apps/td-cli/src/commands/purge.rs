// purge.rs: Interactive confirmation before clearing the list.

use std::io::{self, BufRead, Write};

pub const PROMPT: &str =
    "Continue with purge? Warning! Once confirmed, it cannot be reversed. [y,N]";

/// Ask on `out`, read one line from `input`.
///
/// Only `y` or `Y` confirms. `n`/`N` declines quietly; anything else,
/// including an empty line or end of input, declines with a notice.
pub fn confirm(out: &mut dyn Write, input: &mut dyn BufRead) -> io::Result<bool> {
    writeln!(out, "{}", PROMPT)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    match answer.trim_end_matches(&['\r', '\n'][..]) {
        "y" | "Y" => Ok(true),
        "n" | "N" => Ok(false),
        _ => {
            writeln!(out, "Purge canceled")?;
            Ok(false)
        }
    }
}
