// help.rs: Usage text and version output. Neither touches the list file.

use std::io::Write;

use super::Action;

/// Printed when a flag is missing its id or content argument.
pub const MISSING_ARGS_HINT: &str =
    "Missing id or content for the option. Pass -h or --help for what to pass.";

/// Printed in place of the list when it has no goals.
pub const EMPTY_LIST_HINT: &str =
    "The todo list is empty. Add a goal with: todo -a \"what to do\"";

const USAGE: &str = r#"Todo - a command-line todo list
Usage:  todo                    print the todo list
   or:  todo <option>
   or:  todo <option> <id/content>

Options:
  -a,   --add, +         Adds a goal to the list
                            Ex. # todo -a "add description of what to do"

  -x,   --check-off      Check off the goal(s) with the passed id(s)
                            Ex. # todo -x 1
                            Ex. # todo -x 1 2 3

  -ux,  --uncheck        Uncheck the goal(s) with the passed id(s)
                            Ex. # todo -ux 2

  -e,   --edit           Replace the text of the goal with the passed id
                            Ex. # todo -e 2 "new description"

  -d,   --delete, -      Deletes the goal(s) with the passed id(s)
                            Ex. # todo -d 1
                            Ex. # todo -d 4 8 1

  -swp, --swap           Swaps the positions of two goals
                            Ex. # todo -swp 1 3

  -s,   --sort           Moves unfinished goals above finished ones,
                         keeping their order otherwise

  -lg,  --log            Writes the current list to a dated log file

  -pg,  --purge          Clears the entire list (asks for confirmation)

  -h,   --help           Displays this help output

  -v,   --version        Displays version information

Files live in ~/.todo (override with TODO_HOME); see config.toml there."#;

pub fn execute(action: &Action, out: &mut dyn Write) -> anyhow::Result<()> {
    match action {
        Action::Version => write_version(out),
        _ => write_help(out),
    }
}

pub fn write_help(out: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(out, "{}", USAGE)?;
    Ok(())
}

pub fn write_version(out: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(
        out,
        "todo {} ({}, {} build, {})",
        env!("CARGO_PKG_VERSION"),
        env!("TD_GIT_HASH"),
        env!("TD_BUILD_PROFILE"),
        env!("TD_BUILD_DATE")
    )?;
    Ok(())
}
