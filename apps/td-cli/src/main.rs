//! # td-cli
//!
//! The `todo` command: a personal task list kept in a plain-text file.
//!
//! Every invocation loads `~/.todo/todo.txt`, applies at most one action,
//! renumbers the goals, and writes the file back if anything changed:
//! - `todo` prints the list
//! - `todo -a <text>` / `-x <id>...` / `-ux <id>...` / `-e <id> <text>`
//! - `todo -d <id>...` / `-swp <id> <id>` / `-s` / `-lg` / `-pg`
//!
//! Run `todo -h` for the full usage text.

mod commands;

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::Action;

/// Personal todo list kept in a plain-text file.
#[derive(Parser)]
#[command(
    name = "todo",
    about,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// An option such as `-a` or `--check-off`, followed by its ids or text.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true, num_args = 0..)]
    args: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries the list.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("td_list=warn".parse()?)
                .add_directive("todo=warn".parse()?),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let action = Action::parse(&cli.args);

    let stdout = io::stdout();
    let stdin = io::stdin();
    commands::execute(&action, &mut stdout.lock(), &mut stdin.lock())
}
