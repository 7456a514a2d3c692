//! # td-list
//!
//! Goal list engine for the `todo` command-line tool.
//!
//! The list is a plain-text file with one goal per line:
//!
//! ```text
//! 1.  [ ] buy milk
//! 2.  [x] call the bank
//! ...
//! 10. [ ] water plants
//! ```
//!
//! ## Key components
//!
//! - [`Goal`] / [`Status`]: one task and its two-state completion marker
//! - [`codec`]: the line format, including id padding that keeps markers aligned
//! - [`GoalList`]: the in-memory list and its mutations (add, finish, edit,
//!   delete, swap, sort, purge, renumber)
//! - [`ListStore`]: loading and saving the list file
//! - [`DatedLog`]: write-only dated snapshots of the list
//! - [`TodoConfig`]: `config.toml` settings and path resolution

pub mod codec;
pub mod config;
pub mod error;
pub mod goal;
pub mod list;
pub mod log;
pub mod store;

pub use config::{resolve_home, TodoConfig, TodoPaths};
pub use error::ListError;
pub use goal::{Goal, Status};
pub use list::GoalList;
pub use log::DatedLog;
pub use store::{ListStore, Loaded};
