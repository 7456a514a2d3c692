// build.rs: Build metadata shown by `todo -v`.
//
// Sets these env vars at compile time:
//   TD_GIT_HASH       short commit hash, "-dirty" when the tree has changes,
//                     or "unknown" outside a git checkout
//   TD_BUILD_DATE     YYYY-MM-DD; honours SOURCE_DATE_EPOCH for reproducible builds
//   TD_BUILD_PROFILE  cargo profile the binary was built with ("debug"/"release")

use std::env;
use std::process::Command;

fn main() {
    let hash = match stdout_of("git", &["rev-parse", "--short", "HEAD"]) {
        Some(hash) if is_dirty() => format!("{}-dirty", hash),
        Some(hash) => hash,
        None => "unknown".to_string(),
    };
    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=TD_GIT_HASH={}", hash);
    println!("cargo:rustc-env=TD_BUILD_DATE={}", build_date());
    println!("cargo:rustc-env=TD_BUILD_PROFILE={}", profile);

    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/");
}

/// Trimmed stdout of a successful command.
fn stdout_of(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
}

fn is_dirty() -> bool {
    Command::new("git")
        .args(["status", "--porcelain"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .is_some_and(|o| !o.stdout.is_empty())
}

fn build_date() -> String {
    let date = match env::var("SOURCE_DATE_EPOCH") {
        Ok(epoch) => stdout_of("date", &["-u", "-d", &format!("@{}", epoch), "+%Y-%m-%d"]),
        Err(_) => stdout_of("date", &["+%Y-%m-%d"]),
    };
    date.unwrap_or_else(|| "unknown".to_string())
}
