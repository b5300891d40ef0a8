use chrono::Local;
use std::{env, fmt::Write as _, fs, path::Path, process::Command};

#[allow(dead_code)]
mod config {
    include!("./src/uva/config.rs");
}
use config::{submit, url};

/// Trimmed stdout of a command, empty when it can't be run.
fn output(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .and_then(|x| String::from_utf8(x.stdout).ok())
        .map(|x| x.trim().to_string())
        .unwrap_or_default()
}
fn git(args: &[&str]) -> String {
    output("git", args)
}

fn branch() -> String {
    let head = git(&["symbolic-ref", "--short", "-q", "HEAD"]);
    if head.is_empty() {
        git(&["describe", "--tags", "--exact-match", "HEAD"])
    } else {
        head
    }
}

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let out_dir = Path::new(&out_dir);
    let profile = env::var("PROFILE").unwrap_or_default();
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let branch = branch();
    let now = Local::now();

    let short = format!(
        "(git@{} {} {}) {}",
        git(&["log", "-1", "--pretty=format:%h"]),
        branch,
        now.format("%Y-%m-%d"),
        profile
    );
    fs::write(out_dir.join("version"), short).expect("Failed to write version");

    let mut long = String::new();
    writeln!(long, "{}", profile).unwrap();
    writeln!(long, "commit: {} git@{}", branch, git(&["log", "-1", "--pretty=format:%H"])).unwrap();
    writeln!(
        long,
        "rustc: {} {}",
        output(&rustc, &["--version"]),
        env::var("TARGET").unwrap_or_default()
    )
    .unwrap();
    writeln!(long, "built: {} on {}", now.to_rfc3339(), output("hostname", &[])).unwrap();
    writeln!(long, "judge: {}", url::BASE).unwrap();
    write!(
        long,
        "poll: every {}s while {:?}",
        submit::POLL_DELAY.as_secs_f32(),
        submit::QUEUED
    )
    .unwrap();
    fs::write(out_dir.join("long_version"), long).expect("Failed to write long version");
}
