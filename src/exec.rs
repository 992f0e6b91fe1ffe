//! Low-level external command execution

use std::process::Command;
use tracing::{debug, error};

/// Run an external command and report whether it exited successfully.
///
/// The command runs with inherited stdio and blocks until it exits: one
/// attempt, no timeout, no output capture. A nonzero exit and a failed
/// launch (missing binary) are logged separately but both reduce to
/// `false`; callers decide whether that aborts the run.
pub fn run_command(program: &str, args: &[&str]) -> bool {
    let rendered = if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    };

    debug!("🧨 {rendered}");

    match Command::new(program).args(args).status() {
        Ok(status) if status.success() => true,
        Ok(status) => {
            error!("Command '{rendered}' failed with {status}");
            false
        }
        Err(err) => {
            error!("Failed to execute command '{rendered}': {err}");
            false
        }
    }
}
