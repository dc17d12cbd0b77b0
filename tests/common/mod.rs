//! Shared helpers for CLI end-to-end tests.

#![allow(dead_code)]

use assert_cmd::Command;
use tempfile::TempDir;

/// Temporary working directory holding an isolated store.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("tempdir"),
        }
    }

    /// Build an `rcl` invocation rooted in this workspace.
    pub fn rcl(&self, args: &[&str]) -> Command {
        let mut cmd = Command::cargo_bin("rcl").expect("rcl binary");
        cmd.current_dir(self.dir.path());
        cmd.env_remove("ROLLCALL_STORE");
        cmd.env_remove("RUST_LOG");
        cmd.args(args);
        cmd
    }

    /// Run a command expecting success and return stdout.
    pub fn run(&self, args: &[&str]) -> String {
        let output = self.rcl(args).output().expect("spawn rcl");
        assert!(
            output.status.success(),
            "rcl {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("utf8 stdout")
    }

    /// Run a command with `--json` and parse stdout.
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let mut full = args.to_vec();
        full.push("--json");
        serde_json::from_str(&self.run(&full)).expect("json stdout")
    }
}
