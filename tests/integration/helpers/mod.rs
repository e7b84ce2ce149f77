//! Helpers for running the ansilog binary

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;

use assert_cmd::Command;
use tempfile::TempDir;

/// Scratch directory with its own (initially absent) config file.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.config_path(), contents).expect("Failed to write config");
    }

    pub fn write_file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write input");
        path
    }

    /// ansilog command bound to this sandbox's config and HOME.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_ansilog"));
        cmd.env("HOME", self.dir.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.config_path());
        cmd
    }
}

/// Run ansilog without a sandbox and capture (stdout, stderr, exit code).
pub fn run_ansilog(args: &[&str], home: &Path) -> (String, String, i32) {
    let output = StdCommand::new(env!("CARGO_BIN_EXE_ansilog"))
        .args(args)
        .env("HOME", home)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute ansilog");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
