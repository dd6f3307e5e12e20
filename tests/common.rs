#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated HOME plus a ledger path inside it.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create tempdir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn ledger(&self) -> String {
        self.path("attendance.csv").to_string_lossy().to_string()
    }

    /// The binary, with HOME pointed at the sandbox and the SMTP secret unset.
    pub fn rat(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rattendance");
        cmd.env("HOME", self.dir.path())
            .env("APPDATA", self.dir.path())
            .env_remove("RATTENDANCE_SMTP_PASSWORD");
        cmd
    }

    /// `rattendance --ledger <sandbox ledger> <args...>`
    pub fn run(&self, args: &[&str]) -> Command {
        let mut cmd = self.rat();
        cmd.arg("--ledger").arg(self.ledger()).args(args);
        cmd
    }

    pub fn write(&self, name: &str, content: &str) -> String {
        let p = self.path(name);
        fs::write(&p, content).expect("write fixture");
        p.to_string_lossy().to_string()
    }

    pub fn read_ledger(&self) -> String {
        fs::read_to_string(self.ledger()).expect("read ledger")
    }
}

pub fn mark(sb: &Sandbox, id: &str, name: &str, date: &str, time: &str) {
    sb.run(&["mark", id, name, "--date", date, "--time", time])
        .assert()
        .success();
}

/// Three marks over two days.
pub fn sample_ledger(sb: &Sandbox) {
    mark(sb, "S1", "Alice", "2024-05-01", "09:00:00");
    mark(sb, "S2", "Bob", "2024-05-01", "09:10:00");
    mark(sb, "S1", "Alice", "2024-05-02", "08:55:00");
}

pub fn exists(p: &str) -> bool {
    Path::new(p).exists()
}
