//! Test helpers for behavioral specifications.
//!
//! Provides a quest fixture builder and assertion helpers for driving the
//! questcheck binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::Command;

use predicates::Predicate;

/// Exact content of the lecture header.
pub const HEADER_TEXT: &str = "# About This Quest\nMade during Lecture 1.\nShell power!\n";

/// A script that assembles the anthology correctly and truncates on rewrite.
pub const COMPLIANT_SCRIPT: &str = r#"#!/bin/sh
{
  cat about.txt
  echo
  for f in notes/*.txt; do [ -e "$f" ] && tail -n 1 "$f"; done
  echo
  for f in drafts/*-v[13579].txt; do [ -e "$f" ] && tail -n 1 "$f"; done
  echo
  echo "Thank you!"
} > anthology.txt
"#;

/// Same assembly, but appending: the second run duplicates everything.
pub const APPENDING_SCRIPT: &str = r#"#!/bin/sh
{
  cat about.txt
  echo
  for f in notes/*.txt; do [ -e "$f" ] && tail -n 1 "$f"; done
  echo
  for f in drafts/*-v[13579].txt; do [ -e "$f" ] && tail -n 1 "$f"; done
  echo
  echo "Thank you!"
} >> anthology.txt
"#;

/// Returns a Command configured to run the questcheck binary
pub fn questcheck_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("questcheck"))
}

/// Run a selector against a quest, asserting exit code 0.
pub fn passes(selector: &str, quest: &Quest) -> RunAssert {
    let output = run(selector, quest);
    assert!(
        output.status.success(),
        "expected '{}' to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
        selector,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// Run a selector against a quest, asserting the check-failed exit code.
pub fn fails(selector: &str, quest: &Quest) -> RunAssert {
    exits(selector, quest, 1)
}

/// Run a selector against a quest, asserting a specific exit code.
pub fn exits(selector: &str, quest: &Quest, code: i32) -> RunAssert {
    let output = run(selector, quest);
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected '{}' to exit {}, got {:?}\nstdout: {}\nstderr: {}",
        selector,
        code,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

fn run(selector: &str, quest: &Quest) -> std::process::Output {
    questcheck_cmd()
        .arg(selector)
        .current_dir(quest.path())
        .output()
        .expect("questcheck should run")
}

/// Result of a run for chaining assertions
pub struct RunAssert {
    pub output: std::process::Output,
}

impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout contains the pattern
    pub fn stdout_has(self, pattern: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            predicates::str::contains(pattern).eval(&stdout),
            "stdout missing {:?}:\n{}",
            pattern,
            stdout
        );
        self
    }

    /// Assert stdout does not contain the pattern
    pub fn stdout_lacks(self, pattern: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !predicates::str::contains(pattern).eval(&stdout),
            "stdout should NOT contain {:?}:\n{}",
            pattern,
            stdout
        );
        self
    }

    /// Assert stderr contains the pattern
    pub fn stderr_has(self, pattern: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            predicates::str::contains(pattern).eval(&stderr),
            "stderr missing {:?}:\n{}",
            pattern,
            stderr
        );
        self
    }
}

/// Temporary quest directory with helper methods.
///
/// Reduces boilerplate by auto-creating parent directories and panicking on
/// errors (we're in tests).
pub struct Quest {
    dir: tempfile::TempDir,
}

impl Quest {
    /// Create an empty quest with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Create a fully compliant quest: header, corpora, backup, script.
    pub fn compliant() -> Self {
        let quest = Self::empty();
        quest.file("about.txt", HEADER_TEXT);
        quest.file("notes/alpha.txt", "first\nsecond\nNOTE ALPHA\n");
        quest.file("notes/beta.txt", "BETA\n");
        quest.file("drafts/poem-v1.txt", "draft\nPOEM ONE\n");
        quest.file("drafts/poem-v2.txt", "IGNORED EVEN\n");
        quest.file("backup/about.txt", HEADER_TEXT);
        quest.script(COMPLIANT_SCRIPT);
        quest
    }

    /// Get the quest path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Create a directory
    pub fn dir(&self, path: impl AsRef<Path>) {
        fs::create_dir_all(self.dir.path().join(path.as_ref())).unwrap();
    }

    /// Write the anthology script and mark it executable
    pub fn script(&self, content: &str) {
        self.file("make_anthology.sh", content);
        self.chmod("make_anthology.sh", 0o755);
    }

    /// Set permissions on a quest file
    pub fn chmod(&self, path: impl AsRef<Path>, mode: u32) {
        let full_path = self.dir.path().join(path.as_ref());
        let mut perms = fs::metadata(&full_path).unwrap().permissions();
        perms.set_mode(mode);
        fs::set_permissions(&full_path, perms).unwrap();
    }

    /// Remove a quest file
    pub fn remove(&self, path: impl AsRef<Path>) {
        fs::remove_file(self.dir.path().join(path.as_ref())).unwrap();
    }

    /// Read a quest file to a string
    pub fn read(&self, path: impl AsRef<Path>) -> String {
        fs::read_to_string(self.dir.path().join(path.as_ref())).unwrap()
    }

    /// Whether a quest path exists
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.dir.path().join(path.as_ref()).exists()
    }
}
