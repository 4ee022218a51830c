//! Quest layout and the expected anthology.
//!
//! The quest is graded against a fixed directory layout; the constants here
//! are that contract. `expected_anthology` assembles the reference artifact
//! the student's script must reproduce.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use globset::{Glob, GlobMatcher};

use crate::error::{Error, Result};

/// Header document, written by hand during the lecture.
pub const HEADER_FILE: &str = "about.txt";
/// Source corpus A: one note per topic.
pub const NOTES_DIR: &str = "notes";
/// Source corpus B: versioned drafts.
pub const DRAFTS_DIR: &str = "drafts";
/// Copy of the header the student makes with cp.
pub const BACKUP_FILE: &str = "backup/about.txt";
/// The script under test.
pub const SCRIPT_FILE: &str = "make_anthology.sh";
/// Output path owned by the script.
pub const OUTPUT_FILE: &str = "anthology.txt";

/// Exact content of the header document.
pub const HEADER_TEXT: &str = "# About This Quest\nMade during Lecture 1.\nShell power!\n";
/// Closing line of the anthology.
pub const TRAILER: &str = "Thank you!";

/// Only odd single-digit draft versions enter the anthology.
pub const DRAFT_PATTERN: &str = "*-v[13579].txt";

#[allow(clippy::expect_used)]
static DRAFT_MATCHER: LazyLock<GlobMatcher> =
    LazyLock::new(|| Glob::new(DRAFT_PATTERN).expect("valid glob").compile_matcher());

/// Last line of a file, `tail -n 1` semantics.
///
/// A newline-terminated file yields its final line including the newline; a
/// file without a trailing newline yields the trailing fragment raw. An
/// empty file yields nothing.
pub fn last_line(content: &str) -> &str {
    let bytes = content.as_bytes();
    let body = match bytes.last() {
        None => return "",
        Some(b'\n') => &bytes[..bytes.len() - 1],
        Some(_) => bytes,
    };
    match memchr::memrchr(b'\n', body) {
        Some(i) => &content[i + 1..],
        None => content,
    }
}

/// `.txt` files in a directory, sorted by file name.
///
/// A missing directory is an empty corpus: the glob matched nothing.
pub fn note_files(dir: &Path) -> Result<Vec<PathBuf>> {
    list_sorted(dir, |name| name.ends_with(".txt"))
}

/// Odd-versioned draft files in a directory, sorted by file name.
pub fn draft_files(dir: &Path) -> Result<Vec<PathBuf>> {
    list_sorted(dir, |name| DRAFT_MATCHER.is_match(name))
}

fn list_sorted(dir: &Path, keep: impl Fn(&str) -> bool) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if path.is_file() && keep(name) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Assemble the expected anthology from the quest sources.
///
/// Rebuilt from the sources on every call. Segments are separated by a
/// single blank line even when a corpus contributes zero lines.
pub fn expected_anthology(root: &Path) -> Result<String> {
    let header_path = root.join(HEADER_FILE);
    let header = fs::read_to_string(&header_path).map_err(|e| Error::io(&header_path, e))?;

    let mut out = String::with_capacity(header.len() + 256);
    out.push_str(&header);
    out.push('\n');
    push_last_lines(&mut out, &note_files(&root.join(NOTES_DIR))?)?;
    out.push('\n');
    push_last_lines(&mut out, &draft_files(&root.join(DRAFTS_DIR))?)?;
    out.push('\n');
    out.push_str(TRAILER);
    out.push('\n');
    Ok(out)
}

fn push_last_lines(out: &mut String, files: &[PathBuf]) -> Result<()> {
    for path in files {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        out.push_str(last_line(&content));
    }
    Ok(())
}

#[cfg(test)]
#[path = "quest_tests.rs"]
mod tests;
