// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! One line per executed check:
//! ```text
//! check <ordinal> (<name>): OK
//! check <ordinal> (<name>): FAIL <message>
//! ```
//! Content mismatches are followed by an indented unified diff block.

use std::io::Write;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::check::CheckResult;
use crate::color::scheme;
use crate::runner::RunSummary;

/// Text output formatter with color support.
pub struct TextFormatter {
    stdout: StandardStream,
}

impl TextFormatter {
    /// Create a new text formatter.
    pub fn new(color_choice: ColorChoice) -> Self {
        Self {
            stdout: StandardStream::stdout(color_choice),
        }
    }

    /// Write a single check result (streaming).
    pub fn write_check(&mut self, result: &CheckResult) -> std::io::Result<()> {
        self.stdout.set_color(&scheme::check_name())?;
        write!(self.stdout, "check {} ({})", result.ordinal, result.name)?;
        self.stdout.reset()?;
        write!(self.stdout, ": ")?;

        match &result.failure {
            None => {
                self.stdout.set_color(&scheme::pass())?;
                write!(self.stdout, "OK")?;
                self.stdout.reset()?;
                writeln!(self.stdout)?;
            }
            Some(failure) => {
                self.stdout.set_color(&scheme::fail())?;
                write!(self.stdout, "FAIL")?;
                self.stdout.reset()?;
                writeln!(self.stdout, " {}", failure)?;
                if let Some(diff) = failure.diff() {
                    self.write_diff(diff)?;
                }
            }
        }

        Ok(())
    }

    /// Write a diff block, two-space indented, +/- lines colored.
    fn write_diff(&mut self, diff: &str) -> std::io::Result<()> {
        for line in diff.lines() {
            write!(self.stdout, "  ")?;
            match line.as_bytes().first() {
                Some(b'+') => {
                    self.stdout.set_color(&scheme::diff_add())?;
                    write!(self.stdout, "{}", line)?;
                    self.stdout.reset()?;
                }
                Some(b'-') => {
                    self.stdout.set_color(&scheme::diff_remove())?;
                    write!(self.stdout, "{}", line)?;
                    self.stdout.reset()?;
                }
                _ => write!(self.stdout, "{}", line)?,
            }
            writeln!(self.stdout)?;
        }
        Ok(())
    }

    /// Write the summary line for an all-checks run.
    pub fn write_summary(&mut self, summary: &RunSummary) -> std::io::Result<()> {
        let passed = summary.passed;
        let plural = if passed == 1 { "" } else { "s" };
        if summary.all_passed() {
            writeln!(self.stdout, "{} check{} passed", passed, plural)?;
        } else {
            writeln!(self.stdout, "{} check{} passed, 1 failed", passed, plural)?;
        }
        Ok(())
    }
}
