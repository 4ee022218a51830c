// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::checks::CHECK_COUNT;

/// Grading harness for the shell-scripting quest
#[derive(Parser)]
#[command(name = "questcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Check to run: 1-10, or "all" for every check in order
    #[arg(value_name = "CHECK", value_parser = parse_selector)]
    pub selector: Selector,

    /// Quest directory to grade (defaults to the current directory)
    #[arg(short = 'd', long = "dir", value_name = "PATH")]
    pub dir: Option<PathBuf>,
}

/// Which check(s) a run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Every check in ordinal order, stopping at the first failure.
    All,
    /// A single check by ordinal.
    One(u8),
}

fn parse_selector(raw: &str) -> Result<Selector, String> {
    if raw.eq_ignore_ascii_case("all") {
        return Ok(Selector::All);
    }
    match raw.parse::<u8>() {
        Ok(n) if (1..=CHECK_COUNT).contains(&n) => Ok(Selector::One(n)),
        _ => Err(format!("expected a check ordinal 1-{CHECK_COUNT} or \"all\"")),
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
