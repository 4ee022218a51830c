// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Backup check: the header copy survived intact.

use std::fs;

use crate::check::{Check, CheckContext, CheckResult, Failure};
use crate::diff;
use crate::error::{Error, Result};
use crate::quest;

/// Check 6: `backup/about.txt` byte-equals `about.txt`.
pub struct BackupCheck;

impl Check for BackupCheck {
    fn ordinal(&self) -> u8 {
        6
    }

    fn name(&self) -> &'static str {
        "backup"
    }

    fn description(&self) -> &'static str {
        "backup/about.txt matches about.txt"
    }

    fn run(&self, ctx: &CheckContext) -> Result<CheckResult> {
        let original = ctx.path(quest::HEADER_FILE);
        if !original.is_file() {
            return Ok(CheckResult::failed(
                self,
                Failure::Missing {
                    what: quest::HEADER_FILE.to_string(),
                },
            ));
        }

        let copy = ctx.path(quest::BACKUP_FILE);
        if !copy.is_file() {
            return Ok(CheckResult::failed(
                self,
                Failure::Missing {
                    what: quest::BACKUP_FILE.to_string(),
                },
            ));
        }

        let want = fs::read_to_string(&original).map_err(|e| Error::io(&original, e))?;
        let got = fs::read_to_string(&copy).map_err(|e| Error::io(&copy, e))?;
        if got == want {
            Ok(CheckResult::passed(self))
        } else {
            Ok(CheckResult::failed(
                self,
                Failure::Mismatch {
                    path: quest::BACKUP_FILE.into(),
                    what: format!("does not match {}", quest::HEADER_FILE),
                    diff: diff::unified(&want, &got),
                },
            ))
        }
    }
}

#[cfg(test)]
#[path = "backup_tests.rs"]
mod tests;
