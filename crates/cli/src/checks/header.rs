// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Header document checks: presence and fixed content.

use std::fs;

use crate::check::{Check, CheckContext, CheckResult, Failure};
use crate::diff;
use crate::error::{Error, Result};
use crate::quest;

/// Check 2: `about.txt` exists and is a regular file.
pub struct HeaderPresentCheck;

impl Check for HeaderPresentCheck {
    fn ordinal(&self) -> u8 {
        2
    }

    fn name(&self) -> &'static str {
        "header"
    }

    fn description(&self) -> &'static str {
        "about.txt present"
    }

    fn run(&self, ctx: &CheckContext) -> Result<CheckResult> {
        if ctx.path(quest::HEADER_FILE).is_file() {
            Ok(CheckResult::passed(self))
        } else {
            Ok(CheckResult::failed(
                self,
                Failure::Missing {
                    what: quest::HEADER_FILE.to_string(),
                },
            ))
        }
    }
}

/// Check 3: `about.txt` content byte-equals the lecture header.
pub struct HeaderTextCheck;

impl Check for HeaderTextCheck {
    fn ordinal(&self) -> u8 {
        3
    }

    fn name(&self) -> &'static str {
        "header-text"
    }

    fn description(&self) -> &'static str {
        "about.txt content"
    }

    fn run(&self, ctx: &CheckContext) -> Result<CheckResult> {
        let path = ctx.path(quest::HEADER_FILE);
        if !path.is_file() {
            return Ok(CheckResult::failed(
                self,
                Failure::Missing {
                    what: quest::HEADER_FILE.to_string(),
                },
            ));
        }

        let actual = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        if actual == quest::HEADER_TEXT {
            Ok(CheckResult::passed(self))
        } else {
            Ok(CheckResult::failed(
                self,
                Failure::Mismatch {
                    path: quest::HEADER_FILE.into(),
                    what: "content differs from the lecture header".to_string(),
                    diff: diff::unified(quest::HEADER_TEXT, &actual),
                },
            ))
        }
    }
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
