// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Script checks: the anthology script is present, executable, and a shell
//! script.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use crate::check::{Check, CheckContext, CheckResult, Failure};
use crate::error::{Error, Result};
use crate::quest;

/// Whether a path carries any execute permission bit.
pub(crate) fn is_executable(path: &Path) -> Result<bool> {
    let meta = fs::metadata(path).map_err(|e| Error::io(path, e))?;
    Ok(meta.permissions().mode() & 0o111 != 0)
}

/// Check 7: `make_anthology.sh` exists and is a regular file.
pub struct ScriptPresentCheck;

impl Check for ScriptPresentCheck {
    fn ordinal(&self) -> u8 {
        7
    }

    fn name(&self) -> &'static str {
        "script"
    }

    fn description(&self) -> &'static str {
        "make_anthology.sh present"
    }

    fn run(&self, ctx: &CheckContext) -> Result<CheckResult> {
        if ctx.path(quest::SCRIPT_FILE).is_file() {
            Ok(CheckResult::passed(self))
        } else {
            Ok(CheckResult::failed(
                self,
                Failure::Missing {
                    what: quest::SCRIPT_FILE.to_string(),
                },
            ))
        }
    }
}

/// Check 8: `make_anthology.sh` carries an execute permission bit.
pub struct ScriptExecutableCheck;

impl Check for ScriptExecutableCheck {
    fn ordinal(&self) -> u8 {
        8
    }

    fn name(&self) -> &'static str {
        "script-exec"
    }

    fn description(&self) -> &'static str {
        "make_anthology.sh executable"
    }

    fn run(&self, ctx: &CheckContext) -> Result<CheckResult> {
        let path = ctx.path(quest::SCRIPT_FILE);
        if !path.is_file() {
            return Ok(CheckResult::failed(
                self,
                Failure::Missing {
                    what: quest::SCRIPT_FILE.to_string(),
                },
            ));
        }

        if is_executable(&path)? {
            Ok(CheckResult::passed(self))
        } else {
            Ok(CheckResult::failed(
                self,
                Failure::NotExecutable {
                    path: quest::SCRIPT_FILE.into(),
                },
            ))
        }
    }
}

/// Check 9: `make_anthology.sh` begins with a `#!` line naming sh.
pub struct ShebangCheck;

impl Check for ShebangCheck {
    fn ordinal(&self) -> u8 {
        9
    }

    fn name(&self) -> &'static str {
        "shebang"
    }

    fn description(&self) -> &'static str {
        "make_anthology.sh interpreter line"
    }

    fn run(&self, ctx: &CheckContext) -> Result<CheckResult> {
        let path = ctx.path(quest::SCRIPT_FILE);
        if !path.is_file() {
            return Ok(CheckResult::failed(
                self,
                Failure::Missing {
                    what: quest::SCRIPT_FILE.to_string(),
                },
            ));
        }

        let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let first = content.lines().next().unwrap_or("");
        if first.starts_with("#!") && first.contains("sh") {
            Ok(CheckResult::passed(self))
        } else {
            Ok(CheckResult::failed(
                self,
                Failure::Mismatch {
                    path: quest::SCRIPT_FILE.into(),
                    what: "first line is not a shell shebang (expected e.g. #!/bin/sh)"
                        .to_string(),
                    diff: None,
                },
            ))
        }
    }
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
