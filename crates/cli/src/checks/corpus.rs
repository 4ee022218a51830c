// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Corpus checks: the anthology sources are populated.

use crate::check::{Check, CheckContext, CheckResult, Failure};
use crate::error::Result;
use crate::quest;

/// Check 4: at least one note in `notes/`.
pub struct NotesCheck;

impl Check for NotesCheck {
    fn ordinal(&self) -> u8 {
        4
    }

    fn name(&self) -> &'static str {
        "notes"
    }

    fn description(&self) -> &'static str {
        "notes corpus populated"
    }

    fn run(&self, ctx: &CheckContext) -> Result<CheckResult> {
        let files = quest::note_files(&ctx.path(quest::NOTES_DIR))?;
        if files.is_empty() {
            return Ok(CheckResult::failed(
                self,
                Failure::Missing {
                    what: format!("{}/*.txt (nothing to anthologize)", quest::NOTES_DIR),
                },
            ));
        }
        Ok(CheckResult::passed(self))
    }
}

/// Check 5: at least one odd-versioned draft in `drafts/`.
pub struct DraftsCheck;

impl Check for DraftsCheck {
    fn ordinal(&self) -> u8 {
        5
    }

    fn name(&self) -> &'static str {
        "drafts"
    }

    fn description(&self) -> &'static str {
        "odd-versioned drafts present"
    }

    fn run(&self, ctx: &CheckContext) -> Result<CheckResult> {
        let files = quest::draft_files(&ctx.path(quest::DRAFTS_DIR))?;
        if files.is_empty() {
            return Ok(CheckResult::failed(
                self,
                Failure::Missing {
                    what: format!("{}/{}", quest::DRAFTS_DIR, quest::DRAFT_PATTERN),
                },
            ));
        }
        Ok(CheckResult::passed(self))
    }
}

#[cfg(test)]
#[path = "corpus_tests.rs"]
mod tests;
