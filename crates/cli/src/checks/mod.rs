//! Check registry.
//!
//! The ten quest checks in grading order:
//! 1. layout: notes/ and drafts/ directories exist
//! 2. header: about.txt present
//! 3. header-text: about.txt content
//! 4. notes: notes corpus populated
//! 5. drafts: odd-versioned drafts present
//! 6. backup: backup/about.txt matches about.txt
//! 7. script: make_anthology.sh present
//! 8. script-exec: make_anthology.sh executable
//! 9. shebang: make_anthology.sh interpreter line
//! 10. anthology: generated artifact and idempotence

pub mod anthology;
pub mod backup;
pub mod corpus;
pub mod header;
pub mod layout;
pub mod script;

use std::sync::Arc;

use crate::check::Check;

/// Number of checks in the quest.
pub const CHECK_COUNT: u8 = 10;

/// Create all registered checks in ordinal order.
pub fn all_checks() -> Vec<Arc<dyn Check>> {
    vec![
        Arc::new(layout::LayoutCheck),
        Arc::new(header::HeaderPresentCheck),
        Arc::new(header::HeaderTextCheck),
        Arc::new(corpus::NotesCheck),
        Arc::new(corpus::DraftsCheck),
        Arc::new(backup::BackupCheck),
        Arc::new(script::ScriptPresentCheck),
        Arc::new(script::ScriptExecutableCheck),
        Arc::new(script::ShebangCheck),
        Arc::new(anthology::AnthologyCheck),
    ]
}

/// Get a check by its 1-based ordinal.
pub fn by_ordinal(ordinal: u8) -> Option<Arc<dyn Check>> {
    all_checks().into_iter().find(|c| c.ordinal() == ordinal)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
