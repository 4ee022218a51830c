//! Specs for check 10: anthology generation, idempotence, and restoration.

use crate::prelude::*;

#[test]
fn compliant_script_passes() {
    let quest = Quest::compliant();
    passes("10", &quest).stdout_has("check 10 (anthology): OK");
}

/// The anthology check itself is repeatable: back-to-back runs both pass.
#[test]
fn check_can_run_twice_in_succession() {
    let quest = Quest::compliant();
    passes("10", &quest);
    passes("10", &quest);
}

/// An appending script produces duplicated content on its second run.
#[test]
fn appending_script_is_not_idempotent() {
    let quest = Quest::compliant();
    quest.script(APPENDING_SCRIPT);

    fails("10", &quest)
        .stdout_has("check 10 (anthology): FAIL")
        .stdout_has("overwrite, don't append");
}

/// A wrong assembly fails the first run with a diff.
#[test]
fn wrong_content_fails_with_a_diff() {
    let quest = Quest::compliant();
    quest.script("#!/bin/sh\necho \"wrong anthology\" > anthology.txt\n");

    fails("10", &quest)
        .stdout_has("differs from the expected anthology")
        .stdout_has("+wrong anthology");
}

/// A script that exits non-zero has no artifact to grade.
#[test]
fn failing_script_reports_missing_output() {
    let quest = Quest::compliant();
    quest.script("#!/bin/sh\nexit 1\n");

    fails("10", &quest).stdout_has("script produced no output");
}

#[test]
fn missing_script_fails() {
    let quest = Quest::compliant();
    quest.remove("make_anthology.sh");

    fails("10", &quest).stdout_has("missing make_anthology.sh");
}

// =============================================================================
// RESTORATION
// =============================================================================

/// A pre-existing artifact is restored byte-for-byte after a pass.
#[test]
fn preexisting_output_is_restored_after_a_pass() {
    let quest = Quest::compliant();
    quest.file("anthology.txt", "OLD");

    passes("10", &quest);
    assert_eq!(quest.read("anthology.txt"), "OLD");
}

/// A pre-existing artifact is restored byte-for-byte after a failure.
#[test]
fn preexisting_output_is_restored_after_a_failure() {
    let quest = Quest::compliant();
    quest.script(APPENDING_SCRIPT);
    quest.file("anthology.txt", "OLD");

    fails("10", &quest);
    assert_eq!(quest.read("anthology.txt"), "OLD");
}

/// An absent artifact stays absent.
#[test]
fn absent_output_stays_absent() {
    let quest = Quest::compliant();
    assert!(!quest.exists("anthology.txt"));

    passes("10", &quest);
    assert!(!quest.exists("anthology.txt"));
}
