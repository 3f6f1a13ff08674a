//! Assertion helpers for OTP field tests.
//!
//! Every helper takes a message so a failing step in a long keystroke
//! script is easy to locate.

use lumo_foundation::FocusDirection;
use lumo_ui::OtpState;

use crate::rule::OtpTestRule;

/// Assert the raw code, empty slots written as spaces.
pub fn assert_code(state: &OtpState, expected: &str, msg: &str) {
    assert_eq!(
        state.code(),
        expected,
        "{}: code mismatch (revision {})",
        msg,
        state.revision()
    );
}

pub fn assert_focused(rule: &OtpTestRule, expected: usize, msg: &str) {
    assert_eq!(
        rule.focused_slot(),
        Some(expected),
        "{}: focused slot mismatch for code {:?}",
        msg,
        rule.code()
    );
}

pub fn assert_focus_moves(actual: &[FocusDirection], expected: &[FocusDirection], msg: &str) {
    assert_eq!(actual, expected, "{}: focus directives mismatch", msg);
}

pub fn assert_completed_once_with(rule: &OtpTestRule, expected: &str, msg: &str) {
    let values = rule.completions().values();
    assert_eq!(
        values,
        vec![expected.to_owned()],
        "{}: expected exactly one completion",
        msg
    );
}

pub fn assert_not_completed(rule: &OtpTestRule, msg: &str) {
    let values = rule.completions().values();
    assert!(
        values.is_empty(),
        "{}: unexpected completions {:?}",
        msg,
        values
    );
}
