//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

fn at(line: u32, column: u32) -> Option<Position> {
    Some(Position { line, column })
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        at(10, 4),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.detail(), "@");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::InvalidOperatorSequence {
            sequence: "+-".to_string(),
        },
        at(42, 7),
    );

    assert_eq!(error.line(), Some(42));
    assert_eq!(error.get_position().map(|p| p.column), Some(7));
}

#[test]
fn test_lexical_error_display() {
    let error = Error::new(
        ErrorImpl::InvalidOperatorSequence {
            sequence: "===".to_string(),
        },
        at(3, 1),
    );

    assert_eq!(error.to_string(), "Lexical error on line 3: ===");
}

#[test]
fn test_source_unavailable() {
    let error = Error::source_unavailable("input.toy", "No such file or directory");

    assert_eq!(error.get_error_name(), "SourceUnavailable");
    assert_eq!(error.line(), None);
    assert!(error.get_position().is_none());
    assert_eq!(
        error.to_string(),
        "Source file unavailable: input.toy (No such file or directory)"
    );
    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::SourceUnavailable {
            path: "input.toy".to_string(),
            reason: "No such file or directory".to_string(),
        }
    );
}

#[test]
fn test_error_without_position_uses_impl_display() {
    let error = Error::new(ErrorImpl::UnrecognisedCharacter { character: '#' }, None);

    assert_eq!(error.to_string(), "unrecognised character: '#'");
}

#[test]
fn test_error_tip_none() {
    let error = Error::source_unavailable("input.toy", "denied");

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::InvalidOperatorSequence {
            sequence: "<>".to_string(),
        },
        at(1, 1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`<>`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
