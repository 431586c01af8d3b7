//! Utility macros for the lexical analyzer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_ERROR!` - Creates a positioned lexical Error
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's lexeme
/// * `$line` - The 1-based source line
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr) => {
        Token {
            kind: $kind,
            value: $value,
            line: $line,
        }
    };
}

/// Creates an Error for the given ErrorImpl at a line and column.
///
/// # Example
///
/// ```ignore
/// let error = MK_ERROR!(ErrorImpl::UnrecognisedCharacter { character: '@' }, 1, 3);
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($error_impl:expr, $line:expr, $column:expr) => {
        Error::new(
            $error_impl,
            Some(Position {
                line: $line,
                column: $column,
            }),
        )
    };
}
