#![allow(clippy::module_inception)]

use std::path::Path;

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::lexer::{tokenize, trim_line, Tokenized},
};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod source;

extern crate regex;

/// 1-based line and column of a lexical error, columns counted in characters
/// of the trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// Reads `path` and scans it, returning the lines alongside the result so
/// diagnostics can quote them. An unreadable source yields no lines, no
/// tokens and a single `SourceUnavailable` error.
pub fn analyze_file(path: impl AsRef<Path>) -> (Vec<String>, Tokenized) {
    match source::read_source(path) {
        Ok(lines) => {
            let result = tokenize(&lines);
            (lines, result)
        }
        Err(error) => (
            vec![],
            Tokenized {
                tokens: vec![],
                errors: vec![error],
            },
        ),
    }
}

/// Renders a diagnostic for `error` against the lines it was scanned from.
pub fn format_error<S: AsRef<str>>(error: &Error, file: &str, lines: &[S]) -> String {
    /*
        Error: message
        -> main.toy
           |
        20 | int a = #;
           | --------^
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }

    let Some(position) = error.get_position() else {
        out.push_str(&format!("-> {}\n", error));
        return out;
    };

    out.push_str(&format!("-> {}\n", file));

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;
    let line_text = lines
        .get((position.line as usize).saturating_sub(1))
        .map(|line| trim_line(line.as_ref()))
        .unwrap_or("");
    let arrows = position.column as usize;

    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text));
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

pub fn display_error<S: AsRef<str>>(error: &Error, file: &str, lines: &[S]) {
    print!("{}", format_error(error, file, lines));
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_format_error_points_at_column() {
        let lines = vec!["int x;", "  a @ b;"];
        let error = Error::new(
            ErrorImpl::UnrecognisedCharacter { character: '@' },
            Some(Position { line: 2, column: 3 }),
        );

        let rendered = super::format_error(&error, "main.toy", &lines);
        let rendered_lines: Vec<&str> = rendered.lines().collect();

        assert!(rendered_lines[0].starts_with("Error: UnrecognisedCharacter ("));
        assert_eq!(rendered_lines[1], "-> main.toy");
        assert_eq!(rendered_lines[2], "  |");
        assert_eq!(rendered_lines[3], "2 | a @ b;");
        assert_eq!(rendered_lines[4], "  | --^");
    }

    #[test]
    fn test_format_error_without_position() {
        let error = Error::source_unavailable("missing.toy", "No such file or directory");
        let rendered = super::format_error::<&str>(&error, "missing.toy", &[]);

        assert_eq!(
            rendered,
            "Error: SourceUnavailable\n-> Source file unavailable: missing.toy (No such file or directory)\n"
        );
    }

    #[test]
    fn test_analyze_file_missing_source() {
        let (lines, result) = super::analyze_file("tests/does_not_exist.toy");

        assert!(lines.is_empty());
        assert!(result.tokens.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].get_error_name(), "SourceUnavailable");
        assert_eq!(result.errors[0].line(), None);
    }

    #[test]
    fn test_analyze_file_reads_fixture() {
        let (lines, result) = super::analyze_file("tests/test_file.txt");

        assert_eq!(lines.len(), 6);

        assert_eq!(result.tokens.len(), 28);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].line(), Some(4));
    }
}
