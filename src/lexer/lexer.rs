use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_ERROR, MK_TOKEN,
};

use super::tokens::{ScanState, Token, TokenKind, KEYWORDS, OPERATORS};

lazy_static! {
    /// Lines starting with `//` or containing `/*` anywhere are skipped whole.
    static ref COMMENT: Regex = Regex::new(r"^//|/\*").unwrap();
}

/// Everything one scan produced, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    pub tokens: Vec<Token>,
    pub errors: Vec<Error>,
}

impl Tokenized {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    column: u32,
    line: u32,
    tokens: Vec<Token>,
    errors: Vec<Error>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over one already trimmed line.
    pub fn new(source: &'a str, line: u32) -> Lexer<'a> {
        Lexer {
            source,
            pos: 0,
            column: 1,
            line,
            tokens: vec![],
            errors: vec![],
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.column += self.source[self.pos..self.pos + n].chars().count() as u32;
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn push_error(&mut self, error_impl: ErrorImpl) {
        self.errors.push(MK_ERROR!(error_impl, self.line, self.column));
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eol(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Runs the transition function from `Start` and returns the last
    /// accepting state with the byte length of the run that reached it.
    fn longest_match(&self) -> Option<(ScanState, usize)> {
        let mut state = ScanState::Start;
        let mut accepted = None;

        for (offset, c) in self.remainder().char_indices() {
            match state.transition(c) {
                Some(next) => {
                    state = next;
                    if state.is_accepting() {
                        accepted = Some((state, offset + c.len_utf8()));
                    }
                }
                None => break,
            }
        }

        accepted
    }

    fn scan_token(&mut self) {
        let Some((state, len)) = self.longest_match() else {
            return;
        };
        let value = &self.remainder()[..len];

        match state {
            ScanState::Identifier => {
                let kind = if KEYWORDS.contains(value) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Identifier
                };
                self.push(MK_TOKEN!(kind, String::from(value), self.line));
            }
            ScanState::Number | ScanState::FloatNumber => {
                self.push(MK_TOKEN!(TokenKind::Number, String::from(value), self.line));
            }
            ScanState::Operator => {
                if OPERATORS.contains(value) {
                    self.push(MK_TOKEN!(TokenKind::Operator, String::from(value), self.line));
                } else {
                    self.push_error(ErrorImpl::InvalidOperatorSequence {
                        sequence: String::from(value),
                    });
                }
            }
            ScanState::Delimiter => {
                self.push(MK_TOKEN!(TokenKind::Delimiter, String::from(value), self.line));
            }
            ScanState::Error => {
                if let Some(character) = self.at() {
                    self.push_error(ErrorImpl::UnrecognisedCharacter { character });
                }
            }
            ScanState::Start | ScanState::DecimalPoint => {}
        }

        self.advance_n(len);
    }

    pub fn scan_line(mut self) -> (Vec<Token>, Vec<Error>) {
        while !self.at_eol() {
            match self.at() {
                Some(c) if c.is_ascii_whitespace() => self.advance_n(c.len_utf8()),
                Some(_) => self.scan_token(),
                None => break,
            }
        }

        (self.tokens, self.errors)
    }
}

/// Strips ASCII whitespace only; any other character is left for the scanner
/// to report.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_ascii_whitespace())
}

pub fn is_comment_line(line: &str) -> bool {
    COMMENT.is_match(trim_line(line))
}

/// Scans every line in order. Line numbers start at 1 and count skipped
/// comment lines too.
pub fn tokenize<S: AsRef<str>>(lines: &[S]) -> Tokenized {
    let mut result = Tokenized::default();

    for (index, line) in lines.iter().enumerate() {
        let line = trim_line(line.as_ref());
        if is_comment_line(line) {
            continue;
        }

        let (tokens, errors) = Lexer::new(line, index as u32 + 1).scan_line();
        result.tokens.extend(tokens);
        result.errors.extend(errors);
    }

    result
}

pub fn tokenize_source(source: &str) -> Tokenized {
    tokenize(&source.lines().collect::<Vec<&str>>())
}
