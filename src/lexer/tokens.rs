use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = HashSet::from([
        "int", "float", "boolean", "if", "else", "return", "while", "for",
    ]);
    pub static ref OPERATORS: HashSet<&'static str> = HashSet::from([
        "+", "-", "*", "/", "==", "!=", ">", ">=", "<", "<=", "&&", "||", "=", "++", "--", ".",
    ]);
    pub static ref DELIMITERS: HashSet<char> =
        HashSet::from([';', ',', '(', ')', '{', '}', '[', ']']);
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    Operator,
    Delimiter,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token(kind={}, value='{}', line={})",
            self.kind, self.value, self.line
        )
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[TokenKind::Identifier, TokenKind::Number]) {
            println!("{:>4} | {} ({})", self.line, self.kind, self.value);
        } else {
            println!("{:>4} | {} `{}`", self.line, self.kind, self.value);
        }
    }
}

/// Coarse bucket a character falls into before the transition function runs.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CharClass {
    Letter,
    Digit,
    Operator,
    Delimiter,
    Symbol,
}

impl CharClass {
    /// Operator class is decided per character, so only the one-character
    /// spellings in [`OPERATORS`] count. `!`, `&` and `|` are symbols.
    pub fn of(c: char) -> CharClass {
        let mut buffer = [0u8; 4];

        if c.is_ascii_alphabetic() || c == '_' {
            CharClass::Letter
        } else if c.is_ascii_digit() {
            CharClass::Digit
        } else if OPERATORS.contains(&*c.encode_utf8(&mut buffer)) {
            CharClass::Operator
        } else if DELIMITERS.contains(&c) {
            CharClass::Delimiter
        } else {
            CharClass::Symbol
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ScanState {
    Start,
    Identifier,
    Number,
    /// Digits followed by a `.` that has no fraction digits yet.
    DecimalPoint,
    FloatNumber,
    Operator,
    Delimiter,
    Error,
}

impl ScanState {
    /// Returns the next state, or `None` when `c` cannot extend the current run.
    pub fn transition(self, c: char) -> Option<ScanState> {
        let class = CharClass::of(c);

        match (self, class) {
            (ScanState::Start, CharClass::Letter) => Some(ScanState::Identifier),
            (ScanState::Start, CharClass::Digit) => Some(ScanState::Number),
            (ScanState::Start, CharClass::Operator) => Some(ScanState::Operator),
            (ScanState::Start, CharClass::Delimiter) => Some(ScanState::Delimiter),
            (ScanState::Start, CharClass::Symbol) => Some(ScanState::Error),

            (ScanState::Identifier, CharClass::Letter | CharClass::Digit) => {
                Some(ScanState::Identifier)
            }

            (ScanState::Number, CharClass::Digit) => Some(ScanState::Number),
            (ScanState::Number, _) if c == '.' => Some(ScanState::DecimalPoint),
            (ScanState::DecimalPoint | ScanState::FloatNumber, CharClass::Digit) => {
                Some(ScanState::FloatNumber)
            }

            (ScanState::Operator, CharClass::Operator) => Some(ScanState::Operator),

            _ => None,
        }
    }

    pub fn is_accepting(self) -> bool {
        !matches!(self, ScanState::Start | ScanState::DecimalPoint)
    }
}
