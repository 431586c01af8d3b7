//! Lexical analysis module for the analyzer.
//!
//! This module contains the lexer (tokenizer) that converts source lines
//! into a stream of tokens and lexical errors. It handles:
//!
//! - Character classification and the scanning state transitions
//! - Recognition of keywords, identifiers, numbers, operators and delimiters
//! - Line tracking for error reporting
//! - Skipping of comment lines

pub mod lexer;
pub mod tokens;
