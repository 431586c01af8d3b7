//! Error types and error handling for the lexical analyzer.
//!
//! This module defines the errors produced while obtaining and scanning
//! source code:
//!
//! - Error structures with line and column information
//! - Specific error variants for unreadable sources and bad characters
//! - Error formatting and display functionality

pub mod errors;

#[cfg(test)]
mod tests;
