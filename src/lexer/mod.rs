//! Lexical analysis.
//!
//! This module turns source text into a stream of tokens. It handles:
//!
//! - Classification of every input character
//! - A finite-state scanner with single-character pushback
//! - Recognition of reserved words, identifiers, numbers and operators
//! - Line/column tracking for error reporting
//! - Line comments and whitespace

pub mod classifier;
pub mod lexer;
pub mod tokens;
