//! Error types for the scanner.
//!
//! This module defines the errors produced while obtaining and scanning
//! source text. It includes:
//!
//! - Lexical errors carrying the line, column and partial lexeme
//! - Source acquisition errors, reported before scanning starts
//! - Suggestions used when rendering diagnostics

pub mod errors;
