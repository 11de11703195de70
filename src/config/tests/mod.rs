//! Config module tests
//!
//! Contains test suites for keymap file handling:
//! - Bind line and whole-file parsing
//! - Alias substitution
//! - File loading and IO errors

#[cfg(test)]
mod parser_tests;
