//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Normalization tests (canonical names, aliases, error cases)
//! - Dispatch tests (direct lookup, shift fallback, precedence)

#[cfg(test)]
mod normalize_tests;
