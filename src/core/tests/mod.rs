//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Codec tests (parsing, canonical output, round trips)
//! - Hotkey list tests
//! - Conflict detection tests
//! - Strict validation tests
//! - Type tests (KeySym, KeyStates, Hotkey serde)

#[cfg(test)]
mod conflict_tests;
#[cfg(test)]
mod list_tests;
#[cfg(test)]
mod parser_tests;
#[cfg(test)]
mod types_tests;
#[cfg(test)]
mod validator_tests;
