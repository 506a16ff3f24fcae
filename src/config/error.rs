use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving a bindings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Bindings file does not exist.
    #[error("Bindings file not found: {0}")]
    NotFound(PathBuf),

    /// A line is neither a comment, a section header nor an entry.
    #[error("Syntax error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },

    /// A parsed hotkey has no text form and would be lost by a rewrite.
    #[error("Cannot write hotkey for '{action}': key {sym:#x} has no name")]
    Unwritable { action: String, sym: u32 },

    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),

    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
