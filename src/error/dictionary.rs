// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dictionary error module.
//!
//! Errors raised while reading `key<separator>value` lines into a trie. Line
//! numbers are 1-based.

use std::path::PathBuf;
use thiserror::Error;

use super::config::ConfigError;

/// Errors that can occur while loading a dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Error when the dictionary file cannot be opened.
    #[error("Failed to open dictionary {path:?}: {source}")]
    Open {
        /// Path of the dictionary file
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Error when reading from the dictionary source fails.
    #[error("Failed to read dictionary line {line}: {source}")]
    Read {
        /// Line being read when the error occurred
        line: usize,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Error when a line has no separator and values are required.
    #[error("Line {line} has no separator {separator:?}")]
    MissingSeparator {
        /// Offending line
        line: usize,
        /// The configured separator
        separator: String,
    },

    /// Error when the dictionary settings are unusable.
    #[error("Invalid dictionary settings: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Error when a line has an empty key.
    #[error("Line {line} has an empty key")]
    EmptyKey {
        /// Offending line
        line: usize,
    },
}
