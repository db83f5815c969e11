// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dictionary configuration module.
//!
//! Controls how `key<separator>value` lines are parsed into a trie.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Dictionary parsing configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// Separator between key and value on each line
    pub separator: String,

    /// Lines starting with this prefix are skipped (empty disables comments)
    pub comment_prefix: String,

    /// Whether a line without separator stores its key with an empty value
    pub allow_missing_value: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            separator: "\t".to_string(),
            comment_prefix: "#".to_string(),
            allow_missing_value: true,
        }
    }
}

impl DictionaryConfig {
    /// Sets the key/value separator.
    pub fn with_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the comment prefix.
    pub fn with_comment_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    /// Sets whether lines without separator are accepted.
    pub fn with_allow_missing_value(mut self, allow: bool) -> Self {
        self.allow_missing_value = allow;
        self
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.separator.is_empty() {
            return Err(ConfigError::ValidationError(
                "dictionary separator must not be empty".to_string(),
            ));
        }

        if self.separator.contains('\n') {
            return Err(ConfigError::ValidationError(
                "dictionary separator must not contain a newline".to_string(),
            ));
        }

        Ok(())
    }
}
