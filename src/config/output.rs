// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Output configuration module.

use super::{ConfigResult, Validate};
use serde::{Deserialize, Serialize};

/// How command results are rendered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One tab-separated line per result
    #[default]
    Text,
    /// One JSON document per query
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OutputConfig {
    /// Rendering format
    pub format: OutputFormat,
}

impl Validate for OutputConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}
