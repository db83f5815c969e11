// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Library
//!
//! This library contains a radix trie for byte-sequence keys with exact lookup
//! and shortest, longest and all-prefix matching, together with the dictionary
//! loader, configuration and reporting used by the `lanai` binary.
//!
//! # Architecture
//!
//! - `data_structures::lanai_trie` is the core and has no dependency on the
//!   rest of the crate.
//! - `dictionary` builds tries from text sources.
//! - `config`, `error` and `report` serve the command-line interface.

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;
pub mod report;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Lanai.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
