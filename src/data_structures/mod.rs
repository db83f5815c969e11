// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Data structures for Lanai.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Zero-copy queries over borrowed input
//! - Owned trees with no shared mutable state

pub mod lanai_trie;

// Re-export common data structures
pub use lanai_trie::{LanaiTrie, MatchMode, PrefixMatch};
