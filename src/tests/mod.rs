// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Crate-level test modules for Lanai.
//!
//! Data structure tests live next to the data structures; this module covers
//! configuration, errors and dictionary loading, and holds shared fixtures.

pub mod config_tests;
pub mod dictionary_tests;

pub use test_utils::{dictionary_line_strategy, TestFixture};
