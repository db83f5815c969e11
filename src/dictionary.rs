// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dictionary loading.
//!
//! Builds a [`LanaiTrie`] from lines of the form `key<separator>value`. Keys
//! are kept as raw bytes; values are decoded as UTF-8, replacing invalid
//! sequences. Later lines overwrite earlier lines with the same key.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::{DictionaryConfig, Validate};
use crate::data_structures::LanaiTrie;
use crate::error::dictionary::DictionaryError;

/// Counters collected while loading a dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DictionaryStats {
    /// Lines read, including blank and comment lines
    pub lines: usize,

    /// Lines stored in the trie
    pub entries: usize,

    /// Entries that replaced an earlier value for the same key
    pub overwritten: usize,

    /// Blank and comment lines
    pub skipped: usize,
}

/// A trie loaded from a dictionary source.
#[derive(Debug, Clone)]
pub struct Dictionary {
    trie: LanaiTrie<String>,
    stats: DictionaryStats,
}

impl Dictionary {
    /// Returns the loaded trie.
    pub fn trie(&self) -> &LanaiTrie<String> {
        &self.trie
    }

    /// Consumes the dictionary, returning its trie.
    pub fn into_trie(self) -> LanaiTrie<String> {
        self.trie
    }

    /// Returns the counters collected while loading.
    pub fn stats(&self) -> DictionaryStats {
        self.stats
    }
}

/// Loads a dictionary from any buffered reader.
///
/// # Arguments
///
/// * `reader` - Source of newline-separated entries. `\r\n` endings are accepted.
/// * `config` - Separator, comment and missing-value settings.
///
/// # Returns
///
/// * `Ok(Dictionary)` - The loaded trie and its load counters.
/// * `Err(DictionaryError)` - On invalid settings, read failure, an empty key,
///   or a missing separator when values are required.
pub fn load_dictionary<R: BufRead>(
    reader: R,
    config: &DictionaryConfig,
) -> Result<Dictionary, DictionaryError> {
    config.validate()?;

    let separator = config.separator.as_bytes();
    let comment = config.comment_prefix.as_bytes();

    let mut trie = LanaiTrie::new();
    let mut stats = DictionaryStats::default();

    for (index, line) in reader.split(b'\n').enumerate() {
        let line_no = index + 1;
        let mut line = line.map_err(|source| DictionaryError::Read {
            line: line_no,
            source,
        })?;
        stats.lines += 1;

        if line.last() == Some(&b'\r') {
            line.pop();
        }

        if line.is_empty() || (!comment.is_empty() && line.starts_with(comment)) {
            stats.skipped += 1;
            continue;
        }

        let (key, value) = match find_separator(&line, separator) {
            Some(at) => (&line[..at], &line[at + separator.len()..]),
            None if config.allow_missing_value => (line.as_slice(), &[][..]),
            None => {
                return Err(DictionaryError::MissingSeparator {
                    line: line_no,
                    separator: config.separator.clone(),
                })
            }
        };

        if key.is_empty() {
            return Err(DictionaryError::EmptyKey { line: line_no });
        }

        let value = String::from_utf8_lossy(value).into_owned();
        if trie.insert(key, value).is_some() {
            warn!(line = line_no, "duplicate dictionary key overwrites earlier entry");
            stats.overwritten += 1;
        }
        stats.entries += 1;
    }

    debug!(
        lines = stats.lines,
        entries = stats.entries,
        keys = trie.len(),
        nodes = trie.node_count(),
        "dictionary loaded"
    );

    Ok(Dictionary { trie, stats })
}

/// Loads a dictionary from a file.
pub fn load_dictionary_file<P: AsRef<Path>>(
    path: P,
    config: &DictionaryConfig,
) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DictionaryError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary = load_dictionary(BufReader::new(file), config)?;
    info!(
        path = %path.display(),
        keys = dictionary.trie.len(),
        "dictionary file loaded"
    );
    Ok(dictionary)
}

fn find_separator(line: &[u8], separator: &[u8]) -> Option<usize> {
    line.windows(separator.len())
        .position(|window| window == separator)
}
