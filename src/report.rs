// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Query reports rendered by the command-line interface.

use serde::Serialize;

use crate::config::OutputFormat;
use crate::data_structures::{LanaiTrie, MatchMode};
use crate::error::LanaiResult;

/// One matched key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// The matched prefix of the query, decoded lossily
    pub prefix: String,

    /// Length of the matched prefix in bytes
    pub prefix_length: usize,

    /// The stored value
    pub value: String,
}

/// Result of one query against a trie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryReport {
    /// The query as given
    pub input: String,

    /// Which walk produced the matches
    pub mode: &'static str,

    /// Matches ordered by increasing prefix length
    pub matches: Vec<MatchRecord>,
}

/// Returns the name used for `mode` in reports.
pub fn mode_name(mode: MatchMode) -> &'static str {
    match mode {
        MatchMode::Exact => "exact",
        MatchMode::ShortestPrefix => "shortest",
        MatchMode::LongestPrefix => "longest",
        MatchMode::AllPrefixes => "all",
    }
}

/// Runs `input` against `trie` in `mode` and collects the matches.
pub fn query(trie: &LanaiTrie<String>, input: &str, mode: MatchMode) -> QueryReport {
    let matches = trie
        .find(input, mode)
        .into_iter()
        .map(|found| MatchRecord {
            prefix: String::from_utf8_lossy(found.prefix_of(input.as_bytes())).into_owned(),
            prefix_length: found.prefix_length,
            value: found.value.clone(),
        })
        .collect();

    QueryReport {
        input: input.to_string(),
        mode: mode_name(mode),
        matches,
    }
}

/// Renders `report` in the requested format, without a trailing newline.
///
/// Text output is one tab-separated line per match. Backslashes, tabs and
/// line breaks inside fields are escaped as `\\`, `\t`, `\n` and `\r` so every
/// line keeps exactly four fields.
pub fn render(report: &QueryReport, format: OutputFormat) -> LanaiResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
        OutputFormat::Text => {
            let input = escape_field(&report.input);
            if report.matches.is_empty() {
                return Ok(format!("{input}\t-"));
            }

            let lines: Vec<String> = report
                .matches
                .iter()
                .map(|m| {
                    format!(
                        "{}\t{}\t{}\t{}",
                        input,
                        escape_field(&m.prefix),
                        m.prefix_length,
                        escape_field(&m.value)
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

fn escape_field(field: &str) -> String {
    let mut escaped = String::with_capacity(field.len());
    for c in field.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}
