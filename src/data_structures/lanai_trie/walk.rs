// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The prefix walk shared by lookup and every prefix-match operation.
//!
//! The walk descends from the root, consuming one whole label per step, and
//! records value-bearing nodes according to a [`MatchMode`]. Because labels are
//! consumed strictly left to right, matches are recorded in increasing prefix
//! length order.

use std::fmt;

use super::input::TrieInput;
use super::node::TrieNode;

/// Which value-bearing nodes the walk records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Only a value sitting exactly where the input ends.
    Exact,
    /// The first value on the path; the walk stops there.
    ShortestPrefix,
    /// The deepest value on the path.
    LongestPrefix,
    /// Every value on the path.
    AllPrefixes,
}

/// A stored key that is a prefix of a query.
pub struct PrefixMatch<'a, V> {
    /// Length in bytes of the matched prefix
    pub prefix_length: usize,

    /// Value stored under the matched prefix
    pub value: &'a V,
}

impl<'a, V> PrefixMatch<'a, V> {
    pub(crate) fn new(prefix_length: usize, value: &'a V) -> Self {
        Self {
            prefix_length,
            value,
        }
    }

    /// Returns the matched prefix of `input`.
    ///
    /// `input` must be the bytes of the query that produced this match.
    pub fn prefix_of<'i>(&self, input: &'i [u8]) -> &'i [u8] {
        &input[..self.prefix_length]
    }
}

impl<V> Clone for PrefixMatch<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for PrefixMatch<'_, V> {}

impl<V: fmt::Debug> fmt::Debug for PrefixMatch<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixMatch")
            .field("prefix_length", &self.prefix_length)
            .field("value", self.value)
            .finish()
    }
}

impl<V: PartialEq> PartialEq for PrefixMatch<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        self.prefix_length == other.prefix_length && self.value == other.value
    }
}

impl<V: Eq> Eq for PrefixMatch<'_, V> {}

/// Walks `input` down from `root`, collecting matches for `mode`.
///
/// Matches come back ordered root to deepest. `ShortestPrefix`,
/// `LongestPrefix` and `Exact` yield at most one match.
pub(crate) fn walk<'t, V, I>(
    root: &'t TrieNode<V>,
    mut input: I,
    mode: MatchMode,
) -> Vec<PrefixMatch<'t, V>>
where
    I: TrieInput,
{
    let mut matches = Vec::new();
    let mut node = root;
    let mut consumed = 0;

    while !input.is_end() {
        if let Some(value) = node.value.as_ref() {
            match mode {
                MatchMode::ShortestPrefix => {
                    matches.push(PrefixMatch::new(consumed, value));
                    return matches;
                }
                // Keep only the deepest value seen so far; the walk may
                // still end on a waypoint below it.
                MatchMode::LongestPrefix => {
                    matches.clear();
                    matches.push(PrefixMatch::new(consumed, value));
                }
                MatchMode::AllPrefixes => matches.push(PrefixMatch::new(consumed, value)),
                MatchMode::Exact => {}
            }
        }

        // A child keyed by the next byte only counts if its whole label matches.
        let next = node
            .child(input.next_byte())
            .filter(|child| input.has_prefix(&child.label));

        match next {
            Some(child) => {
                input.advance(child.label.len());
                consumed += child.label.len();
                node = child;
            }
            None => return matches,
        }
    }

    if let Some(value) = node.value.as_ref() {
        if mode == MatchMode::LongestPrefix {
            matches.clear();
        }
        matches.push(PrefixMatch::new(consumed, value));
    }
    matches
}
