// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Radix Trie.
//!
//! A compressed prefix tree mapping byte-sequence keys to values of any type,
//! with exact lookup and three flavors of prefix matching over a query:
//!
//! - shortest: the shortest stored key that is a prefix of the query,
//! - longest: the longest such key,
//! - all: every such key, ordered by increasing length.
//!
//! Keys and queries are raw bytes. Queries may be given as bytes or as text;
//! text is compared byte by byte, so both views always agree.
//!
//! # Example
//!
//! ```
//! use lanai_lib::data_structures::lanai_trie::LanaiTrie;
//!
//! let mut routes = LanaiTrie::new();
//! routes.insert("/api", "api");
//! routes.insert("/api/v1", "v1");
//!
//! assert_eq!(routes.lookup("/api"), Some(&"api"));
//! assert_eq!(routes.lookup("/ap"), None);
//!
//! let longest = routes.match_longest_prefix("/api/v1/users").unwrap();
//! assert_eq!(longest.prefix_length, 7);
//! assert_eq!(*longest.value, "v1");
//!
//! let all: Vec<usize> = routes
//!     .match_all_prefixes(b"/api/v1/users")
//!     .iter()
//!     .map(|m| m.prefix_length)
//!     .collect();
//! assert_eq!(all, vec![4, 7]);
//! ```
//!
//! # Concurrency
//!
//! The trie has no internal synchronization. `insert` takes `&mut self` and
//! every query takes `&self`, so a shared trie needs external locking only
//! while it is still being written.

mod input;
mod node;
mod walk;

#[cfg(test)]
mod tests;

use std::collections::hash_map::Entry;

pub use input::{AsTrieInput, ByteInput, TextInput, TrieInput};
pub use walk::{MatchMode, PrefixMatch};

use node::{common_prefix_len, TrieNode};
use walk::walk;

/// Radix trie over byte keys.
///
/// Each node owns its label, an optional value and its children, so splitting
/// a node on insert only rewires the local parent to child edge.
#[derive(Debug, Clone)]
pub struct LanaiTrie<V> {
    /// The root node; its label is always empty
    root: TrieNode<V>,

    /// Number of stored keys
    len: usize,
}

impl<V> LanaiTrie<V> {
    /// Creates a new empty `LanaiTrie`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::root(),
            len: 0,
        }
    }

    /// Inserts a key-value pair into the trie.
    ///
    /// An existing value for the same key is replaced. Keys that share a
    /// prefix with stored keys split the diverging node; the stored keys keep
    /// their values.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert. May be empty.
    /// * `value` - The value to associate with the key.
    ///
    /// # Returns
    ///
    /// The value previously stored under `key`, or `None` if the key is new.
    pub fn insert<K>(&mut self, key: K, value: V) -> Option<V>
    where
        K: AsRef<[u8]>,
    {
        let mut rest = key.as_ref();
        let mut node = &mut self.root;

        while let Some(&first) = rest.first() {
            let child = match node.children.entry(first) {
                Entry::Vacant(slot) => {
                    slot.insert(Box::new(TrieNode::leaf(rest.to_vec(), value)));
                    self.len += 1;
                    return None;
                }
                Entry::Occupied(slot) => slot.into_mut(),
            };

            let common = common_prefix_len(&child.label, rest);
            if common < child.label.len() {
                tracing::trace!(
                    label_len = child.label.len(),
                    at = common,
                    "splitting trie node"
                );
                child.split_at(common);
            }

            rest = &rest[common..];
            node = child.as_mut();
        }

        let previous = node.value.replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Retrieves the value stored under exactly `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to look up, as bytes or text.
    ///
    /// # Returns
    ///
    /// The stored value, or `None` if `key` was never inserted.
    pub fn lookup<K>(&self, key: &K) -> Option<&V>
    where
        K: AsTrieInput + ?Sized,
    {
        self.find(key, MatchMode::Exact)
            .first()
            .map(|found| found.value)
    }

    /// Returns `true` if `key` has a stored value.
    pub fn contains_key<K>(&self, key: &K) -> bool
    where
        K: AsTrieInput + ?Sized,
    {
        self.lookup(key).is_some()
    }

    /// Matches the shortest stored key that is a prefix of `input`.
    pub fn match_shortest_prefix<K>(&self, input: &K) -> Option<PrefixMatch<'_, V>>
    where
        K: AsTrieInput + ?Sized,
    {
        self.find(input, MatchMode::ShortestPrefix).first().copied()
    }

    /// Matches the longest stored key that is a prefix of `input`.
    pub fn match_longest_prefix<K>(&self, input: &K) -> Option<PrefixMatch<'_, V>>
    where
        K: AsTrieInput + ?Sized,
    {
        self.find(input, MatchMode::LongestPrefix).last().copied()
    }

    /// Matches every stored key that is a prefix of `input`.
    ///
    /// # Returns
    ///
    /// The matches ordered by strictly increasing prefix length. The first
    /// element is always the shortest match and the last the longest. Empty if
    /// nothing matches.
    pub fn match_all_prefixes<K>(&self, input: &K) -> Vec<PrefixMatch<'_, V>>
    where
        K: AsTrieInput + ?Sized,
    {
        self.find(input, MatchMode::AllPrefixes)
    }

    /// Runs the prefix walk for `input` in the given mode.
    pub fn find<K>(&self, input: &K, mode: MatchMode) -> Vec<PrefixMatch<'_, V>>
    where
        K: AsTrieInput + ?Sized,
    {
        walk(&self.root, input.as_trie_input(), mode)
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no key has been stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes, including the root and waypoints.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }
}

impl<V> Default for LanaiTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for LanaiTrie<V>
where
    K: AsRef<[u8]>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for LanaiTrie<V>
where
    K: AsRef<[u8]>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
