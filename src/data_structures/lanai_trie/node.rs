// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lanai radix trie.
//!
//! Each node owns the byte label that distinguishes it from its siblings, an
//! optional value, and its children keyed by the first byte of their labels.
//! Children are owned directly by their parent, so the trie is a plain tree
//! with no back-pointers.

use fnv::FnvHashMap;

/// A node in the Lanai radix trie.
///
/// A node without a value is a waypoint: it exists only to branch toward its
/// descendants.
#[derive(Debug, Clone)]
pub struct TrieNode<V> {
    /// Byte segment of the key(s) below this node, relative to its parent.
    /// Empty only at the root.
    pub label: Vec<u8>,

    /// Value stored for the key ending at this node
    pub value: Option<V>,

    /// Children keyed by the first byte of their label
    pub children: FnvHashMap<u8, Box<TrieNode<V>>>,
}

impl<V> TrieNode<V> {
    /// Creates the empty root node.
    pub fn root() -> Self {
        Self::with_label(Vec::new())
    }

    /// Creates a waypoint node carrying `label`.
    pub fn with_label(label: Vec<u8>) -> Self {
        Self {
            label,
            value: None,
            children: FnvHashMap::default(),
        }
    }

    /// Creates a leaf holding `value` under `label`.
    pub fn leaf(label: Vec<u8>, value: V) -> Self {
        Self {
            label,
            value: Some(value),
            children: FnvHashMap::default(),
        }
    }

    /// Returns the child whose label starts with `byte`, if any.
    #[inline]
    pub fn child(&self, byte: u8) -> Option<&TrieNode<V>> {
        self.children.get(&byte).map(Box::as_ref)
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Counts this node and every node below it.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .values()
            .map(|child| child.subtree_size())
            .sum::<usize>()
    }

    /// Splits this node's label at `at`.
    ///
    /// This node keeps `label[..at]` and becomes a waypoint. Its value and
    /// children move into a new child carrying `label[at..]`, keyed by that
    /// suffix's first byte. `at` must be strictly inside the label.
    pub fn split_at(&mut self, at: usize) {
        debug_assert!(at > 0 && at < self.label.len());

        let suffix = self.label.split_off(at);
        let first = suffix[0];
        let moved = TrieNode {
            label: suffix,
            value: self.value.take(),
            children: std::mem::take(&mut self.children),
        };
        self.children.insert(first, Box::new(moved));
    }
}

/// Returns the length of the longest common byte prefix of `a` and `b`.
#[inline]
pub fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_prefix_len() {
        assert_eq!(common_prefix_len(b"abcdefg", b"abcdxyz"), 4);
        assert_eq!(common_prefix_len(b"abc", b"abc"), 3);
        assert_eq!(common_prefix_len(b"abc", b"abcdef"), 3);
        assert_eq!(common_prefix_len(b"xbc", b"abc"), 0);
        assert_eq!(common_prefix_len(b"", b"abc"), 0);
    }

    #[test]
    fn test_split_moves_value_and_children() {
        let mut node = TrieNode::leaf(b"abcdefg".to_vec(), 1);
        node.children
            .insert(b'h', Box::new(TrieNode::leaf(b"hi".to_vec(), 2)));

        node.split_at(4);

        assert_eq!(node.label, b"abcd");
        assert!(node.value.is_none());
        assert_eq!(node.children.len(), 1);

        let moved = node.child(b'e').unwrap();
        assert_eq!(moved.label, b"efg");
        assert_eq!(moved.value, Some(1));
        assert_eq!(moved.child(b'h').unwrap().value, Some(2));
    }

    #[test]
    fn test_subtree_size() {
        let mut root: TrieNode<u8> = TrieNode::root();
        assert_eq!(root.subtree_size(), 1);
        assert!(root.is_leaf());

        root.children
            .insert(b'a', Box::new(TrieNode::leaf(b"ab".to_vec(), 0)));
        root.children
            .insert(b'x', Box::new(TrieNode::leaf(b"x".to_vec(), 1)));
        assert_eq!(root.subtree_size(), 3);
        assert!(!root.is_leaf());
    }
}
