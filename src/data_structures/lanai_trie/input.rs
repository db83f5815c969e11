// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Input views consumed by the trie walk.
//!
//! The walk only needs to peek at the next byte, test whether the remaining
//! input starts with a label, and advance. [`TrieInput`] captures exactly that,
//! so one walk serves both raw bytes and text. Text is always compared byte by
//! byte; no Unicode normalization or boundary handling takes place.

/// A cursor over the unconsumed part of a query.
pub trait TrieInput {
    /// Returns `true` once every byte has been consumed.
    fn is_end(&self) -> bool;

    /// Returns the next unconsumed byte.
    ///
    /// Must only be called when [`TrieInput::is_end`] is `false`.
    fn next_byte(&self) -> u8;

    /// Returns `true` if the remaining input starts with `label`.
    fn has_prefix(&self, label: &[u8]) -> bool;

    /// Consumes `n` bytes.
    fn advance(&mut self, n: usize);
}

/// Cursor over a byte slice.
#[derive(Debug, Clone, Copy)]
pub struct ByteInput<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteInput<'a> {
    /// Creates a cursor positioned at the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }
}

impl TrieInput for ByteInput<'_> {
    #[inline]
    fn is_end(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    fn next_byte(&self) -> u8 {
        self.bytes[0]
    }

    #[inline]
    fn has_prefix(&self, label: &[u8]) -> bool {
        self.bytes.starts_with(label)
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.bytes = &self.bytes[n..];
    }
}

/// Cursor over a string slice.
///
/// Labels may end in the middle of a multi-byte character, so the cursor keeps
/// a byte offset instead of re-slicing the `str`.
#[derive(Debug, Clone, Copy)]
pub struct TextInput<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> TextInput<'a> {
    /// Creates a cursor positioned at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self { text, offset: 0 }
    }

    #[inline]
    fn rest(&self) -> &'a [u8] {
        &self.text.as_bytes()[self.offset..]
    }
}

impl TrieInput for TextInput<'_> {
    #[inline]
    fn is_end(&self) -> bool {
        self.offset >= self.text.len()
    }

    #[inline]
    fn next_byte(&self) -> u8 {
        self.rest()[0]
    }

    #[inline]
    fn has_prefix(&self, label: &[u8]) -> bool {
        self.rest().starts_with(label)
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        debug_assert!(self.offset + n <= self.text.len());
        self.offset += n;
    }
}

/// Types that can be queried against a trie.
///
/// Byte containers map to [`ByteInput`], string types to [`TextInput`]. Both
/// views produce identical results for the same bytes.
pub trait AsTrieInput {
    /// The cursor type produced for this input.
    type Input<'a>: TrieInput
    where
        Self: 'a;

    /// Returns a cursor positioned at the start of the input.
    fn as_trie_input(&self) -> Self::Input<'_>;
}

impl AsTrieInput for [u8] {
    type Input<'a> = ByteInput<'a>;

    fn as_trie_input(&self) -> Self::Input<'_> {
        ByteInput::new(self)
    }
}

impl<const N: usize> AsTrieInput for [u8; N] {
    type Input<'a> = ByteInput<'a>;

    fn as_trie_input(&self) -> Self::Input<'_> {
        ByteInput::new(self)
    }
}

impl AsTrieInput for Vec<u8> {
    type Input<'a> = ByteInput<'a>;

    fn as_trie_input(&self) -> Self::Input<'_> {
        ByteInput::new(self)
    }
}

impl AsTrieInput for str {
    type Input<'a> = TextInput<'a>;

    fn as_trie_input(&self) -> Self::Input<'_> {
        TextInput::new(self)
    }
}

impl AsTrieInput for String {
    type Input<'a> = TextInput<'a>;

    fn as_trie_input(&self) -> Self::Input<'_> {
        TextInput::new(self)
    }
}
