// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tests for dictionary loading.

use proptest::prelude::*;
use std::collections::BTreeMap;
use std::io::Cursor;

use crate::config::DictionaryConfig;
use crate::dictionary::{load_dictionary, load_dictionary_file, Dictionary};
use crate::error::config::ConfigError;
use crate::error::dictionary::DictionaryError;
use crate::tests::{dictionary_line_strategy, TestFixture};

fn load(source: &str, config: &DictionaryConfig) -> Result<Dictionary, DictionaryError> {
    load_dictionary(Cursor::new(source), config)
}

#[test]
fn test_missing_separator_allowed() {
    let dictionary = load("/health\n/api\tapi\n", &DictionaryConfig::default()).unwrap();

    assert_eq!(dictionary.trie().lookup("/health"), Some(&String::new()));
    assert_eq!(dictionary.stats().entries, 2);
}

#[test]
fn test_missing_separator_rejected() {
    let config = DictionaryConfig::default().with_allow_missing_value(false);
    let result = load("/api\tapi\n/health\n", &config);

    assert!(matches!(
        result,
        Err(DictionaryError::MissingSeparator { line: 2, ref separator }) if separator == "\t"
    ));
}

#[test]
fn test_empty_key_rejected() {
    let result = load("# header\n\tvalue\n", &DictionaryConfig::default());
    assert!(matches!(result, Err(DictionaryError::EmptyKey { line: 2 })));
}

#[test]
fn test_invalid_separator_rejected() {
    let config = DictionaryConfig::default().with_separator("");
    let result = load("k\tv\n", &config);
    assert!(matches!(
        result,
        Err(DictionaryError::InvalidConfig(ConfigError::ValidationError(_)))
    ));

    let config = DictionaryConfig::default().with_separator("\n");
    assert!(matches!(
        load("k\nv\n", &config),
        Err(DictionaryError::InvalidConfig(_))
    ));
}

#[test]
fn test_duplicates_overwrite() {
    let dictionary = load("k\tfirst\nk\tsecond\nother\tx\n", &DictionaryConfig::default()).unwrap();
    let stats = dictionary.stats();

    assert_eq!(stats.entries, 3);
    assert_eq!(stats.overwritten, 1);
    assert_eq!(dictionary.trie().len(), 2);
    assert_eq!(dictionary.trie().lookup("k"), Some(&"second".to_string()));
}

#[test]
fn test_custom_separator_and_comment() {
    let config = DictionaryConfig::default()
        .with_separator(" => ")
        .with_comment_prefix("//");
    let source = "// routes\n/api => api => v2\n#literal => hash\n";
    let dictionary = load(source, &config).unwrap();

    // Only the first separator splits.
    assert_eq!(dictionary.trie().lookup("/api"), Some(&"api => v2".to_string()));
    assert_eq!(dictionary.trie().lookup("#literal"), Some(&"hash".to_string()));
    assert_eq!(dictionary.stats().skipped, 1);
}

#[test]
fn test_values_keep_surrounding_text() {
    let dictionary = load("key\t value with spaces \n", &DictionaryConfig::default()).unwrap();
    assert_eq!(
        dictionary.trie().lookup("key"),
        Some(&" value with spaces ".to_string())
    );
}

#[test]
fn test_invalid_utf8_value_is_replaced() {
    let source: &[u8] = b"k\xC3\xA9\tbad\xFFvalue\n";
    let dictionary = load_dictionary(Cursor::new(source), &DictionaryConfig::default()).unwrap();

    assert_eq!(
        dictionary.trie().lookup("k\u{e9}"),
        Some(&"bad\u{FFFD}value".to_string())
    );
}

#[test]
fn test_load_dictionary_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("routes.tsv", "/api\tapi\n/api/v1\tv1\n/api/v1/users\tusers\n")
        .unwrap();

    let trie = load_dictionary_file(&path, &DictionaryConfig::default())
        .unwrap()
        .into_trie();

    let longest = trie.match_longest_prefix("/api/v1/users/42").unwrap();
    assert_eq!(longest.value, "users");
    assert_eq!(trie.match_all_prefixes("/api/v1/x").len(), 2);
}

#[test]
fn test_open_missing_file() {
    let fixture = TestFixture::new().unwrap();
    let missing = fixture.temp_dir.path().join("missing.tsv");

    let result = load_dictionary_file(&missing, &DictionaryConfig::default());
    assert!(matches!(result, Err(DictionaryError::Open { ref path, .. }) if *path == missing));
}

proptest! {
    // Property: the loaded trie holds the last value written for each key
    #[test]
    fn prop_loaded_trie_matches_last_write(
        lines in prop::collection::vec(dictionary_line_strategy(), 0..40)
    ) {
        let source: String = lines.iter().map(|(k, v)| format!("{k}\t{v}\n")).collect();
        let dictionary = load(&source, &DictionaryConfig::default()).unwrap();

        let model: BTreeMap<&str, &str> =
            lines.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        prop_assert_eq!(dictionary.trie().len(), model.len());
        prop_assert_eq!(dictionary.stats().entries, lines.len());

        for (key, value) in model {
            prop_assert_eq!(dictionary.trie().lookup(key).map(String::as_str), Some(value));
        }
    }
}
