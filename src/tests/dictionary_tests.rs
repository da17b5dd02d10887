//! Tests for dictionary actions.
//!
//! These cover the messages each action reports and file import and export
//! through the dictionary store.

use crate::data_structures::{KeypadLayout, WordTrieError};
use crate::dictionary::{Dictionary, Outcome};
use crate::error::dictionary::DictionaryError;
use crate::error::store::StoreError;
use crate::tests::{frequency_strategy, word_strategy, TestFixture};
use proptest::prelude::*;
use std::fs;
use test_case::test_case;

fn sample() -> Dictionary {
    let mut dictionary = Dictionary::new();
    dictionary.load_entries([("cat", 5), ("car", 4), ("cart", 2), ("dog", 7)]).unwrap();
    dictionary
}

fn message<T: std::fmt::Debug>(result: Result<T, DictionaryError>) -> String {
    result.unwrap_err().to_string()
}

#[test]
fn test_add_messages() {
    let mut dictionary = Dictionary::new();

    let added = dictionary.add("cat", 5).unwrap();
    assert_eq!(added.to_string(), "added, word=cat, freq=5");
    assert_eq!(dictionary.frequency("cat"), 5);

    assert_eq!(message(dictionary.add("cat", 9)), "already exists, freq=5");
    assert_eq!(dictionary.frequency("cat"), 5);
}

#[test_case("", 3, "word must not be empty" ; "empty word")]
#[test_case("dog", 0, "frequency must be positive, got 0" ; "zero frequency")]
#[test_case("dog", -4, "frequency must be positive, got -4" ; "negative frequency")]
fn test_add_rejects(word: &str, freq: i64, expected: &str) {
    let mut dictionary = Dictionary::new();
    assert_eq!(message(dictionary.add(word, freq)), expected);
    assert!(dictionary.is_empty());
}

#[test]
fn test_delete_messages() {
    let mut dictionary = sample();
    assert_eq!(dictionary.delete("car").unwrap().to_string(), "deleted: car");
    assert_eq!(dictionary.frequency("car"), 0);
    assert_eq!(dictionary.frequency("cart"), 2);
    assert_eq!(message(dictionary.delete("car")), "not found: car");
}

#[test_case("cat", 11, true ; "existing word")]
#[test_case("cow", 3, false ; "missing word")]
#[test_case("cat", 0, false ; "zero frequency")]
#[test_case("cat", -1, false ; "negative frequency")]
fn test_modify(word: &str, freq: i64, succeeds: bool) {
    let mut dictionary = sample();
    let result = dictionary.modify(word, freq);
    if succeeds {
        assert_eq!(
            result.unwrap().to_string(),
            format!("modified: {word} freq={freq}")
        );
        assert_eq!(dictionary.frequency(word), 11);
        assert_eq!(dictionary.prefix_frequency("ca"), 17);
    } else {
        assert_eq!(message(result), format!("failed: {word} missing or freq≤0"));
        assert_eq!(dictionary.frequency("cat"), 5);
        assert_eq!(dictionary.len(), 4);
    }
}

#[test]
fn test_t9_trace() {
    let dictionary = sample();
    let trace = dictionary.t9("2278").unwrap();
    assert_eq!(
        trace.lines(),
        vec!["2 c", "22 ca", "227 car", "2278 cart"]
    );

    assert_eq!(message(dictionary.t9("")), "digits must not be empty");
    assert_eq!(message(dictionary.t9("99")), "no word");

    let err = dictionary.t9("21").unwrap_err();
    assert!(matches!(
        err,
        DictionaryError::InvalidDigit(WordTrieError::InvalidDigit {
            digit: '1',
            position: 1,
            ..
        })
    ));
    assert!(err.to_string().contains("illegal digit '1'"));
}

#[test]
fn test_t9_illegal_digit_keeps_earlier_levels() {
    let dictionary = sample();
    let text = message(dictionary.t9("22a8"));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "2 c",
            "22 ca",
            "illegal digit 'a' at position 2; enter a sequence of keypad digits",
        ]
    );

    // An illegal first digit has nothing to keep
    assert_eq!(
        dictionary.t9("1").unwrap_err().to_string(),
        "illegal digit '1' at position 0; enter a sequence of keypad digits"
    );
}

#[test]
fn test_add_and_modify_refuse_total_overflow() {
    let mut dictionary = Dictionary::new();
    let big = i64::MAX;
    dictionary.add("a", big).unwrap();
    dictionary.add("b", big).unwrap();

    assert_eq!(
        message(dictionary.add("c", 2)),
        format!("frequency total would exceed {}", u64::MAX)
    );
    assert_eq!(dictionary.frequency("c"), 0);
    assert_eq!(dictionary.len(), 2);

    dictionary.add("c", 1).unwrap();
    assert_eq!(dictionary.prefix_frequency(""), u64::MAX);

    assert!(matches!(
        dictionary.modify("c", 2),
        Err(DictionaryError::TotalOverflow)
    ));
    assert_eq!(dictionary.frequency("c"), 1);
    assert!(matches!(
        dictionary.modify("zzz", 2),
        Err(DictionaryError::ModifyFailed(_))
    ));
}

#[test]
fn test_import_rejects_overflowing_total() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .write_file(
            "huge.json",
            r#"{"a": 10000000000000000000, "b": 10000000000000000000}"#,
        )
        .unwrap();

    let mut dictionary = sample();
    let err = dictionary.import(&path).unwrap_err();
    assert!(matches!(
        err,
        DictionaryError::Store(StoreError::Malformed { .. })
    ));
    assert!(err.to_string().contains("frequency total exceeds"));
    assert_eq!(dictionary.len(), 4);
}

#[test]
fn test_load_entries_is_all_or_nothing() {
    let mut dictionary = sample();
    let err = dictionary
        .load_entries([("x", u64::MAX), ("y", 1), ("", 3)])
        .unwrap_err();
    assert!(matches!(err, DictionaryError::EntriesRefused(2)));
    assert_eq!(dictionary.len(), 4);
    assert_eq!(dictionary.frequency("x"), 0);

    dictionary.load_entries([("x", u64::MAX)]).unwrap();
    assert_eq!(dictionary.len(), 1);
}

#[test]
fn test_t9_with_custom_keypad() {
    let keypad = KeypadLayout::from_pairs([('1', "cd"), ('2', "aot"), ('3', "gr")]).unwrap();
    let mut dictionary = Dictionary::with_keypad(keypad);
    dictionary.load_entries([("cat", 5), ("dog", 7)]).unwrap();

    assert_eq!(
        dictionary.t9("123").unwrap().lines(),
        vec!["1 c", "1 d", "12 ca", "12 do", "123 dog"]
    );
    assert!(dictionary.t9("9").is_err());
}

#[test]
fn test_lookups() {
    let dictionary = sample();

    assert_eq!(
        dictionary.prefix("car").unwrap().lines(),
        vec!["car 4", "cart 2"]
    );
    assert_eq!(message(dictionary.prefix("x")), "no matches");

    assert_eq!(
        dictionary.pattern("ca?").unwrap(),
        Outcome::Words(vec!["car".to_string(), "cat".to_string()])
    );
    assert_eq!(
        dictionary.pattern("car*").unwrap(),
        Outcome::Words(vec!["car".to_string(), "cart".to_string()])
    );
    assert_eq!(message(dictionary.pattern("?")), "no matches");

    // car 227 and cat 228 are both one digit from 229
    assert_eq!(
        dictionary.fuzzy("229").unwrap(),
        Outcome::Words(vec!["car".to_string(), "cat".to_string()])
    );
    assert_eq!(message(dictionary.fuzzy("99999")), "no matches");

    assert_eq!(
        dictionary.list().lines(),
        vec!["car 4", "cart 2", "cat 5", "dog 7"]
    );
    assert!(Dictionary::new().list().lines().is_empty());
}

#[test]
fn test_export_then_import() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.path("words.json");
    let original = sample();

    let exported = original.export(&path, false).unwrap();
    assert_eq!(
        exported.to_string(),
        format!("export succeeded: 4 words to {}", path.display())
    );
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\"car\":4,\"cart\":2,\"cat\":5,\"dog\":7}\n"
    );

    let mut restored = Dictionary::new();
    restored.add("stale", 1).unwrap();
    let imported = restored.import(&path).unwrap();
    assert_eq!(
        imported.to_string(),
        format!("import succeeded: 4 words from {}", path.display())
    );
    assert_eq!(restored.trie().to_map(), original.trie().to_map());
    assert_eq!(restored.frequency("stale"), 0);
}

#[test_case("{\"cat\": 0}" ; "zero frequency")]
#[test_case("{\"cat\": \"five\"}" ; "string frequency")]
#[test_case("[\"cat\"]" ; "not an object")]
#[test_case("{\"cat\": 5" ; "truncated")]
fn test_failed_import_keeps_contents(text: &str) {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.write_file("broken.json", text).unwrap();

    let mut dictionary = sample();
    let err = dictionary.import(&path).unwrap_err();
    assert!(matches!(
        err,
        DictionaryError::Store(StoreError::Malformed { .. })
    ));
    assert_eq!(dictionary.len(), 4);
    assert_eq!(dictionary.frequency("dog"), 7);
}

#[test]
fn test_import_missing_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.path("absent.json");

    let mut dictionary = sample();
    let err = dictionary.import(&path).unwrap_err();
    assert!(matches!(
        err,
        DictionaryError::Store(StoreError::CannotOpen { .. })
    ));
    assert!(err.to_string().starts_with("cannot open"));
    assert_eq!(dictionary.len(), 4);
}

#[test]
fn test_clear() {
    let mut dictionary = sample();
    dictionary.clear();
    assert!(dictionary.is_empty());
    assert_eq!(dictionary.prefix_frequency(""), 0);
    assert_eq!(message(dictionary.prefix("")), "no matches");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_add_then_delete_restores(
        words in proptest::collection::btree_map(word_strategy(), frequency_strategy(), 1..12),
        extra in word_strategy(),
        freq in frequency_strategy(),
    ) {
        let mut dictionary = Dictionary::new();
        dictionary.load_entries(words.clone()).unwrap();
        prop_assume!(!words.contains_key(&extra));

        let before = dictionary.trie().to_map();
        let total = dictionary.prefix_frequency("");
        dictionary.add(&extra, freq as i64).unwrap();
        prop_assert_eq!(dictionary.prefix_frequency(""), total + freq);

        dictionary.delete(&extra).unwrap();
        prop_assert_eq!(dictionary.trie().to_map(), before);
        prop_assert_eq!(dictionary.prefix_frequency(""), total);
    }
}
