//! Property-based tests for phrase masking and guess resolution.

use proptest::prelude::*;

use crate::domain::rules::{is_special, WILDCARD};
use crate::domain::{normalize, test_gens, test_prelude, SecretPhrase};

/// One representative character per distinct normalized letter in `text`.
fn distinct_letters(text: &str) -> Vec<char> {
    let mut keys: Vec<String> = Vec::new();
    let mut reps = Vec::new();
    for c in text.chars().filter(|c| !is_special(*c)) {
        let key = normalize(c);
        if !keys.contains(&key) {
            keys.push(key);
            reps.push(c);
        }
    }
    reps
}

fn text_with_guess_order() -> impl Strategy<Value = (String, Vec<char>)> {
    test_gens::phrase_text().prop_flat_map(|text| {
        let letters = distinct_letters(&text);
        (Just(text), Just(letters).prop_shuffle())
    })
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: the phrase is finished exactly when the last distinct letter
    /// is first guessed, whatever the guess order.
    #[test]
    fn prop_finished_after_last_distinct_letter((text, order) in text_with_guess_order()) {
        let mut phrase = SecretPhrase::new(&text).unwrap();
        if order.is_empty() {
            prop_assert!(phrase.is_finished());
        }
        for (i, c) in order.iter().enumerate() {
            prop_assert!(!phrase.is_finished(), "finished early before guess {}", i);
            let revealed = phrase.guess_char(*c);
            prop_assert!(revealed > 0, "{:?} revealed nothing in {:?}", c, text);
        }
        prop_assert!(phrase.is_finished());
        prop_assert_eq!(phrase.masked_view(), phrase.text().to_string());
    }

    /// Property: masked view length and wildcard placement follow the cells.
    #[test]
    fn prop_masked_view_mirrors_cells(
        text in test_gens::phrase_text(),
        guesses in prop::collection::vec(test_gens::phrase_letter(), 0..10),
    ) {
        let mut phrase = SecretPhrase::new(&text).unwrap();
        for g in guesses {
            phrase.guess_char(g);
        }
        let masked: Vec<char> = phrase.masked_view().chars().collect();
        prop_assert_eq!(masked.len(), phrase.len());
        for (cell, shown) in phrase.cells().iter().zip(masked) {
            prop_assert_eq!(shown == WILDCARD, !cell.is_revealed());
            if cell.is_revealed() {
                prop_assert_eq!(shown, cell.canonical());
            }
        }
    }

    /// Property: a second identical guess never reveals anything.
    #[test]
    fn prop_repeat_guess_reveals_nothing(
        text in test_gens::phrase_text(),
        letter in test_gens::phrase_letter(),
    ) {
        let mut phrase = SecretPhrase::new(&text).unwrap();
        phrase.guess_char(letter);
        prop_assert_eq!(phrase.guess_char(letter), 0);
        prop_assert_eq!(phrase.guess_char(letter.to_ascii_lowercase()), 0);
    }

    /// Property: special characters are visible before any guess.
    #[test]
    fn prop_special_characters_never_masked(text in test_gens::phrase_text()) {
        let phrase = SecretPhrase::new(&text).unwrap();
        for (raw, shown) in phrase.text().chars().zip(phrase.masked_view().chars()) {
            if is_special(raw) {
                prop_assert_eq!(raw, shown);
            } else {
                prop_assert_eq!(shown, WILDCARD);
            }
        }
    }

    /// Property: revealed state is monotonic across guesses.
    #[test]
    fn prop_revealed_never_reverts(
        text in test_gens::phrase_text(),
        guesses in prop::collection::vec(test_gens::phrase_letter(), 1..15),
    ) {
        let mut phrase = SecretPhrase::new(&text).unwrap();
        let mut before: Vec<bool> = phrase.cells().iter().map(|c| c.is_revealed()).collect();
        for g in guesses {
            phrase.guess_char(g);
            let after: Vec<bool> = phrase.cells().iter().map(|c| c.is_revealed()).collect();
            for (b, a) in before.iter().zip(&after) {
                prop_assert!(!b || *a);
            }
            before = after;
        }
    }
}
