use std::sync::Once;

use pretty_assertions::assert_eq;
use tally_core::{tally_all, Tally, Token};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(tally_logging::initialize_for_tests);
}

const REFERENCE_WORDS: [&str; 5] = ["apple", "banana", "apple", "mango", "apple"];

#[test]
fn reference_scenario_counts() {
    init_logging();
    let tally = tally_all(REFERENCE_WORDS);

    assert_eq!(tally.count("apple"), 3);
    assert_eq!(tally.count("banana"), 1);
    assert_eq!(tally.count("mango"), 1);
    assert_eq!(tally.distinct(), 3);
    assert_eq!(tally.total(), 5);
}

#[test]
fn empty_sequence_yields_empty_tally() {
    init_logging();
    let tally = tally_all(Vec::<&str>::new());

    assert!(tally.is_empty());
    assert_eq!(tally.distinct(), 0);
    assert_eq!(tally.total(), 0);
    assert_eq!(tally, Tally::new());
}

#[test]
fn single_element_sequence() {
    init_logging();
    let tally = tally_all(["x"]);

    assert_eq!(tally.count("x"), 1);
    assert_eq!(tally.distinct(), 1);
}

#[test]
fn all_identical_tokens() {
    init_logging();
    let tally = tally_all(["a", "a", "a"]);

    assert_eq!(tally.count("a"), 3);
    assert_eq!(tally.distinct(), 1);
}

#[test]
fn counts_are_independent_of_input_order() {
    init_logging();
    let permuted = ["mango", "apple", "apple", "banana", "apple"];

    assert_eq!(tally_all(REFERENCE_WORDS), tally_all(permuted));
}

#[test]
fn incremental_counts_match_prefix_occurrences() {
    init_logging();
    let mut tally = Tally::new();

    for (index, word) in REFERENCE_WORDS.iter().enumerate() {
        tally.increment(Token::from(*word));
        let seen = REFERENCE_WORDS[..=index]
            .iter()
            .filter(|w| **w == *word)
            .count() as u64;
        assert_eq!(tally.count(word), seen);
    }
}

#[test]
fn owned_and_borrowed_tokens_count_the_same() {
    init_logging();
    let owned = tally_all(vec!["pear".to_string(), "pear".to_string()]);
    let borrowed = tally_all(["pear", "pear"]);

    assert_eq!(owned, borrowed);
}
