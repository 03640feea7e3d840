//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of ClaimEDA.
//! The ClaimEDA project belongs to the Dunimd project team.

use claim_eda::lexicon::InMemoryLexicon;
use claim_eda::operator::{execute_operator, EdaOperator};
use claim_eda::operators::augment::*;
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

const VOCAB: &[&str] = &["the", "cat", "sat", "on", "mat", "quickly", "big", "house"];

fn lexicon() -> InMemoryLexicon {
    InMemoryLexicon::new()
        .with_synset(["cat", "true_cat"])
        .with_synset(["sat", "sit", "seat"])
        .with_synset(["big", "large", "great"])
        .with_synset(["house", "home"])
        .with_synset(["quickly", "rapidly", "speedily"])
}

fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

fn sorted(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v
}

#[test]
fn synonym_replacement_changes_requested_positions() {
    let lex = lexicon();
    let input = words("the big cat sat in the house");
    let mut rng = SmallRng::seed_from_u64(11);
    let out = synonym_replacement(&input, 2, &lex, &mut rng);

    assert_eq!(out.len(), input.len());
    let changed: Vec<usize> = (0..input.len()).filter(|&i| out[i] != input[i]).collect();
    assert_eq!(changed.len(), 2);
    for i in changed {
        assert!(["big", "cat", "sat", "house"].contains(&input[i].as_str()));
    }
}

#[test]
fn synonym_replacement_without_candidates_is_identity() {
    let lex = lexicon();
    let input = words("the dog ran away");
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(synonym_replacement(&input, 3, &lex, &mut rng), input);
}

#[test]
fn synonym_replacement_uses_multi_word_lemmas_with_spaces() {
    let lex = lexicon();
    let input = words("cat cat cat");
    let mut rng = SmallRng::seed_from_u64(5);
    let out = synonym_replacement(&input, 3, &lex, &mut rng);
    assert_eq!(out, vec!["true cat", "true cat", "true cat"]);
}

#[test]
fn random_insertion_adds_synonyms_of_original_words() {
    let lex = lexicon();
    let input = words("a big house");
    let mut rng = SmallRng::seed_from_u64(9);
    let out = random_insertion(&input, 3, &lex, &mut rng);

    assert_eq!(out.len(), 6);
    let allowed = ["a", "big", "house", "large", "great", "home"];
    assert!(out.iter().all(|w| allowed.contains(&w.as_str())));
    assert_eq!(out.last().map(String::as_str), Some("house"));
}

#[test]
fn random_insertion_draws_only_from_original_words() {
    let lex = InMemoryLexicon::new()
        .with_synset(["a", "b"])
        .with_synset(["b", "c"]);
    let input = words("a z");
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let out = random_insertion(&input, 20, &lex, &mut rng);
        assert_eq!(out.len(), 22);
        assert!(!out.iter().any(|w| w == "c"), "seed {seed}: {out:?}");
    }
}

#[test]
fn random_insertion_stops_without_candidates() {
    let lex = lexicon();
    let input = words("the dog ran");
    let mut rng = SmallRng::seed_from_u64(2);
    assert_eq!(random_insertion(&input, 4, &lex, &mut rng), input);
}

#[test]
fn random_swap_on_single_word_is_noop() {
    let mut rng = SmallRng::seed_from_u64(3);
    assert_eq!(random_swap(&words("alone"), 3, &mut rng), words("alone"));
    assert!(random_swap(&[], 3, &mut rng).is_empty());
}

#[test]
fn random_swap_of_two_words_exchanges_them() {
    let mut rng = SmallRng::seed_from_u64(4);
    assert_eq!(random_swap(&words("left right"), 1, &mut rng), words("right left"));
}

#[test]
fn random_deletion_keeps_single_word() {
    let mut rng = SmallRng::seed_from_u64(6);
    assert_eq!(random_deletion(&words("solo"), 0.99, &mut rng), words("solo"));
}

#[test]
fn random_deletion_falls_back_to_one_word() {
    let input = words("every word will go");
    let mut rng = SmallRng::seed_from_u64(8);
    let out = random_deletion(&input, 0.999_999_999, &mut rng);
    assert_eq!(out.len(), 1);
    assert!(input.contains(&out[0]));
}

#[test]
fn random_deletion_with_zero_probability_keeps_everything() {
    let input = words("nothing is dropped here");
    let mut rng = SmallRng::seed_from_u64(10);
    assert_eq!(random_deletion(&input, 0.0, &mut rng), input);
}

#[test]
fn operators_report_names_and_run_through_executor() {
    let lex = lexicon();
    let input = words("the big cat sat");
    let ops: Vec<Box<dyn EdaOperator>> = vec![
        Box::new(SynonymReplacement::new(1)),
        Box::new(RandomInsertion::new(1)),
        Box::new(RandomSwap::new(1)),
        Box::new(RandomDeletion::new(0.1)),
    ];
    let names: Vec<&str> = ops.iter().map(|op| op.name()).collect();
    assert_eq!(
        names,
        vec![
            "augment.synonym_replacement",
            "augment.random_insertion",
            "augment.random_swap",
            "augment.random_deletion",
        ]
    );

    let mut rng = SmallRng::seed_from_u64(12);
    let lengths: Vec<usize> = ops
        .iter()
        .map(|op| execute_operator(op.as_ref(), &input, &lex, &mut rng).len())
        .collect();
    assert_eq!(lengths[0], 4);
    assert_eq!(lengths[1], 5);
    assert_eq!(lengths[2], 4);
    assert!((1..=4).contains(&lengths[3]));
}

fn word_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(VOCAB).prop_map(str::to_string), 1..12)
}

proptest! {
    #[test]
    fn synonym_replacement_preserves_length(input in word_list(), n in 0usize..6, seed in any::<u64>()) {
        let lex = lexicon();
        let mut rng = SmallRng::seed_from_u64(seed);
        let out = synonym_replacement(&input, n, &lex, &mut rng);
        prop_assert_eq!(out.len(), input.len());
        let changed = input.iter().zip(&out).filter(|(a, b)| a != b).count();
        prop_assert!(changed <= n);
    }

    #[test]
    fn random_swap_preserves_multiset(input in word_list(), n in 0usize..6, seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let out = random_swap(&input, n, &mut rng);
        prop_assert_eq!(sorted(out), sorted(input));
    }

    #[test]
    fn random_deletion_never_empties(input in word_list(), p in 0.0f64..1.0, seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let out = random_deletion(&input, p, &mut rng);
        prop_assert!(!out.is_empty());
        prop_assert!(out.len() <= input.len());
    }

    #[test]
    fn random_insertion_only_grows(input in word_list(), n in 0usize..6, seed in any::<u64>()) {
        let lex = lexicon();
        let mut rng = SmallRng::seed_from_u64(seed);
        let out = random_insertion(&input, n, &lex, &mut rng);
        prop_assert!(out.len() >= input.len());
        prop_assert!(out.len() <= input.len() + n);
        prop_assert_eq!(out.last(), input.last());
    }
}
