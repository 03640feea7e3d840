//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of ClaimEDA.
//! The ClaimEDA project belongs to the Dunimd project team.

use claim_eda::balance::ClassBalancer;
use claim_eda::eda::EdaConfig;
use claim_eda::inspect::LabelDistribution;
use claim_eda::lexicon::InMemoryLexicon;
use claim_eda::record::{ClaimDataset, ClaimRecord, DatasetBuilder};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

fn lexicon() -> InMemoryLexicon {
    InMemoryLexicon::new()
        .with_synset(["cat", "true_cat"])
        .with_synset(["sat", "sit", "seat"])
        .with_synset(["fast", "quickly"])
}

fn scenario() -> ClaimDataset {
    serde_json::from_value(json!({
        "a": {"claim_text": "the cat sat", "claim_label": "X", "evidences": [1]},
        "b": {"claim_text": "the cat sat there today", "claim_label": "Y", "evidences": [2]},
        "c": {"claim_text": "dogs run fast today", "claim_label": "Y", "evidences": [3]}
    }))
    .unwrap()
}

fn skewed() -> ClaimDataset {
    let mut builder = DatasetBuilder::new();
    for i in 0..9 {
        builder = builder.insert(
            format!("s{i}"),
            ClaimRecord::new(format!("the cat sat on mat {i}"), "SUPPORTS", vec![json!(format!("ev-{i}"))]),
        );
    }
    for i in 0..3 {
        builder = builder.insert(
            format!("r{i}"),
            ClaimRecord::new("sea ice melts fast", "REFUTES", vec![json!(format!("ev-r{i}"))]),
        );
    }
    builder
        .insert("n0", ClaimRecord::new("nobody knows", "NOT_ENOUGH_INFO", vec![]))
        .build()
}

#[test]
fn scenario_generates_one_record_for_minority_label() {
    let balancer = ClassBalancer::new(EdaConfig::default()).unwrap();
    let mut rng = SmallRng::seed_from_u64(42);
    let balanced = balancer.balance(&scenario(), &lexicon(), &mut rng).unwrap();

    assert_eq!(balanced.len(), 4);
    let synthetic = &balanced["a_aug0"];
    assert_eq!(synthetic.claim_label, "X");
    assert_eq!(synthetic.evidences, vec![json!(1)]);
    assert!(synthetic.extra.is_empty());

    let dist = LabelDistribution::from_dataset(&balanced);
    assert_eq!(dist.count("X"), 2);
    assert_eq!(dist.count("Y"), 2);
}

#[test]
fn first_synthetic_record_uses_synonym_replacement() {
    let balancer = ClassBalancer::new(EdaConfig::default()).unwrap();
    let mut rng = SmallRng::seed_from_u64(7);
    let synthetic = balancer.synthesize(&scenario(), &lexicon(), &mut rng).unwrap();

    let text = &synthetic["a_aug0"].claim_text;
    let words: Vec<&str> = text.split(' ').collect();
    assert_eq!(words[0], "the");
    assert!(text != "the cat sat");
}

#[test]
fn consecutive_records_cycle_through_the_four_variants() {
    let mut builder = DatasetBuilder::new().insert("x", ClaimRecord::new("the cat sat", "X", vec![]));
    for i in 0..5 {
        builder = builder.insert(format!("y{i}"), ClaimRecord::new("oceans warm", "Y", vec![]));
    }
    let train = builder.build();
    let lexicon = InMemoryLexicon::new().with_synset(["cat", "feline"]);
    let balancer = ClassBalancer::new(EdaConfig::default()).unwrap();

    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let synthetic = balancer.synthesize(&train, &lexicon, &mut rng).unwrap();
        assert_eq!(synthetic.len(), 4);

        assert_eq!(synthetic["x_aug0"].claim_text, "the feline sat");

        let inserted: Vec<&str> = synthetic["x_aug1"].claim_text.split(' ').collect();
        assert_eq!(inserted.len(), 4);
        assert!(inserted.contains(&"feline"));

        let mut swapped: Vec<&str> = synthetic["x_aug2"].claim_text.split(' ').collect();
        swapped.sort_unstable();
        assert_eq!(swapped, vec!["cat", "sat", "the"]);

        let kept = synthetic["x_aug3"].claim_text.split(' ').count();
        assert!((1..=3).contains(&kept), "seed {seed}");
    }
}

#[test]
fn every_label_reaches_majority_count() {
    let train = skewed();
    let before = LabelDistribution::from_dataset(&train);
    let balancer = ClassBalancer::new(EdaConfig::default()).unwrap();
    let mut rng = SmallRng::seed_from_u64(99);
    let balanced = balancer.balance(&train, &lexicon(), &mut rng).unwrap();

    let after = LabelDistribution::from_dataset(&balanced);
    assert_eq!(before.max_count(), 9);
    for label in ["SUPPORTS", "REFUTES", "NOT_ENOUGH_INFO"] {
        assert_eq!(after.count(label), 9, "label {label}");
    }
    assert_eq!(balanced.len(), 27);
}

#[test]
fn synthetic_records_keep_source_label_and_evidence() {
    let train = skewed();
    let balancer = ClassBalancer::new(EdaConfig::default()).unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    let synthetic = balancer.synthesize(&train, &lexicon(), &mut rng).unwrap();

    assert_eq!(synthetic.len(), 6 + 8);
    for (id, record) in &synthetic {
        let (source_id, index) = id.rsplit_once("_aug").expect("derived id");
        let source = &train[source_id];
        assert_eq!(record.claim_label, source.claim_label);
        assert_eq!(record.evidences, source.evidences);
        assert!(index.parse::<usize>().is_ok());
    }
}

#[test]
fn majority_label_gets_no_synthetic_ids() {
    let train = skewed();
    let balancer = ClassBalancer::new(EdaConfig::default()).unwrap();
    let mut rng = SmallRng::seed_from_u64(17);
    let synthetic = balancer.synthesize(&train, &lexicon(), &mut rng).unwrap();
    assert!(synthetic.keys().all(|id| !id.starts_with('s')));
}

#[test]
fn indices_are_scoped_per_label() {
    let train = skewed();
    let balancer = ClassBalancer::new(EdaConfig::default()).unwrap();
    let mut rng = SmallRng::seed_from_u64(23);
    let synthetic = balancer.synthesize(&train, &lexicon(), &mut rng).unwrap();

    // The only NOT_ENOUGH_INFO record is the source of all eight of its synthetic records.
    let nei: Vec<&String> = synthetic.keys().filter(|id| id.starts_with("n0_aug")).collect();
    assert_eq!(nei.len(), 8);
    for i in 0..8 {
        assert!(synthetic.contains_key(&format!("n0_aug{i}")));
    }
}

#[test]
fn input_dataset_is_untouched() {
    let train = scenario();
    let snapshot = train.clone();
    let balancer = ClassBalancer::new(EdaConfig::default()).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    let _ = balancer.balance(&train, &lexicon(), &mut rng).unwrap();
    assert_eq!(train, snapshot);
}

#[test]
fn balanced_dataset_stays_balanced() {
    let balancer = ClassBalancer::new(EdaConfig::default()).unwrap();
    let dataset = DatasetBuilder::new()
        .insert("p", ClaimRecord::new("one claim", "A", vec![]))
        .insert("q", ClaimRecord::new("other claim", "B", vec![]))
        .build();
    let mut rng = SmallRng::seed_from_u64(2);
    assert!(balancer.synthesize(&dataset, &lexicon(), &mut rng).unwrap().is_empty());
    assert!(balancer
        .synthesize(&ClaimDataset::new(), &lexicon(), &mut rng)
        .unwrap()
        .is_empty());
}
