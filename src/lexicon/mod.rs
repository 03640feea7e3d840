//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of ClaimEDA.
//! The ClaimEDA project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Lexicon Module
//!
//! Lexical lookups used by the perturbation operators.
//!
//! ## Module Components
//!
//! - **Lexicon**: the two-method capability (`lemmas_of`, `tokenize`) every
//!   operator is written against
//! - **InMemoryLexicon**: a small hand-built vocabulary, useful for tests and
//!   for domain-specific synonym lists
//! - **WordNet** ([wordnet.rs](wordnet/index.html)): reader for a WordNet 3.0
//!   `dict` directory
//! - **TreebankTokenizer** ([tokenize.rs](tokenize/index.html)): Penn
//!   Treebank-style word tokenizer
//!
//! ## Usage
//!
//! ```rust
//! use claim_eda::lexicon::{synonyms, InMemoryLexicon};
//!
//! let lexicon = InMemoryLexicon::new().with_synset(["quick", "fast", "speedy"]);
//! let found = synonyms(&lexicon, "Quick");
//! assert!(found.contains("fast"));
//! assert!(!found.contains("quick"));
//! ```

pub mod tokenize;
pub mod wordnet;

use std::collections::{BTreeSet, HashMap};

pub use tokenize::{treebank_tokenize, TreebankTokenizer};
pub use wordnet::{PartOfSpeech, WordNet};

/// Read-only lexical database plus the tokenizer that feeds it.
pub trait Lexicon: std::fmt::Debug {
    /// Every lemma name of every sense of `word`, in database order.
    ///
    /// Multi-word lemmas keep the database separator (`_`). Unknown words
    /// return an empty list.
    fn lemmas_of(&self, word: &str) -> Vec<String>;

    /// Splits a sentence into word tokens.
    fn tokenize(&self, sentence: &str) -> Vec<String> {
        treebank_tokenize(sentence)
    }
}

/// Distinct synonyms of `word`, excluding `word` itself (case-insensitive).
///
/// Lemma separators are turned into spaces. The set is ordered so that a seeded
/// random choice over it is reproducible.
pub fn synonyms<L: Lexicon + ?Sized>(lexicon: &L, word: &str) -> BTreeSet<String> {
    let lowered = word.to_lowercase();
    lexicon
        .lemmas_of(word)
        .into_iter()
        .map(|lemma| lemma.replace('_', " "))
        .filter(|name| name.to_lowercase() != lowered)
        .collect()
}

/// Hash-map backed lexicon built from explicit synonym groups.
///
/// Each group plays the role of one sense: looking up any member returns all
/// members of every group it belongs to.
#[derive(Clone, Debug, Default)]
pub struct InMemoryLexicon {
    synsets: Vec<Vec<String>>,
    index: HashMap<String, Vec<usize>>,
}

impl InMemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one synonym group.
    pub fn with_synset<I, S>(mut self, lemmas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_synset(lemmas);
        self
    }

    pub fn add_synset<I, S>(&mut self, lemmas: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lemmas: Vec<String> = lemmas.into_iter().map(Into::into).collect();
        if lemmas.is_empty() {
            return;
        }
        let idx = self.synsets.len();
        for lemma in &lemmas {
            let key = lemma.to_lowercase().replace(' ', "_");
            let slots = self.index.entry(key).or_default();
            if !slots.contains(&idx) {
                slots.push(idx);
            }
        }
        self.synsets.push(lemmas);
    }

    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }
}

impl Lexicon for InMemoryLexicon {
    fn lemmas_of(&self, word: &str) -> Vec<String> {
        let key = word.to_lowercase().replace(' ', "_");
        self.index
            .get(&key)
            .map(|slots| {
                slots
                    .iter()
                    .flat_map(|&idx| self.synsets[idx].iter().cloned())
                    .collect()
            })
            .unwrap_or_default()
    }
}
