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

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::lexicon::{synonyms, Lexicon};
use crate::operator::EdaOperator;

fn synonym_list<L: Lexicon + ?Sized>(lexicon: &L, word: &str) -> Vec<String> {
    synonyms(lexicon, word).into_iter().collect()
}

/// Replaces up to `n` synonym-bearing words with a random synonym each.
///
/// Candidate positions are shuffled, so which words change is random. Fewer
/// than `n` candidates means fewer replacements; none leaves `words` as is.
pub fn synonym_replacement<L, R>(words: &[String], n: usize, lexicon: &L, rng: &mut R) -> Vec<String>
where
    L: Lexicon + ?Sized,
    R: Rng + ?Sized,
{
    let mut new_words = words.to_vec();
    let mut candidates: Vec<(usize, Vec<String>)> = words
        .iter()
        .enumerate()
        .map(|(idx, word)| (idx, synonym_list(lexicon, word)))
        .filter(|(_, options)| !options.is_empty())
        .collect();
    candidates.shuffle(rng);

    for (idx, options) in candidates.iter().take(n) {
        if let Some(choice) = options.choose(rng) {
            new_words[*idx] = choice.clone();
        }
    }
    new_words
}

/// Inserts `n` random synonyms of random words at random positions.
///
/// Source words are always drawn from the original `words`, never from
/// synonyms inserted earlier in the same call. Insert positions fall in
/// `[0, len)` of the growing sequence. Stops early when no original word has
/// a synonym.
pub fn random_insertion<L, R>(words: &[String], n: usize, lexicon: &L, rng: &mut R) -> Vec<String>
where
    L: Lexicon + ?Sized,
    R: Rng + ?Sized,
{
    let mut new_words = words.to_vec();
    let pool: Vec<Vec<String>> = words
        .iter()
        .map(|word| synonym_list(lexicon, word))
        .filter(|options| !options.is_empty())
        .collect();

    for _ in 0..n {
        let Some(options) = pool.choose(rng) else {
            break;
        };
        let Some(synonym) = options.choose(rng) else {
            break;
        };
        let at = rng.gen_range(0..new_words.len());
        new_words.insert(at, synonym.clone());
    }
    new_words
}

/// Swaps two distinct random positions, `n` times.
///
/// Sequences shorter than two words have nothing to swap and are returned
/// unchanged.
pub fn random_swap<R>(words: &[String], n: usize, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let mut new_words = words.to_vec();
    let len = new_words.len();
    if len < 2 {
        return new_words;
    }

    for _ in 0..n {
        let first = rng.gen_range(0..len);
        let mut second = rng.gen_range(0..len - 1);
        if second >= first {
            second += 1;
        }
        new_words.swap(first, second);
    }
    new_words
}

/// Drops each word with probability `p`.
///
/// A word survives when a uniform draw in `[0, 1)` is strictly above `p`.
/// Single-word input is returned as is, and if every word is dropped one
/// random word of the input is kept instead.
pub fn random_deletion<R>(words: &[String], p: f64, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    if words.len() == 1 {
        return words.to_vec();
    }

    let kept: Vec<String> = words
        .iter()
        .filter(|_| rng.gen::<f64>() > p)
        .cloned()
        .collect();
    if !kept.is_empty() {
        return kept;
    }
    words.choose(rng).cloned().into_iter().collect()
}

#[derive(Debug, Clone, Copy)]
pub struct SynonymReplacement {
    n: usize,
}

impl SynonymReplacement {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl EdaOperator for SynonymReplacement {
    fn name(&self) -> &'static str {
        "augment.synonym_replacement"
    }

    fn apply(&self, words: &[String], lexicon: &dyn Lexicon, rng: &mut dyn RngCore) -> Vec<String> {
        synonym_replacement(words, self.n, lexicon, rng)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RandomInsertion {
    n: usize,
}

impl RandomInsertion {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl EdaOperator for RandomInsertion {
    fn name(&self) -> &'static str {
        "augment.random_insertion"
    }

    fn apply(&self, words: &[String], lexicon: &dyn Lexicon, rng: &mut dyn RngCore) -> Vec<String> {
        random_insertion(words, self.n, lexicon, rng)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RandomSwap {
    n: usize,
}

impl RandomSwap {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl EdaOperator for RandomSwap {
    fn name(&self) -> &'static str {
        "augment.random_swap"
    }

    fn apply(&self, words: &[String], _lexicon: &dyn Lexicon, rng: &mut dyn RngCore) -> Vec<String> {
        random_swap(words, self.n, rng)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RandomDeletion {
    p: f64,
}

impl RandomDeletion {
    pub fn new(p: f64) -> Self {
        Self { p }
    }
}

impl EdaOperator for RandomDeletion {
    fn name(&self) -> &'static str {
        "augment.random_deletion"
    }

    fn apply(&self, words: &[String], _lexicon: &dyn Lexicon, rng: &mut dyn RngCore) -> Vec<String> {
        random_deletion(words, self.p, rng)
    }
}
