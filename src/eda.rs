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

//! # EDA Orchestrator
//!
//! Turns one sentence into up to four perturbed variants, always in the order
//! synonym replacement, random insertion, random swap, random deletion. Every
//! variant starts from the same tokenized sentence; operators never chain.
//!
//! ## Intensities
//!
//! `alpha_sr`, `alpha_ri` and `alpha_rs` are fractions of the sentence length:
//! the operator count is `max(1, floor(alpha * word_count))`. `p_rd` is the
//! per-word deletion probability.
//!
//! ```rust
//! use claim_eda::eda::{Eda, EdaConfig};
//! use claim_eda::lexicon::InMemoryLexicon;
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let lexicon = InMemoryLexicon::new().with_synset(["warm", "hot"]);
//! let eda = Eda::new(EdaConfig::default()).unwrap();
//! let mut rng = SmallRng::seed_from_u64(1);
//! let variants = eda.augment("oceans are warm today", &lexicon, &mut rng);
//! assert_eq!(variants.len(), 4);
//! ```

use serde::{Deserialize, Serialize};

use rand::RngCore;

use crate::errors::{EdaError, Result};
use crate::lexicon::Lexicon;
use crate::operator::{execute_operator, EdaOperator};
use crate::operators::augment::{RandomDeletion, RandomInsertion, RandomSwap, SynonymReplacement};

/// Number of distinct variants [`Eda::augment`] can produce.
pub const VARIANT_COUNT: usize = 4;

/// Augmentation intensities.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdaConfig {
    /// Fraction of words replaced by synonyms.
    pub alpha_sr: f64,
    /// Fraction of sentence length inserted as synonyms.
    pub alpha_ri: f64,
    /// Fraction of sentence length used as the swap count.
    pub alpha_rs: f64,
    /// Per-word deletion probability.
    pub p_rd: f64,
    /// How many of the four variants to return, in order.
    pub num_aug: usize,
}

impl Default for EdaConfig {
    fn default() -> Self {
        Self {
            alpha_sr: 0.1,
            alpha_ri: 0.1,
            alpha_rs: 0.1,
            p_rd: 0.1,
            num_aug: VARIANT_COUNT,
        }
    }
}

impl EdaConfig {
    /// Ratios above one are allowed (they scale past the sentence length).
    /// `p_rd = 1` deletes every word and falls back to one random survivor.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("alpha_sr", self.alpha_sr),
            ("alpha_ri", self.alpha_ri),
            ("alpha_rs", self.alpha_rs),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(EdaError::validation(format!(
                    "eda '{name}' must be a finite non-negative ratio, got {value}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.p_rd) {
            return Err(EdaError::validation(format!(
                "eda 'p_rd' must be in [0,1], got {}",
                self.p_rd
            )));
        }
        if self.num_aug == 0 || self.num_aug > VARIANT_COUNT {
            return Err(EdaError::validation(format!(
                "eda 'num_aug' must be between 1 and {VARIANT_COUNT}, got {}",
                self.num_aug
            )));
        }
        Ok(())
    }

    /// Same intensities, returning all four variants.
    pub fn with_all_variants(&self) -> Self {
        Self {
            num_aug: VARIANT_COUNT,
            ..self.clone()
        }
    }
}

/// Operator count for a ratio: `max(1, floor(alpha * word_count))`.
pub fn operation_count(alpha: f64, word_count: usize) -> usize {
    ((alpha * word_count as f64).floor() as usize).max(1)
}

/// Sentence-level EDA driver.
#[derive(Debug, Clone)]
pub struct Eda {
    config: EdaConfig,
}

impl Eda {
    pub fn new(config: EdaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The four operators for a sentence of `word_count` words, in output order.
    pub fn operators(&self, word_count: usize) -> [Box<dyn EdaOperator>; VARIANT_COUNT] {
        let cfg = &self.config;
        [
            Box::new(SynonymReplacement::new(operation_count(cfg.alpha_sr, word_count))),
            Box::new(RandomInsertion::new(operation_count(cfg.alpha_ri, word_count))),
            Box::new(RandomSwap::new(operation_count(cfg.alpha_rs, word_count))),
            Box::new(RandomDeletion::new(cfg.p_rd)),
        ]
    }

    /// Tokenizes `sentence` and returns the first `num_aug` variants.
    pub fn augment(&self, sentence: &str, lexicon: &dyn Lexicon, rng: &mut dyn RngCore) -> Vec<String> {
        let words = lexicon.tokenize(sentence);
        self.augment_words(&words, lexicon, rng)
    }

    /// Variants of an already tokenized sentence.
    pub fn augment_words(
        &self,
        words: &[String],
        lexicon: &dyn Lexicon,
        rng: &mut dyn RngCore,
    ) -> Vec<String> {
        self.operators(words.len())
            .iter()
            .take(self.config.num_aug)
            .map(|operator| execute_operator(operator.as_ref(), words, lexicon, rng).join(" "))
            .collect()
    }
}

/// Function form of [`Eda::augment`].
#[allow(clippy::too_many_arguments)]
pub fn eda(
    sentence: &str,
    alpha_sr: f64,
    alpha_ri: f64,
    alpha_rs: f64,
    p_rd: f64,
    num_aug: usize,
    lexicon: &dyn Lexicon,
    rng: &mut dyn RngCore,
) -> Result<Vec<String>> {
    let eda = Eda::new(EdaConfig {
        alpha_sr,
        alpha_ri,
        alpha_rs,
        p_rd,
        num_aug,
    })?;
    Ok(eda.augment(sentence, lexicon, rng))
}
