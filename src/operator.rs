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

//! # ClaimEDA Operator Module
//!
//! The trait every word-level perturbation implements.
//!
//! Operators receive the tokenized sentence, the lexicon and the shared random
//! source, and return a new word sequence. They never fail: a sentence that
//! offers nothing to perturb comes back unchanged.
//!
//! ```rust
//! use claim_eda::operator::{execute_operator, EdaOperator};
//! use claim_eda::operators::augment::RandomSwap;
//! use claim_eda::lexicon::InMemoryLexicon;
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let words: Vec<String> = ["a", "b", "c"].iter().map(|w| w.to_string()).collect();
//! let mut rng = SmallRng::seed_from_u64(7);
//! let out = execute_operator(&RandomSwap::new(1), &words, &InMemoryLexicon::new(), &mut rng);
//! assert_eq!(out.len(), 3);
//! ```

use log::debug;
use rand::RngCore;

use crate::lexicon::Lexicon;

/// Contract shared by the four EDA perturbations.
pub trait EdaOperator: std::fmt::Debug {
    /// Stable identifier used in logs, e.g. `augment.swap`.
    fn name(&self) -> &'static str;

    /// Produces a perturbed copy of `words`.
    fn apply(&self, words: &[String], lexicon: &dyn Lexicon, rng: &mut dyn RngCore)
        -> Vec<String>;
}

/// Runs `operator` and logs the size change at debug level.
pub fn execute_operator(
    operator: &dyn EdaOperator,
    words: &[String],
    lexicon: &dyn Lexicon,
    rng: &mut dyn RngCore,
) -> Vec<String> {
    let out = operator.apply(words, lexicon, rng);
    debug!(
        "{}: {} -> {} words",
        operator.name(),
        words.len(),
        out.len()
    );
    out
}
