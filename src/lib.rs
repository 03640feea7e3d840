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

//! # ClaimEDA Core Library
//!
//! Balances a claim-classification dataset by generating Easy Data
//! Augmentation (EDA) paraphrases of under-represented labels.
//!
//! ## Module Overview
//!
//! - **lexicon**: synonym lookup, WordNet reader and Treebank tokenizer
//! - **operator**: the trait shared by word-level perturbations
//! - **operators**: synonym replacement, random insertion, swap and deletion
//! - **eda**: four-variant sentence augmentation
//! - **balance**: per-label parity through synthetic records
//! - **record**: claim records and dataset folding
//! - **inspect**: label distributions
//! - **io**: JSON dataset loading and writing
//! - **pipeline**: the end-to-end batch run
//! - **logging**: `log` backend
//!
//! ## Quick Start
//!
//! ```rust
//! use claim_eda::{ClassBalancer, EdaConfig, InMemoryLexicon};
//! use claim_eda::record::{ClaimRecord, DatasetBuilder};
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let train = DatasetBuilder::new()
//!     .insert("a", ClaimRecord::new("the cat sat", "X", vec![]))
//!     .insert("b", ClaimRecord::new("the dog ran", "Y", vec![]))
//!     .insert("c", ClaimRecord::new("birds fly south", "Y", vec![]))
//!     .build();
//! let lexicon = InMemoryLexicon::new().with_synset(["cat", "feline"]);
//! let balancer = ClassBalancer::new(EdaConfig::default()).unwrap();
//! let mut rng = SmallRng::seed_from_u64(3);
//! let balanced = balancer.balance(&train, &lexicon, &mut rng).unwrap();
//! assert_eq!(balanced.len(), 4);
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return `Result<T, EdaError>`. The perturbation
//! operators themselves cannot fail.

pub mod balance;
pub mod eda;
pub mod errors;
pub mod inspect;
pub mod io;
pub mod lexicon;
pub mod logging;
pub mod operator;
pub mod operators;
pub mod pipeline;
pub mod record;

pub use balance::ClassBalancer;
pub use eda::{eda, Eda, EdaConfig};
pub use errors::{EdaError, Result};
pub use inspect::LabelDistribution;
pub use io::{load_dataset, write_dataset, DatasetPaths};
pub use lexicon::{synonyms, InMemoryLexicon, Lexicon, WordNet};
pub use operator::{execute_operator, EdaOperator};
pub use pipeline::{run, AugmentationReport};
pub use record::{ClaimDataset, ClaimRecord, DatasetBuilder};
