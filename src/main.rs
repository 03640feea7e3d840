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

//! Balances `data/train-claims.json` and writes `data/dev-claims-augmented.json`.

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use claim_eda::logging::{EdaLogger, LogConfig};
use claim_eda::{pipeline, DatasetPaths, EdaConfig, WordNet};

fn main() -> Result<()> {
    EdaLogger::init(LogConfig::from_env())?;

    let paths = DatasetPaths::default();
    let config = EdaConfig::default();

    let wordnet = WordNet::open(&paths.wordnet_dir)
        .with_context(|| format!("loading WordNet from {}", paths.wordnet_dir.display()))?;
    let mut rng = SmallRng::from_entropy();

    let report = pipeline::run(&paths, &config, &wordnet, &mut rng).with_context(|| {
        format!(
            "augmenting {} and {}",
            paths.train.display(),
            paths.dev.display()
        )
    })?;

    println!("Before augmentation: {}", report.before);
    println!("After augmentation : {}", report.after);
    println!(
        "Saved augmented training set ({} examples) to {}",
        report.total_count,
        report.output.display()
    );
    Ok(())
}
