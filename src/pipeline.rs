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

//! # Augmentation Pipeline
//!
//! The batch run end to end:
//!
//! 1. load the train and dev datasets
//! 2. count labels in the train set
//! 3. generate synthetic records for every minority label of the train set
//! 4. fold train, dev and the synthetic records into one dataset
//! 5. write it to the output path
//!
//! Nothing is written if any earlier step fails.

use std::path::PathBuf;

use log::info;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::balance::ClassBalancer;
use crate::eda::EdaConfig;
use crate::errors::Result;
use crate::inspect::LabelDistribution;
use crate::io::{load_dataset, write_dataset, DatasetPaths};
use crate::lexicon::Lexicon;
use crate::record::DatasetBuilder;

/// Summary of one run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AugmentationReport {
    /// Label counts of the train set before augmentation.
    pub before: LabelDistribution,
    /// Label counts of the written dataset.
    pub after: LabelDistribution,
    pub synthetic_count: usize,
    pub total_count: usize,
    pub output: PathBuf,
}

pub fn run(
    paths: &DatasetPaths,
    config: &EdaConfig,
    lexicon: &dyn Lexicon,
    rng: &mut dyn RngCore,
) -> Result<AugmentationReport> {
    let balancer = ClassBalancer::new(config.clone())?;

    let train = load_dataset(&paths.train)?;
    let dev = load_dataset(&paths.dev)?;
    info!(
        "loaded {} train and {} dev records",
        train.len(),
        dev.len()
    );

    let before = LabelDistribution::from_dataset(&train);
    let synthetic = balancer.synthesize(&train, lexicon, rng)?;
    let synthetic_count = synthetic.len();
    info!("generated {synthetic_count} synthetic records");

    let augmented = DatasetBuilder::new()
        .extend(&train)
        .extend(&dev)
        .extend_records(synthetic)
        .build();
    let after = LabelDistribution::from_dataset(&augmented);

    write_dataset(&paths.output, &augmented)?;
    info!("wrote {} records to {}", augmented.len(), paths.output.display());

    Ok(AugmentationReport {
        before,
        after,
        synthetic_count,
        total_count: augmented.len(),
        output: paths.output.clone(),
    })
}
