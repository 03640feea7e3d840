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

//! # Class Balancer
//!
//! Brings every label of a dataset up to the size of its largest label by
//! generating EDA paraphrases of randomly chosen members of that label.
//!
//! For a label with `deficit = max_count - count`, synthetic record `i` (for
//! `i` in `0..deficit`) is built from a source id drawn with replacement from
//! the label's ids. The source text is run through EDA and variant `i % 4` is
//! kept, so consecutive records cycle through replacement, insertion, swap and
//! deletion. The record id is `{source_id}_aug{i}`.

use std::collections::BTreeMap;

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::RngCore;

use crate::eda::{Eda, EdaConfig, VARIANT_COUNT};
use crate::errors::{EdaError, Result};
use crate::inspect::LabelDistribution;
use crate::lexicon::Lexicon;
use crate::record::{synthetic_id, ClaimDataset, DatasetBuilder};

/// Generates synthetic records until every label matches the majority label.
#[derive(Debug, Clone)]
pub struct ClassBalancer {
    eda: Eda,
}

impl ClassBalancer {
    /// Uses the intensities of `config`; all four variants are always
    /// generated regardless of `config.num_aug`.
    pub fn new(config: EdaConfig) -> Result<Self> {
        Ok(Self {
            eda: Eda::new(config.with_all_variants())?,
        })
    }

    /// Synthetic records only, keyed by their derived ids.
    ///
    /// Labels are visited in sorted order and ids within a label in sorted
    /// order, so a seeded `rng` gives a reproducible result.
    pub fn synthesize(
        &self,
        dataset: &ClaimDataset,
        lexicon: &dyn Lexicon,
        rng: &mut dyn RngCore,
    ) -> Result<ClaimDataset> {
        let distribution = LabelDistribution::from_dataset(dataset);
        let max_count = distribution.max_count();

        let mut ids_by_label: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (id, record) in dataset {
            ids_by_label
                .entry(record.claim_label.as_str())
                .or_default()
                .push(id.as_str());
        }

        let mut synthetic = ClaimDataset::new();
        for (label, ids) in &ids_by_label {
            let deficit = max_count.saturating_sub(ids.len());
            if deficit == 0 {
                continue;
            }
            info!(
                "label '{label}': {} records, generating {deficit} to reach {max_count}",
                ids.len()
            );

            for i in 0..deficit {
                let source_id = *ids
                    .choose(rng)
                    .ok_or_else(|| EdaError::internal(format!("label '{label}' has no records")))?;
                let source = dataset
                    .get(source_id)
                    .ok_or_else(|| EdaError::internal(format!("record '{source_id}' vanished")))?;

                let text = self
                    .eda
                    .augment(&source.claim_text, lexicon, rng)
                    .into_iter()
                    .nth(i % VARIANT_COUNT)
                    .ok_or_else(|| {
                        EdaError::internal(format!("eda returned too few variants for '{source_id}'"))
                    })?;

                let id = synthetic_id(source_id, i);
                debug!("{id}: {text}");
                synthetic.insert(id, source.derive(text));
            }
        }

        Ok(synthetic)
    }

    /// `dataset` plus its synthetic records.
    pub fn balance(
        &self,
        dataset: &ClaimDataset,
        lexicon: &dyn Lexicon,
        rng: &mut dyn RngCore,
    ) -> Result<ClaimDataset> {
        let synthetic = self.synthesize(dataset, lexicon, rng)?;
        Ok(DatasetBuilder::new()
            .extend(dataset)
            .extend_records(synthetic)
            .build())
    }
}
