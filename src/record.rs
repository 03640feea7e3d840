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

//! # ClaimEDA Record Module
//!
//! Claim records and the datasets that hold them.
//!
//! A dataset is a mapping from claim id to [`ClaimRecord`]. Datasets are never
//! updated in place by the augmenter: [`DatasetBuilder`] folds existing
//! datasets and freshly generated records into a new mapping.
//!
//! ## Usage Example
//!
//! ```rust
//! use claim_eda::record::{ClaimRecord, DatasetBuilder};
//! use serde_json::json;
//!
//! let train = DatasetBuilder::new()
//!     .insert("claim-1", ClaimRecord::new("CO2 is rising", "SUPPORTS", vec![json!("evidence-9")]))
//!     .build();
//! let merged = DatasetBuilder::new().extend(&train).build();
//! assert_eq!(merged.len(), 1);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One labelled claim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Natural-language claim sentence.
    pub claim_text: String,

    /// Classification label, e.g. `SUPPORTS` or `NOT_ENOUGH_INFO`.
    pub claim_label: String,

    /// Evidence identifiers. Opaque to the augmenter and copied verbatim onto
    /// synthetic records.
    #[serde(default)]
    pub evidences: Vec<Value>,

    /// Any other fields present on the input record.
    ///
    /// Kept on originals so that the written dataset does not lose data the
    /// augmenter does not understand. Synthetic records leave this empty.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClaimRecord {
    /// Constructs a record with no extra fields.
    pub fn new(
        claim_text: impl Into<String>,
        claim_label: impl Into<String>,
        evidences: Vec<Value>,
    ) -> Self {
        ClaimRecord {
            claim_text: claim_text.into(),
            claim_label: claim_label.into(),
            evidences,
            extra: Map::new(),
        }
    }

    /// Builds a synthetic sibling of this record carrying `claim_text`.
    ///
    /// The label and evidences are copied from `self`; extra fields are not.
    pub fn derive(&self, claim_text: impl Into<String>) -> Self {
        ClaimRecord::new(claim_text, self.claim_label.clone(), self.evidences.clone())
    }
}

/// Mapping from claim id to record. Keys are kept sorted.
pub type ClaimDataset = BTreeMap<String, ClaimRecord>;

/// Id given to the `index`-th synthetic record generated from `source_id`.
pub fn synthetic_id(source_id: &str, index: usize) -> String {
    format!("{source_id}_aug{index}")
}

/// Folds datasets and records into a new [`ClaimDataset`].
///
/// Later insertions win on id collisions, so folding `train` then `dev` lets a
/// dev record replace a train record with the same id.
#[derive(Clone, Debug, Default)]
pub struct DatasetBuilder {
    records: ClaimDataset,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies every record of `dataset` into the builder.
    pub fn extend(mut self, dataset: &ClaimDataset) -> Self {
        self.records
            .extend(dataset.iter().map(|(id, record)| (id.clone(), record.clone())));
        self
    }

    /// Moves every `(id, record)` pair of `records` into the builder.
    pub fn extend_records<I>(mut self, records: I) -> Self
    where
        I: IntoIterator<Item = (String, ClaimRecord)>,
    {
        self.records.extend(records);
        self
    }

    pub fn insert(mut self, id: impl Into<String>, record: ClaimRecord) -> Self {
        self.records.insert(id.into(), record);
        self
    }

    pub fn build(self) -> ClaimDataset {
        self.records
    }
}
