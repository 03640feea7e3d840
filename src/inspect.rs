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

//! Per-label record counts.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::ClaimDataset;

/// Record count per `claim_label`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelDistribution {
    pub total_count: usize,
    pub label_counts: BTreeMap<String, usize>,
}

impl LabelDistribution {
    pub fn from_dataset(dataset: &ClaimDataset) -> Self {
        let mut label_counts = BTreeMap::new();
        for record in dataset.values() {
            *label_counts.entry(record.claim_label.clone()).or_insert(0) += 1;
        }
        Self {
            total_count: dataset.len(),
            label_counts,
        }
    }

    pub fn count(&self, label: &str) -> usize {
        self.label_counts.get(label).copied().unwrap_or(0)
    }

    /// Size of the largest class, 0 for an empty dataset.
    pub fn max_count(&self) -> usize {
        self.label_counts.values().copied().max().unwrap_or(0)
    }

    /// Labels by descending count, ties broken by label.
    pub fn most_common(&self) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> = self
            .label_counts
            .iter()
            .map(|(label, count)| (label.clone(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }
}

impl fmt::Display for LabelDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .most_common()
            .iter()
            .map(|(label, count)| format!("'{label}': {count}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{body}}}")
    }
}
