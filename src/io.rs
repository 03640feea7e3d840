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

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::record::ClaimDataset;

/// Fixed locations of the inputs, the output and the lexical database.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetPaths {
    pub train: PathBuf,
    pub dev: PathBuf,
    pub output: PathBuf,
    pub wordnet_dir: PathBuf,
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self::under("data")
    }
}

impl DatasetPaths {
    /// The standard file names placed under `data_dir`.
    pub fn under(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        DatasetPaths {
            train: data_dir.join("train-claims.json"),
            dev: data_dir.join("dev-claims.json"),
            output: data_dir.join("dev-claims-augmented.json"),
            wordnet_dir: data_dir.join("wordnet"),
        }
    }
}

/// Loads a dataset: a JSON object mapping claim id to record.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<ClaimDataset> {
    let file = File::open(path)?;
    read_dataset(BufReader::new(file))
}

pub fn read_dataset<R: Read>(reader: R) -> Result<ClaimDataset> {
    Ok(serde_json::from_reader(reader)?)
}

/// Writes `dataset` as indented JSON, non-ASCII text kept verbatim.
pub fn write_dataset(path: impl AsRef<Path>, dataset: &ClaimDataset) -> Result<()> {
    let file = File::create(path)?;
    write_dataset_writer(BufWriter::new(file), dataset)
}

pub fn write_dataset_writer<W: Write>(mut writer: W, dataset: &ClaimDataset) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, dataset)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
