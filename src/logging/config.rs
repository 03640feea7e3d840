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

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Configuration for [`EdaLogger`](super::EdaLogger).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level: `DEBUG`, `INFO`, `WARNING`, `ERROR` or `OFF`.
    pub default_level: String,
    /// Emit one JSON object per line instead of plain text.
    pub json_format_console: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            default_level: "INFO".to_string(),
            json_format_console: false,
        }
    }
}

/// Overrides `default_level`.
pub const LEVEL_ENV: &str = "CLAIM_EDA_LOG";
/// `1`, `true` or `yes` switches the console to JSON lines.
pub const JSON_ENV: &str = "CLAIM_EDA_LOG_JSON";

impl LogConfig {
    /// Defaults adjusted by [`LEVEL_ENV`] and [`JSON_ENV`].
    pub fn from_env() -> Self {
        Self::default().with_overrides(std::env::var(LEVEL_ENV).ok(), std::env::var(JSON_ENV).ok())
    }

    pub fn with_overrides(mut self, level: Option<String>, json: Option<String>) -> Self {
        if let Some(level) = level.filter(|level| !level.trim().is_empty()) {
            self.default_level = level.trim().to_string();
        }
        if let Some(json) = json {
            self.json_format_console =
                matches!(json.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        self
    }

    /// Parsed `default_level`; unknown names fall back to `INFO`.
    pub fn level_filter(&self) -> LevelFilter {
        match self.default_level.to_ascii_uppercase().as_str() {
            "TRACE" => LevelFilter::Trace,
            "DEBUG" => LevelFilter::Debug,
            "WARN" | "WARNING" => LevelFilter::Warn,
            "ERROR" => LevelFilter::Error,
            "OFF" => LevelFilter::Off,
            _ => LevelFilter::Info,
        }
    }
}
