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

use chrono::{DateTime, SecondsFormat, Utc};
use log::Level;
use serde_json::json;

/// One rendered log event.
#[derive(Clone, Debug)]
pub struct LogLine {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl LogLine {
    pub fn from_record(record: &log::Record<'_>) -> Self {
        LogLine {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
            timestamp: Utc::now(),
        }
    }
}

pub struct JsonFormatter;

impl JsonFormatter {
    pub fn format(line: &LogLine) -> String {
        json!({
            "level": line.level.as_str(),
            "target": line.target,
            "message": line.message,
            "timestamp_ms": line.timestamp.timestamp_millis(),
        })
        .to_string()
    }
}

pub struct TextFormatter;

impl TextFormatter {
    pub fn format(line: &LogLine) -> String {
        format!(
            "{} {:<5} {}: {}",
            line.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            line.level.as_str(),
            line.target,
            line.message
        )
    }
}
