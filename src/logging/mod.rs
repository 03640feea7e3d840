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

//! # Logging Module
//!
//! Backend for the `log` facade used across the crate. Records go to stderr,
//! either as plain text or as one JSON object per line, so that stdout only
//! carries the run summaries.
//!
//! ```rust
//! use claim_eda::logging::{EdaLogger, LogConfig};
//!
//! EdaLogger::init(LogConfig::default()).unwrap();
//! log::info!("ready");
//! ```

pub mod config;
pub mod formatters;

use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

pub use config::LogConfig;
pub use formatters::{JsonFormatter, LogLine, TextFormatter};

use crate::errors::{EdaError, Result};

/// `log::Log` implementation writing to stderr.
#[derive(Debug)]
pub struct EdaLogger {
    level: LevelFilter,
    json: bool,
}

impl EdaLogger {
    pub fn new(config: &LogConfig) -> Self {
        EdaLogger {
            level: config.level_filter(),
            json: config.json_format_console,
        }
    }

    /// Installs the logger globally. Fails if a logger is already set.
    pub fn init(config: LogConfig) -> Result<()> {
        let logger = EdaLogger::new(&config);
        let level = logger.level;
        log::set_boxed_logger(Box::new(logger))
            .map_err(|err| EdaError::internal(format!("logger already installed: {err}")))?;
        log::set_max_level(level);
        Ok(())
    }

    pub fn render(&self, line: &LogLine) -> String {
        if self.json {
            JsonFormatter::format(line)
        } else {
            TextFormatter::format(line)
        }
    }
}

impl Log for EdaLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let rendered = self.render(&LogLine::from_record(record));
        let _ = writeln!(std::io::stderr().lock(), "{rendered}");
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
