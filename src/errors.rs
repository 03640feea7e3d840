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

//! # ClaimEDA Error Module
//!
//! This module defines the error type shared by every stage of the augmenter.
//!
//! ## Error Categories
//!
//! - **Io**: Filesystem errors while reading datasets or the lexical database
//! - **Serde**: JSON parse and write failures
//! - **Validation**: Out-of-range augmentation parameters
//! - **Lexicon**: Malformed lexical database files
//! - **Internal**: Unexpected internal failures
//!
//! Words without synonyms and short sentences are not errors; the operators
//! degrade to returning fewer changes instead.

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout ClaimEDA.
pub type Result<T> = std::result::Result<T, EdaError>;

/// Canonical error enumeration for ClaimEDA.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum EdaError {
    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapper for JSON serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Validation errors triggered by invalid parameters.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// The lexical database could not be parsed.
    #[error("lexicon error in '{source_name}': {message}")]
    Lexicon { source_name: String, message: String },

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for EdaError {
    fn from(err: io::Error) -> Self {
        EdaError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EdaError {
    fn from(err: serde_json::Error) -> Self {
        EdaError::Serde(err.to_string())
    }
}

impl EdaError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        EdaError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct lexicon parse errors.
    pub fn lexicon(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        EdaError::Lexicon {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        EdaError::Internal(message.into())
    }
}
