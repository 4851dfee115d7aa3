// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_MAX_ACTIONS: usize = 200;
pub const DEFAULT_MAX_LABEL_LEN: usize = 60;
/// Shortest label limit that still leaves room for text before the `...` marker.
pub const MIN_LABEL_LEN: usize = 8;

/// Limits and output switches for one compilation.
///
/// The framework is not part of the config; it is passed explicitly on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct CompileConfig {
    max_actions: usize,
    max_label_len: usize,
    autonumber: bool,
    title: Option<String>,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            max_actions: DEFAULT_MAX_ACTIONS,
            max_label_len: DEFAULT_MAX_LABEL_LEN,
            autonumber: false,
            title: None,
        }
    }
}

impl CompileConfig {
    /// Parses a JSON object; missing keys keep their defaults.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.max_actions < 1 {
            return Err(ConfigError::TooSmall {
                field: "max_actions",
                min: 1,
                value: self.max_actions,
            });
        }
        if self.max_label_len < MIN_LABEL_LEN {
            return Err(ConfigError::TooSmall {
                field: "max_label_len",
                min: MIN_LABEL_LEN,
                value: self.max_label_len,
            });
        }
        Ok(self)
    }

    pub fn with_max_actions(mut self, max_actions: usize) -> Self {
        self.max_actions = max_actions.max(1);
        self
    }

    pub fn with_max_label_len(mut self, max_label_len: usize) -> Self {
        self.max_label_len = max_label_len.max(MIN_LABEL_LEN);
        self
    }

    pub fn with_autonumber(mut self, autonumber: bool) -> Self {
        self.autonumber = autonumber;
        self
    }

    pub fn with_title<T: Into<String>>(mut self, title: Option<T>) -> Self {
        self.title = title.map(Into::into);
        self
    }

    /// Maximum number of actions kept in the diagram; never below 1.
    pub fn max_actions(&self) -> usize {
        self.max_actions.max(1)
    }

    pub fn max_label_len(&self) -> usize {
        self.max_label_len.max(MIN_LABEL_LEN)
    }

    pub fn autonumber(&self) -> bool {
        self.autonumber
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|title| !title.trim().is_empty())
    }
}
