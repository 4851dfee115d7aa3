// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One line of test source and its 0-based position in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    index: usize,
    text: &'a str,
}

impl<'a> SourceLine<'a> {
    pub fn new(index: usize, text: &'a str) -> Self {
        Self { index, text }
    }

    /// Splits `source` into lines; `\n` and `\r\n` both terminate a line.
    pub fn split(source: &'a str) -> impl Iterator<Item = SourceLine<'a>> + 'a {
        source
            .lines()
            .enumerate()
            .map(|(index, text)| Self::new(index, text))
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based line number, for messages shown to people.
    pub fn line_no(&self) -> usize {
        self.index + 1
    }

    pub fn text(&self) -> &'a str {
        self.text
    }
}

/// Test framework whose statement grammar is recognized during one compilation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// Grammar A: `(await) <object>.<verb>(<args>)` statements.
    Playwright,
    /// Grammar B: `I.<verb>(<args>)` statements.
    CodeceptJs,
}

impl Framework {
    pub const ALL: [Framework; 2] = [Framework::Playwright, Framework::CodeceptJs];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Playwright => "playwright",
            Self::CodeceptJs => "codeceptjs",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown framework '{0}' (expected 'playwright' or 'codeceptjs')")]
pub struct ParseFrameworkError(String);

impl FromStr for Framework {
    type Err = ParseFrameworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "playwright" | "grammar-a" | "a" => Ok(Self::Playwright),
            "codeceptjs" | "codecept" | "grammar-b" | "b" => Ok(Self::CodeceptJs),
            _ => Err(ParseFrameworkError(s.to_owned())),
        }
    }
}
