// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use smol_str::SmolStr;
use thiserror::Error;

/// Identity of a diagram participant.
///
/// The id is the actor name trimmed and lower-cased, so `Page`, `page` and ` PAGE ` all name
/// the same participant. The original spelling lives on [`super::Participant`] as its display
/// name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticipantId {
    value: SmolStr,
}

impl ParticipantId {
    pub fn new(name: &str) -> Result<Self, IdError> {
        let trimmed = name.trim();
        validate_actor_name(trimmed)?;
        Ok(Self {
            value: SmolStr::new(trimmed.to_lowercase()),
        })
    }

    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ParticipantId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for ParticipantId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for ParticipantId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ParticipantId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("participant name must not be empty")]
    Empty,
    #[error("participant name must not contain line breaks")]
    ContainsLineBreak,
}

fn validate_actor_name(value: &str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty);
    }
    if value.contains(['\n', '\r']) {
        return Err(IdError::ContainsLineBreak);
    }
    Ok(())
}
