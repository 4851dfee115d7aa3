// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::Serialize;

use super::ids::{IdError, ParticipantId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantRole {
    /// Drawn as a stick figure (the human tester).
    Actor,
    Participant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Participant {
    #[schemars(with = "String")]
    id: ParticipantId,
    display_name: String,
    first_seen_index: usize,
    role: ParticipantRole,
}

impl Participant {
    pub fn id(&self) -> &ParticipantId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Registry size at the moment this participant was first mentioned.
    pub fn first_seen_index(&self) -> usize {
        self.first_seen_index
    }

    pub fn role(&self) -> ParticipantRole {
        self.role
    }
}

/// Participants of one compilation, in order of first mention.
///
/// The registry only grows: entries are never removed, renamed or reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantRegistry {
    participants: Vec<Participant>,
    by_id: BTreeMap<ParticipantId, usize>,
}

impl ParticipantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `name`, registering a new participant on first mention.
    ///
    /// Lookup is case-insensitive; the first spelling seen becomes the display name.
    pub fn ensure(&mut self, name: &str, role: ParticipantRole) -> Result<ParticipantId, IdError> {
        let id = ParticipantId::new(name)?;
        if self.by_id.contains_key(&id) {
            return Ok(id);
        }

        let first_seen_index = self.participants.len();
        self.by_id.insert(id.clone(), first_seen_index);
        self.participants.push(Participant {
            id: id.clone(),
            display_name: name.trim().to_owned(),
            first_seen_index,
            role,
        });
        Ok(id)
    }

    pub fn get(&self, id: &ParticipantId) -> Option<&Participant> {
        self.by_id.get(id).map(|&idx| &self.participants[idx])
    }

    pub fn contains(&self, id: &ParticipantId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn as_slice(&self) -> &[Participant] {
        &self.participants
    }

    pub fn into_vec(self) -> Vec<Participant> {
        self.participants
    }
}
