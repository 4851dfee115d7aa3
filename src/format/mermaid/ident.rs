// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Participant aliases that Mermaid accepts as bare identifiers.

use std::collections::BTreeSet;

use crate::model::{Participant, ParticipantId};

/// Words the sequence grammar reserves; an alias equal to one of them (ignoring case) is prefixed.
const RESERVED: &[&str] = &[
    "activate",
    "actor",
    "alt",
    "and",
    "as",
    "autonumber",
    "box",
    "break",
    "create",
    "critical",
    "deactivate",
    "destroy",
    "else",
    "end",
    "left",
    "link",
    "links",
    "loop",
    "note",
    "of",
    "opt",
    "over",
    "par",
    "participant",
    "rect",
    "right",
    "sequencediagram",
    "title",
];

const PREFIX: &str = "p_";

/// Maps an id onto `[A-Za-z0-9_]+`, avoiding digit-leading and reserved aliases.
pub fn mermaid_alias(id: &ParticipantId) -> String {
    let mut alias = id
        .as_str()
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || ch == '_' { ch } else { '_' })
        .collect::<String>();

    let starts_with_digit = alias.chars().next().map_or(true, |ch| ch.is_ascii_digit());
    if starts_with_digit || RESERVED.iter().any(|word| word.eq_ignore_ascii_case(&alias)) {
        alias.insert_str(0, PREFIX);
    }
    alias
}

/// One alias per participant, in registry order; later collisions get `_2`, `_3`, ... suffixes.
pub fn assign_aliases(participants: &[Participant]) -> Vec<String> {
    let mut taken = BTreeSet::<String>::new();
    let mut aliases = Vec::with_capacity(participants.len());
    for participant in participants {
        let base = mermaid_alias(participant.id());
        let mut alias = base.clone();
        let mut suffix = 2usize;
        while taken.contains(&alias) {
            alias = format!("{base}_{suffix}");
            suffix += 1;
        }
        taken.insert(alias.clone());
        aliases.push(alias);
    }
    aliases
}
