// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Actor Resolver: maps a classified statement to its `from` / `to` participants.

use crate::model::{
    ClassifiedStatement, Framework, IdError, ParticipantId, ParticipantRegistry, ParticipantRole,
};

/// Default receiver of every interaction that does not name another system.
pub const SYSTEM_UNDER_TEST: &str = "System Under Test";
/// Default actor for Playwright-style statements.
pub const PAGE_ACTOR: &str = "Page";
/// Default actor for CodeceptJS-style statements.
pub const TESTER_ACTOR: &str = "Tester";

/// Resolves participants for one compilation run under a fixed framework.
#[derive(Debug, Clone, Copy)]
pub struct ActorResolver {
    framework: Framework,
}

impl ActorResolver {
    pub fn new(framework: Framework) -> Self {
        Self { framework }
    }

    /// The synthetic participant acting when a statement names no actor.
    pub fn default_actor(&self) -> (&'static str, ParticipantRole) {
        match self.framework {
            Framework::Playwright => (PAGE_ACTOR, ParticipantRole::Participant),
            Framework::CodeceptJs => (TESTER_ACTOR, ParticipantRole::Actor),
        }
    }

    fn is_default_alias(&self, hint: &str) -> bool {
        let (default_name, _) = self.default_actor();
        hint.trim().eq_ignore_ascii_case(default_name)
            || (self.framework == Framework::CodeceptJs && hint.trim() == "I")
    }

    /// Returns `(from, to)`, registering participants on first mention.
    ///
    /// The registry only grows; existing participants are reused by case-insensitive name.
    pub fn resolve(
        &self,
        statement: &ClassifiedStatement,
        registry: &mut ParticipantRegistry,
    ) -> Result<(ParticipantId, ParticipantId), IdError> {
        let from = match statement.actor_hint() {
            Some(hint) if !self.is_default_alias(hint) => {
                registry.ensure(hint, ParticipantRole::Participant)?
            }
            _ => {
                let (name, role) = self.default_actor();
                registry.ensure(name, role)?
            }
        };

        let to = registry.ensure(
            statement.target_hint().unwrap_or(SYSTEM_UNDER_TEST),
            ParticipantRole::Participant,
        )?;

        Ok((from, to))
    }
}
