// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Data model shared by the pipeline stages.
//!
//! Source lines are classified into statements, statements resolve to participants and
//! become diagram actions, and a compilation run returns all of it as one result.

pub mod action;
pub mod block;
pub mod ids;
pub mod participant;
pub mod result;
pub mod source;

pub use action::{ActionKind, Classification, ClassifiedStatement, DiagramAction};
pub use block::{BlockKind, BlockSection, DiagramBlock};
pub(crate) use block::prune_blocks;
pub use ids::{IdError, ParticipantId};
pub use participant::{Participant, ParticipantRegistry, ParticipantRole};
pub use result::CompilationResult;
pub use source::{Framework, ParseFrameworkError, SourceLine};
