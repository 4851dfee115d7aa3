// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mermaid `sequenceDiagram` exporter.

mod ident;
mod label;
pub mod sequence;

pub use ident::{assign_aliases, mermaid_alias};
pub use label::{escape_text, sanitize_text};
pub use sequence::{emit, emit_sequence_diagram};
