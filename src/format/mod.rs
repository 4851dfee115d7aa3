// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram text export.
//!
//! Only the Mermaid `sequenceDiagram` subset is produced; rendering stays with the caller.

pub mod mermaid;
