// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! testseq: Playwright and CodeceptJS test steps as Mermaid sequence diagrams.
//!
//! The pipeline is a pure function of `(source, framework, config)`:
//! [`classify`] turns lines into statements, [`resolve`] maps them to participants,
//! [`build`] numbers the actions and tracks fragments, and [`format::mermaid`] writes the
//! diagram text. [`compile()`] runs all of it and returns a [`CompilationResult`].

pub mod build;
pub mod classify;
pub mod compile;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod resolve;

pub use compile::{compile, compile_with};
pub use config::CompileConfig;
pub use model::{CompilationResult, Framework};
