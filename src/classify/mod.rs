// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Statement Classifier.
//!
//! Each line is matched against the ordered rule table of the selected [`Framework`]; the
//! first rule that matches produces a [`ClassifiedStatement`], and lines no rule accepts are
//! [`Classification::Noise`]. Matching is all-or-nothing per rule.

mod chain;
mod codecept;
pub mod control;
mod normalize;
mod operand;
mod playwright;
mod rules;


use std::sync::OnceLock;

pub use control::{ControlEvent, ControlEvents, ControlScanner};
pub(crate) use normalize::CommentFilter;

use crate::model::{Classification, Framework, SourceLine};
use rules::RuleSet;

/// Read-only rule tables, built once per process.
fn rule_set(framework: Framework) -> &'static RuleSet {
    static PLAYWRIGHT: OnceLock<RuleSet> = OnceLock::new();
    static CODECEPT: OnceLock<RuleSet> = OnceLock::new();
    match framework {
        Framework::Playwright => PLAYWRIGHT.get_or_init(playwright::rule_set),
        Framework::CodeceptJs => CODECEPT.get_or_init(codecept::rule_set),
    }
}

/// Classifies one line under `framework`, on its own.
///
/// A block comment opened on an earlier line is not seen here; [`crate::compile()`] carries
/// that state across the whole source.
pub fn classify(line: SourceLine<'_>, framework: Framework) -> Classification {
    let code = CommentFilter::new().strip(line.text());
    classify_code(line, &code, framework)
}

pub(crate) fn classify_code(
    line: SourceLine<'_>,
    code: &str,
    framework: Framework,
) -> Classification {
    rule_set(framework).classify(line, code)
}

/// Names of the rules of `framework`, in priority order.
pub fn rule_names(framework: Framework) -> Vec<&'static str> {
    rule_set(framework).rules().iter().map(|rule| rule.name()).collect()
}

/// Closest known verb of `framework` to an unrecognized `verb`.
pub fn suggest_verb(framework: Framework, verb: &str) -> Option<&'static str> {
    rule_set(framework).verbs().suggest(verb)
}
