// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Table-driven classification rules.
//!
//! A grammar is an ordered list of [`Rule`]s. Each rule pairs a regex prefilter with an
//! extractor and the [`ActionKind`] it yields; the first rule whose pattern matches and whose
//! extractor accepts the statement wins. Verb tables map method names to kinds so new verbs
//! are data, not control flow.

use regex::{Captures, Regex};
use smol_str::SmolStr;
use tracing::trace;

use super::chain::{parse_chain, CallChain};
use super::normalize::{normalize, Statement};
use crate::model::{ActionKind, Classification, ClassifiedStatement, Framework, SourceLine};

/// Minimum fuzzy ratio for suggesting a known verb in place of an unknown one.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Verb → kind lookup: exact names first, then name prefixes, both in declaration order.
#[derive(Debug)]
pub(crate) struct VerbTable {
    pub(crate) exact: &'static [(&'static str, ActionKind)],
    pub(crate) prefixes: &'static [(&'static str, ActionKind)],
}

impl VerbTable {
    pub(crate) fn lookup(&self, verb: &str) -> Option<ActionKind> {
        self.exact
            .iter()
            .find(|(name, _)| *name == verb)
            .or_else(|| self.prefixes.iter().find(|(prefix, _)| verb.starts_with(prefix)))
            .map(|&(_, kind)| kind)
    }

    /// Closest exact verb to `verb`, if any is similar enough.
    pub(crate) fn suggest(&self, verb: &str) -> Option<&'static str> {
        let mut best: Option<(&'static str, f64)> = None;
        for &(candidate, _) in self.exact {
            let ratio = rapidfuzz::fuzz::ratio(verb.chars(), candidate.chars());
            if ratio < SUGGESTION_THRESHOLD {
                continue;
            }
            if best.map_or(true, |(_, best_ratio)| ratio > best_ratio) {
                best = Some((candidate, ratio));
            }
        }
        best.map(|(candidate, _)| candidate)
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum RuleKind {
    Fixed(ActionKind),
    /// Kind comes from the extracted verb; unknown verbs make the rule fall through.
    Verbs(&'static VerbTable),
}

/// What a rule's extractor pulled out of a statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Extraction {
    pub(crate) verb: SmolStr,
    pub(crate) actor_hint: Option<String>,
    pub(crate) target_hint: Option<String>,
    pub(crate) argument: Option<String>,
    pub(crate) value: Option<String>,
}

impl Extraction {
    pub(crate) fn new(verb: impl Into<SmolStr>) -> Self {
        Self {
            verb: verb.into(),
            ..Self::default()
        }
    }

    fn into_statement(
        self,
        kind: ActionKind,
        line: SourceLine<'_>,
        rule: &'static str,
    ) -> ClassifiedStatement {
        ClassifiedStatement::new(kind, line, rule, self.verb)
            .with_actor_hint(self.actor_hint)
            .with_target_hint(self.target_hint)
            .with_argument(self.argument)
            .with_value(self.value)
    }
}

/// Everything an extractor may look at.
pub(crate) struct RuleInput<'c, 'a> {
    pub(crate) statement: Statement<'a>,
    pub(crate) captures: Captures<'a>,
    pub(crate) chain: Option<&'c CallChain<'a>>,
}

pub(crate) type Extractor = fn(&RuleInput<'_, '_>) -> Option<Extraction>;

pub(crate) struct Rule {
    name: &'static str,
    pattern: Regex,
    kind: RuleKind,
    extract: Extractor,
}

impl Rule {
    /// Builds a rule from a static pattern; the patterns are part of the crate, so a pattern
    /// that does not compile is a programming error.
    pub(crate) fn new(
        name: &'static str,
        pattern: &str,
        kind: RuleKind,
        extract: Extractor,
    ) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|err| panic!("rule {name}: invalid pattern: {err}"));
        Self {
            name,
            pattern,
            kind,
            extract,
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        self.name
    }
}

/// The ordered rules of one framework plus its verb table.
pub(crate) struct RuleSet {
    framework: Framework,
    rules: Vec<Rule>,
    verbs: &'static VerbTable,
}

impl RuleSet {
    pub(crate) fn new(framework: Framework, rules: Vec<Rule>, verbs: &'static VerbTable) -> Self {
        Self {
            framework,
            rules,
            verbs,
        }
    }

    pub(crate) fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub(crate) fn verbs(&self) -> &'static VerbTable {
        self.verbs
    }

    /// Classifies `line`, whose comment-free code is `code`.
    pub(crate) fn classify(&self, line: SourceLine<'_>, code: &str) -> Classification {
        let Some(statement) = normalize(code) else {
            return Classification::Noise;
        };
        let chain = parse_chain(statement.body);

        for rule in &self.rules {
            let Some(captures) = rule.pattern.captures(statement.body) else {
                continue;
            };
            let input = RuleInput {
                statement,
                captures,
                chain: chain.as_ref(),
            };
            let Some(extraction) = (rule.extract)(&input) else {
                continue;
            };
            let kind = match rule.kind {
                RuleKind::Fixed(kind) => kind,
                RuleKind::Verbs(table) => match table.lookup(&extraction.verb) {
                    Some(kind) => kind,
                    None => continue,
                },
            };

            trace!(
                framework = %self.framework,
                rule = rule.name,
                line_no = line.line_no(),
                %kind,
                "classified statement"
            );
            return Classification::Statement(extraction.into_statement(kind, line, rule.name));
        }

        Classification::Noise
    }
}
