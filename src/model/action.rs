// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::ids::ParticipantId;
use super::source::SourceLine;

/// Category of a recognized test step.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Navigate,
    Click,
    Fill,
    Select,
    Check,
    Hover,
    Press,
    Upload,
    Assert,
    Wait,
    Request,
    Screenshot,
    Note,
    /// Recognized as a step, but the verb has no specific category.
    Custom,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Navigate => "navigate",
            Self::Click => "click",
            Self::Fill => "fill",
            Self::Select => "select",
            Self::Check => "check",
            Self::Hover => "hover",
            Self::Press => "press",
            Self::Upload => "upload",
            Self::Assert => "assert",
            Self::Wait => "wait",
            Self::Request => "request",
            Self::Screenshot => "screenshot",
            Self::Note => "note",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One source line recognized as a test step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedStatement {
    kind: ActionKind,
    line_index: usize,
    raw_line: String,
    rule: &'static str,
    verb: SmolStr,
    actor_hint: Option<String>,
    target_hint: Option<String>,
    argument: Option<String>,
    value: Option<String>,
}

impl ClassifiedStatement {
    pub fn new(
        kind: ActionKind,
        line: SourceLine<'_>,
        rule: &'static str,
        verb: impl Into<SmolStr>,
    ) -> Self {
        Self {
            kind,
            line_index: line.index(),
            raw_line: line.text().to_owned(),
            rule,
            verb: verb.into(),
            actor_hint: None,
            target_hint: None,
            argument: None,
            value: None,
        }
    }

    pub fn with_actor_hint(mut self, actor_hint: Option<String>) -> Self {
        self.actor_hint = actor_hint.filter(|hint| !hint.trim().is_empty());
        self
    }

    pub fn with_target_hint(mut self, target_hint: Option<String>) -> Self {
        self.target_hint = target_hint.filter(|hint| !hint.trim().is_empty());
        self
    }

    pub fn with_argument(mut self, argument: Option<String>) -> Self {
        self.argument = argument;
        self
    }

    pub fn with_value(mut self, value: Option<String>) -> Self {
        self.value = value;
        self
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn line_index(&self) -> usize {
        self.line_index
    }

    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    /// Name of the classifier rule that produced this statement.
    pub fn rule(&self) -> &'static str {
        self.rule
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    pub fn actor_hint(&self) -> Option<&str> {
        self.actor_hint.as_deref()
    }

    pub fn target_hint(&self) -> Option<&str> {
        self.target_hint.as_deref()
    }

    /// Primary operand: URL, selector or free text.
    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    /// Secondary operand: typed value, pressed key, selected option or expected value.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Outcome of classifying a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Statement(ClassifiedStatement),
    Noise,
}

impl Classification {
    pub fn into_statement(self) -> Option<ClassifiedStatement> {
        match self {
            Self::Statement(statement) => Some(statement),
            Self::Noise => None,
        }
    }

    pub fn is_noise(&self) -> bool {
        matches!(self, Self::Noise)
    }
}

/// One rendered interaction of the diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct DiagramAction {
    #[schemars(with = "String")]
    from: ParticipantId,
    #[schemars(with = "String")]
    to: ParticipantId,
    label: String,
    kind: ActionKind,
    sequence_index: usize,
    line_index: usize,
}

impl DiagramAction {
    pub fn new(
        from: ParticipantId,
        to: ParticipantId,
        label: impl Into<String>,
        kind: ActionKind,
        sequence_index: usize,
        line_index: usize,
    ) -> Self {
        Self {
            from,
            to,
            label: label.into(),
            kind,
            sequence_index,
            line_index,
        }
    }

    pub fn from(&self) -> &ParticipantId {
        &self.from
    }

    pub fn to(&self) -> &ParticipantId {
        &self.to
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Position in the emitted diagram; independent of the source line.
    pub fn sequence_index(&self) -> usize {
        self.sequence_index
    }

    pub fn line_index(&self) -> usize {
        self.line_index
    }
}
