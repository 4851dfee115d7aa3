// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::Serialize;

use super::action::DiagramAction;
use super::block::DiagramBlock;
use super::participant::Participant;

/// Everything one compilation produced. Built fresh per call and never shared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CompilationResult {
    actions: Vec<DiagramAction>,
    participants: Vec<Participant>,
    blocks: Vec<DiagramBlock>,
    diagram_text: String,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl CompilationResult {
    pub(crate) fn new(
        actions: Vec<DiagramAction>,
        participants: Vec<Participant>,
        blocks: Vec<DiagramBlock>,
        diagram_text: String,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            actions,
            participants,
            blocks,
            diagram_text,
            warnings,
            errors: Vec::new(),
        }
    }

    pub(crate) fn failed(errors: Vec<String>) -> Self {
        Self {
            errors,
            ..Self::default()
        }
    }

    pub fn actions(&self) -> &[DiagramAction] {
        &self.actions
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// `loop` / `opt` / `alt` fragments over `actions`, outermost first.
    pub fn blocks(&self) -> &[DiagramBlock] {
        &self.blocks
    }

    /// Mermaid `sequenceDiagram` source; empty when `errors` is non-empty.
    pub fn diagram_text(&self) -> &str {
        &self.diagram_text
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// JSON schema of [`CompilationResult::to_json`] output, for the UI layer.
    pub fn json_schema() -> serde_json::Value {
        schemars::schema_for!(CompilationResult).to_value()
    }
}

#[cfg(test)]
mod tests {
    use super::CompilationResult;

    #[test]
    fn failed_result_has_no_diagram() {
        let result = CompilationResult::failed(vec!["boom".to_owned()]);
        assert!(!result.is_ok());
        assert!(result.actions().is_empty());
        assert!(result.diagram_text().is_empty());
    }

    #[test]
    fn schema_describes_result_fields() {
        let schema = CompilationResult::json_schema();
        let properties = schema["properties"].as_object().expect("properties");
        for field in ["actions", "participants", "blocks", "diagram_text", "warnings", "errors"] {
            assert!(properties.contains_key(field), "missing {field}");
        }
    }

    #[test]
    fn json_uses_snake_case_field_names() {
        let json = CompilationResult::failed(vec!["e".to_owned()]).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["errors"][0], "e");
        assert_eq!(value["diagram_text"], "");
    }
}
