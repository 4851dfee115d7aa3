// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pipeline entry points: classify, resolve, build, emit.

use tracing::debug;

use crate::build::ActionModelBuilder;
use crate::classify::{classify_code, CommentFilter, ControlScanner};
use crate::config::CompileConfig;
use crate::error::CompileError;
use crate::format::mermaid::emit_sequence_diagram;
use crate::model::{CompilationResult, Framework, SourceLine};

/// Compiles `source` with [`CompileConfig::default`].
pub fn compile(source: &str, framework: Framework) -> CompilationResult {
    compile_with(source, framework, &CompileConfig::default())
}

/// Compiles test source written for `framework` into a sequence diagram.
///
/// Every call builds its own registry and action list; nothing is shared between calls
/// except the read-only rule tables. Failures come back inside the result, never as a panic.
pub fn compile_with(
    source: &str,
    framework: Framework,
    config: &CompileConfig,
) -> CompilationResult {
    let mut comments = CommentFilter::new();
    let mut scanner = ControlScanner::new();
    let mut builder = ActionModelBuilder::new(framework, config);
    let mut line_count = 0usize;
    let mut statement_count = 0usize;

    for line in SourceLine::split(source) {
        line_count += 1;
        let code = comments.strip(line.text());
        for event in scanner.observe(&code) {
            builder.apply_control(event);
        }
        if let Some(statement) = classify_code(line, &code, framework).into_statement() {
            statement_count += 1;
            builder.push_statement(&statement);
        }
    }
    for event in scanner.finish() {
        builder.apply_control(event);
    }

    let model = builder.finish();
    if model.actions.is_empty() {
        debug!(%framework, line_count, statement_count, "nothing to draw");
        return CompilationResult::failed(vec![CompileError::EmptyInput.to_string()]);
    }

    let diagram_text =
        emit_sequence_diagram(&model.actions, &model.participants, &model.blocks, config);
    debug!(
        %framework,
        line_count,
        statement_count,
        actions = model.actions.len(),
        participants = model.participants.len(),
        blocks = model.blocks.len(),
        warnings = model.warnings.len(),
        "compiled"
    );

    CompilationResult::new(
        model.actions,
        model.participants,
        model.blocks,
        diagram_text,
        model.warnings.iter().map(ToString::to_string).collect(),
    )
}
