// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Errors and warnings produced while compiling test source.
//!
//! None of these cross the public boundary as `Err`: the pipeline renders them into the
//! `errors` / `warnings` strings of [`crate::model::CompilationResult`].

use thiserror::Error;

use crate::model::{Framework, IdError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// No line of the input classified as a test step.
    #[error("no test steps could be parsed")]
    EmptyInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileWarning {
    #[error(
        "line {line_no}: '{verb}' is not a known {framework} step; rendered as a generic message{}",
        suggestion_suffix(.suggestion)
    )]
    CustomAction {
        line_no: usize,
        verb: String,
        framework: Framework,
        suggestion: Option<&'static str>,
    },

    #[error("diagram truncated to {max_actions} actions; {dropped} more actions were dropped")]
    Truncated { max_actions: usize, dropped: usize },

    /// Hints the classifier produces are always single-line, so only statements built by
    /// hand and passed to [`crate::build::build`] can carry a name that is not a valid id.
    #[error("line {line_no}: step skipped, actor could not be resolved ({reason})")]
    UnresolvedActor { line_no: usize, reason: IdError },
}

fn suggestion_suffix(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(verb) => format!(" (did you mean '{verb}'?)"),
        None => String::new(),
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid compile config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} must be at least {min}, got {value}")]
    TooSmall {
        field: &'static str,
        min: usize,
        value: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::{CompileError, CompileWarning};
    use crate::model::Framework;

    #[test]
    fn empty_input_message_is_user_facing() {
        assert_eq!(CompileError::EmptyInput.to_string(), "no test steps could be parsed");
    }

    #[test]
    fn custom_warning_mentions_suggestion_only_when_present() {
        let with = CompileWarning::CustomAction {
            line_no: 3,
            verb: "clik".to_owned(),
            framework: Framework::CodeceptJs,
            suggestion: Some("click"),
        };
        assert_eq!(
            with.to_string(),
            "line 3: 'clik' is not a known codeceptjs step; rendered as a generic message (did you mean 'click'?)"
        );

        let without = CompileWarning::CustomAction {
            line_no: 1,
            verb: "evaluate".to_owned(),
            framework: Framework::Playwright,
            suggestion: None,
        };
        assert!(without.to_string().ends_with("generic message"));
    }

    #[test]
    fn truncation_warning_counts_dropped_actions() {
        let warning = CompileWarning::Truncated {
            max_actions: 2,
            dropped: 5,
        };
        assert_eq!(
            warning.to_string(),
            "diagram truncated to 2 actions; 5 more actions were dropped"
        );
    }
}
