// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Action Model Builder.
//!
//! Turns classified statements into numbered [`DiagramAction`]s, registering participants
//! through the [`ActorResolver`] and tracking `loop` / `opt` / `alt` fragments as
//! [`ControlEvent`]s arrive between statements.

use tracing::{debug, trace};

use crate::classify::{suggest_verb, ControlEvent};
use crate::config::CompileConfig;
use crate::error::CompileWarning;
use crate::model::{
    prune_blocks, ActionKind, BlockKind, BlockSection, ClassifiedStatement, DiagramAction,
    DiagramBlock, Framework, Participant, ParticipantRegistry,
};
use crate::resolve::ActorResolver;

/// What the builder hands to the emitter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionModel {
    pub actions: Vec<DiagramAction>,
    pub participants: Vec<Participant>,
    pub blocks: Vec<DiagramBlock>,
    pub warnings: Vec<CompileWarning>,
}

#[derive(Debug)]
struct OpenBlock {
    kind: BlockKind,
    sections: Vec<BlockSection>,
}

#[derive(Debug)]
pub struct ActionModelBuilder {
    framework: Framework,
    resolver: ActorResolver,
    max_actions: usize,
    registry: ParticipantRegistry,
    actions: Vec<DiagramAction>,
    warnings: Vec<CompileWarning>,
    dropped: usize,
    blocks: Vec<DiagramBlock>,
    open: Vec<OpenBlock>,
}

impl ActionModelBuilder {
    pub fn new(framework: Framework, config: &CompileConfig) -> Self {
        Self {
            framework,
            resolver: ActorResolver::new(framework),
            max_actions: config.max_actions(),
            registry: ParticipantRegistry::new(),
            actions: Vec::new(),
            warnings: Vec::new(),
            dropped: 0,
            blocks: Vec::new(),
            open: Vec::new(),
        }
    }

    /// Appends one statement as the next action.
    ///
    /// Statements past `max_actions` are counted but neither resolved nor kept, so their
    /// participants never enter the registry.
    pub fn push_statement(&mut self, statement: &ClassifiedStatement) {
        if self.actions.len() >= self.max_actions {
            self.dropped += 1;
            return;
        }

        let (from, to) = match self.resolver.resolve(statement, &mut self.registry) {
            Ok(pair) => pair,
            Err(reason) => {
                self.warnings.push(CompileWarning::UnresolvedActor {
                    line_no: statement.line_index() + 1,
                    reason,
                });
                return;
            }
        };

        if statement.kind() == ActionKind::Custom {
            self.warnings.push(CompileWarning::CustomAction {
                line_no: statement.line_index() + 1,
                verb: statement.verb().to_owned(),
                framework: self.framework,
                suggestion: suggest_verb(self.framework, statement.verb()),
            });
        }

        let sequence_index = self.actions.len();
        let label = compose_label(statement);
        trace!(sequence_index, kind = %statement.kind(), %label, "action");
        self.actions.push(DiagramAction::new(
            from,
            to,
            label,
            statement.kind(),
            sequence_index,
            statement.line_index(),
        ));
    }

    pub fn apply_control(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::Open { kind, header } => self.open_block(kind, header),
            ControlEvent::Else { header } => self.split_block(header),
            ControlEvent::Close => self.close_block(),
        }
    }

    pub fn open_block(&mut self, kind: BlockKind, header: Option<String>) {
        self.open.push(OpenBlock {
            kind,
            sections: vec![BlockSection::new(header, self.actions.len())],
        });
    }

    /// Starts the next section of the innermost open block. Ignored with no open block.
    pub fn split_block(&mut self, header: Option<String>) {
        let position = self.actions.len();
        if let Some(block) = self.open.last_mut() {
            if let Some(current) = block.sections.last_mut() {
                current.close(position);
            }
            block.sections.push(BlockSection::new(header, position));
        }
    }

    /// Closes the innermost open block. Ignored with no open block.
    pub fn close_block(&mut self) {
        let Some(mut block) = self.open.pop() else {
            return;
        };
        let position = self.actions.len();
        if let Some(current) = block.sections.last_mut() {
            current.close(position);
        }
        let closed = DiagramBlock::new(block.kind, block.sections);
        match self.open.last_mut().and_then(|parent| parent.sections.last_mut()) {
            Some(parent_section) => parent_section.push_block(closed),
            None => self.blocks.push(closed),
        }
    }

    pub fn finish(mut self) -> ActionModel {
        while !self.open.is_empty() {
            self.close_block();
        }
        prune_blocks(&mut self.blocks);

        if self.dropped > 0 {
            debug!(max_actions = self.max_actions, dropped = self.dropped, "truncated");
            self.warnings.push(CompileWarning::Truncated {
                max_actions: self.max_actions,
                dropped: self.dropped,
            });
        }

        ActionModel {
            actions: self.actions,
            participants: self.registry.into_vec(),
            blocks: self.blocks,
            warnings: self.warnings,
        }
    }
}

/// Builds the action model for statements already stripped of Noise, without fragments.
pub fn build<'s>(
    statements: impl IntoIterator<Item = &'s ClassifiedStatement>,
    framework: Framework,
    config: &CompileConfig,
) -> ActionModel {
    let mut builder = ActionModelBuilder::new(framework, config);
    for statement in statements {
        builder.push_statement(statement);
    }
    builder.finish()
}

/// Human-readable message text for one statement. Escaping happens in the emitter.
pub fn compose_label(statement: &ClassifiedStatement) -> String {
    let verb = statement.verb();
    let argument = statement.argument();
    let value = statement.value();

    match (statement.kind(), argument, value) {
        (ActionKind::Navigate, Some(url), _) => format!("navigate to {url}"),
        (ActionKind::Fill, Some(field), Some(text)) => format!("{verb} {field} with {text}"),
        (ActionKind::Select, Some(field), Some(option)) => format!("{verb} {option} in {field}"),
        (ActionKind::Press, Some(target), Some(key)) => format!("{verb} {key} on {target}"),
        (ActionKind::Upload, Some(field), Some(file)) => format!("{verb} {file} to {field}"),
        (ActionKind::Note, Some(text), _) => text.to_owned(),
        (ActionKind::Custom, argument, _) => format!("{verb}({})", argument.unwrap_or_default()),
        (_, argument, value) => {
            let mut label = verb.to_owned();
            for part in [argument, value].into_iter().flatten() {
                label.push(' ');
                label.push_str(part);
            }
            label
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{build, compose_label, ActionModelBuilder};
    use crate::classify::ControlEvent;
    use crate::config::CompileConfig;
    use crate::error::CompileWarning;
    use crate::model::{
        ActionKind, BlockKind, ClassifiedStatement, Framework, IdError, SourceLine,
    };

    fn statement(
        index: usize,
        kind: ActionKind,
        verb: &str,
        argument: Option<&str>,
    ) -> ClassifiedStatement {
        ClassifiedStatement::new(kind, SourceLine::new(index, "line"), "test", verb)
            .with_argument(argument.map(str::to_owned))
    }

    #[rstest]
    #[case::navigate(ActionKind::Navigate, "goto", Some("/login"), None, "navigate to /login")]
    #[case::navigate_without_url(ActionKind::Navigate, "reload", None, None, "reload")]
    #[case::click(ActionKind::Click, "click", Some("Submit"), None, "click Submit")]
    #[case::fill(ActionKind::Fill, "fill", Some("#email"), Some("a@b.c"), "fill #email with a@b.c")]
    #[case::select(ActionKind::Select, "selectOption", Some("#color"), Some("blue"), "selectOption blue in #color")]
    #[case::press_on(ActionKind::Press, "press", Some("#q"), Some("Enter"), "press Enter on #q")]
    #[case::press(ActionKind::Press, "press", Some("Enter"), None, "press Enter")]
    #[case::upload(ActionKind::Upload, "attachFile", Some("#avatar"), Some("me.png"), "attachFile me.png to #avatar")]
    #[case::assert(ActionKind::Assert, "toHaveText", Some("#title"), Some("Welcome"), "toHaveText #title Welcome")]
    #[case::request(ActionKind::Request, "GET", Some("/users"), None, "GET /users")]
    #[case::note(ActionKind::Note, "step", Some("Log in"), None, "Log in")]
    #[case::custom(ActionKind::Custom, "evaluate", Some("() => 1"), None, "evaluate(() => 1)")]
    #[case::custom_without_args(ActionKind::Custom, "grabTitle", None, None, "grabTitle()")]
    fn labels_read_as_sentences(
        #[case] kind: ActionKind,
        #[case] verb: &str,
        #[case] argument: Option<&str>,
        #[case] value: Option<&str>,
        #[case] expected: &str,
    ) {
        let statement = statement(0, kind, verb, argument).with_value(value.map(str::to_owned));
        assert_eq!(compose_label(&statement), expected);
    }

    #[test]
    fn sequence_indices_follow_output_position() {
        let statements = vec![
            statement(3, ActionKind::Navigate, "goto", Some("/")),
            statement(7, ActionKind::Click, "click", Some("#a")),
            statement(8, ActionKind::Click, "click", Some("#b")),
        ];
        let model = build(&statements, Framework::Playwright, &CompileConfig::default());

        let indices = model.actions.iter().map(|a| a.sequence_index()).collect::<Vec<_>>();
        assert_eq!(indices, vec![0, 1, 2]);
        let lines = model.actions.iter().map(|a| a.line_index()).collect::<Vec<_>>();
        assert_eq!(lines, vec![3, 7, 8]);
        assert!(model.warnings.is_empty());
    }

    #[test]
    fn custom_actions_are_kept_with_a_warning() {
        let statements = vec![statement(4, ActionKind::Custom, "clik", Some("#a"))];
        let model = build(&statements, Framework::CodeceptJs, &CompileConfig::default());

        assert_eq!(model.actions.len(), 1);
        assert_eq!(
            model.warnings,
            vec![CompileWarning::CustomAction {
                line_no: 5,
                verb: "clik".to_owned(),
                framework: Framework::CodeceptJs,
                suggestion: Some("click"),
            }]
        );
    }

    #[test]
    fn hand_built_statement_with_a_multiline_actor_is_skipped() {
        let statements = vec![
            statement(0, ActionKind::Click, "click", Some("#a"))
                .with_actor_hint(Some("admin\npage".to_owned())),
            statement(1, ActionKind::Click, "click", Some("#b")),
        ];
        let model = build(&statements, Framework::Playwright, &CompileConfig::default());

        assert_eq!(model.actions.len(), 1);
        assert_eq!(model.actions[0].line_index(), 1);
        assert_eq!(
            model.warnings,
            vec![CompileWarning::UnresolvedActor {
                line_no: 1,
                reason: IdError::ContainsLineBreak,
            }]
        );
    }

    #[test]
    fn truncation_drops_trailing_actions_and_their_participants() {
        let config = CompileConfig::default().with_max_actions(2);
        let statements = vec![
            statement(0, ActionKind::Click, "click", Some("#a")),
            statement(1, ActionKind::Click, "click", Some("#b")),
            statement(2, ActionKind::Request, "GET", Some("/x"))
                .with_target_hint(Some("api.example.com".to_owned())),
        ];
        let model = build(&statements, Framework::Playwright, &config);

        assert_eq!(model.actions.len(), 2);
        assert_eq!(model.participants.len(), 2);
        assert_eq!(
            model.warnings,
            vec![CompileWarning::Truncated {
                max_actions: 2,
                dropped: 1
            }]
        );
    }

    #[test]
    fn fragments_cover_the_actions_between_their_braces() {
        let mut builder = ActionModelBuilder::new(Framework::Playwright, &CompileConfig::default());
        builder.push_statement(&statement(0, ActionKind::Navigate, "goto", Some("/")));
        builder.apply_control(ControlEvent::Open {
            kind: BlockKind::Conditional,
            header: Some("loggedIn".to_owned()),
        });
        builder.push_statement(&statement(2, ActionKind::Click, "click", Some("Logout")));
        builder.apply_control(ControlEvent::Else { header: None });
        builder.push_statement(&statement(4, ActionKind::Click, "click", Some("Login")));
        builder.apply_control(ControlEvent::Open {
            kind: BlockKind::Loop,
            header: Some("const row of rows".to_owned()),
        });
        builder.push_statement(&statement(6, ActionKind::Click, "click", Some("row")));
        // Loop and conditional are both left open; finish closes them.
        let model = builder.finish();

        assert_eq!(model.blocks.len(), 1);
        let alt = &model.blocks[0];
        assert_eq!(alt.keyword(), "alt");
        let ranges = alt
            .sections()
            .iter()
            .map(|s| (s.header().map(str::to_owned), s.start(), s.end()))
            .collect::<Vec<_>>();
        assert_eq!(
            ranges,
            vec![(Some("loggedIn".to_owned()), 1, 2), (None, 2, 4)]
        );
        let nested = &alt.sections()[1].blocks()[0];
        assert_eq!(nested.keyword(), "loop");
        assert_eq!((nested.start(), nested.end()), (3, 4));
    }

    #[test]
    fn fragments_without_actions_are_dropped() {
        let mut builder = ActionModelBuilder::new(Framework::Playwright, &CompileConfig::default());
        builder.apply_control(ControlEvent::Open {
            kind: BlockKind::Loop,
            header: None,
        });
        builder.apply_control(ControlEvent::Close);
        builder.apply_control(ControlEvent::Close);
        builder.push_statement(&statement(0, ActionKind::Click, "click", Some("#a")));

        let model = builder.finish();
        assert!(model.blocks.is_empty());
        assert_eq!(model.actions.len(), 1);
    }
}
