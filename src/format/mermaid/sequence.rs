// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram Emitter for Mermaid `sequenceDiagram` text.
//!
//! Output is a pure function of its inputs: participants in registry order, then one line per
//! action in `sequence_index` order, with fragment keywords scheduled before and after the
//! actions they enclose.

use std::collections::BTreeMap;

use super::ident::{assign_aliases, mermaid_alias};
use super::label::sanitize_text;
use crate::config::CompileConfig;
use crate::model::{
    ActionKind, BlockSection, DiagramAction, DiagramBlock, Participant, ParticipantId,
    ParticipantRole,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// `from<arrow>to: label`
    Message(&'static str),
    /// `from<arrow>from: label`
    SelfMessage(&'static str),
    /// `Note over from,to: label`
    NoteSpan,
    /// `Note over from: label`
    NoteOver,
}

const GENERIC: Shape = Shape::Message("->>");

/// Kinds missing here render as [`GENERIC`].
const RENDER_RULES: &[(ActionKind, Shape)] = &[
    (ActionKind::Navigate, Shape::Message("->>")),
    (ActionKind::Click, Shape::Message("->>")),
    (ActionKind::Fill, Shape::Message("->>")),
    (ActionKind::Select, Shape::Message("->>")),
    (ActionKind::Check, Shape::Message("->>")),
    (ActionKind::Hover, Shape::Message("->>")),
    (ActionKind::Upload, Shape::Message("->>")),
    (ActionKind::Request, Shape::Message("->>")),
    (ActionKind::Press, Shape::Message("-)")),
    (ActionKind::Wait, Shape::SelfMessage("->>")),
    (ActionKind::Screenshot, Shape::SelfMessage("-)")),
    (ActionKind::Assert, Shape::NoteSpan),
    (ActionKind::Note, Shape::NoteOver),
];

fn shape_for(kind: ActionKind) -> Shape {
    RENDER_RULES
        .iter()
        .find(|(rule_kind, _)| *rule_kind == kind)
        .map_or(GENERIC, |(_, shape)| *shape)
}

#[derive(Debug, Clone, Copy)]
enum ExportEvent<'a> {
    BlockOpen {
        block: &'a DiagramBlock,
        depth: usize,
    },
    SectionSplit {
        section: &'a BlockSection,
        depth: usize,
    },
    BlockClose {
        depth: usize,
    },
}

/// Outer fragments open first; at one depth a block opens before its own `else` lines.
fn export_event_sort_key_before(event: &ExportEvent<'_>) -> (usize, u8) {
    match *event {
        ExportEvent::BlockOpen { depth, .. } => (depth, 0),
        ExportEvent::SectionSplit { depth, .. } => (depth, 1),
        ExportEvent::BlockClose { depth } => (depth, 2),
    }
}

fn export_schedule_block<'a>(
    block: &'a DiagramBlock,
    depth: usize,
    before: &mut [Vec<ExportEvent<'a>>],
    after: &mut [Vec<ExportEvent<'a>>],
) {
    let count = before.len();
    if block.is_empty() || block.start() >= count {
        return;
    }
    before[block.start()].push(ExportEvent::BlockOpen { block, depth });

    for (idx, section) in block.sections().iter().enumerate() {
        if idx > 0 && section.start() < count {
            before[section.start()].push(ExportEvent::SectionSplit { section, depth });
        }
        for nested in section.blocks() {
            export_schedule_block(nested, depth + 1, before, after);
        }
    }

    let last = block.end().min(count) - 1;
    after[last].push(ExportEvent::BlockClose { depth });
}

fn push_keyword_line(out: &mut String, keyword: &str, header: Option<&str>, max_len: usize) {
    out.push_str(keyword);
    if let Some(header) = header.map(|h| sanitize_text(h, max_len)) {
        if !header.is_empty() {
            out.push(' ');
            out.push_str(&header);
        }
    }
    out.push('\n');
}

/// Emits actions and participants with default settings and no fragments.
pub fn emit(actions: &[DiagramAction], participants: &[Participant]) -> String {
    emit_sequence_diagram(actions, participants, &[], &CompileConfig::default())
}

pub fn emit_sequence_diagram(
    actions: &[DiagramAction],
    participants: &[Participant],
    blocks: &[DiagramBlock],
    config: &CompileConfig,
) -> String {
    let max_len = config.max_label_len();
    let mut out = String::new();
    out.push_str("sequenceDiagram\n");

    if let Some(title) = config.title() {
        push_keyword_line(&mut out, "title", Some(title), max_len);
    }
    if config.autonumber() {
        out.push_str("autonumber\n");
    }

    let aliases = assign_aliases(participants);
    let mut alias_by_id = BTreeMap::<&ParticipantId, &str>::new();
    for (participant, alias) in participants.iter().zip(&aliases) {
        alias_by_id.insert(participant.id(), alias);

        out.push_str(match participant.role() {
            ParticipantRole::Actor => "actor ",
            ParticipantRole::Participant => "participant ",
        });
        out.push_str(alias);
        let display = sanitize_text(participant.display_name(), max_len);
        if display != *alias {
            out.push_str(" as ");
            out.push_str(&display);
        }
        out.push('\n');
    }
    let alias_of = |id: &ParticipantId| -> String {
        alias_by_id
            .get(id)
            .map_or_else(|| mermaid_alias(id), |alias| (*alias).to_owned())
    };

    let mut ordered = actions.iter().collect::<Vec<_>>();
    ordered.sort_by_key(|action| action.sequence_index());

    let mut before = vec![Vec::<ExportEvent<'_>>::new(); ordered.len()];
    let mut after = vec![Vec::<ExportEvent<'_>>::new(); ordered.len()];
    for block in blocks {
        export_schedule_block(block, 0, &mut before, &mut after);
    }

    for (idx, action) in ordered.into_iter().enumerate() {
        let mut before_events = std::mem::take(&mut before[idx]);
        before_events.sort_by_key(export_event_sort_key_before);
        for event in before_events {
            match event {
                ExportEvent::BlockOpen { block, .. } => {
                    let header = block.sections().first().and_then(BlockSection::header);
                    push_keyword_line(&mut out, block.keyword(), header, max_len);
                }
                ExportEvent::SectionSplit { section, .. } => {
                    push_keyword_line(&mut out, "else", section.header(), max_len);
                }
                ExportEvent::BlockClose { .. } => {}
            }
        }

        let from = alias_of(action.from());
        let to = alias_of(action.to());
        let label = sanitize_text(action.label(), max_len);
        match shape_for(action.kind()) {
            Shape::Message(arrow) => {
                out.push_str(&format!("{from}{arrow}{to}: {label}\n"));
            }
            Shape::SelfMessage(arrow) => {
                out.push_str(&format!("{from}{arrow}{from}: {label}\n"));
            }
            Shape::NoteSpan if from != to => {
                out.push_str(&format!("Note over {from},{to}: {label}\n"));
            }
            Shape::NoteSpan | Shape::NoteOver => {
                out.push_str(&format!("Note over {from}: {label}\n"));
            }
        }

        let mut after_events = std::mem::take(&mut after[idx]);
        after_events.sort_by_key(|event| match *event {
            ExportEvent::BlockOpen { depth, .. }
            | ExportEvent::SectionSplit { depth, .. }
            | ExportEvent::BlockClose { depth } => std::cmp::Reverse(depth),
        });
        for event in after_events {
            if let ExportEvent::BlockClose { .. } = event {
                out.push_str("end\n");
            }
        }
    }

    out
}
