// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Loop,
    /// `if` / `else if` / `else`; exported as `opt` with one section and `alt` otherwise.
    Conditional,
}

/// A contiguous run of actions inside a fragment, `start..end` by sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct BlockSection {
    header: Option<String>,
    start: usize,
    end: usize,
    blocks: Vec<DiagramBlock>,
}

impl BlockSection {
    pub fn new(header: Option<String>, start: usize) -> Self {
        Self {
            header,
            start,
            end: start,
            blocks: Vec::new(),
        }
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Fragments nested directly inside this section, in order.
    pub fn blocks(&self) -> &[DiagramBlock] {
        &self.blocks
    }

    pub(crate) fn close(&mut self, end: usize) {
        self.end = end.max(self.start);
    }

    pub(crate) fn push_block(&mut self, block: DiagramBlock) {
        self.blocks.push(block);
    }
}

/// A `loop` / `opt` / `alt` fragment over a range of actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct DiagramBlock {
    kind: BlockKind,
    sections: Vec<BlockSection>,
}

impl DiagramBlock {
    pub fn new(kind: BlockKind, sections: Vec<BlockSection>) -> Self {
        Self { kind, sections }
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn sections(&self) -> &[BlockSection] {
        &self.sections
    }

    pub fn start(&self) -> usize {
        self.sections.first().map_or(0, BlockSection::start)
    }

    pub fn end(&self) -> usize {
        self.sections.last().map_or(0, BlockSection::end)
    }

    pub fn is_empty(&self) -> bool {
        self.start() == self.end()
    }

    pub fn keyword(&self) -> &'static str {
        match self.kind {
            BlockKind::Loop => "loop",
            BlockKind::Conditional if self.sections.len() > 1 => "alt",
            BlockKind::Conditional => "opt",
        }
    }
}

/// Drops fragments without actions and empty trailing `else` sections, recursively.
pub(crate) fn prune_blocks(blocks: &mut Vec<DiagramBlock>) {
    for block in blocks.iter_mut() {
        for section in &mut block.sections {
            prune_blocks(&mut section.blocks);
        }
        let mut idx = 0usize;
        block.sections.retain(|section| {
            let keep = idx == 0 || !section.is_empty();
            idx += 1;
            keep
        });
    }
    blocks.retain(|block| !block.is_empty());
}
