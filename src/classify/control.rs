// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Brace-depth tracking for `loop` / `opt` / `alt` fragments.
//!
//! Fragments are recognized from common JavaScript control flow written with the opening
//! brace on the same line: `for (…) {`, `while (…) {`, `items.forEach(… {`, `if (…) {`,
//! `} else if (…) {` and `} else {`. A fragment closes when the brace depth drops below the
//! depth it opened at, so closing braces of unrelated callbacks never close it early.
//!
//! A conditional closed by a bare `}` line stays pending until the next code line, which
//! continues it when it starts with `else {` or `else if (…) {`.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use smallvec::SmallVec;

use super::normalize::{is_comment, CodeChars};
use crate::model::BlockKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    Open {
        kind: BlockKind,
        header: Option<String>,
    },
    /// Starts the next section of the innermost conditional.
    Else { header: Option<String> },
    Close,
}

pub type ControlEvents = SmallVec<[ControlEvent; 2]>;

#[derive(Debug, Clone, Copy)]
struct OpenFragment {
    /// Brace depth inside the fragment body.
    depth: usize,
    kind: BlockKind,
}

#[derive(Debug, Default)]
pub struct ControlScanner {
    depth: usize,
    open: Vec<OpenFragment>,
    /// Conditional closed by a bare `}` on the previous code line.
    awaiting_else: Option<OpenFragment>,
}

struct Patterns {
    loop_header: Regex,
    for_each: Regex,
    if_header: Regex,
    else_header: Regex,
    leading_else: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        loop_header: Regex::new(r"^(?:for|while)\s*(?:await\s*)?\((.*)\)\s*\{")
            .expect("loop pattern compiles"),
        for_each: Regex::new(r"^(?:await\s+)?([\w$.]+?)\s*\.\s*forEach\s*\(")
            .expect("forEach pattern compiles"),
        if_header: Regex::new(r"^if\s*\((.*)\)\s*\{").expect("if pattern compiles"),
        else_header: Regex::new(r"^\}\s*else(?:\s+if\s*\((.*)\))?\s*\{")
            .expect("else pattern compiles"),
        leading_else: Regex::new(r"^else(?:\s+if\s*\((.*)\))?\s*\{")
            .expect("leading else pattern compiles"),
    })
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

fn else_section_header(captures: &Captures<'_>) -> Option<String> {
    captures
        .get(1)
        .and_then(|cond| non_empty(cond.as_str()))
        .map(|cond| format!("if {cond}"))
}

impl ControlScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, line: &str) -> ControlEvents {
        let mut events = ControlEvents::new();
        let trimmed = line.trim();
        if trimmed.is_empty() || is_comment(trimmed) {
            return events;
        }

        let before = self.depth;
        let mut depth = before;
        let mut lowest = before;
        for (_, ch) in CodeChars::new(trimmed) {
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth = depth.saturating_sub(1);
                    lowest = lowest.min(depth);
                }
                _ => {}
            }
        }
        self.depth = depth;

        let patterns = patterns();
        if let Some(closed) = self.awaiting_else.take() {
            match patterns.leading_else.captures(trimmed) {
                Some(captures) if lowest == before && depth == closed.depth => {
                    self.open.push(closed);
                    events.push(ControlEvent::Else {
                        header: else_section_header(&captures),
                    });
                    return events;
                }
                _ => events.push(ControlEvent::Close),
            }
        }

        if let Some(captures) = patterns.else_header.captures(trimmed) {
            let continues_conditional = matches!(
                self.open.last(),
                Some(top) if top.kind == BlockKind::Conditional && top.depth == before
            );
            if continues_conditional && lowest + 1 == before && depth == before {
                events.push(ControlEvent::Else {
                    header: else_section_header(&captures),
                });
                return events;
            }
        }

        while let Some(top) = self.open.last().copied().filter(|top| top.depth > lowest) {
            self.open.pop();
            if trimmed == "}" && top.kind == BlockKind::Conditional {
                self.awaiting_else = Some(top);
            } else {
                events.push(ControlEvent::Close);
            }
        }

        if depth > lowest {
            let opened = if let Some(captures) = patterns.loop_header.captures(trimmed) {
                Some((BlockKind::Loop, captures.get(1).and_then(|c| non_empty(c.as_str()))))
            } else if let Some(captures) = patterns.for_each.captures(trimmed) {
                let each = captures.get(1).map(|c| format!("each {}", c.as_str()));
                Some((BlockKind::Loop, each))
            } else {
                patterns.if_header.captures(trimmed).map(|captures| {
                    (BlockKind::Conditional, captures.get(1).and_then(|c| non_empty(c.as_str())))
                })
            };

            if let Some((kind, header)) = opened {
                self.open.push(OpenFragment { depth, kind });
                events.push(ControlEvent::Open { kind, header });
            }
        }

        events
    }

    /// Closes every fragment still open at end of input.
    pub fn finish(&mut self) -> ControlEvents {
        let mut events = ControlEvents::new();
        if self.awaiting_else.take().is_some() {
            events.push(ControlEvent::Close);
        }
        while self.open.pop().is_some() {
            events.push(ControlEvent::Close);
        }
        self.depth = 0;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::{ControlEvent, ControlScanner};
    use crate::model::BlockKind;

    fn scan(lines: &[&str]) -> Vec<ControlEvent> {
        let mut scanner = ControlScanner::new();
        let mut events = Vec::new();
        for line in lines {
            events.extend(scanner.observe(line));
        }
        events.extend(scanner.finish());
        events
    }

    fn open(kind: BlockKind, header: &str) -> ControlEvent {
        ControlEvent::Open {
            kind,
            header: Some(header.to_owned()),
        }
    }

    #[test]
    fn loop_closes_at_its_own_brace_only() {
        let events = scan(&[
            "test('t', async ({ page }) => {",
            "  for (const user of users) {",
            "    await page.evaluate(() => { return 1; });",
            "    await page.fill('#name', user);",
            "  }",
            "});",
        ]);
        assert_eq!(
            events,
            vec![open(BlockKind::Loop, "const user of users"), ControlEvent::Close]
        );
    }

    #[test]
    fn if_else_chain_becomes_sections() {
        let events = scan(&[
            "if (isMobile) {",
            "  I.click('Menu');",
            "} else if (isTablet) {",
            "  I.click('Tab');",
            "} else {",
            "  I.click('Nav');",
            "}",
        ]);
        assert_eq!(
            events,
            vec![
                open(BlockKind::Conditional, "isMobile"),
                ControlEvent::Else {
                    header: Some("if isTablet".to_owned())
                },
                ControlEvent::Else { header: None },
                ControlEvent::Close,
            ]
        );
    }

    #[test]
    fn for_each_and_unclosed_fragments() {
        let events = scan(&["items.forEach(async (item) => {", "  await page.click(item);"]);
        assert_eq!(
            events,
            vec![open(BlockKind::Loop, "each items"), ControlEvent::Close]
        );
    }

    #[test]
    fn braces_in_strings_and_single_line_blocks_are_ignored() {
        let events = scan(&[
            "await page.fill('#json', '{ \"a\": 1 }');",
            "if (ok) { await page.click('#a'); }",
            "// for (;;) {",
        ]);
        assert!(events.is_empty());
    }

    #[test]
    fn else_on_the_line_after_the_closing_brace_continues_the_conditional() {
        let events = scan(&[
            "if (isMobile) {",
            "  await page.click('#menu');",
            "}",
            "// fall back to the sidebar",
            "else if (isTablet) {",
            "  await page.click('#tabs');",
            "}",
            "else {",
            "  await page.click('#nav');",
            "}",
        ]);
        assert_eq!(
            events,
            vec![
                open(BlockKind::Conditional, "isMobile"),
                ControlEvent::Else {
                    header: Some("if isTablet".to_owned())
                },
                ControlEvent::Else { header: None },
                ControlEvent::Close,
            ]
        );
    }

    #[test]
    fn closed_conditional_is_flushed_before_the_next_statement() {
        let mut scanner = ControlScanner::new();
        assert_eq!(
            scanner.observe("if (ok) {").as_slice(),
            [open(BlockKind::Conditional, "ok")]
        );
        assert!(scanner.observe("  I.click('A');").is_empty());
        assert!(scanner.observe("}").is_empty());
        assert_eq!(scanner.observe("I.click('B');").as_slice(), [ControlEvent::Close]);
        assert!(scanner.finish().is_empty());
    }
}
