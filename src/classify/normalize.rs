// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// A source line reduced to the code a rule has to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Statement<'a> {
    pub(crate) awaited: bool,
    pub(crate) body: &'a str,
}

/// Walks the code characters of one line, skipping string literal contents and stopping
/// at a `//` comment. Yields `(byte_offset, char)` pairs.
pub(crate) struct CodeChars<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    quote: Option<char>,
    done: bool,
}

impl<'a> CodeChars<'a> {
    pub(crate) fn new(line: &'a str) -> Self {
        Self {
            chars: line.char_indices().peekable(),
            quote: None,
            done: false,
        }
    }

    /// Byte offset where code ends (start of a trailing `//` comment, or the line length).
    pub(crate) fn code_end(line: &str) -> usize {
        let mut scanner = CodeChars::new(line);
        while let Some((idx, _)) = scanner.next_any() {
            if scanner.done {
                return idx;
            }
        }
        line.len()
    }

    /// Like `next`, but also reports characters inside string literals.
    fn next_any(&mut self) -> Option<(usize, char)> {
        if self.done {
            return None;
        }
        let (idx, ch) = self.chars.next()?;
        match self.quote {
            Some(quote) => {
                if ch == '\\' {
                    self.chars.next();
                } else if ch == quote {
                    self.quote = None;
                }
            }
            None => match ch {
                '\'' | '"' | '`' => self.quote = Some(ch),
                '/' if self.chars.peek().map(|&(_, next)| next) == Some('/') => {
                    self.done = true;
                }
                _ => {}
            },
        }
        Some((idx, ch))
    }
}

impl Iterator for CodeChars<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let in_string_before = self.quote.is_some();
            let (idx, ch) = self.next_any()?;
            if self.done {
                return None;
            }
            let opens_string = !in_string_before && self.quote.is_some();
            if in_string_before || opens_string {
                continue;
            }
            return Some((idx, ch));
        }
    }
}

/// Carries `/* … */` state from one line to the next and reduces each line to its code.
///
/// Block comments are cut out wherever they start or end, a `//` comment ends the line,
/// and string literals are left alone. One filter serves one compilation.
#[derive(Debug, Default)]
pub(crate) struct CommentFilter {
    in_block: bool,
}

impl CommentFilter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn strip<'a>(&mut self, line: &'a str) -> Cow<'a, str> {
        let mut kept: Vec<(usize, usize)> = Vec::new();
        let mut start = (!self.in_block).then_some(0);
        let mut quote: Option<char> = None;
        let mut chars = line.char_indices().peekable();

        while let Some((idx, ch)) = chars.next() {
            let next = chars.peek().map(|&(_, next)| next);
            if self.in_block {
                if ch == '*' && next == Some('/') {
                    chars.next();
                    self.in_block = false;
                    start = Some(idx + 2);
                }
                continue;
            }
            if let Some(open) = quote {
                if ch == '\\' {
                    chars.next();
                } else if ch == open {
                    quote = None;
                }
                continue;
            }
            match (ch, next) {
                ('\'' | '"' | '`', _) => quote = Some(ch),
                ('/', Some('/')) => {
                    kept.extend(start.take().map(|from| (from, idx)));
                    break;
                }
                ('/', Some('*')) => {
                    chars.next();
                    self.in_block = true;
                    kept.extend(start.take().map(|from| (from, idx)));
                }
                _ => {}
            }
        }
        kept.extend(start.map(|from| (from, line.len())));
        kept.retain(|(from, to)| from < to);

        match kept.as_slice() {
            [] => Cow::Borrowed(""),
            [(from, to)] => Cow::Borrowed(&line[*from..*to]),
            ranges => Cow::Owned(
                ranges
                    .iter()
                    .map(|&(from, to)| &line[from..to])
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        }
    }
}

pub(crate) fn is_comment(trimmed: &str) -> bool {
    trimmed.starts_with("//")
        || trimmed.starts_with("/*")
        || trimmed.starts_with('*')
}

fn is_boilerplate(trimmed: &str) -> bool {
    trimmed.starts_with("import ")
        || trimmed.starts_with("import{")
        || trimmed.starts_with("export ")
        || trimmed.starts_with("'use strict'")
        || trimmed.starts_with("\"use strict\"")
        || trimmed.contains("require(")
}

fn assignment_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:(?:const|let|var)\s+)?[A-Za-z_$][\w$]*\s*=\s*")
            .expect("assignment pattern compiles")
    })
}

fn strip_assignment(code: &str) -> &str {
    let Some(found) = assignment_prefix().find(code) else {
        return code;
    };
    let rest = &code[found.end()..];
    // `a == b`, `a === b` and `a => b` are not assignments.
    let matched = found.as_str().trim_end();
    if matched.ends_with('=') && (rest.starts_with('=') || rest.starts_with('>')) {
        return code;
    }
    rest
}

/// Reduces `line` to a rule-ready statement, or `None` when the line is Noise before any
/// grammar rule runs (blank, comment, import/setup boilerplate).
pub(crate) fn normalize(line: &str) -> Option<Statement<'_>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || is_comment(trimmed) || is_boilerplate(trimmed) {
        return None;
    }

    let code = trimmed[..CodeChars::code_end(trimmed)].trim_end();
    let code = code.strip_suffix(';').unwrap_or(code).trim_end();
    let code = strip_assignment(code);

    let (awaited, body) = match code.strip_prefix("await") {
        Some(rest) if rest.starts_with(char::is_whitespace) => (true, rest.trim_start()),
        _ => (false, code),
    };

    (!body.is_empty()).then_some(Statement { awaited, body })
}
