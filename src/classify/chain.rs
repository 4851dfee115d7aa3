// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lexer for JavaScript call chains such as `page.getByRole('button').click()`.
//!
//! Only single-line chains are understood: every bracket and string literal has to close
//! on the same line, otherwise the statement does not lex at all.

use smallvec::SmallVec;

/// One call argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Arg<'a> {
    /// A lone string literal, quotes removed.
    Str(&'a str),
    /// Anything else, trimmed source text.
    Raw(&'a str),
}

impl<'a> Arg<'a> {
    pub(crate) fn text(&self) -> &'a str {
        match self {
            Self::Str(text) | Self::Raw(text) => text,
        }
    }
}

pub(crate) type Args<'a> = SmallVec<[Arg<'a>; 2]>;

/// `name` or `name(args)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Segment<'a> {
    pub(crate) name: &'a str,
    pub(crate) args: Option<Args<'a>>,
}

impl<'a> Segment<'a> {
    pub(crate) fn is_call(&self) -> bool {
        self.args.is_some()
    }

    pub(crate) fn arg(&self, idx: usize) -> Option<Arg<'a>> {
        self.args.as_ref().and_then(|args| args.get(idx).copied())
    }
}

/// `receiver(.segment)*`; the receiver is `segments[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CallChain<'a> {
    pub(crate) segments: SmallVec<[Segment<'a>; 4]>,
}

impl<'a> CallChain<'a> {
    pub(crate) fn receiver(&self) -> &Segment<'a> {
        &self.segments[0]
    }

    pub(crate) fn last(&self) -> &Segment<'a> {
        &self.segments[self.segments.len() - 1]
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

fn skip_ws(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

/// Parses a whole statement body as a call chain. Trailing text makes the parse fail.
pub(crate) fn parse_chain(input: &str) -> Option<CallChain<'_>> {
    let bytes = input.as_bytes();
    let mut segments = SmallVec::new();
    let mut pos = skip_ws(bytes, 0);

    loop {
        if pos >= bytes.len() || !is_ident_start(bytes[pos]) {
            return None;
        }
        let start = pos;
        while pos < bytes.len() && is_ident_continue(bytes[pos]) {
            pos += 1;
        }
        let name = &input[start..pos];

        pos = skip_ws(bytes, pos);
        let args = if bytes.get(pos) == Some(&b'(') {
            let (args, end) = parse_args(input, pos)?;
            pos = skip_ws(bytes, end);
            Some(args)
        } else {
            None
        };
        segments.push(Segment { name, args });

        if pos == bytes.len() {
            return Some(CallChain { segments });
        }
        match bytes[pos] {
            b'.' => pos = skip_ws(bytes, pos + 1),
            b'?' if bytes.get(pos + 1) == Some(&b'.') => pos = skip_ws(bytes, pos + 2),
            _ => return None,
        }
    }
}

/// Parses `( ... )` starting at `open`; returns the arguments and the offset after `)`.
fn parse_args(input: &str, open: usize) -> Option<(Args<'_>, usize)> {
    let bytes = input.as_bytes();
    debug_assert_eq!(bytes[open], b'(');

    let mut args = Args::new();
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut arg_start = open + 1;
    let mut pos = open + 1;

    while pos < bytes.len() {
        let b = bytes[pos];
        if let Some(q) = quote {
            if b == b'\\' {
                pos += 2;
                continue;
            }
            if b == q {
                quote = None;
            }
            pos += 1;
            continue;
        }

        match b {
            b'\'' | b'"' | b'`' => quote = Some(b),
            b'(' | b'[' | b'{' => depth += 1,
            b')' if depth == 0 => {
                push_arg(&mut args, &input[arg_start..pos]);
                return Some((args, pos + 1));
            }
            b')' | b']' | b'}' => depth = depth.checked_sub(1)?,
            b',' if depth == 0 => {
                push_arg(&mut args, &input[arg_start..pos]);
                arg_start = pos + 1;
            }
            _ => {}
        }
        pos += 1;
    }

    None
}

fn push_arg<'a>(args: &mut Args<'a>, raw: &'a str) {
    let raw = raw.trim();
    if raw.is_empty() {
        return;
    }
    args.push(string_literal(raw).map_or(Arg::Raw(raw), Arg::Str));
}

/// Returns the contents of `raw` when it is exactly one string literal.
fn string_literal(raw: &str) -> Option<&str> {
    let bytes = raw.as_bytes();
    let quote = *bytes.first()?;
    if !matches!(quote, b'\'' | b'"' | b'`') || bytes.len() < 2 {
        return None;
    }

    let mut pos = 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b if b == quote => {
                return (pos == bytes.len() - 1).then(|| &raw[1..pos]);
            }
            _ => pos += 1,
        }
    }
    None
}
