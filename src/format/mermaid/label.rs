// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Label cleanup for message text, display names and fragment headers.

const ELLIPSIS: &str = "...";

/// Single-line, length-limited and escaped text ready to follow a `:` or keyword.
///
/// Truncation counts characters before escaping, so entity codes are never cut in half.
pub fn sanitize_text(text: &str, max_len: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let char_count = collapsed.chars().count();
    if char_count <= max_len {
        return escape_text(&collapsed);
    }

    let keep = max_len.saturating_sub(ELLIPSIS.len());
    let mut truncated = collapsed.chars().take(keep).collect::<String>();
    truncated.truncate(truncated.trim_end().len());
    truncated.push_str(ELLIPSIS);
    escape_text(&truncated)
}

/// Writes characters with meaning in the sequence grammar as Mermaid entity codes.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '#' => out.push_str("#35;"),
            ';' => out.push_str("#59;"),
            ':' => out.push_str("#58;"),
            '"' => out.push_str("#quot;"),
            '\r' | '\n' | '\t' => out.push(' '),
            other => out.push(other),
        }
    }
    out
}
