// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Operand helpers shared by both grammars.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::chain::Arg;

/// Fallback request target when a URL carries no host.
pub(crate) const RELATIVE_REQUEST_TARGET: &str = "API";

/// First matched group among the alternatives of a `'…'|"…"|`…`` pattern.
pub(crate) fn first_group(captures: &Captures<'_>) -> Option<String> {
    captures
        .iter()
        .skip(1)
        .flatten()
        .next()
        .map(|m| m.as_str().to_owned())
}

fn object_locator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^\{\s*\w+\s*:\s*(?:'([^']*)'|"([^"]*)"|`([^`]*)`)\s*\}$"#)
            .expect("object locator pattern compiles")
    })
}

/// Human-readable operand text: string contents, the value of a one-key locator object
/// such as `{ css: '#a' }`, or the raw expression.
pub(crate) fn arg_display(arg: Arg<'_>) -> String {
    match arg {
        Arg::Str(text) => text.to_owned(),
        Arg::Raw(raw) => object_locator()
            .captures(raw)
            .and_then(|captures| first_group(&captures))
            .unwrap_or_else(|| raw.to_owned()),
    }
}

/// Splits a request URL into the participant it targets and the path shown in the label.
///
/// `https://api.example.com/users?id=1` targets `api.example.com` with `/users?id=1`;
/// relative URLs target [`RELATIVE_REQUEST_TARGET`] and keep the URL as the path.
pub(crate) fn request_target(url: &str) -> (String, String) {
    let url = url.trim();
    let Some((_, rest)) = url.split_once("://") else {
        return (RELATIVE_REQUEST_TARGET.to_owned(), url.to_owned());
    };

    let host_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..host_end];
    let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    let path = match &rest[host_end..] {
        "" => "/",
        path => path,
    };

    if host.is_empty() {
        return (RELATIVE_REQUEST_TARGET.to_owned(), path.to_owned());
    }
    (host.to_owned(), path.to_owned())
}
