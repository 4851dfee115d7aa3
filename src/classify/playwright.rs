// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Grammar A: Playwright-style `(await) <object>.<verb>(<args>)` statements.

use std::sync::OnceLock;

use regex::Regex;

use super::chain::{parse_chain, Arg, Segment};
use super::codecept::TESTER_TOKEN;
use super::operand::{arg_display, first_group, request_target};
use super::rules::{Extraction, Rule, RuleInput, RuleKind, RuleSet, VerbTable};
use crate::model::{ActionKind, Framework};

pub(crate) static VERBS: VerbTable = VerbTable {
    exact: &[
        ("goto", ActionKind::Navigate),
        ("reload", ActionKind::Navigate),
        ("goBack", ActionKind::Navigate),
        ("goForward", ActionKind::Navigate),
        ("click", ActionKind::Click),
        ("dblclick", ActionKind::Click),
        ("tap", ActionKind::Click),
        ("fill", ActionKind::Fill),
        ("type", ActionKind::Fill),
        ("pressSequentially", ActionKind::Fill),
        ("clear", ActionKind::Fill),
        ("selectOption", ActionKind::Select),
        ("check", ActionKind::Check),
        ("uncheck", ActionKind::Check),
        ("setChecked", ActionKind::Check),
        ("hover", ActionKind::Hover),
        ("focus", ActionKind::Hover),
        ("press", ActionKind::Press),
        ("setInputFiles", ActionKind::Upload),
        ("waitForTimeout", ActionKind::Wait),
        ("waitForSelector", ActionKind::Wait),
        ("waitForURL", ActionKind::Wait),
        ("waitForLoadState", ActionKind::Wait),
        ("waitForResponse", ActionKind::Wait),
        ("waitForRequest", ActionKind::Wait),
        ("waitForEvent", ActionKind::Wait),
        ("screenshot", ActionKind::Screenshot),
    ],
    prefixes: &[],
};

/// Receivers whose name ends in one of these act as a participant themselves.
const ACTOR_SUFFIXES: [&str; 5] = ["page", "frame", "context", "browser", "request"];

const LOCATOR_SEGMENTS: [&str; 15] = [
    "locator",
    "frameLocator",
    "getByRole",
    "getByText",
    "getByLabel",
    "getByPlaceholder",
    "getByTestId",
    "getByAltText",
    "getByTitle",
    "nth",
    "first",
    "last",
    "filter",
    "and",
    "or",
];

pub(crate) fn is_actor_like(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    ACTOR_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

fn role_name_option() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\bname\s*:\s*(?:'([^']*)'|"([^"]*)"|`([^`]*)`)"#)
            .expect("role name pattern compiles")
    })
}

fn describe_locator(segment: &Segment<'_>) -> Option<String> {
    let arg = |idx: usize| segment.arg(idx).map(arg_display);
    let prefixed = |prefix: &str| arg(0).map(|text| format!("{prefix}={text}"));
    match segment.name {
        "locator" | "frameLocator" => arg(0),
        "getByRole" => {
            let role = arg(0)?;
            let name = segment.arg(1).and_then(|options| {
                role_name_option()
                    .captures(options.text())
                    .and_then(|captures| first_group(&captures))
            });
            Some(match name {
                Some(name) => format!("{role}[name={name}]"),
                None => role,
            })
        }
        "getByText" => prefixed("text"),
        "getByLabel" => prefixed("label"),
        "getByPlaceholder" => prefixed("placeholder"),
        "getByTestId" => prefixed("testid"),
        "getByAltText" => prefixed("alt"),
        "getByTitle" => prefixed("title"),
        "nth" => prefixed("nth"),
        "first" | "last" => Some(segment.name.to_owned()),
        _ => None,
    }
}

/// Who acts and on what, read from the receiver and the segments before the action.
#[derive(Debug, Default)]
struct Target<'a> {
    actor: Option<&'a str>,
    description: Option<String>,
    through_locator: bool,
}

fn describe_target<'a>(segments: &[Segment<'a>]) -> Target<'a> {
    let Some((receiver, rest)) = segments.split_first() else {
        return Target::default();
    };

    let actor = is_actor_like(receiver.name).then_some(receiver.name);
    let mut parts = Vec::new();
    if actor.is_none() {
        parts.push(receiver.name.to_owned());
    }

    let mut through_locator = false;
    for segment in rest {
        if LOCATOR_SEGMENTS.contains(&segment.name) {
            through_locator = true;
            parts.extend(describe_locator(segment));
        }
    }

    Target {
        actor,
        description: (!parts.is_empty()).then(|| parts.join(" >> ")),
        through_locator,
    }
}

/// Splits a `<receiver>...<action>(args)` chain, rejecting directly called receivers and
/// the CodeceptJS tester `I`.
fn split_action<'c, 'a>(input: &RuleInput<'c, 'a>) -> Option<(&'c Segment<'a>, Target<'a>)> {
    let chain = input.chain?;
    let receiver = chain.receiver();
    if chain.segments.len() < 2
        || receiver.is_call()
        || receiver.name == TESTER_TOKEN
        || !chain.last().is_call()
    {
        return None;
    }
    let target = describe_target(&chain.segments[..chain.segments.len() - 1]);
    Some((chain.last(), target))
}

fn action_extraction(action: &Segment<'_>, target: Target<'_>) -> Extraction {
    let first = action.arg(0).map(arg_display);
    let mut extraction = Extraction::new(action.name);
    extraction.actor_hint = target.actor.map(str::to_owned);
    match target.description {
        Some(description) => {
            extraction.argument = Some(description);
            extraction.value = first;
        }
        None => {
            extraction.argument = first;
            extraction.value = action.arg(1).map(arg_display);
        }
    }
    extraction
}

fn extract_step(input: &RuleInput<'_, '_>) -> Option<Extraction> {
    let mut extraction = Extraction::new("step");
    extraction.argument = Some(first_group(&input.captures)?);
    Some(extraction)
}

fn extract_expect(input: &RuleInput<'_, '_>) -> Option<Extraction> {
    let chain = input.chain?;
    let segments = chain.segments.as_slice();
    let (subject, rest) = match segments {
        [expect, rest @ ..] if expect.is_call() => (expect.arg(0)?, rest),
        [_, soft, rest @ ..] if matches!(soft.name, "soft" | "poll") && soft.is_call() => {
            (soft.arg(0)?, rest)
        }
        _ => return None,
    };

    let (matcher, modifiers) = rest.split_last()?;
    if !matcher.is_call() || modifiers.iter().any(Segment::is_call) {
        return None;
    }
    let negated = modifiers.iter().any(|segment| segment.name == "not");
    let verb = if negated {
        format!("not.{}", matcher.name)
    } else {
        matcher.name.to_owned()
    };

    let subject = describe_subject(subject);
    let mut extraction = Extraction::new(verb);
    extraction.actor_hint = subject.actor.map(str::to_owned);
    extraction.argument = subject.description;
    extraction.value = matcher.arg(0).map(arg_display);
    Some(extraction)
}

fn describe_subject(subject: Arg<'_>) -> Target<'_> {
    match subject {
        Arg::Str(text) => Target {
            description: Some(text.to_owned()),
            ..Target::default()
        },
        Arg::Raw(raw) => {
            let raw = raw.strip_prefix("await ").unwrap_or(raw).trim();
            match parse_chain(raw) {
                Some(chain) if !chain.receiver().is_call() => describe_target(&chain.segments),
                _ => Target {
                    description: Some(raw.to_owned()),
                    ..Target::default()
                },
            }
        }
    }
}

fn extract_api_request(input: &RuleInput<'_, '_>) -> Option<Extraction> {
    let chain = input.chain?;
    let (receiver, method) = match chain.segments.as_slice() {
        [receiver, method] => (receiver, method),
        [receiver, context, method] if context.name == "request" && !context.is_call() => {
            (receiver, method)
        }
        _ => return None,
    };
    if receiver.is_call() || !is_actor_like(receiver.name) {
        return None;
    }

    let url = method.arg(0).map(arg_display)?;
    let (target, path) = request_target(&url);
    let mut extraction = Extraction::new(method.name.to_ascii_uppercase());
    extraction.actor_hint = Some(receiver.name.to_owned());
    extraction.target_hint = Some(target);
    extraction.argument = Some(path);
    Some(extraction)
}

fn extract_page_action(input: &RuleInput<'_, '_>) -> Option<Extraction> {
    let (action, target) = split_action(input)?;
    if !input.statement.awaited && target.actor.is_none() {
        return None;
    }
    Some(action_extraction(action, target))
}

fn extract_custom(input: &RuleInput<'_, '_>) -> Option<Extraction> {
    let (action, target) = split_action(input)?;
    if !input.statement.awaited || (target.actor.is_none() && !target.through_locator) {
        return None;
    }
    Some(action_extraction(action, target))
}

pub(crate) fn rule_set() -> RuleSet {
    let rules = vec![
        Rule::new(
            "step",
            r#"^test\s*\.\s*step\s*\(\s*(?:'([^']*)'|"([^"]*)"|`([^`]*)`)"#,
            RuleKind::Fixed(ActionKind::Note),
            extract_step,
        ),
        Rule::new(
            "expect",
            r"^expect\s*(?:\.\s*(?:soft|poll)\s*)?\(",
            RuleKind::Fixed(ActionKind::Assert),
            extract_expect,
        ),
        Rule::new(
            "api-request",
            r"^[A-Za-z_$][\w$]*(?:\s*\.\s*request)?\s*\.\s*(?:get|post|put|patch|delete|head|fetch)\s*\(",
            RuleKind::Fixed(ActionKind::Request),
            extract_api_request,
        ),
        Rule::new(
            "page-action",
            r"^[A-Za-z_$][\w$]*\s*\.",
            RuleKind::Verbs(&VERBS),
            extract_page_action,
        ),
        Rule::new(
            "custom",
            r"^[A-Za-z_$][\w$]*\s*\.",
            RuleKind::Fixed(ActionKind::Custom),
            extract_custom,
        ),
    ];
    RuleSet::new(Framework::Playwright, rules, &VERBS)
}
