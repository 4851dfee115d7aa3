// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Grammar B: CodeceptJS-style `I.<verb>(<args>)` statements, where `I` is the tester.

use super::chain::Segment;
use super::operand::{arg_display, request_target};
use super::rules::{Extraction, Rule, RuleInput, RuleKind, RuleSet, VerbTable};
use crate::model::{ActionKind, Framework};

/// The convention token CodeceptJS uses for the acting tester.
pub(crate) const TESTER_TOKEN: &str = "I";

pub(crate) const GRAPHQL_TARGET: &str = "GraphQL API";

pub(crate) static VERBS: VerbTable = VerbTable {
    exact: &[
        ("amOnPage", ActionKind::Navigate),
        ("refreshPage", ActionKind::Navigate),
        ("click", ActionKind::Click),
        ("doubleClick", ActionKind::Click),
        ("rightClick", ActionKind::Click),
        ("forceClick", ActionKind::Click),
        ("tap", ActionKind::Click),
        ("fillField", ActionKind::Fill),
        ("appendField", ActionKind::Fill),
        ("clearField", ActionKind::Fill),
        ("type", ActionKind::Fill),
        ("selectOption", ActionKind::Select),
        ("checkOption", ActionKind::Check),
        ("uncheckOption", ActionKind::Check),
        ("moveCursorTo", ActionKind::Hover),
        ("pressKey", ActionKind::Press),
        ("attachFile", ActionKind::Upload),
        ("saveScreenshot", ActionKind::Screenshot),
        ("saveElementScreenshot", ActionKind::Screenshot),
    ],
    prefixes: &[
        ("see", ActionKind::Assert),
        ("dontSee", ActionKind::Assert),
        ("wait", ActionKind::Wait),
    ],
};

/// `I.<verb>(args)` and nothing else.
fn tester_call<'c, 'a>(input: &RuleInput<'c, 'a>) -> Option<&'c Segment<'a>> {
    match input.chain?.segments.as_slice() {
        [tester, action]
            if tester.name == TESTER_TOKEN && !tester.is_call() && action.is_call() =>
        {
            Some(action)
        }
        _ => None,
    }
}

fn extract_say(input: &RuleInput<'_, '_>) -> Option<Extraction> {
    let action = tester_call(input)?;
    let mut extraction = Extraction::new(action.name);
    extraction.argument = Some(action.arg(0).map(arg_display)?);
    Some(extraction)
}

fn extract_rest_request(input: &RuleInput<'_, '_>) -> Option<Extraction> {
    let action = tester_call(input)?;
    let method = input.captures.get(1)?.as_str().to_ascii_uppercase();
    let url = action.arg(0).map(arg_display)?;
    let (target, path) = request_target(&url);

    let mut extraction = Extraction::new(method);
    extraction.target_hint = Some(target);
    extraction.argument = Some(path);
    Some(extraction)
}

fn extract_graphql_request(input: &RuleInput<'_, '_>) -> Option<Extraction> {
    let action = tester_call(input)?;
    let operation = input.captures.get(1)?.as_str().to_ascii_uppercase();

    let mut extraction = Extraction::new(operation);
    extraction.target_hint = Some(GRAPHQL_TARGET.to_owned());
    extraction.argument = action.arg(0).map(arg_display);
    Some(extraction)
}

fn extract_tester_action(input: &RuleInput<'_, '_>) -> Option<Extraction> {
    let action = tester_call(input)?;
    let mut extraction = Extraction::new(action.name);
    extraction.argument = action.arg(0).map(arg_display);
    extraction.value = action.arg(1).map(arg_display);
    Some(extraction)
}

pub(crate) fn rule_set() -> RuleSet {
    let rules = vec![
        Rule::new(
            "say",
            r"^I\s*\.\s*say\s*\(",
            RuleKind::Fixed(ActionKind::Note),
            extract_say,
        ),
        Rule::new(
            "rest-request",
            r"^I\s*\.\s*send(Get|Post|Put|Patch|Delete|Head)Request\s*\(",
            RuleKind::Fixed(ActionKind::Request),
            extract_rest_request,
        ),
        Rule::new(
            "graphql-request",
            r"^I\s*\.\s*send(Query|Mutation)\s*\(",
            RuleKind::Fixed(ActionKind::Request),
            extract_graphql_request,
        ),
        Rule::new(
            "tester-action",
            r"^I\s*\.\s*[A-Za-z_$][\w$]*\s*\(",
            RuleKind::Verbs(&VERBS),
            extract_tester_action,
        ),
        Rule::new(
            "custom",
            r"^I\s*\.\s*[A-Za-z_$][\w$]*\s*\(",
            RuleKind::Fixed(ActionKind::Custom),
            extract_tester_action,
        ),
    ];
    RuleSet::new(Framework::CodeceptJs, rules, &VERBS)
}
