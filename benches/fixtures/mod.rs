// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Deterministic test sources for the compile benches (no RNG).

use testseq::{CompilationResult, Framework};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub steps: usize,
    /// Every n-th step sits inside a `for` / `if` fragment; 0 disables fragments.
    pub fragment_every: usize,
    pub long_text: bool,
}

impl Params {
    pub const fn new(steps: usize, fragment_every: usize, long_text: bool) -> Self {
        Self {
            steps,
            fragment_every,
            long_text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Medium,
    MediumFragments,
    LargeLongText,
}

impl Case {
    pub const ALL: [Case; 4] = [
        Case::Small,
        Case::Medium,
        Case::MediumFragments,
        Case::LargeLongText,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::MediumFragments => "medium_fragments",
            Self::LargeLongText => "large_long_text",
        }
    }

    pub const fn params(self) -> Params {
        match self {
            Self::Small => Params::new(20, 0, false),
            Self::Medium => Params::new(150, 0, false),
            Self::MediumFragments => Params::new(150, 5, false),
            Self::LargeLongText => Params::new(1_000, 10, true),
        }
    }
}

fn operand(idx: usize, long_text: bool) -> String {
    if long_text {
        format!("#section-{idx:04} .card:nth-child({idx}) > .body .title-with-a-long-class-name")
    } else {
        format!("#item-{idx:04}")
    }
}

fn playwright_step(idx: usize, long_text: bool) -> String {
    let target = operand(idx, long_text);
    match idx % 8 {
        0 => format!("  await page.goto('/catalog/{idx}');"),
        1 => format!("  await page.locator('{target}').click();"),
        2 => format!("  await page.getByLabel('Field {idx}').fill('value {idx}');"),
        3 => format!("  await expect(page.locator('{target}')).toBeVisible();"),
        4 => format!("  const res{idx} = await request.get('https://api.shop.test/items/{idx}');"),
        5 => "  await page.keyboard.press('Enter');".to_owned(),
        6 => format!("  await page.waitForSelector('{target}');"),
        _ => format!("  // step {idx}"),
    }
}

fn codecept_step(idx: usize, long_text: bool) -> String {
    let target = operand(idx, long_text);
    match idx % 8 {
        0 => format!("  I.amOnPage('/catalog/{idx}');"),
        1 => format!("  I.click('{target}');"),
        2 => format!("  I.fillField('Field {idx}', 'value {idx}');"),
        3 => format!("  I.seeElement('{target}');"),
        4 => format!("  I.sendGetRequest('https://api.shop.test/items/{idx}');"),
        5 => "  I.pressKey('Enter');".to_owned(),
        6 => format!("  I.waitForElement('{target}', 5);"),
        _ => format!("  I.say('checkpoint {idx}');"),
    }
}

pub fn source(framework: Framework, case: Case) -> String {
    let params = case.params();
    let mut lines = Vec::with_capacity(params.steps * 2 + 4);
    match framework {
        Framework::Playwright => {
            lines.push("import { test, expect } from '@playwright/test';".to_owned());
            lines.push("test('bench', async ({ page, request }) => {".to_owned());
        }
        Framework::CodeceptJs => {
            lines.push("Feature('Bench');".to_owned());
            lines.push("Scenario('bench', ({ I }) => {".to_owned());
        }
    }

    for idx in 0..params.steps {
        let fragment = params.fragment_every > 0 && idx % params.fragment_every == 0;
        if fragment {
            if idx % 2 == 0 {
                lines.push(format!("  for (let i = 0; i < {idx}; i++) {{"));
            } else {
                lines.push(format!("  if (flags[{idx}]) {{"));
            }
        }
        lines.push(match framework {
            Framework::Playwright => playwright_step(idx, params.long_text),
            Framework::CodeceptJs => codecept_step(idx, params.long_text),
        });
        if fragment {
            lines.push("  }".to_owned());
        }
    }

    lines.push("});".to_owned());
    lines.join("\n")
}

pub fn checksum(result: &CompilationResult) -> u64 {
    let mut acc = result.diagram_text().len() as u64;
    for action in result.actions() {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(action.label().len() as u64)
            .wrapping_add(action.sequence_index() as u64);
    }
    acc.wrapping_add(result.participants().len() as u64)
        .wrapping_add(result.blocks().len() as u64)
}
