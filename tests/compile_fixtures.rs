// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of testseq and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};

use rstest::rstest;
use testseq::{compile, compile_with, CompilationResult, CompileConfig, Framework};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("compile")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"))
}

#[rstest]
#[case::playwright_profile("playwright_profile.spec.ts", Framework::Playwright, "playwright_profile.mmd")]
#[case::playwright_orders_api(
    "playwright_orders_api.spec.ts",
    Framework::Playwright,
    "playwright_orders_api.mmd"
)]
#[case::codecept_checkout("codecept_checkout_test.js", Framework::CodeceptJs, "codecept_checkout.mmd")]
#[case::codecept_user_api("codecept_user_api_test.js", Framework::CodeceptJs, "codecept_user_api.mmd")]
fn fixture_compiles_to_expected_diagram(
    #[case] source: &str,
    #[case] framework: Framework,
    #[case] expected: &str,
) {
    let result = compile(&read_fixture(source), framework);

    assert!(result.is_ok(), "{source}: unexpected errors {:?}", result.errors());
    assert_eq!(result.diagram_text(), read_fixture(expected), "{source}");
}

#[rstest]
#[case::playwright_orders_api(
    "playwright_orders_api.spec.ts",
    Framework::Playwright,
    &["line 9: 'evaluate' is not a known playwright step; rendered as a generic message"]
)]
#[case::codecept_checkout(
    "codecept_checkout_test.js",
    Framework::CodeceptJs,
    &["line 21: 'tapAndHold' is not a known codeceptjs step; rendered as a generic message"]
)]
#[case::codecept_user_api("codecept_user_api_test.js", Framework::CodeceptJs, &[])]
fn fixture_warnings(#[case] source: &str, #[case] framework: Framework, #[case] expected: &[&str]) {
    let result = compile(&read_fixture(source), framework);
    assert_eq!(result.warnings(), expected);
}

#[test]
fn fixtures_compiled_with_the_other_framework_fail_cleanly() {
    for (source, framework) in [
        ("playwright_profile.spec.ts", Framework::CodeceptJs),
        ("codecept_checkout_test.js", Framework::Playwright),
    ] {
        let result = compile(&read_fixture(source), framework);
        assert_eq!(result.errors(), ["no test steps could be parsed"], "{source}");
        assert!(result.diagram_text().is_empty());
    }
}

#[test]
fn crlf_input_matches_lf_input() {
    let lf = read_fixture("codecept_checkout_test.js");
    let crlf = lf.replace('\n', "\r\n");

    let a = compile(&lf, Framework::CodeceptJs);
    let b = compile(&crlf, Framework::CodeceptJs);
    assert_eq!(a.diagram_text(), b.diagram_text());
}

#[test]
fn result_serializes_for_the_ui_layer() {
    let result = compile(&read_fixture("codecept_user_api_test.js"), Framework::CodeceptJs);
    let json: serde_json::Value =
        serde_json::from_str(&result.to_json().expect("serialize")).expect("valid json");

    assert_eq!(json["actions"][0]["kind"], "request");
    assert_eq!(json["actions"][0]["from"], "tester");
    assert_eq!(json["actions"][0]["sequence_index"], 0);
    assert_eq!(json["participants"][0]["role"], "actor");
    assert_eq!(json["errors"], serde_json::json!([]));

    let schema = CompilationResult::json_schema();
    assert!(schema["properties"]["diagram_text"].is_object());
}

#[test]
fn config_loaded_from_json_shapes_the_output() {
    let config = CompileConfig::from_json_str(
        r#"{ "max_actions": 2, "autonumber": true, "title": "Checkout" }"#,
    )
    .expect("config");
    let result = compile_with(
        &read_fixture("codecept_checkout_test.js"),
        Framework::CodeceptJs,
        &config,
    );

    assert_eq!(result.actions().len(), 2);
    assert!(result
        .diagram_text()
        .starts_with("sequenceDiagram\ntitle Checkout\nautonumber\n"));
    assert_eq!(
        result.warnings().last().map(String::as_str),
        Some("diagram truncated to 2 actions; 11 more actions were dropped")
    );
}
