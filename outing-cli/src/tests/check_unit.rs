//! Unit coverage for the `check` subcommand.

use rstest::rstest;

use super::helpers::{catalog_fixture, write_file};
use crate::CliError;
use crate::check::{CheckArgs, run_check_with};

#[rstest]
fn consistent_catalog_passes() {
    let fixture = catalog_fixture();
    let mut output = Vec::new();
    run_check_with(
        CheckArgs {
            catalog_dir: Some(fixture.dir.clone()),
        },
        &mut output,
    )
    .expect("consistent catalog should pass");

    let report = String::from_utf8(output).expect("report should be UTF-8");
    assert!(report.contains("2 item(s), 1 categor(y/ies)"));
    assert!(report.contains("catalog ok"));
}

#[rstest]
fn unknown_category_reference_fails() {
    let fixture = catalog_fixture();
    write_file(
        &fixture.dir,
        "index.json",
        r#"{"items": [{"slug": "tea-house", "title": "Tea house", "main_category": "ghost"}]}"#,
    );

    let mut output = Vec::new();
    let error = run_check_with(
        CheckArgs {
            catalog_dir: Some(fixture.dir.clone()),
        },
        &mut output,
    )
    .expect_err("unknown category must fail the check");
    assert!(matches!(error, CliError::CheckFailed { problems: 1 }));

    let report = String::from_utf8(output).expect("report should be UTF-8");
    assert!(report.contains("unknown category \"ghost\""));
}

#[rstest]
fn duplicate_slugs_fail() {
    let fixture = catalog_fixture();
    write_file(
        &fixture.dir,
        "index.json",
        r#"{"items": [
            {"slug": "tea-house", "title": "Tea house", "main_category": "relax"},
            {"slug": "tea-house", "title": "Tea house again", "main_category": "relax"}
        ]}"#,
    );

    let mut output = Vec::new();
    let error = run_check_with(
        CheckArgs {
            catalog_dir: Some(fixture.dir.clone()),
        },
        &mut output,
    )
    .expect_err("duplicate slugs must fail the check");
    assert!(matches!(error, CliError::CheckFailed { problems: 1 }));

    let report = String::from_utf8(output).expect("report should be UTF-8");
    assert!(report.contains("duplicate item slug tea-house"));
}

#[rstest]
fn missing_index_is_a_catalog_error() {
    let guard = tempfile::tempdir().expect("temp dir should create");
    let dir = camino::Utf8PathBuf::from_path_buf(guard.path().to_path_buf())
        .expect("temp dir path should be UTF-8");
    let error = run_check_with(
        CheckArgs {
            catalog_dir: Some(dir),
        },
        &mut Vec::new(),
    )
    .expect_err("missing index must fail");
    assert!(matches!(error, CliError::Catalog(_)));
}
