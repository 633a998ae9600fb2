// tests/integration_tests/edge_cases_test.rs
use super::common::{create_test_file, january_clock};
use anyhow::Result;
use dateshelf::core::codec::decode_file_date;
use dateshelf::{process, Structure, WalkOptions};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_empty_directory_walks_to_zero() -> Result<()> {
    let dir = TempDir::new()?;
    let summary = process(
        dir.path(),
        &WalkOptions::default(),
        &january_clock(),
        |_, _| Ok(()),
    )?;
    assert_eq!(summary.invoked, 0);
    assert_eq!(summary.skipped_undated, 0);
    Ok(())
}

#[test]
fn test_leap_day_decodes_only_in_leap_years() {
    assert!(
        decode_file_date(Path::new("2024/02"), "29.txt", Structure::Month, false).is_some(),
        "2024-02-29 exists"
    );
    assert!(
        decode_file_date(Path::new("2023/02"), "29.txt", Structure::Month, false).is_none(),
        "2023-02-29 does not"
    );
}

#[test]
fn test_underscore_and_dash_separators_are_interchangeable() {
    let dashed = decode_file_date(Path::new(""), "2022-01-15-0830.md", Structure::Flat, true);
    let mixed = decode_file_date(Path::new(""), "2022_01_15-0830.md", Structure::Flat, true);
    assert_eq!(dashed, mixed);
    assert!(dashed.is_some());
}

#[test]
fn test_deeply_nested_extra_directories_are_ignored() {
    // Only the leading components participate in the date; anything below
    // them is the host's own nesting.
    let nested = decode_file_date(
        Path::new("2022/01/drafts"),
        "15-0830.md",
        Structure::Month,
        true,
    );
    let direct = decode_file_date(Path::new("2022/01"), "15-0830.md", Structure::Month, true);
    assert_eq!(nested, direct, "a trailing non-date directory does not change the result");
    assert_eq!(
        direct.expect("well-formed month path decodes").format("%Y-%m-%d").to_string(),
        "2022-01-15"
    );

    // A non-numeric component in a date position does fail.
    assert!(
        decode_file_date(Path::new("drafts/01"), "15-0830.md", Structure::Month, true).is_none()
    );
}

#[test]
fn test_double_extension_strips_only_the_last() {
    // Stripping ".md" leaves the stem "2022-01-15.backup", so the trailing
    // day token is "15.backup"...
    let decoded = decode_file_date(Path::new(""), "2022-01-15.backup.md", Structure::Flat, false);
    assert!(
        decoded.is_none(),
        "the surviving .backup token makes the day field non-numeric"
    );
    // ...while a plain double-dotted date still works.
    let decoded = decode_file_date(Path::new(""), "2022-01-15.md", Structure::Flat, false);
    assert!(decoded.is_some());
}

#[test]
fn test_files_directly_under_root_with_day_structure_are_skipped() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "2022-01-15.txt", "flat file in a day-structured tree")?;
    let options = WalkOptions {
        structure: Structure::Day,
        extensions: vec!["txt".into()],
        ..WalkOptions::default()
    };
    let summary = process(dir.path(), &options, &january_clock(), |_, _| Ok(()))?;
    assert_eq!(summary.invoked, 0);
    assert_eq!(summary.skipped_undated, 1);
    Ok(())
}
