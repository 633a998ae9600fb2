// tests/integration_tests/output_test.rs
use super::common::instant;
use anyhow::Result;
use dateshelf::{FilenameFields, OutputPolicy, Structure};
use tempfile::TempDir;

fn policy(root: &std::path::Path, structure: Structure, fields: FilenameFields) -> OutputPolicy {
    OutputPolicy {
        root: root.to_path_buf(),
        structure,
        fields,
    }
}

#[test]
fn test_locate_builds_and_creates_destination() -> Result<()> {
    let tmp = TempDir::new()?;
    let fields = FilenameFields {
        date: true,
        time: true,
        subject: true,
    };
    let p = policy(tmp.path(), Structure::Month, fields);
    let location = p.locate(
        instant("2024-06-15T10:30"),
        "eml",
        "abc123",
        Some("Re: [Test]!"),
    )?;
    assert_eq!(location.directory, tmp.path().join("2024/06"));
    assert!(location.directory.is_dir(), "directory is created as a side effect");
    assert_eq!(location.filename, "15-1030-abc123-eml-Re_Test");
    assert_eq!(
        location.full_path(),
        tmp.path().join("2024/06/15-1030-abc123-eml-Re_Test")
    );
    Ok(())
}

#[test]
fn test_flat_structure_full_date_filename() -> Result<()> {
    let tmp = TempDir::new()?;
    let fields = FilenameFields {
        date: true,
        time: true,
        subject: true,
    };
    let p = policy(tmp.path(), Structure::Flat, fields);
    let name = p.build_filename(
        instant("2024-06-15T10:30"),
        "eml",
        "abc123",
        Some("Re: [Test]!"),
    )?;
    assert_eq!(name, "2024-06-15-1030-abc123-eml-Re_Test");
    Ok(())
}

#[test]
fn test_bare_filename_without_fields() -> Result<()> {
    let tmp = TempDir::new()?;
    let p = policy(tmp.path(), Structure::Year, FilenameFields::default());
    let name = p.build_filename(instant("2024-06-15T10:30"), "md", "deadbeef", None)?;
    assert_eq!(name, "deadbeef-md", "identifier and type tag only");
    Ok(())
}

#[test]
fn test_missing_subject_is_untitled() -> Result<()> {
    let tmp = TempDir::new()?;
    let fields = FilenameFields {
        subject: true,
        ..FilenameFields::default()
    };
    let p = policy(tmp.path(), Structure::Flat, fields);
    assert_eq!(
        p.build_filename(instant("2024-06-15T00:00"), "eml", "x1", None)?,
        "x1-eml-untitled"
    );
    assert_eq!(
        p.build_filename(instant("2024-06-15T00:00"), "eml", "x1", Some("?!?"))?,
        "x1-eml-untitled",
        "all-punctuation subjects sanitize to the placeholder"
    );
    Ok(())
}

#[test]
fn test_date_field_under_day_structure_fails_validation() {
    let fields = FilenameFields {
        date: true,
        ..FilenameFields::default()
    };
    let p = policy(std::path::Path::new("/out"), Structure::Day, fields);
    assert!(p.validate().is_err());
}
