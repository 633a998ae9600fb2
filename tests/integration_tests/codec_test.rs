// tests/integration_tests/codec_test.rs
use super::common::instant;
use dateshelf::core::codec::{date_fragment, decode_file_date};
use dateshelf::Structure;
use std::path::Path;

#[test]
fn test_day_structure_scenario() {
    // 2022/01/15/0830-test.txt with time parsing decodes to 08:30 on the day.
    let decoded = decode_file_date(Path::new("2022/01/15"), "0830-test.txt", Structure::Day, true)
        .expect("day-structured path should decode");
    assert_eq!(decoded, instant("2022-01-15T08:30"));
}

#[test]
fn test_year_structure_scenario() {
    let decoded =
        decode_file_date(Path::new("2022"), "01-15-0830-test.txt", Structure::Year, true)
            .expect("year-structured path should decode");
    assert_eq!(decoded, instant("2022-01-15T08:30"));
}

#[test]
fn test_flat_structure_full_date_in_filename() {
    let decoded = decode_file_date(Path::new(""), "2022-1-5-1830-log.md", Structure::Flat, true)
        .expect("flat filename should decode");
    assert_eq!(decoded, instant("2022-01-05T18:30"));
}

#[test]
fn test_time_defaults_to_midnight_without_parsing() {
    let decoded = decode_file_date(Path::new("2022/01/15"), "notes.txt", Structure::Day, false)
        .expect("date comes entirely from the path");
    assert_eq!(decoded, instant("2022-01-15T00:00"));
}

#[test]
fn test_malformed_paths_return_none_for_every_structure() {
    let cases = [
        ("", "readme.md"),
        ("", "2022.md"),
        ("notes", "15-3.md"),
        ("2022/13", "5.md"),
        ("2022/01", "32.md"),
        ("2022/01/15", "25-99.md"),
    ];
    for structure in [
        Structure::Flat,
        Structure::Year,
        Structure::Month,
        Structure::Day,
    ] {
        for (dir, name) in cases {
            // Must be a skip, never a panic, whatever the structure.
            let _ = decode_file_date(Path::new(dir), name, structure, true);
        }
        assert!(
            decode_file_date(Path::new(""), "not-a-date.md", structure, false).is_none(),
            "undated filename must decode to None under {structure:?}"
        );
    }
}

#[test]
fn test_fragment_and_decode_are_inverse() {
    let date = instant("2024-03-09T00:00").date();
    for (structure, dir) in [
        (Structure::Flat, ""),
        (Structure::Year, "2024"),
        (Structure::Month, "2024/03"),
    ] {
        let fragment = date_fragment(date, structure).expect("fragment for non-day structure");
        let decoded =
            decode_file_date(Path::new(dir), &format!("{fragment}.md"), structure, false)
                .expect("fragment should decode back");
        assert_eq!(decoded.date(), date, "round-trip under {structure:?}");
    }
}
