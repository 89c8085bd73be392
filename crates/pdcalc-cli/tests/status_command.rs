//! Status subcommand against work documents on disk.

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use pdcalc_cli::status::{run, StatusArgs};

fn document(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn args(file: PathBuf, as_of: NaiveDate) -> StatusArgs {
    StatusArgs {
        file,
        jurisdiction: "fr".into(),
        as_of: Some(as_of),
        rules: None,
        strict_deaths: false,
        json: false,
    }
}

const PHOTOGRAPH: &str = r#"{
    "title": "Collected Papers on the Public Domain (ed)",
    "type": "photograph",
    "date": "20030101",
    "creation_date": "20030101",
    "authors": [
        {"name": "Boyle, James", "type": "person", "birth_date": "19590101", "death_date": "19890205", "country": "uk"},
        {"name": "Schumann, Robert", "type": "person", "birth_date": "18590101", "death_date": "19990205", "country": "uk"}
    ]
}"#;

#[test]
fn test_text_report() {
    let file = document(PHOTOGRAPH);
    let mut out = Vec::new();
    run(&args(file.path().to_path_buf(), NaiveDate::from_ymd_opt(2003, 6, 1).unwrap()), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Collected Papers on the Public Domain (ed) [fr, as of 2003-06-01]: protected"));
    assert!(text.contains("rule: fr.artistic.life_plus_70"));
    assert!(text.contains("assumption: Assuming that the author did not die for France"));
}

#[test]
fn test_json_report() {
    let file = document(PHOTOGRAPH);
    let mut a = args(file.path().to_path_buf(), NaiveDate::from_ymd_opt(2100, 1, 1).unwrap());
    a.json = true;
    let mut out = Vec::new();
    run(&a, &mut out).unwrap();
    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["public_domain"], true);
    assert_eq!(report["jurisdiction"], "fr");
    assert_eq!(report["as_of"], "2100-01-01");
    assert_eq!(report["assumptions"].as_array().unwrap().len(), 1);
}

#[test]
fn test_unknown_jurisdiction_is_an_error() {
    let file = document(PHOTOGRAPH);
    let mut a = args(file.path().to_path_buf(), NaiveDate::from_ymd_opt(2003, 6, 1).unwrap());
    a.jurisdiction = "de".into();
    let err = run(&a, &mut Vec::new()).unwrap_err();
    assert!(err.to_string().contains("unknown jurisdiction"));
}

#[test]
fn test_invalid_work_type_is_an_error() {
    let file = document(r#"{"title": "Le Penseur", "type": "sculpture", "creation_date": "19040101"}"#);
    let err = run(
        &args(file.path().to_path_buf(), NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()),
        &mut Vec::new(),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("sculpture"));
}

#[test]
fn test_strict_deaths_flag() {
    let file = document(
        r#"{"title": "t", "type": "literary", "creation_date": "19300101", "date": "19300101",
            "authors": [
                {"name": "Dead", "type": "person", "death_date": "19400101", "country": "fr"},
                {"name": "Unknown", "type": "person", "country": "fr"}
            ]}"#,
    );
    let mut a = args(file.path().to_path_buf(), NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    assert!(run(&a, &mut Vec::new()).is_ok());
    a.strict_deaths = true;
    let err = run(&a, &mut Vec::new()).unwrap_err();
    assert!(format!("{err:#}").contains("death_date"));
}
