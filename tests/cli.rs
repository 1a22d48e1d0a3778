use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/indicators_sample.csv");

fn findash() -> Command {
    let mut cmd = Command::cargo_bin("findash").unwrap();
    cmd.env_remove("FINDASH_DATA").arg("--data").arg(SAMPLE);
    cmd
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("findash").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("findash"));
}

#[test]
fn lists_indicators_and_regions() {
    findash()
        .arg("indicators")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Net National Income (USD)\tAdjusted net national income (current US$)",
        ))
        .stdout(predicate::str::contains("Poverty (Less Than $5.50 a Day)"));

    findash()
        .arg("regions")
        .assert()
        .success()
        .stdout(predicate::str::contains("North America: Canada; Costa Rica"));
}

#[test]
fn show_prints_cards_for_default_country_and_picks() {
    findash()
        .args(["show", "--country", "Morocco", "--country", "Atlantis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Adjusted Net National Income"))
        .stdout(predicate::str::contains("Egypt, Arab Rep."))
        .stdout(predicate::str::contains("Average: 222,000,000,000"))
        .stdout(predicate::str::contains("Max: 90,000,000,000  Year: 2013"))
        .stdout(predicate::str::contains("Atlantis").not());
}

#[test]
fn show_fresh_drops_the_default_country() {
    findash()
        .args([
            "show",
            "--fresh",
            "-i",
            "Consumer Prices Inflation",
            "-c",
            "Morocco",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Morocco\""))
        .stdout(predicate::str::contains("Egypt").not());
}

#[test]
fn show_writes_csv_and_json() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("s.csv");
    let json_path = dir.path().join("r.json");
    findash()
        .args(["show", "-c", "Morocco", "--out"])
        .arg(&csv_path)
        .arg("--json")
        .arg(&json_path)
        .assert()
        .success();
    let csv_txt = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv_txt.lines().count(), 1 + 5 + 4);
    assert!(json_path.exists());
}

#[test]
fn unknown_indicator_fails() {
    findash()
        .args(["show", "-i", "GDP"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown indicator"));
}

#[test]
fn missing_data_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("findash").unwrap();
    cmd.env_remove("FINDASH_DATA")
        .arg("--data")
        .arg(dir.path().join("missing.csv"))
        .arg("countries");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot start without"));
}

#[test]
fn replay_runs_one_session() {
    let dir = tempfile::tempdir().unwrap();
    let events = dir.path().join("events.jsonl");
    let mut f = std::fs::File::create(&events).unwrap();
    writeln!(f, r#"{{"indicator":"Consumer Prices Inflation","picks":[["World"],[]]}}"#).unwrap();
    writeln!(f, r#"{{"indicator":"Nope","picks":[["Morocco"]]}}"#).unwrap();
    writeln!(f).unwrap();
    writeln!(f, r#"{{"indicator":"Consumer Prices Inflation","reset_clicks":1}}"#).unwrap();
    drop(f);

    let out = findash()
        .args(["replay", "--events"])
        .arg(&events)
        .output()
        .unwrap();
    assert!(out.status.success());
    let lines: Vec<serde_json::Value> = String::from_utf8(out.stdout)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["selection"].as_array().unwrap().len(), 2);
    assert!(lines[1]["error"].as_str().unwrap().contains("Nope"));
    assert_eq!(lines[2]["selection"].as_array().unwrap().len(), 0);
}
