//! CLI command integration tests.
//! Config-dependent tests write their TOML into a temp directory; the rest
//! clear SAJU_CONFIG so the built-in defaults apply.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn saju_cmd() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("saju").unwrap();
    cmd.env_remove("SAJU_CONFIG");
    cmd
}

const BIRTH: [&str; 6] = ["--date", "1990-05-15", "--time", "14:30", "--gender", "male"];

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn pillar_lookup() {
    saju_cmd()
        .args(["pillar", "甲", "子"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 甲子 갑자"));

    saju_cmd()
        .args(["pillar", "계", "해"])
        .assert()
        .success()
        .stdout(predicate::str::contains("60 癸亥"));
}

#[test]
fn pillar_polarity_mismatch_fails() {
    saju_cmd()
        .args(["pillar", "甲", "丑"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[POLARITY_MISMATCH]"));
}

#[test]
fn pillar_unknown_glyph_fails() {
    saju_cmd()
        .args(["pillar", "X", "子"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[INVALID_STEM]"));
}

#[test]
fn year_pillar_2024() {
    saju_cmd()
        .args(["year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024 甲辰 갑진 #41"));
}

#[test]
fn validate_accepts_good_input() {
    saju_cmd()
        .arg("validate")
        .args(BIRTH)
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn validate_reports_every_bad_field() {
    saju_cmd()
        .args(["validate", "--date", "1990/05/15", "--time", "25:00", "--gender", "x"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("date: [INVALID_DATE_FORMAT]"))
        .stdout(predicate::str::contains("time: [INVALID_HOUR]"))
        .stdout(predicate::str::contains("gender: [INVALID_GENDER]"))
        .stderr(predicate::str::contains("[VALIDATION_FAILED]"));
}

#[test]
fn validate_json_report() {
    let v = json_stdout(
        saju_cmd()
            .args(["validate", "--json", "--date", "2000-01-01", "--gender", "여"]),
    );
    assert!(v["errors"].as_array().unwrap().is_empty());
}

#[test]
fn saeun_lists_consecutive_years() {
    saju_cmd()
        .args(["saeun", "2024", "3", "--day-master", "甲"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024 甲辰"))
        .stdout(predicate::str::contains("2025 乙巳"))
        .stdout(predicate::str::contains("2026 丙午"));
}

#[test]
fn saeun_rejects_bad_day_master() {
    saju_cmd()
        .args(["saeun", "2024", "3", "--day-master", "子"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[INVALID_STEM]"));
}

#[test]
fn wolun_starts_at_tiger_month() {
    let v = json_stdout(saju_cmd().args(["wolun", "2024", "--day-master", "甲", "--json"]));
    let months = v.as_array().unwrap();
    assert_eq!(months.len(), 12);
    assert_eq!(months[0]["pillar"]["hanja"], "丙寅");
    assert_eq!(months[11]["pillar"]["hanja"], "丁丑");
}

#[test]
fn iljin_json_covers_month() {
    let v = json_stdout(saju_cmd().args(["iljin", "2000", "1", "--day-master", "戊", "--json"]));
    let days = v.as_array().unwrap();
    assert_eq!(days.len(), 31);
    assert_eq!(days[0]["pillar"]["hanja"], "戊午");
    assert_eq!(days[1]["pillar"]["hanja"], "己未");
}

#[test]
fn chart_json() {
    let v = json_stdout(saju_cmd().args(["chart", "--date", "2000-01-01", "--gender", "male"]));
    assert_eq!(v["pillars"]["day"]["hanja"], "戊午");
    assert_eq!(v["pillars"]["hour"], serde_json::Value::Null);
    assert_eq!(v["ilju"]["index"], 55);
    assert_eq!(v["gongmang"].as_array().unwrap().len(), 2);
    assert!(!v["daeun"]["entries"].as_array().unwrap().is_empty());
    assert!(v["interactions"]["summary"].is_object());
}

#[test]
fn chart_rejects_out_of_range_year() {
    saju_cmd()
        .args(["chart", "--date", "1850-01-01", "--gender", "male"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("date: [DATE_OUT_OF_RANGE]"));
}

#[test]
fn interactions_text() {
    saju_cmd()
        .args(["interactions", "--year", "子", "--month", "丑", "--day", "午"])
        .assert()
        .success()
        .stdout(predicate::str::contains("육합 子丑"))
        .stdout(predicate::str::contains("충 子午"))
        .stdout(predicate::str::contains("warning:"));
}

#[test]
fn interactions_with_transit() {
    let v = json_stdout(saju_cmd().args([
        "interactions",
        "--year",
        "申",
        "--month",
        "酉",
        "--day",
        "子",
        "--transit",
        "午",
        "--json",
    ]));
    let found = v["interactions"]
        .as_array()
        .unwrap()
        .iter()
        .any(|i| i["kind"] == "Chung");
    assert!(found);
}

#[test]
fn score_uses_chart_file() {
    let dir = TempDir::new().unwrap();
    let chart = dir.path().join("chart.json");
    std::fs::write(&chart, r#"{"progressed_moon_house": 10}"#).unwrap();

    let args = ["score", "--event", "career", "--target", "2025-03-03", "--json"];
    let plain = json_stdout(saju_cmd().args(args).args(BIRTH));
    let boosted = json_stdout(saju_cmd().args(args).args(BIRTH).arg("--chart").arg(&chart));

    let a = plain["result"]["score"].as_f64().unwrap();
    let b = boosted["result"]["score"].as_f64().unwrap();
    assert_eq!(b - a, 8.0);
}

#[test]
fn score_text_shows_grade() {
    saju_cmd()
        .args(["score", "--event", "결혼", "--target", "2025-03-03", "--yongsin", "wood"])
        .args(BIRTH)
        .assert()
        .success()
        .stdout(predicate::str::contains("marriage 2025-03-03"));
}

#[test]
fn score_rejects_unknown_event() {
    saju_cmd()
        .args(["score", "--event", "party", "--target", "2025-03-03"])
        .args(BIRTH)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown event"));
}

#[test]
fn best_days_top_n() {
    let output = saju_cmd()
        .args(["best-days", "--event", "exam", "2025", "6", "--top", "3"])
        .args(BIRTH)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.lines().all(|l| l.starts_with("2025-06-")));
}

#[test]
fn config_file_narrows_year_range() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("saju.toml");
    std::fs::write(&config, "min_year = 2000\nmax_year = 2010\n").unwrap();

    saju_cmd()
        .arg("validate")
        .args(BIRTH)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("date: [DATE_OUT_OF_RANGE]"));
}

#[test]
fn config_from_environment() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("saju.toml");
    std::fs::write(&config, "min_year = 2000\nmax_year = 2010\n").unwrap();

    saju_cmd()
        .env("SAJU_CONFIG", &config)
        .arg("validate")
        .args(BIRTH)
        .assert()
        .failure()
        .stdout(predicate::str::contains("DATE_OUT_OF_RANGE"));
}

#[test]
fn inverted_config_range_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("saju.toml");
    std::fs::write(&config, "min_year = 2100\nmax_year = 1900\n").unwrap();

    saju_cmd()
        .args(["year", "2024", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("[DATE_OUT_OF_RANGE]"));
}

#[test]
fn korean_error_messages() {
    saju_cmd()
        .args(["validate", "--lang", "ko", "--date", "1990-05-15", "--gender", "x"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("gender: [INVALID_GENDER]"))
        .stderr(predicate::str::contains("입력값 검증 실패"));
}

#[test]
fn config_wider_than_term_tables_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("saju.toml");
    std::fs::write(&config, "min_year = 1000\nmax_year = 9999\n").unwrap();

    saju_cmd()
        .arg("validate")
        .args(["--date", "5000-02-10", "--gender", "male"])
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("[DATE_OUT_OF_RANGE]"))
        .stdout(predicate::str::contains("valid").not());
}

#[test]
fn saeun_past_max_year_is_empty() {
    saju_cmd()
        .args(["saeun", "2147483646", "3", "--day-master", "甲"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
