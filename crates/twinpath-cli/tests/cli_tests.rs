//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn twinpath() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("twinpath").unwrap()
}

/// Answers JSON with every psychometric item at 5 and every scored
/// technical question answered correctly.
const PERFECT_ANSWERS: &str = r#"{
    "psych_1": 5, "psych_2": 5, "psych_3": 5, "psych_4": 5, "psych_5": 5,
    "psych_6": 5, "psych_7": 5, "psych_8": 5, "psych_9": 5, "psych_10": 5,
    "tech_1": "360",
    "tech_2": "Array/List",
    "tech_3": "To create virtual replicas for simulation and optimization",
    "tech_4": "Unusual vibration patterns or temperature spikes",
    "tech_5": "Event-driven programming",
    "tech_7": "Internet of Things - connecting physical devices to the internet",
    "tech_8": "ANSYS or Siemens NX",
    "tech_10": "Immediate detection of issues and optimization opportunities"
}"#;

#[test]
fn validate_shipped_bank() {
    twinpath()
        .arg("validate")
        .arg("--bank")
        .arg("../../banks/digital-twin.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("20 questions"))
        .stdout(predicate::str::contains("All banks valid."));
}

#[test]
fn validate_directory() {
    twinpath()
        .arg("validate")
        .arg("--bank")
        .arg("../../banks")
        .assert()
        .success()
        .stdout(predicate::str::contains("Digital Twin Engineer Readiness"));
}

#[test]
fn validate_nonexistent_file() {
    twinpath()
        .arg("validate")
        .arg("--bank")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn validate_warns_about_broken_bank() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(
        &path,
        r#"
[bank]
id = "broken"
name = "Broken"

[[questions]]
id = "tech_1"
text = "Pick."
kind = "multiple-choice"
category = "technical"
options = ["a", "b"]
correct_answer = "c"
points = 5
"#,
    )
    .unwrap();

    twinpath()
        .arg("validate")
        .arg("--bank")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("not among the options"))
        .stdout(predicate::str::contains("1 warning(s) found."));
}

#[test]
fn questions_lists_the_builtin_bank() {
    twinpath()
        .arg("questions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Digital Twin Engineer Readiness"))
        .stdout(predicate::str::contains("psych_1"))
        .stdout(predicate::str::contains("tech_10"));
}

#[test]
fn questions_filters_by_category() {
    twinpath()
        .arg("questions")
        .arg("--category")
        .arg("technical")
        .assert()
        .success()
        .stdout(predicate::str::contains("tech_1"))
        .stdout(predicate::str::contains("10 question(s) shown"))
        .stdout(predicate::str::contains("psych_1").not());
}

#[test]
fn questions_rejects_unknown_category() {
    twinpath()
        .arg("questions")
        .arg("--category")
        .arg("social")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn score_empty_answers_does_not_fail() {
    let dir = TempDir::new().unwrap();
    let answers = dir.path().join("empty.json");
    std::fs::write(&answers, "{}").unwrap();

    twinpath()
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .arg("--output")
        .arg(dir.path().join("out"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommendation: No"))
        .stdout(predicate::str::contains("Technical Readiness"));
}

#[test]
fn score_perfect_answers_recommends_yes() {
    let dir = TempDir::new().unwrap();
    let answers = dir.path().join("perfect.json");
    std::fs::write(&answers, PERFECT_ANSWERS).unwrap();

    twinpath()
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .arg("--output")
        .arg(dir.path().join("out"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommendation: Yes"))
        .stdout(predicate::str::contains("100%"));
}

#[test]
fn score_writes_all_formats() {
    let dir = TempDir::new().unwrap();
    let answers = dir.path().join("empty.json");
    std::fs::write(&answers, "{}").unwrap();
    let out = dir.path().join("out");

    twinpath()
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .arg("--output")
        .arg(&out)
        .arg("--format")
        .arg("all")
        .assert()
        .success();

    let extensions: Vec<String> = std::fs::read_dir(&out)
        .unwrap()
        .map(|e| {
            e.unwrap()
                .path()
                .extension()
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    for ext in ["json", "html", "md"] {
        assert!(extensions.iter().any(|e| e == ext), "missing .{ext} report");
    }
}

#[test]
fn score_rejects_malformed_answers() {
    let dir = TempDir::new().unwrap();
    let answers = dir.path().join("bad.json");
    std::fs::write(&answers, "not json").unwrap();

    twinpath()
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse answers JSON"));
}

#[test]
fn report_rerenders_a_saved_report() {
    let dir = TempDir::new().unwrap();
    let answers = dir.path().join("perfect.json");
    std::fs::write(&answers, PERFECT_ANSWERS).unwrap();
    let out = dir.path().join("out");

    twinpath()
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let report_path = std::fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().path())
        .find(|p| p.extension().is_some_and(|e| e == "json"))
        .expect("score should write a JSON report");

    twinpath()
        .arg("report")
        .arg("--input")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommendation: Yes"));

    twinpath()
        .arg("report")
        .arg("--input")
        .arg(&report_path)
        .arg("--format")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Your Assessment Results"));
}

#[test]
fn run_requires_a_terminal() {
    twinpath()
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    twinpath()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created banks/custom.toml"))
        .stdout(predicate::str::contains("Created answers-sample.json"));

    assert!(dir.path().join("banks/custom.toml").exists());
    assert!(dir.path().join("answers-sample.json").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    twinpath().current_dir(dir.path()).arg("init").assert().success();

    twinpath()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    twinpath()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Digital Twin career-readiness assessment",
        ));
}

#[test]
fn version_output() {
    twinpath()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("twinpath"));
}
