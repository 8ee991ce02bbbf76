//! Integration tests for the srichka CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn srichka() -> Command {
    Command::cargo_bin("srichka").unwrap()
}

#[test]
fn test_split_words_from_arguments() {
    srichka()
        .args(["split", "сестра", "безразличен"])
        .assert()
        .success()
        .stdout("сестра --> се-стра\nбезразличен --> без-раз-ли-чен\n");
}

#[test]
fn test_split_file() {
    srichka()
        .args(["split", "-q", "-i", &fixture_path("words.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Безразличен --> без-раз-ли-чен"))
        .stdout(predicate::str::contains("нощница --> нощ-ни-ца"))
        .stdout(predicate::str::contains("и --> и"))
        .stdout(predicate::str::contains("Калайджия --> ка-лай-джи-я"))
        .stdout(predicate::str::contains("над.живея --> над-жи-ве-я"));
}

#[test]
fn test_forced_break_inside_word_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("marked.txt");
    fs::write(&input_path, "сест.ра сестра.
(над.живея)
").unwrap();

    srichka()
        .args(["split", "-q", "-i", input_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("сест.ра --> сест-ра\nсестра --> се-стра\nнад.живея --> над-жи-ве-я\n");

    let output = srichka()
        .args(["split", "-q", "-f", "json", "-i", input_path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["boundaries"][0]["position"], 5);
    assert_eq!(parsed[0]["boundaries"][0]["rule"], "forced_break");
    assert_eq!(parsed[1]["boundaries"][0]["rule"], "rising_sonority");
}

#[test]
fn test_split_stdin() {
    srichka()
        .arg("split")
        .write_stdin("ами\nпринц\n")
        .assert()
        .success()
        .stdout("ами --> а-ми\nпринц --> принц\n");
}

#[test]
fn test_custom_separator() {
    srichka()
        .args(["split", "--separator", "·", "барабан"])
        .assert()
        .success()
        .stdout("барабан --> ба·ра·бан\n");
}

#[test]
fn test_json_output() {
    let output = srichka()
        .args(["split", "-f", "json", "безличен"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["word"], "безличен");
    assert_eq!(parsed[0]["syllables"][0], "без");
    assert_eq!(parsed[0]["boundaries"][0]["position"], 3);
    assert_eq!(parsed[0]["boundaries"][0]["rule"], "prefix_boundary");
}

#[test]
fn test_markdown_output() {
    srichka()
        .args(["split", "-f", "markdown", "-q", "-i", &fixture_path("prefixed.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. **безименен**: бе-зи-ме-нен"))
        .stdout(predicate::str::contains("2. **бездомен**: без-до-мен"))
        .stdout(predicate::str::contains("*Total words: 3*"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output.txt");

    srichka()
        .args(["split", "-o", output_path.to_str().unwrap(), "нощница"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_path).unwrap();
    assert_eq!(content, "нощница --> нощ-ни-ца\n");
}

#[test]
fn test_glob_pattern() {
    srichka()
        .args(["split", "-q", "-i", "tests/fixtures/*.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("неизменен --> не-из-ме-нен"))
        .stdout(predicate::str::contains("сестра --> се-стра"));
}

#[test]
fn test_invalid_file() {
    srichka()
        .args(["split", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_cli_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("srichka.toml");
    fs::write(&config_path, "[output]\nseparator = \"|\"\n").unwrap();

    srichka()
        .args(["split", "-c", config_path.to_str().unwrap(), "сестра"])
        .assert()
        .success()
        .stdout("сестра --> се|стра\n");
}

#[test]
fn test_custom_rules_file() {
    let temp_dir = TempDir::new().unwrap();
    let rules_path = temp_dir.path().join("rules.toml");
    fs::write(
        &rules_path,
        "[metadata]\ncode = \"bare\"\nname = \"No tables\"\n",
    )
    .unwrap();

    srichka()
        .args(["split", "--rules", rules_path.to_str().unwrap(), "безличен"])
        .assert()
        .success()
        .stdout("безличен --> бе-зли-чен\n");
}

#[test]
fn test_contour_command() {
    srichka()
        .args(["contour", "сестра", "щека"])
        .assert()
        .success()
        .stdout("сестра --> 141234\nщека --> 12424\n");
}

#[test]
fn test_generate_and_validate_rules() {
    let temp_dir = TempDir::new().unwrap();
    let rules_path = temp_dir.path().join("rules.toml");

    srichka()
        .args(["generate-config", "-o", rules_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rules template generated successfully"));

    srichka()
        .args(["validate", "-c", rules_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rules are valid"))
        .stdout(predicate::str::contains("Prefixes: 20"));
}

#[test]
fn test_validate_invalid_rules() {
    let temp_dir = TempDir::new().unwrap();
    let rules_path = temp_dir.path().join("invalid.toml");
    fs::write(
        &rules_path,
        "[metadata]\ncode = \"x\"\nname = \"X\"\n\n[clusters]\nkeep = [\"ст\"]\n\n[clusters.split]\n\"ст\" = 1\n",
    )
    .unwrap();

    srichka()
        .args(["validate", "-c", rules_path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Rules are invalid"))
        .stdout(predicate::str::contains("listed both as kept and as split"));
}

#[test]
fn test_help_command() {
    srichka()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("split"))
        .stdout(predicate::str::contains("contour"));
}

#[test]
fn test_list_prefixes() {
    srichka()
        .args(["list", "prefixes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("безраз (без + раз)"));
}

#[test]
fn test_list_formats() {
    srichka()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}
