//! Integration tests for the contextguard CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn contextguard() -> Command {
    Command::cargo_bin("contextguard").unwrap()
}

#[test]
fn test_extract_article() {
    let mut cmd = contextguard();
    cmd.arg("extract")
        .arg("-i")
        .arg(fixture_path("article.html"))
        .arg("-f")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"source_kind\": \"ARTICLE\""))
        .stdout(predicate::str::contains("The city opened a new footbridge"))
        .stdout(predicate::str::contains("Ferry schedules").not())
        .stdout(predicate::str::contains("Home | World").not())
        .stdout(predicate::str::contains("tracking").not());
}

#[test]
fn test_extract_selection_wins() {
    let mut cmd = contextguard();
    cmd.arg("extract")
        .arg("-i")
        .arg(fixture_path("article.html"))
        .arg("--select")
        .arg("two years to build")
        .arg("-f")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"source_kind\": \"SELECTION\""))
        .stdout(predicate::str::contains("\"has_selection\": true"))
        .stdout(predicate::str::contains("\"text\": \"two years to build\""));
}

#[test]
fn test_extract_missing_selection() {
    let mut cmd = contextguard();
    cmd.arg("extract")
        .arg("-i")
        .arg(fixture_path("article.html"))
        .arg("--select")
        .arg("not on the page");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Selection not found"));
}

#[test]
fn test_translate_placeholder() {
    let mut cmd = contextguard();
    cmd.arg("adapt")
        .arg("translate")
        .arg("-i")
        .arg(fixture_path("notes.txt"))
        .arg("--target-language")
        .arg("fr");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[Translation to French (fr)"))
        .stdout(predicate::str::contains("hello world"));
}

#[test]
fn test_adapt_json_result_shape() {
    let mut cmd = contextguard();
    cmd.arg("adapt")
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("article.html"))
        .arg("-f")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"success\": true"))
        .stdout(predicate::str::contains("\"method\": \"fallback\""))
        .stdout(predicate::str::contains("\"operation\": \"summarize\""));
}

#[test]
fn test_proofread_and_replace_selection() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("club.html");

    let mut cmd = contextguard();
    cmd.arg("adapt")
        .arg("proofread")
        .arg("-i")
        .arg(fixture_path("club.html"))
        .arg("--select")
        .arg("i hope  you can join us.")
        .arg("--replace-output")
        .arg(&output_file);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("I hope you can join us."));

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("<p>I hope you can join us.</p>"));
    assert!(content.contains("Welcome to the garden club .we meet"));
    assert!(!content.contains("i hope  you"));
}

#[test]
fn test_replace_needs_html_input() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("out.html");

    let mut cmd = contextguard();
    cmd.arg("adapt")
        .arg("proofread")
        .arg("-i")
        .arg(fixture_path("notes.txt"))
        .arg("--select")
        .arg("hello  world")
        .arg("--replace-output")
        .arg(&output_file);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Replace failed"));
    assert!(!output_file.exists());
}

#[test]
fn test_empty_page_has_nothing_to_process() {
    let mut cmd = contextguard();
    cmd.arg("adapt")
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("empty.html"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no content was found"));
}

#[test]
fn test_check_grammar() {
    let mut cmd = contextguard();
    cmd.arg("check-grammar")
        .arg("-i")
        .arg(fixture_path("notes.txt"))
        .arg("-f")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"has_issues\": true"))
        .stdout(predicate::str::contains("Collapse repeated whitespace"))
        .stdout(predicate::str::contains("Capitalize the pronoun"));
}

#[test]
fn test_improve_from_stdin() {
    let mut cmd = contextguard();
    cmd.arg("improve")
        .arg("-i")
        .arg("-")
        .write_stdin("hello  there");

    cmd.assert().success().stdout("Hello there\n");
}

#[test]
fn test_analyze_markdown() {
    let mut cmd = contextguard();
    cmd.arg("analyze")
        .arg("-i")
        .arg(fixture_path("notes.txt"))
        .arg("-f")
        .arg("markdown");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("## Text analysis"))
        .stdout(predicate::str::contains("| Paragraphs | 2 |"));
}

#[test]
fn test_alt_text() {
    let mut cmd = contextguard();
    cmd.arg("alt-text")
        .arg("-i")
        .arg(fixture_path("images.html"))
        .arg("-f")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Image from cdn.example.com: Quarterly sales by region",
        ))
        .stdout(predicate::str::contains("Company logo"));
}

#[test]
fn test_preference_file_sets_tone() {
    let temp_dir = TempDir::new().unwrap();
    let prefs = temp_dir.path().join("prefs.toml");
    fs::write(&prefs, "tone = \"formal\"\n").unwrap();
    let input = temp_dir.path().join("note.txt");
    fs::write(
        &input,
        "I can't attend the meeting because it's late and we don't have time.",
    )
    .unwrap();

    let mut cmd = contextguard();
    cmd.arg("adapt")
        .arg("rewrite")
        .arg("-i")
        .arg(&input)
        .arg("-p")
        .arg(&prefs);

    cmd.assert().success().stdout(predicate::str::contains(
        "I cannot attend the meeting because it is late and we do not have time.",
    ));
}

#[test]
fn test_tone_flag_beats_preference_file() {
    let temp_dir = TempDir::new().unwrap();
    let prefs = temp_dir.path().join("prefs.toml");
    fs::write(&prefs, "tone = \"formal\"\n").unwrap();
    let input = temp_dir.path().join("note.txt");
    fs::write(&input, "I do not think it is ready yet, so we cannot ship today.").unwrap();

    let mut cmd = contextguard();
    cmd.arg("adapt")
        .arg("rewrite")
        .arg("-i")
        .arg(&input)
        .arg("-p")
        .arg(&prefs)
        .arg("--tone")
        .arg("friendly");

    cmd.assert().success().stdout(predicate::str::contains(
        "I don't think it's ready yet, so we can't ship today.",
    ));
}

#[test]
fn test_config_default_format() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("contextguard.toml");
    fs::write(&config, "[output]\ndefault_format = \"json\"\npretty_json = false\n").unwrap();

    let mut cmd = contextguard();
    cmd.arg("extract")
        .arg("-i")
        .arg(fixture_path("article.html"))
        .arg("-c")
        .arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"source_kind\":\"ARTICLE\""));
}

#[test]
fn test_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "[engine]\nmax_input_chars = 0\n").unwrap();

    let mut cmd = contextguard();
    cmd.arg("extract")
        .arg("-i")
        .arg(fixture_path("article.html"))
        .arg("-c")
        .arg(&config);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("extract.txt");

    let mut cmd = contextguard();
    cmd.arg("extract")
        .arg("-i")
        .arg(fixture_path("article.html"))
        .arg("-o")
        .arg(&output_file);

    cmd.assert().success().stdout("");

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.starts_with("New footbridge opens over the harbor"));
}

#[test]
fn test_generate_config() {
    let mut cmd = contextguard();
    cmd.arg("generate-config");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[engine]"))
        .stdout(predicate::str::contains("max_input_chars = 10000"))
        .stdout(predicate::str::contains("[output]"));
}

#[test]
fn test_invalid_file() {
    let mut cmd = contextguard();
    cmd.arg("extract").arg("-i").arg("nonexistent.html");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_help_command() {
    let mut cmd = contextguard();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("adapt"))
        .stdout(predicate::str::contains("alt-text"));
}

#[test]
fn test_list_tones() {
    let mut cmd = contextguard();
    cmd.arg("list").arg("tones");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("formal"))
        .stdout(predicate::str::contains("friendly"));
}
