//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("linkbrief")
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

#[test]
fn test_cli_file_input_json() {
    let output = cmd()
        .args(["--base-url", "https://slowcup.example/guides/brewing"])
        .arg(get_fixture_path("article.html"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let record: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(record["url"], "https://slowcup.example/guides/brewing");
    assert_eq!(record["title"], "Brewing Better Coffee at Home | The Slow Cup");
    assert_eq!(record["content_stats"]["heading_count"], 4);
}

#[test]
fn test_cli_stdin_input() {
    let html = std::fs::read_to_string(get_fixture_path("news.html")).unwrap();
    cmd()
        .args(["-f", "text", "-"])
        .write_stdin(html)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Title: City Council Approves New Bike Lanes"));
}

#[test]
fn test_cli_prompt_format() {
    cmd()
        .args(["-f", "prompt", &get_fixture_path("news.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Please summarize the following webpage content:"))
        .stdout(predicate::str::contains("Content type: news_article"));
}

#[test]
fn test_cli_bookmark_format() {
    cmd()
        .args([
            "-f",
            "bookmark",
            "--base-url",
            "https://slowcup.example/guides/brewing",
            &get_fixture_path("article.html"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"thumbnail\":\"https://slowcup.example/static/img/coffee-cover.jpg\"",
        ));
}

#[test]
fn test_cli_pretty_json() {
    cmd()
        .args(["--pretty", &get_fixture_path("article.html")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\n"));
}

#[test]
fn test_cli_max_ai_chars() {
    cmd()
        .args(["-f", "text", "--max-ai-chars", "10", &get_fixture_path("article.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Content: Brewing Be..."));
}

#[test]
fn test_cli_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("record.json");

    cmd()
        .args(["-o", output.to_str().unwrap()])
        .arg(get_fixture_path("article.html"))
        .assert()
        .success();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("\"ai_ready_text\""));
}

#[test]
fn test_cli_empty_content_still_succeeds() {
    cmd()
        .args(["-f", "json", &get_fixture_path("empty_content.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"main_content\":\"\""));
}

#[test]
fn test_cli_malformed_html() {
    cmd()
        .args(["-f", "text", &get_fixture_path("malformed_html.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("never closes"));
}

#[test]
fn test_cli_invalid_file() {
    cmd().arg("nonexistent.html").assert().failure();
}

#[test]
fn test_cli_invalid_format() {
    cmd()
        .args(["-f", "yaml", &get_fixture_path("article.html")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format"));
}

#[test]
fn test_cli_invalid_base_url() {
    cmd()
        .args(["--base-url", "not a url", &get_fixture_path("article.html")])
        .assert()
        .failure();
}

#[test]
fn test_cli_rejects_unbookmarkable_url() {
    cmd()
        .arg("https://nodot")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a bookmarkable URL"));
}

#[test]
fn test_cli_verbose() {
    cmd()
        .args(["-v", &get_fixture_path("article.html")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Linkbrief"));
}
