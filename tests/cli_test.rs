/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::{DocsDirBuilder, PageBuilder, realistic_docs_dir};
use docs_search_index::load_index;
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_docs-search-index"));
    for var in [
        "DOCS_SEARCH_DOCS_DIR",
        "DOCS_SEARCH_BASE_URL",
        "DOCS_SEARCH_OUTPUT",
        "DOCS_SEARCH_MAX_CONTENT_CHARS",
        "DOCS_SEARCH_EXCLUDE",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_cli_build_writes_index() {
    let docs = realistic_docs_dir();

    cli()
        .arg("build")
        .arg("--docs-dir")
        .arg(docs.path())
        .arg("--base-url")
        .arg("/site")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generating search index..."))
        .stdout(predicate::str::contains("Generated search index with 4 documents"))
        .stdout(predicate::str::contains("search-index.json"));

    let index = load_index(&docs.path().join("search-index.json")).unwrap();
    assert_eq!(index.len(), 4);
    assert!(index.iter().all(|r| r.url.starts_with("/site/")));
}

#[test]
fn test_cli_build_reads_environment() {
    let docs = DocsDirBuilder::new()
        .with_page("guides/setup.md", PageBuilder::new().title("Setup"))
        .build();

    cli()
        .env("DOCS_SEARCH_DOCS_DIR", docs.path())
        .env("DOCS_SEARCH_BASE_URL", "https://docs.example.com")
        .env("DOCS_SEARCH_OUTPUT", "idx.json")
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated search index with 1 documents"));

    let index = load_index(&docs.path().join("idx.json")).unwrap();
    assert_eq!(index[0].url, "https://docs.example.com/guides/setup.html");
}

#[test]
fn test_cli_build_exclude_flag() {
    let docs = DocsDirBuilder::new()
        .with_file("README.md", "Readme text.")
        .with_file("CHANGELOG.md", "Changes.")
        .with_file("intro.md", "Intro.")
        .build();

    cli()
        .arg("build")
        .arg("--docs-dir")
        .arg(docs.path())
        .arg("--exclude")
        .arg("CHANGELOG.md")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated search index with 2 documents"));

    let titles: Vec<String> = load_index(&docs.path().join("search-index.json"))
        .unwrap()
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, vec!["Readme", "Intro"]);
}

#[test]
fn test_cli_build_missing_docs_dir_fails() {
    let temp = tempfile::TempDir::new().unwrap();

    cli()
        .arg("build")
        .arg("--docs-dir")
        .arg(temp.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Documentation directory not found"));
}

#[test]
fn test_cli_build_unreadable_file_fails_without_writing() {
    let docs = DocsDirBuilder::new().with_file("ok.md", "Fine.").build();
    std::fs::write(docs.path().join("broken.md"), [0xc3, 0x28]).unwrap();

    cli()
        .arg("build")
        .arg("--docs-dir")
        .arg(docs.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.md"));

    assert!(!docs.path().join("search-index.json").exists());
}

#[test]
fn test_cli_stats_command() {
    let docs = realistic_docs_dir();

    cli().arg("build").arg("--docs-dir").arg(docs.path()).assert().success();

    cli()
        .arg("stats")
        .arg("--docs-dir")
        .arg(docs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Search Index Statistics"))
        .stdout(predicate::str::contains("Documents: 4"))
        .stdout(predicate::str::contains("Duplicate URLs: 0"));
}

#[test]
fn test_cli_stats_without_index_fails() {
    let docs = DocsDirBuilder::new().build();

    cli()
        .arg("stats")
        .arg("--docs-dir")
        .arg(docs.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read search index"));
}

#[test]
fn test_cli_no_command_shows_help_message() {
    cli().assert().success().stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generate a JSON search index"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn test_cli_version_flag() {
    cli().arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    cli().arg("invalid-command").assert().failure();
}
