// ABOUTME: Integration tests for the readscore binary.
// ABOUTME: Runs the binary in a temp working directory against a mock HTTP server.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const PAGE: &str = "<html><head><style>p{}</style></head><body>\
                    <p>Reading is one of the best ways to learn about the world. \
                    Some people read every day. Others read only when they must.</p>\
                    <script>track();</script></body></html>";

fn readscore_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("readscore").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn scores_pages_and_writes_csv() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/one");
        then.status(200).body(PAGE);
    });
    server.mock(|when, then| {
        when.method(GET).path("/two");
        then.status(200).body(PAGE);
    });

    let dir = TempDir::new().unwrap();
    // Loader input with padding and a blank line, per the file contract.
    fs::write(
        dir.path().join("urls.txt"),
        format!("  {} \n\n{}\n", server.url("/one"), server.url("/two")),
    )
    .unwrap();

    readscore_cmd(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Readability Scores:"))
        .stdout(predicate::str::contains(format!("URL: {}", server.url("/one"))))
        .stdout(predicate::str::contains(format!("URL: {}", server.url("/two"))))
        .stdout(predicate::str::contains("  flesch_reading_ease: "))
        .stdout(predicate::str::contains("  word_count: "))
        .stdout(predicate::str::contains("--------------------"))
        .stdout(predicate::str::contains(
            "Results saved to readability_results.csv",
        ));

    let csv = fs::read_to_string(dir.path().join("readability_results.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3, "header plus one row per URL");
    assert!(lines[0].starts_with("url,flesch_reading_ease,"));
    assert!(lines[0].ends_with(",character_count,word_count"));
    // Rows keep input order.
    assert!(lines[1].starts_with(&server.url("/one")));
    assert!(lines[2].starts_with(&server.url("/two")));
}

#[test]
fn failed_urls_are_skipped_not_fatal() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/gone");
        then.status(404);
    });
    server.mock(|when, then| {
        when.method(GET).path("/ok");
        then.status(200).body(PAGE);
    });

    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("urls.txt"),
        format!("{}\n{}\n", server.url("/gone"), server.url("/ok")),
    )
    .unwrap();

    readscore_cmd(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("URL: {}", server.url("/ok"))))
        .stdout(predicate::str::contains(format!("URL: {}", server.url("/gone"))).not());

    let csv = fs::read_to_string(dir.path().join("readability_results.csv")).unwrap();
    assert_eq!(csv.lines().count(), 2, "header plus the one surviving row");
}

#[test]
fn all_failures_prints_header_and_writes_no_csv() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/gone");
        then.status(404);
    });

    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("urls.txt"), format!("{}\n", server.url("/gone"))).unwrap();

    readscore_cmd(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Readability Scores:"))
        .stdout(predicate::str::contains("URL: ").not())
        .stdout(predicate::str::contains("Results saved").not());

    assert!(!dir.path().join("readability_results.csv").exists());
}

#[test]
fn missing_url_file_aborts_without_output() {
    let dir = TempDir::new().unwrap();

    readscore_cmd(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Readability Scores:").not())
        .stderr(predicate::str::contains("could not load url list"));

    assert!(!dir.path().join("readability_results.csv").exists());
}
