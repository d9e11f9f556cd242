//! End-to-end tests for manifest handling: malformed lines, comments and
//! quote stripping, observed through the CLI.

mod common;
use common::prelude::*;

/// A malformed line (two fields) is reported and skipped; the run does not
/// crash and valid lines survive.
#[test]
fn test_malformed_line_is_reported_and_skipped() {
    let fixture = TestFixture::new().with_manifest(
        "github \"acme/widget\" \"1.2.0\"\n\
         github \"acme/broken\"\n\
         github \"acme/gadget\" \"2.0.0\"\n",
    );

    fixture
        .command()
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("acme/widget"))
        .stdout(predicate::str::contains("acme/gadget"))
        .stdout(predicate::str::contains("acme/broken").not())
        .stderr(predicate::str::contains("Malformed manifest line 2"));
}

/// The clone command also reports malformed lines without failing the run.
#[test]
fn test_clone_survives_malformed_line() {
    let fixture = TestFixture::new().with_manifest(
        "github \"acme/broken\"\n\
         github \"acme/widget\" \"1.2.0\"\n",
    );

    // Empty selection: the run is a no-op but still parses and reports
    fixture
        .command()
        .arg("clone")
        .assert()
        .success()
        .stderr(predicate::str::contains("Malformed manifest line 1"));
}

/// Quotes are stripped from every field.
#[test]
fn test_quotes_are_stripped() {
    let fixture = TestFixture::new().with_manifest("github \"acme/widget\" \"1.2.0\"\n");

    fixture
        .command()
        .arg("ls")
        .arg("--short")
        .assert()
        .success()
        .stdout(predicate::str::diff("acme/widget\n"));
}

/// Comment lines never contribute entries.
#[test]
fn test_comments_are_ignored() {
    let fixture = TestFixture::new().with_manifest(
        "# a comment\n\
         # github \"acme/old\" \"0.1.0\"\n\
         github \"acme/widget\" \"1.2.0\"\n",
    );

    fixture
        .command()
        .arg("ls")
        .arg("--short")
        .assert()
        .success()
        .stdout(predicate::str::diff("acme/widget\n"));
}
