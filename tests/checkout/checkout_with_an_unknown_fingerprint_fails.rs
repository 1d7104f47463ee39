use crate::common::command::{read_ref, run_pit_command, saved_repository_dir};
use assert_fs::TempDir;
use pit::artifacts::objects::fingerprint::Fingerprint;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_with_an_unknown_fingerprint_fails(saved_repository_dir: TempDir) {
    let root = saved_repository_dir.path();
    let head = read_ref(root, "HEAD");
    let unknown = Fingerprint::of("never saved");

    run_pit_command(root, &["checkout", unknown.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!(
            "save point {unknown} not found"
        )));

    assert_eq!(read_ref(root, "HEAD"), head);
}
