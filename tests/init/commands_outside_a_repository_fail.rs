use crate::common::command::{repository_dir, run_pit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case(&["status"])]
#[case(&["log"])]
#[case(&["save", "message"])]
#[case(&["add", "."])]
#[case(&["remove", "."])]
#[case(&["checkout", "latest"])]
fn commands_outside_a_repository_fail(repository_dir: TempDir, #[case] args: &[&str]) {
    run_pit_command(repository_dir.path(), args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a pit repository"));

    assert!(!repository_dir.path().join(".pit").exists());
}
