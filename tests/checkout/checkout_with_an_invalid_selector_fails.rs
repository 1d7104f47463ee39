use crate::common::command::{init_repository_dir, run_pit_command, saved_repository_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case("abc123")]
#[case("../../etc/passwd")]
#[case("Latest")]
fn checkout_with_an_invalid_selector_fails(saved_repository_dir: TempDir, #[case] selector: &str) {
    run_pit_command(saved_repository_dir.path(), &["checkout", selector])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid fingerprint"));
}

#[rstest]
fn checkout_latest_without_save_points_fails(init_repository_dir: TempDir) {
    run_pit_command(init_repository_dir.path(), &["checkout", "latest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no save points yet"));
}
