use crate::common::command::{init_repository_dir, stdout_of};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_log_with_no_save_points(init_repository_dir: TempDir) {
    assert_eq!(
        stdout_of(init_repository_dir.path(), &["log"]),
        "No save points yet.\n"
    );
}
