use crate::common::command::{init_repository_dir, read_index, run_pit_command};
use crate::common::file::{FileSpec, random_content, write_file};
use assert_fs::TempDir;
use pit::artifacts::objects::fingerprint::Fingerprint;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn adding_a_non_existent_file_is_skipped(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    let content = random_content();
    write_file(FileSpec::new(root.join("valid.txt"), content.clone()));

    run_pit_command(root, &["add", "valid.txt", "missing.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added valid.txt"))
        .stderr(predicate::str::contains("missing.txt"));

    assert_eq!(
        read_index(root),
        format!("valid.txt {}", Fingerprint::of(&content))
    );

    Ok(())
}
