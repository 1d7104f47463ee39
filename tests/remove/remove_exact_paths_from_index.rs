use crate::common::command::{init_repository_dir, read_index, run_pit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pit::artifacts::objects::fingerprint::Fingerprint;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn remove_exact_paths_from_index(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("a.txt"), "a".to_string()));
    write_file(FileSpec::new(root.join("a.txt.bak"), "bak".to_string()));
    write_file(FileSpec::new(root.join("b.txt"), "b".to_string()));
    run_pit_command(root, &["add", "."]).assert().success();

    run_pit_command(root, &["remove", "a.txt", "b.txt"])
        .assert()
        .success();

    assert_eq!(
        read_index(root),
        format!("a.txt.bak {}", Fingerprint::of("bak"))
    );
    assert!(root.join("a.txt").is_file(), "Unstaging must not delete the file");

    Ok(())
}
