use crate::common::command::{init_repository_dir, read_index, run_pit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pit::artifacts::objects::fingerprint::Fingerprint;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_files_from_nested_directories_to_index_successfully(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("1.txt"), "one".to_string()));
    write_file(FileSpec::new(root.join("a").join("2.txt"), "two".to_string()));
    write_file(FileSpec::new(
        root.join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));
    write_file(FileSpec::new(root.join(".git").join("HEAD"), "ref".to_string()));

    run_pit_command(root, &["add", "."]).assert().success();

    let expected_index = format!(
        "1.txt {}\na/2.txt {}\na/b/3.txt {}",
        Fingerprint::of("one"),
        Fingerprint::of("two"),
        Fingerprint::of("three")
    );
    assert_eq!(read_index(root), expected_index);

    Ok(())
}
