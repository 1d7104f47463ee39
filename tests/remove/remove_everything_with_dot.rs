use crate::common::command::{init_repository_dir, read_index, run_pit_command};
use crate::common::file::{FileSpec, random_content, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn remove_everything_with_dot(init_repository_dir: TempDir) {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("a.txt"), random_content()));
    write_file(FileSpec::new(root.join("nested").join("b.txt"), random_content()));
    run_pit_command(root, &["add", "."]).assert().success();

    run_pit_command(root, &["remove", "."]).assert().success();

    assert_eq!(read_index(root), "");
}
