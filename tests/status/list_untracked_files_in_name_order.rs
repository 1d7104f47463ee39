use crate::common::command::{init_repository_dir, stdout_of};
use crate::common::file::{FileSpec, random_content, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_untracked_files_in_name_order(init_repository_dir: TempDir) {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("file.txt"), random_content()));
    write_file(FileSpec::new(root.join("another.txt"), random_content()));
    write_file(FileSpec::new(root.join("dir").join("nested.txt"), random_content()));
    write_file(FileSpec::new(root.join(".git").join("config"), random_content()));

    let expected_output = "=== Staged ===\n\
        \n\
        === Modified but not Staged ===\n\
        \n\
        === Untracked Files ===\n\
        another.txt\n\
        dir/nested.txt\n\
        file.txt\n\
        \n\
        === Deleted ===\n";

    assert_eq!(stdout_of(root, &["status"]), expected_output);
}
