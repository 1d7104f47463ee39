use crate::common::command::{
    init_repository_dir, read_ref, run_pit_command, save_and_get_fingerprint,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn save_after_checkout_forks_from_the_checked_out_save_point(init_repository_dir: TempDir) {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("a.txt"), "one".to_string()));
    run_pit_command(root, &["add", "a.txt"]).assert().success();
    let first = save_and_get_fingerprint(root, "first");

    write_file(FileSpec::new(root.join("a.txt"), "two".to_string()));
    run_pit_command(root, &["add", "a.txt"]).assert().success();
    let second = save_and_get_fingerprint(root, "second");

    run_pit_command(root, &["checkout", &first]).assert().success();
    assert_eq!(read_ref(root, "HEAD"), first);
    assert_eq!(read_ref(root, "LATEST"), second);

    write_file(FileSpec::new(root.join("a.txt"), "three".to_string()));
    run_pit_command(root, &["add", "a.txt"]).assert().success();
    let forked = save_and_get_fingerprint(root, "forked");

    let log = crate::common::command::stdout_of(root, &["log"]);
    let listed = log
        .lines()
        .filter_map(|line| line.strip_prefix("Save point: "))
        .collect::<Vec<_>>();
    assert_eq!(listed, vec![forked.as_str(), first.as_str()]);
    assert_eq!(read_ref(root, "LATEST"), forked);
}
