use crate::common::command::{init_repository_dir, run_pit_command, save_and_get_fingerprint};
use crate::common::file::{FileSpec, random_content, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(1)]
#[case(3)]
fn checkout_latest_restores_the_last_save_point(init_repository_dir: TempDir, #[case] saves: usize) {
    let root = init_repository_dir.path();
    let mut staged = Vec::new();

    for n in 0..saves {
        staged.clear();
        for name in ["a.txt", "nested/b.txt"] {
            let content = format!("{n}: {}", random_content());
            write_file(FileSpec::new(root.join(name), content.clone()));
            staged.push((name, content));
        }
        run_pit_command(root, &["add", "."]).assert().success();
        save_and_get_fingerprint(root, &format!("save point {n}"));
    }

    for (name, _) in &staged {
        write_file(FileSpec::new(root.join(name), "overwritten".to_string()));
    }

    let latest = crate::common::command::read_ref(root, "LATEST");
    run_pit_command(root, &["checkout", "latest"])
        .assert()
        .success()
        .stdout(format!("Successfully checked out save point {latest}\n"));

    for (name, content) in &staged {
        assert_eq!(&read_file(&root.join(name)), content);
    }
}
