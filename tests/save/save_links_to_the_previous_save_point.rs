use crate::common::SAVE_DATE;
use crate::common::command::{init_repository_dir, run_pit_command, save_and_get_fingerprint};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pit::artifacts::objects::fingerprint::Fingerprint;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

fn read_save_point(root: &std::path::Path, fingerprint: &str) -> Value {
    let content = std::fs::read(root.join(".pit").join("objects").join(fingerprint))
        .expect("Failed to read save point object");

    serde_json::from_slice(&content).expect("Save point is not JSON")
}

#[rstest]
fn save_links_to_the_previous_save_point(init_repository_dir: TempDir) {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("a.txt"), "one".to_string()));
    run_pit_command(root, &["add", "a.txt"]).assert().success();
    let first = save_and_get_fingerprint(root, "first");

    write_file(FileSpec::new(root.join("b.txt"), "two".to_string()));
    run_pit_command(root, &["add", "b.txt"]).assert().success();
    let second = save_and_get_fingerprint(root, "  second\n");

    assert_eq!(
        read_save_point(root, &first),
        json!({
            "message": "first",
            "timestamp": SAVE_DATE,
            "parent": "",
            "files": { "a.txt": Fingerprint::of("one").as_str() },
        })
    );
    // the message is stored as given and the cleared index leaves only b.txt
    assert_eq!(
        read_save_point(root, &second),
        json!({
            "message": "  second\n",
            "timestamp": SAVE_DATE,
            "parent": first,
            "files": { "b.txt": Fingerprint::of("two").as_str() },
        })
    );
}
