use crate::common::command::{init_repository_dir, read_index, run_pit_command};
use crate::common::file::{FileSpec, random_content, write_file};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Word;
use pit::artifacts::objects::fingerprint::Fingerprint;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_single_file_to_index_successfully(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    let file_name = format!("{}.txt", Word().fake::<String>());
    let content = random_content();
    write_file(FileSpec::new(root.join(&file_name), content.clone()));
    let fingerprint = Fingerprint::of(&content);

    run_pit_command(root, &["add", &file_name])
        .assert()
        .success()
        .stdout(format!("Added {file_name} (fingerprint: {fingerprint})\n"));

    assert_eq!(read_index(root), format!("{file_name} {fingerprint}"));
    assert_eq!(
        std::fs::read_to_string(root.join(".pit").join("objects").join(fingerprint.as_str()))?,
        content
    );

    Ok(())
}
