use crate::common::command::{
    init_repository_dir, read_index, read_ref, run_pit_command, save_and_get_fingerprint,
};
use crate::common::file::{FileSpec, random_content, write_file};
use assert_fs::TempDir;
use pit::artifacts::objects::fingerprint::Fingerprint;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn save_clears_index_and_advances_references(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("a.txt"), random_content()));
    run_pit_command(root, &["add", "a.txt"]).assert().success();

    let fingerprint = save_and_get_fingerprint(root, "first save point");

    Fingerprint::try_parse(fingerprint.as_str())?;
    assert_eq!(read_index(root), "");
    assert_eq!(read_ref(root, "HEAD"), fingerprint);
    assert_eq!(read_ref(root, "LATEST"), fingerprint);
    assert!(root.join(".pit").join("objects").join(&fingerprint).is_file());

    Ok(())
}
