use fspath_kit::{ErrorKind, env, fs, join};

fn main() -> anyhow::Result<()> {
    let tmp = env::temp_dir();
    println!("Temp dir: {}", tmp);

    // creates `<tmp>/my_workspace` if it's not there yet
    let root = join!(tmp, "my_workspace");
    root.mkdir_if_not_exists()?;

    // creates `<tmp>/my_workspace/docs/drafts` with every missing parent
    join!(root, "docs", "drafts").mkdir_parents()?;

    // a second plain mkdir of the same directory reports a typed error
    let err = fs::mkdir(join!(root, "docs")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    println!("Expected failure: {}", err);

    // drops an empty file next to the drafts
    let note = env::generate_tmp_filename(join!(root, "docs"), "note_")?;
    println!("Created {} (extension: {})", note, note.extension());

    // lists `docs`; entry types are resolved only when asked for
    for entry in fs::iter_dir(join!(root, "docs"))? {
        let entry = entry?;
        let kind = if entry.is_dir()? { "dir " } else { "file" };
        println!("{} {}", kind, entry.name());
    }

    // removes the whole workspace
    fs::rmrf(&root)?;
    assert!(!root.exists());

    Ok(())
}
