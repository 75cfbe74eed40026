use std::fs;
use std::path::{Path, PathBuf};

use geonotes::models::{Coordinates, NoteDraft, NoteEdit};
use geonotes::pins::{BlobStore, FileBlobStore, PINS_KEY};
use geonotes::{Config, Error, Notebook};
use tempfile::TempDir;

fn write_photo(dir: &Path, name: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, name.as_bytes()).unwrap();
    format!("file://{}", path.display())
}

fn draft(dir: &Path, title: &str) -> NoteDraft {
    NoteDraft {
        title: title.to_string(),
        body: format!("About {}", title),
        photo_source: Some(write_photo(dir, &format!("{}.png", title))),
        coordinates: Some(Coordinates::new(52.37, 4.89)),
        address: Some("Amsterdam".to_string()),
    }
}

#[test]
fn notes_survive_reopen_with_pins() {
    let tmp = TempDir::new().unwrap();
    let config = Config::at(tmp.path().join("home"));

    let (kept, dropped) = {
        let notebook = Notebook::open(&config).unwrap();
        let kept = notebook.create(draft(tmp.path(), "kept")).unwrap();
        let dropped = notebook.create(draft(tmp.path(), "dropped")).unwrap();
        notebook.set_pinned(&kept.id, true).unwrap();
        notebook.set_pinned(&dropped.id, true).unwrap();

        // Remove the row behind the notebook's back; the pin stays for now
        assert!(notebook.db().delete(&dropped.id).unwrap());
        (kept, dropped)
    };

    let notebook = Notebook::open(&config).unwrap();
    let listing = notebook.load().unwrap();

    assert_eq!(listing.pinned.len(), 1);
    assert_eq!(listing.pinned[0], kept);
    assert!(listing.general.is_empty());

    let raw = FileBlobStore::new(&config.state_dir).get(PINS_KEY).unwrap().unwrap();
    let ids: Vec<String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(ids, vec![kept.id.clone()]);
    assert!(!notebook.is_pinned(&dropped.id));
}

#[test]
fn edit_then_delete_leaves_no_photos_behind() {
    let tmp = TempDir::new().unwrap();
    let config = Config::at(tmp.path().join("home"));
    let notebook = Notebook::open(&config).unwrap();

    let note = notebook.create(draft(tmp.path(), "walk")).unwrap();
    let first_photo = PathBuf::from(&note.photo_path);
    assert!(first_photo.starts_with(&config.photos_dir));

    let edited = notebook
        .edit(
            &note.id,
            NoteEdit {
                title: "walk".to_string(),
                body: note.body.clone(),
                photo_source: write_photo(tmp.path(), "other"),
                coordinates: None,
                address: None,
            },
        )
        .unwrap();

    assert!(!first_photo.exists());
    assert!(edited.photo_path.ends_with(".jpg"));
    assert!(PathBuf::from(&edited.photo_path).exists());

    assert!(notebook.delete(&note.id).unwrap());
    assert_eq!(fs::read_dir(&config.photos_dir).unwrap().count(), 0);

    // Source images outside the notebook are untouched
    assert!(tmp.path().join("walk.png").exists());
}

#[test]
fn corrupt_pin_blob_does_not_block_loading() {
    let tmp = TempDir::new().unwrap();
    let config = Config::at(tmp.path().join("home"));
    let notebook = Notebook::open(&config).unwrap();
    notebook.create(draft(tmp.path(), "one")).unwrap();

    fs::write(config.state_dir.join(format!("{}.json", PINS_KEY)), "not json").unwrap();

    let listing = notebook.load().unwrap();
    assert_eq!(listing.general.len(), 1);
    assert!(listing.pinned.is_empty());
}

#[test]
fn remote_photo_sources_are_rejected() {
    let tmp = TempDir::new().unwrap();
    let notebook = Notebook::open(&Config::at(tmp.path())).unwrap();

    let mut d = draft(tmp.path(), "remote");
    d.photo_source = Some("https://x/y/photo.PNG?w=100".to_string());

    assert!(matches!(notebook.create(d), Err(Error::UnsupportedSource(_))));
    assert_eq!(notebook.db().count().unwrap(), 0);
}
