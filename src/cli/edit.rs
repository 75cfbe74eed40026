use anyhow::{anyhow, Result};

use crate::capture::{FixedLocation, ImageSource, PathImageSource};
use crate::cli::add::locate;
use crate::models::{Coordinates, NoteEdit};
use crate::notebook::Notebook;

/// Changes requested on the command line. Unset fields keep their value.
#[derive(Debug, Default)]
pub struct EditRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub photo: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub address: Option<String>,
    pub clear_location: bool,
}

/// Execute the edit command
pub fn run_edit(notebook: &Notebook, id: &str, request: EditRequest) -> Result<()> {
    let id = id.trim();
    if id.is_empty() {
        return Err(anyhow!("Note id cannot be empty."));
    }

    let Some(note) = notebook.get(id)? else {
        println!("No note found with ID: {}", id);
        return Ok(());
    };

    let photo_source = PathImageSource::new(request.photo)
        .pick()?
        .unwrap_or_else(|| note.photo_path.clone());

    let (coordinates, address) = if request.clear_location {
        (None, None)
    } else if let Some(c) = request.coordinates {
        let fix = locate(&FixedLocation::new(c, request.address.clone()));
        (
            fix.as_ref().map(|f| f.coordinates),
            request.address.or_else(|| fix.and_then(|f| f.address)),
        )
    } else {
        (note.coordinates, request.address.or(note.address.clone()))
    };

    let edit = NoteEdit {
        title: request.title.unwrap_or_else(|| note.title.clone()),
        body: request.body.unwrap_or_else(|| note.body.clone()),
        photo_source,
        coordinates,
        address,
    };

    notebook.edit(&note.id, edit)?;
    println!("Saved.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::NoteDraft;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Notebook, String) {
        let tmp = TempDir::new().unwrap();
        let notebook = Notebook::open(&Config::at(tmp.path().join("home"))).unwrap();
        let photo = tmp.path().join("a.jpg");
        std::fs::write(&photo, b"a").unwrap();
        let note = notebook
            .create(NoteDraft {
                title: "Old".into(),
                body: "Body".into(),
                photo_source: Some(photo.to_string_lossy().into_owned()),
                coordinates: Some(Coordinates::new(1.0, 2.0)),
                address: Some("Here".into()),
            })
            .unwrap();
        (tmp, notebook, note.id)
    }

    #[test]
    fn test_edit_title_keeps_rest() {
        let (_tmp, notebook, id) = setup();
        let before = notebook.get(&id).unwrap().unwrap();

        run_edit(
            &notebook,
            &id,
            EditRequest {
                title: Some("New".into()),
                ..Default::default()
            },
        )
        .unwrap();

        let after = notebook.get(&id).unwrap().unwrap();
        assert_eq!(after.title, "New");
        assert_eq!(after.body, before.body);
        assert_eq!(after.photo_path, before.photo_path);
        assert_eq!(after.coordinates, before.coordinates);
        assert_eq!(after.address, before.address);
    }

    #[test]
    fn test_edit_clear_location() {
        let (_tmp, notebook, id) = setup();
        run_edit(
            &notebook,
            &id,
            EditRequest {
                clear_location: true,
                ..Default::default()
            },
        )
        .unwrap();

        let after = notebook.get(&id).unwrap().unwrap();
        assert!(after.coordinates.is_none());
        assert!(after.address.is_none());
    }

    #[test]
    fn test_edit_unknown_id_is_not_an_error() {
        let (_tmp, notebook, _id) = setup();
        assert!(run_edit(&notebook, "ghost", EditRequest::default()).is_ok());
    }
}
