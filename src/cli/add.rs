use anyhow::Result;

use crate::capture::{DeniedLocation, FixedLocation, Fix, Geolocator, ImageSource, PathImageSource};
use crate::error::Error;
use crate::models::{Coordinates, NoteDraft};
use crate::notebook::Notebook;

/// Execute the add command
pub fn run_add(
    notebook: &Notebook,
    title: String,
    body: String,
    photo: Option<String>,
    coordinates: Option<Coordinates>,
    address: Option<String>,
) -> Result<()> {
    let photo_source = PathImageSource::new(photo).pick()?;

    let fix = match coordinates {
        Some(c) => locate(&FixedLocation::new(c, address.clone())),
        None => locate(&DeniedLocation),
    };

    let draft = NoteDraft {
        title,
        body,
        photo_source,
        coordinates: fix.as_ref().map(|f| f.coordinates),
        address: address.or_else(|| fix.and_then(|f| f.address)),
    };

    let note = notebook.create(draft)?;
    println!("{}", note.id);
    Ok(())
}

/// Position from `locator`; a refusal leaves the draft without a location.
pub(crate) fn locate(locator: &dyn Geolocator) -> Option<Fix> {
    match locator.locate() {
        Ok(fix) => Some(fix),
        Err(Error::PermissionDenied(msg)) => {
            tracing::debug!(reason = %msg, "No location available.");
            None
        }
        Err(err) => {
            tracing::warn!(error = %err, "Locating failed.");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Notebook) {
        let tmp = TempDir::new().unwrap();
        let notebook = Notebook::open(&Config::at(tmp.path().join("home"))).unwrap();
        (tmp, notebook)
    }

    #[test]
    fn test_add_requires_location() {
        let (tmp, notebook) = setup();
        let photo = tmp.path().join("a.jpg");
        std::fs::write(&photo, b"a").unwrap();

        let result = run_add(
            &notebook,
            "Title".into(),
            String::new(),
            Some(photo.to_string_lossy().into_owned()),
            None,
            None,
        );
        assert!(result.is_err());
        assert_eq!(notebook.db().count().unwrap(), 0);
    }

    #[test]
    fn test_add_requires_photo() {
        let (_tmp, notebook) = setup();
        let result = run_add(
            &notebook,
            "Title".into(),
            String::new(),
            None,
            Some(Coordinates::new(1.0, 2.0)),
            None,
        );
        assert!(result.unwrap_err().to_string().contains("Photo"));
    }

    #[test]
    fn test_add_stores_note() {
        let (tmp, notebook) = setup();
        let photo = tmp.path().join("a.jpg");
        std::fs::write(&photo, b"a").unwrap();

        run_add(
            &notebook,
            "Title".into(),
            "Body".into(),
            Some(photo.to_string_lossy().into_owned()),
            Some(Coordinates::new(1.0, 2.0)),
            Some("Somewhere".into()),
        )
        .unwrap();

        let notes = notebook.db().get_all().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].address.as_deref(), Some("Somewhere"));
        assert_eq!(notes[0].coordinates, Some(Coordinates::new(1.0, 2.0)));
    }

    #[test]
    fn test_locate_denied_is_none() {
        assert!(locate(&DeniedLocation).is_none());
    }
}
