//! Note workflows on top of the store, the pin index and photo storage.
//!
//! Note data failures are returned to the caller. Pin and photo cleanup
//! failures are logged and skipped.

use serde::Serialize;

use crate::config::Config;
use crate::db::Database;
use crate::error::{Error, Result};
use crate::models::{
    new_note_id, normalize_address, now_millis, Note, NoteDraft, NoteEdit, NoteUpdate,
};
use crate::photos::{managed_file_name, FileSystem, LocalFileSystem, PhotoManager};
use crate::pins::{BlobStore, FileBlobStore, PinIndex};

/// Notes split the way the listing shows them, each part newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Listing {
    pub pinned: Vec<Note>,
    pub general: Vec<Note>,
}

impl Listing {
    pub fn len(&self) -> usize {
        self.pinned.len() + self.general.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct Notebook<S = FileBlobStore, F = LocalFileSystem> {
    db: Database,
    pins: PinIndex<S>,
    photos: PhotoManager<F>,
}

impl Notebook {
    /// Open the notebook stored under `config`, creating directories and
    /// schema as needed.
    pub fn open(config: &Config) -> Result<Self> {
        config.ensure_dirs()?;
        let db = Database::open_at(&config.database_path)?;
        Ok(Self::new(
            db,
            PinIndex::new(FileBlobStore::new(&config.state_dir)),
            PhotoManager::new(&config.photos_dir),
        ))
    }
}

impl<S: BlobStore, F: FileSystem> Notebook<S, F> {
    pub fn new(db: Database, pins: PinIndex<S>, photos: PhotoManager<F>) -> Self {
        Self { db, pins, photos }
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    pub fn pins(&self) -> &PinIndex<S> {
        &self.pins
    }

    pub fn photos(&self) -> &PhotoManager<F> {
        &self.photos
    }

    pub fn create(&self, draft: NoteDraft) -> Result<Note> {
        draft.validate()?;
        let source = draft
            .photo_source
            .as_deref()
            .ok_or_else(|| Error::Validation("Photo is required.".into()))?;

        let id = new_note_id();
        let photo_path = self
            .photos
            .persist_new_image(source, &managed_file_name(&id, source))?;

        let note = Note {
            id,
            title: draft.title.trim().to_string(),
            body: draft.body.trim().to_string(),
            photo_path,
            created_at: now_millis(),
            coordinates: draft.coordinates,
            address: normalize_address(draft.address.as_deref()),
        };

        if let Err(err) = self.db.insert(&note) {
            self.photos.release_image(&note.photo_path);
            return Err(err);
        }

        tracing::info!(note_id = %note.id, "Created note.");
        Ok(note)
    }

    /// Replace every mutable field of note `id`. A newly picked photo is
    /// copied in before the row changes and the old file is only released
    /// once the row points at the new one.
    pub fn edit(&self, id: &str, edit: NoteEdit) -> Result<Note> {
        edit.validate()?;
        let mut note = self
            .db
            .get_by_id(id)?
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        let copied = !self.photos.is_managed(&edit.photo_source);
        let photo_path = self
            .photos
            .replace_image(&edit.photo_source, &note.id, None)?;
        let photo_changed = !self.photos.same_image(&photo_path, &note.photo_path);

        let update = NoteUpdate {
            id: note.id.clone(),
            title: edit.title.trim().to_string(),
            body: edit.body,
            photo_path,
            coordinates: edit.coordinates,
            address: normalize_address(edit.address.as_deref()),
        };

        if let Err(err) = self.db.update(&update) {
            if copied {
                self.photos.release_image(&update.photo_path);
            }
            return Err(err);
        }

        if photo_changed {
            self.photos.release_image(&note.photo_path);
        }

        note.apply(update);
        tracing::info!(note_id = %note.id, "Updated note.");
        Ok(note)
    }

    /// Delete a note, its photo and its pin. Returns whether a note existed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let existing = self.db.get_by_id(id)?;
        let removed = self.db.delete(id)?;

        if let Some(note) = existing {
            self.photos.release_image(&note.photo_path);
        }
        if let Err(err) = self.pins.set_pinned(id, false) {
            tracing::warn!(error = %err, note_id = %id, "Failed to unpin deleted note.");
        }

        if removed {
            tracing::info!(note_id = %id, "Deleted note.");
        }
        Ok(removed)
    }

    pub fn get(&self, id: &str) -> Result<Option<Note>> {
        self.db.get_by_id(id)
    }

    /// Every note, pinned ones first. Pins for notes that no longer exist
    /// are pruned on the way.
    pub fn load(&self) -> Result<Listing> {
        let notes = self.db.get_all()?;

        if let Err(err) = self.pins.reconcile(notes.iter().map(|n| n.id.as_str())) {
            tracing::warn!(error = %err, "Failed to prune stale pins.");
        }
        let pinned_ids = self.pins.pinned();

        let (pinned, general) = notes
            .into_iter()
            .partition(|n| pinned_ids.contains(&n.id));
        Ok(Listing { pinned, general })
    }

    /// Pin or unpin a note. Only existing notes can be pinned.
    pub fn set_pinned(&self, id: &str, pinned: bool) -> Result<()> {
        if pinned && self.db.get_by_id(id)?.is_none() {
            return Err(Error::NotFound(id.to_string()));
        }
        self.pins.set_pinned(id, pinned)?;
        Ok(())
    }

    pub fn is_pinned(&self, id: &str) -> bool {
        self.pins.is_pinned(id)
    }
}
