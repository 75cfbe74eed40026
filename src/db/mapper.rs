//! Translation between the flat `notes` row and the domain [`Note`].
//!
//! SQLite has no optional-pair type, so coordinates are stored as two
//! nullable REAL columns. The pair only exists in the domain when both
//! columns are set.

use rusqlite::Row;

use crate::models::{Coordinates, Note};

#[derive(Debug, Clone, PartialEq)]
pub struct NoteRow {
    pub id: String,
    pub title: String,
    pub body: String,
    pub photo_uri: String,
    pub created_at: i64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
}

impl NoteRow {
    /// Read a row selected with `SELECT *` from `notes`.
    pub fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            title: row.get("title")?,
            body: row.get("body")?,
            photo_uri: row.get("photo_uri")?,
            created_at: row.get("created_at")?,
            latitude: row.get("latitude")?,
            longitude: row.get("longitude")?,
            address: row.get("address")?,
        })
    }

    /// Exactly one of the coordinate columns is null.
    pub fn has_partial_coordinates(&self) -> bool {
        self.latitude.is_some() != self.longitude.is_some()
    }
}

pub fn row_to_note(row: NoteRow) -> Note {
    let coordinates = match (row.latitude, row.longitude) {
        (Some(latitude), Some(longitude)) => Some(Coordinates {
            latitude,
            longitude,
        }),
        _ => None,
    };

    Note {
        id: row.id,
        title: row.title,
        body: row.body,
        photo_path: row.photo_uri,
        created_at: row.created_at,
        coordinates,
        address: row.address,
    }
}

pub fn note_to_row(note: &Note) -> NoteRow {
    NoteRow {
        id: note.id.clone(),
        title: note.title.clone(),
        body: note.body.clone(),
        photo_uri: note.photo_path.clone(),
        created_at: note.created_at,
        latitude: note.coordinates.map(|c| c.latitude),
        longitude: note.coordinates.map(|c| c.longitude),
        address: note.address.clone(),
    }
}
