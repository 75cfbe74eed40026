use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display titles longer than this are truncated by [`headline`].
pub const HEADLINE_MAX_CHARS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5}, {:.5}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub body: String,
    pub photo_path: String,
    /// Milliseconds since the Unix epoch
    pub created_at: i64,
    pub coordinates: Option<Coordinates>,
    pub address: Option<String>,
}

impl Note {
    /// New note with a time-ordered id, stamped now.
    pub fn new(title: String, body: String, photo_path: String) -> Self {
        Self::with_id(new_note_id(), title, body, photo_path)
    }

    pub fn with_id(id: String, title: String, body: String, photo_path: String) -> Self {
        Self {
            id,
            title,
            body,
            photo_path,
            created_at: now_millis(),
            coordinates: None,
            address: None,
        }
    }

    /// Apply every mutable field from `update`, leaving `id` and `created_at`.
    pub fn apply(&mut self, update: NoteUpdate) {
        self.title = update.title;
        self.body = update.body;
        self.photo_path = update.photo_path;
        self.coordinates = update.coordinates;
        self.address = update.address;
    }

    pub fn headline(&self) -> String {
        headline(&self.title)
    }
}

/// Full replacement of a note's mutable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteUpdate {
    pub id: String,
    pub title: String,
    pub body: String,
    pub photo_path: String,
    pub coordinates: Option<Coordinates>,
    pub address: Option<String>,
}

impl From<&Note> for NoteUpdate {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id.clone(),
            title: note.title.clone(),
            body: note.body.clone(),
            photo_path: note.photo_path.clone(),
            coordinates: note.coordinates,
            address: note.address.clone(),
        }
    }
}

/// UUIDv7 so lexical id order follows creation order.
pub fn new_note_id() -> String {
    Uuid::now_v7().to_string()
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn headline(title: &str) -> String {
    if title.chars().count() > HEADLINE_MAX_CHARS {
        let cut: String = title.chars().take(HEADLINE_MAX_CHARS).collect();
        format!("{}…", cut)
    } else {
        title.to_string()
    }
}
