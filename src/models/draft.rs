//! Caller-side input for creating and editing notes.
//!
//! Validation happens here, before any store or filesystem call.

use serde::{Deserialize, Serialize};

use super::Coordinates;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub body: String,
    /// Transient URI or path of the picked image
    pub photo_source: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub address: Option<String>,
}

impl NoteDraft {
    pub fn validate(&self) -> Result<()> {
        require_title(&self.title)?;
        require_photo(self.photo_source.as_deref())?;
        if self.coordinates.is_none() {
            return Err(Error::Validation("Add your current location.".into()));
        }
        Ok(())
    }
}

/// Edited values for an existing note. The photo source is either the
/// note's current managed path or a newly picked image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteEdit {
    pub title: String,
    pub body: String,
    pub photo_source: String,
    pub coordinates: Option<Coordinates>,
    pub address: Option<String>,
}

impl NoteEdit {
    pub fn validate(&self) -> Result<()> {
        require_title(&self.title)?;
        require_photo(Some(&self.photo_source))
    }
}

fn require_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::Validation("Title cannot be empty.".into()));
    }
    Ok(())
}

fn require_photo(source: Option<&str>) -> Result<()> {
    match source {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(Error::Validation("Photo is required.".into())),
    }
}

/// Blank addresses are stored as absent.
pub fn normalize_address(address: Option<&str>) -> Option<String> {
    address
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
}
