use rusqlite::{params, ErrorCode, OptionalExtension};

use super::mapper::{note_to_row, row_to_note, NoteRow};
use super::Database;
use crate::error::{Error, Result};
use crate::models::{Note, NoteUpdate};

impl Database {
    // ==================== NOTE CREATE ====================

    pub fn insert(&self, note: &Note) -> Result<()> {
        let row = note_to_row(note);
        let result = self.conn.execute(
            r#"INSERT INTO notes (
                id, title, body, photo_uri, created_at, latitude, longitude, address
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
            params![
                row.id,
                row.title,
                row.body,
                row.photo_uri,
                row.created_at,
                row.latitude,
                row.longitude,
                row.address,
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation
                    && err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
            {
                Err(Error::DuplicateKey(note.id.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    // ==================== NOTE READ ====================

    /// All notes, newest first. Equal timestamps fall back to insertion
    /// order, latest first.
    pub fn get_all(&self) -> Result<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare("SELECT * FROM notes ORDER BY created_at DESC, rowid DESC")?;

        let rows = stmt
            .query_map([], NoteRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows.into_iter().map(Self::checked_row_to_note).collect())
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<Note>> {
        let row = self
            .conn
            .query_row(
                "SELECT * FROM notes WHERE id = ? LIMIT 1",
                [id],
                NoteRow::from_row,
            )
            .optional()?;

        Ok(row.map(Self::checked_row_to_note))
    }

    /// Ids of every stored note, in listing order
    pub fn ids(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM notes ORDER BY created_at DESC, rowid DESC")?;

        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;

        Ok(ids)
    }

    pub fn count(&self) -> Result<u32> {
        let count: u32 = self
            .conn
            .query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
        Ok(count)
    }

    // ==================== NOTE UPDATE ====================

    /// Rewrite every mutable field. `id` and `created_at` never change.
    pub fn update(&self, update: &NoteUpdate) -> Result<()> {
        let changed = self.conn.execute(
            r#"UPDATE notes SET
                title = ?, body = ?, photo_uri = ?, latitude = ?, longitude = ?, address = ?
            WHERE id = ?"#,
            params![
                update.title,
                update.body,
                update.photo_path,
                update.coordinates.map(|c| c.latitude),
                update.coordinates.map(|c| c.longitude),
                update.address,
                update.id,
            ],
        )?;

        if changed == 0 {
            return Err(Error::NotFound(update.id.clone()));
        }
        Ok(())
    }

    // ==================== NOTE DELETE ====================

    /// Returns whether a row was removed. Missing ids are not an error.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let rows = self.conn.execute("DELETE FROM notes WHERE id = ?", [id])?;
        Ok(rows > 0)
    }

    fn checked_row_to_note(row: NoteRow) -> Note {
        if row.has_partial_coordinates() {
            tracing::warn!(
                note_id = %row.id,
                latitude = ?row.latitude,
                longitude = ?row.longitude,
                "Note row has only one coordinate column set. Treating as no location."
            );
        }
        row_to_note(row)
    }
}
