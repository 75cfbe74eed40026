use rusqlite::Connection;
use std::path::Path;

use crate::error::{Error, Result};

pub mod mapper;
mod notes;
mod schema;

pub use mapper::{note_to_row, row_to_note, NoteRow};

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database file, creating it and the schema if needed
    pub fn open_at(path: &Path) -> Result<Self> {
        // Create parent directories
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Open in-memory database for testing
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Ensure the notes table exists. Safe to call any number of times.
    pub fn init(&self) -> Result<()> {
        // Table and index appear together; a failure rolls back on drop
        let tx = self.conn.unchecked_transaction()?;
        tx.execute_batch(schema::SCHEMA)?;
        tx.commit()?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn execute_batch(&self, sql: &str) -> Result<()> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn table_names(db: &Database) -> Vec<String> {
        db.conn
            .prepare("SELECT name FROM sqlite_master WHERE type IN ('table', 'index') ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect()
    }

    #[test]
    fn test_open_memory() {
        let db = Database::open_memory().unwrap();
        let names = table_names(&db);
        assert!(names.contains(&"notes".to_string()));
        assert!(names.contains(&"idx_notes_created_at".to_string()));
    }

    #[test]
    fn test_init_is_idempotent() {
        let db = Database::open_memory().unwrap();
        db.init().unwrap();
        db.init().unwrap();
        assert_eq!(table_names(&db).iter().filter(|n| *n == "notes").count(), 1);
    }

    #[test]
    fn test_failed_init_rolls_back() {
        let conn = Connection::open_in_memory().unwrap();
        // A view named `notes` satisfies IF NOT EXISTS but cannot be indexed
        conn.execute_batch("CREATE VIEW notes AS SELECT 1 AS created_at;")
            .unwrap();
        let db = Database { conn };

        assert!(db.init().is_err());
        assert!(db.conn.is_autocommit());
    }

    #[test]
    fn test_reopen_keeps_data() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("notes.db");

        {
            let db = Database::open_at(&path).unwrap();
            let note = crate::models::Note::new("T".into(), "B".into(), "/p.jpg".into());
            db.insert(&note).unwrap();
        }

        let db = Database::open_at(&path).unwrap();
        assert_eq!(db.count().unwrap(), 1);
    }
}
