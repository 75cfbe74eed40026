pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id TEXT PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    body TEXT NOT NULL,
    photo_uri TEXT NOT NULL,
    created_at INTEGER NOT NULL,
    latitude REAL,
    longitude REAL,
    address TEXT
);

CREATE INDEX IF NOT EXISTS idx_notes_created_at ON notes(created_at);
"#;
