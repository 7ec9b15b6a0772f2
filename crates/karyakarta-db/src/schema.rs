//! Relational layout the store is meant to move to. The in-memory store
//! never touches SQLite; this module only provisions an empty database with
//! the intended tables so the shape can be reviewed and migrated against.

use std::path::Path;

use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

/// Tables in creation order (parents before children).
pub const TABLES: &[&str] = &[
    "users",
    "members",
    "events",
    "event_attendees",
    "notices",
    "feedback",
    "event_photos",
    "reports",
];

pub fn apply(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id          TEXT PRIMARY KEY,
            username    TEXT NOT NULL UNIQUE,
            role        TEXT NOT NULL DEFAULT 'member'
                        CHECK (role IN ('admin', 'leader', 'member')),
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS members (
            id              TEXT PRIMARY KEY,
            user_id         TEXT REFERENCES users(id),
            name            TEXT NOT NULL,
            phone           TEXT NOT NULL,
            constituency    TEXT NOT NULL,
            district        TEXT NOT NULL,
            division        TEXT NOT NULL,
            designation     TEXT NOT NULL,
            achievements    TEXT NOT NULL DEFAULT '',
            social_media    TEXT NOT NULL DEFAULT '{}',
            verified        INTEGER NOT NULL DEFAULT 0,
            membership_date TEXT NOT NULL,
            profile_image   TEXT,
            contact         TEXT NOT NULL DEFAULT '{}'
        );

        CREATE INDEX IF NOT EXISTS idx_members_district
            ON members(district, constituency);

        CREATE TABLE IF NOT EXISTS events (
            id                  TEXT PRIMARY KEY,
            title               TEXT NOT NULL,
            description         TEXT NOT NULL,
            type                TEXT NOT NULL
                                CHECK (type IN ('online', 'offline', 'hybrid')),
            venue               TEXT NOT NULL,
            start_at            TEXT NOT NULL,
            end_at              TEXT NOT NULL,
            capacity            INTEGER NOT NULL CHECK (capacity > 0),
            current_attendees   INTEGER NOT NULL DEFAULT 0,
            meeting_link        TEXT,
            organizer_id        TEXT REFERENCES users(id),
            constituency        TEXT NOT NULL,
            district            TEXT NOT NULL,
            category            TEXT NOT NULL,
            status              TEXT NOT NULL DEFAULT 'draft'
                                CHECK (status IN ('draft', 'published', 'cancelled', 'completed'))
        );

        CREATE INDEX IF NOT EXISTS idx_events_start
            ON events(start_at);

        CREATE TABLE IF NOT EXISTS event_attendees (
            id              TEXT PRIMARY KEY,
            event_id        TEXT NOT NULL REFERENCES events(id) ON DELETE CASCADE,
            member_id       TEXT NOT NULL REFERENCES members(id),
            status          TEXT NOT NULL DEFAULT 'invited'
                            CHECK (status IN ('invited', 'confirmed', 'attended', 'absent')),
            registered_at   TEXT NOT NULL DEFAULT (datetime('now')),
            UNIQUE(event_id, member_id)
        );

        CREATE TABLE IF NOT EXISTS notices (
            id              TEXT PRIMARY KEY,
            title           TEXT NOT NULL,
            content         TEXT NOT NULL,
            priority        TEXT NOT NULL
                            CHECK (priority IN ('urgent', 'high', 'medium', 'low')),
            category        TEXT NOT NULL,
            author_id       TEXT REFERENCES users(id),
            target_audience TEXT NOT NULL
                            CHECK (target_audience IN ('all', 'leadership', 'constituency')),
            constituency    TEXT NOT NULL DEFAULT '',
            district        TEXT NOT NULL DEFAULT '',
            expires_at      TEXT NOT NULL,
            attachments     TEXT NOT NULL DEFAULT '[]',
            pinned          INTEGER NOT NULL DEFAULT 0,
            created_at      TEXT NOT NULL DEFAULT (datetime('now')),
            read_by         TEXT NOT NULL DEFAULT '[]',
            view_count      INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS feedback (
            id              TEXT PRIMARY KEY,
            member_id       TEXT NOT NULL REFERENCES members(id),
            member_name     TEXT NOT NULL,
            subject         TEXT NOT NULL,
            message         TEXT NOT NULL,
            category        TEXT NOT NULL
                            CHECK (category IN ('suggestion', 'complaint', 'appreciation',
                                                'meeting_request', 'event_feedback',
                                                'technical_issue')),
            status          TEXT NOT NULL DEFAULT 'pending'
                            CHECK (status IN ('pending', 'in_progress', 'resolved')),
            priority        TEXT CHECK (priority IN ('low', 'medium', 'high', 'urgent')),
            submitter_type  TEXT CHECK (submitter_type IN ('member', 'leader')),
            phone           TEXT,
            email           TEXT,
            constituency    TEXT,
            district        TEXT,
            event_id        TEXT REFERENCES events(id),
            attachments     TEXT,
            created_at      TEXT NOT NULL DEFAULT (datetime('now')),
            response        TEXT,
            responded_at    TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_feedback_status
            ON feedback(status, created_at);

        CREATE TABLE IF NOT EXISTS event_photos (
            id          TEXT PRIMARY KEY,
            event_id    TEXT NOT NULL REFERENCES events(id) ON DELETE CASCADE,
            event_name  TEXT NOT NULL,
            photo_url   TEXT NOT NULL,
            uploaded_by TEXT NOT NULL,
            uploaded_at TEXT NOT NULL DEFAULT (datetime('now')),
            description TEXT NOT NULL DEFAULT '',
            tags        TEXT NOT NULL DEFAULT '[]'
        );

        CREATE TABLE IF NOT EXISTS reports (
            id              TEXT PRIMARY KEY,
            title           TEXT NOT NULL,
            description     TEXT NOT NULL DEFAULT '',
            category        TEXT NOT NULL
                            CHECK (category IN ('monthly', 'quarterly', 'annual', 'event',
                                                'financial', 'performance')),
            file_type       TEXT NOT NULL CHECK (file_type IN ('pdf', 'excel', 'word')),
            author          TEXT NOT NULL,
            department      TEXT NOT NULL,
            created_at      TEXT NOT NULL DEFAULT (datetime('now')),
            file_size       TEXT NOT NULL,
            download_count  INTEGER NOT NULL DEFAULT 0,
            is_public       INTEGER NOT NULL DEFAULT 0,
            tags            TEXT NOT NULL DEFAULT '[]',
            file_name       TEXT NOT NULL
        );
        ",
    )?;

    info!("Schema applied ({} tables)", TABLES.len());
    Ok(())
}

/// Opens (or creates) a SQLite file and applies the schema to it.
pub fn provision(path: &Path) -> Result<()> {
    let conn = Connection::open(path)?;

    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "foreign_keys", "ON")?;

    apply(&conn)?;

    info!("Schema provisioned at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(conn: &Connection) -> Vec<String> {
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<String>, _>>()
            .unwrap()
    }

    #[test]
    fn creates_every_table() {
        let conn = Connection::open_in_memory().unwrap();
        apply(&conn).unwrap();

        let names = table_names(&conn);
        for table in TABLES {
            assert!(names.iter().any(|n| n == table), "missing table {table}");
        }
    }

    #[test]
    fn apply_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        apply(&conn).unwrap();
        apply(&conn).unwrap();
    }

    #[test]
    fn enum_columns_are_constrained() {
        let conn = Connection::open_in_memory().unwrap();
        apply(&conn).unwrap();

        let ok = conn.execute(
            "INSERT INTO reports (id, title, category, file_type, author, department, file_size, file_name)
             VALUES ('r1', 'डिसेंबर', 'monthly', 'pdf', 'a', 'd', '1 MB', 'r1.pdf')",
            [],
        );
        assert!(ok.is_ok());

        let bad = conn.execute(
            "INSERT INTO reports (id, title, category, file_type, author, department, file_size, file_name)
             VALUES ('r2', 'x', 'weekly', 'pdf', 'a', 'd', '1 MB', 'r2.pdf')",
            [],
        );
        assert!(bad.is_err());
    }

    #[test]
    fn provision_writes_a_database_file() {
        let path = std::env::temp_dir().join(format!("karyakarta_schema_{}.db", uuid::Uuid::new_v4()));
        provision(&path).unwrap();

        let conn = Connection::open(&path).unwrap();
        assert!(table_names(&conn).iter().any(|n| n == "event_attendees"));

        drop(conn);
        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_file(path.with_extension("db-wal"));
        let _ = std::fs::remove_file(path.with_extension("db-shm"));
    }
}
