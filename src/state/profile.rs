use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};
use std::path::{Path, PathBuf};

use super::store::{Persistence, StoreError};

/// The ProfileStore keeps profile-scoped key/value pairs in SQLite.
/// It survives restarts and is shared by every running instance that
/// opens the same file (last writer wins).
pub struct ProfileStore {
    conn: Connection,
    db_path: PathBuf,
}

impl ProfileStore {
    /// Open (or create) the store at `db_path`.
    ///
    /// The default location is in the user's data directory:
    /// - Linux: ~/.local/share/juice-cart/juice_cart.db
    /// - macOS: ~/Library/Application Support/juice-cart/juice_cart.db
    /// - Windows: %APPDATA%\juice-cart\juice_cart.db
    pub fn open(db_path: &Path) -> Result<Self, StoreError> {
        // Ensure the parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;

        tracing::info!("📁 Profile store opened at: {}", db_path.display());

        let store = ProfileStore {
            conn,
            db_path: db_path.to_path_buf(),
        };
        store.init_schema()?;

        Ok(store)
    }

    /// Default path of the database file, if a data directory can be found
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::data_dir().or_else(dirs::home_dir)?;

        path.push("juice-cart");
        path.push("juice_cart.db");
        Some(path)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key             TEXT PRIMARY KEY,
                value           TEXT NOT NULL,
                updated_at      INTEGER NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    /// Get the path to the database file
    pub fn path(&self) -> &Path {
        &self.db_path
    }
}

impl Persistence for ProfileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            rusqlite::params![key, value, Utc::now().timestamp()],
        )?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }
}

// Implement Debug for better error messages
impl std::fmt::Debug for ProfileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileStore")
            .field("db_path", &self.db_path)
            .finish()
    }
}
