use anyhow::{anyhow, Context, Result};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
use std::path::Path;

/// Local storage manager owning the SQLite connection.
pub struct LocalStorage {
    conn: DatabaseConnection,
}

impl LocalStorage {
    /// Initialize the local storage. With `in_memory` set, an in-memory
    /// `SQLite` database is used; tests rely on this.
    pub async fn new(in_memory: bool) -> Result<Self> {
        if in_memory {
            let conn = Database::connect("sqlite::memory:")
                .await
                .context("Failed to open in-memory database")?;
            let storage = LocalStorage { conn };
            storage.init_schema().await?;
            return Ok(storage);
        }

        let data_dir = dirs::data_dir().ok_or_else(|| anyhow!("Could not determine data directory"))?;
        Self::open_at(&data_dir.join("stickies").join("notes.db")).await
    }

    /// Open (or create) the database file at a specific path.
    pub async fn open_at(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
        }

        let url = format!("sqlite://{}?mode=rwc", path.display());
        let conn = Database::connect(&url)
            .await
            .with_context(|| format!("Failed to open database: {}", path.display()))?;

        let storage = LocalStorage { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Initialize database schema. AUTOINCREMENT keeps deleted ids from
    /// being reused.
    async fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_unprepared(
                r"
                CREATE TABLE IF NOT EXISTS notes (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    content TEXT NOT NULL DEFAULT '',
                    color TEXT NOT NULL DEFAULT 'yellow'
                )
                ",
            )
            .await
            .context("Failed to create notes table")?;
        Ok(())
    }

    /// Access the underlying connection for repository calls.
    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }
}
