//! Connection handling and schema for the label database.

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Percent-encode a path for use in a sqlite:// URI so spaces and special chars
/// don't break parsing.
fn path_to_sqlite_uri(path: &Path) -> String {
    let s = path.to_string_lossy();
    let mut out = String::with_capacity(s.len() + 9);
    out.push_str("sqlite://");
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            c => out.push(c),
        }
    }
    out
}

/// Handle to the label database.
///
/// Stored at `~/.local/state/ehv/labels.db` unless a path is configured.
#[derive(Clone)]
pub struct LabelDb {
    pub(crate) pool: Pool<Sqlite>,
}

impl LabelDb {
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("ehv")?;
        Ok(xdg_dirs.get_state_home().join("labels.db"))
    }

    /// Open (or create) the default label database and run migrations.
    pub async fn open_default() -> Result<Self> {
        Self::open_at(Self::default_path()?).await
    }

    /// Open (or create) the database at `path`, creating parent dirs as needed.
    pub async fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let uri = path_to_sqlite_uri(path) + "?mode=rwc";
        // One connection: the scene issues one statement at a time.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(&uri)
            .await?;
        let db = LabelDb { pool };
        db.migrate().await?;
        tracing::debug!(path = %path.display(), "label db opened");
        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        // `position` defines display order and is rewritten densely (0..n) on
        // every move; `id` never changes.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS download_labels (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                label TEXT NOT NULL UNIQUE,
                position INTEGER NOT NULL,
                created_at INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Current time as Unix seconds.
pub(crate) fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

#[cfg(test)]
/// Open an in-memory database for tests (no disk I/O).
pub(crate) async fn open_memory() -> Result<LabelDb> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let db = LabelDb { pool };
    db.migrate().await?;
    Ok(db)
}
