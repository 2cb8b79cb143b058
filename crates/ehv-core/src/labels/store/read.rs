//! Label read operations.

use anyhow::Result;
use sqlx::Row;

use super::super::types::DownloadLabel;
use super::db::LabelDb;

impl LabelDb {
    /// All labels in display order.
    pub async fn list_labels(&self) -> Result<Vec<DownloadLabel>> {
        let rows = sqlx::query(
            r#"
            SELECT id, label
            FROM download_labels
            ORDER BY position ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| DownloadLabel {
                id: row.get("id"),
                label: row.get("label"),
            })
            .collect())
    }

    /// Whether a label with exactly this text exists.
    pub async fn label_exists(&self, text: &str) -> Result<bool> {
        let row = sqlx::query(
            r#"
            SELECT 1 AS hit FROM download_labels
            WHERE label = ?1
            LIMIT 1
            "#,
        )
        .bind(text)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.is_some())
    }
}
