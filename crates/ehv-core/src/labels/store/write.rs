//! Label write operations: insert, reorder, delete.

use anyhow::{bail, Context, Result};
use sqlx::Row;

use super::super::types::{DownloadLabel, LabelId};
use super::db::{unix_timestamp, LabelDb};

impl LabelDb {
    /// Append a label after the current last one.
    pub async fn insert_label(&self, text: &str) -> Result<DownloadLabel> {
        let now = unix_timestamp();
        let mut tx = self.pool.begin().await?;
        let next: i64 = sqlx::query(
            r#"SELECT COALESCE(MAX(position) + 1, 0) AS next FROM download_labels"#,
        )
        .fetch_one(&mut *tx)
        .await?
        .get("next");

        let id = sqlx::query(
            r#"
            INSERT INTO download_labels (label, position, created_at)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(text)
        .bind(next)
        .bind(now)
        .execute(&mut *tx)
        .await
        .with_context(|| format!("insert label {text:?}"))?
        .last_insert_rowid();
        tx.commit().await?;

        tracing::info!(id, label = text, position = next, "label added");
        Ok(DownloadLabel {
            id,
            label: text.to_string(),
        })
    }

    /// Move the label at index `from` to index `to` and renumber positions densely.
    pub async fn reorder_label(&self, from: usize, to: usize) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        let rows = sqlx::query(
            r#"SELECT id FROM download_labels ORDER BY position ASC, id ASC"#,
        )
        .fetch_all(&mut *tx)
        .await?;
        let mut ids: Vec<i64> = rows.iter().map(|r| r.get("id")).collect();

        if from >= ids.len() || to >= ids.len() {
            bail!(
                "label move {from} -> {to} out of range ({} labels)",
                ids.len()
            );
        }
        let moved = ids.remove(from);
        ids.insert(to, moved);

        for (position, id) in ids.iter().enumerate() {
            sqlx::query(r#"UPDATE download_labels SET position = ?1 WHERE id = ?2"#)
                .bind(position as i64)
                .bind(*id)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        tracing::info!(id = moved, from, to, "label moved");
        Ok(())
    }

    /// Permanently remove a label. Positions of the remaining labels keep their order.
    pub async fn remove_label(&self, id: LabelId) -> Result<()> {
        let r = sqlx::query(r#"DELETE FROM download_labels WHERE id = ?1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if r.rows_affected() == 0 {
            bail!("no label with id {id}");
        }
        tracing::info!(id, "label deleted");
        Ok(())
    }
}
