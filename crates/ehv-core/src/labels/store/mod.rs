//! SQLite-backed label collection (sqlx).

mod db;
mod read;
mod write;

pub use db::LabelDb;

#[cfg(test)]
pub(crate) use db::open_memory;

#[cfg(test)]
mod tests;

use anyhow::Result;

use super::manager::DownloadManager;
use super::types::{DownloadLabel, LabelId};

impl DownloadManager for LabelDb {
    async fn get_label_list(&self) -> Result<Vec<DownloadLabel>> {
        self.list_labels().await
    }

    async fn contain_label(&self, text: &str) -> Result<bool> {
        self.label_exists(text).await
    }

    async fn add_label(&self, text: &str) -> Result<DownloadLabel> {
        self.insert_label(text).await
    }

    async fn move_label(&self, from: usize, to: usize) -> Result<()> {
        self.reorder_label(from, to).await
    }

    async fn delete_label(&self, id: LabelId) -> Result<()> {
        self.remove_label(id).await
    }
}
