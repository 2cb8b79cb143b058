//! The label collection as seen by the scene.

use anyhow::Result;

use super::types::{DownloadLabel, LabelId};

/// Owner of the persisted label list.
///
/// Indices are positions in the order returned by `get_label_list`.
#[allow(async_fn_in_trait)]
pub trait DownloadManager {
    /// All labels, in display order.
    async fn get_label_list(&self) -> Result<Vec<DownloadLabel>>;

    /// Exact, case-sensitive match on the label text.
    async fn contain_label(&self, text: &str) -> Result<bool>;

    /// Append a label at the end of the list.
    async fn add_label(&self, text: &str) -> Result<DownloadLabel>;

    /// Move the label at `from` so that it ends up at `to`.
    async fn move_label(&self, from: usize, to: usize) -> Result<()>;

    async fn delete_label(&self, id: LabelId) -> Result<()>;
}
