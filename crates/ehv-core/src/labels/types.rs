//! Types shared by the label store and scene.

/// Persisted label identifier; stable across reorders.
pub type LabelId = i64;

/// A user-defined download label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLabel {
    pub id: LabelId,
    pub label: String,
}
