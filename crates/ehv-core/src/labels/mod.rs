//! Download labels: the persisted label collection and the scene that edits it.
//!
//! [`LabelDb`] is the SQLite-backed collection, reached through the
//! [`DownloadManager`] trait. [`LabelScene`] is the list controller a host UI
//! drives with lifecycle events and gestures; it reports row changes to a
//! [`ListView`].

mod dialog;
mod gesture;
mod manager;
mod scene;
mod store;
mod types;
mod view;

pub use dialog::{validate_new_label, LabelError, NewLabelDialog};
pub use gesture::{Rect, RowLayout, SwipeReaction, SwipeResult};
pub use manager::DownloadManager;
pub use scene::{AddOutcome, LabelScene, MenuItem, SceneAction, SwipeOutcome};
pub use store::LabelDb;
pub use types::{DownloadLabel, LabelId};
pub use view::{ListView, ViewState};
