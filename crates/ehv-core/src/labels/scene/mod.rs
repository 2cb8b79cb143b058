//! List controller for the download label screen.
//!
//! The scene holds a snapshot of the label list between [`LabelScene::attach`]
//! and [`LabelScene::detach`]. Every gesture is handled here directly: the
//! drag-start check, the move, the swipe. Row changes are reported to the
//! [`ListView`] by position, and the empty/populated state is recomputed after
//! each change.

use anyhow::{bail, Result};

use super::dialog::{validate_new_label, LabelError, NewLabelDialog};
use super::gesture::{RowLayout, SwipeReaction, SwipeResult};
use super::manager::DownloadManager;
use super::types::{DownloadLabel, LabelId};
use super::view::{ListView, ViewState};
use crate::config::{EhvConfig, SwipeAction};

/// Entries of the scene's toolbar menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    AddLabel,
}

/// What the host should do after a toolbar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneAction {
    /// Show the new-label dialog.
    DialogOpened,
    /// Leave the scene.
    Back,
}

/// Result of confirming the new-label dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Label stored and appended; the dialog is closed.
    Added(DownloadLabel),
    /// Validation failed; the error is set on the still-open dialog.
    Rejected(LabelError),
    /// No dialog was open.
    NoDialog,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwipeOutcome {
    Ignored,
    Removed(DownloadLabel),
}

pub struct LabelScene<M, V> {
    manager: M,
    view: V,
    default_label_name: String,
    swipe_action: SwipeAction,
    list: Option<Vec<DownloadLabel>>,
    state: ViewState,
    dialog: Option<NewLabelDialog>,
}

impl<M: DownloadManager, V: ListView> LabelScene<M, V> {
    pub fn new(
        manager: M,
        view: V,
        default_label_name: impl Into<String>,
        swipe_action: SwipeAction,
    ) -> Self {
        Self {
            manager,
            view,
            default_label_name: default_label_name.into(),
            swipe_action,
            list: None,
            state: ViewState::Empty,
            dialog: None,
        }
    }

    pub fn from_config(manager: M, view: V, cfg: &EhvConfig) -> Self {
        Self::new(manager, view, cfg.default_label_name.clone(), cfg.swipe_action)
    }

    /// Snapshot the label list and show the matching view.
    pub async fn attach(&mut self) -> Result<()> {
        let labels = self.manager.get_label_list().await?;
        tracing::debug!(count = labels.len(), "label scene attached");
        self.list = Some(labels);
        self.update_view();
        Ok(())
    }

    /// Release the snapshot. Later reads see an empty list.
    pub fn detach(&mut self) {
        self.list = None;
        self.dialog = None;
        tracing::debug!("label scene detached");
    }

    pub fn is_attached(&self) -> bool {
        self.list.is_some()
    }

    pub fn item_count(&self) -> usize {
        self.list.as_ref().map_or(0, Vec::len)
    }

    /// Stable row id; 0 when detached or out of range.
    pub fn item_id(&self, position: usize) -> LabelId {
        self.list
            .as_ref()
            .and_then(|l| l.get(position))
            .map_or(0, |l| l.id)
    }

    /// Text to bind into the row at `position`.
    pub fn label_at(&self, position: usize) -> Option<&str> {
        self.list
            .as_ref()
            .and_then(|l| l.get(position))
            .map(|l| l.label.as_str())
    }

    pub fn labels(&self) -> &[DownloadLabel] {
        self.list.as_deref().unwrap_or(&[])
    }

    pub fn view_state(&self) -> ViewState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn manager(&self) -> &M {
        &self.manager
    }

    pub fn swipe_action(&self) -> SwipeAction {
        self.swipe_action
    }

    pub fn on_menu_item(&mut self, item: MenuItem) -> SceneAction {
        match item {
            MenuItem::AddLabel => {
                self.dialog = Some(NewLabelDialog::default());
                SceneAction::DialogOpened
            }
        }
    }

    pub fn on_navigation_click(&mut self) -> SceneAction {
        SceneAction::Back
    }

    pub fn dialog(&self) -> Option<&NewLabelDialog> {
        self.dialog.as_ref()
    }

    pub fn dialog_mut(&mut self) -> Option<&mut NewLabelDialog> {
        self.dialog.as_mut()
    }

    /// Validate the dialog text and, if it passes, store the label.
    ///
    /// Checks run in order: empty, reserved default name, already present.
    /// A storage failure is returned as an error and leaves the dialog open.
    pub async fn confirm_new_label(&mut self) -> Result<AddOutcome> {
        let Some(text) = self.dialog.as_ref().map(|d| d.text().to_string()) else {
            return Ok(AddOutcome::NoDialog);
        };

        let rejected = match validate_new_label(&text, &self.default_label_name) {
            Err(e) => Some(e),
            Ok(()) => {
                if self.manager.contain_label(&text).await? {
                    Some(LabelError::Exists)
                } else {
                    None
                }
            }
        };
        if let Some(e) = rejected {
            tracing::debug!(label = %text, "new label rejected: {}", e);
            if let Some(dialog) = self.dialog.as_mut() {
                dialog.set_error(Some(e));
            }
            return Ok(AddOutcome::Rejected(e));
        }

        let label = self.manager.add_label(&text).await?;
        self.dialog = None;
        if let Some(list) = self.list.as_mut() {
            list.push(label.clone());
            let position = list.len() - 1;
            self.view.notify_item_inserted(position);
        }
        self.update_view();
        Ok(AddOutcome::Added(label))
    }

    /// Whether a drag may start at `(x, y)` on the row at `position`.
    pub fn can_start_drag(&self, position: usize, layout: &RowLayout, x: i32, y: i32) -> bool {
        position < self.item_count() && layout.drag_handle.contains(x, y)
    }

    /// Persist a drag-and-drop move and mirror it in the snapshot.
    ///
    /// Both positions must be rows of the current snapshot; otherwise nothing
    /// is persisted and an error is returned.
    pub async fn move_item(&mut self, from: usize, to: usize) -> Result<()> {
        if from == to {
            return Ok(());
        }
        let len = self.item_count();
        if from >= len || to >= len {
            bail!("move {from} -> {to} outside the {len} listed labels");
        }

        self.manager.move_label(from, to).await?;
        if let Some(list) = self.list.as_mut() {
            let moved = list.remove(from);
            list.insert(to, moved);
            self.view.notify_item_moved(from, to);
        }
        self.update_view();
        Ok(())
    }

    pub fn swipe_reaction(&self, _position: usize) -> SwipeReaction {
        SwipeReaction::BothHorizontal
    }

    /// Apply the configured swipe action. Cancel never changes anything.
    pub async fn on_swipe_item(
        &mut self,
        position: usize,
        result: SwipeResult,
    ) -> Result<SwipeOutcome> {
        if result == SwipeResult::Canceled || self.swipe_action == SwipeAction::None {
            tracing::debug!(position, ?result, "swipe ignored");
            return Ok(SwipeOutcome::Ignored);
        }

        let Some(label) = self.list.as_ref().and_then(|l| l.get(position)).cloned() else {
            return Ok(SwipeOutcome::Ignored);
        };
        self.manager.delete_label(label.id).await?;
        if let Some(list) = self.list.as_mut() {
            list.remove(position);
        }
        self.view.notify_item_removed(position);
        self.update_view();
        Ok(SwipeOutcome::Removed(label))
    }

    fn update_view(&mut self) {
        self.state = ViewState::for_len(self.item_count());
        self.view.show(self.state);
    }
}

#[cfg(test)]
mod tests;
