//! Rendering side of the label scene.

/// Which of the two stacked views is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// No labels: the empty-state tip is shown.
    Empty,
    /// The label list is shown.
    Populated,
}

impl ViewState {
    pub fn for_len(len: usize) -> Self {
        if len > 0 {
            ViewState::Populated
        } else {
            ViewState::Empty
        }
    }
}

/// Receives positional row notifications so the host can animate changes.
pub trait ListView {
    fn notify_item_inserted(&mut self, position: usize);
    fn notify_item_moved(&mut self, from: usize, to: usize);
    fn notify_item_removed(&mut self, position: usize);
    fn show(&mut self, state: ViewState);
}
