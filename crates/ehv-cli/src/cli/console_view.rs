//! `ListView` for the terminal: row notifications go to the log.

use ehv_core::labels::{ListView, ViewState};

#[derive(Debug, Default)]
pub struct ConsoleView {
    pub state: Option<ViewState>,
}

impl ListView for ConsoleView {
    fn notify_item_inserted(&mut self, position: usize) {
        tracing::debug!(position, "row inserted");
    }

    fn notify_item_moved(&mut self, from: usize, to: usize) {
        tracing::debug!(from, to, "row moved");
    }

    fn notify_item_removed(&mut self, position: usize) {
        tracing::debug!(position, "row removed");
    }

    fn show(&mut self, state: ViewState) {
        self.state = Some(state);
    }
}
