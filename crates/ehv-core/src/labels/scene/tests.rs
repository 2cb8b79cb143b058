//! Tests for the label scene with a recording collaborator and view.

use std::cell::RefCell;

use anyhow::{bail, Result};

use super::*;
use crate::labels::gesture::Rect;
use crate::labels::store::open_memory;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    List,
    Contain(String),
    Add(String),
    Move(usize, usize),
    Delete(LabelId),
}

/// In-memory collaborator that records every call.
#[derive(Default)]
struct FakeManager {
    labels: RefCell<Vec<DownloadLabel>>,
    next_id: RefCell<LabelId>,
    calls: RefCell<Vec<Call>>,
}

impl FakeManager {
    fn with(texts: &[&str]) -> Self {
        let fake = FakeManager::default();
        *fake.next_id.borrow_mut() = 1;
        for t in texts {
            fake.push(t);
        }
        fake
    }

    fn push(&self, text: &str) -> DownloadLabel {
        let mut next = self.next_id.borrow_mut();
        let label = DownloadLabel {
            id: *next,
            label: text.to_string(),
        };
        *next += 1;
        self.labels.borrow_mut().push(label.clone());
        label
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn ids(&self) -> Vec<LabelId> {
        self.labels.borrow().iter().map(|l| l.id).collect()
    }
}

impl DownloadManager for FakeManager {
    async fn get_label_list(&self) -> Result<Vec<DownloadLabel>> {
        self.calls.borrow_mut().push(Call::List);
        Ok(self.labels.borrow().clone())
    }

    async fn contain_label(&self, text: &str) -> Result<bool> {
        self.calls.borrow_mut().push(Call::Contain(text.to_string()));
        Ok(self.labels.borrow().iter().any(|l| l.label == text))
    }

    async fn add_label(&self, text: &str) -> Result<DownloadLabel> {
        self.calls.borrow_mut().push(Call::Add(text.to_string()));
        Ok(self.push(text))
    }

    async fn move_label(&self, from: usize, to: usize) -> Result<()> {
        self.calls.borrow_mut().push(Call::Move(from, to));
        let mut labels = self.labels.borrow_mut();
        if from >= labels.len() || to >= labels.len() {
            bail!("out of range");
        }
        let moved = labels.remove(from);
        labels.insert(to, moved);
        Ok(())
    }

    async fn delete_label(&self, id: LabelId) -> Result<()> {
        self.calls.borrow_mut().push(Call::Delete(id));
        self.labels.borrow_mut().retain(|l| l.id != id);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ViewEvent {
    Inserted(usize),
    Moved(usize, usize),
    Removed(usize),
    Show(ViewState),
}

#[derive(Default)]
struct RecordingView {
    events: Vec<ViewEvent>,
}

impl ListView for RecordingView {
    fn notify_item_inserted(&mut self, position: usize) {
        self.events.push(ViewEvent::Inserted(position));
    }

    fn notify_item_moved(&mut self, from: usize, to: usize) {
        self.events.push(ViewEvent::Moved(from, to));
    }

    fn notify_item_removed(&mut self, position: usize) {
        self.events.push(ViewEvent::Removed(position));
    }

    fn show(&mut self, state: ViewState) {
        self.events.push(ViewEvent::Show(state));
    }
}

type Scene = LabelScene<FakeManager, RecordingView>;

async fn attached(texts: &[&str], swipe: SwipeAction) -> Scene {
    let mut scene = LabelScene::new(
        FakeManager::with(texts),
        RecordingView::default(),
        "Default",
        swipe,
    );
    scene.attach().await.unwrap();
    scene
}

async fn try_add(scene: &mut Scene, text: &str) -> AddOutcome {
    assert_eq!(scene.on_menu_item(MenuItem::AddLabel), SceneAction::DialogOpened);
    scene.dialog_mut().unwrap().set_text(text);
    scene.confirm_new_label().await.unwrap()
}

#[tokio::test]
async fn attach_shows_empty_or_populated() {
    let scene = attached(&[], SwipeAction::None).await;
    assert_eq!(scene.view_state(), ViewState::Empty);
    assert_eq!(scene.view().events, vec![ViewEvent::Show(ViewState::Empty)]);

    let scene = attached(&["a"], SwipeAction::None).await;
    assert_eq!(scene.view_state(), ViewState::Populated);
    assert_eq!(scene.item_count(), 1);
    assert_eq!(scene.label_at(0), Some("a"));
}

#[tokio::test]
async fn detached_scene_reads_as_empty() {
    let mut scene = attached(&["a", "b"], SwipeAction::None).await;
    assert_eq!(scene.item_id(1), 2);
    scene.detach();
    assert!(!scene.is_attached());
    assert_eq!(scene.item_count(), 0);
    assert_eq!(scene.item_id(0), 0);
    assert_eq!(scene.label_at(0), None);
    assert!(scene.labels().is_empty());
}

#[tokio::test]
async fn item_id_out_of_range_is_zero() {
    let scene = attached(&["a"], SwipeAction::None).await;
    assert_eq!(scene.item_id(0), 1);
    assert_eq!(scene.item_id(5), 0);
}

#[tokio::test]
async fn empty_text_is_rejected_and_dialog_stays_open() {
    let mut scene = attached(&[], SwipeAction::None).await;
    assert_eq!(try_add(&mut scene, "").await, AddOutcome::Rejected(LabelError::Empty));
    assert_eq!(scene.dialog().unwrap().error(), Some(LabelError::Empty));
    // The collaborator is never asked about invalid text.
    assert_eq!(scene.manager().calls(), vec![Call::List]);
}

#[tokio::test]
async fn default_label_name_is_invalid_and_not_stored() {
    let mut scene = attached(&["a"], SwipeAction::None).await;
    assert_eq!(
        try_add(&mut scene, "Default").await,
        AddOutcome::Rejected(LabelError::Invalid)
    );
    assert_eq!(scene.item_count(), 1);
    assert_eq!(scene.manager().ids(), vec![1]);
    assert!(!scene.manager().calls().iter().any(|c| matches!(c, Call::Add(_))));
}

#[tokio::test]
async fn duplicate_is_rejected_with_exists() {
    let mut scene = attached(&["Comics"], SwipeAction::None).await;
    assert_eq!(
        try_add(&mut scene, "Comics").await,
        AddOutcome::Rejected(LabelError::Exists)
    );
    assert_eq!(scene.item_count(), 1);
    assert!(scene.dialog().is_some());
}

#[tokio::test]
async fn retry_after_rejection_succeeds() {
    let mut scene = attached(&["Comics"], SwipeAction::None).await;
    assert_eq!(
        try_add(&mut scene, "Comics").await,
        AddOutcome::Rejected(LabelError::Exists)
    );
    scene.dialog_mut().unwrap().set_text("Magazines");
    let outcome = scene.confirm_new_label().await.unwrap();
    assert!(matches!(outcome, AddOutcome::Added(ref l) if l.label == "Magazines"));
    assert!(scene.dialog().is_none());
}

#[tokio::test]
async fn first_add_inserts_row_and_turns_populated() {
    let mut scene = attached(&[], SwipeAction::None).await;
    let outcome = try_add(&mut scene, "Artbooks").await;
    let AddOutcome::Added(label) = outcome else {
        panic!("expected Added, got {outcome:?}");
    };
    assert_eq!(scene.item_count(), 1);
    assert_eq!(scene.item_id(0), label.id);
    assert_eq!(scene.view_state(), ViewState::Populated);
    assert_eq!(
        scene.view().events,
        vec![
            ViewEvent::Show(ViewState::Empty),
            ViewEvent::Inserted(0),
            ViewEvent::Show(ViewState::Populated),
        ]
    );
}

#[tokio::test]
async fn confirm_without_dialog_does_nothing() {
    let mut scene = attached(&[], SwipeAction::None).await;
    assert_eq!(scene.confirm_new_label().await.unwrap(), AddOutcome::NoDialog);
}

#[tokio::test]
async fn move_to_same_index_is_a_no_op() {
    let mut scene = attached(&["a", "b"], SwipeAction::None).await;
    let events_before = scene.view().events.len();
    scene.move_item(1, 1).await.unwrap();
    assert_eq!(scene.manager().calls(), vec![Call::List]);
    assert_eq!(scene.view().events.len(), events_before);
}

#[tokio::test]
async fn move_keeps_snapshot_in_sync_with_collaborator() {
    let mut scene = attached(&["a", "b", "c"], SwipeAction::None).await;
    scene.move_item(0, 2).await.unwrap();

    assert!(scene.manager().calls().contains(&Call::Move(0, 2)));
    assert!(scene.view().events.contains(&ViewEvent::Moved(0, 2)));
    let snapshot: Vec<LabelId> = (0..scene.item_count()).map(|i| scene.item_id(i)).collect();
    assert_eq!(snapshot, scene.manager().ids());
    assert_eq!(scene.label_at(2), Some("a"));
}

#[tokio::test]
async fn failed_move_leaves_snapshot_untouched() {
    let mut scene = attached(&["a", "b"], SwipeAction::None).await;
    assert!(scene.move_item(0, 9).await.is_err());
    assert_eq!(scene.label_at(0), Some("a"));
    assert!(!scene.view().events.iter().any(|e| matches!(e, ViewEvent::Moved(..))));
}

#[tokio::test]
async fn move_beyond_stale_snapshot_is_rejected_before_storing() {
    let mut scene = attached(&["a", "b"], SwipeAction::None).await;
    // Another writer appends after the snapshot was taken.
    scene.manager().push("c");

    assert!(scene.move_item(0, 2).await.is_err());
    assert!(!scene.manager().calls().iter().any(|c| matches!(c, Call::Move(..))));
    assert_eq!(scene.manager().ids(), vec![1, 2, 3]);
    assert_eq!(scene.view().events, vec![ViewEvent::Show(ViewState::Populated)]);
    let snapshot: Vec<LabelId> = scene.labels().iter().map(|l| l.id).collect();
    assert_eq!(snapshot, vec![1, 2]);
}

#[tokio::test]
async fn store_failure_leaves_snapshot_and_view_untouched() {
    let mut scene = attached(&["a", "b", "c"], SwipeAction::None).await;
    scene.manager().labels.borrow_mut().pop();

    assert!(scene.move_item(0, 2).await.is_err());
    assert!(scene.manager().calls().contains(&Call::Move(0, 2)));
    assert_eq!(scene.label_at(0), Some("a"));
    assert!(!scene.view().events.iter().any(|e| matches!(e, ViewEvent::Moved(..))));
}

#[tokio::test]
async fn move_on_detached_scene_is_rejected() {
    let mut scene = attached(&["a", "b"], SwipeAction::None).await;
    scene.detach();
    assert!(scene.move_item(0, 1).await.is_err());
    assert_eq!(scene.manager().calls(), vec![Call::List]);
}

#[tokio::test]
async fn drag_starts_only_on_handle() {
    let scene = attached(&["a"], SwipeAction::None).await;
    let layout = RowLayout {
        drag_handle: Rect::new(300, 0, 348, 48),
    };
    assert!(scene.can_start_drag(0, &layout, 320, 24));
    assert!(!scene.can_start_drag(0, &layout, 100, 24));
    assert!(!scene.can_start_drag(3, &layout, 320, 24));
}

#[tokio::test]
async fn swipe_is_ignored_by_default() {
    let mut scene = attached(&["a"], SwipeAction::None).await;
    assert_eq!(scene.swipe_reaction(0), SwipeReaction::BothHorizontal);
    for result in [SwipeResult::SwipedLeft, SwipeResult::SwipedRight, SwipeResult::Canceled] {
        assert_eq!(scene.on_swipe_item(0, result).await.unwrap(), SwipeOutcome::Ignored);
    }
    assert_eq!(scene.item_count(), 1);
    assert_eq!(scene.manager().calls(), vec![Call::List]);
}

#[tokio::test]
async fn swipe_remove_deletes_and_updates_state() {
    let mut scene = attached(&["a"], SwipeAction::Remove).await;
    assert_eq!(
        scene.on_swipe_item(0, SwipeResult::Canceled).await.unwrap(),
        SwipeOutcome::Ignored
    );

    let outcome = scene.on_swipe_item(0, SwipeResult::SwipedLeft).await.unwrap();
    assert!(matches!(outcome, SwipeOutcome::Removed(ref l) if l.label == "a"));
    assert!(scene.manager().calls().contains(&Call::Delete(1)));
    assert_eq!(scene.item_count(), 0);
    assert_eq!(scene.view_state(), ViewState::Empty);
    assert!(scene.view().events.contains(&ViewEvent::Removed(0)));
}

#[tokio::test]
async fn navigation_click_goes_back() {
    let mut scene = attached(&[], SwipeAction::None).await;
    assert_eq!(scene.on_navigation_click(), SceneAction::Back);
}

#[tokio::test]
async fn scene_over_sqlite_store() {
    let db = open_memory().await.unwrap();
    let mut scene = LabelScene::new(
        db.clone(),
        RecordingView::default(),
        "Default",
        SwipeAction::Remove,
    );
    scene.attach().await.unwrap();

    for text in ["a", "b", "c"] {
        scene.on_menu_item(MenuItem::AddLabel);
        scene.dialog_mut().unwrap().set_text(text);
        assert!(matches!(scene.confirm_new_label().await.unwrap(), AddOutcome::Added(_)));
    }
    scene.move_item(2, 0).await.unwrap();
    scene.on_swipe_item(1, SwipeResult::SwipedRight).await.unwrap();

    let stored = db.get_label_list().await.unwrap();
    assert_eq!(stored.as_slice(), scene.labels());
    let texts: Vec<&str> = stored.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(texts, vec!["c", "b"]);
}
