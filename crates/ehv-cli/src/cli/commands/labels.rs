//! `ehv labels`, `add-label`, `move-label`, `swipe-label`.

use anyhow::{bail, Result};
use ehv_core::config::EhvConfig;
use ehv_core::labels::{
    AddOutcome, LabelDb, LabelScene, MenuItem, SwipeOutcome, SwipeResult, ViewState,
};

use super::super::console_view::ConsoleView;

type Scene = LabelScene<LabelDb, ConsoleView>;

async fn attach(db: LabelDb, cfg: &EhvConfig) -> Result<Scene> {
    let mut scene = LabelScene::from_config(db, ConsoleView::default(), cfg);
    scene.attach().await?;
    Ok(scene)
}

fn print_rows(scene: &Scene) {
    if scene.view().state == Some(ViewState::Empty) {
        println!("No labels. Add one with `ehv add-label <text>`.");
        return;
    }
    println!("{:<4} {:<6} {}", "POS", "ID", "LABEL");
    for pos in 0..scene.item_count() {
        println!(
            "{:<4} {:<6} {}",
            pos,
            scene.item_id(pos),
            scene.label_at(pos).unwrap_or_default()
        );
    }
}

pub async fn run_labels(db: LabelDb, cfg: &EhvConfig) -> Result<()> {
    let mut scene = attach(db, cfg).await?;
    print_rows(&scene);
    scene.detach();
    Ok(())
}

pub async fn run_add_label(db: LabelDb, cfg: &EhvConfig, text: &str) -> Result<()> {
    let mut scene = attach(db, cfg).await?;
    scene.on_menu_item(MenuItem::AddLabel);
    if let Some(dialog) = scene.dialog_mut() {
        dialog.set_text(text);
    }
    let outcome = scene.confirm_new_label().await?;
    scene.detach();
    match outcome {
        AddOutcome::Added(label) => {
            println!("Added label {}: {}", label.id, label.label);
            Ok(())
        }
        AddOutcome::Rejected(e) => bail!("{e}"),
        AddOutcome::NoDialog => bail!("new label dialog is not open"),
    }
}

pub async fn run_move_label(db: LabelDb, cfg: &EhvConfig, from: usize, to: usize) -> Result<()> {
    let mut scene = attach(db, cfg).await?;
    if from >= scene.item_count() || to >= scene.item_count() {
        bail!(
            "position out of range: {from} -> {to} ({} labels)",
            scene.item_count()
        );
    }
    scene.move_item(from, to).await?;
    print_rows(&scene);
    scene.detach();
    Ok(())
}

pub async fn run_swipe_label(
    db: LabelDb,
    cfg: &EhvConfig,
    position: usize,
    result: SwipeResult,
) -> Result<()> {
    let mut scene = attach(db, cfg).await?;
    match scene.on_swipe_item(position, result).await? {
        SwipeOutcome::Removed(label) => println!("Removed label {}: {}", label.id, label.label),
        SwipeOutcome::Ignored => println!(
            "Swipe ignored (swipe_action = {:?})",
            scene.swipe_action()
        ),
    }
    scene.detach();
    Ok(())
}
