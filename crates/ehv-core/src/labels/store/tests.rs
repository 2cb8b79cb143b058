//! Tests for the label store (in-memory DB).

use super::open_memory;
use crate::labels::DownloadManager;

async fn texts(db: &super::LabelDb) -> Vec<String> {
    db.get_label_list()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.label)
        .collect()
}

#[tokio::test]
async fn add_and_list_in_insertion_order() {
    let db = open_memory().await.unwrap();
    assert!(db.get_label_list().await.unwrap().is_empty());

    let a = db.add_label("Artbooks").await.unwrap();
    let b = db.add_label("Comics").await.unwrap();
    assert_ne!(a.id, b.id);

    let list = db.get_label_list().await.unwrap();
    assert_eq!(list, vec![a, b]);
}

#[tokio::test]
async fn contain_label_is_exact_and_case_sensitive() {
    let db = open_memory().await.unwrap();
    db.add_label("Comics").await.unwrap();
    assert!(db.contain_label("Comics").await.unwrap());
    assert!(!db.contain_label("comics").await.unwrap());
    assert!(!db.contain_label("Comic").await.unwrap());
}

#[tokio::test]
async fn duplicate_insert_is_rejected_by_schema() {
    let db = open_memory().await.unwrap();
    db.add_label("Comics").await.unwrap();
    assert!(db.add_label("Comics").await.is_err());
    assert_eq!(texts(&db).await, vec!["Comics"]);
}

#[tokio::test]
async fn move_label_forward_and_back() {
    let db = open_memory().await.unwrap();
    for t in ["a", "b", "c", "d"] {
        db.add_label(t).await.unwrap();
    }
    let ids_before: Vec<i64> = db
        .get_label_list()
        .await
        .unwrap()
        .iter()
        .map(|l| l.id)
        .collect();

    db.move_label(0, 2).await.unwrap();
    assert_eq!(texts(&db).await, vec!["b", "c", "a", "d"]);

    db.move_label(3, 0).await.unwrap();
    assert_eq!(texts(&db).await, vec!["d", "b", "c", "a"]);

    // Ids are stable; only order changes.
    let mut ids_after: Vec<i64> = db
        .get_label_list()
        .await
        .unwrap()
        .iter()
        .map(|l| l.id)
        .collect();
    ids_after.sort();
    assert_eq!(ids_after, ids_before);
}

#[tokio::test]
async fn move_label_out_of_range_fails_without_change() {
    let db = open_memory().await.unwrap();
    db.add_label("a").await.unwrap();
    db.add_label("b").await.unwrap();
    assert!(db.move_label(0, 2).await.is_err());
    assert!(db.move_label(5, 0).await.is_err());
    assert_eq!(texts(&db).await, vec!["a", "b"]);
}

#[tokio::test]
async fn delete_then_append_keeps_order() {
    let db = open_memory().await.unwrap();
    let a = db.add_label("a").await.unwrap();
    db.add_label("b").await.unwrap();
    db.delete_label(a.id).await.unwrap();
    db.add_label("c").await.unwrap();
    assert_eq!(texts(&db).await, vec!["b", "c"]);
    assert!(db.delete_label(a.id).await.is_err());
}
