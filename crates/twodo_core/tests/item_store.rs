use std::collections::HashSet;
use twodo_core::{Category, ItemStore, StoreError};
use uuid::Uuid;

#[test]
fn add_and_get_roundtrip() {
    let mut store = ItemStore::new();

    let id = store.add("buy milk", Category::Today).unwrap();

    let item = store.get(id).unwrap();
    assert_eq!(item.text, "buy milk");
    assert_eq!(item.category, Category::Today);
    assert!(!item.is_complete);
    assert_eq!(store.len(), 1);
}

#[test]
fn add_with_empty_text_leaves_store_unchanged() {
    let mut store = ItemStore::new();
    store.add("existing", Category::Work);
    let before = store.clone();

    assert_eq!(store.add("", Category::Work), None);
    assert_eq!(store, before);
}

#[test]
fn add_assigns_unique_ids() {
    let mut store = ItemStore::new();

    let ids: HashSet<_> = (0..64)
        .map(|n| store.add(&format!("item {n}"), Category::Today).unwrap())
        .collect();

    assert_eq!(ids.len(), 64);
    assert_eq!(store.len(), 64);
}

#[test]
fn remove_returns_the_item_and_is_a_noop_when_absent() {
    let mut store = ItemStore::new();
    let id = store.add("short lived", Category::Today).unwrap();
    let before_missing = store.clone();

    assert_eq!(store.remove(Uuid::new_v4()), None);
    assert_eq!(store, before_missing);

    let removed = store.remove(id).unwrap();
    assert_eq!(removed.text, "short lived");
    assert!(store.is_empty());
}

#[test]
fn toggle_complete_twice_restores_original_state() {
    let mut store = ItemStore::new();
    let id = store.add("idempotence check", Category::Work).unwrap();

    assert!(store.toggle_complete(id).unwrap());
    assert!(store.get(id).unwrap().is_complete);

    assert!(!store.toggle_complete(id).unwrap());
    assert!(!store.get(id).unwrap().is_complete);
}

#[test]
fn toggle_complete_on_missing_id_returns_not_found() {
    let mut store = ItemStore::new();
    let missing = Uuid::new_v4();

    let err = store.toggle_complete(missing).unwrap_err();
    assert_eq!(err, StoreError::NotFound(missing));
}

#[test]
fn edit_text_replaces_text_and_accepts_empty_replacement() {
    let mut store = ItemStore::new();
    let id = store.add("draft", Category::Today).unwrap();

    store.edit_text(id, "final").unwrap();
    assert_eq!(store.get(id).unwrap().text, "final");

    store.edit_text(id, "").unwrap();
    assert_eq!(store.get(id).unwrap().text, "");
}

#[test]
fn edit_text_on_missing_id_returns_not_found() {
    let mut store = ItemStore::new();
    let missing = Uuid::new_v4();

    let err = store.edit_text(missing, "anything").unwrap_err();
    assert_eq!(err, StoreError::NotFound(missing));
}

#[test]
fn edit_text_does_not_change_category_or_completion() {
    let mut store = ItemStore::new();
    let id = store.add("stable fields", Category::Work).unwrap();
    store.toggle_complete(id).unwrap();

    store.edit_text(id, "renamed").unwrap();

    let item = store.get(id).unwrap();
    assert_eq!(item.category, Category::Work);
    assert!(item.is_complete);
}

#[test]
fn list_by_category_partitions_the_whole_store() {
    let mut store = ItemStore::new();
    store.add("today a", Category::Today);
    store.add("work a", Category::Work);
    store.add("today b", Category::Today);
    store.add("work b", Category::Work);

    let today: Vec<_> = store.list_by_category(Category::Today).collect();
    let work: Vec<_> = store.list_by_category(Category::Work).collect();

    assert!(today.iter().all(|(_, item)| item.category == Category::Today));
    assert!(work.iter().all(|(_, item)| item.category == Category::Work));

    let listed: HashSet<_> = today
        .iter()
        .chain(work.iter())
        .map(|(id, _)| *id)
        .collect();
    let all: HashSet<_> = store.iter().map(|(id, _)| id).collect();
    assert_eq!(listed, all);
    assert_eq!(listed.len(), 4);
}

#[test]
fn full_item_lifecycle_scenario() {
    let mut store = ItemStore::new();
    assert!(store.is_empty());

    let id = store.add("Buy milk", Category::Today).unwrap();
    let item = store.get(id).unwrap();
    assert_eq!(item.text, "Buy milk");
    assert_eq!(item.category, Category::Today);
    assert!(!item.is_complete);

    assert!(store.toggle_complete(id).unwrap());
    assert!(store.get(id).unwrap().is_complete);

    store.remove(id);
    assert!(store.is_empty());
}
