use twodo_core::{
    Category, HostConfirmed, HostProvidedText, ItemStore, KeyValueStore, MemoryKeyValueStore,
    PersistenceGateway, StoreError, TodoService, CATEGORY_KEY, ITEMS_KEY,
};
use uuid::Uuid;

fn service_over_fresh_storage() -> TodoService<MemoryKeyValueStore> {
    TodoService::hydrate(PersistenceGateway::new(MemoryKeyValueStore::new()))
}

#[test]
fn hydrate_on_first_run_yields_empty_defaults() {
    let service = service_over_fresh_storage();

    assert!(service.items().is_empty());
    assert_eq!(service.active_category(), Category::Today);
}

#[test]
fn hydrate_falls_back_to_defaults_on_corrupt_state() {
    let storage = MemoryKeyValueStore::new();
    storage.put(ITEMS_KEY, "{broken").unwrap();
    storage.put(CATEGORY_KEY, "42").unwrap();

    let service = TodoService::hydrate(PersistenceGateway::new(storage));

    assert!(service.items().is_empty());
    assert_eq!(service.active_category(), Category::Today);
}

#[test]
fn hydrate_restores_previously_persisted_state() {
    let storage = MemoryKeyValueStore::new();
    {
        let gateway = PersistenceGateway::new(&storage);
        let mut items = ItemStore::new();
        items.add("persisted earlier", Category::Work);
        gateway.save_items(&items).unwrap();
        gateway.save_category(Category::Work).unwrap();
    }

    let service = TodoService::hydrate(PersistenceGateway::new(&storage));

    assert_eq!(service.items().len(), 1);
    assert_eq!(service.active_category(), Category::Work);
    let (_, item) = service.visible_items().next().unwrap();
    assert_eq!(item.text, "persisted earlier");
}

#[test]
fn add_item_uses_active_category_and_persists() {
    let storage = MemoryKeyValueStore::new();
    let mut service = TodoService::hydrate(PersistenceGateway::new(&storage));
    service.set_active_category(Category::Work);

    let id = service.add_item("write report").unwrap();
    assert_eq!(service.items().get(id).unwrap().category, Category::Work);

    // A second service over the same storage sees the mutation.
    let rehydrated = TodoService::hydrate(PersistenceGateway::new(&storage));
    assert!(rehydrated.items().contains(id));
}

#[test]
fn add_item_with_empty_text_is_a_silent_noop() {
    let mut service = service_over_fresh_storage();

    assert_eq!(service.add_item(""), None);
    assert!(service.items().is_empty());
}

#[test]
fn delete_item_requires_confirmation() {
    let mut service = service_over_fresh_storage();
    let id = service.add_item("precious").unwrap();

    assert!(!service.delete_item(id, &HostConfirmed(false)));
    assert!(service.items().contains(id));

    assert!(service.delete_item(id, &HostConfirmed(true)));
    assert!(!service.items().contains(id));
}

#[test]
fn delete_item_on_absent_id_is_a_noop() {
    let mut service = service_over_fresh_storage();
    service.add_item("kept");

    assert!(!service.delete_item(Uuid::new_v4(), &HostConfirmed(true)));
    assert_eq!(service.items().len(), 1);
}

#[test]
fn deletion_is_persisted() {
    let storage = MemoryKeyValueStore::new();
    let mut service = TodoService::hydrate(PersistenceGateway::new(&storage));
    let id = service.add_item("to be removed").unwrap();

    service.delete_item(id, &HostConfirmed(true));

    let rehydrated = TodoService::hydrate(PersistenceGateway::new(&storage));
    assert!(rehydrated.items().is_empty());
}

#[test]
fn toggle_complete_flips_and_persists() {
    let storage = MemoryKeyValueStore::new();
    let mut service = TodoService::hydrate(PersistenceGateway::new(&storage));
    let id = service.add_item("flip me").unwrap();

    assert!(service.toggle_complete(id).unwrap());

    let rehydrated = TodoService::hydrate(PersistenceGateway::new(&storage));
    assert!(rehydrated.items().get(id).unwrap().is_complete);
}

#[test]
fn toggle_complete_on_absent_id_propagates_not_found() {
    let mut service = service_over_fresh_storage();
    let missing = Uuid::new_v4();

    let err = service.toggle_complete(missing).unwrap_err();
    assert_eq!(err, StoreError::NotFound(missing));
}

#[test]
fn edit_item_applies_prompt_result() {
    let mut service = service_over_fresh_storage();
    let id = service.add_item("draft wording").unwrap();

    let changed = service
        .edit_item(id, &HostProvidedText(Some("final wording".to_string())))
        .unwrap();

    assert!(changed);
    assert_eq!(service.items().get(id).unwrap().text, "final wording");
}

#[test]
fn edit_item_with_cancelled_prompt_changes_nothing() {
    let mut service = service_over_fresh_storage();
    let id = service.add_item("unchanged").unwrap();

    let changed = service.edit_item(id, &HostProvidedText(None)).unwrap();

    assert!(!changed);
    assert_eq!(service.items().get(id).unwrap().text, "unchanged");
}

#[test]
fn edit_item_on_absent_id_propagates_not_found() {
    let mut service = service_over_fresh_storage();
    let missing = Uuid::new_v4();

    let err = service
        .edit_item(missing, &HostProvidedText(Some("anything".to_string())))
        .unwrap_err();
    assert_eq!(err, StoreError::NotFound(missing));
}

#[test]
fn visible_items_follow_the_active_category() {
    let mut service = service_over_fresh_storage();
    service.add_item("today entry");
    service.set_active_category(Category::Work);
    service.add_item("work entry");

    let work_texts: Vec<_> = service
        .visible_items()
        .map(|(_, item)| item.text.clone())
        .collect();
    assert_eq!(work_texts, vec!["work entry".to_string()]);

    service.set_active_category(Category::Today);
    let today_texts: Vec<_> = service
        .visible_items()
        .map(|(_, item)| item.text.clone())
        .collect();
    assert_eq!(today_texts, vec!["today entry".to_string()]);
}

#[test]
fn flip_category_persists_flag_without_touching_items() {
    let storage = MemoryKeyValueStore::new();
    let mut service = TodoService::hydrate(PersistenceGateway::new(&storage));
    service.add_item("stays put");

    assert_eq!(service.flip_category(), Category::Work);

    let rehydrated = TodoService::hydrate(PersistenceGateway::new(&storage));
    assert_eq!(rehydrated.active_category(), Category::Work);
    assert_eq!(rehydrated.items().len(), 1);
}
