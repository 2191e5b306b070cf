use twodo_core::{Category, Item};

#[test]
fn item_new_sets_defaults() {
    let item = Item::new("buy milk", Category::Today);

    assert_eq!(item.text, "buy milk");
    assert_eq!(item.category, Category::Today);
    assert!(!item.is_complete);
}

#[test]
fn toggle_complete_flips_and_reports_new_value() {
    let mut item = Item::new("ship release", Category::Work);

    assert!(item.toggle_complete());
    assert!(item.is_complete);
    assert!(!item.toggle_complete());
    assert!(!item.is_complete);
}

#[test]
fn category_flip_switches_partition() {
    assert_eq!(Category::Today.flip(), Category::Work);
    assert_eq!(Category::Work.flip(), Category::Today);
    assert_eq!(Category::default(), Category::Today);
}

#[test]
fn category_labels_are_user_facing_names() {
    assert_eq!(Category::Today.label(), "Today");
    assert_eq!(Category::Work.label(), "Work");
}

#[test]
fn item_serialization_uses_expected_wire_fields() {
    let mut item = Item::new("review PR", Category::Work);
    item.is_complete = true;

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["text"], "review PR");
    assert_eq!(json["category"], "work");
    assert_eq!(json["is_complete"], true);

    let decoded: Item = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn category_serializes_as_lowercase_string() {
    assert_eq!(serde_json::to_string(&Category::Today).unwrap(), "\"today\"");
    assert_eq!(serde_json::to_string(&Category::Work).unwrap(), "\"work\"");
}
