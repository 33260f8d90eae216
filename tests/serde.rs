#![cfg(feature = "serde")]

use serde_json::json;
use textlist::{make_delete_selected_undo, TextItem, TextList, UndoAction};

#[test]
fn list_round_trip() {
    let list = TextList::from_items(vec![
        TextItem::with_id("1", "one", false),
        TextItem::with_id("2", "two", true),
    ])
    .unwrap();
    let value = serde_json::to_value(&list).unwrap();
    assert_eq!(
        value,
        json!([
            { "id": "1", "value": "one", "selected": false },
            { "id": "2", "value": "two", "selected": true }
        ])
    );
    let back: TextList = serde_json::from_value(value).unwrap();
    assert_eq!(back, list);
}

#[test]
fn duplicate_ids_are_rejected() {
    let value = json!([
        { "id": "1", "value": "one", "selected": false },
        { "id": "1", "value": "again", "selected": false }
    ]);
    let err = serde_json::from_value::<TextList>(value).unwrap_err();
    assert!(err.to_string().contains("duplicate item id `1`"));
}

#[test]
fn blank_values_are_rejected() {
    let value = json!([{ "id": "1", "value": "   ", "selected": false }]);
    let err = serde_json::from_value::<TextList>(value).unwrap_err();
    assert!(err.to_string().contains("item `1` has a blank value"));
}

#[test]
fn actions_are_tagged() {
    let action = make_delete_selected_undo(vec![TextItem::with_id("2", "two", true)]);
    let value = serde_json::to_value(&action).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "DELETE_SELECTED",
            "deletedItems": [{ "id": "2", "value": "two", "selected": true }]
        })
    );
    let back: UndoAction = serde_json::from_value(value).unwrap();
    assert_eq!(back, action);
}
