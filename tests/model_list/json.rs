//! Models loaded from and saved to JSON

use crate::common::*;
use modelkit::{Error, ModelList, Record, Value};
use serde_json::json;

fn load(json: serde_json::Value) -> modelkit::Result<Vec<Record>> {
    match json {
        serde_json::Value::Array(items) => items.into_iter().map(Record::from_json).collect(),
        other => Err(Error::NotARecord(format!("{}", other))),
    }
}

#[test]
fn load_dedupe_and_save() {
    let models = load(json!([
        { "id": 1, "name": "jane", "tags": ["a", "b"] },
        { "id": 1, "name": "jill" },
        { "id": 2, "name": "jill", "score": 2.5 }
    ]))
    .unwrap();

    let mut list = ModelList::from_models(models, "id".to_string());
    list.dedupe();
    assert_eq!(names(&list), ["jane", "jill"]);
    assert_eq!(list[1].get("score"), Some(&Value::Float(2.5)));

    let saved: Vec<serde_json::Value> = list.into_iter().map(Record::into_json).collect();
    assert_eq!(saved[0]["tags"], json!(["a", "b"]));
    assert_eq!(saved[1], json!({ "id": 2, "name": "jill", "score": 2.5 }));
}

#[test]
fn non_object_entries_are_rejected() {
    let err = load(json!([{ "id": 1 }, 42])).unwrap_err();
    assert!(matches!(err, Error::NotARecord(_)));
}
