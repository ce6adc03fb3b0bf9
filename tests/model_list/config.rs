//! Lists built from configuration

use crate::common::*;
use modelkit::{Error, ListConfig, ModelList, Record, Value, CONFIG_FILE_NAME};
use tempfile::TempDir;

#[test]
fn default_toml_parses_to_default() {
    let config = ListConfig::from_toml_str(ListConfig::default_toml()).unwrap();
    assert_eq!(config, ListConfig::default());
    assert_eq!(config.key, "id");
}

#[test]
fn list_from_config_file() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "key = \"name\"\ndedupe_on_load = true\n").unwrap();

    let config = ListConfig::from_file(&path).unwrap();
    let mut models = people();
    models.push(person(9, "tom"));

    let list = ModelList::from_config(&config, models).unwrap();
    assert_eq!(list.key(), "name");
    assert_eq!(names(&list), ["tom", "dick", "harry"]);
    assert_eq!(list.get(&Value::from("tom")).and_then(|m| m.get("id")), Some(&id(1)));
}

#[test]
fn written_config_reads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    let config = ListConfig {
        key: "windowId".to_string(),
        dedupe_on_load: true,
    };
    config.write_to_file(&path).unwrap();
    assert_eq!(ListConfig::from_file(&path).unwrap(), config);
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(ListConfig::from_file(&dir.path().join("absent.toml")).is_err());
}

#[test]
fn invalid_key_is_rejected() {
    let err = ListConfig::from_toml_str("key = \"\"").unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));

    let config = ListConfig::with_key("");
    assert!(ModelList::<Record>::from_config(&config, people()).is_err());
}

#[test]
fn without_dedupe_duplicates_are_kept() {
    let mut models = people();
    models.push(person(1, "tom again"));
    let list = ModelList::from_config(&ListConfig::default(), models).unwrap();
    assert_eq!(list.len(), 4);
    assert_eq!(list.get_index(&id(1)), 0);
}
