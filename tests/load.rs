use person_store::{Error, Person, PersonStore};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn open_missing_file_creates_empty_collection() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("people.json");
    assert!(!path.exists());

    let store = PersonStore::open(&path).unwrap();
    assert!(store.is_empty());
    assert!(store.list().people.is_empty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"people":[]}"#);
}

#[test]
fn open_missing_parent_dir_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope").join("people.json");
    let err = PersonStore::open(&path).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn open_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = PersonStore::open(dir.path()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn open_existing_file_loads_records_in_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("people.json");
    let doc = json!({"people": [
        {"id": 4, "name": "D", "email": "d@example.com"},
        {"id": 2, "name": "B", "address": {"city": "Recife"}}
    ]});
    std::fs::write(&path, serde_json::to_vec(&doc).unwrap()).unwrap();

    let store = PersonStore::open(&path).unwrap();
    let ids: Vec<_> = store.list().people.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![4, 2]);
    assert_eq!(store.get(2).unwrap().fields["address"]["city"], "Recife");
    assert_eq!(serde_json::to_value(store.list()).unwrap(), doc);
}

#[test]
fn malformed_file_is_decode_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("people.json");
    std::fs::write(&path, b"{\"people\": [").unwrap();

    let err = PersonStore::open(&path).unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
    // nothing is overwritten on failure
    assert_eq!(std::fs::read(&path).unwrap(), b"{\"people\": [");
}

#[test]
fn record_without_id_is_decode_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("people.json");
    std::fs::write(&path, br#"{"people": [{"name": "no id"}]}"#).unwrap();
    assert!(matches!(PersonStore::open(&path), Err(Error::Decode(_))));
}

#[test]
fn repeated_id_in_file_is_decode_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("people.json");
    std::fs::write(&path, br#"{"people": [{"id": 1}, {"id": 1}]}"#).unwrap();

    let err = PersonStore::open(&path).unwrap_err();
    match err {
        Error::Decode(msg) => assert!(msg.contains("id 1")),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn empty_file_is_an_empty_collection() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("people.json");
    std::fs::write(&path, b"").unwrap();

    let store = PersonStore::open(&path).unwrap();
    assert!(store.is_empty());
    store.create(Person::new(1)).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        r#"{"people":[{"id":1}]}"#
    );
}

#[test]
fn document_without_people_field_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("people.json");
    std::fs::write(&path, b"{}").unwrap();
    assert!(PersonStore::open(&path).unwrap().is_empty());
}
