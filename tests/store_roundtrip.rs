use roster::api::RosterApi;
use roster::error::RosterError;
use roster::model::{default_employees, Employee};
use roster::store::fs::FileStore;
use roster::store::RecordStore;
use std::fs;
use tempfile::TempDir;

fn sample() -> Vec<Employee> {
    vec![
        Employee::new("Jane Roe", 34, "Designer", 52000.5, "Design", "Lisbon").unwrap(),
        Employee::new("John Smith", 41, "Architect", 88000.0, "Engineering", "Oslo").unwrap(),
        Employee::new("Anna Lee", 29, "Data Analyst", 61000.0, "Finance", "Madrid").unwrap(),
    ]
}

#[test]
fn save_then_load_round_trips() {
    let temp = TempDir::new().unwrap();
    let mut store = FileStore::new(temp.path().join("employees.json"));
    let employees = sample();

    store.save(&employees).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, employees);
}

#[test]
fn file_is_a_pretty_array_with_four_space_indent() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("employees.json");
    let mut store = FileStore::new(&path);

    store.save(&sample()).unwrap();
    let content = fs::read_to_string(&path).unwrap();

    assert!(content.starts_with("[\n    {\n        \"name\""));

    // Keys appear in declaration order within each object.
    let first_object = &content[..content.find('}').unwrap()];
    let keys = [
        "\"name\"",
        "\"age\"",
        "\"position\"",
        "\"salary\"",
        "\"department\"",
        "\"location\"",
    ];
    let positions: Vec<usize> = keys.iter().map(|k| first_object.find(k).unwrap()).collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn save_creates_missing_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("dir").join("employees.json");
    let mut store = FileStore::new(&path);

    store.save(&sample()).unwrap();

    assert!(path.exists());
}

#[test]
fn loading_a_missing_file_is_a_not_found_io_error() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("nope.json"));

    match store.load() {
        Err(RosterError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected a not-found IO error, got {:?}", other),
    }
}

#[test]
fn loading_garbage_is_a_serialization_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("employees.json");
    fs::write(&path, "not json at all").unwrap();
    let store = FileStore::new(&path);

    assert!(matches!(
        store.load(),
        Err(RosterError::Serialization(_))
    ));
}

#[test]
fn loading_an_invalid_record_is_a_serialization_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("employees.json");
    // Well-formed JSON, but age 0 fails record validation.
    fs::write(
        &path,
        r#"[{"name":"X","age":0,"position":"Y","salary":1.0,"department":"Z","location":"W"}]"#,
    )
    .unwrap();
    let store = FileStore::new(&path);

    assert!(matches!(
        store.load(),
        Err(RosterError::Serialization(_))
    ));
}

#[test]
fn bootstrap_against_a_missing_file_seeds_and_persists_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("employees.json");

    let (api, messages) = RosterApi::open(FileStore::new(&path));

    assert_eq!(api.employees(), default_employees());
    assert_eq!(messages.len(), 1);

    // The file now exists and contains exactly the defaults.
    let reloaded = FileStore::new(&path).load().unwrap();
    assert_eq!(reloaded, default_employees());
}

#[test]
fn bootstrap_against_a_corrupt_file_recovers_to_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("employees.json");
    fs::write(&path, "{{{{").unwrap();

    let (api, messages) = RosterApi::open(FileStore::new(&path));

    assert_eq!(api.employees(), default_employees());
    assert_eq!(messages.len(), 1);
    assert_eq!(FileStore::new(&path).load().unwrap(), default_employees());
}

#[test]
fn bootstrap_against_an_existing_file_keeps_its_records() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("employees.json");
    let employees = sample();
    FileStore::new(&path).save(&employees).unwrap();

    let (api, messages) = RosterApi::open(FileStore::new(&path));

    assert_eq!(api.employees(), employees);
    assert!(messages.is_empty());
}
