use std::fs;

use setdict::error::StoreError;
use setdict::store::Dictionary;
use tempfile::tempdir;

fn populated() -> Dictionary {
    let mut dictionary = Dictionary::new();
    dictionary.add("test", "one").expect("add");
    dictionary.add("test", "two").expect("add");
    dictionary.add("floop", "one").expect("add");
    dictionary
}

#[test]
fn export_then_import_reproduces_the_store() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("snapshot.json");
    let path = path.to_str().expect("utf-8 path");

    let exported = populated();
    assert_eq!(exported.export(path).expect("export"), "Dictionary exported!");

    let mut imported = Dictionary::new();
    assert_eq!(imported.import(path).expect("import"), "Dictionary imported!");

    assert_eq!(imported.keys(), exported.keys());
    for key in exported.keys() {
        assert_eq!(
            imported.members(&key).expect("key exists"),
            exported.members(&key).expect("key exists"),
            "members of '{key}' should survive the round trip"
        );
    }
}

#[test]
fn export_writes_a_pretty_printed_object_in_store_order() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("snapshot.json");

    populated()
        .export(path.to_str().expect("utf-8 path"))
        .expect("export");
    let text = fs::read_to_string(&path).expect("snapshot readable");

    assert!(text.contains("{\n"), "snapshot should be pretty-printed");
    let test_at = text.find("\"test\"").expect("'test' serialized");
    let floop_at = text.find("\"floop\"").expect("'floop' serialized");
    assert!(test_at < floop_at, "keys should keep store order");
}

#[test]
fn export_requires_a_json_path() {
    let dictionary = populated();
    let err = dictionary.export("snapshot.doc").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid file path. The file must have a '.json' extension"
    );
}

#[test]
fn export_of_an_empty_store_raises() {
    let dictionary = Dictionary::new();
    let err = dictionary.export("snapshot.json").unwrap_err();
    assert_eq!(err.to_string(), "there is nothing to export");
}

#[test]
fn export_into_a_missing_directory_raises() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("no_such_dir").join("snapshot.json");

    let err = populated()
        .export(path.to_str().expect("utf-8 path"))
        .unwrap_err();
    assert!(matches!(err, StoreError::DirectoryNotFound));
    assert_eq!(err.to_string(), "directory not found");
    assert!(!err.recovered(), "a missing directory raises, it is not absorbed");
}

#[test]
fn import_of_a_missing_file_raises() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("does_not_exist.json");

    let mut dictionary = Dictionary::new();
    let err = dictionary
        .import(path.to_str().expect("utf-8 path"))
        .unwrap_err();
    assert!(matches!(err, StoreError::FileNotFound));
    assert_eq!(err.to_string(), "file not found");
    assert!(!err.recovered(), "a missing file raises, it is not absorbed");
}

#[test]
fn import_requires_a_json_path() {
    let mut dictionary = Dictionary::new();
    let err = dictionary.import("snapshot.doc").unwrap_err();
    assert_eq!(err.to_string(), "only JSON files are supported");
}

#[test]
fn import_of_malformed_json_is_recovered() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "blah").expect("write fixture");

    let mut dictionary = populated();
    let err = dictionary
        .import(path.to_str().expect("utf-8 path"))
        .unwrap_err();
    assert_eq!(err.to_string(), "invalid JSON syntax");
    assert!(err.recovered(), "syntax problems are absorbed at the store layer");
    assert!(err.detail().is_some(), "the parser message is carried as detail");
    assert_eq!(dictionary.keys(), vec!["test", "floop"], "nothing replaced");
}

#[test]
fn import_of_well_formed_but_misshapen_json_is_recovered() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("misshapen.json");
    fs::write(&path, r#"{"test": [1, 2]}"#).expect("write fixture");

    let mut dictionary = Dictionary::new();
    let err = dictionary
        .import(path.to_str().expect("utf-8 path"))
        .unwrap_err();
    assert_eq!(err.to_string(), "import failed");
    assert!(err.recovered());
    assert!(dictionary.is_empty(), "nothing replaced");
}

#[test]
fn import_replaces_named_keys_and_leaves_the_rest_alone() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("snapshot.json");
    fs::write(&path, r#"{"test": ["three"], "fresh": ["four"]}"#).expect("write fixture");

    let mut dictionary = populated();
    dictionary
        .import(path.to_str().expect("utf-8 path"))
        .expect("import");

    // "test" is replaced wholesale, not merged
    assert_eq!(dictionary.members("test").expect("kept"), vec!["three"]);
    // "floop" was not named in the file and is untouched
    assert_eq!(dictionary.members("floop").expect("kept"), vec!["one"]);
    // "fresh" is new and appends to key order
    assert_eq!(dictionary.keys(), vec!["test", "floop", "fresh"]);
}

#[test]
fn import_preserves_file_key_order_for_new_keys() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("snapshot.json");
    fs::write(&path, r#"{"zeta": ["z"], "alpha": ["a"], "mid": ["m"]}"#).expect("write fixture");

    let mut dictionary = Dictionary::new();
    dictionary
        .import(path.to_str().expect("utf-8 path"))
        .expect("import");
    assert_eq!(dictionary.keys(), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn import_of_an_empty_sequence_removes_the_key() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("snapshot.json");
    fs::write(&path, r#"{"test": []}"#).expect("write fixture");

    let mut dictionary = populated();
    dictionary
        .import(path.to_str().expect("utf-8 path"))
        .expect("import");
    assert!(!dictionary.key_exists("test").expect("key arg given"));
    assert_eq!(dictionary.keys(), vec!["floop"]);
}

#[test]
fn import_collapses_duplicate_members_to_the_first_occurrence() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("snapshot.json");
    fs::write(&path, r#"{"test": ["one", "two", "one"]}"#).expect("write fixture");

    let mut dictionary = Dictionary::new();
    dictionary
        .import(path.to_str().expect("utf-8 path"))
        .expect("import");
    assert_eq!(dictionary.members("test").expect("kept"), vec!["one", "two"]);
}
