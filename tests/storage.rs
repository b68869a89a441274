use std::path::PathBuf;
use taskpad::storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, TaskStore};
use taskpad::Task;

fn temp_storage_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("taskpad_storage_{}_{}", name, std::process::id()))
        .join("storage.json")
}

fn cleanup(path: &PathBuf) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::remove_dir_all(parent);
    }
}

fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new("buy milk"),
        Task {
            text: "write report".to_string(),
            completed: true,
        },
        Task::new("buy milk"),
    ]
}

#[test]
fn test_memory_store_get_set_remove() {
    let mut store = MemoryKeyValueStore::new();
    assert_eq!(store.get("k").unwrap(), None);

    store.set("k", "v1").unwrap();
    store.set("k", "v2").unwrap();
    assert_eq!(store.get("k").unwrap(), Some("v2".to_string()));

    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);

    // Removing a missing key is fine
    store.remove("k").unwrap();
}

#[test]
fn test_file_store_persists_across_reopen() {
    let path = temp_storage_path("reopen");
    cleanup(&path);

    {
        let mut store = FileKeyValueStore::open(&path);
        assert_eq!(store.get("tasks").unwrap(), None);
        store.set("tasks", "[]").unwrap();
        store.set("other", "value").unwrap();
    }
    assert!(path.exists());

    let mut reopened = FileKeyValueStore::open(&path);
    assert_eq!(reopened.get("tasks").unwrap(), Some("[]".to_string()));
    assert_eq!(reopened.get("other").unwrap(), Some("value".to_string()));

    reopened.remove("other").unwrap();
    let reopened = FileKeyValueStore::open(&path);
    assert_eq!(reopened.get("other").unwrap(), None);

    cleanup(&path);
}

#[test]
fn test_file_store_treats_corrupt_file_as_empty() {
    let path = temp_storage_path("corrupt");
    cleanup(&path);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "this is { not json").unwrap();

    let mut store = FileKeyValueStore::open(&path);
    assert_eq!(store.get("tasks").unwrap(), None);

    // The next write replaces the corrupt content
    store.set("tasks", "[]").unwrap();
    let reopened = FileKeyValueStore::open(&path);
    assert_eq!(reopened.get("tasks").unwrap(), Some("[]".to_string()));

    cleanup(&path);
}

#[test]
fn test_file_store_treats_non_utf8_file_as_empty() {
    let path = temp_storage_path("non_utf8");
    cleanup(&path);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, [0xff, 0xfe, b'{', b'}']).unwrap();

    let mut store = FileKeyValueStore::open(&path);
    assert_eq!(store.get("tasks").unwrap(), None);

    store.set("tasks", "[]").unwrap();
    let reopened = FileKeyValueStore::open(&path);
    assert_eq!(reopened.get("tasks").unwrap(), Some("[]".to_string()));

    cleanup(&path);
}

#[test]
fn test_file_store_treats_directory_at_path_as_empty() {
    let path = temp_storage_path("directory");
    cleanup(&path);
    std::fs::create_dir_all(&path).unwrap();

    let store = FileKeyValueStore::open(&path);
    assert_eq!(store.get("tasks").unwrap(), None);

    let tasks = TaskStore::new(store, "tasks");
    assert!(tasks.load().is_empty());

    cleanup(&path);
}

/// A store path whose parent is a regular file, so every write fails
fn unwritable_storage_path(name: &str) -> (PathBuf, PathBuf) {
    let blocker = std::env::temp_dir().join(format!("taskpad_blocker_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&blocker);
    std::fs::write(&blocker, "not a directory").unwrap();
    (blocker.join("storage.json"), blocker)
}

#[test]
fn test_file_store_failed_set_keeps_previous_value() {
    let (path, blocker) = unwritable_storage_path("set");

    let mut store = FileKeyValueStore::open(&path);
    assert!(store.set("tasks", "[]").is_err());
    assert_eq!(store.get("tasks").unwrap(), None);

    let mut tasks = TaskStore::new(store, "tasks");
    assert!(tasks.save(&[Task::new("lost")]).is_err());
    assert!(tasks.load().is_empty());

    let _ = std::fs::remove_file(&blocker);
}

#[test]
fn test_file_store_failed_remove_keeps_value() {
    let path = temp_storage_path("remove");
    cleanup(&path);

    let mut store = FileKeyValueStore::open(&path);
    store.set("tasks", "[]").unwrap();

    // Replace the store's directory with a file so the next write fails
    cleanup(&path);
    std::fs::write(path.parent().unwrap(), "not a directory").unwrap();

    assert!(store.remove("tasks").is_err());
    assert_eq!(store.get("tasks").unwrap(), Some("[]".to_string()));

    let _ = std::fs::remove_file(path.parent().unwrap());
}

#[test]
fn test_task_store_round_trip() {
    let mut store = TaskStore::new(MemoryKeyValueStore::new(), "tasks");

    store.save(&[]).unwrap();
    assert_eq!(store.load(), Vec::<Task>::new());

    let tasks = sample_tasks();
    store.save(&tasks).unwrap();
    assert_eq!(store.load(), tasks);
}

#[test]
fn test_task_store_absent_slot_is_empty() {
    let store = TaskStore::new(MemoryKeyValueStore::new(), "tasks");
    assert!(store.load().is_empty());
}

#[test]
fn test_task_store_malformed_slot_is_empty() {
    for raw in ["not json", "{\"text\":\"x\"}", "42", "null", "\"tasks\"", "[{\"completed\":true}]"] {
        let mut backend = MemoryKeyValueStore::new();
        backend.set("tasks", raw).unwrap();
        let store = TaskStore::new(backend, "tasks");
        assert!(store.load().is_empty(), "expected empty list for {raw:?}");
    }
}

#[test]
fn test_task_store_serialized_format() {
    let mut store = TaskStore::new(MemoryKeyValueStore::new(), "tasks");
    store
        .save(&[Task::new("a"), Task {
            text: "b".to_string(),
            completed: true,
        }])
        .unwrap();

    let raw = store.backend().get("tasks").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            { "text": "a", "completed": false },
            { "text": "b", "completed": true }
        ])
    );
}

#[test]
fn test_task_store_missing_completed_defaults_to_pending() {
    let mut backend = MemoryKeyValueStore::new();
    backend.set("tasks", r#"[{"text":"legacy"}]"#).unwrap();
    let store = TaskStore::new(backend, "tasks");

    assert_eq!(store.load(), vec![Task::new("legacy")]);
}

#[test]
fn test_task_store_uses_only_its_key() {
    let mut store = TaskStore::new(MemoryKeyValueStore::new(), "custom");
    store.save(&[Task::new("x")]).unwrap();

    assert_eq!(store.key(), "custom");
    assert_eq!(store.backend().get("tasks").unwrap(), None);
    assert!(store.backend().get("custom").unwrap().is_some());
}

#[test]
fn test_task_store_file_backed_round_trip() {
    let path = temp_storage_path("tasks");
    cleanup(&path);

    let tasks = sample_tasks();
    {
        let mut store = TaskStore::new(FileKeyValueStore::open(&path), "tasks");
        store.save(&tasks).unwrap();
    }

    let store = TaskStore::new(FileKeyValueStore::open(&path), "tasks");
    assert_eq!(store.load(), tasks);

    cleanup(&path);
}
