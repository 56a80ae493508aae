use super::store::MemoryStore;
use super::types::{MemoryAction, Pattern};
use super::{storage, COORDINATED_MANIPULATION, FALSE_POSITIVE_PATTERNS};

const K1_FIRST: Pattern = Pattern {
    key: "k1",
    label: "L",
    countermeasure: "C1",
};

const K1_SECOND: Pattern = Pattern {
    key: "k1",
    label: "L",
    countermeasure: "C2",
};

#[test]
fn test_first_occurrence_stores() {
    let mut store = MemoryStore::in_memory();
    let outcome = store.apply(&K1_FIRST);

    assert_eq!(outcome.countermeasure, "C1");
    assert_eq!(outcome.action, MemoryAction::Stored);
    assert_eq!(store.get("k1").unwrap().use_count, 1);
}

#[test]
fn test_recurrence_reuses_original_text() {
    let mut store = MemoryStore::in_memory();
    store.apply(&K1_FIRST);

    // Different wording for the same key must not overwrite
    let outcome = store.apply(&K1_SECOND);
    assert_eq!(outcome.countermeasure, "C1");
    assert_eq!(outcome.action, MemoryAction::Reused);

    let entry = store.get("k1").unwrap();
    assert_eq!(entry.countermeasure, "C1");
    assert_eq!(entry.use_count, 2);
}

#[test]
fn test_use_count_equals_call_count() {
    let mut store = MemoryStore::in_memory();
    for _ in 0..5 {
        store.apply(&COORDINATED_MANIPULATION);
    }
    assert_eq!(store.get(COORDINATED_MANIPULATION.key).unwrap().use_count, 5);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_snapshot_sorted_by_last_used() {
    let mut store = MemoryStore::in_memory();
    for pattern in &FALSE_POSITIVE_PATTERNS {
        store.apply(pattern);
    }
    // Revisit the first pattern so it becomes most recent
    store.apply(&FALSE_POSITIVE_PATTERNS[0]);

    let snap = store.snapshot();
    assert_eq!(snap.len(), 3);
    assert_eq!(snap[0].key, FALSE_POSITIVE_PATTERNS[0].key);
    assert_eq!(snap[0].use_count, 2);
}

#[test]
fn test_snapshot_order_stable_within_one_millisecond() {
    // Back-to-back applies routinely share a timestamp millisecond;
    // the touch counter must still order them newest first.
    let mut store = MemoryStore::in_memory();
    for pattern in &FALSE_POSITIVE_PATTERNS {
        store.apply(pattern);
    }

    let snap = store.snapshot();
    assert_eq!(snap[0].key, FALSE_POSITIVE_PATTERNS[2].key);
    assert_eq!(snap[1].key, FALSE_POSITIVE_PATTERNS[1].key);
    assert_eq!(snap[2].key, FALSE_POSITIVE_PATTERNS[0].key);
    assert!(snap[0].touch_seq > snap[1].touch_seq);
    assert!(snap[1].touch_seq > snap[2].touch_seq);
}

#[test]
fn test_persist_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let slot = dir.path().join("memory.json");

    {
        let mut store = MemoryStore::open(slot.clone());
        store.apply(&K1_FIRST);
        store.apply(&K1_SECOND);
        store.save_job().unwrap().run();
    }

    let reloaded = MemoryStore::open(slot);
    let entry = reloaded.get("k1").unwrap();
    assert_eq!(entry.countermeasure, "C1");
    assert_eq!(entry.use_count, 2);
    // The touch counter resumes past the persisted high-water mark
    assert_eq!(entry.touch_seq, 2);
}

#[test]
fn test_save_job_snapshots_at_build_time() {
    let dir = tempfile::tempdir().unwrap();
    let slot = dir.path().join("memory.json");

    let mut store = MemoryStore::open(slot.clone());
    store.apply(&K1_FIRST);
    let job = store.save_job().unwrap();

    // Mutations after the job is built do not leak into its payload
    store.apply(&K1_FIRST);
    job.run();

    let reloaded = MemoryStore::open(slot);
    assert_eq!(reloaded.get("k1").unwrap().use_count, 1);
}

#[test]
fn test_dispatch_without_runtime_writes_inline() {
    let dir = tempfile::tempdir().unwrap();
    let slot = dir.path().join("memory.json");

    let mut store = MemoryStore::open(slot.clone());
    store.apply(&K1_FIRST);
    store.save_job().unwrap().dispatch();

    let reloaded = MemoryStore::open(slot);
    assert_eq!(reloaded.get("k1").unwrap().countermeasure, "C1");
}

#[test]
fn test_corrupt_slot_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let slot = dir.path().join("memory.json");
    std::fs::write(&slot, "not json {{{").unwrap();

    let store = MemoryStore::open(slot);
    assert!(store.is_empty());
}

#[test]
fn test_missing_slot_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let map = storage::load_map(&dir.path().join("nonexistent.json"));
    assert!(map.is_empty());
}
