//! Service Helper Tests
//!
//! End-to-end checks for the store, the scheduler, and file info:
//! - Watchers observe changes and stop after unwatch
//! - Scheduled callbacks fire once, at or after their due time
//! - Debounced bursts collapse to one invocation
//! - File info round-trips real files on disk

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use recordkit::{read_file_info, CallbackRegistry, Debouncer, KvStore};
use serde_json::{json, Value};

// =============================================================================
// Store
// =============================================================================

#[test]
fn test_store_watch_set_remove_cycle() {
    let store = KvStore::new();
    let changes: Arc<Mutex<Vec<(Option<Value>, Option<Value>)>>> =
        Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&changes);
    let token = store
        .watch("session", move |_, old, new| {
            sink.lock().unwrap().push((old.cloned(), new.cloned()));
        })
        .unwrap();

    store.set("session", json!({"user": "alice"})).unwrap();
    store.set("session", json!({"user": "bob"})).unwrap();
    store.remove("session").unwrap();

    store.unwatch(token).unwrap();
    store.set("session", json!({"user": "carol"})).unwrap();

    let changes = changes.lock().unwrap();
    assert_eq!(changes.len(), 3);
    assert_eq!(changes[0].0, None);
    assert_eq!(changes[1].0, Some(json!({"user": "alice"})));
    assert_eq!(changes[2].1, None);
}

#[test]
fn test_store_values_round_trip() {
    let store = KvStore::new();

    store.set("list", json!([1, 2, 3])).unwrap();

    assert_eq!(store.get("list").unwrap(), Some(json!([1, 2, 3])));
}

// =============================================================================
// Scheduler
// =============================================================================

#[test]
fn test_registry_fires_due_callbacks_once() {
    let registry = CallbackRegistry::new();
    let fired = Arc::new(AtomicUsize::new(0));

    let sink = Arc::clone(&fired);
    registry
        .schedule_at(Utc::now(), move || {
            sink.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
    registry
        .schedule_in(chrono::Duration::hours(1), || {
            panic!("not due yet");
        })
        .unwrap();

    let ran = registry.run_due(Utc::now()).unwrap();

    assert_eq!(ran, 1);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_registry_cancel_token() {
    let registry = CallbackRegistry::new();

    let token = registry
        .schedule_at(Utc::now(), || panic!("cancelled"))
        .unwrap();
    registry.cancel(token).unwrap();

    assert_eq!(registry.run_due(Utc::now()).unwrap(), 0);
    assert!(registry.cancel(token).is_err());
}

#[tokio::test]
async fn test_debounced_burst_runs_once() {
    let debouncer = Debouncer::new(Duration::from_millis(20));
    let fired = Arc::new(AtomicUsize::new(0));

    for _ in 0..10 {
        let sink = Arc::clone(&fired);
        debouncer
            .call(move || {
                sink.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

// =============================================================================
// File Info
// =============================================================================

#[test]
fn test_file_info_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, b"{\"k\":1}").unwrap();

    let info = read_file_info(&path).unwrap();

    assert_eq!(info.name, "data.json");
    assert_eq!(info.content_type, "application/json");
    assert_eq!(info.size, 7);

    use base64::{engine::general_purpose::STANDARD, Engine as _};
    assert_eq!(STANDARD.decode(&info.base64).unwrap(), b"{\"k\":1}");
}
