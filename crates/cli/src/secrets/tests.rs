//! Tests for the secrets module
//!
//! Covers concurrent resolution, key preservation, all-or-nothing failure and
//! bounded concurrency, using in-memory stores.

use super::*;
use async_trait::async_trait;
use ssmenv_core::{Error, LookupKeys, Result};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// Store backed by a fixed map, with call accounting
#[derive(Default)]
pub(crate) struct MemoryStore {
    values: HashMap<String, String>,
    failing: HashSet<String>,
    delay: Duration,
    calls: Arc<AtomicUsize>,
    in_flight: Arc<AtomicUsize>,
    peak_in_flight: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub(crate) fn new<'a>(values: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    pub(crate) fn failing_on(mut self, key: &str) -> Self {
        self.failing.insert(key.to_string());
        self
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    pub(crate) fn peak_in_flight(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.peak_in_flight)
    }
}

#[async_trait]
impl ParameterStore for MemoryStore {
    async fn get_parameter(&self, name: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.contains(name) {
            return Err(Error::store_lookup(name, name, "AccessDeniedException"));
        }
        self.values
            .get(name)
            .cloned()
            .ok_or_else(|| Error::store_lookup(name, name, "ParameterNotFound"))
    }
}

fn lookup_keys(count: usize) -> LookupKeys {
    (0..count)
        .map(|i| (format!("SECRET_{i}"), format!("/app/secret-{i}")))
        .collect()
}

fn store_for(count: usize) -> MemoryStore {
    let values: Vec<(String, String)> = (0..count)
        .map(|i| (format!("/app/secret-{i}"), format!("value-{i}")))
        .collect();
    MemoryStore::new(values.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

#[tokio::test]
async fn test_concurrent_secret_resolution() {
    let store = store_for(20).with_delay(Duration::from_millis(50));
    let calls = store.calls();
    let manager = SecretManager::new(Box::new(store));

    let start = std::time::Instant::now();
    let resolved = manager.resolve(&lookup_keys(20)).await.unwrap();
    let duration = start.elapsed();

    assert_eq!(resolved.len(), 20);
    assert_eq!(calls.load(Ordering::SeqCst), 20);

    // Serial would take 20 * 50ms = 1000ms
    assert!(duration.as_millis() < 500, "took {duration:?}");

    for i in 0..20 {
        assert_eq!(
            resolved.get(&format!("SECRET_{i}")).unwrap(),
            &format!("value-{i}")
        );
    }
}

#[tokio::test]
async fn test_key_set_and_order_preserved() {
    let keys: LookupKeys = [
        ("ZETA", "/shared"),
        ("ALPHA", "/a"),
        ("ALSO_SHARED", "/shared"),
    ]
    .into_iter()
    .collect();
    let store = MemoryStore::new([("/shared", "s"), ("/a", "a")]);
    let manager = SecretManager::new(Box::new(store));

    let resolved = manager.resolve(&keys).await.unwrap();

    assert!(keys.keys().eq(resolved.keys()));
    assert_eq!(resolved.get("ZETA").unwrap(), "s");
    assert_eq!(resolved.get("ALSO_SHARED").unwrap(), "s");
    assert_eq!(resolved.get("ALPHA").unwrap(), "a");
}

#[tokio::test]
async fn test_empty_keys_make_no_calls() {
    let store = MemoryStore::default();
    let calls = store.calls();
    let manager = SecretManager::new(Box::new(store));

    let resolved = manager.resolve(&LookupKeys::new()).await.unwrap();

    assert!(resolved.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_single_failure_fails_everything() {
    let store = store_for(10).failing_on("/app/secret-7");
    let manager = SecretManager::new(Box::new(store));

    let err = manager.resolve(&lookup_keys(10)).await.unwrap_err();

    match err {
        Error::StoreLookupFailure { name, key, message } => {
            assert_eq!(name, "SECRET_7");
            assert_eq!(key, "/app/secret-7");
            assert!(message.contains("AccessDenied"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_parameter_is_attributed_to_output_name() {
    let keys: LookupKeys = [("DB_PASSWORD", "/prod/db/password")].into_iter().collect();
    let manager = SecretManager::new(Box::new(MemoryStore::default()));

    let err = manager.resolve(&keys).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "failed to fetch parameter '/prod/db/password' for 'DB_PASSWORD': ParameterNotFound"
    );
}

#[tokio::test]
async fn test_unbounded_fetches_all_in_flight() {
    let store = store_for(12).with_delay(Duration::from_millis(20));
    let peak = store.peak_in_flight();
    let manager = SecretManager::new(Box::new(store));

    manager.resolve(&lookup_keys(12)).await.unwrap();

    assert_eq!(peak.load(Ordering::SeqCst), 12);
}

#[tokio::test]
async fn test_semaphore_rate_limiting() {
    let store = store_for(10).with_delay(Duration::from_millis(10));
    let peak = store.peak_in_flight();
    let calls = store.calls();
    let manager = SecretManager::new(Box::new(store)).with_max_concurrent(Some(2));

    let resolved = manager.resolve(&lookup_keys(10)).await.unwrap();

    assert_eq!(resolved.len(), 10);
    assert_eq!(calls.load(Ordering::SeqCst), 10);
    assert!(peak.load(Ordering::SeqCst) <= 2);
}
