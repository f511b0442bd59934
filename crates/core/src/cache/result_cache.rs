//! Single-slot TTL cache for the last successful pipeline result.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};

use super::Clock;

struct CacheEntry<T> {
    value: T,
    expires_at: DateTime<Utc>,
}

/// Holds the last computed value for a fixed TTL window.
///
/// The slot is written only after a successful computation, so a failed
/// run can never poison it. The lock is held only for the read or the
/// swap, never across an await: concurrent readers of a stale slot may
/// each recompute, which costs redundant upstream calls but never
/// corrupts state.
pub struct ResultCache<T> {
    slot: RwLock<Option<CacheEntry<T>>>,
    ttl: chrono::Duration,
    clock: Arc<dyn Clock>,
}

impl<T: Clone> ResultCache<T> {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            slot: RwLock::new(None),
            ttl: chrono::Duration::seconds(ttl.as_secs() as i64),
            clock,
        }
    }

    /// Returns the cached value while it is still fresh.
    pub fn get_fresh(&self) -> Option<T> {
        let slot = self.slot.read().unwrap();
        let entry = slot.as_ref()?;
        if self.clock.now() < entry.expires_at {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    /// Whether the slot currently holds a fresh value.
    pub fn is_fresh(&self) -> bool {
        let slot = self.slot.read().unwrap();
        slot.as_ref()
            .map(|entry| self.clock.now() < entry.expires_at)
            .unwrap_or(false)
    }

    /// Replace the slot with a freshly computed value.
    pub fn store(&self, value: T) {
        let expires_at = self.clock.now() + self.ttl;
        *self.slot.write().unwrap() = Some(CacheEntry { value, expires_at });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct ManualClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl ManualClock {
        fn new(start: DateTime<Utc>) -> Self {
            Self {
                now: Mutex::new(start),
            }
        }

        fn advance(&self, delta: chrono::Duration) {
            *self.now.lock().unwrap() += delta;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap()
        }
    }

    fn start() -> DateTime<Utc> {
        "2025-06-01T00:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_empty_cache_returns_none() {
        let clock = Arc::new(ManualClock::new(start()));
        let cache: ResultCache<u32> = ResultCache::new(Duration::from_secs(60), clock);
        assert!(cache.get_fresh().is_none());
        assert!(!cache.is_fresh());
    }

    #[test]
    fn test_stored_value_is_fresh_within_ttl() {
        let clock = Arc::new(ManualClock::new(start()));
        let cache = ResultCache::new(Duration::from_secs(60), clock.clone());

        cache.store(42u32);
        assert_eq!(cache.get_fresh(), Some(42));

        clock.advance(chrono::Duration::seconds(59));
        assert_eq!(cache.get_fresh(), Some(42));
        assert!(cache.is_fresh());
    }

    #[test]
    fn test_value_expires_at_ttl_boundary() {
        let clock = Arc::new(ManualClock::new(start()));
        let cache = ResultCache::new(Duration::from_secs(60), clock.clone());

        cache.store(42u32);
        clock.advance(chrono::Duration::seconds(60));
        assert!(cache.get_fresh().is_none());
        assert!(!cache.is_fresh());
    }

    #[test]
    fn test_store_replaces_stale_entry() {
        let clock = Arc::new(ManualClock::new(start()));
        let cache = ResultCache::new(Duration::from_secs(60), clock.clone());

        cache.store(1u32);
        clock.advance(chrono::Duration::seconds(120));
        assert!(cache.get_fresh().is_none());

        cache.store(2u32);
        assert_eq!(cache.get_fresh(), Some(2));
    }
}
