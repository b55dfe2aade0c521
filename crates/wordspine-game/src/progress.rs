use std::collections::BTreeMap;

use log::warn;

/// Storage key for the completed-levels list (JSON array of level ids).
pub const COMPLETED_LEVELS_KEY: &str = "completedLevels";

/// Storage key for the cumulative score (decimal integer string).
pub const TOTAL_SCORE_KEY: &str = "totalScore";

/// A durable key-value store failure.
///
/// Only ever observed at the persistence boundary; [`ProgressStore`] logs it
/// and substitutes a default rather than propagating.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("storage operation failed: {message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    /// Creates an error with a platform-specific message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Whatever durable string-keyed storage the platform offers.
///
/// The platform adapter implements this over its storage (browser local
/// storage, a settings file, an app-framework store); the game layer only
/// sees the trait.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the underlying storage fails.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the underlying storage fails.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// The player's durable record: completed levels and cumulative score.
///
/// Every storage failure is logged and mapped to the default (empty list,
/// zero score) so that persistence problems never break gameplay.
///
/// # Example
///
/// ```
/// use wordspine_game::{MemoryStore, ProgressStore};
///
/// let mut progress = ProgressStore::new(MemoryStore::new());
/// progress.record_completed("level1");
/// let total = progress.add_points(150);
/// assert!(progress.is_completed("level1"));
/// assert_eq!(total, 150);
/// ```
#[derive(Debug)]
pub struct ProgressStore<S> {
    store: S,
}

impl<S: KeyValueStore> ProgressStore<S> {
    /// Wraps a platform store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the wrapped store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// The ids of completed levels, oldest first.
    #[must_use]
    pub fn completed_levels(&self) -> Vec<String> {
        let raw = match self.store.get(COMPLETED_LEVELS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("failed to load completed levels: {err}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(levels) => levels,
            Err(err) => {
                warn!("corrupt completed-levels record, starting over: {err}");
                Vec::new()
            }
        }
    }

    /// Returns whether `level_id` has been completed.
    #[must_use]
    pub fn is_completed(&self, level_id: &str) -> bool {
        self.completed_levels().iter().any(|id| id == level_id)
    }

    /// Adds `level_id` to the completed list (once) and saves it.
    pub fn record_completed(&mut self, level_id: &str) {
        let mut levels = self.completed_levels();
        if levels.iter().any(|id| id == level_id) {
            return;
        }
        levels.push(level_id.to_owned());
        match serde_json::to_string(&levels) {
            Ok(raw) => {
                if let Err(err) = self.store.set(COMPLETED_LEVELS_KEY, &raw) {
                    warn!("failed to save completed levels: {err}");
                }
            }
            Err(err) => warn!("failed to encode completed levels: {err}"),
        }
    }

    /// The cumulative score across completed levels.
    #[must_use]
    pub fn total_score(&self) -> i64 {
        let raw = match self.store.get(TOTAL_SCORE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return 0,
            Err(err) => {
                warn!("failed to load total score: {err}");
                return 0;
            }
        };
        match raw.parse() {
            Ok(score) => score,
            Err(err) => {
                warn!("corrupt total-score record, starting over: {err}");
                0
            }
        }
    }

    /// Adds `points` to the cumulative score, saves, and returns the new
    /// total.
    pub fn add_points(&mut self, points: i64) -> i64 {
        let total = self.total_score() + points;
        if let Err(err) = self.store.set(TOTAL_SCORE_KEY, &total.to_string()) {
            warn!("failed to save total score: {err}");
        }
        total
    }
}

/// An in-memory [`KeyValueStore`] for tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store that fails every operation, for boundary behavior tests.
    #[derive(Debug, Default)]
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::new("disk on fire"))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::new("disk on fire"))
        }
    }

    #[test]
    fn test_round_trips_completed_levels() {
        let mut progress = ProgressStore::new(MemoryStore::new());
        assert!(progress.completed_levels().is_empty());

        progress.record_completed("level1");
        progress.record_completed("level2");
        assert_eq!(progress.completed_levels(), vec!["level1", "level2"]);
        assert!(progress.is_completed("level1"));
        assert!(!progress.is_completed("level3"));
    }

    #[test]
    fn test_record_completed_is_idempotent() {
        let mut progress = ProgressStore::new(MemoryStore::new());
        progress.record_completed("level1");
        progress.record_completed("level1");
        assert_eq!(progress.completed_levels(), vec!["level1"]);
    }

    #[test]
    fn test_accumulates_points() {
        let mut progress = ProgressStore::new(MemoryStore::new());
        assert_eq!(progress.total_score(), 0);
        assert_eq!(progress.add_points(150), 150);
        assert_eq!(progress.add_points(200), 350);
        assert_eq!(progress.total_score(), 350);
    }

    #[test]
    fn test_store_failures_default_to_empty() {
        let mut progress = ProgressStore::new(BrokenStore);
        assert!(progress.completed_levels().is_empty());
        assert_eq!(progress.total_score(), 0);
        // Writes are swallowed, not propagated.
        progress.record_completed("level1");
        assert_eq!(progress.add_points(100), 100);
    }

    #[test]
    fn test_corrupt_records_default_to_empty() {
        let mut store = MemoryStore::new();
        store.set(COMPLETED_LEVELS_KEY, "not json").unwrap();
        store.set(TOTAL_SCORE_KEY, "not a number").unwrap();

        let progress = ProgressStore::new(store);
        assert!(progress.completed_levels().is_empty());
        assert_eq!(progress.total_score(), 0);
    }
}
