//! Durable storage for the week schedule.
//!
//! The engine only ever touches an opaque key-value [`BlobStore`]; the
//! schedule itself travels as one JSON record under a fixed key. Two
//! backends are provided: an in-memory map for tests and embedding, and a
//! directory of JSON files.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::week::WeekSchedule;

pub mod errors;

pub use errors::{LoadError, SaveError, StoreError};

/// Key under which the week schedule record is stored.
pub const SCHEDULE_RECORD_KEY: &str = "scheduleData";

/// Minimal key-value capability the persistence adapter needs.
///
/// `read` returns `Ok(None)` when the key has never been written.
pub trait BlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Serializes and deserializes the [`WeekSchedule`] record through a
/// [`BlobStore`].
#[derive(Debug)]
pub struct SchedulePersistence<S: BlobStore> {
    store: S,
}

impl<S: BlobStore> SchedulePersistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the saved schedule, or `None` when no record exists.
    ///
    /// A record that is not valid JSON, is missing a weekday key, or holds
    /// intervals violating the day invariants is a [`LoadError`]; the caller
    /// must discard it rather than keep partially-valid state.
    pub fn load(&self) -> Result<Option<WeekSchedule>, LoadError> {
        let Some(blob) = self.store.read(SCHEDULE_RECORD_KEY)? else {
            debug!("no schedule record under '{}'", SCHEDULE_RECORD_KEY);
            return Ok(None);
        };
        let schedule = serde_json::from_str(&blob)?;
        debug!("loaded schedule record ({} bytes)", blob.len());
        Ok(Some(schedule))
    }

    /// Writes `schedule` as the new durable record.
    pub fn save(&mut self, schedule: &WeekSchedule) -> Result<(), SaveError> {
        let blob = serde_json::to_string(schedule)?;
        self.store.write(SCHEDULE_RECORD_KEY, &blob)?;
        debug!("saved schedule record ({} bytes)", blob.len());
        Ok(())
    }

    /// Borrows the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the adapter and returns the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}

/// In-memory [`BlobStore`] backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a key, e.g. to simulate an existing record in tests.
    pub fn with_record(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.records.insert(key.to_owned(), value.to_owned());
        store
    }

    /// Returns the raw blob stored under `key`, if any.
    pub fn record(&self, key: &str) -> Option<&str> {
        self.records.get(key).map(String::as_str)
    }
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.records.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.records.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// [`BlobStore`] keeping each key as a JSON file under one directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.record_path(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(StoreError::Io(error)),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.record_path(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::week::Weekday;

    fn sample_week() -> WeekSchedule {
        let mut week = WeekSchedule::new();
        week.toggle_hour_block(Weekday::Monday, 0, false);
        week.toggle_hour_block(Weekday::Monday, 1, true);
        week.toggle_full_day(Weekday::Sunday);
        week
    }

    #[test]
    fn load_without_record_is_none() {
        let persistence = SchedulePersistence::new(MemoryStore::new());
        assert!(persistence.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let week = sample_week();
        let mut persistence = SchedulePersistence::new(MemoryStore::new());
        persistence.save(&week).unwrap();
        assert_eq!(persistence.load().unwrap(), Some(week));
    }

    #[test]
    fn record_lands_under_fixed_key() {
        let mut persistence = SchedulePersistence::new(MemoryStore::new());
        persistence.save(&sample_week()).unwrap();
        let blob = persistence.store().record(SCHEDULE_RECORD_KEY).unwrap();
        let json: serde_json::Value = serde_json::from_str(blob).unwrap();
        assert_eq!(
            json["mo"],
            serde_json::json!([{ "bt": 0, "et": 59 }, { "bt": 60, "et": 119 }])
        );
        assert_eq!(json["su"], serde_json::json!([{ "bt": 0, "et": 1439 }]));
    }

    #[test]
    fn load_rejects_invalid_json() {
        let store = MemoryStore::with_record(SCHEDULE_RECORD_KEY, "{not json");
        let result = SchedulePersistence::new(store).load();
        assert!(matches!(result, Err(LoadError::Malformed(_))));
    }

    #[test]
    fn load_rejects_missing_weekday_key() {
        let store = MemoryStore::with_record(
            SCHEDULE_RECORD_KEY,
            r#"{"mo":[],"tu":[],"we":[],"th":[],"fr":[],"sa":[]}"#,
        );
        let result = SchedulePersistence::new(store).load();
        assert!(matches!(result, Err(LoadError::Malformed(_))));
    }

    #[test]
    fn load_rejects_reversed_interval() {
        let store = MemoryStore::with_record(
            SCHEDULE_RECORD_KEY,
            r#"{"mo":[{"bt":500,"et":100}],"tu":[],"we":[],"th":[],"fr":[],"sa":[],"su":[]}"#,
        );
        let result = SchedulePersistence::new(store).load();
        assert!(matches!(result, Err(LoadError::Malformed(_))));
    }

    #[test]
    fn load_rejects_out_of_range_interval() {
        let store = MemoryStore::with_record(
            SCHEDULE_RECORD_KEY,
            r#"{"mo":[{"bt":0,"et":2000}],"tu":[],"we":[],"th":[],"fr":[],"sa":[],"su":[]}"#,
        );
        let result = SchedulePersistence::new(store).load();
        assert!(matches!(result, Err(LoadError::Malformed(_))));
    }

    #[test]
    fn load_rejects_overlapping_intervals() {
        let store = MemoryStore::with_record(
            SCHEDULE_RECORD_KEY,
            r#"{"mo":[{"bt":0,"et":100},{"bt":50,"et":200}],"tu":[],"we":[],"th":[],"fr":[],"sa":[],"su":[]}"#,
        );
        let result = SchedulePersistence::new(store).load();
        assert!(matches!(result, Err(LoadError::Malformed(_))));
    }

    #[test]
    fn load_accepts_adjacent_intervals() {
        let store = MemoryStore::with_record(
            SCHEDULE_RECORD_KEY,
            r#"{"mo":[{"bt":0,"et":119},{"bt":120,"et":179}],"tu":[],"we":[],"th":[],"fr":[],"sa":[],"su":[]}"#,
        );
        let week = SchedulePersistence::new(store).load().unwrap().unwrap();
        assert_eq!(week.day(Weekday::Monday).len(), 2);
    }

    #[test]
    fn file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let week = sample_week();

        let mut persistence = SchedulePersistence::new(FileStore::new(dir.path()));
        persistence.save(&week).unwrap();
        assert_eq!(persistence.load().unwrap(), Some(week));
    }

    #[test]
    fn file_store_missing_record_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("never-written"));
        assert!(store.read(SCHEDULE_RECORD_KEY).unwrap().is_none());
    }
}
