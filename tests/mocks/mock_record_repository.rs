use contact_book::error::{StorageError, StorageResult};
use contact_book::models::Record;
use contact_book::repositories::RecordRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock record repository for testing.
///
/// Keeps the last saved snapshot in memory and tracks method calls for
/// verification. Clones share state, so a test can hand one clone to the
/// service and inspect the other.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockRecordRepository {
    records: Arc<Mutex<Vec<Record>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_load: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockRecordRepository {
    /// Create a new empty MockRecordRepository.
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_load: Arc::new(Mutex::new(false)),
        }
    }

    /// Seed the stored snapshot.
    pub fn with_records(records: Vec<Record>) -> Self {
        let repo = Self::new();
        *repo.records.lock().unwrap() = records;
        repo
    }

    /// Make every subsequent load fail with a decode error.
    pub fn fail_loads(&self) {
        *self.fail_load.lock().unwrap() = true;
    }

    /// The last saved snapshot.
    pub fn stored(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordRepository for MockRecordRepository {
    fn load(&self) -> StorageResult<Vec<Record>> {
        self.track_call("load");

        if *self.fail_load.lock().unwrap() {
            let err = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
            return Err(StorageError::Decode(err));
        }
        Ok(self.stored())
    }

    fn save(&self, records: &[&Record]) -> StorageResult<()> {
        self.track_call("save");

        let mut stored = self.records.lock().unwrap();
        *stored = records.iter().map(|r| (*r).clone()).collect();
        Ok(())
    }
}
