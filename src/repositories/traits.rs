use crate::error::StorageResult;
use crate::models::Record;

/// Repository for persisting address book records.
///
/// Provides abstraction over record storage so the session can run
/// against the JSON file in production and an in-memory mock in tests.
pub trait RecordRepository {
    /// Read every stored record.
    ///
    /// A store that does not exist yet yields an empty list.
    fn load(&self) -> StorageResult<Vec<Record>>;

    /// Overwrite the store with exactly `records`, in the given order.
    fn save(&self, records: &[&Record]) -> StorageResult<()>;
}
