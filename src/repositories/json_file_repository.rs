use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use crate::repositories::traits::RecordRepository;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// On-disk document: `{"records": [...]}`.
#[derive(Debug, Serialize)]
struct DocumentRef<'a> {
    records: &'a [&'a Record],
}

#[derive(Debug, Default, Deserialize)]
struct Document {
    #[serde(default)]
    records: Vec<Record>,
}

/// Record repository backed by a single JSON file.
///
/// Every save rewrites the whole file. There is no locking; one process
/// is expected to own the file.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the file at `path`. The file is not touched
    /// until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<Vec<Record>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No data file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(StorageError::Io(e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let document: Document = serde_json::from_str(&content)?;
        info!(
            "Loaded {} records from {}",
            document.records.len(),
            self.path.display()
        );
        Ok(document.records)
    }

    fn save(&self, records: &[&Record]) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(&DocumentRef { records })
            .map_err(|e| StorageError::Encode(e.to_string()))?;
        fs::write(&self.path, content)?;

        debug!("Saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}
