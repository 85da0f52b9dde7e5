//! History storage: one JSON file per record.

use crate::types::{CalculationKind, CalculationRecord};
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct HistoryStore {
    root_dir: PathBuf,
}

impl HistoryStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.root_dir.join(format!("{id}.json"))
    }

    pub fn has_record(&self, id: &str) -> bool {
        self.record_path(id).exists()
    }

    /// Write a record, replacing any earlier record with the same id.
    pub fn save(&self, record: &CalculationRecord) -> ResultsResult<()> {
        let json = serde_json::to_string_pretty(record)?;
        fs::write(self.record_path(&record.id), json)?;
        Ok(())
    }

    pub fn load(&self, id: &str) -> ResultsResult<CalculationRecord> {
        let path = self.record_path(id);

        if !path.exists() {
            return Err(ResultsError::RecordNotFound { id: id.to_string() });
        }

        let content = fs::read_to_string(path)?;
        let record = serde_json::from_str(&content)?;
        Ok(record)
    }

    fn record_ids(&self) -> ResultsResult<Vec<String>> {
        let mut ids = Vec::new();

        if !self.root_dir.exists() {
            return Ok(ids);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem()
            {
                ids.push(stem.to_string_lossy().to_string());
            }
        }

        Ok(ids)
    }

    /// Resolve a full id or a unique id prefix.
    pub fn find(&self, prefix: &str) -> ResultsResult<CalculationRecord> {
        if self.has_record(prefix) {
            return self.load(prefix);
        }
        let matches: Vec<_> = self
            .record_ids()?
            .into_iter()
            .filter(|id| id.starts_with(prefix))
            .collect();
        match matches.as_slice() {
            [id] => self.load(id),
            [] => Err(ResultsError::RecordNotFound {
                id: prefix.to_string(),
            }),
            many => Err(ResultsError::AmbiguousId {
                prefix: prefix.to_string(),
                matches: many.len(),
            }),
        }
    }

    /// Records, oldest first, optionally restricted to one kind. Unreadable
    /// files are skipped with a warning.
    pub fn list(&self, kind: Option<CalculationKind>) -> ResultsResult<Vec<CalculationRecord>> {
        let mut records = Vec::new();

        for id in self.record_ids()? {
            match self.load(&id) {
                Ok(record) if kind.is_none_or(|k| k == record.kind) => records.push(record),
                Ok(_) => {}
                Err(e) => warn!(id = %id, error = %e, "skipping unreadable history record"),
            }
        }

        records.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(records)
    }

    pub fn delete(&self, id: &str) -> ResultsResult<()> {
        let path = self.record_path(id);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
