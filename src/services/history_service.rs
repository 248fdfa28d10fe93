use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error, info};

use crate::models::ConversionRecord;

/// Failures while persisting the history
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Failed to serialize conversion history: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("An error occurred while writing to the file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Append-only log of the conversions made during one session
#[derive(Debug, Default)]
pub struct History {
    records: Vec<ConversionRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record at the end. No deduplication, no limit.
    pub fn append(&mut self, record: ConversionRecord) {
        debug!(
            source = %record.currency_to_convert,
            target = %record.target_currency,
            "Recorded conversion #{}",
            self.records.len() + 1
        );
        self.records.push(record);
    }

    pub fn records(&self) -> &[ConversionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render every record, in insertion order, as a pretty-printed JSON array
    pub fn serialize(&self) -> Result<Vec<u8>, HistoryError> {
        Ok(serde_json::to_vec_pretty(self.records())?)
    }

    /// Write the whole history to `path`, replacing any existing file.
    ///
    /// The file handle is closed on every path out of this function. Failures
    /// are logged here and still returned to the caller.
    pub fn write_to_file(&self, path: &Path) -> Result<(), HistoryError> {
        let bytes = self.serialize()?;

        let result = File::create(path).and_then(|mut file| {
            file.write_all(&bytes)?;
            file.flush()
        });

        match result {
            Ok(()) => {
                info!("Wrote {} conversion(s) to {}", self.len(), path.display());
                Ok(())
            }
            Err(e) => {
                error!("An error occurred while writing to the file {}: {}", path.display(), e);
                Err(HistoryError::Write {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        }
    }
}
