// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic at-least-once queue backed by one JSON file.
//!
//! The file holds a pretty-printed array of records in append order. Every
//! mutation reads the whole file, changes it in memory and writes it back
//! through a sibling temp file that is renamed over the original, so a crash
//! leaves either the old or the new content on disk.
//!
//! The `try_*` methods return errors. The plain methods log them and degrade
//! to a no-op, which is what the bot uses: a broken file must never take the
//! event loop down.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use nova_core::NovaError;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::records::QueueRecord;

/// Timestamp format of persisted records: local time, microsecond precision.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub(crate) fn now_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// A queue of `R` records stored at `path`.
#[derive(Debug, Clone)]
pub struct JsonQueue<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R: QueueRecord> JsonQueue<R> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record. A missing file is an empty queue.
    ///
    /// Records without an id are numbered after the largest existing id, in
    /// file order, so the result is the same on every read until the next
    /// write persists it.
    pub fn load(&self) -> Result<Vec<R>, NovaError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(NovaError::storage(e)),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let mut records: Vec<R> = serde_json::from_slice(&bytes).map_err(NovaError::storage)?;
        let mut next = records.iter().map(R::id).max().unwrap_or(0);
        for record in records.iter_mut().filter(|r| r.id() == 0) {
            next += 1;
            record.set_id(next);
        }
        Ok(records)
    }

    fn save(&self, records: &[R]) -> Result<(), NovaError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(NovaError::storage)?;
        }

        let payload = serde_json::to_vec_pretty(records).map_err(NovaError::storage)?;
        let temp_path = self
            .path
            .with_extension(format!("{}.tmp", Uuid::new_v4().simple()));

        let written = File::create(&temp_path).and_then(|mut file| {
            file.write_all(&payload)?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|()| fs::rename(&temp_path, &self.path)) {
            let _ = fs::remove_file(&temp_path);
            return Err(NovaError::storage(e));
        }
        Ok(())
    }

    /// Append `record` as unprocessed with a fresh id and timestamp.
    pub fn try_append(&self, mut record: R) -> Result<u64, NovaError> {
        let mut records = self.load()?;
        let id = records.iter().map(R::id).max().unwrap_or(0) + 1;
        record.set_id(id);
        record.set_processed(false);
        record.set_timestamp(now_timestamp());
        records.push(record);
        self.save(&records)?;
        debug!(kind = R::KIND, id, path = %self.path.display(), "record appended");
        Ok(id)
    }

    /// Flip every unprocessed record matching `pred`; returns how many.
    ///
    /// The file is only rewritten when something changed, so repeating the
    /// call is a cheap no-op.
    pub fn try_mark_processed(&self, pred: impl Fn(&R) -> bool) -> Result<usize, NovaError> {
        if !self.path.exists() {
            return Ok(0);
        }
        let mut records = self.load()?;
        let mut count = 0;
        for record in records.iter_mut().filter(|r| !r.is_processed() && pred(r)) {
            record.set_processed(true);
            count += 1;
        }
        if count > 0 {
            self.save(&records)?;
        }
        Ok(count)
    }

    /// Unprocessed records in file order.
    pub fn try_scan_pending(&self) -> Result<Vec<R>, NovaError> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|r| !r.is_processed())
            .collect())
    }

    /// Logging wrapper around [`try_append`](Self::try_append).
    pub fn append(&self, record: R) -> Option<u64> {
        self.try_append(record)
            .map_err(|e| {
                error!(kind = R::KIND, path = %self.path.display(), error = %e, "failed to append record");
            })
            .ok()
    }

    /// Logging wrapper around [`try_mark_processed`](Self::try_mark_processed).
    pub fn mark_processed(&self, pred: impl Fn(&R) -> bool) -> usize {
        self.try_mark_processed(pred).unwrap_or_else(|e| {
            error!(kind = R::KIND, path = %self.path.display(), error = %e, "failed to mark records processed");
            0
        })
    }

    pub fn mark_processed_by_id(&self, id: u64) -> usize {
        self.mark_processed(|r| r.id() == id)
    }

    /// Logging wrapper around [`try_scan_pending`](Self::try_scan_pending).
    pub fn scan_pending(&self) -> Vec<R> {
        self.try_scan_pending().unwrap_or_else(|e| {
            warn!(kind = R::KIND, path = %self.path.display(), error = %e, "failed to read queue");
            Vec::new()
        })
    }

    pub fn count_pending(&self) -> usize {
        self.scan_pending().len()
    }

    /// Size of the queue file in bytes, `0` when it does not exist.
    pub fn file_size(&self) -> u64 {
        fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0)
    }
}
