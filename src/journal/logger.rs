//! Journal logger for the append-only transition journal
//!
//! Each entry is written as a single JSON line and flushed immediately.
//! With a size cap set, a full journal is renamed to `<name>.1` (replacing
//! any older backup) before the next entry is written.

use std::collections::VecDeque;
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::{WizardError, WizardResult};
use crate::wizard::{Transition, TransitionObserver};

use super::entry::JournalEntry;

/// Handles writing journal entries to the journal file
///
/// The file uses a line-delimited JSON format (JSONL) where each line is a
/// complete JSON object representing one entry.
#[derive(Debug, Clone)]
pub struct JournalLogger {
    /// Path to the journal file
    log_path: PathBuf,
    /// Size at which the journal is rotated; `None` never rotates
    max_bytes: Option<u64>,
}

impl JournalLogger {
    /// Create a new JournalLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self {
            log_path,
            max_bytes: None,
        }
    }

    /// Rotate the journal once it reaches `max_bytes`
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = Some(max_bytes);
        self
    }

    /// Where the previous generation is kept after rotation
    pub fn rotated_path(&self) -> PathBuf {
        let mut name = self
            .log_path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".1");
        self.log_path.with_file_name(name)
    }

    fn rotate_if_full(&self) -> WizardResult<()> {
        let Some(max_bytes) = self.max_bytes else {
            return Ok(());
        };
        let Ok(metadata) = std::fs::metadata(&self.log_path) else {
            return Ok(());
        };
        if metadata.len() < max_bytes {
            return Ok(());
        }

        let rotated = self.rotated_path();
        if rotated.exists() {
            std::fs::remove_file(&rotated).map_err(|e| {
                WizardError::Journal(format!("Failed to remove old journal backup: {}", e))
            })?;
        }
        std::fs::rename(&self.log_path, &rotated)
            .map_err(|e| WizardError::Journal(format!("Failed to rotate journal: {}", e)))?;
        info!(bytes = metadata.len(), "journal rotated");
        Ok(())
    }

    /// Append an entry to the journal
    pub fn log(&self, entry: &JournalEntry) -> WizardResult<()> {
        self.rotate_if_full()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| WizardError::Journal(format!("Failed to open journal: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| WizardError::Json(format!("Failed to serialize journal entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| WizardError::Journal(format!("Failed to write journal entry: {}", e)))?;

        file.flush()
            .map_err(|e| WizardError::Journal(format!("Failed to flush journal: {}", e)))?;

        Ok(())
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> WizardResult<Vec<JournalEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| WizardError::Journal(format!("Failed to open journal: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                WizardError::Journal(format!("Failed to read journal line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: JournalEntry = serde_json::from_str(&line).map_err(|e| {
                WizardError::Json(format!(
                    "Failed to parse journal entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries, oldest first
    ///
    /// The file is streamed and only the last `count` lines are kept.
    pub fn read_recent(&self, count: usize) -> WizardResult<Vec<JournalEntry>> {
        if count == 0 || !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| WizardError::Journal(format!("Failed to open journal: {}", e)))?;

        let mut tail: VecDeque<(usize, String)> = VecDeque::with_capacity(count);
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                WizardError::Journal(format!("Failed to read journal line {}: {}", line_num + 1, e))
            })?;
            if line.trim().is_empty() {
                continue;
            }
            if tail.len() == count {
                tail.pop_front();
            }
            tail.push_back((line_num, line));
        }

        tail.into_iter()
            .map(|(line_num, line)| {
                serde_json::from_str::<JournalEntry>(&line).map_err(|e| {
                    WizardError::Json(format!(
                        "Failed to parse journal entry at line {}: {}",
                        line_num + 1,
                        e
                    ))
                })
            })
            .collect()
    }

    /// Number of non-empty lines in the journal
    pub fn entry_count(&self) -> WizardResult<usize> {
        if !self.log_path.exists() {
            return Ok(0);
        }

        let file = File::open(&self.log_path)
            .map_err(|e| WizardError::Journal(format!("Failed to open journal: {}", e)))?;

        let count = BufReader::new(file)
            .lines()
            .map_while(Result::ok)
            .filter(|l| !l.trim().is_empty())
            .count();

        Ok(count)
    }

    /// Check if the journal file exists
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Get the path to the journal file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

// A journal write failure must not interrupt the wizard.
impl TransitionObserver for JournalLogger {
    fn on_transition(&mut self, transition: &Transition) {
        if let Err(e) = self.log(&JournalEntry::from_transition(transition)) {
            warn!(error = %e, "failed to append journal entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{ActionKind, Field, Step, Wizard};
    use tempfile::TempDir;

    fn create_test_logger() -> (JournalLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("journal.log");
        (JournalLogger::new(log_path), temp_dir)
    }

    fn next_step_entry() -> JournalEntry {
        JournalEntry::from_transition(&Transition {
            kind: ActionKind::NextStep,
            field: None,
            from: Step::Personal,
            to: Step::Account,
            submitted: false,
        })
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        logger.log(&next_step_entry()).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, ActionKind::NextStep);
        assert_eq!(entries[0].to_step, 2);
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();
        for _ in 0..4 {
            logger.log(&next_step_entry()).unwrap();
        }
        logger
            .log(&JournalEntry::from_transition(&Transition {
                kind: ActionKind::Reset,
                field: None,
                from: Step::Review,
                to: Step::Personal,
                submitted: false,
            }))
            .unwrap();

        assert_eq!(logger.entry_count().unwrap(), 5);
        let recent = logger.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[1].action, ActionKind::Reset);
    }

    #[test]
    fn test_read_recent_skips_older_corrupt_lines() {
        let (logger, _temp) = create_test_logger();
        std::fs::write(logger.path(), "{not json}\n").unwrap();
        logger.log(&next_step_entry()).unwrap();

        assert!(logger.read_all().is_err());
        let recent = logger.read_recent(1).unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].action, ActionKind::NextStep);
        assert!(logger.read_recent(0).unwrap().is_empty());
    }

    #[test]
    fn test_rotates_when_full() {
        let (logger, _temp) = create_test_logger();
        let logger = logger.with_max_bytes(1);
        assert!(logger.rotated_path().ends_with("journal.log.1"));

        for _ in 0..3 {
            logger.log(&next_step_entry()).unwrap();
        }

        assert_eq!(logger.entry_count().unwrap(), 1);
        let backup = std::fs::read_to_string(logger.rotated_path()).unwrap();
        assert_eq!(backup.lines().count(), 1);
    }

    #[test]
    fn test_no_rotation_below_cap() {
        let (logger, _temp) = create_test_logger();
        let logger = logger.with_max_bytes(1024 * 1024);
        for _ in 0..3 {
            logger.log(&next_step_entry()).unwrap();
        }
        assert_eq!(logger.entry_count().unwrap(), 3);
        assert!(!logger.rotated_path().exists());
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();
        assert!(!logger.exists());
        assert!(logger.read_all().unwrap().is_empty());
        assert_eq!(logger.entry_count().unwrap(), 0);
    }

    #[test]
    fn test_corrupt_line_is_reported() {
        let (logger, _temp) = create_test_logger();
        std::fs::write(logger.path(), "{not json}\n").unwrap();
        let err = logger.read_all().unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_observer_never_records_values() {
        let (logger, _temp) = create_test_logger();
        let mut wizard = Wizard::new().with_observer(Box::new(logger.clone()));
        wizard.update_field(Field::Password, "topsecret");
        wizard.update_field(Field::Name, "Alice");

        let raw = std::fs::read_to_string(logger.path()).unwrap();
        assert!(!raw.contains("topsecret"));
        assert!(!raw.contains("Alice"));

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].field, Some(Field::Password));
    }
}
