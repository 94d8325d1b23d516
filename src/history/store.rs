// Storage implementation for the persisted race history

use crate::errors::PacelineError;
use crate::history::types::Race;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const HISTORY_FILE_NAME: &str = "history.json";

/// Persistence port for the race store. The store owns the in-memory
/// collection; implementations only move the full collection to and from
/// durable storage.
pub trait HistoryPersistence {
    /// Load the persisted collection, empty if nothing was saved yet
    fn load(&self) -> Result<Vec<Race>, PacelineError>;

    /// Replace the persisted collection with `races`
    fn save(&self, races: &[Race]) -> Result<(), PacelineError>;
}

/// On-disk document wrapping the race array under a single named key.
#[derive(Serialize, Deserialize)]
struct HistoryDocument {
    races: Vec<Race>,
}

/// File-backed persistence: one JSON document in the platform data directory.
pub struct JsonFileHistory {
    file_path: PathBuf,
}

impl JsonFileHistory {
    /// Create a history file inside `storage_dir`, creating the directory if
    /// needed.
    pub fn new(storage_dir: PathBuf) -> Result<Self, PacelineError> {
        if !storage_dir.exists() {
            fs::create_dir_all(&storage_dir)
                .map_err(|e| PacelineError::HistoryWriteError { source: e })?;
        }
        Ok(Self {
            file_path: storage_dir.join(HISTORY_FILE_NAME),
        })
    }

    /// Create storage in the default application data directory
    pub fn new_default() -> Result<Self, PacelineError> {
        Self::new(Self::default_storage_path()?)
    }

    /// Get the default storage path for the race history
    pub fn default_storage_path() -> Result<PathBuf, PacelineError> {
        let app_data_dir = dirs::data_dir().ok_or(PacelineError::NoDataDir)?;
        Ok(app_data_dir.join("paceline"))
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl HistoryPersistence for JsonFileHistory {
    fn load(&self) -> Result<Vec<Race>, PacelineError> {
        if !self.file_path.exists() {
            debug!("No history file at {:?}, starting empty", self.file_path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .map_err(|e| PacelineError::HistoryReadError { source: e })?;
        let document: HistoryDocument = serde_json::from_str(&content)
            .map_err(|e| PacelineError::HistorySerializeError { source: e })?;

        Ok(document.races)
    }

    fn save(&self, races: &[Race]) -> Result<(), PacelineError> {
        let document = HistoryDocument {
            races: races.to_vec(),
        };
        let content = serde_json::to_string_pretty(&document)
            .map_err(|e| PacelineError::HistorySerializeError { source: e })?;

        // Write to a temporary file and rename so a crash mid-write never
        // leaves a truncated history behind.
        let temp_path = self.file_path.with_extension("json.tmp");
        {
            let mut temp_file = fs::File::create(&temp_path)
                .map_err(|e| PacelineError::HistoryWriteError { source: e })?;
            temp_file
                .write_all(content.as_bytes())
                .map_err(|e| PacelineError::HistoryWriteError { source: e })?;
            temp_file
                .sync_all()
                .map_err(|e| PacelineError::HistoryWriteError { source: e })?;
        }

        fs::rename(&temp_path, &self.file_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            PacelineError::HistoryWriteError { source: e }
        })?;

        Ok(())
    }
}

/// Owner of the durable race collection.
///
/// Races are kept in append order; ids are unique across the collection. Every
/// mutating operation rewrites durable storage through the injected
/// persistence port. A failed write keeps the in-memory collection
/// authoritative for the rest of the process lifetime: the failure is logged
/// and retained as a warning the presentation layer can show, never bubbled
/// to the caller.
pub struct RaceStore<P: HistoryPersistence> {
    races: Vec<Race>,
    persistence: P,
    persist_warning: Option<String>,
}

impl<P: HistoryPersistence> RaceStore<P> {
    /// Open the store, loading any previously persisted races.
    pub fn open(persistence: P) -> Result<Self, PacelineError> {
        let races = persistence.load()?;
        debug!("Loaded {} races from history", races.len());
        Ok(Self {
            races,
            persistence,
            persist_warning: None,
        })
    }

    /// Races in storage (append) order; the most recent race is last.
    pub fn races(&self) -> &[Race] {
        &self.races
    }

    /// Warning from the most recent failed persistence write, cleared by the
    /// next successful one.
    pub fn persist_warning(&self) -> Option<&str> {
        self.persist_warning.as_deref()
    }

    /// Append a committed race and persist the collection. Fails with
    /// [`PacelineError::DuplicateRaceId`] if the id is already present.
    pub fn add_race(&mut self, race: Race) -> Result<(), PacelineError> {
        if self.races.iter().any(|existing| existing.id == race.id) {
            return Err(PacelineError::DuplicateRaceId { id: race.id });
        }
        self.races.push(race);
        self.persist();
        Ok(())
    }

    /// Remove the race with the given id, if present. Returns whether a race
    /// was removed; deleting an absent id is a no-op.
    pub fn delete_race(&mut self, id: &str) -> bool {
        let initial_len = self.races.len();
        self.races.retain(|race| race.id != id);
        if self.races.len() == initial_len {
            return false;
        }
        self.persist();
        true
    }

    /// Remove every race and persist the empty collection.
    pub fn clear_history(&mut self) {
        if self.races.is_empty() {
            return;
        }
        self.races.clear();
        self.persist();
    }

    fn persist(&mut self) {
        match self.persistence.save(&self.races) {
            Ok(()) => self.persist_warning = None,
            Err(e) => {
                warn!("Could not persist race history: {}", e);
                self.persist_warning = Some(e.to_string());
            }
        }
    }
}
