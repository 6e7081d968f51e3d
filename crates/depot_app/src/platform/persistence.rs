//! Durable storage for the pending queue and the delivery history.
//!
//! Two independently-keyed RON files, read once at startup and rewritten in
//! full on every mutation. Storage failures are logged and swallowed so a
//! hiccup never blocks the interactive flow.

use std::fs;
use std::path::PathBuf;

use depot_core::{DeliveryRecord, PendingRecord};
use depot_engine::AtomicFileWriter;
use depot_logging::{depot_error, depot_info, depot_warn};
use serde::{Deserialize, Serialize};

const PENDING_FILENAME: &str = "pending.ron";
const HISTORY_FILENAME: &str = "history.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedPending {
    id: String,
    location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedDelivery {
    id: String,
    location: String,
    pickup_time: String,
    photo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedQueue {
    pending: Vec<PersistedPending>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedHistory {
    deliveries: Vec<PersistedDelivery>,
}

/// All callers go through `load_*`/`save_*`; nothing else touches the raw
/// state files.
pub struct PersistenceStore {
    dir: PathBuf,
}

impl PersistenceStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn load_pending(&self) -> Vec<PendingRecord> {
        let state: PersistedQueue = self.load_file(PENDING_FILENAME);
        state
            .pending
            .into_iter()
            .map(|record| PendingRecord {
                id: record.id,
                location: record.location,
            })
            .collect()
    }

    pub fn load_history(&self) -> Vec<DeliveryRecord> {
        let state: PersistedHistory = self.load_file(HISTORY_FILENAME);
        state
            .deliveries
            .into_iter()
            .map(|record| DeliveryRecord {
                id: record.id,
                location: record.location,
                pickup_time: record.pickup_time,
                photo: record.photo,
            })
            .collect()
    }

    pub fn save_pending(&self, records: &[PendingRecord]) {
        let state = PersistedQueue {
            pending: records
                .iter()
                .map(|record| PersistedPending {
                    id: record.id.clone(),
                    location: record.location.clone(),
                })
                .collect(),
        };
        self.save_file(PENDING_FILENAME, &state);
    }

    pub fn save_history(&self, records: &[DeliveryRecord]) {
        let state = PersistedHistory {
            deliveries: records
                .iter()
                .map(|record| PersistedDelivery {
                    id: record.id.clone(),
                    location: record.location.clone(),
                    pickup_time: record.pickup_time.clone(),
                    photo: record.photo.clone(),
                })
                .collect(),
        };
        self.save_file(HISTORY_FILENAME, &state);
    }

    fn load_file<T>(&self, filename: &str) -> T
    where
        T: serde::de::DeserializeOwned + Default,
    {
        let path = self.dir.join(filename);
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return T::default();
            }
            Err(err) => {
                depot_warn!("Failed to read persisted state from {:?}: {}", path, err);
                return T::default();
            }
        };

        match ron::from_str(&content) {
            Ok(state) => {
                depot_info!("Loaded persisted state from {:?}", path);
                state
            }
            Err(err) => {
                depot_warn!("Failed to parse persisted state from {:?}: {}", path, err);
                T::default()
            }
        }
    }

    fn save_file<T: Serialize>(&self, filename: &str, state: &T) {
        let pretty = ron::ser::PrettyConfig::new();
        let content = match ron::ser::to_string_pretty(state, pretty) {
            Ok(text) => text,
            Err(err) => {
                depot_error!("Failed to serialize persisted state: {}", err);
                return;
            }
        };

        let writer = AtomicFileWriter::new(self.dir.clone());
        if let Err(err) = writer.write(filename, content.as_bytes()) {
            depot_error!(
                "Failed to write persisted state to {:?}: {}",
                self.dir,
                err
            );
        }
    }
}
