use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_DIR, MEMORY_STORE_SLOT};

use super::types::MemoryEntry;

/// Default persisted slot path
pub fn default_slot_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(MEMORY_STORE_SLOT)
}

/// Load the persisted map. Missing, unparsable, or non-object payloads
/// degrade to an empty map, never an error.
pub fn load_map(path: &Path) -> HashMap<String, MemoryEntry> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return HashMap::new(),
    };

    match serde_json::from_str::<HashMap<String, MemoryEntry>>(&raw) {
        Ok(map) => map,
        Err(e) => {
            log::warn!(
                "Countermeasure memory at {} is unreadable ({}), starting empty",
                path.display(),
                e
            );
            HashMap::new()
        }
    }
}

/// A serialized map waiting to be written out. Serialization happens
/// at construction, while the owner still holds its state lock; the
/// actual disk write runs wherever the job is executed.
#[derive(Debug)]
pub struct SaveJob {
    slot: PathBuf,
    payload: Vec<u8>,
}

/// Snapshot the full map into a write job. Best effort: a serialization
/// failure is logged and yields no job.
pub fn save_job(slot: &Path, map: &HashMap<String, MemoryEntry>) -> Option<SaveJob> {
    match serde_json::to_vec_pretty(map) {
        Ok(payload) => Some(SaveJob {
            slot: slot.to_path_buf(),
            payload,
        }),
        Err(e) => {
            log::warn!("Cannot serialize countermeasure memory: {}", e);
            None
        }
    }
}

impl SaveJob {
    /// Write the payload into the slot. Failures are logged and the
    /// in-memory state stays authoritative until the next save.
    pub fn run(self) {
        if let Some(parent) = self.slot.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                log::warn!("Cannot create memory store dir {}: {}", parent.display(), e);
                return;
            }
        }
        if let Err(e) = fs::write(&self.slot, &self.payload) {
            log::warn!("Cannot persist countermeasure memory: {}", e);
        }
    }

    /// Run the write on the blocking pool when a runtime is available,
    /// inline otherwise.
    pub fn dispatch(self) {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn_blocking(move || self.run());
            }
            Err(_) => self.run(),
        }
    }
}
