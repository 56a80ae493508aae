use std::collections::HashMap;
use std::path::PathBuf;

use chrono::Utc;

use super::storage;
use super::types::{MemoryAction, MemoryEntry, MemoryOutcome, Pattern};

/// Persistent mapping from pattern key to learned remediation.
#[derive(Debug)]
pub struct MemoryStore {
    entries: HashMap<String, MemoryEntry>,
    slot: Option<PathBuf>,
    seq: u64,
}

impl MemoryStore {
    /// Open the store backed by the given slot, loading whatever was
    /// persisted there. Corrupt or missing data starts empty.
    pub fn open(slot: PathBuf) -> Self {
        let entries = storage::load_map(&slot);
        if !entries.is_empty() {
            log::info!(
                "Loaded {} learned countermeasure(s) from {}",
                entries.len(),
                slot.display()
            );
        }
        let seq = entries.values().map(|e| e.touch_seq).max().unwrap_or(0);
        Self {
            entries,
            slot: Some(slot),
            seq,
        }
    }

    /// Volatile store, used in tests and when persistence is disabled.
    pub fn in_memory() -> Self {
        Self {
            entries: HashMap::new(),
            slot: None,
            seq: 0,
        }
    }

    /// Lookup-or-create with reuse counting.
    ///
    /// First occurrence of a key stores the pattern's remediation text.
    /// Every later occurrence returns the original text and only bumps
    /// `use_count` / `last_used`, even if the caller supplies different
    /// wording for the same key.
    pub fn apply(&mut self, pattern: &Pattern) -> MemoryOutcome {
        let now = Utc::now().timestamp_millis();
        self.seq += 1;

        match self.entries.get_mut(pattern.key) {
            Some(existing) => {
                existing.use_count += 1;
                existing.last_used = now;
                existing.touch_seq = self.seq;
                MemoryOutcome {
                    countermeasure: existing.countermeasure.clone(),
                    action: MemoryAction::Reused,
                }
            }
            None => {
                self.entries.insert(
                    pattern.key.to_string(),
                    MemoryEntry {
                        key: pattern.key.to_string(),
                        label: pattern.label.to_string(),
                        countermeasure: pattern.countermeasure.to_string(),
                        use_count: 1,
                        last_used: now,
                        touch_seq: self.seq,
                    },
                );
                MemoryOutcome {
                    countermeasure: pattern.countermeasure.to_string(),
                    action: MemoryAction::Stored,
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&MemoryEntry> {
        self.entries.get(key)
    }

    /// Learned entries, most recently used first. `touch_seq` breaks
    /// `last_used` ties, since back-to-back applies can land in the
    /// same millisecond.
    pub fn snapshot(&self) -> Vec<MemoryEntry> {
        let mut list: Vec<MemoryEntry> = self.entries.values().cloned().collect();
        list.sort_by(|a, b| (b.last_used, b.touch_seq).cmp(&(a.last_used, a.touch_seq)));
        list
    }

    /// Serialize the current map for persistence, `None` when the store
    /// is volatile. The caller runs the job after releasing whatever
    /// lock guards the store, so the disk write never holds it up.
    pub fn save_job(&self) -> Option<storage::SaveJob> {
        let slot = self.slot.as_deref()?;
        storage::save_job(slot, &self.entries)
    }
}
