use serde::{Deserialize, Serialize};

/// A recognized anomaly pattern and its candidate remediation.
///
/// The candidate text only matters on the pattern's first occurrence;
/// after that the store's copy is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub key: &'static str,
    pub label: &'static str,
    pub countermeasure: &'static str,
}

/// One learned remediation record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub key: String,
    pub label: String,
    pub countermeasure: String,
    pub use_count: u32,
    /// Unix millis of the most recent occurrence
    pub last_used: i64,
    /// Store-local monotonic counter bumped on every occurrence.
    /// Orders entries touched within the same millisecond.
    #[serde(default)]
    pub touch_seq: u64,
}

/// How the memory store handled an incident's pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryAction {
    #[serde(rename = "N/A")]
    NotApplicable,
    #[serde(rename = "Stored for future reuse")]
    Stored,
    #[serde(rename = "Reused from memory")]
    Reused,
}

impl MemoryAction {
    pub fn as_str(self) -> &'static str {
        match self {
            MemoryAction::NotApplicable => "N/A",
            MemoryAction::Stored => "Stored for future reuse",
            MemoryAction::Reused => "Reused from memory",
        }
    }
}

impl std::fmt::Display for MemoryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of routing a pattern through the store.
#[derive(Debug, Clone)]
pub struct MemoryOutcome {
    pub countermeasure: String,
    pub action: MemoryAction,
}
