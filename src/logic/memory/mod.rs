//! Countermeasure Memory - Adaptive Remediation Store
//!
//! Maps a stable anomaly-pattern key to the remediation learned on its
//! first occurrence. Recurrences reuse the stored text and only bump
//! usage metadata. The full map persists to a single JSON slot after
//! every mutation; corrupt or missing data degrades to an empty store.

pub mod storage;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;

pub use store::MemoryStore;
pub use types::{MemoryAction, MemoryEntry, MemoryOutcome, Pattern};

/// Pattern recorded when the phase-3 containment transition fires.
pub const COORDINATED_MANIPULATION: Pattern = Pattern {
    key: "coordinated-flow-pressure-manipulation",
    label: "Coordinated flow-pressure manipulation",
    countermeasure:
        "Deploy correlation lock, freeze suspect actuator path, and keep dual-model voting active.",
};

/// Recurring false-positive patterns used by the background event source.
pub const FALSE_POSITIVE_PATTERNS: [Pattern; 3] = [
    Pattern {
        key: "pressure-harmonic-variance",
        label: "Pressure harmonic variance",
        countermeasure: "Apply 8s temporal smoothing and cross-check with valve-state channel.",
    },
    Pattern {
        key: "flow-calibration-drift",
        label: "Flow calibration drift",
        countermeasure: "Trigger sensor recalibration and fallback to redundant flow estimator.",
    },
    Pattern {
        key: "water-level-noise-burst",
        label: "Water level noise burst",
        countermeasure: "Suppress burst window and re-validate with dual-model consensus.",
    },
];
