//! Fault Metrics - Aggregate Detection/Response Quality
//!
//! Pure recomputation over the incident ledger plus the memory store
//! size. Never cached across ledger or memory mutations.

pub mod reports;

use serde::Serialize;

use crate::logic::ledger::Incident;
use crate::logic::memory::MemoryAction;

pub use reports::{ModelReport, DUAL_MODEL_REDUNDANCY, TRANSFORMER_LSTM_FALLBACK};

#[derive(Debug, Clone, Serialize)]
pub struct FaultMetrics {
    pub false_prediction_rate: f64,
    pub recovery_success_rate: f64,
    pub countermeasure_reuse_hit_rate: f64,
    pub fallback_activations: usize,
    pub memory_entries: usize,
    pub mean_mitigation_seconds: f64,
    /// Static reference-model benchmarks, not derived from live data
    pub benchmark_accuracy: f64,
    pub benchmark_attack_f1: f64,
    pub benchmark_attack_recall: f64,
}

/// Compute fault metrics from the incident history.
///
/// Denominator-zero conventions: an empty ledger has a 0% false rate
/// and a 100% recovery rate; with no false positives the reuse rate
/// is 0%; with no mitigation samples the mean is 0.
pub fn compute(incidents: &[Incident], memory_entries: usize) -> FaultMetrics {
    let total = incidents.len();

    let false_positives = incidents
        .iter()
        .filter(|inc| inc.prediction_type == crate::logic::ledger::PredictionType::FalsePositive)
        .count();
    let recovered = incidents.iter().filter(|inc| inc.status.is_recovered()).count();
    let reuse_hits = incidents
        .iter()
        .filter(|inc| inc.memory_action == MemoryAction::Reused)
        .count();
    let fallback_activations = incidents.iter().filter(|inc| inc.fallback_activated).count();

    let mitigation_sum: u64 = incidents.iter().map(|inc| inc.mitigation_seconds as u64).sum();

    FaultMetrics {
        false_prediction_rate: if total > 0 {
            false_positives as f64 / total as f64 * 100.0
        } else {
            0.0
        },
        recovery_success_rate: if total > 0 {
            recovered as f64 / total as f64 * 100.0
        } else {
            100.0
        },
        countermeasure_reuse_hit_rate: if false_positives > 0 {
            reuse_hits as f64 / false_positives as f64 * 100.0
        } else {
            0.0
        },
        fallback_activations,
        memory_entries,
        mean_mitigation_seconds: if total > 0 {
            mitigation_sum as f64 / total as f64
        } else {
            0.0
        },
        benchmark_accuracy: DUAL_MODEL_REDUNDANCY.accuracy,
        benchmark_attack_f1: DUAL_MODEL_REDUNDANCY.attack_f1,
        benchmark_attack_recall: DUAL_MODEL_REDUNDANCY.attack_recall,
    }
}
