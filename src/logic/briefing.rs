//! AI Briefing - Per-Phase Narrative Records
//!
//! Static operator-facing reasoning for each simulation phase. Selected
//! by phase, never mutated individually.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::logic::simulation::SimulationPhase;

#[derive(Debug, Clone, Serialize)]
pub struct AiBriefing {
    pub confidence: u8,
    pub headline: String,
    pub summary: String,
    pub threat_level: String,
    pub signals: Vec<String>,
    pub recommendations: Vec<String>,
    pub expanded: bool,
}

fn briefing(
    confidence: u8,
    headline: &str,
    summary: &str,
    threat_level: &str,
    expanded: bool,
    signals: &[&str],
    recommendations: &[&str],
) -> AiBriefing {
    AiBriefing {
        confidence,
        headline: headline.to_string(),
        summary: summary.to_string(),
        threat_level: threat_level.to_string(),
        signals: signals.iter().map(|s| s.to_string()).collect(),
        recommendations: recommendations.iter().map(|s| s.to_string()).collect(),
        expanded,
    }
}

static BRIEFINGS: Lazy<[AiBriefing; 4]> = Lazy::new(|| {
    [
        briefing(
            18,
            "All monitored signals remain within trusted baseline.",
            "Correlation drift is minimal across pressure-flow-level channels. \
             Redundancy checks are stable and no malicious indicators are present.",
            "Low",
            false,
            &[
                "Pressure-flow covariance stable across rolling window.",
                "Fallback model idle with healthy confidence margins.",
                "No sustained divergence in water-level telemetry.",
            ],
            &[
                "Maintain routine sensor calibration cycle.",
                "Continue passive anomaly scoring at 900ms cadence.",
                "Archive latest baseline profile for drift monitoring.",
            ],
        ),
        briefing(
            57,
            "Irregular signal variance detected.",
            "Pressure oscillation and flow drift exceed normal operating variance. \
             Correlation integrity check is flagged as suspicious but not yet critical.",
            "Guarded",
            false,
            &[
                "Pressure waveform shows growing high-frequency oscillation.",
                "Flow baseline drifting beyond learned seasonal envelope.",
                "Redundancy cross-check disagreement at 0.42 anomaly score.",
            ],
            &[
                "Increase polling sensitivity on zone-3 pressure cluster.",
                "Activate shadow model verification for flow channel.",
                "Prepare containment rules for coordinated manipulation pattern.",
            ],
        ),
        briefing(
            88,
            "Escalation detected across correlated sensor channels.",
            "Rapid pressure spikes and aggressive flow inflation indicate potential \
             malicious data manipulation. Active intrusion pattern now likely.",
            "High",
            false,
            &[
                "Pressure exceeds secure envelope with synchronized spike intervals.",
                "Flow threshold breached above safe hydraulic band.",
                "Water-level fluctuation no longer aligns with demand profile.",
            ],
            &[
                "Force dual-model arbitration on all critical channels.",
                "Throttle unsafe actuation requests from suspect node.",
                "Prioritize incident response for affected sensor gateway.",
            ],
        ),
        briefing(
            94,
            "Containment protocol engaged. Investigation in progress.",
            "Detected coordinated manipulation of flow-pressure correlation. \
             Probability of malicious intrusion: 94%.",
            "High",
            true,
            &[
                "Correlated anomaly fingerprint matches known adversarial pattern.",
                "Fallback path confirms attack-class confidence above threshold.",
                "Containment policy reduced active drift across all channels.",
            ],
            &[
                "Lock suspect source and preserve forensic packet traces.",
                "Keep dual-model redundancy active during stabilization window.",
                "Commit validated counter-action to long-term memory.",
            ],
        ),
    ]
});

/// Briefing for the given phase.
pub fn for_phase(phase: SimulationPhase) -> &'static AiBriefing {
    match phase {
        SimulationPhase::Normal => &BRIEFINGS[0],
        SimulationPhase::Phase1 => &BRIEFINGS[1],
        SimulationPhase::Phase2 => &BRIEFINGS[2],
        SimulationPhase::Phase3 => &BRIEFINGS[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_ladder() {
        assert_eq!(for_phase(SimulationPhase::Normal).confidence, 18);
        assert_eq!(for_phase(SimulationPhase::Phase1).confidence, 57);
        assert_eq!(for_phase(SimulationPhase::Phase2).confidence, 88);
        assert_eq!(for_phase(SimulationPhase::Phase3).confidence, 94);
    }

    #[test]
    fn test_only_containment_briefing_expanded() {
        assert!(!for_phase(SimulationPhase::Normal).expanded);
        assert!(!for_phase(SimulationPhase::Phase1).expanded);
        assert!(!for_phase(SimulationPhase::Phase2).expanded);
        assert!(for_phase(SimulationPhase::Phase3).expanded);
    }
}
