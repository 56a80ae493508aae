use chrono::Local;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{FLOW_RANGE, LEVEL_RANGE, PRESSURE_RANGE};
use crate::logic::simulation::SimulationPhase;

/// One synthetic multi-channel sensor reading.
///
/// Immutable once created. All channels are clamped to their envelopes
/// before construction, so an out-of-range value is a generator bug,
/// never stored state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryPoint {
    /// Wall-clock label (HH:MM:SS, 24h) for chart axes
    pub time: String,
    /// psi
    pub pressure: f64,
    /// m3/h
    pub flow: f64,
    /// percent of reservoir capacity
    pub level: f64,
    /// normalized anomaly score
    pub anomaly_level: f64,
}

/// Generate one telemetry point for `step` under `phase`.
///
/// Baseline is phase-independent sinusoidal drift plus bounded noise;
/// each non-normal phase adds its own bias terms on top.
pub fn generate<R: Rng>(step: u64, phase: SimulationPhase, rng: &mut R) -> TelemetryPoint {
    let s = step as f64;
    let drift = (step % 24) as f64 / 24.0;

    let mut pressure = 72.0 + (s / 3.7).sin() * 1.8 + (rng.gen::<f64>() - 0.5) * 0.9;
    let mut flow = 40.0 + (s / 5.4).sin() * 1.3 + (rng.gen::<f64>() - 0.5) * 0.65;
    let mut level = 68.0 + (s / 8.0).sin() * 0.9 + (rng.gen::<f64>() - 0.5) * 0.42;
    let mut anomaly = 0.1 + rng.gen::<f64>() * 0.12;

    match phase {
        SimulationPhase::Normal => {}
        SimulationPhase::Phase1 => {
            // Moderate oscillation growth on pressure/flow
            pressure += (s * 1.7).sin() * 2.5;
            flow += 1.8 + drift * 3.0;
            anomaly = 0.45 + rng.gen::<f64>() * 0.1;
        }
        SimulationPhase::Phase2 => {
            // Large synchronized spikes across all three channels
            let kick = if rng.gen::<f64>() > 0.74 { 4.8 } else { 0.0 };
            pressure += 7.5 + (s * 2.2).sin() * 6.4 + kick;
            flow += 7.2 + (s / 1.8).sin() * 3.9;
            level += (s * 1.9).sin() * 5.6;
            anomaly = 0.8 + rng.gen::<f64>() * 0.15;
        }
        SimulationPhase::Phase3 => {
            // Decaying oscillation bias: post-containment stabilization
            pressure += 3.4 + (s * 1.6).sin() * 3.2;
            flow += 3.1 + (s / 2.5).sin() * 2.3;
            level += (s * 1.4).sin() * 2.8;
            anomaly = 0.63 + rng.gen::<f64>() * 0.13;
        }
    }

    TelemetryPoint {
        time: Local::now().format("%H:%M:%S").to_string(),
        pressure: pressure.clamp(PRESSURE_RANGE.0, PRESSURE_RANGE.1),
        flow: flow.clamp(FLOW_RANGE.0, FLOW_RANGE.1),
        level: level.clamp(LEVEL_RANGE.0, LEVEL_RANGE.1),
        anomaly_level: anomaly.clamp(0.0, 1.0),
    }
}

/// Generate the startup backlog under the normal phase.
pub fn seed_backlog<R: Rng>(count: usize, rng: &mut R) -> Vec<TelemetryPoint> {
    (0..count as u64)
        .map(|step| generate(step, SimulationPhase::Normal, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_in_range(p: &TelemetryPoint) {
        assert!(p.pressure >= PRESSURE_RANGE.0 && p.pressure <= PRESSURE_RANGE.1);
        assert!(p.flow >= FLOW_RANGE.0 && p.flow <= FLOW_RANGE.1);
        assert!(p.level >= LEVEL_RANGE.0 && p.level <= LEVEL_RANGE.1);
        assert!(p.anomaly_level >= 0.0 && p.anomaly_level <= 1.0);
    }

    #[test]
    fn test_channels_clamped_under_all_phases() {
        let mut rng = StdRng::seed_from_u64(99);
        let phases = [
            SimulationPhase::Normal,
            SimulationPhase::Phase1,
            SimulationPhase::Phase2,
            SimulationPhase::Phase3,
        ];

        for phase in phases {
            for step in 0..200 {
                let point = generate(step, phase, &mut rng);
                assert_in_range(&point);
            }
        }
    }

    #[test]
    fn test_phase_two_elevates_anomaly_score() {
        let mut rng = StdRng::seed_from_u64(7);
        for step in 0..50 {
            let point = generate(step, SimulationPhase::Phase2, &mut rng);
            assert!(point.anomaly_level >= 0.8);
        }
    }

    #[test]
    fn test_seed_backlog_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let backlog = seed_backlog(34, &mut rng);
        assert_eq!(backlog.len(), 34);
        for p in &backlog {
            assert_in_range(p);
        }
    }
}
