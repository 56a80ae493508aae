use serde::{Deserialize, Serialize};

/// Stage of the simulated coordinated attack. Exactly one is active.
///
/// Transitions are linear: normal -> phase1 -> phase2 -> phase3 -> normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationPhase {
    Normal,
    Phase1,
    Phase2,
    Phase3,
}

impl SimulationPhase {
    /// Operator-facing status this phase maps to by default.
    /// The classifier decision may override it independently.
    pub fn default_status(self) -> SystemStatus {
        match self {
            SimulationPhase::Normal => SystemStatus::Normal,
            SimulationPhase::Phase1 => SystemStatus::Suspicious,
            SimulationPhase::Phase2 | SimulationPhase::Phase3 => SystemStatus::ActiveAttack,
        }
    }
}

/// Operator-facing alert level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemStatus {
    Normal,
    Suspicious,
    ActiveAttack,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_maps_to_default_status() {
        assert_eq!(SimulationPhase::Normal.default_status(), SystemStatus::Normal);
        assert_eq!(SimulationPhase::Phase1.default_status(), SystemStatus::Suspicious);
        assert_eq!(SimulationPhase::Phase2.default_status(), SystemStatus::ActiveAttack);
        assert_eq!(SimulationPhase::Phase3.default_status(), SystemStatus::ActiveAttack);
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_string(&SystemStatus::ActiveAttack).unwrap();
        assert_eq!(json, "\"active_attack\"");
        let json = serde_json::to_string(&SimulationPhase::Phase2).unwrap();
        assert_eq!(json, "\"phase2\"");
    }
}
