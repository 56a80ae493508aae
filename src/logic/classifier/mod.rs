//! Classifier Integration - External Decision Fusion
//!
//! Packages the trailing telemetry window, calls the external
//! classifier, and fuses its advisory decision into system status.
//! The decision never touches the simulation phase. Requests are
//! fire-and-forget; responses apply in arrival order, last one wins.

pub mod client;
pub mod types;

pub use client::{ClassifierClient, ClassifierError};
pub use types::{ClassifierResult, Confidence, Decision};

use crate::logic::simulation::{Engine, SystemStatus};

/// Status the given decision maps onto.
pub fn fuse_decision(decision: Decision) -> SystemStatus {
    match decision {
        Decision::Attack => SystemStatus::ActiveAttack,
        Decision::Suspicious => SystemStatus::Suspicious,
        Decision::Normal => SystemStatus::Normal,
    }
}

/// Issue one prediction for `window` and apply the result to the
/// engine when it arrives. Transport and protocol failures are logged
/// and leave the previously applied decision untouched.
pub async fn run_once(client: &ClassifierClient, engine: &Engine, window: Vec<[f64; 3]>) {
    match client.predict(window).await {
        Ok(result) => {
            log::debug!(
                "Classifier decision: {:?} (risk {:.0}, confidence {:?})",
                result.decision,
                result.risk_score,
                result.confidence
            );
            engine.apply_classifier_result(result);
        }
        Err(e) => {
            log::warn!("Classifier call failed, keeping previous decision: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_to_status_mapping() {
        assert_eq!(fuse_decision(Decision::Attack), SystemStatus::ActiveAttack);
        assert_eq!(fuse_decision(Decision::Suspicious), SystemStatus::Suspicious);
        assert_eq!(fuse_decision(Decision::Normal), SystemStatus::Normal);
    }
}
