//! Simulation - Attack Phase State Machine & Engine State
//!
//! The engine is the single writer: every mutation of phase, status,
//! ledger, memory, and telemetry funnels through its operations. The
//! presentation layer only ever sees read-only snapshots.

pub mod engine;
pub mod scheduler;
pub mod types;

pub use engine::{Engine, EngineConfig, StatusSnapshot};
pub use scheduler::Scheduler;
pub use types::{SimulationPhase, SystemStatus};
