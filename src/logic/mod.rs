//! Logic Module - Simulation, Decision-Fusion & Adaptive-Memory Engines
//!
//! - `telemetry/` - Synthetic multi-channel sensor readings + bounded window
//! - `simulation/` - Attack phase state machine and owned engine state
//! - `memory/` - Persistent countermeasure memory store
//! - `ledger/` - Bounded newest-first incident log
//! - `metrics/` - Fault-tolerance metrics over the incident history
//! - `classifier/` - External classifier client and decision fusion
//! - `background` - Stochastic incident source exercising memory/metrics

pub mod background;
pub mod briefing;
pub mod classifier;
pub mod events;
pub mod ledger;
pub mod memory;
pub mod metrics;
pub mod simulation;
pub mod telemetry;
