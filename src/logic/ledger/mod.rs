//! Incident Ledger - Bounded Operational Audit Log
//!
//! Newest-first, capped at a fixed depth, entries immutable once
//! appended. Fault metrics are a pure function of this log.

pub mod log;
pub mod types;

pub use log::IncidentLedger;
pub use types::{Incident, IncidentStatus, PredictionType, Severity};
