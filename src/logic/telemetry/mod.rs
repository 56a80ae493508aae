//! Telemetry - Synthetic Sensor Readings
//!
//! One point per tick, shaped by the active simulation phase, clamped to
//! the fixed channel envelopes before it ever reaches the window.

pub mod generator;
pub mod window;

pub use generator::{generate, seed_backlog, TelemetryPoint};
pub use window::TelemetryWindow;
