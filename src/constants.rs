//! Central Configuration Constants
//!
//! Single source of truth for all simulation timing, channel ranges,
//! and storage defaults. To change the classifier endpoint or cadence,
//! only edit this file.

use std::time::Duration;

/// Telemetry generation cadence
pub const TELEMETRY_TICK: Duration = Duration::from_millis(900);

/// Display clock refresh cadence
pub const CLOCK_TICK: Duration = Duration::from_millis(1000);

/// Stochastic background incident cadence
pub const BACKGROUND_TICK: Duration = Duration::from_secs(16);

/// Delay from attack-start command to phase 2 escalation
pub const PHASE_TWO_DELAY: Duration = Duration::from_millis(2000);

/// Delay from attack-start command to phase 3 containment
pub const PHASE_THREE_DELAY: Duration = Duration::from_millis(5600);

/// How long the phase-2 alert pulse flag stays raised
pub const ALERT_PULSE_DURATION: Duration = Duration::from_millis(340);

/// Telemetry window capacity (oldest points dropped on overflow)
pub const MAX_TELEMETRY_POINTS: usize = 44;

/// Telemetry backlog generated at startup
pub const SEED_TELEMETRY_POINTS: usize = 34;

/// Incident ledger capacity (oldest entries dropped on overflow)
pub const MAX_INCIDENTS: usize = 36;

/// Trailing points packaged per classifier request
pub const CLASSIFIER_WINDOW: usize = 20;

/// Clamp ranges for each telemetry channel
pub const PRESSURE_RANGE: (f64, f64) = (52.0, 96.0);
pub const FLOW_RANGE: (f64, f64) = (28.0, 64.0);
pub const LEVEL_RANGE: (f64, f64) = (50.0, 84.0);

/// Known sensor network nodes
pub const SENSOR_IDS: [&str; 5] = ["P-11", "P-17", "P-23", "W-05", "GW-A2"];

/// Persisted memory store slot (single JSON file)
pub const MEMORY_STORE_SLOT: &str = "countermeasure_memory_v1.json";

/// Application directory under the platform data dir
pub const APP_DIR: &str = "hydrovigil";

/// Default classifier endpoint
///
/// This is the fallback URL when no environment variable is set.
pub const DEFAULT_CLASSIFIER_URL: &str = "http://127.0.0.1:8000/predict";

/// Classifier request timeout (seconds)
pub const CLASSIFIER_TIMEOUT_SECS: u64 = 30;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "HydroVigil";

/// Get classifier URL from environment or use default
pub fn get_classifier_url() -> String {
    std::env::var("CLASSIFIER_URL").unwrap_or_else(|_| DEFAULT_CLASSIFIER_URL.to_string())
}
