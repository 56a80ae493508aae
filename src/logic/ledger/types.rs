use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::logic::memory::MemoryAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictionType {
    Threat,
    #[serde(rename = "False Positive")]
    FalsePositive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentStatus {
    Closed,
    Resolved,
    Mitigated,
    Investigating,
    Open,
}

impl IncidentStatus {
    /// Counts toward the recovery-success rate.
    pub fn is_recovered(self) -> bool {
        matches!(
            self,
            IncidentStatus::Resolved | IncidentStatus::Closed | IncidentStatus::Mitigated
        )
    }
}

/// One immutable record of an operationally significant event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    pub id: Uuid,
    pub timestamp: String,
    pub sensor_id: String,
    pub event: String,
    pub prediction_type: PredictionType,
    pub severity: Severity,
    pub countermeasure: String,
    pub memory_action: MemoryAction,
    pub status: IncidentStatus,
    pub mitigation_seconds: u32,
    pub fallback_activated: bool,
}

impl Incident {
    #[allow(clippy::too_many_arguments)]
    pub fn record(
        sensor_id: &str,
        event: impl Into<String>,
        prediction_type: PredictionType,
        severity: Severity,
        countermeasure: impl Into<String>,
        memory_action: MemoryAction,
        status: IncidentStatus,
        mitigation_seconds: u32,
    ) -> Self {
        Self::record_at(
            Local::now(),
            sensor_id,
            event,
            prediction_type,
            severity,
            countermeasure,
            memory_action,
            status,
            mitigation_seconds,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn record_at(
        at: DateTime<Local>,
        sensor_id: &str,
        event: impl Into<String>,
        prediction_type: PredictionType,
        severity: Severity,
        countermeasure: impl Into<String>,
        memory_action: MemoryAction,
        status: IncidentStatus,
        mitigation_seconds: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: at.format("%b %d, %Y, %H:%M:%S").to_string(),
            sensor_id: sensor_id.to_string(),
            event: event.into(),
            prediction_type,
            severity,
            countermeasure: countermeasure.into(),
            memory_action,
            status,
            mitigation_seconds,
            fallback_activated: false,
        }
    }

    pub fn with_fallback(mut self) -> Self {
        self.fallback_activated = true;
        self
    }
}
