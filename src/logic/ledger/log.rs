use std::collections::VecDeque;

use chrono::{Duration, Local};

use crate::logic::memory::MemoryAction;

use super::types::{Incident, IncidentStatus, PredictionType, Severity};

/// Bounded most-recent-first incident log.
#[derive(Debug)]
pub struct IncidentLedger {
    entries: VecDeque<Incident>,
    capacity: usize,
}

impl IncidentLedger {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Ledger pre-populated with the operational history shown on a
    /// fresh console: a closed drift check, a resolved false alert,
    /// and a mitigated fallback engagement.
    pub fn seeded(capacity: usize) -> Self {
        let mut ledger = Self::new(capacity);
        let now = Local::now();

        ledger.append(Incident::record_at(
            now - Duration::minutes(11),
            "P-17",
            "Baseline drift check completed successfully.",
            PredictionType::Threat,
            Severity::Low,
            "No action required.",
            MemoryAction::NotApplicable,
            IncidentStatus::Closed,
            12,
        ));
        ledger.append(Incident::record_at(
            now - Duration::minutes(7),
            "W-05",
            "False alert from transient level turbulence.",
            PredictionType::FalsePositive,
            Severity::Medium,
            "Burst suppression filter applied and confirmed.",
            MemoryAction::Stored,
            IncidentStatus::Resolved,
            38,
        ));
        ledger.append(
            Incident::record_at(
                now - Duration::minutes(3),
                "GW-A2",
                "Primary model confidence dip. LSTM fallback engaged.",
                PredictionType::Threat,
                Severity::Low,
                "Dual-model arbitration maintained service continuity.",
                MemoryAction::NotApplicable,
                IncidentStatus::Mitigated,
                21,
            )
            .with_fallback(),
        );

        ledger
    }

    /// Append newest-first, truncating the oldest entries past capacity.
    pub fn append(&mut self, incident: Incident) {
        self.entries.push_front(incident);
        self.entries.truncate(self.capacity);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&Incident> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Incident> {
        self.entries.iter()
    }

    /// Newest-first copy for the presentation layer.
    pub fn snapshot(&self) -> Vec<Incident> {
        self.entries.iter().cloned().collect()
    }

    /// Entries relevant to the validation view: false positives and
    /// anything that touched the countermeasure memory.
    pub fn validation_view(&self) -> Vec<Incident> {
        self.entries
            .iter()
            .filter(|inc| {
                inc.prediction_type == PredictionType::FalsePositive
                    || matches!(inc.memory_action, MemoryAction::Stored | MemoryAction::Reused)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incident(n: u32) -> Incident {
        Incident::record(
            "P-11",
            format!("event {}", n),
            PredictionType::Threat,
            Severity::Low,
            "--",
            MemoryAction::NotApplicable,
            IncidentStatus::Closed,
            n,
        )
    }

    #[test]
    fn test_newest_first_order() {
        let mut ledger = IncidentLedger::new(36);
        ledger.append(incident(1));
        ledger.append(incident(2));

        let snap = ledger.snapshot();
        assert_eq!(snap[0].event, "event 2");
        assert_eq!(snap[1].event, "event 1");
    }

    #[test]
    fn test_capacity_never_exceeded() {
        let mut ledger = IncidentLedger::new(36);
        for n in 0..120 {
            ledger.append(incident(n));
            assert!(ledger.len() <= 36);
        }

        assert_eq!(ledger.len(), 36);
        // Oldest dropped first: the newest 36 survive
        assert_eq!(ledger.latest().unwrap().event, "event 119");
        assert_eq!(ledger.snapshot().last().unwrap().event, "event 84");
    }

    #[test]
    fn test_seeded_history() {
        let ledger = IncidentLedger::seeded(36);
        assert_eq!(ledger.len(), 3);
        // Newest seed entry is the fallback engagement
        assert!(ledger.latest().unwrap().fallback_activated);
        assert_eq!(ledger.validation_view().len(), 1);
    }
}
