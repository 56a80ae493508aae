//! Event Bus - Engine to Presentation Layer
//!
//! The presentation layer subscribes for transient notifications
//! (toasts, alert pulses, state changes); durable data is read via
//! engine snapshots instead. Emitting with no subscribers is fine.

use serde::Serialize;
use tokio::sync::broadcast;

use crate::logic::simulation::{SimulationPhase, SystemStatus};

const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ToastKind {
    Critical,
    Info,
}

#[derive(Debug, Clone, Serialize)]
pub enum EngineEvent {
    /// Transient notification banner
    Toast { kind: ToastKind, message: String },
    /// Visual/audio alert pulse raised on phase-2 entry, cleared shortly after
    AlertPulse { active: bool },
    /// Simulation phase transition (with the status it implies)
    PhaseChanged {
        phase: SimulationPhase,
        status: SystemStatus,
    },
    /// Status override from the classifier, phase unchanged
    StatusChanged { status: SystemStatus },
    /// A new entry landed in the incident ledger
    IncidentRecorded,
}

/// Broadcast fan-out for engine events.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<EngineEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.tx.subscribe()
    }

    /// Emit to all listeners. A send error only means nobody is
    /// subscribed right now, which is not a failure.
    pub fn emit(&self, event: EngineEvent) {
        if self.tx.send(event).is_err() {
            log::debug!("No event subscribers, event dropped");
        }
    }

    pub fn emit_toast(&self, kind: ToastKind, message: impl Into<String>) {
        self.emit(EngineEvent::Toast {
            kind,
            message: message.into(),
        });
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_toast() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.emit_toast(ToastKind::Info, "Threat contained. System stabilized.");

        match rx.recv().await.unwrap() {
            EngineEvent::Toast { kind, message } => {
                assert_eq!(kind, ToastKind::Info);
                assert!(message.contains("stabilized"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_emit_without_subscribers_is_silent() {
        let bus = EventBus::new();
        bus.emit(EngineEvent::IncidentRecorded);
    }
}
