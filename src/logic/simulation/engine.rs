use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use parking_lot::{Mutex, RwLock};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use tokio::time::sleep;

use crate::constants::{
    ALERT_PULSE_DURATION, CLASSIFIER_WINDOW, MAX_INCIDENTS, MAX_TELEMETRY_POINTS,
    PHASE_THREE_DELAY, PHASE_TWO_DELAY, SEED_TELEMETRY_POINTS, SENSOR_IDS,
};
use crate::logic::background::{self, BackgroundEvent};
use crate::logic::briefing::{self, AiBriefing};
use crate::logic::classifier::{fuse_decision, ClassifierResult};
use crate::logic::events::{EngineEvent, EventBus, ToastKind};
use crate::logic::ledger::{Incident, IncidentLedger, IncidentStatus, PredictionType, Severity};
use crate::logic::memory::{storage, MemoryAction, MemoryEntry, MemoryStore, COORDINATED_MANIPULATION};
use crate::logic::metrics::{self, FaultMetrics};
use crate::logic::telemetry::{generate, seed_backlog, TelemetryPoint, TelemetryWindow};

use super::scheduler::Scheduler;
use super::types::{SimulationPhase, SystemStatus};

/// Engine construction parameters.
pub struct EngineConfig {
    /// Persisted memory slot. `None` keeps the store in memory only.
    pub memory_slot: Option<PathBuf>,
    /// Fixed seed for the random source; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            memory_slot: Some(storage::default_slot_path()),
            seed: None,
        }
    }
}

/// Owned mutable state of the core. Only engine operations touch it.
struct EngineState {
    phase: SimulationPhase,
    status: SystemStatus,
    target_sensor: String,
    alert_pulse: bool,
    simulation_running: bool,
    wall_clock: String,
    tick: u64,
    window: TelemetryWindow,
    ledger: IncidentLedger,
    memory: MemoryStore,
    classifier: Option<ClassifierResult>,
    rng: StdRng,
}

/// Read-only operator-facing view of the live state.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    pub phase: SimulationPhase,
    pub status: SystemStatus,
    pub briefing: AiBriefing,
    pub target_sensor: String,
    pub alert_pulse: bool,
    pub simulation_running: bool,
    pub wall_clock: String,
    pub classifier: Option<ClassifierResult>,
    /// Classifier risk score when available, else the briefing confidence
    pub threat_confidence: f64,
    pub false_prediction_count: usize,
    pub unresolved_count: usize,
    pub critical_count: usize,
}

/// The simulation, decision-fusion, and adaptive-memory core.
///
/// Cheap to clone: clones share the same state container, timeline
/// scheduler, and event bus. All mutation funnels through these
/// operations; the presentation layer polls the snapshot methods or
/// subscribes to the event bus.
#[derive(Clone)]
pub struct Engine {
    state: Arc<RwLock<EngineState>>,
    timeline: Arc<Mutex<Scheduler>>,
    events: EventBus,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let memory = match config.memory_slot {
            Some(slot) => MemoryStore::open(slot),
            None => MemoryStore::in_memory(),
        };

        let mut window = TelemetryWindow::new(MAX_TELEMETRY_POINTS);
        for point in seed_backlog(SEED_TELEMETRY_POINTS, &mut rng) {
            window.push(point);
        }

        let target_sensor = SENSOR_IDS
            .choose(&mut rng)
            .expect("sensor set is non-empty")
            .to_string();

        let state = EngineState {
            phase: SimulationPhase::Normal,
            status: SystemStatus::Normal,
            target_sensor,
            alert_pulse: false,
            simulation_running: false,
            wall_clock: Local::now().format("%H:%M:%S").to_string(),
            tick: SEED_TELEMETRY_POINTS as u64,
            window,
            ledger: IncidentLedger::seeded(MAX_INCIDENTS),
            memory,
            classifier: None,
            rng,
        };

        Self {
            state: Arc::new(RwLock::new(state)),
            timeline: Arc::new(Mutex::new(Scheduler::new())),
            events: EventBus::new(),
        }
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    // ------------------------------------------------------------------
    // Periodic ticks
    // ------------------------------------------------------------------

    /// Generate and append one telemetry point under the active phase.
    pub fn telemetry_tick(&self) {
        let mut st = self.state.write();
        let step = st.tick;
        let phase = st.phase;
        st.tick += 1;

        let point = generate(step, phase, &mut st.rng);
        st.window.push(point);
    }

    /// Refresh the display-only wall clock.
    pub fn clock_tick(&self) {
        let mut st = self.state.write();
        st.wall_clock = Local::now().format("%H:%M:%S").to_string();
    }

    /// One stochastic background roll: maybe a false positive routed
    /// through the memory store, maybe a fallback activation, maybe
    /// nothing.
    pub fn background_tick(&self) {
        let (recorded, save) = {
            let mut st = self.state.write();
            match background::roll(&mut st.rng) {
                Some(BackgroundEvent::FalsePositive {
                    sensor_id,
                    pattern,
                    mitigation_seconds,
                }) => {
                    let outcome = st.memory.apply(&pattern);
                    st.ledger.append(Incident::record(
                        sensor_id,
                        format!("False prediction on {} channel.", pattern.label.to_lowercase()),
                        PredictionType::FalsePositive,
                        Severity::Medium,
                        outcome.countermeasure,
                        outcome.action,
                        IncidentStatus::Resolved,
                        mitigation_seconds,
                    ));
                    (true, st.memory.save_job())
                }
                Some(BackgroundEvent::FallbackActivation {
                    sensor_id,
                    mitigation_seconds,
                }) => {
                    st.ledger.append(
                        Incident::record(
                            sensor_id,
                            "Primary confidence dip detected. LSTM fallback engaged for redundancy.",
                            PredictionType::Threat,
                            Severity::Low,
                            "Fallback channel activated and synchronized with transformer output.",
                            MemoryAction::NotApplicable,
                            IncidentStatus::Mitigated,
                            mitigation_seconds,
                        )
                        .with_fallback(),
                    );
                    (true, None)
                }
                None => (false, None),
            }
        };

        if let Some(job) = save {
            job.dispatch();
        }
        if recorded {
            self.events.emit(EngineEvent::IncidentRecorded);
        }
    }

    // ------------------------------------------------------------------
    // Operator commands
    // ------------------------------------------------------------------

    /// Start (or restart) the attack simulation timeline.
    ///
    /// Always cancels outstanding phase transitions first, so re-issuing
    /// the command restarts from phase 1 with a fresh target and no
    /// orphaned timers.
    pub fn start_attack_simulation(&self) {
        let mut timeline = self.timeline.lock();
        timeline.cancel_all();

        let target = {
            let mut st = self.state.write();
            let target = SENSOR_IDS
                .choose(&mut st.rng)
                .expect("sensor set is non-empty")
                .to_string();
            st.target_sensor = target.clone();
            st.phase = SimulationPhase::Phase1;
            st.status = SystemStatus::Suspicious;
            st.alert_pulse = false;
            st.simulation_running = true;
            target
        };

        log::info!("Attack simulation started, target sensor {}", target);
        self.events.emit(EngineEvent::PhaseChanged {
            phase: SimulationPhase::Phase1,
            status: SystemStatus::Suspicious,
        });

        let engine = self.clone();
        timeline.register(tokio::spawn(async move {
            sleep(PHASE_TWO_DELAY).await;
            engine.enter_phase_two();
        }));

        let engine = self.clone();
        timeline.register(tokio::spawn(async move {
            sleep(PHASE_THREE_DELAY).await;
            engine.enter_phase_three();
        }));
    }

    /// Force the system back to normal, canceling pending transitions.
    pub fn reset_system(&self) {
        self.timeline.lock().cancel_all();

        let target = {
            let mut st = self.state.write();
            st.phase = SimulationPhase::Normal;
            st.status = SystemStatus::Normal;
            st.alert_pulse = false;
            st.simulation_running = false;
            st.target_sensor.clone()
        };

        log::info!("System reset, sensor {} stabilized", target);
        self.events.emit(EngineEvent::PhaseChanged {
            phase: SimulationPhase::Normal,
            status: SystemStatus::Normal,
        });
        self.events
            .emit_toast(ToastKind::Info, "Threat contained. System stabilized.");

        {
            let mut st = self.state.write();
            st.ledger.append(Incident::record(
                &target,
                "Threat contained. System stabilized.",
                PredictionType::Threat,
                Severity::Low,
                "Restored nominal telemetry controls and baseline watchdog profile.",
                MemoryAction::NotApplicable,
                IncidentStatus::Closed,
                24,
            ));
        }
        self.events.emit(EngineEvent::IncidentRecorded);
    }

    /// Cancel every outstanding timer ahead of process teardown.
    pub fn shutdown(&self) {
        let mut timeline = self.timeline.lock();
        let pending = timeline.pending();
        timeline.cancel_all();
        log::info!("Engine timers canceled ({} pending)", pending);
    }

    // ------------------------------------------------------------------
    // Deferred phase transitions (fired by the timeline scheduler)
    // ------------------------------------------------------------------

    pub(crate) fn enter_phase_two(&self) {
        let target = {
            let mut st = self.state.write();
            st.phase = SimulationPhase::Phase2;
            st.status = SystemStatus::ActiveAttack;
            st.alert_pulse = true;
            let target = st.target_sensor.clone();

            st.ledger.append(Incident::record(
                &target,
                "Critical anomaly burst detected during coordinated attack escalation.",
                PredictionType::Threat,
                Severity::Critical,
                "Attack signature isolation and emergency cross-correlation initiated.",
                MemoryAction::NotApplicable,
                IncidentStatus::Investigating,
                59,
            ));
            target
        };

        log::warn!("Phase 2 escalation on sensor {}", target);
        self.events.emit(EngineEvent::PhaseChanged {
            phase: SimulationPhase::Phase2,
            status: SystemStatus::ActiveAttack,
        });
        self.events.emit(EngineEvent::AlertPulse { active: true });
        self.events.emit_toast(
            ToastKind::Critical,
            format!("Critical anomaly detected in sensor {}", target),
        );
        self.events.emit(EngineEvent::IncidentRecorded);

        // Transient pulse, cleared on its own timer
        let engine = self.clone();
        self.timeline.lock().register(tokio::spawn(async move {
            sleep(ALERT_PULSE_DURATION).await;
            engine.clear_alert_pulse();
        }));
    }

    pub(crate) fn enter_phase_three(&self) {
        let (target, save) = {
            let mut st = self.state.write();
            st.phase = SimulationPhase::Phase3;
            st.status = SystemStatus::ActiveAttack;
            let target = st.target_sensor.clone();

            // Phase 3 is the containment step: this is where a reusable
            // remediation gets committed to (or recalled from) memory.
            let outcome = st.memory.apply(&COORDINATED_MANIPULATION);
            st.ledger.append(Incident::record(
                &target,
                "Detected coordinated manipulation of flow-pressure correlation.",
                PredictionType::Threat,
                Severity::Critical,
                outcome.countermeasure,
                outcome.action,
                IncidentStatus::Investigating,
                72,
            ));
            (target, st.memory.save_job())
        };

        if let Some(job) = save {
            job.dispatch();
        }

        log::warn!("Phase 3 containment engaged on sensor {}", target);
        self.events.emit(EngineEvent::PhaseChanged {
            phase: SimulationPhase::Phase3,
            status: SystemStatus::ActiveAttack,
        });
        self.events.emit(EngineEvent::IncidentRecorded);
    }

    fn clear_alert_pulse(&self) {
        self.state.write().alert_pulse = false;
        self.events.emit(EngineEvent::AlertPulse { active: false });
    }

    // ------------------------------------------------------------------
    // Classifier fusion
    // ------------------------------------------------------------------

    /// Trailing window for one classifier request, once enough points
    /// have accumulated.
    pub fn classifier_window(&self) -> Option<Vec<[f64; 3]>> {
        self.state.read().window.trailing_triples(CLASSIFIER_WINDOW)
    }

    /// Fuse an arrived classifier decision into the displayed status.
    /// The simulation phase is never touched; responses apply in
    /// arrival order, last one wins.
    pub fn apply_classifier_result(&self, result: ClassifierResult) {
        let status = fuse_decision(result.decision);
        {
            let mut st = self.state.write();
            st.classifier = Some(result);
            st.status = status;
        }
        self.events.emit(EngineEvent::StatusChanged { status });
    }

    // ------------------------------------------------------------------
    // Read-only snapshots
    // ------------------------------------------------------------------

    pub fn status_snapshot(&self) -> StatusSnapshot {
        let st = self.state.read();
        let briefing = briefing::for_phase(st.phase).clone();
        let threat_confidence = st
            .classifier
            .map(|c| c.risk_score)
            .unwrap_or(briefing.confidence as f64);

        let false_prediction_count = st
            .ledger
            .iter()
            .filter(|inc| inc.prediction_type == PredictionType::FalsePositive)
            .count();
        let unresolved_count = st
            .ledger
            .iter()
            .filter(|inc| {
                matches!(inc.status, IncidentStatus::Investigating | IncidentStatus::Open)
            })
            .count();
        let critical_count = st
            .ledger
            .iter()
            .filter(|inc| inc.severity == Severity::Critical)
            .count();

        StatusSnapshot {
            phase: st.phase,
            status: st.status,
            briefing,
            target_sensor: st.target_sensor.clone(),
            alert_pulse: st.alert_pulse,
            simulation_running: st.simulation_running,
            wall_clock: st.wall_clock.clone(),
            classifier: st.classifier,
            threat_confidence,
            false_prediction_count,
            unresolved_count,
            critical_count,
        }
    }

    pub fn telemetry_snapshot(&self) -> Vec<TelemetryPoint> {
        self.state.read().window.snapshot()
    }

    pub fn ledger_snapshot(&self) -> Vec<Incident> {
        self.state.read().ledger.snapshot()
    }

    /// Incidents relevant to the model-validation view.
    pub fn validation_snapshot(&self) -> Vec<Incident> {
        self.state.read().ledger.validation_view()
    }

    /// Learned countermeasures, most recently used first.
    pub fn memory_snapshot(&self) -> Vec<MemoryEntry> {
        self.state.read().memory.snapshot()
    }

    /// Recomputed fault metrics over the current ledger and memory.
    pub fn metrics(&self) -> FaultMetrics {
        let st = self.state.read();
        metrics::compute(&st.ledger.snapshot(), st.memory.len())
    }
}
