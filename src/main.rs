//! HydroVigil Core - Main Entry Point
//!
//! Demonstration console for anomaly detection on a water-infrastructure
//! sensor network: synthetic telemetry, a phased attack simulation,
//! external classifier fusion, and an adaptive countermeasure memory.

mod logic;
pub mod constants;

use std::sync::Arc;

use constants::{BACKGROUND_TICK, CLOCK_TICK, TELEMETRY_TICK};
use logic::classifier::{self, ClassifierClient};
use logic::events::EngineEvent;
use logic::simulation::{Engine, EngineConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!(
        "Starting {} core v{}...",
        constants::APP_NAME,
        constants::APP_VERSION
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    runtime.block_on(run());
}

async fn run() {
    let engine = Engine::new(EngineConfig::default());
    let client = Arc::new(ClassifierClient::new(constants::get_classifier_url()));
    log::info!("Classifier endpoint: {}", client.url());

    let mut loops = Vec::new();

    // Telemetry tick: generate one point, then fire a classifier
    // request whenever the window qualifies. Requests are not awaited
    // here; responses apply whenever they arrive.
    {
        let engine = engine.clone();
        let client = client.clone();
        loops.push(tokio::spawn(async move {
            let mut tick = tokio::time::interval(TELEMETRY_TICK);
            loop {
                tick.tick().await;
                engine.telemetry_tick();
                if let Some(window) = engine.classifier_window() {
                    let engine = engine.clone();
                    let client = client.clone();
                    tokio::spawn(async move {
                        classifier::run_once(&client, &engine, window).await;
                    });
                }
            }
        }));
    }

    // Display clock
    {
        let engine = engine.clone();
        loops.push(tokio::spawn(async move {
            let mut tick = tokio::time::interval(CLOCK_TICK);
            loop {
                tick.tick().await;
                engine.clock_tick();
            }
        }));
    }

    // Stochastic background incidents
    {
        let engine = engine.clone();
        loops.push(tokio::spawn(async move {
            let mut tick = tokio::time::interval(BACKGROUND_TICK);
            tick.tick().await; // skip the immediate first fire
            loop {
                tick.tick().await;
                engine.background_tick();
            }
        }));
    }

    // Event subscriber standing in for the presentation layer
    {
        let mut events = engine.events().subscribe();
        loops.push(tokio::spawn(async move {
            while let Ok(event) = events.recv().await {
                match event {
                    EngineEvent::Toast { kind, message } => {
                        log::info!("[toast:{:?}] {}", kind, message)
                    }
                    EngineEvent::PhaseChanged { phase, status } => {
                        log::info!("[phase] {:?} / {:?}", phase, status)
                    }
                    EngineEvent::StatusChanged { status } => {
                        log::info!("[classifier] status override -> {:?}", status)
                    }
                    EngineEvent::AlertPulse { active } => log::debug!("[pulse] {}", active),
                    EngineEvent::IncidentRecorded => log::debug!("[ledger] incident recorded"),
                }
            }
        }));
    }

    // Scripted demo: run one full attack timeline, then stabilize.
    tokio::time::sleep(std::time::Duration::from_secs(3)).await;
    engine.start_attack_simulation();
    tokio::time::sleep(std::time::Duration::from_secs(8)).await;

    let snapshot = engine.status_snapshot();
    log::info!(
        "Post-attack snapshot: phase {:?}, status {:?}, target {}, threat confidence {:.0}%",
        snapshot.phase,
        snapshot.status,
        snapshot.target_sensor,
        snapshot.threat_confidence
    );

    engine.reset_system();

    let metrics = engine.metrics();
    log::info!(
        "Fault metrics: false rate {:.1}%, recovery {:.1}%, reuse hits {:.1}%, \
         fallbacks {}, memory entries {}, mean mitigation {:.1}s",
        metrics.false_prediction_rate,
        metrics.recovery_success_rate,
        metrics.countermeasure_reuse_hit_rate,
        metrics.fallback_activations,
        metrics.memory_entries,
        metrics.mean_mitigation_seconds
    );

    for entry in engine.memory_snapshot() {
        log::info!(
            "[memory] {} (reuse count {}): {}",
            entry.label,
            entry.use_count,
            entry.countermeasure
        );
    }
    log::info!(
        "Validation view holds {} entr(ies)",
        engine.validation_snapshot().len()
    );
    for report in logic::metrics::reports::all() {
        log::info!(
            "[model report] {}: accuracy {:.2}, attack F1 {:.2}, attack recall {:.2}",
            report.name,
            report.accuracy,
            report.attack_f1,
            report.attack_recall
        );
    }

    log::info!("Console running. Press Ctrl-C to exit.");
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Signal handler failed: {}", e);
    }

    engine.shutdown();
    for handle in loops {
        handle.abort();
    }
    log::info!("Shutdown complete");
}
