//! Airport Scenario CLI Library
//!
//! Manifest file loading (JSON / CSV) and a JSON report of a freshly built
//! and reset world: entities, per-agent rewards and observations.

use std::fs::File;
use std::path::Path;

use airport_core::{
    AirportScenario, FlightManifest, Scenario, ScenarioConfig, ScenarioError, ScenarioMode,
    TaxiPhase,
};
use anyhow::{Context, Result};
use serde::Serialize;

/// Load a manifest by extension: `.csv` is headerless CSV, anything else JSON.
pub fn load_manifest(path: &Path) -> Result<FlightManifest> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let manifest = if is_csv {
        let file = File::open(path)
            .with_context(|| format!("Failed to open CSV manifest: {}", path.display()))?;
        FlightManifest::from_csv_reader(file)
    } else {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read JSON manifest: {}", path.display()))?;
        FlightManifest::from_json_str(&json)
    };

    manifest.with_context(|| format!("Invalid flight manifest: {}", path.display()))
}

/// Config file if given, otherwise the preset for `mode`. `seed` wins over both.
pub fn resolve_config(
    path: Option<&Path>,
    mode: ScenarioMode,
    seed: Option<u64>,
) -> Result<ScenarioConfig> {
    let mut config = match path {
        Some(path) => ScenarioConfig::load(path)
            .with_context(|| format!("Failed to load scenario config: {}", path.display()))?,
        None => ScenarioConfig::preset(mode),
    };
    if let Some(seed) = seed {
        config.seed = Some(seed);
    }
    Ok(config)
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentReport {
    pub name: String,
    pub phase: Option<TaxiPhase>,
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    pub reward: f64,
    pub coverage: f64,
    pub collision: f64,
    pub observation: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LandmarkReport {
    pub name: String,
    pub airport: String,
    pub position: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub mode: ScenarioMode,
    pub dim_c: usize,
    pub dim_p: usize,
    pub observation_len: usize,
    pub agents: Vec<AgentReport>,
    pub landmarks: Vec<LandmarkReport>,
}

/// Build a world for `manifest`, reset it, and score every agent once.
pub fn build_report(config: ScenarioConfig, manifest: &FlightManifest) -> Result<ScenarioReport> {
    let mut scenario = AirportScenario::new(config)?;
    let world = scenario.make_world(manifest);

    let agents = world
        .agents
        .iter()
        .enumerate()
        .map(|(slot, agent)| -> Result<AgentReport> {
            let breakdown = scenario.reward_breakdown(slot, &world)?;
            Ok(AgentReport {
                name: agent.name.clone(),
                phase: agent.phase,
                position: agent.position().to_vec(),
                velocity: agent.velocity().to_vec(),
                reward: breakdown.total(),
                coverage: breakdown.coverage,
                collision: breakdown.collision,
                observation: scenario.observation(slot, &world)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let landmarks = world
        .landmarks
        .iter()
        .map(|l| LandmarkReport {
            name: l.name.clone(),
            airport: l.airport.clone(),
            position: l.position().map(<[f64]>::to_vec),
        })
        .collect();

    tracing::info!(
        agents = world.agents.len(),
        landmarks = world.landmarks.len(),
        "report built"
    );

    Ok(ScenarioReport {
        mode: scenario.config().mode,
        dim_c: world.dim_c,
        dim_p: world.dim_p,
        observation_len: scenario.observation_len(&world),
        agents,
        landmarks,
    })
}

/// Process exit status for a failed command: 2 when the manifest or config
/// is at fault, 1 for anything else.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let input_error = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<ScenarioError>())
        .any(ScenarioError::is_input_error);
    if input_error {
        2
    } else {
        1
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides `default_level`.
pub fn init_logging(default_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed (tests, embedding harness)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
