//! Scenario - Harness-facing contract
//!
//! Wires manifest parsing, world construction, reset, reward and
//! observation behind the four calls an environment harness makes.
//! Agents are addressed by their index in `World::agents`.

use crate::config::ScenarioConfig;
use crate::error::Result;
use crate::manifest::FlightManifest;
use crate::observation::{ObservationAssembler, ObservationBuilder};
use crate::reset::ResetPolicy;
use crate::reward::{CoverageReward, RewardBreakdown, RewardFunction};
use crate::world::{World, WorldBuilder};

pub trait Scenario {
    /// Build and reset a fresh world for the given flights
    fn make_world(&mut self, manifest: &FlightManifest) -> World;

    /// Write initial per-episode values into `world`
    fn reset_world(&mut self, world: &mut World);

    fn reward(&self, agent: usize, world: &World) -> Result<f64>;

    fn observation(&self, agent: usize, world: &World) -> Result<Vec<f64>>;
}

/// Airport taxi-line scenario, both modes.
#[derive(Debug, Clone)]
pub struct AirportScenario {
    config: ScenarioConfig,
    builder: WorldBuilder,
    reset: ResetPolicy,
    reward: CoverageReward,
    observer: ObservationAssembler,
}

impl AirportScenario {
    pub fn new(config: ScenarioConfig) -> Result<Self> {
        Ok(AirportScenario {
            builder: WorldBuilder::new(&config)?,
            reset: ResetPolicy::from_config(&config)?,
            reward: CoverageReward::from_config(&config),
            observer: ObservationAssembler,
            config,
        })
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    pub fn reseed(&mut self, seed: u64) {
        self.reset.reseed(seed);
    }

    pub fn reward_breakdown(&self, agent: usize, world: &World) -> Result<RewardBreakdown> {
        self.reward.breakdown(agent, world)
    }

    /// Rewards for every agent, in world order.
    pub fn rewards(&self, world: &World) -> Result<Vec<f64>> {
        (0..world.agents.len())
            .map(|agent| self.reward.compute(agent, world))
            .collect()
    }

    /// Observations for every agent, in world order.
    pub fn observations(&self, world: &World) -> Result<Vec<Vec<f64>>> {
        (0..world.agents.len())
            .map(|agent| self.observer.build(agent, world))
            .collect()
    }

    /// Observation length for the current world shape. Changes whenever
    /// agents or landmarks are added or removed.
    pub fn observation_len(&self, world: &World) -> usize {
        self.observer.len(world)
    }
}

impl Scenario for AirportScenario {
    fn make_world(&mut self, manifest: &FlightManifest) -> World {
        self.builder.build(manifest, &mut self.reset)
    }

    fn reset_world(&mut self, world: &mut World) {
        self.reset.reset(world);
    }

    fn reward(&self, agent: usize, world: &World) -> Result<f64> {
        self.reward.compute(agent, world)
    }

    fn observation(&self, agent: usize, world: &World) -> Result<Vec<f64>> {
        self.observer.build(agent, world)
    }
}
