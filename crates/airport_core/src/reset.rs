//! Reset Policy - Per-episode initial state
//!
//! Sole writer of initial values. Discrete-phase mode is fully fixed
//! (gate, constant velocity); continuous mode draws every coordinate from
//! a uniform interval using a seedable ChaCha stream.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{ScenarioConfig, ScenarioMode};
use crate::error::Result;
use crate::phase::TaxiPhase;
use crate::world::World;

#[derive(Debug, Clone)]
pub struct ResetPolicy {
    mode: ScenarioMode,
    gate_velocity: f64,
    spawn_range: [f64; 2],
    agent_color: [f64; 3],
    landmark_color: [f64; 3],
    rng: ChaCha8Rng,
}

impl ResetPolicy {
    /// Fails with `InvalidConfig` when `config` does not validate; an
    /// empty spawn interval cannot be sampled.
    pub fn from_config(config: &ScenarioConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(ResetPolicy {
            mode: config.mode,
            gate_velocity: config.gate_velocity,
            spawn_range: config.spawn_range,
            agent_color: config.agent_color,
            landmark_color: config.landmark_color,
            rng,
        })
    }

    /// Restart the random stream, e.g. to replay a sequence of episodes.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    pub fn reset(&mut self, world: &mut World) {
        let dims = world.track_dims();
        let dim_c = world.dim_c;
        let [low, high] = self.spawn_range;

        for agent in &mut world.agents {
            agent.color = self.agent_color;
            agent.state.comm = vec![0.0; dim_c];

            match self.mode {
                ScenarioMode::DiscretePhase => {
                    // Gate sits at the track origin
                    agent.state.position = vec![TaxiPhase::Gate.encode(); dims];
                    agent.state.velocity = vec![self.gate_velocity; dims];
                    agent.phase = Some(TaxiPhase::Gate);
                }
                ScenarioMode::Continuous => {
                    agent.state.position =
                        (0..dims).map(|_| self.rng.gen_range(low..=high)).collect();
                    agent.state.velocity = vec![0.0; dims];
                }
            }
        }

        for landmark in &mut world.landmarks {
            landmark.color = self.landmark_color;
        }

        tracing::debug!(
            mode = ?self.mode,
            agents = world.agents.len(),
            landmarks = world.landmarks.len(),
            "world reset"
        );
    }
}
