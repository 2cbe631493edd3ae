//! RewardFunction - Per-step shaping reward
//!
//! ## Components
//!
//! - `RewardFunction` trait: common interface for reward terms
//! - `CoverageReward`: collaborative landmark coverage minus collision penalty
//!
//! Coverage is shared: each landmark contributes minus the distance of the
//! *closest* aircraft, whoever that is. The collision term is personal and
//! only applies to agents with collisions enabled.

use serde::{Deserialize, Serialize};

use crate::collision::{collision_count, distance};
use crate::config::ScenarioConfig;
use crate::error::Result;
use crate::world::World;

/// Reward function trait. Implementations must be thread safe so a driver
/// can score agents in parallel.
pub trait RewardFunction: Send + Sync {
    /// Reward for the agent in slot `agent` of the current world state
    fn compute(&self, agent: usize, world: &World) -> Result<f64>;

    /// Sparse rewards are non-zero at most once per episode
    fn is_sparse(&self) -> bool {
        false
    }

    /// Name used in logs and reports
    fn name(&self) -> &str;
}

/// The two terms of a coverage reward, kept apart for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardBreakdown {
    /// Sum over landmarks of minus the nearest-agent distance
    pub coverage: f64,
    /// Number of colliding agents times the penalty, as a non-positive value
    pub collision: f64,
}

impl RewardBreakdown {
    pub fn total(&self) -> f64 {
        self.coverage + self.collision
    }
}

#[derive(Debug, Clone)]
pub struct CoverageReward {
    collision_penalty: f64,
    count_self_collision: bool,
}

impl Default for CoverageReward {
    fn default() -> Self {
        CoverageReward {
            collision_penalty: 1.0,
            count_self_collision: false,
        }
    }
}

impl CoverageReward {
    pub fn from_config(config: &ScenarioConfig) -> Self {
        CoverageReward {
            collision_penalty: config.collision_penalty,
            count_self_collision: config.count_self_collision,
        }
    }

    /// Legacy scale: the zero-distance self pair adds one penalty per colliding agent.
    pub fn with_self_collision(mut self, enabled: bool) -> Self {
        self.count_self_collision = enabled;
        self
    }

    pub fn breakdown(&self, index: usize, world: &World) -> Result<RewardBreakdown> {
        let agent = world.agent(index)?;
        let coverage = -world
            .referenced_landmarks()
            .filter_map(|(_, target)| {
                world
                    .agents
                    .iter()
                    .map(|a| distance(a.position(), target))
                    .min_by(f64::total_cmp)
            })
            .sum::<f64>();

        let collision = if agent.collide {
            let hits = collision_count(world, index, self.count_self_collision)?;
            -(hits as f64) * self.collision_penalty
        } else {
            0.0
        };

        tracing::trace!(agent = %agent.name, coverage, collision, "reward");
        Ok(RewardBreakdown {
            coverage,
            collision,
        })
    }
}

impl RewardFunction for CoverageReward {
    fn compute(&self, agent: usize, world: &World) -> Result<f64> {
        self.breakdown(agent, world).map(|b| b.total())
    }

    fn name(&self) -> &str {
        "coverage"
    }
}
