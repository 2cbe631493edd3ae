//! World - Per-episode container of aircraft and landmarks
//!
//! The scenario creates the world and writes initial values on reset.
//! Stepping (position/velocity integration) belongs to the external driver.

mod builder;
mod entity;

pub use builder::WorldBuilder;
pub use entity::{Agent, AgentState, FlightInfo, Landmark, LandmarkReference, LandmarkSlot};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScenarioError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub agents: Vec<Agent>,
    pub landmarks: Vec<Landmark>,
    /// Communication channel width
    pub dim_c: usize,
    /// Position space dimensionality (0 = collapsed line)
    pub dim_p: usize,
    /// Reward is shared across agents
    pub collaborative: bool,
}

impl World {
    pub fn new(dim_c: usize, dim_p: usize) -> Self {
        World {
            agents: Vec::new(),
            landmarks: Vec::new(),
            dim_c,
            dim_p,
            collaborative: true,
        }
    }

    /// Entries per position/velocity vector.
    pub fn track_dims(&self) -> usize {
        self.dim_p.max(1)
    }

    pub fn agent(&self, index: usize) -> Result<&Agent> {
        self.agents.get(index).ok_or(ScenarioError::AgentOutOfRange {
            index,
            len: self.agents.len(),
        })
    }

    pub fn landmark(&self, name: &str) -> Option<&Landmark> {
        self.landmarks.iter().find(|l| l.name == name)
    }

    /// Landmarks pinned to a track position (all of them in discrete-phase mode).
    pub fn referenced_landmarks(&self) -> impl Iterator<Item = (&Landmark, &[f64])> {
        self.landmarks.iter().filter_map(|l| l.position().map(|p| (l, p)))
    }

    /// Every agent except the one in slot `index`, in world order. Identity
    /// is the slot, so copies of an agent elsewhere in the list still count.
    pub fn others(&self, index: usize) -> impl Iterator<Item = &Agent> {
        self.agents
            .iter()
            .enumerate()
            .filter(move |(slot, _)| *slot != index)
            .map(|(_, agent)| agent)
    }
}
