//! # Scenario Configuration
//!
//! One scenario, two operating variants. The mode flag selects naming,
//! start condition and landmark references; everything else is a tunable
//! field so a variant can be adjusted without touching code.
//!
//! ## Usage
//! ```rust
//! use airport_core::config::{ScenarioConfig, ScenarioMode};
//!
//! let discrete = ScenarioConfig::discrete();
//! let continuous = ScenarioConfig::continuous().with_seed(7);
//! assert_eq!(discrete.mode, ScenarioMode::DiscretePhase);
//! assert!(!continuous.collide);
//! ```

mod overrides;

pub use overrides::ConfigOverrides;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScenarioError};

/// Agent radius used for collision tests
pub const DEFAULT_AGENT_SIZE: f64 = 0.15;
/// Velocity every aircraft leaves the gate with in discrete-phase mode
pub const DEFAULT_GATE_VELOCITY: f64 = 0.005;
pub const DEFAULT_AGENT_COLOR: [f64; 3] = [0.35, 0.35, 0.85];
pub const DEFAULT_LANDMARK_COLOR: [f64; 3] = [0.25, 0.25, 0.25];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioMode {
    /// Symbolic phases on a fixed track, agents start at the gate
    DiscretePhase,
    /// Random continuous start, communicating agents
    Continuous,
}

impl ScenarioMode {
    pub fn is_discrete(self) -> bool {
        matches!(self, ScenarioMode::DiscretePhase)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub mode: ScenarioMode,
    /// Communication channel width
    pub dim_c: usize,
    /// Position space dimensionality (0 = collapsed line)
    pub dim_p: usize,
    pub agent_size: f64,
    pub collide: bool,
    pub silent: bool,
    /// Discrete mode start velocity
    pub gate_velocity: f64,
    /// Continuous mode uniform spawn interval, per dimension
    pub spawn_range: [f64; 2],
    pub agent_color: [f64; 3],
    pub landmark_color: [f64; 3],
    /// Penalty per colliding pair
    pub collision_penalty: f64,
    /// Count the agent against itself when scoring collisions.
    /// Reproduces the legacy reward scale; off by default.
    pub count_self_collision: bool,
    /// Reset RNG seed; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::discrete()
    }
}

impl ScenarioConfig {
    /// Gate start, fixed trajectory, collisions on, no communication.
    pub fn discrete() -> Self {
        ScenarioConfig {
            mode: ScenarioMode::DiscretePhase,
            dim_c: 1,
            dim_p: 0,
            agent_size: DEFAULT_AGENT_SIZE,
            collide: true,
            silent: true,
            gate_velocity: DEFAULT_GATE_VELOCITY,
            spawn_range: [-1.0, 1.0],
            agent_color: DEFAULT_AGENT_COLOR,
            landmark_color: DEFAULT_LANDMARK_COLOR,
            collision_penalty: 1.0,
            count_self_collision: false,
            seed: None,
        }
    }

    /// Random start, collisions off, agents communicate.
    pub fn continuous() -> Self {
        ScenarioConfig {
            mode: ScenarioMode::Continuous,
            dim_p: 1,
            collide: false,
            silent: false,
            ..Self::discrete()
        }
    }

    pub fn preset(mode: ScenarioMode) -> Self {
        match mode {
            ScenarioMode::DiscretePhase => Self::discrete(),
            ScenarioMode::Continuous => Self::continuous(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_comm_dim(mut self, dim_c: usize) -> Self {
        self.dim_c = dim_c;
        self
    }

    /// Length of every position/velocity vector. The collapsed line of
    /// discrete mode still stores one coordinate.
    pub fn track_dims(&self) -> usize {
        self.dim_p.max(1)
    }

    pub fn validate(&self) -> Result<()> {
        match self.mode {
            ScenarioMode::DiscretePhase if self.dim_p != 0 => {
                return Err(ScenarioError::InvalidConfig(format!(
                    "discrete_phase mode runs on the collapsed line (dim_p = 0), got dim_p = {}",
                    self.dim_p
                )));
            }
            ScenarioMode::Continuous if self.dim_p == 0 => {
                return Err(ScenarioError::InvalidConfig(
                    "continuous mode needs dim_p >= 1".to_string(),
                ));
            }
            _ => {}
        }
        if !(self.agent_size.is_finite() && self.agent_size > 0.0) {
            return Err(ScenarioError::InvalidConfig(format!(
                "agent_size must be positive, got {}",
                self.agent_size
            )));
        }
        if !(self.gate_velocity.is_finite() && self.gate_velocity > 0.0) {
            return Err(ScenarioError::InvalidConfig(format!(
                "gate_velocity must be positive, got {}",
                self.gate_velocity
            )));
        }
        let [low, high] = self.spawn_range;
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(ScenarioError::InvalidConfig(format!(
                "spawn_range must be an increasing finite interval, got [{}, {}]",
                low, high
            )));
        }
        if !(self.collision_penalty.is_finite() && self.collision_penalty >= 0.0) {
            return Err(ScenarioError::InvalidConfig(format!(
                "collision_penalty must be non-negative, got {}",
                self.collision_penalty
            )));
        }
        if self.count_self_collision {
            tracing::warn!(
                "count_self_collision enabled: colliding agents are also scored against themselves"
            );
        }
        Ok(())
    }

    /// Parse a JSON document of overrides on top of its mode's preset.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let overrides: ConfigOverrides = serde_json::from_str(json)?;
        overrides.resolve()
    }

    /// Parse a YAML document of overrides on top of its mode's preset.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let overrides: ConfigOverrides = serde_yaml::from_str(yaml)?;
        overrides.resolve()
    }

    /// Load by extension: `.json`, otherwise YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_yaml_str(&text)
        }
    }
}

// ========== Tests ==========
