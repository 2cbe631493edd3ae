use serde::Deserialize;

use super::{ScenarioConfig, ScenarioMode};
use crate::error::Result;

/// Partial config as read from a file. Unset fields fall back to the
/// preset of the chosen `mode` (discrete-phase when absent).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub mode: Option<ScenarioMode>,
    pub dim_c: Option<usize>,
    pub dim_p: Option<usize>,
    pub agent_size: Option<f64>,
    pub collide: Option<bool>,
    pub silent: Option<bool>,
    pub gate_velocity: Option<f64>,
    pub spawn_range: Option<[f64; 2]>,
    pub agent_color: Option<[f64; 3]>,
    pub landmark_color: Option<[f64; 3]>,
    pub collision_penalty: Option<f64>,
    pub count_self_collision: Option<bool>,
    pub seed: Option<u64>,
}

impl ConfigOverrides {
    pub fn apply(self, base: &mut ScenarioConfig) {
        if let Some(dim_c) = self.dim_c {
            base.dim_c = dim_c;
        }
        if let Some(dim_p) = self.dim_p {
            base.dim_p = dim_p;
        }
        if let Some(agent_size) = self.agent_size {
            base.agent_size = agent_size;
        }
        if let Some(collide) = self.collide {
            base.collide = collide;
        }
        if let Some(silent) = self.silent {
            base.silent = silent;
        }
        if let Some(gate_velocity) = self.gate_velocity {
            base.gate_velocity = gate_velocity;
        }
        if let Some(spawn_range) = self.spawn_range {
            base.spawn_range = spawn_range;
        }
        if let Some(agent_color) = self.agent_color {
            base.agent_color = agent_color;
        }
        if let Some(landmark_color) = self.landmark_color {
            base.landmark_color = landmark_color;
        }
        if let Some(collision_penalty) = self.collision_penalty {
            base.collision_penalty = collision_penalty;
        }
        if let Some(count_self_collision) = self.count_self_collision {
            base.count_self_collision = count_self_collision;
        }
        if self.seed.is_some() {
            base.seed = self.seed;
        }
    }

    /// Preset for the requested mode with these overrides applied, validated.
    pub fn resolve(self) -> Result<ScenarioConfig> {
        let mut config = ScenarioConfig::preset(self.mode.unwrap_or(ScenarioMode::DiscretePhase));
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_overrides_give_discrete_preset() {
        let cfg = ConfigOverrides::default().resolve().unwrap();
        assert_eq!(cfg, ScenarioConfig::discrete());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let parsed: std::result::Result<ConfigOverrides, _> =
            serde_json::from_str(r#"{"runway_count": 2}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let overrides = ConfigOverrides {
            mode: Some(ScenarioMode::Continuous),
            dim_p: Some(0),
            ..Default::default()
        };
        assert!(overrides.resolve().is_err());
    }
}
