//! Observation - Per-agent flat vector
//!
//! ## Flat Vector Layout
//! ```text
//! [velocity]                 track_dims
//! [position]                 track_dims
//! [landmark - position] * L  track_dims each, referenced landmarks only
//! [other - position]  * A-1  track_dims each, world order, self skipped
//! [other comm]        * A-1  dim_c each, same order
//! ```
//!
//! Landmarks only carry a reference in discrete-phase mode, so `L` is zero
//! in continuous mode.

use crate::error::Result;
use crate::world::World;

/// Observation builder trait
pub trait ObservationBuilder {
    /// Observation for the agent in slot `agent` of the current world state
    fn build(&self, agent: usize, world: &World) -> Result<Vec<f64>>;

    /// Length of `build` output for this world shape
    fn len(&self, world: &World) -> usize;
}

/// Builder for the flat relative-position observation
#[derive(Debug, Clone, Copy, Default)]
pub struct ObservationAssembler;

impl ObservationBuilder for ObservationAssembler {
    fn build(&self, index: usize, world: &World) -> Result<Vec<f64>> {
        let agent = world.agent(index)?;
        let own = agent.position();
        let relative = |target: &[f64]| -> Vec<f64> {
            target.iter().zip(own).map(|(t, o)| t - o).collect()
        };

        let mut v = Vec::with_capacity(self.len(world));
        v.extend_from_slice(agent.velocity());
        v.extend_from_slice(own);

        for (_, target) in world.referenced_landmarks() {
            v.extend(relative(target));
        }
        for other in world.others(index) {
            v.extend(relative(other.position()));
        }
        for other in world.others(index) {
            v.extend_from_slice(other.comm());
        }

        tracing::trace!(agent = %agent.name, len = v.len(), "observation");
        Ok(v)
    }

    fn len(&self, world: &World) -> usize {
        let pos = world.track_dims();
        let landmarks = world.referenced_landmarks().count();
        let others = world.agents.len().saturating_sub(1);
        pos + pos + landmarks * pos + others * pos + others * world.dim_c
    }
}
