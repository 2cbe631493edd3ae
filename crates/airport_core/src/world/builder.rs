//! WorldBuilder - Manifest to agents and landmarks
//!
//! One aircraft per flight record, one landmark per airport registry entry.
//! The registry lists each airport twice, so pair `k` of landmarks is
//! `<airport k>-1`, `<airport k>-2`.

use super::entity::{Agent, AgentState, FlightInfo, Landmark, LandmarkReference, LandmarkSlot};
use super::World;
use crate::config::ScenarioConfig;
use crate::error::Result;
use crate::manifest::{FlightManifest, FlightRecord};
use crate::reset::ResetPolicy;

#[derive(Debug, Clone)]
pub struct WorldBuilder {
    config: ScenarioConfig,
}

impl WorldBuilder {
    pub fn new(config: &ScenarioConfig) -> Result<Self> {
        config.validate()?;
        Ok(WorldBuilder {
            config: config.clone(),
        })
    }

    pub fn build(&self, manifest: &FlightManifest, reset: &mut ResetPolicy) -> World {
        self.build_from_parts(manifest.flights(), manifest.airport_registry(), reset)
    }

    /// Build from records and a doubled airport registry, then reset.
    pub fn build_from_parts(
        &self,
        flights: &[FlightRecord],
        registry: &[String],
        reset: &mut ResetPolicy,
    ) -> World {
        let mut world = World::new(self.config.dim_c, self.config.dim_p);

        world.agents = flights
            .iter()
            .enumerate()
            .map(|(slot, flight)| self.make_agent(slot, flight))
            .collect();

        let dims = world.track_dims();
        world.landmarks = registry
            .iter()
            .enumerate()
            .map(|(i, _)| {
                // Both entries of a pair carry the same code; tag with the pair's lead.
                let airport = &registry[i - i % 2];
                self.make_landmark(airport, LandmarkSlot::for_registry_index(i), dims)
            })
            .collect();

        tracing::debug!(
            mode = ?self.config.mode,
            agents = world.agents.len(),
            landmarks = world.landmarks.len(),
            "world built"
        );

        reset.reset(&mut world);
        world
    }

    fn make_agent(&self, slot: usize, flight: &FlightRecord) -> Agent {
        let discrete = self.config.mode.is_discrete();

        let name = if discrete {
            format!("Aircraft {}", flight.flight_id)
        } else {
            format!("Aircraft {}", slot)
        };

        let flight_info = discrete.then(|| FlightInfo {
            flight_id: flight.flight_id.clone(),
            origin: flight.origin.clone(),
            duration_hours: flight.duration_hours,
            depart_time: flight.depart_time,
        });

        Agent {
            name,
            collide: self.config.collide,
            silent: self.config.silent,
            movable: true,
            size: self.config.agent_size,
            color: self.config.agent_color,
            state: AgentState::default(),
            phase: None,
            flight: flight_info,
        }
    }

    fn make_landmark(&self, airport: &str, slot: LandmarkSlot, dims: usize) -> Landmark {
        let reference = self.config.mode.is_discrete().then(|| LandmarkReference {
            position: vec![slot.reference_phase().encode(); dims],
            occupied: false,
        });

        Landmark {
            name: format!("{}{}", airport, slot.suffix()),
            airport: airport.to_string(),
            slot,
            collide: false,
            movable: false,
            color: self.config.landmark_color,
            reference,
        }
    }
}
