use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::phase::TaxiPhase;

/// Mutable physical state. Every vector has `World::track_dims()` entries
/// except `comm`, which has `World::dim_c`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    pub comm: Vec<f64>,
}

/// Schedule data carried onto the aircraft in discrete-phase mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightInfo {
    pub flight_id: String,
    pub origin: String,
    pub duration_hours: f64,
    pub depart_time: NaiveTime,
}

/// One aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub collide: bool,
    pub silent: bool,
    pub movable: bool,
    /// Collision radius
    pub size: f64,
    pub color: [f64; 3],
    pub state: AgentState,
    /// Discrete-phase mode only
    pub phase: Option<TaxiPhase>,
    /// Discrete-phase mode only
    pub flight: Option<FlightInfo>,
}

impl Agent {
    pub fn position(&self) -> &[f64] {
        &self.state.position
    }

    pub fn velocity(&self) -> &[f64] {
        &self.state.velocity
    }

    pub fn comm(&self) -> &[f64] {
        &self.state.comm
    }
}

/// Which half of an airport a landmark stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkSlot {
    /// `-1`, origin side, referenced at takeoff
    Departure,
    /// `-2`, destination side, referenced at landing
    Arrival,
}

impl LandmarkSlot {
    pub fn for_registry_index(index: usize) -> Self {
        if index % 2 == 0 {
            LandmarkSlot::Departure
        } else {
            LandmarkSlot::Arrival
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            LandmarkSlot::Departure => "-1",
            LandmarkSlot::Arrival => "-2",
        }
    }

    /// Phase whose track coordinate pins this landmark.
    pub fn reference_phase(self) -> TaxiPhase {
        match self {
            LandmarkSlot::Departure => TaxiPhase::Takeoff,
            LandmarkSlot::Arrival => TaxiPhase::Landing,
        }
    }
}

/// Fixed track reference of a landmark (discrete-phase mode only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkReference {
    pub position: Vec<f64>,
    /// Reserved. Initialized to false and never read here.
    pub occupied: bool,
}

/// Static, non-colliding reference point for one side of an airport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub name: String,
    pub airport: String,
    pub slot: LandmarkSlot,
    pub collide: bool,
    pub movable: bool,
    pub color: [f64; 3],
    pub reference: Option<LandmarkReference>,
}

impl Landmark {
    pub fn position(&self) -> Option<&[f64]> {
        self.reference.as_ref().map(|r| r.position.as_slice())
    }
}
