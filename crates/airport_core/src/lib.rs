//! # airport_core - Multi-Agent Airport Taxi-Line Scenario
//!
//! Aircraft move along one abstract track shared by every airport:
//! gate, taxi-out, takeoff, landing, taxi-in, arrived. Each flight is an
//! agent, each airport contributes two landmarks.
//!
//! ## Features
//! - Flight manifest parsing (typed, JSON, CSV) with per-record validation
//! - World construction for discrete-phase and continuous modes from one config
//! - Deterministic reset with a seedable ChaCha stream
//! - Collaborative coverage reward and flat per-agent observations
//!
//! ## Usage
//! ```rust
//! use airport_core::{AirportScenario, FlightManifest, Scenario, ScenarioConfig};
//!
//! let manifest = FlightManifest::from_json_str(
//!     r#"[["UA91", "SFO", "SEA", 2.5, 1430], ["AA478", "LHR", "JFK", 7.5, 1930]]"#,
//! )?;
//! let mut scenario = AirportScenario::new(ScenarioConfig::discrete())?;
//! let world = scenario.make_world(&manifest);
//!
//! assert_eq!(world.landmarks.len(), 8);
//! let obs = scenario.observation(0, &world)?;
//! assert_eq!(obs.len(), scenario.observation_len(&world));
//! # Ok::<(), airport_core::ScenarioError>(())
//! ```

pub mod collision;
pub mod config;
pub mod error;
pub mod manifest;
pub mod observation;
pub mod phase;
pub mod reset;
pub mod reward;
pub mod scenario;
pub mod world;

pub use config::{ScenarioConfig, ScenarioMode};
pub use error::{Result, ScenarioError};
pub use manifest::{FlightManifest, FlightRecord};
pub use observation::{ObservationAssembler, ObservationBuilder};
pub use phase::TaxiPhase;
pub use reset::ResetPolicy;
pub use reward::{CoverageReward, RewardBreakdown, RewardFunction};
pub use scenario::{AirportScenario, Scenario};
pub use world::{Agent, Landmark, World, WorldBuilder};
