//! Taxi Phase - Symbolic ground/flight stages
//!
//! Every airport is collapsed onto one shared line:
//!
//! ```text
//! gate ---- taxi-out ---- takeoff ---- landing ---- taxi-in ---- arrived
//!  0           1             2            3            4            5
//! ```
//!
//! The ordinal of a phase doubles as its coordinate on the track.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScenarioError};

/// Ground/flight stage of an aircraft in discrete-phase mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaxiPhase {
    Gate,
    TaxiOut,
    Takeoff,
    Landing,
    TaxiIn,
    Arrived,
}

impl TaxiPhase {
    /// All phases in track order.
    pub const ALL: [TaxiPhase; 6] = [
        TaxiPhase::Gate,
        TaxiPhase::TaxiOut,
        TaxiPhase::Takeoff,
        TaxiPhase::Landing,
        TaxiPhase::TaxiIn,
        TaxiPhase::Arrived,
    ];

    pub fn ordinal(self) -> u8 {
        match self {
            TaxiPhase::Gate => 0,
            TaxiPhase::TaxiOut => 1,
            TaxiPhase::Takeoff => 2,
            TaxiPhase::Landing => 3,
            TaxiPhase::TaxiIn => 4,
            TaxiPhase::Arrived => 5,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Result<Self> {
        Self::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or_else(|| ScenarioError::InvalidPhase(format!("ordinal {}", ordinal)))
    }

    /// Track coordinate of this phase.
    pub fn encode(self) -> f64 {
        self.ordinal() as f64
    }

    /// Following phase; `Arrived` stays `Arrived`.
    pub fn next(self) -> Self {
        match self {
            TaxiPhase::Gate => TaxiPhase::TaxiOut,
            TaxiPhase::TaxiOut => TaxiPhase::Takeoff,
            TaxiPhase::Takeoff => TaxiPhase::Landing,
            TaxiPhase::Landing => TaxiPhase::TaxiIn,
            TaxiPhase::TaxiIn => TaxiPhase::Arrived,
            TaxiPhase::Arrived => TaxiPhase::Arrived,
        }
    }

    /// Between wheels-up and touchdown.
    pub fn is_airborne(self) -> bool {
        matches!(self, TaxiPhase::Takeoff | TaxiPhase::Landing)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaxiPhase::Gate => "gate",
            TaxiPhase::TaxiOut => "taxi-out",
            TaxiPhase::Takeoff => "takeoff",
            TaxiPhase::Landing => "landing",
            TaxiPhase::TaxiIn => "taxi-in",
            TaxiPhase::Arrived => "arrived",
        }
    }
}

impl fmt::Display for TaxiPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaxiPhase {
    type Err = ScenarioError;

    /// Accepts the canonical symbols and the legacy `s1`..`s6` labels.
    fn from_str(symbol: &str) -> Result<Self> {
        let normalized = symbol.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "gate" | "s1" => Ok(TaxiPhase::Gate),
            "taxi-out" | "s2" => Ok(TaxiPhase::TaxiOut),
            "takeoff" | "s3" => Ok(TaxiPhase::Takeoff),
            "landing" | "s4" => Ok(TaxiPhase::Landing),
            "taxi-in" | "s5" => Ok(TaxiPhase::TaxiIn),
            "arrived" | "s6" => Ok(TaxiPhase::Arrived),
            _ => Err(ScenarioError::InvalidPhase(symbol.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_follow_track_order() {
        for (i, phase) in TaxiPhase::ALL.iter().enumerate() {
            assert_eq!(phase.ordinal() as usize, i);
            assert_eq!(TaxiPhase::from_ordinal(i as u8).unwrap(), *phase);
        }
    }

    #[test]
    fn test_landmark_reference_positions() {
        assert!((TaxiPhase::Gate.encode() - 0.0).abs() < 1e-12);
        assert!((TaxiPhase::Takeoff.encode() - 2.0).abs() < 1e-12);
        assert!((TaxiPhase::Landing.encode() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!("gate".parse::<TaxiPhase>().unwrap(), TaxiPhase::Gate);
        assert_eq!("Taxi-Out".parse::<TaxiPhase>().unwrap(), TaxiPhase::TaxiOut);
        assert_eq!("taxi_in".parse::<TaxiPhase>().unwrap(), TaxiPhase::TaxiIn);
        assert_eq!("s3".parse::<TaxiPhase>().unwrap(), TaxiPhase::Takeoff);
        assert_eq!("s6".parse::<TaxiPhase>().unwrap(), TaxiPhase::Arrived);
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        let err = "pushback".parse::<TaxiPhase>().unwrap_err();
        assert!(matches!(err, ScenarioError::InvalidPhase(ref s) if s == "pushback"));
        assert!(TaxiPhase::from_ordinal(6).is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for phase in TaxiPhase::ALL {
            assert_eq!(phase.to_string().parse::<TaxiPhase>().unwrap(), phase);
        }
    }

    #[test]
    fn test_next_saturates() {
        assert_eq!(TaxiPhase::Gate.next(), TaxiPhase::TaxiOut);
        assert_eq!(TaxiPhase::Arrived.next(), TaxiPhase::Arrived);
        assert!(TaxiPhase::Takeoff.is_airborne());
        assert!(!TaxiPhase::TaxiIn.is_airborne());
    }

    #[test]
    fn test_serde_uses_symbols() {
        let json = serde_json::to_string(&TaxiPhase::TaxiOut).unwrap();
        assert_eq!(json, "\"taxi-out\"");
    }
}
