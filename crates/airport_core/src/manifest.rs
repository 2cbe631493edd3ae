//! Flight Manifest - Input parsing and airport registry
//!
//! A manifest is an ordered list of `(flight id, origin, destination,
//! duration hours, departure time)` tuples. Order matters: the n-th flight
//! becomes agent n.
//!
//! ## Airport registry
//!
//! Each distinct airport is listed twice in a row, in first-seen order,
//! one entry per landmark slot:
//!
//! ```text
//! [("UA91", SFO, SEA), ("AA478", LHR, JFK)]  ->  [SFO, SFO, SEA, SEA, LHR, LHR, JFK, JFK]
//! ```

use std::io::Read;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, ScenarioError};

/// Fields per flight tuple
pub const FLIGHT_ARITY: usize = 5;

/// One scheduled flight. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight_id: String,
    pub origin: String,
    pub destination: String,
    pub duration_hours: f64,
    pub depart_time: NaiveTime,
}

impl FlightRecord {
    pub fn new(
        flight_id: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        duration_hours: f64,
        depart_time: NaiveTime,
    ) -> Self {
        FlightRecord {
            flight_id: flight_id.into(),
            origin: origin.into(),
            destination: destination.into(),
            duration_hours,
            depart_time,
        }
    }

    fn validate(&self, index: usize) -> Result<()> {
        if self.flight_id.trim().is_empty() {
            return Err(ScenarioError::malformed(index, "empty flight id"));
        }
        if self.origin.trim().is_empty() {
            return Err(ScenarioError::malformed(index, "empty origin airport code"));
        }
        if self.destination.trim().is_empty() {
            return Err(ScenarioError::malformed(index, "empty destination airport code"));
        }
        if !self.duration_hours.is_finite() || self.duration_hours < 0.0 {
            return Err(ScenarioError::malformed(
                index,
                format!("invalid flight duration {}", self.duration_hours),
            ));
        }
        Ok(())
    }
}

/// Parse a departure time given as `HHMM`, `HH:MM` or `HH:MM:SS`.
pub fn parse_depart_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    if raw.len() == 4 && raw.chars().all(|c| c.is_ascii_digit()) {
        return raw.parse::<u32>().ok().and_then(depart_time_from_hhmm);
    }
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

/// `1430` -> 14:30
pub fn depart_time_from_hhmm(hhmm: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hhmm / 100, hhmm % 100, 0)
}

/// Validated, ordered flights plus the doubled airport registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightManifest {
    flights: Vec<FlightRecord>,
    airports: Vec<String>,
}

impl FlightManifest {
    /// Build from typed records. Fails on the first invalid record.
    pub fn from_records(flights: Vec<FlightRecord>) -> Result<Self> {
        for (index, flight) in flights.iter().enumerate() {
            flight.validate(index)?;
        }

        let mut airports: Vec<String> = Vec::new();
        for flight in &flights {
            for code in [&flight.origin, &flight.destination] {
                if !airports.iter().any(|a| a == code) {
                    airports.push(code.clone());
                    airports.push(code.clone());
                }
            }
        }

        tracing::debug!(
            flights = flights.len(),
            airports = airports.len() / 2,
            "flight manifest parsed"
        );

        Ok(FlightManifest { flights, airports })
    }

    /// Build from a JSON array of 5-element arrays.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let entries = value.as_array().ok_or_else(|| {
            ScenarioError::InvalidConfig("flight manifest must be a JSON array".to_string())
        })?;

        let flights = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| record_from_json(index, entry))
            .collect::<Result<Vec<_>>>()?;

        Self::from_records(flights)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(&value)
    }

    /// Headerless CSV, one flight per row:
    /// `flight_id,origin,destination,duration_hours,depart_time`
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut flights = Vec::new();
        for (index, row) in rdr.records().enumerate() {
            let row = row?;
            if row.len() != FLIGHT_ARITY {
                return Err(ScenarioError::malformed(
                    index,
                    format!("expected {} fields, found {}", FLIGHT_ARITY, row.len()),
                ));
            }
            let duration_hours = row[3].parse::<f64>().map_err(|_| {
                ScenarioError::malformed(index, format!("duration is not a number: {:?}", &row[3]))
            })?;
            let depart_time = parse_depart_time(&row[4]).ok_or_else(|| {
                ScenarioError::malformed(index, format!("unparseable depart time: {:?}", &row[4]))
            })?;
            flights.push(FlightRecord::new(&row[0], &row[1], &row[2], duration_hours, depart_time));
        }

        Self::from_records(flights)
    }

    pub fn flights(&self) -> &[FlightRecord] {
        &self.flights
    }

    /// Doubled registry: each distinct airport twice, first-seen order.
    pub fn airport_registry(&self) -> &[String] {
        &self.airports
    }

    /// Distinct airport codes, first-seen order.
    pub fn distinct_airports(&self) -> impl Iterator<Item = &str> {
        self.airports.iter().step_by(2).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

fn record_from_json(index: usize, entry: &Value) -> Result<FlightRecord> {
    let fields = entry
        .as_array()
        .ok_or_else(|| ScenarioError::malformed(index, "record is not an array"))?;
    if fields.len() != FLIGHT_ARITY {
        return Err(ScenarioError::malformed(
            index,
            format!("expected {} fields, found {}", FLIGHT_ARITY, fields.len()),
        ));
    }

    let text = |pos: usize, what: &str| -> Result<String> {
        fields[pos]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ScenarioError::malformed(index, format!("{} must be a string", what)))
    };

    let flight_id = text(0, "flight id")?;
    let origin = text(1, "origin")?;
    let destination = text(2, "destination")?;
    let duration_hours = fields[3]
        .as_f64()
        .ok_or_else(|| ScenarioError::malformed(index, "duration must be a number"))?;
    let depart_time = json_depart_time(&fields[4]).ok_or_else(|| {
        ScenarioError::malformed(index, format!("unparseable depart time: {}", fields[4]))
    })?;

    Ok(FlightRecord::new(flight_id, origin, destination, duration_hours, depart_time))
}

fn json_depart_time(value: &Value) -> Option<NaiveTime> {
    match value {
        Value::Number(n) => {
            let hhmm = n.as_u64().or_else(|| {
                n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64)
            })?;
            depart_time_from_hhmm(u32::try_from(hhmm).ok()?)
        }
        Value::String(s) => parse_depart_time(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> FlightManifest {
        FlightManifest::from_json_value(&json!([
            ["UA91", "SFO", "SEA", 2.5, 1430],
            ["AA478", "LHR", "JFK", 7.5, 1930]
        ]))
        .unwrap()
    }

    #[test]
    fn test_registry_doubles_each_airport() {
        let manifest = sample();
        assert_eq!(
            manifest.airport_registry(),
            ["SFO", "SFO", "SEA", "SEA", "LHR", "LHR", "JFK", "JFK"]
        );
        assert_eq!(manifest.distinct_airports().collect::<Vec<_>>(), ["SFO", "SEA", "LHR", "JFK"]);
    }

    #[test]
    fn test_shared_airport_registered_once() {
        let manifest = FlightManifest::from_json_value(&json!([
            ["UA1", "SFO", "SEA", 2.0, 800],
            ["UA2", "SEA", "SFO", 2.0, 1100],
            ["UA3", "SFO", "LAX", 1.5, "12:15"]
        ]))
        .unwrap();
        assert_eq!(manifest.airport_registry(), ["SFO", "SFO", "SEA", "SEA", "LAX", "LAX"]);
        assert_eq!(manifest.len(), 3);
    }

    #[test]
    fn test_depart_time_formats() {
        let manifest = sample();
        assert_eq!(manifest.flights()[0].depart_time, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
        assert_eq!(parse_depart_time("07:05"), NaiveTime::from_hms_opt(7, 5, 0));
        assert_eq!(parse_depart_time("0705"), NaiveTime::from_hms_opt(7, 5, 0));
        assert_eq!(parse_depart_time("23:59:30"), NaiveTime::from_hms_opt(23, 59, 30));
        assert_eq!(parse_depart_time("2460"), None);
        assert_eq!(depart_time_from_hhmm(2500), None);
    }

    #[test]
    fn test_empty_manifest_is_valid() {
        let manifest = FlightManifest::from_json_str("[]").unwrap();
        assert!(manifest.is_empty());
        assert!(manifest.airport_registry().is_empty());
    }

    #[test]
    fn test_wrong_arity_names_index() {
        let err = FlightManifest::from_json_value(&json!([
            ["UA91", "SFO", "SEA", 2.5, 1430],
            ["AA478", "LHR", "JFK", 7.5]
        ]))
        .unwrap_err();
        match err {
            ScenarioError::MalformedRecord { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("found 4"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_types_rejected() {
        let rejected = |value: Value| FlightManifest::from_json_value(&value).unwrap_err();

        let err = rejected(json!([[91, "SFO", "SEA", 2.5, 1430]]));
        assert!(matches!(err, ScenarioError::MalformedRecord { index: 0, .. }));

        let err = rejected(json!([["UA91", "SFO", "SEA", "long", 1430]]));
        assert!(matches!(err, ScenarioError::MalformedRecord { index: 0, .. }));

        let err = rejected(json!([["UA91", "SFO", "SEA", 2.5, true]]));
        assert!(matches!(err, ScenarioError::MalformedRecord { index: 0, .. }));

        let err = rejected(json!({"UA91": "SFO"}));
        assert!(matches!(err, ScenarioError::InvalidConfig(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let t = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let err = FlightManifest::from_records(vec![
            FlightRecord::new("UA91", "SFO", "SEA", 2.5, t),
            FlightRecord::new("UA92", "SFO", "", 2.5, t),
        ])
        .unwrap_err();
        assert!(matches!(err, ScenarioError::MalformedRecord { index: 1, .. }));

        let err =
            FlightManifest::from_records(vec![FlightRecord::new("UA93", "SFO", "SEA", -1.0, t)])
                .unwrap_err();
        assert!(matches!(err, ScenarioError::MalformedRecord { index: 0, .. }));
    }

    #[test]
    fn test_csv_manifest() {
        let csv = "# id,origin,dest,hours,depart\n\
                   UA91, SFO, SEA, 2.5, 14:30\n\
                   AA478,LHR,JFK,7.5,1930\n";
        let manifest = FlightManifest::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(manifest, sample());
    }

    #[test]
    fn test_csv_bad_row() {
        let csv = "UA91,SFO,SEA,2.5,14:30\nAA478,LHR,JFK,soon,1930\n";
        let err = FlightManifest::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ScenarioError::MalformedRecord { index: 1, .. }));

        let csv = "UA91,SFO,SEA\n";
        let err = FlightManifest::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ScenarioError::MalformedRecord { index: 0, .. }));
    }
}
