use std::io::Write;

use airport_cli::{build_report, load_manifest, resolve_config};
use airport_core::{ScenarioError, ScenarioMode};

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_json_manifest_report() {
    let file = write_temp(
        ".json",
        r#"[["UA91", "SFO", "SEA", 2.5, 1430], ["AA478", "LHR", "JFK", 7.5, 1930]]"#,
    );
    let manifest = load_manifest(file.path()).unwrap();
    let config = resolve_config(None, ScenarioMode::DiscretePhase, None).unwrap();
    let report = build_report(config, &manifest).unwrap();

    let names: Vec<_> = report.landmarks.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["SFO-1", "SFO-2", "SEA-1", "SEA-2", "LHR-1", "LHR-2", "JFK-1", "JFK-2"]);
    for agent in &report.agents {
        assert_eq!(agent.position, [0.0]);
        assert_eq!(agent.velocity, [0.005]);
    }

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["mode"], "discrete_phase");
    assert_eq!(json["agents"][1]["name"], "Aircraft AA478");
    assert_eq!(json["agents"][0]["phase"], "gate");
}

#[test]
fn test_csv_manifest_with_yaml_config() {
    let manifest = write_temp(".csv", "UA91,SFO,SEA,2.5,14:30\nAA478,LHR,JFK,7.5,19:30\n");
    let config = write_temp(".yaml", "mode: continuous\nseed: 21\n");

    let manifest = load_manifest(manifest.path()).unwrap();
    let config = resolve_config(Some(config.path()), ScenarioMode::DiscretePhase, None).unwrap();
    assert_eq!(config.mode, ScenarioMode::Continuous);

    let first = build_report(config.clone(), &manifest).unwrap();
    let second = build_report(config, &manifest).unwrap();
    assert_eq!(first.agents[0].name, "Aircraft 0");
    assert_eq!(first.agents[0].position, second.agents[0].position);
    assert!(first.landmarks.iter().all(|l| l.position.is_none()));
    assert!(first.agents.iter().all(|a| (-1.0..=1.0).contains(&a.position[0])));
}

#[test]
fn test_malformed_manifest_reports_index() {
    let file = write_temp(".json", r#"[["UA91", "SFO", "SEA", 2.5, 1430], ["AA478", "LHR"]]"#);
    let err = load_manifest(file.path()).unwrap_err();
    let source = err.downcast_ref::<ScenarioError>().unwrap();
    assert!(matches!(source, ScenarioError::MalformedRecord { index: 1, .. }));
}

#[test]
fn test_missing_manifest_file() {
    let err = load_manifest(std::path::Path::new("/nonexistent/flights.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read JSON manifest"));
}
