use std::fs;

use roadtrip_layout::{generate, scenario::ScenarioLoader, MapConfiguration};
use tempfile::tempdir;

fn loader() -> ScenarioLoader {
    ScenarioLoader::new(env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn scenario_loader_reads_fixture() {
    let scenario = loader()
        .load("scenarios/default_road.yaml")
        .expect("scenario parses");

    assert_eq!(scenario.name, "default_road");
    assert_eq!(scenario.seed, 42);
    let mut expected = MapConfiguration::default();
    expected.normalize_zone_arrays();
    assert_eq!(scenario.map, expected);
    assert_eq!(scenario.map.height, 99);
}

#[test]
fn fixture_layouts_are_reproducible() {
    let scenario = loader().load("scenarios/sparse_strip.yaml").unwrap();

    let a = generate(&scenario.map, scenario.seed).unwrap();
    let b = generate(&scenario.map, scenario.seed).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.settlements().len(), 3);
}

#[test]
fn short_zone_arrays_are_filled_in() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("five.yaml"),
        "name: five\nseed: 3\nmap:\n  zone_count: 5\n  height: 103\n",
    )
    .unwrap();

    let scenario = ScenarioLoader::new(dir.path()).load("five.yaml").unwrap();

    assert_eq!(scenario.map.height, 100);
    assert_eq!(scenario.map.core_towns_per_zone.len(), 5);
    let layout = generate(&scenario.map, scenario.seed).unwrap();
    assert_eq!(layout.summary().zones.len(), 5);
}

#[test]
fn invalid_map_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("bad.yaml"),
        "name: bad\nseed: 1\nmap:\n  scattered_town_density: 2.0\n",
    )
    .unwrap();

    let err = ScenarioLoader::new(dir.path()).load("bad.yaml").unwrap_err();

    assert!(format!("{err:#}").contains("scattered_town_density"));
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempdir().unwrap();

    let err = ScenarioLoader::new(dir.path()).load("nope.yaml").unwrap_err();

    assert!(err.to_string().contains("nope.yaml"));
}
