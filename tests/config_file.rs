use std::io::Write;

use plan_creator::{
    build_plan, resolve_map_center, ConfigError, GeoCoordinate, PlanCreatorRegistry, PlanError,
    PlannerConfig, VehicleClass,
};
use plan_creator::mission::{MAV_CMD_NAV_VTOL_LAND, MAV_CMD_NAV_VTOL_TAKEOFF};

fn write_config(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn load_vtol_config_and_build() {
    let file = write_config(
        r#"{
            "settings": { "vehicle_class": "vtol", "takeoff_altitude": 40.0 },
            "creator": "A to B to A",
            "map_center": { "latitude": 47.0, "longitude": 8.0 }
        }"#,
    );

    let config = PlannerConfig::load(file.path()).unwrap();
    assert_eq!(config.settings.vehicle_class, VehicleClass::Vtol);

    let registry = PlanCreatorRegistry::with_defaults();
    let controller = build_plan(
        &registry,
        &config.creator,
        config.settings.clone(),
        config.map_center.unwrap(),
    )
    .unwrap();

    let commands: Vec<u16> = controller.items().iter().map(|item| item.command).collect();
    assert_eq!(commands[0], MAV_CMD_NAV_VTOL_TAKEOFF);
    assert_eq!(commands[2], MAV_CMD_NAV_VTOL_LAND);
    assert_eq!(controller.items()[0].altitude(), 40.0);
}

#[test]
fn out_of_range_settings_are_clamped_by_controller() {
    let file = write_config(r#"{ "settings": { "takeoff_altitude": 99999.0 } }"#);
    let config = PlannerConfig::load(file.path()).unwrap();
    assert!(!config.settings.is_valid());

    let controller = plan_creator::MissionController::new(config.settings);
    assert_eq!(controller.settings().takeoff_altitude, 1000.0);
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = PlannerConfig::load(dir.path().join("absent.json"));
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

fn config_with_center(center: GeoCoordinate) -> PlannerConfig {
    PlannerConfig {
        map_center: Some(center),
        ..PlannerConfig::default()
    }
}

#[test]
fn command_line_center_wins_over_config() {
    let config = config_with_center(GeoCoordinate::with_altitude(47.0, 8.0, 10.0));
    let center = resolve_map_center(Some(35.7), Some(139.6), None, &config).unwrap();
    assert_eq!(center, GeoCoordinate::new(35.7, 139.6));
}

#[test]
fn command_line_center_takes_alt() {
    let center =
        resolve_map_center(Some(35.7), Some(139.6), Some(12.0), &PlannerConfig::default())
            .unwrap();
    assert_eq!(center, GeoCoordinate::with_altitude(35.7, 139.6, 12.0));
}

#[test]
fn config_center_used_without_lat_lon() {
    let config = config_with_center(GeoCoordinate::new(47.0, 8.0));
    let center = resolve_map_center(None, None, None, &config).unwrap();
    assert_eq!(center, GeoCoordinate::new(47.0, 8.0));
}

#[test]
fn alt_applies_to_config_center() {
    let file = write_config(r#"{ "map_center": { "latitude": 47.0, "longitude": 8.0 } }"#);
    let config = PlannerConfig::load(file.path()).unwrap();

    let center = resolve_map_center(None, None, Some(30.0), &config).unwrap();
    assert_eq!(center, GeoCoordinate::with_altitude(47.0, 8.0, 30.0));
}

#[test]
fn missing_center_is_an_error() {
    let result = resolve_map_center(None, None, Some(30.0), &PlannerConfig::default());
    assert!(matches!(result, Err(PlanError::NoMapCenter)));

    // A lone latitude is not a center
    let result = resolve_map_center(Some(47.0), None, None, &PlannerConfig::default());
    assert!(matches!(result, Err(PlanError::NoMapCenter)));
}

#[test]
fn misspelled_setting_in_file_rejected() {
    let file = write_config(r#"{ "settings": { "takeof_altitude": 40.0 } }"#);
    let result = PlannerConfig::load(file.path());
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}
