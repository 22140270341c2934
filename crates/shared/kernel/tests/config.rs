use courier_kernel::config::{env_overrides, load_config, load_config_with};
use courier_kernel::domain::config::{
    CourierConfig, DispatchMode, FailurePolicy, RegistrationPolicy,
};
use serial_test::serial;
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn loads_sections_from_toml() {
    let file = write_config(
        r#"
        [dispatch]
        mode = "parallel"
        on_error = "continue"
        recipient_timeout_ms = 250

        [alarm]
        dial_number = "555-0100"
        "#,
    );

    let config: CourierConfig = load_config(Some(file.path())).unwrap();

    assert_eq!(config.dispatch.mode, DispatchMode::Parallel);
    assert_eq!(config.dispatch.on_error, FailurePolicy::Continue);
    assert_eq!(config.dispatch.recipient_timeout_ms, Some(250));
    assert_eq!(config.alarm.dial_number.as_deref(), Some("555-0100"));
    assert!(config.alarm.siren);
}

#[test]
#[serial]
fn defaults_fill_omitted_sections() {
    let file = write_config("[registry]\npolicy = \"single\"\n");

    let config: CourierConfig = load_config(Some(file.path())).unwrap();

    assert_eq!(config.registry.policy, RegistrationPolicy::Single);
    assert_eq!(config.dispatch.mode, DispatchMode::Sequential);
    assert_eq!(config.logging.level, "info");
}

#[test]
#[serial]
fn missing_file_is_an_error() {
    let err = load_config::<CourierConfig>(Some("does/not/exist.toml")).unwrap_err();
    assert_eq!(err.kind(), "Config");
}

fn overrides(vars: &[(&str, &str)]) -> config::Environment {
    let mut map = config::Map::new();
    for (key, value) in vars {
        map.insert((*key).to_owned(), (*value).to_owned());
    }
    env_overrides().source(Some(map))
}

#[test]
#[serial]
fn environment_overrides_typed_fields() {
    let file = write_config("[dispatch]\nmode = \"parallel\"\n");

    let config: CourierConfig = load_config_with(
        Some(file.path()),
        overrides(&[
            ("COURIER__DISPATCH__RECIPIENT_TIMEOUT_MS", "100"),
            ("COURIER__DISPATCH__ON_ERROR", "continue"),
            ("COURIER__ALARM__SIREN", "false"),
            ("COURIER__SENSOR__ALARM_THRESHOLD_CELSIUS", "72.5"),
            ("COURIER__LOGGING__MAX_FILES", "3"),
            ("COURIER__LOGGING__JSON", "true"),
            ("UNRELATED__DISPATCH__MODE", "sequential"),
        ]),
    )
    .unwrap();

    assert_eq!(config.dispatch.mode, DispatchMode::Parallel);
    assert_eq!(config.dispatch.on_error, FailurePolicy::Continue);
    assert_eq!(config.dispatch.recipient_timeout_ms, Some(100));
    assert!(!config.alarm.siren);
    assert!((config.sensor.alarm_threshold_celsius - 72.5).abs() < f64::EPSILON);
    assert_eq!(config.logging.max_files, 3);
    assert!(config.logging.json);
}

#[test]
#[serial]
fn environment_override_with_bad_number_is_an_error() {
    let file = write_config("[dispatch]\nmode = \"parallel\"\n");

    let err = load_config_with::<CourierConfig>(
        Some(file.path()),
        overrides(&[("COURIER__DISPATCH__RECIPIENT_TIMEOUT_MS", "soon")]),
    )
    .unwrap_err();

    assert_eq!(err.kind(), "Config");
}
