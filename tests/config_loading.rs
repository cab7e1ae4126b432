//! Tests for environment settings loading.

use std::io::Write;
use std::path::PathBuf;

use locator_refresh::config::load_environment_config;
use locator_refresh::error_handling::ConfigError;
use tempfile::NamedTempFile;

fn write_yaml(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).expect("Failed to write");
    file.flush().expect("Failed to flush");
    file
}

#[test]
fn loads_settings_with_kebab_case_keys() {
    let file = write_yaml(
        "input-address-gdb-location: /mnt/share/geocode\n\
         target_servers:\n\
         - ip: 10.0.0.11\n\
         \x20 username: siteadmin\n\
         \x20 password: hunter2\n\
         \x20 output-address-locator-location: /srv/arcgis/locator\n\
         - ip: 10.0.0.12\n\
         \x20 username: siteadmin\n\
         \x20 password: hunter2\n\
         \x20 output-address-locator-location: /srv/arcgis/locator\n\
         \x20 port: 6443\n",
    );

    let settings = load_environment_config(file.path()).expect("settings should load");
    assert_eq!(
        settings.input_gdb_location,
        PathBuf::from("/mnt/share/geocode")
    );
    assert_eq!(settings.target_servers.len(), 2);

    let first = &settings.target_servers[0];
    assert_eq!(first.ip, "10.0.0.11");
    assert_eq!(first.username, "siteadmin");
    assert_eq!(first.password, "hunter2");
    assert_eq!(
        first.output_locator_location,
        PathBuf::from("/srv/arcgis/locator")
    );
    // Port is fixed at 6080 unless the document overrides it
    assert_eq!(first.port, 6080);
    assert_eq!(settings.target_servers[1].port, 6443);
}

#[test]
fn missing_file_is_a_read_error() {
    let err = load_environment_config(std::path::Path::new("config.absent.yml"))
        .expect_err("missing file must fail");
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("config.absent.yml"));
}

#[test]
fn missing_required_key_is_a_parse_error() {
    let file = write_yaml("target_servers: []\n");
    let err = load_environment_config(file.path()).expect_err("missing key must fail");
    assert!(matches!(err, ConfigError::Parse { .. }));
}
