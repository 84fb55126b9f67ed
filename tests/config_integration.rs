use equipment_storefront::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;

const BIN: &str = "equipment-storefront";

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        for key in [
            "STOREFRONT_SERVER__PORT",
            "STOREFRONT_SERVER__HOST",
            "STOREFRONT_ASSETS__STATIC_DIR",
            "STOREFRONT_RESILIENCE__TIMEOUT_DISABLED",
            "CONFIG_FILE",
            "HOST",
            "PORT",
            "STATIC_DIR",
            "TIMEOUT_DISABLED",
        ] {
            env::remove_var(key);
        }
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args([BIN]).expect("defaults should load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.assets.static_dir, "static");
    assert!(!config.resilience.timeout_disabled);
    assert_eq!(config.resilience.request_timeout_secs, 30);
    assert!(config.export_dir.is_none());
    assert_eq!(config.bind_address(), "0.0.0.0:3000");
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("STOREFRONT_SERVER__PORT", "9090");
        env::set_var("STOREFRONT_ASSETS__STATIC_DIR", "/srv/assets");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.assets.static_dir, "/srv/assets");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("STOREFRONT_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args([BIN, "--port", "8181", "--host", "127.0.0.1"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 8181);
    assert_eq!(config.bind_address(), "127.0.0.1:8181");

    clear_env_vars();
}

#[test]
#[serial]
fn test_clap_env_var() {
    clear_env_vars();
    unsafe {
        env::set_var("TIMEOUT_DISABLED", "true");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert!(config.resilience.timeout_disabled);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("storefront.yaml");
    fs::write(
        &file_path,
        r#"
server:
  port: 7070
resilience:
  request_timeout_secs: 5
"#,
    )
    .expect("Failed to write temp config");

    unsafe {
        env::set_var("CONFIG_FILE", &file_path);
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.resilience.request_timeout_secs, 5);

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args([BIN, "--config", "/nonexistent/storefront.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    let cwd_path = "config.yaml";
    fs::write(
        cwd_path,
        r#"
server:
  port: 6060
"#,
    )
    .expect("Failed to write ./config.yaml");

    let config = AppConfig::load_from_args([BIN]);

    fs::remove_file(cwd_path).unwrap();

    assert_eq!(config.expect("Failed to load config").server.port, 6060);
}

#[test]
#[serial]
fn test_export_flag() {
    clear_env_vars();

    let config =
        AppConfig::load_from_args([BIN, "--export", "dist"]).expect("Failed to load config");
    assert_eq!(config.export_dir, Some(PathBuf::from("dist")));
}
