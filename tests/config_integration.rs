//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use isobox::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("ISOBOX_VIEWPORT__OUTPUT", "from_env.png");
    let config = AppConfig::load().unwrap();
    println!("Output path: {}", config.viewport.output);
    assert_eq!(config.viewport.output, "from_env.png");
    std::env::remove_var("ISOBOX_VIEWPORT__OUTPUT");
}

#[test]
#[serial]
fn test_default_config_loading() {
    // Remove env var to test file-based config
    std::env::remove_var("ISOBOX_VIEWPORT__OUTPUT");

    let cwd = std::env::current_dir().unwrap();
    println!("Current dir: {:?}", cwd);
    println!(
        "config/default.toml exists: {}",
        cwd.join("config/default.toml").exists()
    );

    let config = AppConfig::load().unwrap();
    assert_eq!(config.viewport.width, 200);
    assert_eq!(config.cuboid.angle_degrees, 30.0);
}

#[test]
#[serial]
fn test_env_override_numeric_section() {
    std::env::set_var("ISOBOX_CUBOID__ANGLE_DEGREES", "45.0");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.cuboid.angle_degrees, 45.0);
    std::env::remove_var("ISOBOX_CUBOID__ANGLE_DEGREES");
}
