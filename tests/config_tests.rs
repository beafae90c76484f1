use std::fs;
use tempfile::TempDir;
use lineq::config::enums::configuration_error::ConfigurationError;
use lineq::config::enums::replication_mode::ReplicationMode;
use lineq::config::structs::configuration::Configuration;

#[test]
fn test_create_config_writes_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    let path = path.to_str().unwrap();

    assert!(Configuration::load_from_file(false, path).is_err());
    assert!(!fs::exists(path).unwrap());

    assert!(Configuration::load_from_file(true, path).is_err());
    let config = Configuration::load_from_file(false, path).unwrap();
    assert_eq!(config, Configuration::init());
}

#[test]
fn test_partial_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[peer]\nmode = \"vwr\"\nname = \"edge\"\n\n[vwr.routes.shop]\nactive_users = 5\npath = \"/shop\"\nhost = \"10.0.0.2:80\"\n").unwrap();

    let config = Configuration::load_from_file(false, path.to_str().unwrap()).unwrap();
    assert_eq!(config.peer.mode, ReplicationMode::vwr);
    assert_eq!(config.peer.name, "edge");
    assert_eq!(config.peer.bind_address, "127.0.0.1:11111");
    assert_eq!(config.vwr.routes["shop"].active_users, 5);
    assert!(config.validate().is_ok());
}

#[test]
fn test_waiting_room_without_routes_is_rejected() {
    let mut config = Configuration::default();
    config.peer.mode = ReplicationMode::vwr;
    match config.validate() {
        Err(ConfigurationError::ValidationError { field, .. }) => assert_eq!(field, "vwr.routes"),
        other => panic!("unexpected result: {other:?}"),
    }
}
