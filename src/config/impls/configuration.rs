use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::replication_mode::ReplicationMode;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::peer_config::PeerConfig;
use crate::config::structs::route_config::RouteConfig;
use crate::config::structs::vwr_config::VwrConfig;
use crate::config::structs::web_config::WebConfig;

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            peer: PeerConfig::default(),
            web: WebConfig::default(),
            vwr: VwrConfig::default(),
        }
    }
}

impl Default for PeerConfig {
    fn default() -> Self {
        PeerConfig {
            bind_address: String::from("127.0.0.1:11111"),
            name: String::from("lineq"),
            mode: ReplicationMode::agg,
            auto_sync: false,
            heartbeat_interval: 0,
            remote_peers: Vec::new(),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            enabled: true,
            bind_address: String::from("127.0.0.1:8060"),
            client_buffer: 64,
            workers: 1,
            keep_alive: 60,
        }
    }
}

impl Default for VwrConfig {
    fn default() -> Self {
        VwrConfig {
            room_table: String::from("room"),
            user_table: String::from("users"),
            inactivity_duration: 5,
            cache_shards: 1024,
            clean_interval: 1,
            target_port: 80,
            routes: BTreeMap::new(),
        }
    }
}

impl Configuration {
    /// Defaults written by `--create-config`, with one sample route.
    pub fn init() -> Configuration {
        let mut config = Configuration::default();
        config.vwr.routes.insert(String::from("site"), RouteConfig {
            active_users: 100,
            path: String::from("/"),
            host: String::from("127.0.0.1:8080"),
        });
        config
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn load_from_file(create: bool, path: &str) -> Result<Configuration, CustomError> {
        match Configuration::load_file(path) {
            Ok(config) => Ok(config),
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                let config_toml = match toml::to_string(&Configuration::init()) {
                    Ok(data) => data,
                    Err(error) => return Err(CustomError::new(&format!("could not serialize default config: {error}"))),
                };
                match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and restart, exiting now...");
                        Err(CustomError::new(&format!("created {path} file")))
                    }
                    Err(error) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{error}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let check_map = vec![
            ("log_level", self.log_level.clone(), r"^(off|trace|debug|info|warn|error)$"),
            ("peer.name", self.peer.name.clone(), r"^[A-Za-z0-9_.\-]{1,64}$"),
            ("vwr.room_table", self.vwr.room_table.clone(), r"^[A-Za-z0-9_.\-]{1,32}$"),
            ("vwr.user_table", self.vwr.user_table.clone(), r"^[A-Za-z0-9_.\-]{1,32}$"),
        ];
        for (name, value, regex) in check_map {
            Self::validate_value(name, &value, regex)?;
        }

        Self::validate_address("peer.bind_address", &self.peer.bind_address)?;
        if self.web.enabled {
            Self::validate_address("web.bind_address", &self.web.bind_address)?;
            if self.web.client_buffer == 0 {
                return Err(Self::invalid("web.client_buffer", "must be at least 1"));
            }
        }
        for remote in &self.peer.remote_peers {
            Self::validate_value("peer.remote_peers.name", &remote.name, r"^[A-Za-z0-9_.\-]{1,64}$")?;
            if remote.address.is_empty() {
                return Err(Self::invalid("peer.remote_peers.address", "must not be empty"));
            }
        }

        if self.peer.mode.is_waiting_room() {
            if self.vwr.routes.is_empty() {
                return Err(Self::invalid("vwr.routes", "routes is empty"));
            }
            if self.vwr.room_table == self.vwr.user_table {
                return Err(Self::invalid("vwr.user_table", "must differ from vwr.room_table"));
            }
            if self.vwr.inactivity_duration == 0 {
                return Err(Self::invalid("vwr.inactivity_duration", "must be at least 1 minute"));
            }
            if self.vwr.clean_interval == 0 {
                return Err(Self::invalid("vwr.clean_interval", "must be at least 1 second"));
            }
            for name in self.vwr.routes.keys() {
                Self::validate_value("vwr.routes", name, r"^[A-Za-z0-9_\-]{1,32}$")?;
            }
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError> {
        let regex_check = Regex::new(regex).map_err(|error| Self::invalid(name, &error.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(Self::invalid(name, &format!("\"{value}\" does not match \"{regex_check}\"")));
        }
        Ok(())
    }

    fn validate_address(name: &str, value: &str) -> Result<(), ConfigurationError> {
        value
            .parse::<SocketAddr>()
            .map(|_| ())
            .map_err(|error| Self::invalid(name, &format!("\"{value}\": {error}")))
    }

    fn invalid(field: &str, reason: &str) -> ConfigurationError {
        ConfigurationError::ValidationError {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}
