use std::fs::File;
use std::io::Write;
use regex::Regex;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::cluster_mode::ClusterMode;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::database_engine::DatabaseEngine;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::event_bus_config::EventBusConfig;
use crate::config::structs::master_config::MasterConfig;
use crate::config::structs::mvc_config::MvcConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::sessions_config::SessionsConfig;
use crate::config::structs::worker_config::WorkerConfig;

const NAME_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]{0,62}$";
const HOST_PATTERN: &str = r"^[A-Za-z0-9\-\.\:\[\]]+$";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            cluster_mode: ClusterMode::worker,
            event_bus: EventBusConfig {
                host: String::from("127.0.0.1"),
                port: 6565,
                master_secret: String::from("ChangeMeMasterSecret"),
                worker_secret: String::from("ChangeMeWorkerSecret"),
                reconnect_interval: 1000,
                max_frame_size: 1024 * 1024,
                ssl: false,
                ssl_cert: String::from(""),
                ssl_key: String::from(""),
                ssl_ca: String::from(""),
                ssl_server_name: String::from(""),
            },
            master: MasterConfig {
                http_bind_address: String::from("0.0.0.0:8080"),
            },
            worker: WorkerConfig {
                host: String::from("127.0.0.1"),
                port: 8090,
                secure: false,
                bind_address: String::from("0.0.0.0:8090"),
                ssl_cert: String::from(""),
                ssl_key: String::from(""),
                load_send_interval: 5000,
            },
            mvc: MvcConfig {
                models_collection: String::from("models"),
                request_timeout: 30,
            },
            sessions: SessionsConfig {
                collection: String::from("sessions"),
                lifetime: 3600,
                check_expired_interval: 60,
            },
            database: DatabaseConfig {
                engine: DatabaseEngine::memory,
                path: String::from("sqlite://data.db"),
            },
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::from(""),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false,
                traces_sample_rate: 1.0,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(create: bool) -> Result<Configuration, CustomError> {
        Self::load_from_path("config.toml", create)
    }

    pub fn load_from_path(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start again, exiting now...");
                        Err(CustomError::new(&format!("create {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        Self::validate(&config).map_err(|e| CustomError::new(&e.to_string()))?;
        Ok(config)
    }

    pub fn validate(config: &Configuration) -> Result<(), ConfigurationError> {
        parse_log_level(config.log_level.as_str())
            .map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;

        if config.event_bus.master_secret.is_empty() || config.event_bus.worker_secret.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("event_bus secrets must not be empty")));
        }
        if config.event_bus.master_secret == config.event_bus.worker_secret {
            return Err(ConfigurationError::ValidationError(String::from("event_bus master_secret and worker_secret must differ")));
        }
        if config.event_bus.max_frame_size == 0 {
            return Err(ConfigurationError::ValidationError(String::from("event_bus max_frame_size must be greater than zero")));
        }
        if config.event_bus.ssl && config.cluster_mode.is_master() && (config.event_bus.ssl_cert.is_empty() || config.event_bus.ssl_key.is_empty()) {
            return Err(ConfigurationError::ValidationError(String::from("event_bus ssl requires ssl_cert and ssl_key on the master")));
        }
        if config.worker.secure && config.cluster_mode.is_worker() && (config.worker.ssl_cert.is_empty() || config.worker.ssl_key.is_empty()) {
            return Err(ConfigurationError::ValidationError(String::from("worker secure mode requires ssl_cert and ssl_key")));
        }

        let check_map = vec![
            ("[EVENT BUS] host", config.event_bus.host.clone(), HOST_PATTERN),
            ("[WORKER] host", config.worker.host.clone(), HOST_PATTERN),
            ("[MVC] models_collection", config.mvc.models_collection.clone(), NAME_PATTERN),
            ("[SESSIONS] collection", config.sessions.collection.clone(), NAME_PATTERN),
        ];

        for (name, value, regex) in check_map {
            Self::validate_value(name, value.as_str(), regex)?;
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex).map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!("Error checking {} [:] Name: \"{}\" [:] Regex: \"{}\"", name, value, regex_check)));
        }
        Ok(())
    }
}
