use std::sync::OnceLock;
use std::time::SystemTime;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

/// Member names wrapped by or led by an underscore are private: `_secret`, `secret_`, `a_b`.
pub const PRIVATE_NAME_PATTERN: &str = r"^((.*_)|(_.*))$";

pub fn parse_log_level(level: &str) -> Result<log::LevelFilter, CustomError>
{
    match level {
        "off" => Ok(log::LevelFilter::Off),
        "trace" => Ok(log::LevelFilter::Trace),
        "debug" => Ok(log::LevelFilter::Debug),
        "info" => Ok(log::LevelFilter::Info),
        "warn" => Ok(log::LevelFilter::Warn),
        "error" => Ok(log::LevelFilter::Error),
        _ => Err(CustomError::new(&format!("Unknown log level encountered: '{level}'")))
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = parse_log_level(config.log_level.as_str())?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .level_for("sqlx", log::LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()
        .map_err(|_| CustomError::new("Failed to initialize logging."))?;
    info!("logging initialized.");
    Ok(())
}

pub fn current_time_millis() -> i64 {
    match SystemTime::now().duration_since(SystemTime::UNIX_EPOCH) {
        Ok(duration) => duration.as_millis() as i64,
        Err(_) => 0
    }
}

pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}

pub fn is_private_name(name: &str) -> bool {
    static PRIVATE: OnceLock<Option<Regex>> = OnceLock::new();
    PRIVATE
        .get_or_init(|| Regex::new(PRIVATE_NAME_PATTERN).ok())
        .as_ref()
        .is_some_and(|regex| regex.is_match(name))
}
