use std::time::Duration;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use tokio_shutdown::Shutdown;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

pub fn log_level_filter(level: &str) -> Option<log::LevelFilter> {
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None,
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = match log_level_filter(config.log_level.as_str()) {
        Some(level) => level,
        None => return Err(CustomError::new(&format!("Unknown log level encountered: '{}'", config.log_level))),
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(error) = fern::Dispatch::new()
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
        .chain(std::io::stdout())
        .apply()
    {
        return Err(CustomError::new(&format!("Failed to initialize logging: {error}")));
    }
    info!("logging initialized.");
    Ok(())
}

/// Sleeps for `timeout`, returns `true` when shutdown was requested first.
pub async fn shutdown_waiting(timeout: Duration, shutdown: Shutdown) -> bool
{
    tokio::select! {
        _ = tokio::time::sleep(timeout) => false,
        _ = shutdown.handle() => true,
    }
}
