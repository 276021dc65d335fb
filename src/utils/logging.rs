//! Logging infrastructure for the exception reporter.

use crate::core::config::LoggingConfig;
use crate::core::error::{Error, Result};
use chrono::Local;
use env_logger::{Builder, WriteStyle};
use log::LevelFilter;
use std::io::{IsTerminal, Write};

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level
    pub level: LevelFilter,
    /// Show timestamps
    pub timestamps: bool,
    /// Show module path
    pub module_path: bool,
    /// Colour level labels when stderr is a terminal
    pub color: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            timestamps: true,
            module_path: false,
            color: true,
        }
    }
}

impl LogConfig {
    /// Create a log config from the logging section of the application config.
    pub fn from_config(config: &LoggingConfig) -> Self {
        let level = parse_level(&config.log_level);

        Self {
            level,
            timestamps: true,
            module_path: config.module_path
                || level == LevelFilter::Debug
                || level == LevelFilter::Trace,
            color: true,
        }
    }

    /// Create a verbose log config for CLI.
    pub fn verbose() -> Self {
        Self {
            level: LevelFilter::Debug,
            timestamps: true,
            module_path: true,
            color: true,
        }
    }

    /// Create a quiet log config (errors only).
    pub fn quiet() -> Self {
        Self {
            level: LevelFilter::Error,
            timestamps: false,
            module_path: false,
            color: false,
        }
    }

    /// Terminal styling for log output.
    pub fn write_style(&self) -> WriteStyle {
        if self.color && std::io::stderr().is_terminal() {
            WriteStyle::Always
        } else {
            WriteStyle::Never
        }
    }
}

fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" | "warning" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// Initialize the logging system.
pub fn init_logging(config: LogConfig) -> Result<()> {
    let mut builder = Builder::new();

    builder.filter_level(config.level);
    builder.write_style(config.write_style());

    let format = config.clone();
    builder.format(move |buf, record| {
        let mut output = String::new();

        if format.timestamps {
            output.push_str(&format!("{} ", Local::now().format("%Y-%m-%d %H:%M:%S")));
        }

        let style = buf.default_level_style(record.level());
        output.push_str(&format!("[{style}{:<5}{style:#}] ", record.level()));

        if format.module_path {
            if let Some(path) = record.module_path() {
                output.push_str(&format!("{}: ", path));
            }
        }

        output.push_str(&format!("{}", record.args()));

        writeln!(buf, "{}", output)
    });

    builder
        .try_init()
        .map_err(|e| Error::Other(anyhow::anyhow!("Failed to initialize logging: {}", e)))?;

    log::debug!("Logging initialized with level: {:?}", config.level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_default() {
        let config = LogConfig::default();
        assert_eq!(config.level, LevelFilter::Info);
        assert!(config.timestamps);
        assert!(!config.module_path);
    }

    #[test]
    fn test_log_config_from_config() {
        let config = LogConfig::from_config(&LoggingConfig {
            log_level: "DEBUG".to_string(),
            module_path: false,
        });
        assert_eq!(config.level, LevelFilter::Debug);
        assert!(config.module_path);

        let config = LogConfig::from_config(&LoggingConfig {
            log_level: "nonsense".to_string(),
            module_path: false,
        });
        assert_eq!(config.level, LevelFilter::Info);
    }

    #[test]
    fn test_log_config_quiet() {
        let config = LogConfig::quiet();
        assert_eq!(config.level, LevelFilter::Error);
        assert!(!config.timestamps);
        assert!(matches!(config.write_style(), WriteStyle::Never));
    }
}
