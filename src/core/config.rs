//! Configuration management for the exception reporter.

use crate::core::error::{Error, Result};
use crate::core::types::{DeliveryChannel, LegacyMailMethod, ReportSendMethod};
use crate::delivery::resolve_send_method;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report content and delivery settings
    pub reporter: ReporterSettings,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigLoad(format!("Failed to read config file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigLoad(format!("Failed to parse config file: {}", e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::ConfigSave(format!("Failed to create config directory: {}", e))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| Error::ConfigSave(format!("Failed to write config file: {}", e)))
    }

    /// Load configuration from the default location, falling back to defaults.
    pub fn load_or_default() -> Self {
        let config_path = Self::default_config_path();

        if config_path.exists() {
            match Self::load(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    log::warn!("Failed to load config, using defaults: {}", e);
                }
            }
        }

        Self::default()
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        Self::data_dir().join("config.json")
    }

    /// Get the application data directory.
    pub fn data_dir() -> PathBuf {
        #[cfg(windows)]
        {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("C:\\ProgramData"))
                .join("ExceptionReporter")
        }

        #[cfg(not(windows))]
        {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("/tmp"))
                .join("exception-reporter")
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<()> {
        let reporter = &self.reporter;

        match resolve_send_method(reporter.send_method, reporter.mail_method) {
            Some(DeliveryChannel::WebService) if reporter.web_service_url.trim().is_empty() => {
                return Err(Error::ConfigInvalid {
                    field: "reporter.web_service_url".to_string(),
                    message: "Required when send_method is web_service".to_string(),
                });
            }
            Some(DeliveryChannel::Smtp) if reporter.smtp.server.trim().is_empty() => {
                return Err(Error::ConfigInvalid {
                    field: "reporter.smtp.server".to_string(),
                    message: "Required when SMTP delivery is selected".to_string(),
                });
            }
            _ => {}
        }

        if reporter.web_service_timeout_secs == 0 {
            return Err(Error::ConfigInvalid {
                field: "reporter.web_service_timeout_secs".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Identity, contact and delivery settings of the reporting application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterSettings {
    /// Application name shown in the report
    pub app_name: String,
    /// Application version shown in the report
    pub app_version: String,
    /// Company or vendor name
    pub company_name: String,
    /// Support contact address (used by "contact" mailto links)
    pub contact_email: String,
    /// Vendor website
    pub website_url: String,
    /// Recipient of emailed reports
    pub email_report_address: String,
    /// Web service endpoint for report submission
    pub web_service_url: String,
    /// Web service request timeout in seconds
    pub web_service_timeout_secs: u64,
    /// SMTP server settings
    pub smtp: SmtpConfig,
    /// Current send method selection
    pub send_method: ReportSendMethod,
    /// Legacy mail method, consulted only when `send_method` is unset
    pub mail_method: LegacyMailMethod,
    /// Custom report title (defaults to "<app> Exception Report")
    pub title_text: String,
    /// Attach a screenshot when the channel supports it
    pub take_screenshot: bool,
    /// Start with the full detail view
    pub show_full_detail: bool,
    /// Show and collect system information
    pub show_sysinfo_tab: bool,
    /// Show loaded components
    pub show_assemblies_tab: bool,
}

impl Default for ReporterSettings {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            company_name: String::new(),
            contact_email: String::new(),
            website_url: String::new(),
            email_report_address: String::new(),
            web_service_url: String::new(),
            web_service_timeout_secs: 30,
            smtp: SmtpConfig::default(),
            send_method: ReportSendMethod::None,
            mail_method: LegacyMailMethod::SimpleMapi,
            title_text: String::new(),
            take_screenshot: false,
            show_full_detail: false,
            show_sysinfo_tab: true,
            show_assemblies_tab: true,
        }
    }
}

/// SMTP relay the report is sent through.
///
/// Only the server name is read here: it selects and labels the SMTP track.
/// The transport itself is a `MailSender` supplied by the embedding
/// application, which owns its port, TLS and credential settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpConfig {
    pub server: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Show module paths in log lines
    pub module_path: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            module_path: false,
        }
    }
}
