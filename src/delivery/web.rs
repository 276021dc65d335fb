//! HTTP web service channel.

use super::{SendEvent, WebServiceSender};
use crate::core::config::ReporterSettings;
use crate::core::error::{Error, Result};
use crate::core::reporting::format_error_for_log;
use crate::report::ExceptionReport;
use serde::Serialize;
use std::time::Duration;

/// JSON body posted to the report endpoint.
#[derive(Debug, Serialize)]
struct ReportSubmission<'a> {
    app_name: &'a str,
    app_version: &'a str,
    title: &'a str,
    report: &'a str,
}

/// Posts the report as JSON to a configured endpoint.
pub struct HttpWebServiceSender {
    url: String,
    app_name: String,
    app_version: String,
    timeout: Duration,
}

impl HttpWebServiceSender {
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            url: url.into(),
            app_name: String::new(),
            app_version: String::new(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn from_settings(settings: &ReporterSettings) -> Self {
        Self {
            url: settings.web_service_url.clone(),
            app_name: settings.app_name.clone(),
            app_version: settings.app_version.clone(),
            timeout: Duration::from_secs(settings.web_service_timeout_secs),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Perform the request, mapping transport and status failures to errors.
    fn post(&self, client: &reqwest::blocking::Client, report: &ExceptionReport) -> Result<()> {
        let submission = ReportSubmission {
            app_name: &self.app_name,
            app_version: &self.app_version,
            title: report.title(),
            report: report.as_str(),
        };

        let response = client
            .post(&self.url)
            .json(&submission)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Network(format!(
                        "Request to {} timed out after {}s",
                        self.url,
                        self.timeout.as_secs()
                    ))
                } else {
                    Error::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::WebServiceStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

impl WebServiceSender for HttpWebServiceSender {
    fn send(&self, report: &ExceptionReport, events: &dyn SendEvent) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(Error::ConfigInvalid {
                field: "web_service_url".to_string(),
                message: "No web service URL configured".to_string(),
            });
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;

        match self.post(&client, report) {
            Ok(()) => {
                log::info!("Report submitted to {}", self.url);
                events.completed(true);
            }
            Err(e) => {
                log::warn!("Web service submission failed: {}", format_error_for_log(&e));
                events.show_error(&format!("Unable to submit report to {}", self.url), Some(&e));
                events.completed(false);
            }
        }

        Ok(())
    }
}
