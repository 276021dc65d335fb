//! Core type definitions used throughout the exception reporter.

use crate::core::config::ReporterSettings;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Send method selected by the current configuration scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSendMethod {
    /// No method selected; the legacy field decides
    #[default]
    None,
    /// Direct SMTP delivery
    Smtp,
    /// Native mail client
    SimpleMapi,
    /// HTTP web service endpoint
    WebService,
}

/// Mail method from the legacy configuration scheme.
///
/// `SimpleMapi` is the default, so a legacy value of `SimpleMapi` cannot be
/// told apart from an unset one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyMailMethod {
    #[default]
    SimpleMapi,
    Smtp,
    /// Explicitly disabled
    None,
}

/// The concrete channel a send attempt is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryChannel {
    WebService,
    Smtp,
    Mapi,
}

impl DeliveryChannel {
    /// Get a display name for the channel.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryChannel::WebService => "WebService",
            DeliveryChannel::Smtp => "SMTP",
            DeliveryChannel::Mapi => "MAPI",
        }
    }
}

impl fmt::Display for DeliveryChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A captured error and its cause chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionInfo {
    /// Type name of the outermost error, when known
    pub type_name: Option<String>,
    /// Message of the outermost error
    pub message: String,
    /// Messages of each `source()` level, outermost first
    pub chain: Vec<String>,
    /// Captured backtrace text
    pub backtrace: Option<String>,
}

impl ExceptionInfo {
    /// Create an exception entry from a bare message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            type_name: None,
            message: message.into(),
            chain: Vec::new(),
            backtrace: None,
        }
    }

    /// Capture an error and walk its source chain.
    pub fn from_error<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let mut chain = Vec::new();
        let mut source = error.source();
        while let Some(err) = source {
            chain.push(err.to_string());
            source = err.source();
        }

        Self {
            type_name: Some(std::any::type_name::<E>().to_string()),
            message: error.to_string(),
            chain,
            backtrace: None,
        }
    }

    /// Capture an `anyhow::Error`, including its backtrace when one was recorded.
    pub fn from_anyhow(error: &anyhow::Error) -> Self {
        let chain = error.chain().skip(1).map(|e| e.to_string()).collect();
        let backtrace = error.backtrace();
        let backtrace = match backtrace.status() {
            std::backtrace::BacktraceStatus::Captured => Some(backtrace.to_string()),
            _ => None,
        };

        Self {
            type_name: None,
            message: error.to_string(),
            chain,
            backtrace,
        }
    }

    /// Attach a backtrace.
    pub fn with_backtrace(mut self, backtrace: impl Into<String>) -> Self {
        self.backtrace = Some(backtrace.into());
        self
    }
}

/// A loaded component of the reporting application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyRef {
    pub name: String,
    pub version: String,
}

impl AssemblyRef {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// One key/value line of system information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SysInfoEntry {
    pub key: String,
    pub value: String,
}

/// A named group of system information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SysInfoResult {
    pub name: String,
    pub entries: Vec<SysInfoEntry>,
}

impl SysInfoResult {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Append an entry, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.entries.push(SysInfoEntry {
            key: key.into(),
            value: value.to_string(),
        });
        self
    }
}

/// Everything needed to build and deliver one report session.
#[derive(Debug, Clone)]
pub struct ReportInfo {
    /// Reporter settings (identity, contact, send methods)
    pub settings: ReporterSettings,
    /// Exceptions being reported, main exception first
    pub exceptions: Vec<ExceptionInfo>,
    /// Loaded components to list in the report
    pub assemblies: Vec<AssemblyRef>,
    /// Text typed by the user; set before every report build
    pub user_explanation: String,
    /// When the exception occurred
    pub exception_date: DateTime<Local>,
    /// Identifier of this reporting session
    pub session_id: String,
}

impl ReportInfo {
    /// Create a new report session for the given exceptions.
    pub fn new(settings: ReporterSettings, exceptions: Vec<ExceptionInfo>) -> Self {
        let host = AssemblyRef::new(settings.app_name.clone(), settings.app_version.clone());

        Self {
            settings,
            exceptions,
            assemblies: vec![host],
            user_explanation: String::new(),
            exception_date: Local::now(),
            session_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Add loaded components after the host executable.
    pub fn with_assemblies(mut self, assemblies: impl IntoIterator<Item = AssemblyRef>) -> Self {
        self.assemblies.extend(assemblies);
        self
    }

    /// The first (main) exception, if any.
    pub fn main_exception(&self) -> Option<&ExceptionInfo> {
        self.exceptions.first()
    }

    /// Title used for the report and mail subject.
    pub fn title(&self) -> String {
        if self.settings.title_text.is_empty() {
            format!("{} Exception Report", self.settings.app_name)
        } else {
            self.settings.title_text.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug, thiserror::Error)]
    #[error("outer failure")]
    struct Outer {
        #[source]
        inner: io::Error,
    }

    #[test]
    fn test_exception_from_error_walks_chain() {
        let err = Outer {
            inner: io::Error::other("inner failure"),
        };
        let info = ExceptionInfo::from_error(&err);

        assert_eq!(info.message, "outer failure");
        assert_eq!(info.chain, vec!["inner failure".to_string()]);
        assert!(info.type_name.unwrap().ends_with("Outer"));
    }

    #[test]
    fn test_exception_from_anyhow() {
        let err = anyhow::anyhow!("root cause").context("while saving");
        let info = ExceptionInfo::from_anyhow(&err);

        assert_eq!(info.message, "while saving");
        assert_eq!(info.chain, vec!["root cause".to_string()]);
    }

    #[test]
    fn test_report_info_lists_host_first() {
        let mut settings = ReporterSettings::default();
        settings.app_name = "Widget".to_string();
        settings.app_version = "2.1.0".to_string();

        let info = ReportInfo::new(settings, vec![ExceptionInfo::new("boom")])
            .with_assemblies([AssemblyRef::new("serde", "1.0")]);

        assert_eq!(info.assemblies[0], AssemblyRef::new("Widget", "2.1.0"));
        assert_eq!(info.assemblies.len(), 2);
        assert_eq!(info.main_exception().unwrap().message, "boom");
        assert_eq!(info.title(), "Widget Exception Report");
    }

    #[test]
    fn test_legacy_default_is_mapi() {
        assert_eq!(LegacyMailMethod::default(), LegacyMailMethod::SimpleMapi);
        assert_eq!(ReportSendMethod::default(), ReportSendMethod::None);
    }
}
