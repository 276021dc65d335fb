//! Exception reporter: assembles a diagnostic report for an unhandled error
//! and delivers it.
//!
//! This crate provides report generation (exception chain, loaded components,
//! system information), send method resolution across current and legacy
//! configuration, delivery through SMTP, the native mail client or a web
//! service, and a presenter that drives any display surface.

pub mod core;
pub mod delivery;
pub mod platform;
pub mod report;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use crate::core::config::Config;
pub use crate::core::error::{Error, Result};
pub use crate::core::types::*;
pub use crate::report::{ExceptionReport, ReportGenerator};
pub use crate::ui::{ReportPresenter, ReportView};
