//! Report generation.
//!
//! This module provides:
//! - Plain-text report rendering
//! - System information collection
//! - The per-session report generator and its cache

pub mod generator;
pub mod system_info;
pub mod text;

pub use generator::{ExceptionReport, ReportGenerator};
pub use system_info::{SysInfoCollector, SystemInfoCollector};
pub use text::ReportTextBuilder;
