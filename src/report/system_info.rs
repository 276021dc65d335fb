//! System information collection.

use crate::core::error::{Error, Result};
use crate::core::types::SysInfoResult;
use sysinfo::System;

/// Source of system information for a report session.
pub trait SysInfoCollector {
    /// Whether the underlying collection mechanism exists on this platform.
    fn is_supported(&self) -> bool;

    /// Perform the (potentially slow) collection.
    fn collect(&mut self) -> Result<Vec<SysInfoResult>>;

    /// Release any resources held by the collection session.
    fn release(&mut self) {}
}

/// Collector backed by the `sysinfo` crate.
#[derive(Default)]
pub struct SystemInfoCollector {
    system: Option<System>,
}

impl SystemInfoCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SysInfoCollector for SystemInfoCollector {
    fn is_supported(&self) -> bool {
        sysinfo::IS_SUPPORTED_SYSTEM
    }

    fn collect(&mut self) -> Result<Vec<SysInfoResult>> {
        if !self.is_supported() {
            return Err(Error::NotSupported(
                "system information is unavailable on this platform".to_string(),
            ));
        }

        let system = self.system.get_or_insert_with(System::new_all);
        system.refresh_all();

        let unknown = || "Unknown".to_string();

        let os = SysInfoResult::new("Operating System")
            .with("Name", System::name().unwrap_or_else(unknown))
            .with("Version", System::long_os_version().unwrap_or_else(unknown))
            .with("Kernel", System::kernel_version().unwrap_or_else(unknown))
            .with("Architecture", std::env::consts::ARCH)
            .with("Uptime (s)", System::uptime());

        let cpu_brand = system
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(unknown);
        let processor = SysInfoResult::new("Processor")
            .with("Name", cpu_brand)
            .with("Logical Cores", system.cpus().len());

        let memory = SysInfoResult::new("Memory")
            .with("Total (MB)", system.total_memory() / (1024 * 1024))
            .with("Used (MB)", system.used_memory() / (1024 * 1024))
            .with("Available (MB)", system.available_memory() / (1024 * 1024));

        let host = SysInfoResult::new("Computer")
            .with("Host Name", System::host_name().unwrap_or_else(unknown));

        Ok(vec![os, processor, memory, host])
    }

    fn release(&mut self) {
        if self.system.take().is_some() {
            log::trace!("Released system information session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_on_supported_platform() {
        let mut collector = SystemInfoCollector::new();
        if !collector.is_supported() {
            assert!(collector.collect().is_err());
            return;
        }

        let results = collector.collect().unwrap();
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Operating System", "Processor", "Memory", "Computer"]);

        collector.release();
        collector.release();
        assert!(collector.system.is_none());
    }
}
