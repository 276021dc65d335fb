//! Report generation with a per-session system information cache.

use super::system_info::{SysInfoCollector, SystemInfoCollector};
use super::text::ReportTextBuilder;
use crate::core::reporting::format_error_for_log;
use crate::core::types::{ReportInfo, SysInfoResult};
use std::fmt;
use std::sync::Arc;

/// An immutable, rendered exception report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionReport {
    title: String,
    text: String,
}

impl ExceptionReport {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ExceptionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Builds reports and owns the system information cache for one session.
pub struct ReportGenerator {
    collector: Box<dyn SysInfoCollector>,
    sys_info: Option<Arc<Vec<SysInfoResult>>>,
    disposed: bool,
}

impl ReportGenerator {
    /// Create a generator backed by the platform system information collector.
    pub fn new() -> Self {
        Self::with_collector(Box::new(SystemInfoCollector::new()))
    }

    pub fn with_collector(collector: Box<dyn SysInfoCollector>) -> Self {
        Self {
            collector,
            sys_info: None,
            disposed: false,
        }
    }

    /// Whether system information can be collected on this platform.
    pub fn sys_info_supported(&self) -> bool {
        self.collector.is_supported()
    }

    /// Build a report from the current contents of `info`.
    pub fn create_exception_report(&mut self, info: &ReportInfo) -> ExceptionReport {
        let sys_info = if info.settings.show_sysinfo_tab {
            self.get_or_fetch_sys_info_results()
        } else {
            Arc::new(Vec::new())
        };

        ExceptionReport {
            title: info.title(),
            text: ReportTextBuilder::new(info, &sys_info).build(),
        }
    }

    /// Return the cached system information, collecting it on first use.
    ///
    /// Collection is attempted at most once per generator; a failed or
    /// unsupported collection caches an empty set.
    pub fn get_or_fetch_sys_info_results(&mut self) -> Arc<Vec<SysInfoResult>> {
        if let Some(cached) = &self.sys_info {
            return Arc::clone(cached);
        }

        let results = if self.disposed || !self.collector.is_supported() {
            log::debug!("System information collection skipped");
            Vec::new()
        } else {
            log::debug!("Collecting system information");
            match self.collector.collect() {
                Ok(results) => results,
                Err(e) => {
                    log::warn!("System information unavailable: {}", format_error_for_log(&e));
                    Vec::new()
                }
            }
        };

        let results = Arc::new(results);
        self.sys_info = Some(Arc::clone(&results));
        results
    }

    /// Release the collection session. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.collector.release();
        log::debug!("Report generator disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::config::ReporterSettings;
    use crate::core::error::{Error, Result};
    use crate::core::types::ExceptionInfo;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Collector double that counts calls.
    #[derive(Default)]
    pub(crate) struct CountingCollector {
        pub collects: Arc<AtomicUsize>,
        pub releases: Arc<AtomicUsize>,
        pub unsupported: bool,
        pub fail: bool,
    }

    impl SysInfoCollector for CountingCollector {
        fn is_supported(&self) -> bool {
            !self.unsupported
        }

        fn collect(&mut self) -> Result<Vec<SysInfoResult>> {
            self.collects.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(Error::SysInfo("query failed".to_string()));
            }
            Ok(vec![SysInfoResult::new("Operating System").with("Name", "TestOS")])
        }

        fn release(&mut self) {
            self.releases.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn info() -> ReportInfo {
        ReportInfo::new(
            ReporterSettings::default(),
            vec![ExceptionInfo::new("null reference")],
        )
    }

    #[test]
    fn test_sys_info_collected_once() {
        let collector = CountingCollector::default();
        let collects = Arc::clone(&collector.collects);
        let mut generator = ReportGenerator::with_collector(Box::new(collector));

        let first = generator.get_or_fetch_sys_info_results();
        let second = generator.get_or_fetch_sys_info_results();
        let _ = generator.create_exception_report(&info());
        let third = generator.get_or_fetch_sys_info_results();

        assert_eq!(collects.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &third));
        assert_eq!(first[0].entries[0].value, "TestOS");
    }

    #[test]
    fn test_failed_collection_is_not_retried() {
        let collector = CountingCollector {
            fail: true,
            ..Default::default()
        };
        let collects = Arc::clone(&collector.collects);
        let mut generator = ReportGenerator::with_collector(Box::new(collector));

        assert!(generator.get_or_fetch_sys_info_results().is_empty());
        assert!(generator.get_or_fetch_sys_info_results().is_empty());
        assert_eq!(collects.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsupported_platform_skips_collection() {
        let collector = CountingCollector {
            unsupported: true,
            ..Default::default()
        };
        let collects = Arc::clone(&collector.collects);
        let mut generator = ReportGenerator::with_collector(Box::new(collector));

        assert!(!generator.sys_info_supported());
        assert!(generator.get_or_fetch_sys_info_results().is_empty());
        assert_eq!(collects.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_report_is_deterministic() {
        let mut generator = ReportGenerator::with_collector(Box::new(CountingCollector::default()));
        let mut info = info();
        info.user_explanation = "opened a file".to_string();

        let first = generator.create_exception_report(&info);
        let second = generator.create_exception_report(&info);
        assert_eq!(first.as_str(), second.as_str());
        assert!(first.as_str().contains("TestOS"));

        info.user_explanation = "opened two files".to_string();
        let third = generator.create_exception_report(&info);
        assert_ne!(first.as_str(), third.as_str());
    }

    #[test]
    fn test_sysinfo_hidden_does_not_collect() {
        let collector = CountingCollector::default();
        let collects = Arc::clone(&collector.collects);
        let mut generator = ReportGenerator::with_collector(Box::new(collector));
        let mut info = info();
        info.settings.show_sysinfo_tab = false;

        let report = generator.create_exception_report(&info);
        assert!(!report.as_str().contains("TestOS"));
        assert_eq!(collects.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let collector = CountingCollector::default();
        let releases = Arc::clone(&collector.releases);
        let mut generator = ReportGenerator::with_collector(Box::new(collector));

        generator.dispose();
        generator.dispose();
        assert!(generator.is_disposed());
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }
}
