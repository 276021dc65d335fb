//! Plain-text report renderer.

use crate::core::types::{ExceptionInfo, ReportInfo, SysInfoResult};

const RULE_WIDTH: usize = 72;

/// Builds the plain-text form of an exception report.
pub struct ReportTextBuilder<'a> {
    info: &'a ReportInfo,
    sys_info: &'a [SysInfoResult],
}

impl<'a> ReportTextBuilder<'a> {
    pub fn new(info: &'a ReportInfo, sys_info: &'a [SysInfoResult]) -> Self {
        Self { info, sys_info }
    }

    /// Render the complete report.
    pub fn build(&self) -> String {
        let mut out = String::new();

        self.write_header(&mut out);
        self.write_explanation(&mut out);
        self.write_exceptions(&mut out);
        if self.info.settings.show_assemblies_tab {
            self.write_assemblies(&mut out);
        }
        if self.info.settings.show_sysinfo_tab && !self.sys_info.is_empty() {
            self.write_sys_info(&mut out);
        }

        out
    }

    fn write_header(&self, out: &mut String) {
        let settings = &self.info.settings;
        let rule = "=".repeat(RULE_WIDTH);

        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!("  {}\n", self.info.title()));
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!("Application:  {}\n", settings.app_name));
        out.push_str(&format!("Version:      {}\n", settings.app_version));
        if !settings.company_name.is_empty() {
            out.push_str(&format!("Company:      {}\n", settings.company_name));
        }
        out.push_str(&format!(
            "Date/Time:    {}\n",
            self.info.exception_date.format("%Y-%m-%d %H:%M:%S %z")
        ));
        out.push_str(&format!("Session:      {}\n", self.info.session_id));
    }

    fn write_explanation(&self, out: &mut String) {
        let explanation = self.info.user_explanation.trim();
        if explanation.is_empty() {
            return;
        }

        section(out, "User Explanation");
        for line in explanation.lines() {
            out.push_str(&format!("  {}\n", line));
        }
    }

    fn write_exceptions(&self, out: &mut String) {
        section(out, "Exceptions");

        if self.info.exceptions.is_empty() {
            out.push_str("  No exception recorded.\n");
            return;
        }

        for (index, exception) in self.info.exceptions.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            write_exception(out, index + 1, exception);
        }
    }

    fn write_assemblies(&self, out: &mut String) {
        section(out, "Loaded Components");

        let width = self
            .info
            .assemblies
            .iter()
            .map(|a| a.name.len())
            .max()
            .unwrap_or(0);
        for assembly in &self.info.assemblies {
            out.push_str(&format!(
                "  {:<width$}  {}\n",
                assembly.name,
                assembly.version,
                width = width
            ));
        }
    }

    fn write_sys_info(&self, out: &mut String) {
        section(out, "System Information");

        for result in self.sys_info {
            out.push_str(&format!("  {}\n", result.name));
            for entry in &result.entries {
                out.push_str(&format!("    {}: {}\n", entry.key, entry.value));
            }
        }
    }
}

fn section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(&format!("[{}]\n", title));
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
}

fn write_exception(out: &mut String, number: usize, exception: &ExceptionInfo) {
    match &exception.type_name {
        Some(type_name) => out.push_str(&format!("  #{} {}\n", number, type_name)),
        None => out.push_str(&format!("  #{}\n", number)),
    }
    out.push_str(&format!("  Message: {}\n", exception.message));

    for (depth, cause) in exception.chain.iter().enumerate() {
        let indent = "  ".repeat(depth + 2);
        out.push_str(&format!("{}Caused by: {}\n", indent, cause));
    }

    if let Some(backtrace) = &exception.backtrace {
        out.push_str("  Backtrace:\n");
        for line in backtrace.lines() {
            out.push_str(&format!("    {}\n", line));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ReporterSettings;
    use crate::core::types::{AssemblyRef, ExceptionInfo};

    fn sample_info() -> ReportInfo {
        let mut settings = ReporterSettings::default();
        settings.app_name = "Widget".to_string();
        settings.app_version = "1.2.3".to_string();
        settings.company_name = "Acme".to_string();

        let mut exception = ExceptionInfo::new("index out of range");
        exception.chain = vec!["vector was empty".to_string(), "no input".to_string()];

        ReportInfo::new(settings, vec![exception])
            .with_assemblies([AssemblyRef::new("libwidget-core", "0.9.0")])
    }

    #[test]
    fn test_report_sections() {
        let mut info = sample_info();
        info.user_explanation = "Clicked save twice".to_string();
        let sys = vec![SysInfoResult::new("Operating System").with("Name", "Linux")];

        let text = ReportTextBuilder::new(&info, &sys).build();

        assert!(text.contains("Widget Exception Report"));
        assert!(text.contains("Company:      Acme"));
        assert!(text.contains("[User Explanation]\n"));
        assert!(text.contains("  Clicked save twice\n"));
        assert!(text.contains("  Message: index out of range\n"));
        assert!(text.contains("    Caused by: vector was empty\n"));
        assert!(text.contains("      Caused by: no input\n"));
        assert!(text.contains("libwidget-core"));
        assert!(text.contains("    Name: Linux\n"));
    }

    #[test]
    fn test_empty_explanation_and_sysinfo_are_omitted() {
        let info = sample_info();
        let text = ReportTextBuilder::new(&info, &[]).build();

        assert!(!text.contains("[User Explanation]"));
        assert!(!text.contains("[System Information]"));
    }

    #[test]
    fn test_hidden_assemblies_section() {
        let mut info = sample_info();
        info.settings.show_assemblies_tab = false;
        let text = ReportTextBuilder::new(&info, &[]).build();

        assert!(!text.contains("[Loaded Components]"));
    }

    #[test]
    fn test_no_exceptions() {
        let info = ReportInfo::new(ReporterSettings::default(), Vec::new());
        let text = ReportTextBuilder::new(&info, &[]).build();

        assert!(text.contains("No exception recorded."));
    }
}
