//! Terminal display surface used by the command-line binary.

use super::view::ReportView;
use crate::core::error::Error;
use crate::core::reporting::format_error_for_user;
use crate::core::types::{AssemblyRef, ExceptionInfo, SysInfoResult};
use crate::delivery::SendEvent;
use std::cell::Cell;

/// Writes state transitions to the log and errors to stderr.
pub struct ConsoleView {
    explanation: String,
    full_detail: Cell<bool>,
    outcome: Cell<Option<bool>>,
    errors: Cell<usize>,
}

impl ConsoleView {
    pub fn new(explanation: impl Into<String>, full_detail: bool) -> Self {
        Self {
            explanation: explanation.into(),
            full_detail: Cell::new(full_detail),
            outcome: Cell::new(None),
            errors: Cell::new(0),
        }
    }

    /// Outcome of the last send attempt, if one finished.
    pub fn outcome(&self) -> Option<bool> {
        self.outcome.get()
    }

    /// Number of errors shown so far.
    pub fn error_count(&self) -> usize {
        self.errors.get()
    }
}

impl SendEvent for ConsoleView {
    fn completed(&self, success: bool) {
        self.outcome.set(Some(success));
        if success {
            log::info!("Report sent");
        } else {
            log::warn!("Report was not sent");
        }
    }

    fn show_error(&self, message: &str, cause: Option<&Error>) {
        self.errors.set(self.errors.get() + 1);
        eprintln!("{}", message);
        if let Some(cause) = cause {
            eprintln!();
            eprint!("{}", format_error_for_user(cause));
        }
    }
}

impl ReportView for ConsoleView {
    fn user_explanation(&self) -> String {
        self.explanation.clone()
    }

    fn set_progress_message(&self, text: &str) {
        if !text.is_empty() {
            log::info!("{}", text);
        }
    }

    fn set_email_button_enabled(&self, enabled: bool) {
        log::trace!("Send enabled: {}", enabled);
    }

    fn set_progress_bar_visible(&self, visible: bool) {
        log::trace!("Progress indicator visible: {}", visible);
    }

    fn set_email_completed_state(&self, success: bool, message: &str) {
        self.outcome.set(Some(success));
        if success {
            log::info!("Report handed to the mail client");
        }
        if !message.is_empty() {
            log::info!("{}", message);
        }
    }

    fn set_in_progress_state(&self) {
        log::debug!("Loading report details...");
    }

    fn set_progress_complete_state(&self) {
        log::debug!("Report details loaded");
    }

    fn populate_exception_tab(&self, exceptions: &[ExceptionInfo]) {
        log::debug!("{} exception(s) in report", exceptions.len());
    }

    fn populate_assemblies_tab(&self, assemblies: &[AssemblyRef]) {
        log::debug!("{} component(s) in report", assemblies.len());
    }

    fn populate_sys_info_tab(&self, results: &[SysInfoResult]) {
        log::debug!("{} system information group(s) in report", results.len());
    }

    fn show_full_detail(&self) -> bool {
        self.full_detail.get()
    }

    fn set_show_full_detail(&self, show: bool) {
        self.full_detail.set(show);
    }

    fn render_detail(&self, show_full: bool) {
        log::debug!(
            "Showing {} view",
            if show_full { "full detail" } else { "summary" }
        );
    }

    fn set_status_message(&self, text: &str) {
        println!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_outcome_and_errors() {
        let view = ConsoleView::new("clicked export", false);
        assert_eq!(view.outcome(), None);
        assert_eq!(view.user_explanation(), "clicked export");

        view.show_error("Unable to send", Some(&Error::MissingContactAddress));
        view.set_email_completed_state(false, "");

        assert_eq!(view.outcome(), Some(false));
        assert_eq!(view.error_count(), 1);
    }

    #[test]
    fn test_detail_flag_is_owned_by_view() {
        let view = ConsoleView::new("", true);
        view.set_show_full_detail(false);
        assert!(!view.show_full_detail());
    }
}
