//! Display surface driven by the report presenter.

use crate::core::types::{AssemblyRef, ExceptionInfo, SysInfoResult};
use crate::delivery::SendEvent;

/// Everything the presenter asks of a display surface.
///
/// The surface owns its state; the presenter issues transitions and only
/// reads back the user explanation and the detail flag.
pub trait ReportView: SendEvent {
    /// Text the user typed to explain what they were doing.
    fn user_explanation(&self) -> String;

    fn set_progress_message(&self, text: &str);
    fn set_email_button_enabled(&self, enabled: bool);
    fn set_progress_bar_visible(&self, visible: bool);

    /// Terminal state of a native mail client send attempt.
    fn set_email_completed_state(&self, success: bool, message: &str);

    /// Bracket a long operation. Both calls must tolerate the bracketed work failing.
    fn set_in_progress_state(&self);
    fn set_progress_complete_state(&self);

    fn populate_exception_tab(&self, exceptions: &[ExceptionInfo]);
    fn populate_assemblies_tab(&self, assemblies: &[AssemblyRef]);
    fn populate_sys_info_tab(&self, results: &[SysInfoResult]);

    fn show_full_detail(&self) -> bool;
    fn set_show_full_detail(&self, show: bool);
    fn render_detail(&self, show_full: bool);

    /// Short status line (e.g. after copying to the clipboard).
    fn set_status_message(&self, text: &str);
}
