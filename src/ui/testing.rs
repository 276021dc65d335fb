//! Recording display surface for tests.

use super::view::ReportView;
use crate::core::error::Error;
use crate::core::types::{AssemblyRef, ExceptionInfo, SysInfoResult};
use crate::delivery::SendEvent;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ViewEvent {
    Error(String),
    Completed(bool),
    ProgressMessage(String),
    EmailButtonEnabled(bool),
    ProgressBarVisible(bool),
    EmailCompleted(bool, String),
    InProgress,
    ProgressComplete,
    ExceptionTab(usize),
    AssembliesTab(usize),
    SysInfoTab(usize),
    RenderDetail(bool),
    Status(String),
}

#[derive(Default)]
pub(crate) struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
    full_detail: AtomicBool,
    explanation: Mutex<String>,
    panic_on_assemblies: bool,
}

impl RecordingView {
    fn push(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }

    /// A view whose assemblies tab panics while rendering.
    pub fn panicking_on_assemblies() -> Self {
        Self {
            panic_on_assemblies: true,
            ..Default::default()
        }
    }

    pub fn set_explanation(&self, text: &str) {
        *self.explanation.lock().unwrap() = text.to_string();
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&ViewEvent) -> bool) -> usize {
        self.events().iter().filter(|e| pred(*e)).count()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Error(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn error_count(&self) -> usize {
        self.errors().len()
    }
}

impl SendEvent for RecordingView {
    fn completed(&self, success: bool) {
        self.push(ViewEvent::Completed(success));
    }

    fn show_error(&self, message: &str, _cause: Option<&Error>) {
        self.push(ViewEvent::Error(message.to_string()));
    }
}

impl ReportView for RecordingView {
    fn user_explanation(&self) -> String {
        self.explanation.lock().unwrap().clone()
    }

    fn set_progress_message(&self, text: &str) {
        self.push(ViewEvent::ProgressMessage(text.to_string()));
    }

    fn set_email_button_enabled(&self, enabled: bool) {
        self.push(ViewEvent::EmailButtonEnabled(enabled));
    }

    fn set_progress_bar_visible(&self, visible: bool) {
        self.push(ViewEvent::ProgressBarVisible(visible));
    }

    fn set_email_completed_state(&self, success: bool, message: &str) {
        self.push(ViewEvent::EmailCompleted(success, message.to_string()));
    }

    fn set_in_progress_state(&self) {
        self.push(ViewEvent::InProgress);
    }

    fn set_progress_complete_state(&self) {
        self.push(ViewEvent::ProgressComplete);
    }

    fn populate_exception_tab(&self, exceptions: &[ExceptionInfo]) {
        self.push(ViewEvent::ExceptionTab(exceptions.len()));
    }

    fn populate_assemblies_tab(&self, assemblies: &[AssemblyRef]) {
        if self.panic_on_assemblies {
            panic!("assemblies tab failed to render");
        }
        self.push(ViewEvent::AssembliesTab(assemblies.len()));
    }

    fn populate_sys_info_tab(&self, results: &[SysInfoResult]) {
        self.push(ViewEvent::SysInfoTab(results.len()));
    }

    fn show_full_detail(&self) -> bool {
        self.full_detail.load(Ordering::SeqCst)
    }

    fn set_show_full_detail(&self, show: bool) {
        self.full_detail.store(show, Ordering::SeqCst);
    }

    fn render_detail(&self, show_full: bool) {
        self.push(ViewEvent::RenderDetail(show_full));
    }

    fn set_status_message(&self, text: &str) {
        self.push(ViewEvent::Status(text.to_string()));
    }
}
