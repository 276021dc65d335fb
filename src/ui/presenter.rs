//! The report presenter: every user-invokable operation of the report dialog.

use super::view::ReportView;
use crate::core::config::ReporterSettings;
use crate::core::error::Error;
use crate::core::reporting::format_error_for_log;
use crate::core::types::{DeliveryChannel, ReportInfo, SysInfoResult};
use crate::delivery::{DeliveryDispatcher, HttpWebServiceSender, MailClientSender};
use crate::platform::{Clipboard, CommandClipboard, Launcher, SystemLauncher};
use crate::report::{ExceptionReport, ReportGenerator};
use std::path::Path;
use std::sync::Arc;

/// Calls `set_progress_complete_state` when dropped, including on unwind.
struct ProgressBracket<'a, V: ReportView> {
    view: &'a V,
}

impl<'a, V: ReportView> ProgressBracket<'a, V> {
    fn enter(view: &'a V) -> Self {
        view.set_in_progress_state();
        Self { view }
    }
}

impl<V: ReportView> Drop for ProgressBracket<'_, V> {
    fn drop(&mut self) {
        self.view.set_progress_complete_state();
    }
}

/// Collaborators the presenter drives.
pub struct PresenterServices {
    pub generator: ReportGenerator,
    pub dispatcher: DeliveryDispatcher,
    pub clipboard: Box<dyn Clipboard>,
    pub launcher: Box<dyn Launcher>,
}

impl PresenterServices {
    /// Platform implementations for every collaborator.
    pub fn system(settings: &ReporterSettings) -> Self {
        let dispatcher = DeliveryDispatcher::new(
            Box::new(MailClientSender::new(
                settings.email_report_address.clone(),
                Box::new(SystemLauncher::new()),
            )),
            Box::new(HttpWebServiceSender::from_settings(settings)),
        );

        Self {
            generator: ReportGenerator::new(),
            dispatcher,
            clipboard: Box::new(CommandClipboard::new()),
            launcher: Box::new(SystemLauncher::new()),
        }
    }
}

/// Orchestrates report generation and delivery for one session.
pub struct ReportPresenter<V: ReportView> {
    view: V,
    info: ReportInfo,
    generator: ReportGenerator,
    dispatcher: DeliveryDispatcher,
    clipboard: Box<dyn Clipboard>,
    launcher: Box<dyn Launcher>,
}

impl<V: ReportView> ReportPresenter<V> {
    pub fn new(view: V, info: ReportInfo, services: PresenterServices) -> Self {
        Self {
            view,
            info,
            generator: services.generator,
            dispatcher: services.dispatcher,
            clipboard: services.clipboard,
            launcher: services.launcher,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn report_info(&self) -> &ReportInfo {
        &self.info
    }

    /// Capture the latest user explanation and build a fresh report.
    pub fn create_exception_report(&mut self) -> ExceptionReport {
        self.info.user_explanation = self.view.user_explanation();
        self.generator.create_exception_report(&self.info)
    }

    /// Build the report and write it as text to `path`.
    ///
    /// An empty or missing path does nothing. Returns whether the file was written.
    pub fn save_report_to_file(&mut self, path: Option<&Path>) -> bool {
        let path = match path {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => return false,
        };

        let report = self.create_exception_report();
        match std::fs::write(path, report.as_str()) {
            Ok(()) => {
                log::info!("Report saved to {}", path.display());
                true
            }
            Err(e) => {
                let err = Error::file_write(path, e);
                log::error!("{}", format_error_for_log(&err));
                self.view.show_error(&err.to_string(), Some(&err));
                false
            }
        }
    }

    /// Send the report through the configured channel.
    pub fn send_report(&mut self) -> Option<DeliveryChannel> {
        self.info.user_explanation = self.view.user_explanation();
        self.dispatcher
            .send_report(&self.info, &mut self.generator, &self.view)
    }

    pub fn copy_report_to_clipboard(&mut self) {
        let report = self.create_exception_report();
        self.clipboard.copy_to(report.as_str());
        self.view
            .set_status_message(&format!("{} copied to clipboard", report.title()));
    }

    /// Flip between the summary and full detail views.
    pub fn toggle_detail(&self) {
        let show_full = !self.view.show_full_detail();
        self.view.set_show_full_detail(show_full);
        self.view.render_detail(show_full);
    }

    pub fn get_sys_info_results(&mut self) -> Arc<Vec<SysInfoResult>> {
        self.generator.get_or_fetch_sys_info_results()
    }

    /// Open the mail client addressed to the configured contact.
    pub fn send_contact_email(&self) {
        let target = format!("mailto:{}", self.info.settings.contact_email.trim());
        self.launch(&target);
    }

    pub fn navigate_to_website(&self) {
        let target = self.info.settings.website_url.trim().to_string();
        self.launch(&target);
    }

    fn launch(&self, target: &str) {
        if let Err(e) = self.launcher.launch(target) {
            log::warn!("{}", format_error_for_log(&e));
            self.view
                .show_error(&format!("Unable to open '{}'", target), Some(&e));
        }
    }

    /// Fill the exception, assemblies and (where supported) system information views.
    pub fn populate_report(&mut self) {
        let _bracket = ProgressBracket::enter(&self.view);

        self.view.populate_exception_tab(&self.info.exceptions);
        self.view.populate_assemblies_tab(&self.info.assemblies);

        if self.info.settings.show_sysinfo_tab && self.generator.sys_info_supported() {
            let results = self.generator.get_or_fetch_sys_info_results();
            self.view.populate_sys_info_tab(&results);
        } else {
            log::debug!("System information view skipped");
        }
    }

    /// End the session, releasing the generator's resources.
    pub fn close(mut self) {
        self.generator.dispose();
        log::debug!("Report session {} closed", self.info.session_id);
    }
}

impl<V: ReportView> Drop for ReportPresenter<V> {
    fn drop(&mut self) {
        self.generator.dispose();
    }
}
