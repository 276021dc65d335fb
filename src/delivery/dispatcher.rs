//! Routes one send request to exactly one channel.

use super::resolve::resolve_send_method;
use super::{MailSender, WebServiceSender};
use crate::core::error::Error;
use crate::core::reporting::format_error_for_log;
use crate::core::types::{DeliveryChannel, ReportInfo};
use crate::report::ReportGenerator;
use crate::ui::view::ReportView;

const SMTP_FAILURE: &str = "Unable to send email using SMTP";
const WEB_SERVICE_FAILURE: &str = "Unable to send the report to the web service";
const MAPI_FAILURE: &str = "Unable to send email using the mail client. \
     Please create an email manually and paste the report into it \
     (use Copy or Save to get the report text).";
const MISSING_ADDRESS: &str = "Email report address is not set";

/// Fires the native mail client terminal state when dropped.
struct EmailCompletion<'a, V: ReportView> {
    view: &'a V,
    success: bool,
}

impl<'a, V: ReportView> EmailCompletion<'a, V> {
    fn arm(view: &'a V) -> Self {
        Self {
            view,
            success: false,
        }
    }

    fn succeed(&mut self) {
        self.success = true;
    }
}

impl<V: ReportView> Drop for EmailCompletion<'_, V> {
    fn drop(&mut self) {
        self.view.set_email_completed_state(self.success, "");
    }
}

/// Delivery dispatcher holding the channel senders.
pub struct DeliveryDispatcher {
    mail: Box<dyn MailSender>,
    web_service: Box<dyn WebServiceSender>,
}

impl DeliveryDispatcher {
    pub fn new(mail: Box<dyn MailSender>, web_service: Box<dyn WebServiceSender>) -> Self {
        Self { mail, web_service }
    }

    /// Build the report and send it through the configured channel.
    ///
    /// Returns the channel used, or `None` when no send method is configured.
    /// In that case nothing is sent and the view is left untouched.
    pub fn send_report<V: ReportView>(
        &self,
        info: &ReportInfo,
        generator: &mut ReportGenerator,
        view: &V,
    ) -> Option<DeliveryChannel> {
        let settings = &info.settings;
        let channel = resolve_send_method(settings.send_method, settings.mail_method);

        match channel {
            Some(DeliveryChannel::WebService) => self.send_web_service(info, generator, view),
            Some(DeliveryChannel::Smtp) => self.send_smtp(info, generator, view),
            Some(DeliveryChannel::Mapi) => self.send_mapi(info, generator, view),
            None => log::debug!(
                "No send method resolved (send_method={:?}, mail_method={:?})",
                settings.send_method,
                settings.mail_method
            ),
        }

        channel
    }

    fn send_smtp<V: ReportView>(&self, info: &ReportInfo, generator: &mut ReportGenerator, view: &V) {
        view.set_progress_message(&format!(
            "Sending email via SMTP to {}...",
            info.settings.smtp.server
        ));
        view.set_email_button_enabled(false);
        view.set_progress_bar_visible(true);

        let report = generator.create_exception_report(info);
        log::info!("Sending report via SMTP");

        // The sender surfaces its own failures; this catches the ones it did not.
        if let Err(e) = self.mail.send_smtp(&report, view) {
            backstop(view, DeliveryChannel::Smtp, SMTP_FAILURE, &e);
        }
    }

    fn send_web_service<V: ReportView>(
        &self,
        info: &ReportInfo,
        generator: &mut ReportGenerator,
        view: &V,
    ) {
        view.set_progress_message(&format!(
            "Connecting to {}...",
            info.settings.web_service_url
        ));
        view.set_email_button_enabled(false);

        let report = generator.create_exception_report(info);
        log::info!("Sending report to web service");

        if let Err(e) = self.web_service.send(&report, view) {
            backstop(view, DeliveryChannel::WebService, WEB_SERVICE_FAILURE, &e);
        }
    }

    fn send_mapi<V: ReportView>(&self, info: &ReportInfo, generator: &mut ReportGenerator, view: &V) {
        let mut completion = EmailCompletion::arm(view);

        if info.settings.email_report_address.trim().is_empty() {
            let err = Error::MissingContactAddress;
            log::warn!("{}", format_error_for_log(&err));
            view.show_error(MISSING_ADDRESS, Some(&err));
            return;
        }

        view.set_progress_message("Launching email program...");
        view.set_email_button_enabled(false);

        let report = generator.create_exception_report(info);
        log::info!("Handing report to the mail client");

        match self.mail.send_mapi(&report) {
            Ok(()) => completion.succeed(),
            Err(e) => {
                log::error!("MAPI delivery failed: {}", format_error_for_log(&e));
                view.show_error(MAPI_FAILURE, Some(&e));
            }
        }
    }
}

fn backstop<V: ReportView>(view: &V, channel: DeliveryChannel, message: &str, err: &Error) {
    log::error!("{} delivery failed: {}", channel, format_error_for_log(err));
    view.completed(false);
    view.show_error(message, Some(err));
}
