//! Report delivery channels and dispatch.
//!
//! Three interchangeable channels are supported:
//! - SMTP mail
//! - The native mail client (MAPI-style)
//! - An HTTP web service endpoint

pub mod dispatcher;
pub mod mail;
pub mod resolve;
pub mod web;

pub use dispatcher::DeliveryDispatcher;
pub use mail::MailClientSender;
pub use resolve::resolve_send_method;
pub use web::HttpWebServiceSender;

use crate::core::error::{Error, Result};
use crate::report::ExceptionReport;

/// Outcome sink a channel reports its own progress through.
pub trait SendEvent {
    /// Terminal state of a send attempt.
    fn completed(&self, success: bool);

    /// Present a failure to the user. Must not panic.
    fn show_error(&self, message: &str, cause: Option<&Error>);
}

/// Mail based delivery.
///
/// `send_smtp` reports completion through `events`; an `Err` return means
/// the failure was not surfaced by the sender.
pub trait MailSender {
    fn send_smtp(&self, report: &ExceptionReport, events: &dyn SendEvent) -> Result<()>;

    /// Hand the report to the native mail client.
    fn send_mapi(&self, report: &ExceptionReport) -> Result<()>;
}

/// Web service delivery. Same reporting contract as [`MailSender::send_smtp`].
pub trait WebServiceSender {
    fn send(&self, report: &ExceptionReport, events: &dyn SendEvent) -> Result<()>;
}
