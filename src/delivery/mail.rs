//! Native mail client channel.

use super::{MailSender, SendEvent};
use crate::core::error::{Error, Result};
use crate::platform::Launcher;
use crate::report::ExceptionReport;
use url::form_urlencoded;

/// Longest `mailto:` URI handed to the mail client, encoding included.
pub const MAX_MAILTO_URI: usize = 2000;

const TRUNCATION_NOTE: &str = "\n\n[Report truncated. Save or copy the full report and attach it.]";

/// Percent-encode a `mailto:` header value (spaces as `%20`, not `+`).
fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Encode `body`, cutting it at a character boundary when its encoded form
/// exceeds `budget` bytes.
fn encode_body(body: &str, budget: usize) -> String {
    let encoded = encode(body);
    if encoded.len() <= budget {
        return encoded;
    }

    let note = encode(TRUNCATION_NOTE);
    let budget = budget.saturating_sub(note.len());
    let mut out = String::with_capacity(budget + note.len());
    let mut buf = [0u8; 4];
    for ch in body.chars() {
        let piece = encode(ch.encode_utf8(&mut buf));
        if out.len() + piece.len() > budget {
            break;
        }
        out.push_str(&piece);
    }
    out.push_str(&note);
    out
}

/// Build a `mailto:` URI with subject and body.
///
/// The body is truncated so the URI stays within [`MAX_MAILTO_URI`], unless
/// the recipient and subject alone already exceed it.
pub fn mailto_uri(recipient: &str, subject: &str, body: &str) -> String {
    let head = format!("mailto:{}?subject={}&body=", recipient.trim(), encode(subject));
    let body = encode_body(body, MAX_MAILTO_URI.saturating_sub(head.len()));
    format!("{}{}", head, body)
}

/// Opens the user's mail client with the report pre-filled.
pub struct MailClientSender {
    recipient: String,
    launcher: Box<dyn Launcher>,
}

impl MailClientSender {
    pub fn new(recipient: impl Into<String>, launcher: Box<dyn Launcher>) -> Self {
        Self {
            recipient: recipient.into(),
            launcher,
        }
    }
}

impl MailSender for MailClientSender {
    fn send_smtp(&self, _report: &ExceptionReport, _events: &dyn SendEvent) -> Result<()> {
        Err(Error::NotSupported(
            "no SMTP transport is configured for this application".to_string(),
        ))
    }

    fn send_mapi(&self, report: &ExceptionReport) -> Result<()> {
        if self.recipient.trim().is_empty() {
            return Err(Error::MissingContactAddress);
        }

        let uri = mailto_uri(&self.recipient, report.title(), report.as_str());
        self.launcher.launch(&uri)
    }
}
