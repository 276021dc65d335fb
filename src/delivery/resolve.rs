//! Send method resolution across the current and legacy configuration fields.

use crate::core::types::{DeliveryChannel, LegacyMailMethod, ReportSendMethod};

/// Resolve the configured send method to a single channel.
///
/// Branches are evaluated as WebService, then SMTP, then MAPI. The legacy
/// field is read only when `current` selects nothing, and MAPI stays last
/// because the legacy default (`SimpleMapi`) also means "unset".
pub fn resolve_send_method(
    current: ReportSendMethod,
    legacy: LegacyMailMethod,
) -> Option<DeliveryChannel> {
    let legacy_applies = current == ReportSendMethod::None;

    if current == ReportSendMethod::WebService {
        Some(DeliveryChannel::WebService)
    } else if current == ReportSendMethod::Smtp
        || (legacy_applies && legacy == LegacyMailMethod::Smtp)
    {
        Some(DeliveryChannel::Smtp)
    } else if current == ReportSendMethod::SimpleMapi
        || (legacy_applies && legacy == LegacyMailMethod::SimpleMapi)
    {
        Some(DeliveryChannel::Mapi)
    } else {
        None
    }
}
