//! Summary message formatting.
//!
//! The message is the plain-text body forwarded through the messaging deep
//! link. Figures are printed exactly as the summary carries them, with
//! trailing zeros dropped.

use crate::models::SummaryResult;

/// Sender named in the greeting when none is configured.
pub const DEFAULT_SENDER_NAME: &str = "sebastian";

/// Formats a summary as the notification message, greeting from the default sender.
///
/// # Examples
///
/// ```
/// use shift_summary::calculation::{compute_summary, format_summary_message};
/// use shift_summary::models::{Pricing, ShiftEntry};
///
/// let entries = vec![ShiftEntry::new("", "2026-01-15", "08:00", "17:00")];
/// let summary = compute_summary(&entries, &Pricing::default()).unwrap();
/// let message = format_summary_message(&summary);
///
/// assert!(message.contains("Días totales: 1"));
/// assert!(message.contains("Pago total: 48000"));
/// ```
pub fn format_summary_message(summary: &SummaryResult) -> String {
    format_summary_message_from(DEFAULT_SENDER_NAME, summary)
}

/// Formats a summary as the notification message, greeting from `sender`.
pub fn format_summary_message_from(sender: &str, summary: &SummaryResult) -> String {
    format!(
        "¡Hola! soy {}.\n\nResumen del pago:\nDías totales: {}\nTotal de horas: {}\nPago de transporte: {}\nPago total: {}",
        sender,
        summary.total_days,
        summary.total_hours.normalize(),
        summary.transport_payment.normalize(),
        summary.total_payment.normalize(),
    )
}
