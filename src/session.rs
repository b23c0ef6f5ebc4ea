//! Form session state.
//!
//! A [`SummarySession`] owns everything one user's form needs between
//! interactions: the entry rows, the last computed summary, whether the
//! summary view is showing, and the destination for the notification.

use tracing::{info, warn};

use crate::calculation::{compute_summary, format_summary_message_from};
use crate::config::MessagingConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{EntryField, Pricing, ShiftEntry, SummaryResult};
use crate::notification::{LinkOpener, build_deep_link};
use crate::store::ShiftStore;

/// View-model for one form session.
///
/// # Example
///
/// ```
/// use shift_summary::session::SummarySession;
/// use shift_summary::models::EntryField;
/// use rust_decimal::Decimal;
///
/// let mut session = SummarySession::default();
/// session.set_field(0, EntryField::StartTime, "08:00")?;
/// session.set_field(0, EntryField::EndTime, "17:00")?;
///
/// let summary = session.submit()?;
/// assert_eq!(summary.total_payment, Decimal::from(48000));
/// assert!(session.is_summary_visible());
/// # Ok::<(), shift_summary::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SummarySession {
    store: ShiftStore,
    pricing: Pricing,
    messaging: MessagingConfig,
    summary: Option<SummaryResult>,
    summary_visible: bool,
    destination: String,
}

impl Default for SummarySession {
    fn default() -> Self {
        Self::new(Pricing::default(), MessagingConfig::default())
    }
}

impl SummarySession {
    /// Starts a session with one blank row.
    pub fn new(pricing: Pricing, messaging: MessagingConfig) -> Self {
        Self::with_store(ShiftStore::new(), pricing, messaging)
    }

    /// Starts a session over existing rows.
    pub fn with_store(store: ShiftStore, pricing: Pricing, messaging: MessagingConfig) -> Self {
        Self {
            store,
            pricing,
            messaging,
            summary: None,
            summary_visible: false,
            destination: String::new(),
        }
    }

    /// Returns the entry rows.
    pub fn entries(&self) -> &[ShiftEntry] {
        self.store.entries()
    }

    /// Returns the pricing in use.
    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    /// Adds a blank row at the end.
    pub fn add_row(&mut self) {
        self.store.add_blank();
    }

    /// Removes the last row. The final remaining row cannot be removed.
    pub fn remove_last_row(&mut self) -> EngineResult<()> {
        self.store.remove_last().map(|_| ())
    }

    /// Edits one field of the row at `index`.
    pub fn set_field(
        &mut self,
        index: usize,
        field: EntryField,
        value: impl Into<String>,
    ) -> EngineResult<()> {
        self.store.set_field(index, field, value)
    }

    /// Replaces the row at `index`.
    pub fn update_row(&mut self, index: usize, entry: ShiftEntry) -> EngineResult<()> {
        self.store.update(index, entry)
    }

    /// Sets the destination identifier typed by the user.
    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = destination.into();
    }

    /// Returns the destination identifier as typed.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Aggregates the current rows and shows the summary view.
    ///
    /// On error the previous summary and visibility are left unchanged.
    pub fn submit(&mut self) -> EngineResult<&SummaryResult> {
        let summary = compute_summary(self.store.entries(), &self.pricing).inspect_err(|err| {
            warn!(error = %err, "Summary submission rejected");
        })?;

        info!(
            total_days = summary.total_days,
            total_minutes = summary.total_minutes,
            total_payment = %summary.total_payment,
            "Summary computed"
        );

        self.summary_visible = true;
        Ok(&*self.summary.insert(summary))
    }

    /// Returns the last computed summary, if any.
    pub fn summary(&self) -> Option<&SummaryResult> {
        self.summary.as_ref()
    }

    /// Returns true while the summary view is open.
    pub fn is_summary_visible(&self) -> bool {
        self.summary_visible
    }

    /// Hides the summary view. The summary itself is kept.
    pub fn close_summary(&mut self) {
        self.summary_visible = false;
    }

    /// Formats the last summary as the notification message.
    pub fn summary_message(&self) -> EngineResult<String> {
        let summary = self.summary.as_ref().ok_or(EngineError::NoSummary)?;
        Ok(format_summary_message_from(
            &self.messaging.sender_name,
            summary,
        ))
    }

    /// Builds the deep link carrying the last summary to the destination.
    pub fn notification_link(&self) -> EngineResult<String> {
        let message = self.summary_message()?;
        build_deep_link(&self.messaging.base_url, &self.destination, &message)
    }

    /// Builds the deep link and hands it to `opener`. Returns the link.
    pub fn send_notification(&self, opener: &dyn LinkOpener) -> EngineResult<String> {
        let link = self.notification_link()?;
        opener.open(&link)?;
        info!(destination = %self.destination.trim(), "Notification link dispatched");
        Ok(link)
    }
}
