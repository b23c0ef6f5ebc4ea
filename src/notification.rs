//! Messaging deep links.
//!
//! A summary message is forwarded by building a link of the form
//! `{base_url}/{destination}?text={percent-encoded message}` and handing
//! it to whatever can open URLs on the host.

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};

/// Messaging service used when none is configured.
pub const DEFAULT_MESSAGING_BASE_URL: &str = "https://wa.me";

/// Builds the deep link for `message` addressed to `destination`.
///
/// The destination is trimmed and otherwise used verbatim; its format is
/// not checked. The message is percent-encoded so that spaces, newlines
/// and non-ASCII characters survive the query string.
///
/// # Errors
///
/// Returns `MissingDestination` when the destination is empty after trimming.
///
/// # Examples
///
/// ```
/// use shift_summary::notification::build_deep_link;
///
/// let link = build_deep_link("https://wa.me", " 5491122334455 ", "Pago total: 48000")?;
/// assert_eq!(link, "https://wa.me/5491122334455?text=Pago%20total%3A%2048000");
/// # Ok::<(), shift_summary::error::EngineError>(())
/// ```
pub fn build_deep_link(base_url: &str, destination: &str, message: &str) -> EngineResult<String> {
    let destination = destination.trim();
    if destination.is_empty() {
        return Err(EngineError::MissingDestination);
    }

    Ok(format!(
        "{}/{}?text={}",
        base_url.trim_end_matches('/'),
        destination,
        urlencoding::encode(message)
    ))
}

/// Something that can open a URL on behalf of the user.
pub trait LinkOpener {
    /// Opens `link`, typically in a browser or the messaging app.
    fn open(&self, link: &str) -> EngineResult<()>;
}

/// Opens links with the host's default browser.
///
/// The HTTP server only returns links. This is the hand-off for hosts that
/// embed a [`SummarySession`](crate::session::SummarySession) and want the
/// link opened on the user's machine.
///
/// # Examples
///
/// ```no_run
/// use shift_summary::models::EntryField;
/// use shift_summary::notification::SystemBrowser;
/// use shift_summary::session::SummarySession;
///
/// let mut session = SummarySession::default();
/// session.set_field(0, EntryField::StartTime, "08:00")?;
/// session.set_field(0, EntryField::EndTime, "17:00")?;
/// session.submit()?;
/// session.set_destination("5491122334455");
///
/// let link = session.send_notification(&SystemBrowser)?;
/// println!("opened {link}");
/// # Ok::<(), shift_summary::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&self, link: &str) -> EngineResult<()> {
        debug!(link = %link, "Opening link in system browser");
        webbrowser::open(link).map_err(|e| EngineError::LinkOpenFailed {
            message: e.to_string(),
        })?;
        info!("Notification link opened");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, link: &str) -> EngineResult<()> {
            self.opened.borrow_mut().push(link.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_destination_is_trimmed() {
        let link = build_deep_link(DEFAULT_MESSAGING_BASE_URL, "  +56 9 1234  ", "hola").unwrap();
        assert_eq!(link, "https://wa.me/+56 9 1234?text=hola");
    }

    #[test]
    fn test_message_is_percent_encoded() {
        let link = build_deep_link(
            DEFAULT_MESSAGING_BASE_URL,
            "5491122334455",
            "¡Hola!\nDías totales: 1",
        )
        .unwrap();

        assert_eq!(
            link,
            "https://wa.me/5491122334455?text=%C2%A1Hola%21%0AD%C3%ADas%20totales%3A%201"
        );
    }

    #[test]
    fn test_trailing_slash_on_base_url_is_dropped() {
        let link = build_deep_link("https://example.com/send/", "abc", "x").unwrap();
        assert_eq!(link, "https://example.com/send/abc?text=x");
    }

    #[test]
    fn test_blank_destination_is_rejected() {
        assert!(matches!(
            build_deep_link(DEFAULT_MESSAGING_BASE_URL, "   ", "hola"),
            Err(EngineError::MissingDestination)
        ));
    }

    #[test]
    fn test_opener_receives_link() {
        let opener = RecordingOpener::default();
        let link = build_deep_link(DEFAULT_MESSAGING_BASE_URL, "123", "hola").unwrap();

        opener.open(&link).unwrap();

        assert_eq!(opener.opened.borrow().as_slice(), ["https://wa.me/123?text=hola"]);
    }
}
