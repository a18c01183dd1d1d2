use super::{error::FormatError, format::format_money_with, locale::Locale, DigitCount};

use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};

/// One value to format, as read from the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatRequest {
    pub value: f64,
    pub digit_count: DigitCount,
}

/// A request along with its rendered amount.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedRecord {
    pub request: FormatRequest,
    pub formatted: String,
}

/// A request that could not be formatted.
#[derive(Debug, PartialEq)]
pub struct RowError {
    pub request: FormatRequest,
    pub error: FormatError,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to format {} with {} digits: {}",
            self.request.value, self.request.digit_count, self.error
        )
    }
}

/// Format a stream of requests.
/// Formatted records are sent to `formatted_tx` in the order the requests
/// arrive, and errors are streamed on the returned channel as we go.
pub fn process(
    requests: Receiver<FormatRequest>,
    formatted_tx: Sender<FormattedRecord>,
    locale: Locale,
) -> Receiver<RowError> {
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || format_all(requests, formatted_tx, tx, locale));

    rx
}

// Stops early once either receiver is gone, e.g. when the output can't be
// written anymore: nobody is left to read what we'd format.
fn format_all(
    requests: Receiver<FormatRequest>,
    formatted_tx: Sender<FormattedRecord>,
    errors_tx: Sender<RowError>,
    locale: Locale,
) {
    for request in requests {
        let sent = match format_money_with(request.value, request.digit_count, &locale) {
            Ok(formatted) => {
                tracing::trace!(value = request.value, %formatted, "formatted");
                formatted_tx.send(FormattedRecord { request, formatted }).is_ok()
            }
            Err(error) => errors_tx.send(RowError { request, error }).is_ok(),
        };

        if !sent {
            tracing::debug!("receiver disconnected, stopping");
            break;
        }
    }
}
