use crate::money::{process::FormatRequest, DigitCount};

use serde::Deserialize;
use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug, PartialEq)]
pub enum Error {
    Csv(String),    // CSV is malformed, or a cell isn't a number
    Format(String), // Data format is incorrect
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<&'static str> for Error {
    fn from(err: &'static str) -> Self {
        Self::Format(err.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv(msg) => write!(f, "malformed CSV: {}", msg),
            Self::Format(msg) => write!(f, "invalid record: {}", msg),
        }
    }
}

// Bad rows don't abort the whole batch: they are sent on the error channel,
// and we keep reading. A price list with one typo should still be rendered.
pub fn parse(
    input_stream: (impl std::io::Read + Send + 'static),
    default_digit_count: DigitCount,
) -> (Receiver<FormatRequest>, Receiver<Error>) {
    let (request_tx, request_rx): (Sender<FormatRequest>, Receiver<FormatRequest>) =
        mpsc::channel();
    let (error_tx, error_rx): (Sender<Error>, Receiver<Error>) = mpsc::channel();

    let buffered = std::io::BufReader::new(input_stream);
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(buffered);

    // Moving to a new thread so we can start formatting immediately.
    std::thread::spawn(move || read_all(reader, default_digit_count, request_tx, error_tx));

    (request_rx, error_rx)
}

// Stops early once either receiver is gone: the rest of the pipeline has
// shut down, so there's no point reading any further.
fn read_all(
    mut reader: csv::Reader<impl std::io::Read>,
    default_digit_count: DigitCount,
    request_tx: Sender<FormatRequest>,
    error_tx: Sender<Error>,
) {
    for record in reader.deserialize::<MoneyRecord>() {
        let sent = match convert(record, default_digit_count) {
            Ok(request) => request_tx.send(request).is_ok(),
            Err(err) => error_tx.send(err).is_ok(),
        };

        if !sent {
            tracing::debug!("receiver disconnected, stopping");
            break;
        }
    }
}

// Convert from a csv deserialise result into a format request.
fn convert(
    record: Result<MoneyRecord, csv::Error>,
    default_digit_count: DigitCount,
) -> Result<FormatRequest, Error> {
    Ok(record?.into_request(default_digit_count)?)
}

// The raw row, kept separate from FormatRequest so that optional cells and
// defaults are dealt with here and nowhere else.
#[derive(Debug, Deserialize)]
pub struct MoneyRecord {
    value: Option<f64>,

    #[serde(rename = "digits")]
    digit_count: Option<DigitCount>,
}

impl MoneyRecord {
    fn into_request(self, default_digit_count: DigitCount) -> Result<FormatRequest, &'static str> {
        let value = match self.value {
            Some(value) => value,
            None => return Err("missing value"),
        };

        Ok(FormatRequest {
            value,
            digit_count: self.digit_count.unwrap_or(default_digit_count),
        })
    }
}
