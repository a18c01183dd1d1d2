use crate::{input::Error, money::process::RowError};

use std::sync::mpsc::Receiver;
use std::thread::JoinHandle;

// Bad rows are skipped, so the log is the only place they show up.
// Each drain runs on its own thread, so a burst of errors never blocks the
// readers or the formatter.
pub fn log(input_errors: Receiver<Error>, row_errors: Receiver<RowError>) -> Vec<JoinHandle<()>> {
    vec![
        std::thread::spawn(move || {
            for err in input_errors {
                tracing::warn!(%err, "failed to read record");
            }
        }),
        std::thread::spawn(move || {
            for err in row_errors {
                tracing::warn!(
                    value = err.request.value,
                    digits = err.request.digit_count,
                    error = %err.error,
                    "failed to format record"
                );
            }
        }),
    ]
}
