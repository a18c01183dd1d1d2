use crate::{config::Config, error_handler, input, money::process, output};

use std::io;
use std::sync::mpsc;

/// Read `value,digits` rows from `input_stream`, and write them back along
/// with their formatted amount to `output_stream`.
///
/// Rows that can't be read or formatted are logged and skipped.
pub fn run(
    input_stream: (impl io::Read + Send + 'static),
    output_stream: impl io::Write,
    config: &Config,
) -> Result<(), io::Error> {
    let (requests, input_errors) = input::parse(input_stream, config.default_digit_count);

    let (formatted_tx, formatted) = mpsc::channel();
    let row_errors = process::process(requests, formatted_tx, config.locale);

    let handles = error_handler::log(input_errors, row_errors);

    output::write(output_stream, formatted)?;

    for handle in handles {
        handle
            .join()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "error logger panicked"))?;
    }

    Ok(())
}
