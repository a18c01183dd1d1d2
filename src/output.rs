use crate::money::{process::FormattedRecord, DigitCount};

use serde::Serialize;
use std::sync::mpsc::Receiver;

#[derive(Serialize)]
struct FormattedRow<'a> {
    value: f64,

    #[serde(rename = "digits")]
    digit_count: DigitCount,

    formatted: &'a str,
}

impl<'a> FormattedRow<'a> {
    fn new(record: &'a FormattedRecord) -> Self {
        Self {
            value: record.request.value,
            digit_count: record.request.digit_count,
            formatted: &record.formatted,
        }
    }
}

// Writes the received records to the given stream.
pub fn write(
    output_stream: impl std::io::Write,
    records: Receiver<FormattedRecord>,
) -> Result<(), std::io::Error> {
    let mut writer = csv::Writer::from_writer(output_stream);

    for record in records {
        writer.serialize(FormattedRow::new(&record))?;
    }

    writer.flush()
}

#[cfg(test)]
mod write_tests {
    use crate::money::process::{FormatRequest, FormattedRecord};

    use std::sync::mpsc;

    #[test]
    fn test_write_records() {
        let (records_tx, records) = mpsc::channel();
        let mut output_stream = Vec::new();
        for (value, digit_count, formatted) in vec![
            (10.01, -1, "20"),
            (1500.0, -2, "1,500"),
            (1234.561, 2, "1,235"),
        ] {
            records_tx
                .send(FormattedRecord {
                    request: FormatRequest { value, digit_count },
                    formatted: formatted.to_string(),
                })
                .unwrap();
        }
        drop(records_tx);

        super::write(&mut output_stream, records).unwrap();

        let want = r#"value,digits,formatted
10.01,-1,20
1500.0,-2,"1,500"
1234.561,2,"1,235"
"#;
        assert_eq!(want.to_string(), String::from_utf8(output_stream).unwrap());
    }

    #[test]
    fn test_write_nothing() {
        let (records_tx, records) = mpsc::channel();
        drop(records_tx);
        let mut output_stream = Vec::new();

        super::write(&mut output_stream, records).unwrap();

        assert!(output_stream.is_empty());
    }
}
