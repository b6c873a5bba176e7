//! CSV output formatting

use std::borrow::Cow;
use std::io::{self, Write};

use crate::organize::MovementRecord;

/// Quote a CSV field if it contains a comma, quote, or newline.
pub fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Print movement records as CSV (header plus one row per record) to stdout.
pub fn print_csv(records: &[MovementRecord]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "before,after")?;
    for record in records {
        writeln!(
            out,
            "{},{}",
            csv_field(&record.before.to_string_lossy()),
            csv_field(&record.after.to_string_lossy())
        )?;
    }
    Ok(())
}
