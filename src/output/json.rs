//! JSON output formatting

use std::io;

use crate::organize::MovementRecord;

/// Print movement records as a pretty-printed JSON array to stdout.
pub fn print_json(records: &[MovementRecord]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
