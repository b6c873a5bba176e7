//! Bordered table output for movement records

use std::io::{self, Write};

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::organize::MovementRecord;

const HEADERS: [&str; 2] = ["before", "after"];

/// Print movement records as a bordered two-column table to stdout.
///
/// Column widths fit the longest cell; the header row is bold when color is
/// enabled. Prints nothing (not even the header) for an empty record list.
pub fn print_table(records: &[MovementRecord], use_color: bool) -> io::Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    let rows: Vec<[String; 2]> = records
        .iter()
        .map(|r| {
            [
                r.before.display().to_string(),
                r.after.display().to_string(),
            ]
        })
        .collect();

    let mut widths = [HEADERS[0].len(), HEADERS[1].len()];
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    write_border(&mut stdout, &widths)?;

    stdout.set_color(ColorSpec::new().set_bold(true))?;
    write_row(&mut stdout, &HEADERS.map(String::from), &widths)?;
    stdout.reset()?;

    write_border(&mut stdout, &widths)?;
    for row in &rows {
        write_row(&mut stdout, row, &widths)?;
    }
    write_border(&mut stdout, &widths)?;

    Ok(())
}

fn write_border(out: &mut impl Write, widths: &[usize; 2]) -> io::Result<()> {
    writeln!(
        out,
        "+{}+{}+",
        "-".repeat(widths[0] + 2),
        "-".repeat(widths[1] + 2)
    )
}

fn write_row(out: &mut impl Write, row: &[String; 2], widths: &[usize; 2]) -> io::Result<()> {
    writeln!(
        out,
        "| {:<w0$} | {:<w1$} |",
        row[0],
        row[1],
        w0 = widths[0],
        w1 = widths[1]
    )
}
