//! Large-directory scanner
//!
//! Visitor that reports every directory whose direct file count strictly
//! exceeds a threshold. Reports are streamed to the sink the moment a
//! directory's listing finishes, so output appears while the walk is still
//! running; children print before their parent.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::output::{Format, csv_field};
use crate::walk::Visit;

/// Directories holding more than this many direct files get reported.
pub const FILE_COUNT_THRESHOLD: usize = 50_000;

/// One over-threshold directory. Written out as soon as it is computed and
/// not retained afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub path: PathBuf,
    pub files: usize,
}

/// Visitor that emits a [`ScanReport`] per over-threshold directory.
///
/// The threshold is a constructor parameter so the policy is testable with
/// small trees; the CLI always passes [`FILE_COUNT_THRESHOLD`].
pub struct LargeDirScanner<W: Write> {
    threshold: usize,
    format: Format,
    sink: W,
}

impl<W: Write> LargeDirScanner<W> {
    pub fn new(threshold: usize, format: Format, sink: W) -> Self {
        Self {
            threshold,
            format,
            sink,
        }
    }

    /// Recover the sink, e.g. to inspect a test buffer.
    pub fn into_sink(self) -> W {
        self.sink
    }

    fn write_report(&mut self, report: &ScanReport) -> io::Result<()> {
        match self.format {
            Format::Table => writeln!(
                self.sink,
                "{} - {} files",
                report.path.display(),
                report.files
            ),
            Format::Csv => writeln!(
                self.sink,
                "{},{}",
                csv_field(&report.path.to_string_lossy()),
                report.files
            ),
            // One object per line, preserving the streaming contract.
            Format::Json => {
                let json = serde_json::to_string(report)
                    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
                writeln!(self.sink, "{}", json)
            }
        }
    }
}

impl<W: Write> Visit for LargeDirScanner<W> {
    fn finish_dir(&mut self, dir: &Path, file_count: usize) -> io::Result<()> {
        if file_count > self.threshold {
            let report = ScanReport {
                path: dir.to_path_buf(),
                files: file_count,
            };
            self.write_report(&report)?;
        }
        Ok(())
    }
}
