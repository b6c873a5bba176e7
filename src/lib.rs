//! Fanout - find oversized directories and fan their files out into
//! single-character buckets

pub mod organize;
pub mod output;
pub mod scan;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod walk;

pub use organize::{MovementRecord, Organizer, bucket_key};
pub use output::{Format, print_csv, print_json, print_table};
pub use scan::{FILE_COUNT_THRESHOLD, LargeDirScanner, ScanReport};
pub use walk::{Visit, walk};
