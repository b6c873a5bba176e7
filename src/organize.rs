//! Bucketing organizer
//!
//! Visitor that relocates every file in a subtree into a same-level
//! subdirectory named after the lowercased first character of its filename.
//! In dry-run mode the same movement records are produced but nothing on disk
//! changes.

use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::walk::Visit;

/// One file's relocation, real or simulated. `after` is always `before`'s
/// parent joined with the bucket key; in dry-run mode it records a path that
/// was never created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovementRecord {
    pub before: PathBuf,
    pub after: PathBuf,
}

/// Compute the bucket key for a filename: its first character, lowercased.
///
/// Lowercasing is Unicode-aware, so the key can be longer than one byte and,
/// for a handful of characters, longer than one `char`. No sanitization is
/// applied; a key the filesystem rejects as a directory name fails at
/// creation time.
pub fn bucket_key(filename: &str) -> String {
    filename
        .chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_default()
}

/// Visitor that buckets every file it sees and accumulates the movement
/// records for the caller to render.
pub struct Organizer {
    dry_run: bool,
    records: Vec<MovementRecord>,
}

impl Organizer {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            records: Vec::new(),
        }
    }

    /// The full ordered record list for the walked subtree.
    pub fn into_records(self) -> Vec<MovementRecord> {
        self.records
    }
}

impl Visit for Organizer {
    fn visit_file(&mut self, dir: &Path, entry: &DirEntry) -> io::Result<()> {
        let name = entry.file_name();
        let key = bucket_key(&name.to_string_lossy());
        let target_dir = dir.join(&key);

        if !self.dry_run && !target_dir.exists() {
            // Single-level creation: the parent is the directory being
            // listed, so it already exists.
            fs::create_dir(&target_dir)?;
        }

        let before = entry.path();
        let after = target_dir.join(&name);
        if !self.dry_run {
            fs::rename(&before, &after)?;
        }

        self.records.push(MovementRecord { before, after });
        Ok(())
    }
}
