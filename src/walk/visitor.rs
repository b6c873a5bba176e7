//! Per-entry visitor capability for tree walks

use std::fs::DirEntry;
use std::io;
use std::path::Path;

/// Callback for tree walks - receives each regular file and each finished
/// directory. Both hooks default to no-ops so a visitor only implements the
/// side it cares about.
pub trait Visit {
    /// Called once for every regular file, with the directory currently being
    /// listed and the file's entry.
    fn visit_file(&mut self, dir: &Path, entry: &DirEntry) -> io::Result<()> {
        let _ = (dir, entry);
        Ok(())
    }

    /// Called after a directory's listing completes, with the direct
    /// (non-recursive) count of file entries seen in it. Subdirectories have
    /// already been recursed into by this point, so a child's `finish_dir`
    /// always runs before its parent's.
    fn finish_dir(&mut self, dir: &Path, file_count: usize) -> io::Result<()> {
        let _ = (dir, file_count);
        Ok(())
    }
}
