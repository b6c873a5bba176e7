//! Depth-first recursive directory traversal

use std::fs;
use std::io;
use std::path::Path;

use super::visitor::Visit;

/// Walk `dir` depth-first, applying `visitor` to every entry in the subtree.
///
/// Entries are listed up front and sorted by file name, so traversal order is
/// stable across runs and filesystems. Regular files go to
/// [`Visit::visit_file`]; subdirectories are recursed into at the point they
/// appear in the listing, before the current level's [`Visit::finish_dir`].
/// Classification follows symlinks, so a symlink to a directory is descended
/// into (cyclic symlinks are not detected). Entries that are neither files
/// nor directories (broken symlinks, sockets) are skipped.
///
/// A missing, non-directory, or unreadable `dir` yields an error that aborts
/// the whole walk; nothing is skipped silently.
pub fn walk<V: Visit>(dir: &Path, visitor: &mut V) -> io::Result<()> {
    // The listing is snapshotted before any entry is visited, so directories
    // a visitor creates at this level (bucket subdirectories) are not
    // descended into during the same pass.
    let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.file_name());

    let mut file_count = 0usize;
    for entry in entries {
        let path = entry.path();
        if path.is_file() {
            file_count += 1;
            visitor.visit_file(dir, &entry)?;
        } else if path.is_dir() {
            walk(&path, visitor)?;
        }
    }

    visitor.finish_dir(dir, file_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;
    use std::fs::DirEntry;
    use std::path::PathBuf;

    /// Records every hook invocation in order.
    #[derive(Default)]
    struct Recorder {
        files: Vec<PathBuf>,
        dirs: Vec<(PathBuf, usize)>,
    }

    impl Visit for Recorder {
        fn visit_file(&mut self, _dir: &Path, entry: &DirEntry) -> io::Result<()> {
            self.files.push(entry.path());
            Ok(())
        }

        fn finish_dir(&mut self, dir: &Path, file_count: usize) -> io::Result<()> {
            self.dirs.push((dir.to_path_buf(), file_count));
            Ok(())
        }
    }

    #[test]
    fn test_walk_visits_files_in_sorted_order() {
        let tree = TestTree::new();
        tree.add_file("zebra.txt", "");
        tree.add_file("apple.txt", "");
        tree.add_file("mango.txt", "");

        let mut rec = Recorder::default();
        walk(tree.path(), &mut rec).unwrap();

        let names: Vec<_> = rec
            .files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["apple.txt", "mango.txt", "zebra.txt"]);
    }

    #[test]
    fn test_walk_counts_only_direct_files() {
        let tree = TestTree::new();
        tree.add_file("a.txt", "");
        tree.add_file("b.txt", "");
        tree.add_file("sub/c.txt", "");
        tree.add_file("sub/d.txt", "");
        tree.add_file("sub/e.txt", "");

        let mut rec = Recorder::default();
        walk(tree.path(), &mut rec).unwrap();

        let counts: std::collections::HashMap<_, _> = rec.dirs.iter().cloned().collect();
        assert_eq!(counts[&tree.path().to_path_buf()], 2);
        assert_eq!(counts[&tree.path().join("sub")], 3);
    }

    #[test]
    fn test_walk_finishes_children_before_parent() {
        let tree = TestTree::new();
        tree.add_file("outer/inner/deep.txt", "");

        let mut rec = Recorder::default();
        walk(tree.path(), &mut rec).unwrap();

        let order: Vec<_> = rec.dirs.iter().map(|(p, _)| p.clone()).collect();
        assert_eq!(
            order,
            [
                tree.path().join("outer/inner"),
                tree.path().join("outer"),
                tree.path().to_path_buf(),
            ]
        );
    }

    #[test]
    fn test_walk_empty_directory() {
        let tree = TestTree::new();

        let mut rec = Recorder::default();
        walk(tree.path(), &mut rec).unwrap();

        assert!(rec.files.is_empty());
        assert_eq!(rec.dirs, [(tree.path().to_path_buf(), 0)]);
    }

    #[test]
    fn test_walk_missing_root_is_an_error() {
        let tree = TestTree::new();
        let missing = tree.path().join("nope");

        let mut rec = Recorder::default();
        let err = walk(&missing, &mut rec).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_walk_root_that_is_a_file_is_an_error() {
        let tree = TestTree::new();
        let file = tree.add_file("plain.txt", "");

        let mut rec = Recorder::default();
        assert!(walk(&file, &mut rec).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_descends_into_directory_symlinks() {
        use std::os::unix::fs::symlink;

        let tree = TestTree::new();
        tree.add_file("real/inside.txt", "");
        symlink(tree.path().join("real"), tree.path().join("linked")).unwrap();

        let mut rec = Recorder::default();
        walk(tree.path(), &mut rec).unwrap();

        // The file is seen twice, once through each name.
        assert_eq!(rec.files.len(), 2);
    }
}
