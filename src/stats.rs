//! Entry counting and directory sizes
//!
//! The entry counter makes one raw pass over the whole subtree to produce the
//! totals shown in the report header. It ignores depth limits and filters and
//! does not recover from errors. Directory sizes are computed per folder when
//! sizes are requested.

use crate::walker::read_children;
use crate::Result;
use std::fs;
use std::io;
use std::path::Path;

/// Aggregated entry counts for a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of folders below the root, at any depth
    pub folder_count: usize,
    /// Number of files below the root, at any depth
    pub file_count: usize,
}

impl TreeStats {
    /// Add the counts of another subtree
    fn merge(&mut self, other: TreeStats) {
        self.folder_count += other.folder_count;
        self.file_count += other.file_count;
    }
}

/// Count every folder and file below `path`.
///
/// The root itself is not counted, and a root that is not a folder has no
/// entries. Symlinks to folders count as folders but are not followed. Any
/// other error aborts the count.
pub fn count_entries(path: &Path) -> Result<TreeStats> {
    let mut stats = TreeStats::default();

    if !fs::metadata(path)?.is_dir() {
        log::debug!("{:?} is not a folder, nothing to count", path);
        return Ok(stats);
    }

    for child in read_children(path)? {
        if child.is_dir {
            stats.folder_count += 1;
            if child.descends() {
                stats.merge(count_entries(&child.path)?);
            }
        } else {
            stats.file_count += 1;
        }
    }

    Ok(stats)
}

/// Calculate the total size of all files anywhere below a folder.
///
/// Subfolders that cannot be listed are skipped and contribute nothing; a
/// file whose size cannot be read fails the whole calculation.
pub fn calculate_dir_size(path: &Path) -> io::Result<u64> {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("Skipping unreadable folder {:?} in size calculation: {}", path, e);
            return Ok(0);
        }
    };

    let mut size = 0u64;

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("Stopping size calculation in {:?}: {}", path, e);
                break;
            }
        };
        let child_path = entry.path();
        let is_symlink = entry.file_type().map(|t| t.is_symlink()).unwrap_or(false);

        // Follows symlinks, like the folder/file split of the report
        match fs::metadata(&child_path) {
            Ok(metadata) if metadata.is_dir() => {
                if !is_symlink {
                    size += calculate_dir_size(&child_path)?;
                }
            }
            Ok(metadata) => size += metadata.len(),
            Err(e) => return Err(e),
        }
    }

    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(path: &Path, len: usize) {
        let mut file = File::create(path).unwrap();
        file.write_all(&vec![b'x'; len]).unwrap();
    }

    #[test]
    fn test_count_entries() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("a/b/c")).unwrap();
        fs::create_dir(root.join("d")).unwrap();
        File::create(root.join("top.txt")).unwrap();
        File::create(root.join("a/one.txt")).unwrap();
        File::create(root.join("a/b/c/two.txt")).unwrap();

        let stats = count_entries(root).unwrap();
        assert_eq!(stats.folder_count, 4);
        assert_eq!(stats.file_count, 3);
    }

    #[test]
    fn test_count_empty_folder() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(count_entries(temp_dir.path()).unwrap(), TreeStats::default());
    }

    #[test]
    fn test_count_missing_folder_fails() {
        let temp_dir = TempDir::new().unwrap();
        assert!(count_entries(&temp_dir.path().join("gone")).is_err());
    }

    #[test]
    fn test_count_file_root_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        write_file(&file, 3);

        assert_eq!(count_entries(&file).unwrap(), TreeStats::default());
    }

    #[test]
    fn test_calculate_dir_size_is_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("x/y")).unwrap();
        write_file(&root.join("a.bin"), 100);
        write_file(&root.join("x/b.bin"), 1000);
        write_file(&root.join("x/y/c.bin"), 24);

        assert_eq!(calculate_dir_size(root).unwrap(), 1124);
        assert_eq!(calculate_dir_size(&root.join("x")).unwrap(), 1024);
        assert_eq!(calculate_dir_size(&root.join("x/y")).unwrap(), 24);
    }

    #[cfg(unix)]
    #[test]
    fn test_calculate_dir_size_broken_symlink_fails() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::os::unix::fs::symlink(root.join("missing"), root.join("dangling")).unwrap();

        assert!(calculate_dir_size(root).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_folder_counted_not_followed() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir(root.join("real")).unwrap();
        write_file(&root.join("real/data.bin"), 10);
        std::os::unix::fs::symlink(root.join("real"), root.join("link")).unwrap();

        let stats = count_entries(root).unwrap();
        assert_eq!(stats.folder_count, 2);
        assert_eq!(stats.file_count, 1);
        assert_eq!(calculate_dir_size(root).unwrap(), 10);
    }
}
