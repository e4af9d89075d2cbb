use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Resolve a target path into the ordered list of files to checksum.
///
/// A regular file resolves to itself. A directory resolves to its direct
/// child files, sorted lexicographically by file name for deterministic
/// output order. Symlinks are followed, so a link to a file counts as a
/// file. Subdirectories are skipped, never descended into. A missing
/// target surfaces the underlying NotFound error.
pub fn resolve(target: &Path) -> io::Result<Vec<PathBuf>> {
    let metadata = fs::metadata(target)?;
    if !metadata.is_dir() {
        return Ok(vec![target.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(target)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    // Children share the parent path, so this orders by file name.
    files.sort();
    Ok(files)
}
