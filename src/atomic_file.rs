use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Replace `path` with `contents` without ever exposing a partial write.
///
/// The data goes to a temporary file next to the real target (symlinks are
/// followed) which is then renamed over it. An existing target keeps its
/// permissions.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let target = resolve_target(path);
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(contents.as_bytes())?;
    temp.flush()?;
    if let Ok(metadata) = fs::metadata(&target) {
        temp.as_file().set_permissions(metadata.permissions())?;
    }
    temp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}

// A missing file (or dangling link) is written at `path` itself.
fn resolve_target(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
