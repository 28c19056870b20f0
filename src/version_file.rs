use std::fs;
use std::path::Path;

use tracing::debug;

use crate::atomic_file::write_atomic;
use crate::domain::SemanticVersion;
use crate::error::Result;

/// Read and parse a version file; surrounding whitespace is ignored
pub fn read_version(path: &Path) -> Result<SemanticVersion> {
    let text = fs::read_to_string(path)?;
    let version = SemanticVersion::parse(text.trim())?;
    debug!(path = %path.display(), %version, "read version file");
    Ok(version)
}

/// Overwrite a version file with the formatted version, atomically
pub fn write_version(path: &Path, version: &SemanticVersion) -> Result<()> {
    write_atomic(path, &version.to_string())?;
    debug!(path = %path.display(), %version, "wrote version file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TravisCliError;

    #[test]
    fn test_read_trims_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("version.txt");
        fs::write(&path, "1.2.3\n").unwrap();

        assert_eq!(read_version(&path).unwrap(), SemanticVersion::new(1, 2, 3));
    }

    #[test]
    fn test_write_has_no_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("version.txt");
        let mut version = SemanticVersion::new(0, 9, 1);
        version.set_build(7);

        write_version(&path, &version).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "0.9.1++.7");
    }

    #[test]
    fn test_read_malformed_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("version.txt");
        fs::write(&path, "one.two.three").unwrap();

        let err = read_version(&path).unwrap_err();
        assert!(matches!(err, TravisCliError::MalformedVersion { .. }));
        assert!(err.to_string().contains("one.two.three"));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_version(Path::new("/no/such/version.txt")).unwrap_err();
        assert!(matches!(err, TravisCliError::Io(_)));
    }
}
