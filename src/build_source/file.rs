use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::build_source::{BuildPage, BuildSource, MemoryBuildSource};
use crate::domain::BuildRecord;
use crate::error::{Result, TravisCliError};

/// Build source reading records exported to a TOML file.
///
/// ```toml
/// [[builds]]
/// id = 4451
/// number = "41"
/// state = "passed"
/// repository_slug = "hasii2011/PyUt"
/// ```
#[derive(Debug, Clone)]
pub struct FileBuildSource {
    path: PathBuf,
    builds: MemoryBuildSource,
}

#[derive(Debug, Deserialize)]
struct BuildsFile {
    #[serde(default)]
    builds: Vec<BuildRecord>,
}

impl FileBuildSource {
    /// Load and parse the whole file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            TravisCliError::build_source(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(path, &text)
    }

    fn from_toml(path: &Path, text: &str) -> Result<Self> {
        let parsed: BuildsFile = toml::from_str(text).map_err(|e| {
            TravisCliError::build_source(format!("invalid builds file {}: {}", path.display(), e))
        })?;
        Ok(FileBuildSource {
            path: path.to_path_buf(),
            builds: MemoryBuildSource::new(parsed.builds),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BuildSource for FileBuildSource {
    fn fetch_page(&self, repo_slug: &str, limit: usize, page: usize) -> Result<BuildPage> {
        self.builds.fetch_page(repo_slug, limit, page)
    }
}
