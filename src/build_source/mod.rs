//! Build source abstraction layer
//!
//! The reconciler never talks to a CI service itself. Whatever client the
//! user runs hands build records to this crate through the [BuildSource]
//! trait, one page at a time.
//!
//! - [file::FileBuildSource]: records read from a TOML file
//! - [memory::MemoryBuildSource]: records held in memory
//!
//! ```rust
//! # use traviscli::build_source::{BuildSource, MemoryBuildSource};
//! # use traviscli::domain::BuildRecord;
//! let source = MemoryBuildSource::new(vec![
//!     BuildRecord::new(1, "40", "passed", "hasii2011/PyUt"),
//!     BuildRecord::new(2, "41", "failed", "hasii2011/PyUt"),
//! ]);
//! let builds = source.fetch_builds("hasii2011/PyUt", 25).unwrap();
//! assert_eq!(builds.len(), 2);
//! ```

pub mod file;
pub mod memory;

pub use file::FileBuildSource;
pub use memory::MemoryBuildSource;

use crate::domain::BuildRecord;
use crate::error::Result;
use tracing::debug;

/// One page of build records
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BuildPage {
    pub records: Vec<BuildRecord>,
    /// Index of the following page, if there is one
    pub next_page: Option<usize>,
}

impl BuildPage {
    pub fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }
}

/// Supplier of build records for a repository
pub trait BuildSource {
    /// Fetch page `page` (0-based) holding at most `limit` records for `repo_slug`.
    fn fetch_page(&self, repo_slug: &str, limit: usize, page: usize) -> Result<BuildPage>;

    /// Fetch up to `limit` records, following pages as needed, and flatten them.
    ///
    /// `limit` is both the page size requested and the cap on the result;
    /// `0` is treated as `1`.
    fn fetch_builds(&self, repo_slug: &str, limit: usize) -> Result<Vec<BuildRecord>> {
        let limit = limit.max(1);
        let mut records = Vec::new();
        let mut page_index = 0;

        loop {
            let page = self.fetch_page(repo_slug, limit, page_index)?;
            debug!(
                repo_slug,
                page = page_index,
                count = page.records.len(),
                "fetched build page"
            );
            records.extend(page.records);
            if records.len() >= limit {
                break;
            }
            match page.next_page {
                Some(next) if next > page_index => page_index = next,
                _ => break,
            }
        }

        records.truncate(limit);
        Ok(records)
    }
}

/// Cut `page` of size `limit` out of `records`
pub(crate) fn paginate(records: Vec<BuildRecord>, limit: usize, page: usize) -> BuildPage {
    let limit = limit.max(1);
    let start = page.saturating_mul(limit);
    let total = records.len();
    let records: Vec<BuildRecord> = records.into_iter().skip(start).take(limit).collect();
    let next_page = (start.saturating_add(limit) < total).then_some(page + 1);
    BuildPage { records, next_page }
}
