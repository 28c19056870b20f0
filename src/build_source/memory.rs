use crate::build_source::{paginate, BuildPage, BuildSource};
use crate::domain::BuildRecord;
use crate::error::Result;

/// Build source backed by records held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryBuildSource {
    records: Vec<BuildRecord>,
}

impl MemoryBuildSource {
    pub fn new(records: Vec<BuildRecord>) -> Self {
        MemoryBuildSource { records }
    }

    /// Add a build record
    pub fn add_build(&mut self, record: BuildRecord) {
        self.records.push(record);
    }
}

impl BuildSource for MemoryBuildSource {
    fn fetch_page(&self, repo_slug: &str, limit: usize, page: usize) -> Result<BuildPage> {
        let matching: Vec<BuildRecord> = self
            .records
            .iter()
            .filter(|record| record.repository_slug == repo_slug)
            .cloned()
            .collect();
        Ok(paginate(matching, limit, page))
    }
}
