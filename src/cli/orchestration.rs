//! Main workflow orchestration logic
//!
//! Keeps the update workflow apart from clap so it can be driven
//! programmatically (and tested) with any [`BuildSource`].

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::boundary::BoundaryWarning;
use crate::build_source::BuildSource;
use crate::domain::{reconcile, BumpFlags, SemanticVersion};
use crate::error::Result;
use crate::version_file::{read_version, write_version};

/// Arguments for the update workflow
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateWorkflowArgs {
    /// Repository slug such as `hasii2011/PyUt`
    pub repo_slug: String,

    /// Most builds to consider
    pub build_count: usize,

    /// Version file to read and overwrite
    pub version_file: PathBuf,

    /// Requested `--major/--minor/--patch` values
    pub bump: BumpFlags,

    /// Compute the new version without writing it
    pub dry_run: bool,
}

/// Result of a successful update workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub old_version: SemanticVersion,
    pub new_version: SemanticVersion,

    /// Number of build records considered
    pub builds_seen: usize,

    /// Whether the version file was overwritten
    pub written: bool,

    pub warnings: Vec<BoundaryWarning>,
}

/// Update workflow
///
/// 1. Validate the bump flags (nothing is read or written on conflict)
/// 2. Read the current version file
/// 3. Fetch up to `build_count` builds for the repository
/// 4. Reconcile the version with the highest build number
/// 5. Overwrite the version file unless this is a dry run
#[instrument(skip_all, fields(repo = %args.repo_slug))]
pub fn run_update_workflow(
    args: &UpdateWorkflowArgs,
    source: &dyn BuildSource,
) -> Result<WorkflowResult> {
    let bump = args.bump.into_request()?;

    let old_version = read_version(&args.version_file)?;
    let records = source.fetch_builds(&args.repo_slug, args.build_count)?;

    let mut warnings = Vec::new();
    if records.is_empty() {
        warnings.push(BoundaryWarning::NoBuildsFound {
            repo_slug: args.repo_slug.clone(),
        });
    }

    let new_version = reconcile(&old_version, &records, bump)?;
    info!(old = %old_version, new = %new_version, "reconciled version");

    let written = if args.dry_run {
        false
    } else {
        write_version(&args.version_file, &new_version)?;
        true
    };

    Ok(WorkflowResult {
        old_version,
        new_version,
        builds_seen: records.len(),
        written,
        warnings,
    })
}
