use crate::domain::build::{highest_build_number, BuildRecord};
use crate::domain::bump::{BumpFlags, BumpRequest};
use crate::domain::version::SemanticVersion;
use crate::error::Result;
use tracing::debug;

/// Merge the highest remote build number (and an optional bump) into a version.
///
/// Works on a copy: `current` is never touched, so a failure part-way through
/// leaves nothing half-updated for the caller to persist.
pub fn reconcile(
    current: &SemanticVersion,
    records: &[BuildRecord],
    bump: BumpRequest,
) -> Result<SemanticVersion> {
    let mut next = current.clone();

    if let Some((kind, value)) = bump.target() {
        debug!(?kind, value, "applying bump");
        next.apply_bump(kind, value);
    }

    let highest = highest_build_number(records)?;
    debug!(highest, records = records.len(), "resolved build number");
    next.set_build(highest);

    Ok(next)
}

/// [`reconcile`] starting from raw CLI flags; conflicting flags fail before any work.
pub fn reconcile_flags(
    current: &SemanticVersion,
    records: &[BuildRecord],
    flags: BumpFlags,
) -> Result<SemanticVersion> {
    let bump = flags.into_request()?;
    reconcile(current, records, bump)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TravisCliError;

    fn builds(numbers: &[&str]) -> Vec<BuildRecord> {
        numbers
            .iter()
            .enumerate()
            .map(|(i, n)| BuildRecord::new(i as u64, *n, "passed", "owner/repo"))
            .collect()
    }

    #[test]
    fn test_no_bump_attaches_highest_build() {
        let current = SemanticVersion::parse("1.2.3").unwrap();
        let next = reconcile(&current, &builds(&["5", "41", "7"]), BumpRequest::None).unwrap();
        assert_eq!(next.to_string(), "1.2.3++.41");
        assert_eq!(current.to_string(), "1.2.3");
    }

    #[test]
    fn test_minor_bump_then_build() {
        let current = SemanticVersion::parse("1.2.3+.9").unwrap();
        let next = reconcile(&current, &builds(&["12"]), BumpRequest::Minor(3)).unwrap();
        assert_eq!(next.to_string(), "1.3.0++.12");
    }

    #[test]
    fn test_no_builds_gives_zero() {
        let current = SemanticVersion::new(2, 0, 0);
        let next = reconcile(&current, &[], BumpRequest::Patch(1)).unwrap();
        assert_eq!(next.to_string(), "2.0.1++.0");
    }

    #[test]
    fn test_conflicting_flags_leave_input_alone() {
        let current = SemanticVersion::parse("1.2.3").unwrap();
        let before = current.clone();
        let flags = BumpFlags {
            major: None,
            minor: Some(1),
            patch: Some(1),
        };
        let err = reconcile_flags(&current, &builds(&["1"]), flags).unwrap_err();
        assert!(matches!(err, TravisCliError::ConflictingBumpRequest(_)));
        assert_eq!(current, before);
    }

    #[test]
    fn test_invalid_build_fails_whole_reconcile() {
        let current = SemanticVersion::new(1, 0, 0);
        let result = reconcile(&current, &builds(&["3", "x"]), BumpRequest::Major(2));
        assert!(matches!(result, Err(TravisCliError::InvalidBuildNumber { .. })));
    }
}
