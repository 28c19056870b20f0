use thiserror::Error;

/// Unified error type for traviscli operations
#[derive(Error, Debug)]
pub enum TravisCliError {
    #[error("Preferences location not set: call determine_location() before using preferences")]
    LocationNotSet,

    #[error("Malformed version '{raw}': {reason}")]
    MalformedVersion { raw: String, reason: String },

    #[error("Invalid build number '{number}' in build record {id}")]
    InvalidBuildNumber { id: String, number: String },

    #[error("Conflicting bump request: only one of --major, --minor, --patch may be given (got {})", .0.join(", "))]
    ConflictingBumpRequest(Vec<&'static str>),

    #[error("Build source error: {0}")]
    BuildSource(String),

    #[error("Preferences error: {0}")]
    Preferences(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in traviscli
pub type Result<T> = std::result::Result<T, TravisCliError>;

impl TravisCliError {
    /// Create a malformed version error carrying the offending raw string
    pub fn malformed_version(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        TravisCliError::MalformedVersion {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid build number error for a record
    pub fn invalid_build_number(id: impl Into<String>, number: impl Into<String>) -> Self {
        TravisCliError::InvalidBuildNumber {
            id: id.into(),
            number: number.into(),
        }
    }

    /// Create a build source error with context
    pub fn build_source(msg: impl Into<String>) -> Self {
        TravisCliError::BuildSource(msg.into())
    }

    /// Create a preferences error with context
    pub fn preferences(msg: impl Into<String>) -> Self {
        TravisCliError::Preferences(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_version_includes_raw_string() {
        let err = TravisCliError::malformed_version("1.x.3", "minor is not a number");
        let msg = err.to_string();
        assert!(msg.contains("'1.x.3'"));
        assert!(msg.contains("minor is not a number"));
    }

    #[test]
    fn test_invalid_build_number_includes_record_id() {
        let err = TravisCliError::invalid_build_number("1234", "abc");
        assert_eq!(
            err.to_string(),
            "Invalid build number 'abc' in build record 1234"
        );
    }

    #[test]
    fn test_conflicting_bump_lists_flags() {
        let err = TravisCliError::ConflictingBumpRequest(vec!["minor", "patch"]);
        assert!(err.to_string().ends_with("(got minor, patch)"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: TravisCliError = io_err.into();
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (TravisCliError::LocationNotSet, "Preferences location not set"),
            (TravisCliError::build_source("x"), "Build source error"),
            (TravisCliError::preferences("x"), "Preferences error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
