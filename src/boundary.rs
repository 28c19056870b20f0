use std::fmt;

/// Non-fatal conditions reported to the user while updating a version file.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The stored CI token is still the placeholder written on first run
    PlaceholderToken { preferences_path: String },
    /// The build source returned nothing for the repository
    NoBuildsFound { repo_slug: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::PlaceholderToken { preferences_path } => {
                write!(
                    f,
                    "No Travis CI API token configured; edit '{}' or pass --set-token",
                    preferences_path
                )
            }
            BoundaryWarning::NoBuildsFound { repo_slug } => {
                write!(
                    f,
                    "No builds found for repository '{}'; using build number 0",
                    repo_slug
                )
            }
        }
    }
}
