use crate::error::{Result, TravisCliError};

/// Version component targeted by a bump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

/// A single, unambiguous bump decided at the CLI boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BumpRequest {
    #[default]
    None,
    Major(u32),
    Minor(u32),
    Patch(u32),
}

impl BumpRequest {
    /// Component and new value, or `None` when no bump was requested
    pub fn target(&self) -> Option<(VersionBump, u32)> {
        match *self {
            BumpRequest::None => None,
            BumpRequest::Major(value) => Some((VersionBump::Major, value)),
            BumpRequest::Minor(value) => Some((VersionBump::Minor, value)),
            BumpRequest::Patch(value) => Some((VersionBump::Patch, value)),
        }
    }
}

/// Raw `--major/--minor/--patch` values as parsed from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BumpFlags {
    pub major: Option<u32>,
    pub minor: Option<u32>,
    pub patch: Option<u32>,
}

impl BumpFlags {
    /// Validate that at most one flag is present and build the request
    pub fn into_request(self) -> Result<BumpRequest> {
        let present: Vec<&'static str> = [
            ("major", self.major.is_some()),
            ("minor", self.minor.is_some()),
            ("patch", self.patch.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect();

        if present.len() > 1 {
            return Err(TravisCliError::ConflictingBumpRequest(present));
        }

        Ok(match (self.major, self.minor, self.patch) {
            (Some(value), _, _) => BumpRequest::Major(value),
            (_, Some(value), _) => BumpRequest::Minor(value),
            (_, _, Some(value)) => BumpRequest::Patch(value),
            _ => BumpRequest::None,
        })
    }
}
