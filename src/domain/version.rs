use crate::domain::bump::VersionBump;
use crate::error::{Result, TravisCliError};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Prefix written in front of the resolved build number.
///
/// Display adds its own `+` separator, so a stored build of `+.41` renders as
/// `1.2.3++.41`. Downstream consumers read that exact string.
pub const BUILD_PREFIX: &str = "+.";

fn core_pattern() -> &'static Regex {
    static CORE: OnceLock<Regex> = OnceLock::new();
    CORE.get_or_init(|| {
        Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)$").expect("version core pattern is valid")
    })
}

/// Semantic version as stored in a project's version file
///
/// `major.minor.patch` plus an opaque build suffix that is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SemanticVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: String,
}

impl SemanticVersion {
    /// Create a new version without build metadata
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            build: String::new(),
        }
    }

    /// Parse `major.minor.patch[+build]`
    ///
    /// Splits on the first `+`; everything after it is build metadata and may
    /// itself contain `+` (a previously written `1.2.3++.41` parses with build
    /// `+.41`).
    pub fn parse(text: &str) -> Result<Self> {
        let (core, build) = match text.split_once('+') {
            Some((core, build)) => (core, build),
            None => (text, ""),
        };

        let captures = core_pattern().captures(core).ok_or_else(|| {
            TravisCliError::malformed_version(
                text,
                "expected MAJOR.MINOR.PATCH made of non-negative integers",
            )
        })?;

        let component = |index: usize, name: &str| -> Result<u32> {
            captures[index].parse::<u32>().map_err(|_| {
                TravisCliError::malformed_version(text, format!("{} version is out of range", name))
            })
        };

        Ok(SemanticVersion {
            major: component(1, "major")?,
            minor: component(2, "minor")?,
            patch: component(3, "patch")?,
            build: build.to_string(),
        })
    }

    /// Set one component to `value`, resetting the lower-order ones
    ///
    /// - **Major**: minor = 0, patch = 0
    /// - **Minor**: patch = 0
    /// - **Patch**: nothing else changes
    pub fn apply_bump(&mut self, kind: VersionBump, value: u32) {
        match kind {
            VersionBump::Major => {
                self.major = value;
                self.minor = 0;
                self.patch = 0;
            }
            VersionBump::Minor => {
                self.minor = value;
                self.patch = 0;
            }
            VersionBump::Patch => {
                self.patch = value;
            }
        }
    }

    /// Replace the build metadata with `+.{build_number}`
    pub fn set_build(&mut self, build_number: u64) {
        self.build = format!("{}{}", BUILD_PREFIX, build_number);
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_core_only() {
        let v = SemanticVersion::parse("1.2.3").unwrap();
        assert_eq!(v, SemanticVersion::new(1, 2, 3));
        assert!(v.build.is_empty());
    }

    #[test]
    fn test_parse_with_build() {
        let v = SemanticVersion::parse("4.0.12+abc.7").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (4, 0, 12));
        assert_eq!(v.build, "abc.7");
    }

    #[test]
    fn test_parse_previously_written_double_plus() {
        let v = SemanticVersion::parse("1.2.3++.41").unwrap();
        assert_eq!(v.build, "+.41");
        assert_eq!(v.to_string(), "1.2.3++.41");
    }

    #[test]
    fn test_round_trip_canonical_strings() {
        for s in ["0.0.0", "1.2.3", "10.20.30", "1.2.3+B", "7.0.1+build.5", "1.2.3++.41"] {
            assert_eq!(SemanticVersion::parse(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_parse_rejects_wrong_component_count() {
        assert!(SemanticVersion::parse("1.2").is_err());
        assert!(SemanticVersion::parse("1.2.3.4").is_err());
        assert!(SemanticVersion::parse("").is_err());
        assert!(SemanticVersion::parse("+build").is_err());
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        for s in ["v1.2.3", "1.-2.3", "1.2.x", "1.+2.3", " 1.2.3", "1..3", "1.2.3 "] {
            assert!(SemanticVersion::parse(s).is_err(), "{} should not parse", s);
        }
    }

    #[test]
    fn test_parse_error_carries_raw_string() {
        let err = SemanticVersion::parse("1.two.3").unwrap_err();
        assert!(err.to_string().contains("'1.two.3'"));
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let err = SemanticVersion::parse("1.2.99999999999").unwrap_err();
        assert!(err.to_string().contains("patch version is out of range"));
    }

    #[test]
    fn test_apply_bump_major_resets_minor_and_patch() {
        let mut v = SemanticVersion::parse("1.2.3+x").unwrap();
        v.apply_bump(VersionBump::Major, 5);
        assert_eq!((v.major, v.minor, v.patch), (5, 0, 0));
        assert_eq!(v.build, "x");
    }

    #[test]
    fn test_apply_bump_minor_resets_patch() {
        let mut v = SemanticVersion::new(1, 2, 3);
        v.apply_bump(VersionBump::Minor, 9);
        assert_eq!(v, SemanticVersion::new(1, 9, 0));
    }

    #[test]
    fn test_apply_bump_patch_leaves_others() {
        let mut v = SemanticVersion::new(1, 2, 3);
        v.apply_bump(VersionBump::Patch, 0);
        assert_eq!(v, SemanticVersion::new(1, 2, 0));
    }

    #[test]
    fn test_set_build_replaces_previous_metadata() {
        let mut v = SemanticVersion::parse("1.2.3+old").unwrap();
        v.set_build(41);
        assert_eq!(v.build, "+.41");
        assert_eq!(v.to_string(), "1.2.3++.41");
    }
}
