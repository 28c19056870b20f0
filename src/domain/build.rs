use crate::error::{Result, TravisCliError};
use serde::{Deserialize, Serialize};

/// A build reported by the CI service; read, never modified
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BuildRecord {
    pub id: u64,
    /// Decimal counter, monotonic per repository but not contiguous
    pub number: String,
    #[serde(default)]
    pub state: String,
    pub repository_slug: String,
}

impl BuildRecord {
    pub fn new(
        id: u64,
        number: impl Into<String>,
        state: impl Into<String>,
        repository_slug: impl Into<String>,
    ) -> Self {
        BuildRecord {
            id,
            number: number.into(),
            state: state.into(),
            repository_slug: repository_slug.into(),
        }
    }
}

/// Highest numeric build number across `records`, `0` when there are none.
///
/// Numbers are compared as integers, so `"10"` beats `"3"`. A record whose
/// number does not parse fails the whole resolution.
pub fn highest_build_number<'a, I>(records: I) -> Result<u64>
where
    I: IntoIterator<Item = &'a BuildRecord>,
{
    records.into_iter().try_fold(0u64, |highest, record| {
        let number = record
            .number
            .parse::<u64>()
            .map_err(|_| TravisCliError::invalid_build_number(record.id.to_string(), &record.number))?;
        Ok(highest.max(number))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(numbers: &[&str]) -> Vec<BuildRecord> {
        numbers
            .iter()
            .enumerate()
            .map(|(i, n)| BuildRecord::new(100 + i as u64, *n, "passed", "hasii2011/PyUt"))
            .collect()
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(highest_build_number(&Vec::<BuildRecord>::new()).unwrap(), 0);
    }

    #[test]
    fn test_numeric_not_lexicographic() {
        assert_eq!(highest_build_number(&records(&["3", "10", "2"])).unwrap(), 10);
    }

    #[test]
    fn test_ties() {
        assert_eq!(highest_build_number(&records(&["7", "7", "1"])).unwrap(), 7);
    }

    #[test]
    fn test_invalid_number_names_record() {
        let err = highest_build_number(&records(&["5", "abc", "9"])).unwrap_err();
        match err {
            TravisCliError::InvalidBuildNumber { id, number } => {
                assert_eq!(id, "101");
                assert_eq!(number, "abc");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_negative_number_is_invalid() {
        assert!(highest_build_number(&records(&["-4"])).is_err());
    }
}
