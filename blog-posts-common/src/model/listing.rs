//! Sort and limit options accepted by the post listing.

use std::{
    fmt::{Display, Formatter},
    num::ParseIntError,
    str::FromStr,
};
use thiserror::Error;

/// Limits longer than this are rejected before they are parsed.
///
/// This caps usable limits at 999 even though [`LIMIT_MAX`] is higher.
pub const LIMIT_MAX_CHARS: usize = 3;
pub const LIMIT_MIN: i64 = 1;
pub const LIMIT_MAX: i64 = 10_000;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Error)]
#[error("The sort order must be \"asc\" or \"desc\": {0:?}")]
pub struct InvalidSortError(String);

impl SortOrder {
    #[must_use]
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = InvalidSortError;

    /// Only the exact lowercase spellings are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            other => Err(InvalidSortError(other.to_owned())),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct Limit(u16);

#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum InvalidLimitError {
    #[error("The limit must have 1 to {max} characters, got {0}", max = LIMIT_MAX_CHARS)]
    Length(usize),
    #[error("The limit is not an integer: {0}")]
    NotAnInteger(#[from] ParseIntError),
    #[error("The limit must be between {min} and {max}, got {0}", min = LIMIT_MIN, max = LIMIT_MAX)]
    OutOfRange(i64),
}

impl Limit {
    #[must_use]
    pub fn new(limit: i64) -> Option<Self> {
        if (LIMIT_MIN..=LIMIT_MAX).contains(&limit) {
            u16::try_from(limit).ok().map(Self)
        } else {
            None
        }
    }

    #[must_use]
    pub fn get(self) -> u16 {
        self.0
    }
}

impl Display for Limit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for Limit {
    type Err = InvalidLimitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if !(1..=LIMIT_MAX_CHARS).contains(&length) {
            return Err(InvalidLimitError::Length(length));
        }

        let limit = i64::from_str(s)?;
        Self::new(limit).ok_or(InvalidLimitError::OutOfRange(limit))
    }
}

#[cfg(test)]
mod tests {
    use crate::model::listing::{InvalidLimitError, Limit, SortOrder};

    #[test]
    fn sort_is_case_sensitive() {
        assert_eq!("asc".parse(), Ok(SortOrder::Ascending));
        assert_eq!("desc".parse(), Ok(SortOrder::Descending));

        for sort in ["DESC", "Asc", "ascending", " asc", "up"] {
            assert!(sort.parse::<SortOrder>().is_err(), "{sort} should be rejected");
        }
    }

    #[test]
    fn sort_renders_uppercase() {
        assert_eq!(SortOrder::Ascending.as_sql(), "ASC");
        assert_eq!(SortOrder::Descending.as_sql(), "DESC");
    }

    #[test]
    fn accepts_short_limits_in_range() {
        for (raw, expected) in [("1", 1), ("10", 10), ("999", 999), ("007", 7), ("+5", 5)] {
            let limit: Limit = raw.parse().unwrap();
            assert_eq!(limit.get(), expected);
            assert_eq!(limit.to_string(), expected.to_string());
        }
    }

    #[test]
    fn rejects_limits_by_length_before_range() {
        assert_eq!("1000".parse::<Limit>(), Err(InvalidLimitError::Length(4)));
        assert_eq!("10000".parse::<Limit>(), Err(InvalidLimitError::Length(5)));
        assert_eq!("99999".parse::<Limit>(), Err(InvalidLimitError::Length(5)));
        assert_eq!("".parse::<Limit>(), Err(InvalidLimitError::Length(0)));
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert_eq!("0".parse::<Limit>(), Err(InvalidLimitError::OutOfRange(0)));
        assert_eq!("-1".parse::<Limit>(), Err(InvalidLimitError::OutOfRange(-1)));
        assert_eq!("-99".parse::<Limit>(), Err(InvalidLimitError::OutOfRange(-99)));
        assert!(matches!(
            "abc".parse::<Limit>(),
            Err(InvalidLimitError::NotAnInteger(_))
        ));
        assert!(matches!(
            "1.5".parse::<Limit>(),
            Err(InvalidLimitError::NotAnInteger(_))
        ));
    }

    #[test]
    fn new_covers_the_full_range() {
        assert_eq!(Limit::new(10_000).map(Limit::get), Some(10_000));
        assert!(Limit::new(10_001).is_none());
        assert!(Limit::new(0).is_none());
    }
}
