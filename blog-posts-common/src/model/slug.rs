use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Lowercase alphanumeric segments joined by single hyphens.
pub const SLUG_PATTERN: &str = "^[a-z0-9]+(?:-[a-z0-9]+)*$";

static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SLUG_PATTERN).expect("SLUG_PATTERN is a valid regex"));

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Error)]
#[error("The slug is invalid: {0:?}")]
pub struct InvalidSlugError(String);

#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_REGEX.is_match(slug)
}

/// Hands `slug` back unchanged if it is well-formed.
pub fn validate_slug(slug: &str) -> Result<&str, InvalidSlugError> {
    if is_valid_slug(slug) {
        Ok(slug)
    } else {
        Err(InvalidSlugError(slug.to_owned()))
    }
}
