pub mod listing;
pub mod post;
pub mod request;
pub mod response;
pub mod slug;

use crate::model::{
    listing::{InvalidLimitError, InvalidSortError},
    slug::InvalidSlugError,
};
use thiserror::Error;

#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum ModelValidationError {
    #[error(transparent)]
    Slug(#[from] InvalidSlugError),
    #[error(transparent)]
    Sort(#[from] InvalidSortError),
    #[error(transparent)]
    Limit(#[from] InvalidLimitError),
}

impl ModelValidationError {
    /// The message reported back to the caller.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ModelValidationError::Slug(_) => "Invalid slug",
            ModelValidationError::Sort(_) => "Invalid sort",
            ModelValidationError::Limit(_) => "Invalid limit",
        }
    }
}
