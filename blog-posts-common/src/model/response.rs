use crate::model::post::Post;
use serde::Serialize;

pub const SUCCESS_MESSAGE: &str = "Success";
pub const POST_NOT_FOUND_MESSAGE: &str = "Post not found";
pub const NO_POSTS_FOUND_MESSAGE: &str = "No posts found";

/// The HTTP-style status codes a response can carry.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Serialize)]
#[serde(into = "u16")]
pub enum ResponseStatus {
    Ok,
    BadRequest,
    NotFound,
    InternalServerError,
}

impl ResponseStatus {
    #[must_use]
    pub fn code(self) -> u16 {
        match self {
            ResponseStatus::Ok => 200,
            ResponseStatus::BadRequest => 400,
            ResponseStatus::NotFound => 404,
            ResponseStatus::InternalServerError => 500,
        }
    }
}

impl From<ResponseStatus> for u16 {
    fn from(value: ResponseStatus) -> Self {
        value.code()
    }
}

/// The envelope every invocation replies with, errors included.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsResponse {
    pub status_code: ResponseStatus,
    pub message: String,
    pub count: usize,
    pub posts: Vec<Post>,
}

impl PostsResponse {
    /// An empty response, used for every rejection and failure.
    #[must_use]
    pub fn failure(status_code: ResponseStatus, message: &str) -> Self {
        Self {
            status_code,
            message: message.to_owned(),
            count: 0,
            posts: Vec::new(),
        }
    }

    /// Maps the rows of a single post lookup.
    ///
    /// Any number of rows is reported with a count of one.
    #[must_use]
    pub fn lookup(posts: Vec<Post>) -> Self {
        if posts.is_empty() {
            return Self::failure(ResponseStatus::NotFound, POST_NOT_FOUND_MESSAGE);
        }

        Self {
            status_code: ResponseStatus::Ok,
            message: SUCCESS_MESSAGE.to_owned(),
            count: 1,
            posts,
        }
    }

    /// Maps the rows of a post listing.
    #[must_use]
    pub fn listing(posts: Vec<Post>) -> Self {
        if posts.is_empty() {
            return Self::failure(ResponseStatus::NotFound, NO_POSTS_FOUND_MESSAGE);
        }

        Self {
            status_code: ResponseStatus::Ok,
            message: SUCCESS_MESSAGE.to_owned(),
            count: posts.len(),
            posts,
        }
    }
}
