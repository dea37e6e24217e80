//! Incoming invocation payloads.
//!
//! Empty strings and `null` are treated the same as a missing field.

use serde::Deserialize;

/// Read access to the optional fields every variant's request carries.
pub trait PostsRequest {
    /// The slug or post id selecting a single post, if any.
    fn identifier(&self) -> Option<&str>;
    fn sort(&self) -> Option<&str>;
    fn limit(&self) -> Option<&str>;
}

/// Request accepted by the slug keyed handler.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize)]
#[serde(default)]
pub struct SlugRequest {
    pub slug: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<String>,
}

/// Request accepted by the post id keyed handler.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostIdRequest {
    pub post_id: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<String>,
}

fn non_empty(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|value| !value.is_empty())
}

impl PostsRequest for SlugRequest {
    fn identifier(&self) -> Option<&str> {
        non_empty(self.slug.as_ref())
    }

    fn sort(&self) -> Option<&str> {
        non_empty(self.sort.as_ref())
    }

    fn limit(&self) -> Option<&str> {
        non_empty(self.limit.as_ref())
    }
}

impl PostsRequest for PostIdRequest {
    fn identifier(&self) -> Option<&str> {
        non_empty(self.post_id.as_ref())
    }

    fn sort(&self) -> Option<&str> {
        non_empty(self.sort.as_ref())
    }

    fn limit(&self) -> Option<&str> {
        non_empty(self.limit.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::request::{PostIdRequest, PostsRequest, SlugRequest};

    #[test]
    fn missing_empty_and_null_fields_are_absent() {
        let request: SlugRequest =
            serde_json::from_str(r#"{"slug": "", "sort": null}"#).unwrap();

        assert_eq!(request.identifier(), None);
        assert_eq!(request.sort(), None);
        assert_eq!(request.limit(), None);
    }

    #[test]
    fn field_names_are_case_sensitive() {
        let request: PostIdRequest =
            serde_json::from_str(r#"{"postId": "12", "limit": "5", "Sort": "asc"}"#).unwrap();

        assert_eq!(request.identifier(), Some("12"));
        assert_eq!(request.limit(), Some("5"));
        assert_eq!(request.sort(), None);

        let request: PostIdRequest = serde_json::from_str(r#"{"post_id": "12"}"#).unwrap();
        assert_eq!(request.identifier(), None);
    }

    #[test]
    fn slug_request_reads_slug_field() {
        let request: SlugRequest =
            serde_json::from_str(r#"{"slug": "hello-world", "sort": "desc"}"#).unwrap();

        assert_eq!(request.identifier(), Some("hello-world"));
        assert_eq!(request.sort(), Some("desc"));
    }
}
