//! The two handler flavours and the SQL each one runs.

use blog_posts_common::model::slug::{InvalidSlugError, validate_slug};

/// How the single post lookup identifies its post.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum IdentifierKind {
    /// Must be a well-formed slug.
    Slug,
    /// Bound into the query as-is.
    PostId,
}

impl IdentifierKind {
    pub fn validate(self, identifier: &str) -> Result<&str, InvalidSlugError> {
        match self {
            IdentifierKind::Slug => validate_slug(identifier),
            IdentifierKind::PostId => Ok(identifier),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct PostsVariant {
    pub identifier: IdentifierKind,
    /// Takes the identifier as its only bound parameter.
    pub select_by_identifier: &'static str,
    /// No `WHERE` clause; sort and limit are appended to it.
    pub select_by_filters: &'static str,
}

pub const BY_SLUG: PostsVariant = PostsVariant {
    identifier: IdentifierKind::Slug,
    select_by_identifier: "SELECT id, title, slug, header_image, published_at, updated_at, content \
        FROM posts WHERE slug = ?",
    select_by_filters: "SELECT id, title, slug, teaser, teaser_image, published_at, updated_at \
        FROM posts",
};

pub const BY_POST_ID: PostsVariant = PostsVariant {
    identifier: IdentifierKind::PostId,
    select_by_identifier: "SELECT id, title, teaser, teaser_image, header_image, published_at, \
        updated_at, content FROM posts WHERE id = ?",
    select_by_filters: "SELECT id, title, teaser, published_at, updated_at, content FROM posts",
};
