use blog_posts_common::model::post::{Post, PostTimestamp};
use sqlx::{
    Decode, FromRow, MySql, Type, TypeInfo, ValueRef,
    error::{BoxDynError, UnexpectedNullError},
    mysql::{MySqlTypeInfo, MySqlValueRef},
};
use time::{OffsetDateTime, PrimitiveDateTime};

/// One row of the `posts` table.
///
/// Columns a template doesn't select are left as `None`.
#[derive(Clone, Eq, PartialEq, Debug, Hash, FromRow)]
pub(crate) struct PostRecord {
    pub id: StoredId,
    pub title: String,
    #[sqlx(default)]
    pub slug: Option<String>,
    #[sqlx(default)]
    pub teaser: Option<String>,
    #[sqlx(default)]
    pub teaser_image: Option<String>,
    #[sqlx(default)]
    pub header_image: Option<String>,
    pub published_at: StoredTimestamp,
    pub updated_at: StoredTimestamp,
    #[sqlx(default)]
    pub content: Option<String>,
}

/// A post id read from any signed or unsigned integer column.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub(crate) struct StoredId(pub u64);

impl Type<MySql> for StoredId {
    fn type_info() -> MySqlTypeInfo {
        <u64 as Type<MySql>>::type_info()
    }

    fn compatible(ty: &MySqlTypeInfo) -> bool {
        <u64 as Type<MySql>>::compatible(ty) || <i64 as Type<MySql>>::compatible(ty)
    }
}

impl<'r> Decode<'r, MySql> for StoredId {
    fn decode(value: MySqlValueRef<'r>) -> Result<Self, BoxDynError> {
        let unsigned = value.type_info().name().ends_with("UNSIGNED");

        let id = if unsigned {
            <u64 as Decode<MySql>>::decode(value)?
        } else {
            u64::try_from(<i64 as Decode<MySql>>::decode(value)?)?
        };
        Ok(Self(id))
    }
}

/// A `DATETIME` or `TIMESTAMP` value, taken as the wall-clock time stored.
///
/// MySQL's zero date decodes to `None`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub(crate) struct StoredTimestamp(pub Option<PrimitiveDateTime>);

impl Type<MySql> for StoredTimestamp {
    fn type_info() -> MySqlTypeInfo {
        <OffsetDateTime as Type<MySql>>::type_info()
    }

    fn compatible(ty: &MySqlTypeInfo) -> bool {
        <OffsetDateTime as Type<MySql>>::compatible(ty)
    }
}

impl<'r> Decode<'r, MySql> for StoredTimestamp {
    fn decode(value: MySqlValueRef<'r>) -> Result<Self, BoxDynError> {
        match <OffsetDateTime as Decode<MySql>>::decode(value) {
            Ok(timestamp) => Ok(Self(Some(PrimitiveDateTime::new(
                timestamp.date(),
                timestamp.time(),
            )))),
            Err(err) if err.is::<UnexpectedNullError>() => Ok(Self(None)),
            Err(err) => Err(err),
        }
    }
}

impl From<StoredTimestamp> for PostTimestamp {
    fn from(value: StoredTimestamp) -> Self {
        PostTimestamp::new(value.0)
    }
}

impl From<PostRecord> for Post {
    fn from(value: PostRecord) -> Self {
        Self {
            id: value.id.0,
            title: value.title,
            slug: value.slug,
            teaser: value.teaser,
            teaser_image: value.teaser_image,
            header_image: value.header_image,
            published_at: value.published_at.into(),
            updated_at: value.updated_at.into(),
            content: value.content,
        }
    }
}
