use serde::{Serialize, Serializer, ser::Error};
use time::{
    PrimitiveDateTime, format_description::BorrowedFormatItem, macros::format_description,
};

/// How MySQL renders its zero date.
pub const ZERO_TIMESTAMP: &str = "0000-00-00 00:00:00";

const WHOLE_SECONDS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const FRACTIONAL_SECONDS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]");

/// A stored point in time, rendered like MySQL's own text format.
///
/// MySQL's zero date has no calendar value and is kept as `None`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct PostTimestamp(Option<PrimitiveDateTime>);

impl PostTimestamp {
    pub const ZERO: Self = Self(None);

    #[must_use]
    pub fn new(timestamp: Option<PrimitiveDateTime>) -> Self {
        Self(timestamp)
    }
}

impl From<PrimitiveDateTime> for PostTimestamp {
    fn from(value: PrimitiveDateTime) -> Self {
        Self(Some(value))
    }
}

impl Serialize for PostTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let Some(timestamp) = self.0 else {
            return serializer.serialize_str(ZERO_TIMESTAMP);
        };

        let format = if timestamp.nanosecond() == 0 {
            WHOLE_SECONDS
        } else {
            FRACTIONAL_SECONDS
        };
        let rendered = timestamp.format(format).map_err(S::Error::custom)?;
        serializer.serialize_str(&rendered)
    }
}

/// A stored blog post.
///
/// The optional fields are `None` both when the query that loaded the post
/// didn't select the column and when the column is NULL. Either way they
/// are left out of the JSON.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teaser: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teaser_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_image: Option<String>,
    pub published_at: PostTimestamp,
    pub updated_at: PostTimestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use crate::model::post::{Post, PostTimestamp};
    use serde_json::json;
    use time::macros::datetime;

    fn teaser_post() -> Post {
        Post {
            id: 3,
            title: "Hello".to_owned(),
            slug: Some("hello".to_owned()),
            teaser: Some("Short".to_owned()),
            teaser_image: None,
            header_image: None,
            published_at: datetime!(2024-03-01 12:30:05).into(),
            updated_at: datetime!(2024-03-02 08:00:00).into(),
            content: None,
        }
    }

    #[test]
    fn serializes_only_loaded_fields() {
        let value = serde_json::to_value(teaser_post()).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 3,
                "title": "Hello",
                "slug": "hello",
                "teaser": "Short",
                "published_at": "2024-03-01 12:30:05",
                "updated_at": "2024-03-02 08:00:00",
            })
        );
    }

    #[test]
    fn null_columns_are_omitted_like_unselected_ones() {
        let post = Post {
            teaser: None,
            ..teaser_post()
        };

        let value = serde_json::to_value(post).unwrap();

        assert!(value.get("teaser").is_none());
        assert!(value.get("content").is_none());
    }

    #[test]
    fn timestamps_keep_fractional_seconds() {
        let timestamp = PostTimestamp::from(datetime!(2024-03-01 12:30:05.25));

        assert_eq!(
            serde_json::to_value(timestamp).unwrap(),
            json!("2024-03-01 12:30:05.25")
        );
    }

    #[test]
    fn zero_date_renders_like_mysql() {
        assert_eq!(
            serde_json::to_value(PostTimestamp::ZERO).unwrap(),
            json!("0000-00-00 00:00:00")
        );
        assert_eq!(PostTimestamp::new(None), PostTimestamp::ZERO);
    }
}
