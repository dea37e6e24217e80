use blog_posts_common::model::listing::{Limit, SortOrder};

/// Column every listing is ordered by.
pub const SORT_COLUMN: &str = "published_at";

/// A listing query: a fixed template plus validated sort and limit clauses.
///
/// Nothing but the template, [`SortOrder::as_sql`] and the re-rendered
/// [`Limit`] ever ends up in the SQL text.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct ListQuery<'a> {
    template: &'a str,
    sort: Option<SortOrder>,
    limit: Option<Limit>,
}

impl<'a> ListQuery<'a> {
    #[must_use]
    pub fn new(template: &'a str) -> Self {
        Self {
            template,
            sort: None,
            limit: None,
        }
    }

    #[must_use]
    pub fn sorted(self, sort: SortOrder) -> Self {
        Self {
            sort: Some(sort),
            ..self
        }
    }

    #[must_use]
    pub fn limited(self, limit: Limit) -> Self {
        Self {
            limit: Some(limit),
            ..self
        }
    }

    #[must_use]
    pub fn to_sql(&self) -> String {
        let sort = self
            .sort
            .map(|sort| format!(" ORDER BY {SORT_COLUMN} {}", sort.as_sql()))
            .unwrap_or_default();
        let limit = self
            .limit
            .map(|limit| format!(" LIMIT {limit}"))
            .unwrap_or_default();

        format!("{}{sort}{limit}", self.template)
    }
}
