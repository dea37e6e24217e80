use blog_posts_common::model::post::Post;
use blog_posts_db::{
    client::{DbClient, DbError, MySqlConnectOptions, connect_options},
    query::ListQuery,
};
use std::fmt::{Debug, Formatter};

/// Opens a fresh [`PostStore`] for every invocation.
pub trait Connect {
    type Store: PostStore;

    fn connect(&self) -> impl Future<Output = Result<Self::Store, DbError>> + Send;
}

/// The read queries a handler runs against an open connection.
pub trait PostStore {
    fn fetch_posts_by_identifier(
        &mut self,
        sql: &str,
        identifier: &str,
    ) -> impl Future<Output = Result<Vec<Post>, DbError>> + Send;

    fn fetch_posts(
        &mut self,
        query: &ListQuery<'_>,
    ) -> impl Future<Output = Result<Vec<Post>, DbError>> + Send;

    fn close(self) -> impl Future<Output = Result<(), DbError>> + Send;
}

#[derive(Clone)]
pub struct MySqlConnector {
    options: MySqlConnectOptions,
}

impl MySqlConnector {
    /// Fails on anything but a `mysql://` URL, before any invocation runs.
    pub fn new(database_url: &str) -> Result<Self, DbError> {
        Ok(Self {
            options: connect_options(database_url)?,
        })
    }
}

impl Debug for MySqlConnector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlConnector")
            .field("options", &"[redacted]")
            .finish()
    }
}

impl Connect for MySqlConnector {
    type Store = DbClient;

    async fn connect(&self) -> Result<DbClient, DbError> {
        DbClient::connect(&self.options).await
    }
}

impl PostStore for DbClient {
    async fn fetch_posts_by_identifier(
        &mut self,
        sql: &str,
        identifier: &str,
    ) -> Result<Vec<Post>, DbError> {
        DbClient::fetch_posts_by_identifier(self, sql, identifier).await
    }

    async fn fetch_posts(&mut self, query: &ListQuery<'_>) -> Result<Vec<Post>, DbError> {
        DbClient::fetch_posts(self, query).await
    }

    async fn close(self) -> Result<(), DbError> {
        DbClient::close(self).await
    }
}

#[cfg(test)]
mod tests {
    use crate::store::MySqlConnector;
    use blog_posts_db::client::DbError;

    #[test]
    fn debug_hides_credentials() {
        let connector = MySqlConnector::new("mysql://blog:hunter2@db/blog").unwrap();

        assert!(!format!("{connector:?}").contains("hunter2"));
    }

    #[test]
    fn go_driver_dsn_fails_up_front() {
        let result = MySqlConnector::new("blog:hunter2@tcp(db:3306)/blog");

        assert!(matches!(result, Err(DbError::InvalidUrl(_))));
    }
}
