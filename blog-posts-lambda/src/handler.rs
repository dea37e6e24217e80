use crate::store::{Connect, PostStore};
use blog_posts_common::model::{
    ModelValidationError,
    listing::{Limit, SortOrder},
    request::PostsRequest,
    response::{PostsResponse, ResponseStatus},
};
use blog_posts_db::{client::DbError, query::ListQuery, variant::PostsVariant};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Error connecting to database: {0}")]
    Connect(DbError),
    #[error("Request rejected: {0}")]
    Validation(#[from] ModelValidationError),
    #[error("Error querying database: {0}")]
    Query(DbError),
}

impl HandlerError {
    #[must_use]
    pub fn status(&self) -> ResponseStatus {
        match self {
            HandlerError::Validation(_) => ResponseStatus::BadRequest,
            HandlerError::Connect(_) | HandlerError::Query(_) => {
                ResponseStatus::InternalServerError
            }
        }
    }

    /// The message reported back to the caller, without driver details.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            HandlerError::Connect(_) => "Error connecting to database",
            HandlerError::Validation(err) => err.message(),
            HandlerError::Query(_) => "Error querying database",
        }
    }
}

impl From<HandlerError> for PostsResponse {
    fn from(err: HandlerError) -> Self {
        let status = err.status();

        if status == ResponseStatus::InternalServerError {
            error!(error = %err, status = status.code(), "Replying with error");
        } else {
            warn!(error = %err, status = status.code(), "Replying with error");
        }

        PostsResponse::failure(status, err.message())
    }
}

/// Serves one handler variant: a single post lookup when the request
/// carries an identifier, a post listing otherwise.
#[derive(Clone, Debug)]
pub struct PostsHandler<C> {
    variant: PostsVariant,
    connector: C,
}

impl<C: Connect> PostsHandler<C> {
    #[must_use]
    pub fn new(variant: PostsVariant, connector: C) -> Self {
        Self { variant, connector }
    }

    /// Never fails; every error is reported through the response.
    pub async fn handle(&self, request: &impl PostsRequest) -> PostsResponse {
        self.try_handle(request)
            .await
            .unwrap_or_else(PostsResponse::from)
    }

    async fn try_handle(
        &self,
        request: &impl PostsRequest,
    ) -> Result<PostsResponse, HandlerError> {
        let mut store = self
            .connector
            .connect()
            .await
            .map_err(HandlerError::Connect)?;

        let response = self.respond(&mut store, request).await;

        if let Err(err) = store.close().await {
            warn!(error = %err, "Error closing database connection");
        }

        response
    }

    async fn respond(
        &self,
        store: &mut C::Store,
        request: &impl PostsRequest,
    ) -> Result<PostsResponse, HandlerError> {
        match request.identifier() {
            Some(identifier) => self.fetch_post(store, identifier).await,
            None => self.fetch_posts(store, request.sort(), request.limit()).await,
        }
    }

    async fn fetch_post(
        &self,
        store: &mut C::Store,
        identifier: &str,
    ) -> Result<PostsResponse, HandlerError> {
        let identifier = self
            .variant
            .identifier
            .validate(identifier)
            .map_err(ModelValidationError::from)?;

        let posts = store
            .fetch_posts_by_identifier(self.variant.select_by_identifier, identifier)
            .await
            .map_err(HandlerError::Query)?;

        Ok(PostsResponse::lookup(posts))
    }

    async fn fetch_posts(
        &self,
        store: &mut C::Store,
        sort: Option<&str>,
        limit: Option<&str>,
    ) -> Result<PostsResponse, HandlerError> {
        let mut query = ListQuery::new(self.variant.select_by_filters);

        if let Some(sort) = sort {
            let sort = sort
                .parse::<SortOrder>()
                .map_err(ModelValidationError::from)?;
            query = query.sorted(sort);
        }
        if let Some(limit) = limit {
            let limit = limit
                .parse::<Limit>()
                .map_err(ModelValidationError::from)?;
            query = query.limited(limit);
        }

        let posts = store
            .fetch_posts(&query)
            .await
            .map_err(HandlerError::Query)?;

        Ok(PostsResponse::listing(posts))
    }
}
