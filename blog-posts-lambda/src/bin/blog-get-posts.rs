//! Looks up posts by slug, or lists them.

use blog_posts_common::model::request::SlugRequest;
use blog_posts_db::variant::BY_SLUG;
use blog_posts_lambda::runtime::{InitError, get_env, install_tracing, serve};

#[tokio::main]
async fn main() -> Result<(), InitError> {
    install_tracing();
    let env = get_env()?;

    serve::<SlugRequest>(BY_SLUG, env).await
}
