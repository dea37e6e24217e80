//! Looks up posts by numeric id, or lists them.

use blog_posts_common::model::request::PostIdRequest;
use blog_posts_db::variant::BY_POST_ID;
use blog_posts_lambda::runtime::{InitError, get_env, install_tracing, serve};

#[tokio::main]
async fn main() -> Result<(), InitError> {
    install_tracing();
    let env = get_env()?;

    serve::<PostIdRequest>(BY_POST_ID, env).await
}
