use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use portfolio_types::{BlogPost, BlogPostUpdate, ListPostsOptions, NewBlogPost, Validated};

use crate::{
    error::{ApiError, ApiResult},
    extract::JsonBody,
    state::AppState,
};

/// List blog posts
///
/// Without parameters every post is returned, newest first. The handler never
/// substitutes sample content for an empty collection.
#[utoipa::path(
    get,
    path = "/api/blog-posts",
    params(
        ("order" = Option<String>, Query, description = "`newest` (default) or `oldest`"),
        ("published" = Option<bool>, Query, description = "Only posts with this published flag")
    ),
    responses(
        (status = 200, description = "List of blog posts", body = [BlogPost]),
        (status = 400, description = "Invalid query", body = crate::error::ErrorBody)
    ),
    tag = "blog"
)]
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListPostsOptions>, QueryRejection>,
) -> ApiResult<Json<Vec<BlogPost>>> {
    let Query(options) = query?;

    let posts = state.persist.list_posts(&options).await?;
    tracing::debug!(count = posts.len(), ?options, "Listed blog posts");

    Ok(Json(posts))
}

/// Get a blog post by slug
#[utoipa::path(
    get,
    path = "/api/blog-posts/{slug}",
    params(
        ("slug" = String, Path, description = "Post slug")
    ),
    responses(
        (status = 200, description = "Blog post", body = BlogPost),
        (status = 404, description = "Post not found", body = crate::error::ErrorBody)
    ),
    tag = "blog"
)]
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<Json<BlogPost>> {
    let post = state
        .persist
        .get_post(&slug)
        .await?
        .ok_or(ApiError::PostNotFound(slug))?;

    Ok(Json(post))
}

/// Create a blog post
#[utoipa::path(
    post,
    path = "/api/blog-posts",
    request_body = NewBlogPost,
    responses(
        (status = 201, description = "Post created", body = BlogPost),
        (status = 400, description = "Invalid fields", body = crate::error::ErrorBody),
        (status = 409, description = "Slug already in use", body = crate::error::ErrorBody)
    ),
    tag = "blog"
)]
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<NewBlogPost>,
) -> ApiResult<(StatusCode, Json<BlogPost>)> {
    let input = input.validated()?;

    let post = state.persist.create_post(input).await?;
    tracing::info!(id = post.id, slug = %post.slug, "Blog post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// Rewrite a blog post's content fields
#[utoipa::path(
    put,
    path = "/api/blog-posts/{slug}",
    params(
        ("slug" = String, Path, description = "Post slug")
    ),
    request_body = BlogPostUpdate,
    responses(
        (status = 200, description = "Post updated", body = BlogPost),
        (status = 400, description = "Invalid fields", body = crate::error::ErrorBody),
        (status = 404, description = "Post not found", body = crate::error::ErrorBody)
    ),
    tag = "blog"
)]
pub async fn update_post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    JsonBody(update): JsonBody<BlogPostUpdate>,
) -> ApiResult<Json<BlogPost>> {
    let update = update.validated()?;

    let post = state.persist.update_post(&slug, update).await?;
    tracing::info!(id = post.id, slug = %post.slug, "Blog post updated");

    Ok(Json(post))
}
