//! CRUD handlers for `/api/blogs`. Same shape as [`crate::app::routes::users`].

use axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use blogapi_core::Blog;
use blogapi_store::{DeleteOutcome, ReplaceOutcome, Store};

use crate::app::errors::ApiError;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_blogs).post(create_blog))
        .route("/:id", get(get_blog).put(update_blog).delete(delete_blog))
}

pub async fn list_blogs(Extension(store): Extension<Store>) -> Result<Response, ApiError> {
    let mut conn = store.acquire().await?;
    let blogs = blogapi_store::blogs::list(&mut conn).await?;
    Ok((StatusCode::OK, Json(blogs)).into_response())
}

pub async fn get_blog(
    Extension(store): Extension<Store>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let mut conn = store.acquire().await?;
    match blogapi_store::blogs::get(&mut conn, id).await? {
        Some(blog) => Ok((StatusCode::OK, Json(blog)).into_response()),
        None => Err(ApiError::NotFound("Blog")),
    }
}

pub async fn create_blog(
    Extension(store): Extension<Store>,
    Json(body): Json<Blog>,
) -> Result<Response, ApiError> {
    let mut conn = store.acquire().await?;
    let created = blogapi_store::blogs::insert(&mut conn, &body).await?;

    let location = format!("/api/blogs/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    )
        .into_response())
}

pub async fn update_blog(
    Extension(store): Extension<Store>,
    Path(id): Path<i64>,
    Json(body): Json<Blog>,
) -> Result<Response, ApiError> {
    if body.id != id {
        return Err(ApiError::id_mismatch());
    }

    let mut conn = store.acquire().await?;
    match blogapi_store::blogs::replace(&mut conn, id, &body).await? {
        ReplaceOutcome::Replaced => Ok(StatusCode::NO_CONTENT.into_response()),
        ReplaceOutcome::Missing => Err(ApiError::NotFound("Blog")),
        ReplaceOutcome::Conflict => Err(ApiError::Internal(anyhow::anyhow!(
            "blog {id} changed concurrently during update"
        ))),
    }
}

pub async fn delete_blog(
    Extension(store): Extension<Store>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let mut conn = store.acquire().await?;
    match blogapi_store::blogs::delete(&mut conn, id).await? {
        DeleteOutcome::Deleted => Ok(StatusCode::NO_CONTENT.into_response()),
        DeleteOutcome::Missing => Err(ApiError::NotFound("Blog")),
    }
}
