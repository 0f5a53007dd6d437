//! CRUD handlers for `/api/users`.
//!
//! Each handler checks one connection out of the pool at entry; the guard
//! returns it when the handler exits, success or not.

use axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use blogapi_core::User;
use blogapi_store::{DeleteOutcome, ReplaceOutcome, Store};

use crate::app::errors::ApiError;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

pub async fn list_users(Extension(store): Extension<Store>) -> Result<Response, ApiError> {
    let mut conn = store.acquire().await?;
    let users = blogapi_store::users::list(&mut conn).await?;
    Ok((StatusCode::OK, Json(users)).into_response())
}

pub async fn get_user(
    Extension(store): Extension<Store>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let mut conn = store.acquire().await?;
    match blogapi_store::users::get(&mut conn, id).await? {
        Some(user) => Ok((StatusCode::OK, Json(user)).into_response()),
        None => Err(ApiError::NotFound("User")),
    }
}

pub async fn create_user(
    Extension(store): Extension<Store>,
    Json(body): Json<User>,
) -> Result<Response, ApiError> {
    let mut conn = store.acquire().await?;
    let created = blogapi_store::users::insert(&mut conn, &body).await?;

    let location = format!("/api/users/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    )
        .into_response())
}

pub async fn update_user(
    Extension(store): Extension<Store>,
    Path(id): Path<i64>,
    Json(body): Json<User>,
) -> Result<Response, ApiError> {
    // No silent correction: the body must address the same id as the path.
    if body.id != id {
        return Err(ApiError::id_mismatch());
    }

    let mut conn = store.acquire().await?;
    match blogapi_store::users::replace(&mut conn, id, &body).await? {
        ReplaceOutcome::Replaced => Ok(StatusCode::NO_CONTENT.into_response()),
        ReplaceOutcome::Missing => Err(ApiError::NotFound("User")),
        ReplaceOutcome::Conflict => Err(ApiError::Internal(anyhow::anyhow!(
            "user {id} changed concurrently during update"
        ))),
    }
}

pub async fn delete_user(
    Extension(store): Extension<Store>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let mut conn = store.acquire().await?;
    match blogapi_store::users::delete(&mut conn, id).await? {
        DeleteOutcome::Deleted => Ok(StatusCode::NO_CONTENT.into_response()),
        DeleteOutcome::Missing => Err(ApiError::NotFound("User")),
    }
}
