use axum::Router;

pub mod blogs;
pub mod system;
pub mod users;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/api/users", users::router())
        .nest("/api/blogs", blogs::router())
}
