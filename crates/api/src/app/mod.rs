//! HTTP application wiring (axum router + middleware chain).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `errors.rs`: the single error channel crossing the HTTP boundary
//! - `../middleware.rs`: authentication gate + request logging

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use blogapi_store::Store;

use crate::middleware;

pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
///
/// Everything except the diagnostic `/api/throw` endpoint sits behind the
/// bearer-token gate. Interceptor order, outermost first: authentication,
/// request logging, handler.
pub fn build_app(store: Store, bearer_token: String) -> Router {
    let auth_state = middleware::AuthState {
        token: Arc::from(bearer_token),
    };

    let protected = routes::router()
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn_with_state(
                    auth_state,
                    middleware::auth_middleware,
                ))
                .layer(axum::middleware::from_fn(middleware::trace_middleware)),
        )
        .layer(Extension(store));

    Router::new()
        .route("/api/throw", get(routes::system::throw))
        .merge(protected)
}
