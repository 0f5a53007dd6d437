#[tokio::main]
async fn main() {
    blogapi_observability::init();

    let database_url = std::env::var("BLOGAPI_DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://blogapi.db?mode=rwc".to_string());

    let bearer_token = std::env::var("BLOGAPI_BEARER_TOKEN").unwrap_or_else(|_| {
        tracing::warn!("BLOGAPI_BEARER_TOKEN not set; using insecure dev default");
        "valid-token".to_string()
    });

    let bind_addr =
        std::env::var("BLOGAPI_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let store = blogapi_store::Store::connect(&database_url)
        .await
        .expect("failed to open database");
    store
        .ensure_schema()
        .await
        .expect("failed to ensure database schema");

    let app = blogapi_api::app::build_app(store, bearer_token);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
