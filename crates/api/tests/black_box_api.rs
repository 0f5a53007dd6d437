use blogapi_store::Store;
use reqwest::StatusCode;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;

const TOKEN: &str = "valid-token";

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, but over an in-memory database and an
        // ephemeral port. One pooled connection keeps the memory db shared.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory sqlite");
        let store = Store::from_pool(pool);
        store.ensure_schema().await.expect("failed to ensure schema");

        let app = blogapi_api::app::build_app(store, TOKEN.to_string());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create_user(client: &reqwest::Client, base_url: &str, name: &str, email: &str) -> Value {
    let res = client
        .post(format!("{}/api/users", base_url))
        .bearer_auth(TOKEN)
        .json(&json!({ "name": name, "email": email }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json().await.unwrap()
}

#[tokio::test]
async fn create_then_get_returns_the_stored_entity() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_user(&client, &srv.base_url, "Ada", "ada@example.com").await;
    let id = created["id"].as_i64().expect("created user must carry an id");
    assert!(id > 0);

    let res = client
        .get(format!("{}/api/users/{}", srv.base_url, id))
        .bearer_auth(TOKEN)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let fetched: Value = res.json().await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched["name"], "Ada");
    assert_eq!(fetched["email"], "ada@example.com");
}

#[tokio::test]
async fn create_sets_a_location_reference() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/users", srv.base_url))
        .bearer_auth(TOKEN)
        .json(&json!({ "name": "Ada", "email": "ada@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let location = res
        .headers()
        .get(reqwest::header::LOCATION)
        .expect("201 must carry a Location header")
        .to_str()
        .unwrap()
        .to_owned();
    let body: Value = res.json().await.unwrap();
    assert_eq!(location, format!("/api/users/{}", body["id"]));
}

#[tokio::test]
async fn create_ignores_a_caller_supplied_id() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let first = create_user(&client, &srv.base_url, "A", "a@example.com").await;
    let res = client
        .post(format!("{}/api/users", srv.base_url))
        .bearer_auth(TOKEN)
        .json(&json!({ "id": first["id"], "name": "B", "email": "b@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let second: Value = res.json().await.unwrap();
    assert_ne!(second["id"], first["id"]);
}

#[tokio::test]
async fn list_after_one_create_has_exactly_that_entity() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/users", srv.base_url))
        .bearer_auth(TOKEN)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let empty: Value = res.json().await.unwrap();
    assert_eq!(empty, json!([]));

    let created = create_user(&client, &srv.base_url, "Ada", "ada@example.com").await;

    let res = client
        .get(format!("{}/api/users", srv.base_url))
        .bearer_auth(TOKEN)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let listed: Value = res.json().await.unwrap();
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn missing_ids_report_not_found_on_get_update_delete() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/users/12345", srv.base_url))
        .bearer_auth(TOKEN)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "User not found" }));

    // Matching body id, so the id-match rule passes and the lookup misses.
    let res = client
        .put(format!("{}/api/users/12345", srv.base_url))
        .bearer_auth(TOKEN)
        .json(&json!({ "id": 12345, "name": "X", "email": "x@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .delete(format!("{}/api/users/12345", srv.base_url))
        .bearer_auth(TOKEN)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_with_mismatched_id_is_a_bad_request() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Never-existed path id: the mismatch check fires before any lookup.
    let res = client
        .put(format!("{}/api/blogs/5", srv.base_url))
        .bearer_auth(TOKEN)
        .json(&json!({ "id": 6, "title": "T", "content": "C" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "ID mismatch" }));

    // Existing row: still rejected.
    let created = create_user(&client, &srv.base_url, "Ada", "ada@example.com").await;
    let id = created["id"].as_i64().unwrap();
    let res = client
        .put(format!("{}/api/users/{}", srv.base_url, id))
        .bearer_auth(TOKEN)
        .json(&json!({ "id": id + 1, "name": "Ada", "email": "ada@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_replaces_fields_in_place() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_user(&client, &srv.base_url, "Ada", "ada@example.com").await;
    let id = created["id"].as_i64().unwrap();

    let res = client
        .put(format!("{}/api/users/{}", srv.base_url, id))
        .bearer_auth(TOKEN)
        .json(&json!({ "id": id, "name": "Ada Lovelace", "email": "lovelace@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(res.bytes().await.unwrap().is_empty());

    let fetched: Value = client
        .get(format!("{}/api/users/{}", srv.base_url, id))
        .bearer_auth(TOKEN)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        fetched,
        json!({ "id": id, "name": "Ada Lovelace", "email": "lovelace@example.com" })
    );
}

#[tokio::test]
async fn delete_removes_the_entity_for_good() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_user(&client, &srv.base_url, "Ada", "ada@example.com").await;
    let id = created["id"].as_i64().unwrap();

    let res = client
        .delete(format!("{}/api/users/{}", srv.base_url, id))
        .bearer_auth(TOKEN)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(res.bytes().await.unwrap().is_empty());

    let res = client
        .get(format!("{}/api/users/{}", srv.base_url, id))
        .bearer_auth(TOKEN)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bad_credentials_are_rejected_before_any_handler_runs() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let unauthorized = json!({ "error": "Unauthorized" });

    // No header at all.
    let res = client
        .get(format!("{}/api/users", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(res.json::<Value>().await.unwrap(), unauthorized);

    // Right scheme, wrong value.
    let res = client
        .get(format!("{}/api/users", srv.base_url))
        .header("Authorization", "Bearer wrong-token")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(res.json::<Value>().await.unwrap(), unauthorized);

    // Wrong scheme, right value.
    let res = client
        .get(format!("{}/api/users", srv.base_url))
        .header("Authorization", "Basic valid-token")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(res.json::<Value>().await.unwrap(), unauthorized);

    // Writes are gated exactly like reads.
    let res = client
        .post(format!("{}/api/blogs", srv.base_url))
        .json(&json!({ "title": "T", "content": "C" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unhandled_failures_become_one_opaque_response() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // No credential needed; the diagnostic path is exempt from the gate.
    let res = client
        .get(format!("{}/api/throw", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Internal server error." }));
}

#[tokio::test]
async fn blog_create_scenario() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/blogs", srv.base_url))
        .bearer_auth(TOKEN)
        .json(&json!({ "title": "Blog1", "content": "Content1" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: Value = res.json().await.unwrap();
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["title"], "Blog1");
    assert_eq!(body["content"], "Content1");
}
