mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use snaplink::web::handlers::{home_page_handler, shorten_form_handler};
use sqlx::PgPool;

fn test_app(state: snaplink::AppState) -> Router {
    Router::new()
        .route("/", get(home_page_handler).post(shorten_form_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_home_page_loads(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("URL Shortener"));
}

#[sqlx::test]
async fn test_shorten_success(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server
        .post("/")
        .form(&[("url", "https://example.com/page")])
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("URL shortened successfully!"));
    assert!(body.contains("http://localhost:3000/"));

    assert_eq!(common::link_count(&pool).await, 1);
    assert_eq!(common::qr_image_count(&pool).await, 1);
}

#[sqlx::test]
async fn test_shorten_stores_normalized_url(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    server.post("/").form(&[("url", "example.com")]).await;

    let stored: String =
        sqlx::query_scalar::<_, String>("SELECT original_url FROM links")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored, "https://example.com/");
}

#[sqlx::test]
async fn test_resubmission_reuses_existing_link(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    let first = server
        .post("/")
        .form(&[("url", "https://dedup.example.com")])
        .await;
    assert!(first.text().contains("URL shortened successfully!"));

    let second = server
        .post("/")
        .form(&[("url", "https://dedup.example.com")])
        .await;
    assert!(second.text().contains("URL already shortened!"));

    // Exactly one store insert, and both responses carry the same short ID.
    assert_eq!(common::link_count(&pool).await, 1);
    let short_id: String = sqlx::query_scalar::<_, String>("SELECT short_id FROM links")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(first.text().contains(&short_id));
    assert!(second.text().contains(&short_id));
}

#[sqlx::test]
async fn test_generated_short_id_shape(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    server
        .post("/")
        .form(&[("url", "https://example.com")])
        .await;

    let short_id: String = sqlx::query_scalar::<_, String>("SELECT short_id FROM links")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(short_id.len(), 6);
    assert!(short_id.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[sqlx::test]
async fn test_invalid_url_shows_error_without_writes(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server.post("/").form(&[("url", "not-a-url")]).await;

    response.assert_status_ok();
    assert!(response.text().contains("Please enter a valid URL"));
    assert_eq!(common::link_count(&pool).await, 0);
    assert_eq!(common::qr_image_count(&pool).await, 0);
}

#[sqlx::test]
async fn test_empty_url_shows_error(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server.post("/").form(&[("url", "")]).await;

    response.assert_status_ok();
    assert!(response.text().contains("Please enter a URL"));
    assert_eq!(common::link_count(&pool).await, 0);
}
