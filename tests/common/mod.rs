#![allow(dead_code)]

use chrono::{DateTime, Utc};
use snaplink::application::services::{AnalyticsService, LinkService, ShortenerSettings};
use snaplink::domain::click_event::ClickEvent;
use snaplink::infrastructure::persistence::{PgBlobRepository, PgLinkRepository};
use snaplink::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;

pub fn test_settings() -> ShortenerSettings {
    ShortenerSettings {
        base_url: "http://localhost:3000".to_string(),
        short_id_length: 6,
        max_url_length: 2048,
        qr_module_size: 10,
        qr_quiet_zone: 5,
    }
}

pub fn create_test_state(pool: PgPool) -> (AppState, mpsc::Receiver<ClickEvent>) {
    let pool = Arc::new(pool);
    let (tx, rx) = mpsc::channel(100);

    let link_repo = Arc::new(PgLinkRepository::new(pool.clone()));
    let blob_repo = Arc::new(PgBlobRepository::new(pool.clone()));

    let link_service = Arc::new(LinkService::new(
        link_repo.clone(),
        blob_repo.clone(),
        test_settings(),
    ));
    let analytics_service = Arc::new(AnalyticsService::new(link_repo));

    let state = AppState {
        link_service,
        analytics_service,
        blobs: blob_repo,
        click_sender: tx,
    };

    (state, rx)
}

pub async fn create_test_link(pool: &PgPool, short_id: &str, url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO links (short_id, original_url, qr_url) \
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(short_id)
    .bind(url)
    .bind(format!("http://localhost:3000/qr/{short_id}.svg"))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn link_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn qr_image_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM qr_images")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn fetch_accounting(pool: &PgPool, short_id: &str) -> (i64, Option<DateTime<Utc>>) {
    sqlx::query_as::<_, (i64, Option<DateTime<Utc>>)>(
        "SELECT click_count, last_accessed FROM links WHERE short_id = $1",
    )
    .bind(short_id)
    .fetch_one(pool)
    .await
    .unwrap()
}
