use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::{AnalyticsService, LinkService};
use crate::domain::click_event::ClickEvent;
use crate::infrastructure::persistence::{PgBlobRepository, PgLinkRepository};

/// Shared application state injected into every handler.
///
/// All members are explicitly owned and cheaply cloneable; tests substitute
/// the repositories behind the services with their own instances.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository, PgBlobRepository>>,
    pub analytics_service: Arc<AnalyticsService<PgLinkRepository>>,
    pub blobs: Arc<PgBlobRepository>,
    pub click_sender: mpsc::Sender<ClickEvent>,
}
