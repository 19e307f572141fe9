//! Background worker applying click accounting updates.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;

/// Consumes click events from the channel and writes them to the store.
///
/// Accounting is fire-and-forget: a failed update is logged at WARN and
/// dropped, never retried and never surfaced to the visitor whose redirect
/// already completed. The worker runs until every sender is dropped.
pub async fn run_click_worker<R: LinkRepository>(
    mut rx: mpsc::Receiver<ClickEvent>,
    repository: Arc<R>,
) {
    while let Some(event) = rx.recv().await {
        if let Err(e) = repository
            .update_click(event.link_id, event.new_count, event.accessed_at)
            .await
        {
            tracing::warn!(
                link_id = event.link_id,
                "Failed to record click: {e}, dropping event"
            );
        }
    }

    tracing::info!("Click worker stopped: channel closed");
}
