//! # History Tasks

use std::sync::Arc;

use alloy_primitives::Address;
use async_channel::Sender;
use tokio::spawn;

use crate::app::events::AppEvent;
use crate::core::service::HistoryApi;

/// Spawn a history fetch and report it as [`AppEvent::HistoryResult`].
pub(crate) fn fetch_history(
    history: Arc<dyn HistoryApi>,
    chain_id: u64,
    owner: Address,
    limit: usize,
    event_tx: Sender<AppEvent>,
) {
    spawn(async move {
        let result = history.list_transactions(chain_id, owner, limit).await;
        match &result {
            Ok(records) => tracing::info!(
                chain_id,
                owner = %owner,
                count = records.len(),
                "Transaction history loaded"
            ),
            Err(e) => tracing::warn!(chain_id, owner = %owner, error = %e, "History fetch failed"),
        }
        let _ = event_tx
            .send(AppEvent::HistoryResult {
                owner,
                result: result.map_err(|e| e.to_string()),
            })
            .await;
    });
}
